//! Products (catalog) API endpoints.

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;

use crate::auth::methods;
use crate::clients::proto::products::UpdateProductRequest;
use crate::error::Result;
use crate::rest_api::models::{CreateProductBody, ProductDto, UpdateProductBody};
use crate::rest_api::AppState;

/// GET /api/v1/products
///
/// Returns an empty list when the catalog backend does not implement the
/// operation yet.
pub async fn get_products(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    state
        .interceptor
        .authenticate(&methods::PRODUCTS_LIST, req.headers())
        .await?;

    let response = state.products.get_products().await?;
    let products: Vec<ProductDto> = response.products.into_iter().map(ProductDto::from).collect();

    Ok(HttpResponse::Ok().json(products))
}

/// GET /api/v1/products/{id}
pub async fn get_product(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    state
        .interceptor
        .authenticate(&methods::PRODUCTS_GET, req.headers())
        .await?;

    let response = state.products.get_product(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response.product.map(ProductDto::from)))
}

/// POST /api/v1/products
pub async fn create_product(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateProductBody>,
) -> Result<HttpResponse> {
    let identity = state
        .interceptor
        .authenticate(&methods::PRODUCTS_CREATE, req.headers())
        .await?;

    let body = body.into_inner();
    info!(name = %body.name, "POST /api/v1/products");

    let response = state
        .products
        .create_product(body.into(), &identity.call_metadata())
        .await?;

    Ok(HttpResponse::Created().json(response.product.map(ProductDto::from)))
}

/// PUT /api/v1/products/{id}
pub async fn update_product(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateProductBody>,
) -> Result<HttpResponse> {
    let identity = state
        .interceptor
        .authenticate(&methods::PRODUCTS_UPDATE, req.headers())
        .await?;

    let id = path.into_inner();
    info!(product_id = %id, "PUT /api/v1/products/{{id}}");

    let body = body.into_inner();
    let request = UpdateProductRequest {
        id,
        name: body.name,
        description: body.description,
        price: body.price,
        category: body.category,
    };

    let response = state
        .products
        .update_product(request, &identity.call_metadata())
        .await?;

    Ok(HttpResponse::Ok().json(response.product.map(ProductDto::from)))
}

/// DELETE /api/v1/products/{id}
pub async fn delete_product(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let identity = state
        .interceptor
        .authenticate(&methods::PRODUCTS_DELETE, req.headers())
        .await?;

    let id = path.into_inner();
    info!(product_id = %id, "DELETE /api/v1/products/{{id}}");

    let response = state
        .products
        .delete_product(id, &identity.call_metadata())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "deleted": response.deleted })))
}
