//! Inventory API endpoints.

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;

use crate::auth::methods;
use crate::error::Result;
use crate::rest_api::models::{
    AddStockItemBody, ErrorResponse, SetMinimumStockBody, StockItemDto, UpdateStockBody,
};
use crate::rest_api::AppState;

/// GET /api/v1/inventory
pub async fn get_inventory(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    state
        .interceptor
        .authenticate(&methods::INVENTORY_GET_ALL, req.headers())
        .await?;

    let response = state.inventory.get_all_products().await?;
    let products: Vec<StockItemDto> = response.products.into_iter().map(StockItemDto::from).collect();

    Ok(HttpResponse::Ok().json(products))
}

/// GET /api/v1/inventory/{product_id}
pub async fn get_product_by_id(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    state
        .interceptor
        .authenticate(&methods::INVENTORY_GET_BY_ID, req.headers())
        .await?;

    let response = state.inventory.get_product_by_id(path.into_inner()).await?;

    match response.product {
        Some(product) => Ok(HttpResponse::Ok().json(StockItemDto::from(product))),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Product not found"))),
    }
}

/// POST /api/v1/inventory
pub async fn add_product(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<AddStockItemBody>,
) -> Result<HttpResponse> {
    let identity = state
        .interceptor
        .authenticate(&methods::INVENTORY_ADD, req.headers())
        .await?;

    let body = body.into_inner();
    info!(name = %body.name, "POST /api/v1/inventory");

    let response = state
        .inventory
        .add_product(body.into(), &identity.call_metadata())
        .await?;

    match response.product {
        Some(product) => Ok(HttpResponse::Created().json(StockItemDto::from(product))),
        None => Ok(HttpResponse::Created().finish()),
    }
}

/// PUT /api/v1/inventory/{product_id}/stock
pub async fn update_stock(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateStockBody>,
) -> Result<HttpResponse> {
    let identity = state
        .interceptor
        .authenticate(&methods::INVENTORY_UPDATE_STOCK, req.headers())
        .await?;

    let product_id = path.into_inner();
    info!(product_id = %product_id, amount = body.amount, "PUT /api/v1/inventory/{{id}}/stock");

    let response = state
        .inventory
        .update_stock(product_id, body.amount, &identity.call_metadata())
        .await?;

    match response.product {
        Some(product) => Ok(HttpResponse::Ok().json(StockItemDto::from(product))),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Product not found"))),
    }
}

/// PUT /api/v1/inventory/{product_id}/minimum-stock
pub async fn set_minimum_stock(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<SetMinimumStockBody>,
) -> Result<HttpResponse> {
    let identity = state
        .interceptor
        .authenticate(&methods::INVENTORY_SET_MINIMUM_STOCK, req.headers())
        .await?;

    let product_id = path.into_inner();
    info!(
        product_id = %product_id,
        minimum_stock = body.minimum_stock,
        "PUT /api/v1/inventory/{{id}}/minimum-stock"
    );

    let response = state
        .inventory
        .set_minimum_stock(product_id, body.minimum_stock, &identity.call_metadata())
        .await?;

    match response.product {
        Some(product) => Ok(HttpResponse::Ok().json(StockItemDto::from(product))),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Product not found"))),
    }
}
