//! Orders API endpoints.
//!
//! All operations are identity-sensitive: the admitted caller's identity is
//! rendered into outbound metadata and forwarded to the orders backend.

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;

use crate::auth::methods;
use crate::clients::proto::orders::{
    CancelOrderRequest, CreateOrderRequest, FindOneOrderRequest, GetClientHistoryRequest,
    QueryOrdersRequest, UpdateOrderStatusRequest,
};
use crate::error::Result;
use crate::rest_api::models::{
    CancelOrderBody, CreateOrderBody, ErrorResponse, HistoryQuery, OrderDto, OrderListDto,
    OrdersQuery, UpdateOrderStatusBody,
};
use crate::rest_api::AppState;

/// POST /api/v1/orders
pub async fn create_order(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateOrderBody>,
) -> Result<HttpResponse> {
    let identity = state
        .interceptor
        .authenticate(&methods::ORDERS_CREATE, req.headers())
        .await?;

    let body = body.into_inner();
    // Orders placed without an explicit client id belong to the caller.
    let client_id = body
        .client_id
        .or_else(|| identity.context().map(|c| c.user_id.clone()))
        .unwrap_or_default();

    info!(client_id = %client_id, items = body.items.len(), "POST /api/v1/orders");

    let request = CreateOrderRequest {
        client_id,
        items: body.items.into_iter().map(Into::into).collect(),
    };

    let response = state
        .orders
        .create_order(request, &identity.call_metadata())
        .await?;

    match response.order {
        Some(order) => Ok(HttpResponse::Created().json(OrderDto::from(order))),
        None => Ok(HttpResponse::Created().finish()),
    }
}

/// GET /api/v1/orders
pub async fn find_all_orders(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<OrdersQuery>,
) -> Result<HttpResponse> {
    let identity = state
        .interceptor
        .authenticate(&methods::ORDERS_FIND_ALL, req.headers())
        .await?;

    let query = query.into_inner();
    let request = QueryOrdersRequest {
        client_id: query.client_id.unwrap_or_default(),
        status: query.status.unwrap_or_default(),
        page: query.page.unwrap_or(0),
        page_size: query.page_size.unwrap_or(0),
    };

    let response = state
        .orders
        .find_all_orders(request, &identity.call_metadata())
        .await?;

    Ok(HttpResponse::Ok().json(OrderListDto::from(response)))
}

/// GET /api/v1/orders/{id}
pub async fn find_one_order(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let identity = state
        .interceptor
        .authenticate(&methods::ORDERS_FIND_ONE, req.headers())
        .await?;

    let request = FindOneOrderRequest {
        order_id: path.into_inner(),
    };

    let response = state
        .orders
        .find_one_order(request, &identity.call_metadata())
        .await?;

    match response.order {
        Some(order) => Ok(HttpResponse::Ok().json(OrderDto::from(order))),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Order not found"))),
    }
}

/// PUT /api/v1/orders/{id}/status
pub async fn update_order_status(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateOrderStatusBody>,
) -> Result<HttpResponse> {
    let identity = state
        .interceptor
        .authenticate(&methods::ORDERS_UPDATE_STATUS, req.headers())
        .await?;

    let order_id = path.into_inner();
    info!(order_id = %order_id, status = %body.status, "PUT /api/v1/orders/{{id}}/status");

    let request = UpdateOrderStatusRequest {
        order_id,
        status: body.into_inner().status,
    };

    let response = state
        .orders
        .update_order_status(request, &identity.call_metadata())
        .await?;

    match response.order {
        Some(order) => Ok(HttpResponse::Ok().json(OrderDto::from(order))),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Order not found"))),
    }
}

/// POST /api/v1/orders/{id}/cancel
pub async fn cancel_order(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: Option<web::Json<CancelOrderBody>>,
) -> Result<HttpResponse> {
    let identity = state
        .interceptor
        .authenticate(&methods::ORDERS_CANCEL, req.headers())
        .await?;

    let order_id = path.into_inner();
    info!(order_id = %order_id, "POST /api/v1/orders/{{id}}/cancel");

    let request = CancelOrderRequest {
        order_id,
        reason: body
            .and_then(|b| b.into_inner().reason)
            .unwrap_or_default(),
    };

    let response = state
        .orders
        .cancel_order(request, &identity.call_metadata())
        .await?;

    match response.order {
        Some(order) => Ok(HttpResponse::Ok().json(OrderDto::from(order))),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Order not found"))),
    }
}

/// GET /api/v1/clients/{client_id}/orders
pub async fn get_client_history(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<HistoryQuery>,
) -> Result<HttpResponse> {
    let identity = state
        .interceptor
        .authenticate(&methods::ORDERS_CLIENT_HISTORY, req.headers())
        .await?;

    let request = GetClientHistoryRequest {
        client_id: path.into_inner(),
        page: query.page.unwrap_or(0),
        page_size: query.page_size.unwrap_or(0),
    };

    let response = state
        .orders
        .get_client_history(request, &identity.call_metadata())
        .await?;

    Ok(HttpResponse::Ok().json(OrderListDto::from(response)))
}
