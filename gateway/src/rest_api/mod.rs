//! REST dispatch layer
//!
//! Maps HTTP verbs/paths to adapter calls and normalized errors back to
//! HTTP status codes.
//!
//! Architecture:
//! ```text
//! Client (HTTP REST)
//!     ↓
//! Auth interceptor (allowlist / token cache / auth service)
//!     ↓
//! REST handler (this module) → RPC adapter → backend service
//! ```

pub mod auth;
pub mod inventory;
pub mod models;
pub mod orders;
pub mod products;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpRequest, HttpResponse};
use token_cache::TokenValidationCache;

use crate::adapters::{InventoryAdapter, OrdersAdapter, ProductsAdapter};
use crate::auth::{methods, AuthInterceptor, AuthServiceClient};
use crate::clients::ServiceClients;
use crate::config::Config;
use crate::error::Result;

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub interceptor: AuthInterceptor,
    pub auth_client: Arc<AuthServiceClient>,
    pub inventory: InventoryAdapter,
    pub products: ProductsAdapter,
    pub orders: OrdersAdapter,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let clients = ServiceClients::new(&config.services);
        let auth_client = Arc::new(AuthServiceClient::new(
            config.auth.base_url.clone(),
            Duration::from_secs(config.auth.request_timeout_secs),
        ));
        let cache = Arc::new(TokenValidationCache::new(Duration::from_secs(
            config.auth.cache_ttl_secs,
        )));

        Self {
            interceptor: AuthInterceptor::new(auth_client.clone(), cache),
            auth_client,
            inventory: InventoryAdapter::new(clients.inventory_channel()),
            products: ProductsAdapter::new(clients.products_channel()),
            orders: OrdersAdapter::new(clients.orders_channel()),
        }
    }
}

/// Route table; applied by `main` and by integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health)).service(
        web::scope("/api/v1")
            .route("/auth/login", web::post().to(auth::login))
            .route("/auth/logout", web::post().to(auth::logout))
            .route("/auth/validate", web::get().to(auth::validate))
            .route("/inventory", web::get().to(inventory::get_inventory))
            .route("/inventory", web::post().to(inventory::add_product))
            .route(
                "/inventory/{product_id}",
                web::get().to(inventory::get_product_by_id),
            )
            .route(
                "/inventory/{product_id}/stock",
                web::put().to(inventory::update_stock),
            )
            .route(
                "/inventory/{product_id}/minimum-stock",
                web::put().to(inventory::set_minimum_stock),
            )
            .route("/products", web::get().to(products::get_products))
            .route("/products", web::post().to(products::create_product))
            .route("/products/{id}", web::get().to(products::get_product))
            .route("/products/{id}", web::put().to(products::update_product))
            .route("/products/{id}", web::delete().to(products::delete_product))
            .route("/orders", web::post().to(orders::create_order))
            .route("/orders", web::get().to(orders::find_all_orders))
            .route("/orders/{id}", web::get().to(orders::find_one_order))
            .route("/orders/{id}/status", web::put().to(orders::update_order_status))
            .route("/orders/{id}/cancel", web::post().to(orders::cancel_order))
            .route(
                "/clients/{client_id}/orders",
                web::get().to(orders::get_client_history),
            ),
    );
}

/// Liveness probe. Allowlisted, but still routed through the interceptor
/// like every other entry point.
async fn health(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    state
        .interceptor
        .authenticate(&methods::HEALTH, req.headers())
        .await?;

    Ok(HttpResponse::Ok().body("ok"))
}
