use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::info;
use tracing_subscriber::prelude::*;

use api_gateway::config::Config;
use api_gateway::rest_api::{self, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Structured JSON logging for log aggregation; span context included
    // for tracing a call across the auth and adapter boundaries.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,api_gateway=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true),
        )
        .init();

    info!("Starting API gateway...");

    let config = Config::from_env()?;

    info!(
        inventory = %config.services.inventory_service,
        products = %config.services.products_service,
        orders = %config.services.orders_service,
        auth = %config.auth.base_url,
        cache_ttl_secs = config.auth.cache_ttl_secs,
        "Configuration loaded"
    );

    let state = AppState::from_config(&config);
    info!("Service clients initialized");

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("API gateway starting on http://{}", bind_addr);

    let workers = config.server.workers;
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(rest_api::configure)
    })
    .workers(workers)
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
