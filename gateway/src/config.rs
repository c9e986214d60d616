//! Configuration for the edge gateway
//!
//! Loads settings from environment variables with a `.env` fallback for
//! local development.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Backend gRPC endpoints
    pub services: ServiceEndpoints,

    /// Auth service + token cache configuration
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEndpoints {
    pub inventory_service: String,
    pub products_service: String,
    pub orders_service: String,

    /// gRPC connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// gRPC request timeout in seconds
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Auth service base URL (validate/login/logout live under it)
    pub base_url: String,

    /// Per-request timeout for auth service calls, in seconds
    pub request_timeout_secs: u64,

    /// Lifetime of cached token-validation decisions, in seconds
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    /// Falls back to defaults for development.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                workers: env::var("SERVER_WORKERS")
                    .ok()
                    .and_then(|w| w.parse().ok())
                    .unwrap_or_else(num_cpus::get),
            },
            services: ServiceEndpoints {
                inventory_service: env::var("INVENTORY_SERVICE_URL")
                    .unwrap_or_else(|_| "http://inventory-service:50051".to_string()),
                products_service: env::var("PRODUCTS_SERVICE_URL")
                    .unwrap_or_else(|_| "http://products-service:50052".to_string()),
                orders_service: env::var("ORDERS_SERVICE_URL")
                    .unwrap_or_else(|_| "http://orders-service:50053".to_string()),
                connect_timeout_secs: env::var("GRPC_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
                request_timeout_secs: env::var("GRPC_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            },
            auth: AuthConfig {
                base_url: env::var("AUTH_SERVICE_URL")
                    .unwrap_or_else(|_| "http://auth-service:5111/api/auth".to_string()),
                request_timeout_secs: env::var("AUTH_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
                cache_ttl_secs: env::var("AUTH_CACHE_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            },
        })
    }
}
