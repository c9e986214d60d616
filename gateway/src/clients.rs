//! gRPC service clients with long-lived, lazily-connected channels
//!
//! One channel per backend, created once at startup and shared across all
//! concurrent calls; HTTP/2 multiplexing carries the concurrency. Channels
//! are cheap to clone and effectively read-only, so adapters hold their own
//! handles without coordination.

use std::time::Duration;

use tonic::transport::{Channel, Endpoint};

use crate::config::ServiceEndpoints;

// Proto module definitions from build.rs
pub mod proto {
    pub mod inventory {
        tonic::include_proto!("commerce.inventory.v1");
    }

    pub mod products {
        tonic::include_proto!("commerce.products.v1");
    }

    pub mod orders {
        tonic::include_proto!("commerce.orders.v1");
    }
}

/// Shared channel set for the three backend domains.
///
/// # Configuration
/// - **Connect timeout / request timeout**: from `ServiceEndpoints`
/// - **Keep-alive**: 60s interval, 20s timeout, pings while idle (prevents
///   connection drops by proxies/LBs)
/// - **Connection mode**: lazy (connects on first use, so backends can
///   start in any order)
///
/// # Panics
/// Panics if an endpoint URL is malformed. Endpoints are validated at
/// startup, so this is acceptable.
#[derive(Clone)]
pub struct ServiceClients {
    inventory_channel: Channel,
    products_channel: Channel,
    orders_channel: Channel,
}

impl ServiceClients {
    pub fn new(endpoints: &ServiceEndpoints) -> Self {
        Self {
            inventory_channel: Self::create_channel(&endpoints.inventory_service, endpoints),
            products_channel: Self::create_channel(&endpoints.products_service, endpoints),
            orders_channel: Self::create_channel(&endpoints.orders_service, endpoints),
        }
    }

    fn create_channel(endpoint: &str, settings: &ServiceEndpoints) -> Channel {
        Endpoint::from_shared(endpoint.to_string())
            .unwrap_or_else(|e| panic!("Invalid gRPC endpoint '{endpoint}': {e}"))
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .http2_keep_alive_interval(Duration::from_secs(60))
            .keep_alive_timeout(Duration::from_secs(20))
            .keep_alive_while_idle(true)
            .connect_lazy()
    }

    pub fn inventory_channel(&self) -> Channel {
        self.inventory_channel.clone()
    }

    pub fn products_channel(&self) -> Channel {
        self.products_channel.clone()
    }

    pub fn orders_channel(&self) -> Channel {
        self.orders_channel.clone()
    }
}
