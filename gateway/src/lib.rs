//! Commerce edge gateway
//!
//! Exposes a REST surface to clients and forwards calls to the backend
//! gRPC services (inventory, products, orders), enforcing authentication
//! centrally against the auth service.

pub mod adapters;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest_api;
