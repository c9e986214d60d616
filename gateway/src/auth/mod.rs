//! Central authentication for the gateway
//!
//! Every inbound call passes through [`AuthInterceptor::authenticate`]
//! before dispatch reaches an adapter. A fixed set of public methods
//! bypasses identity entirely; everything else requires a bearer token,
//! validated against the auth service with a time-bounded cache in front.

mod client;
mod interceptor;
mod method;

pub use client::{AuthServiceClient, ClientInfo, LoginRequest, LoginResponse, TokenValidation};
pub use interceptor::{AuthInterceptor, CallIdentity};
pub use method::{methods, MethodName};

use thiserror::Error;

/// Scheme marker expected on the authorization header.
pub const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Error)]
pub enum AuthError {
    /// Credential missing, malformed, invalid, expired or revoked.
    #[error("{0}")]
    Unauthenticated(String),

    /// Could not reach the auth service (connect failure or timeout).
    /// Never cached as a validation decision.
    #[error("auth service unavailable: {0}")]
    Unavailable(String),

    /// The auth service answered a forwarded request (login/logout) with a
    /// non-success HTTP status the gateway passes through.
    #[error("auth service rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
}
