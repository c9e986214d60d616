//! Caller-identity propagation for gateway-to-backend calls
//!
//! This library carries the identity of an authenticated caller from the
//! gateway's auth boundary to outbound backend RPC calls.
//!
//! ## Core Components
//!
//! - **Claim**: a single `{type, value}` assertion issued by the auth service
//! - **IdentityContext**: the per-call caller record (user id, role, email,
//!   raw bearer token), built from claims with safe defaults
//! - **OutboundCallMetadata**: the headers attached to a backend RPC call
//!   (`authorization`, `x-user-id`, `x-user-role`, `x-user-email`), built
//!   fresh per call and never cached
//!
//! ## Design
//!
//! - **Per-call**: identity is derived once per inbound call and discarded
//!   at call end; nothing here is shared mutable state
//! - **No empty headers**: metadata entries with empty values are omitted
//! - **Verbatim bearer**: the original authorization header is forwarded
//!   unchanged so downstream services can re-validate independently

mod claims;
mod context;
mod metadata;

pub use claims::Claim;
pub use context::IdentityContext;
pub use metadata::OutboundCallMetadata;
