//! Token validation cache
//!
//! Time-bounded memoization of "is this token currently valid" decisions,
//! shedding load from the auth service: the gateway validates each token at
//! most once per TTL window instead of on every call.
//!
//! ## Design
//!
//! - **Keyed by the raw token string**: one entry per token, overwritten on
//!   re-validation
//! - **Expiry is absence**: an expired entry is never served stale; `get`
//!   treats it as no decision on file and evicts it
//! - **Claims ride along**: positive decisions carry the claim set returned
//!   at validation time so hits can re-attach identity without a round trip
//! - **Concurrent**: backed by `DashMap`; a decision is written with a
//!   single insert, so readers never observe a partially-written entry
//! - **Injected clock**: the cache owns no global time source, which keeps
//!   expiry deterministic under test

mod cache;
mod clock;

pub use cache::{Decision, TokenValidationCache, DEFAULT_TTL};
pub use clock::{Clock, ManualClock, SystemClock};
