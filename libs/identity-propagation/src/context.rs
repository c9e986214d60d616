//! Per-call caller identity record.

use crate::claims::{claim_value, Claim};

/// Fallback user id when the auth service issued no subject claim.
pub const ANONYMOUS_USER_ID: &str = "anonymous";

/// Fallback role for callers with no role claim.
pub const DEFAULT_ROLE: &str = "client";

/// The authenticated caller of an inbound gateway call.
///
/// Built once per call from the claims returned by the auth service and the
/// raw authorization header; immutable for the lifetime of the call.
/// Missing fields are defaulted (`anonymous` / `client` / empty email) so
/// downstream code never handles absent identity pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityContext {
    pub user_id: String,
    pub role: String,
    pub email: String,
    /// Original `Bearer ...` header value, forwarded verbatim to backends.
    pub bearer: Option<String>,
}

impl IdentityContext {
    /// Derive the identity record from a validated claim set.
    ///
    /// User id comes from the `sub` claim (`id` accepted as a legacy
    /// alias), role from `role`, email from `email`.
    pub fn from_claims(claims: &[Claim], bearer: Option<String>) -> Self {
        let user_id = claim_value(claims, "sub")
            .or_else(|| claim_value(claims, "id"))
            .unwrap_or(ANONYMOUS_USER_ID);
        let role = claim_value(claims, "role").unwrap_or(DEFAULT_ROLE);
        let email = claim_value(claims, "email").unwrap_or("");

        Self {
            user_id: user_id.to_string(),
            role: role.to_string(),
            email: email.to_string(),
            bearer,
        }
    }
}
