//! Token validation interceptor
//!
//! The call-boundary guard invoked before every RPC entry point. Consults
//! the token validation cache, falls back to the auth service, rejects or
//! admits the call, and carries the caller's identity to dispatch.
//!
//! Per call: `Received → (Allowlisted | Authenticating) → (Admitted |
//! Rejected)`; each inbound call is a fresh traversal.

use std::sync::Arc;

use actix_web::http::header::{HeaderMap, AUTHORIZATION};
use identity_propagation::{Claim, IdentityContext, OutboundCallMetadata};
use token_cache::{Decision, TokenValidationCache};
use tracing::{debug, warn};

use super::client::AuthServiceClient;
use super::method::MethodName;
use super::{AuthError, BEARER_PREFIX};

/// Outcome of admitting a call.
#[derive(Debug, Clone)]
pub enum CallIdentity {
    /// Allowlisted method; no identity was constructed.
    Public,
    /// Authenticated caller with the claim set attached at validation time.
    Authenticated {
        context: IdentityContext,
        claims: Vec<Claim>,
    },
}

impl CallIdentity {
    /// Metadata for the outbound backend call this identity admits.
    /// Empty for public calls.
    pub fn call_metadata(&self) -> OutboundCallMetadata {
        match self {
            CallIdentity::Public => OutboundCallMetadata::default(),
            CallIdentity::Authenticated { context, .. } => {
                OutboundCallMetadata::from_identity(context)
            }
        }
    }

    pub fn context(&self) -> Option<&IdentityContext> {
        match self {
            CallIdentity::Public => None,
            CallIdentity::Authenticated { context, .. } => Some(context),
        }
    }

    /// Read an attached claim by type, the way downstream code consumes them.
    pub fn claim(&self, claim_type: &str) -> Option<&str> {
        match self {
            CallIdentity::Public => None,
            CallIdentity::Authenticated { claims, .. } => claims
                .iter()
                .find(|c| c.claim_type == claim_type)
                .map(|c| c.value.as_str()),
        }
    }
}

/// Guards RPC entry points with cached token validation.
///
/// Shared across all in-flight calls; the cache is the only mutable state.
#[derive(Clone)]
pub struct AuthInterceptor {
    auth: Arc<AuthServiceClient>,
    cache: Arc<TokenValidationCache>,
}

impl AuthInterceptor {
    pub fn new(auth: Arc<AuthServiceClient>, cache: Arc<TokenValidationCache>) -> Self {
        Self { auth, cache }
    }

    /// Gate a call targeting `method`.
    ///
    /// Allowlisted methods are admitted unconditionally with no identity.
    /// All others require a `Bearer` credential, checked against the cache
    /// first and the auth service on a miss; the resulting decision is
    /// cached for the configured TTL. Auth-service transport failures are
    /// surfaced as [`AuthError::Unavailable`] and never cached.
    pub async fn authenticate(
        &self,
        method: &MethodName,
        headers: &HeaderMap,
    ) -> Result<CallIdentity, AuthError> {
        if method.is_public() {
            debug!(method = %method, "public method, admitted without identity");
            return Ok(CallIdentity::Public);
        }

        let auth_header = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        let Some(token) = auth_header.strip_prefix(BEARER_PREFIX) else {
            warn!(method = %method, "missing or malformed authorization header");
            return Err(AuthError::Unauthenticated(
                "Missing or invalid token".to_string(),
            ));
        };

        match self.cache.get(token) {
            Some(Decision::Invalid) => {
                warn!(method = %method, "rejected token cached as invalid");
                Err(AuthError::Unauthenticated(
                    "Token has been revoked".to_string(),
                ))
            }
            Some(Decision::Valid(claims)) => {
                debug!(method = %method, "token admitted from cache");
                Ok(Self::admitted(auth_header, claims))
            }
            None => self.validate_and_cache(method, auth_header, token).await,
        }
    }

    /// Overwrite the token's cached decision with a negative one, closing
    /// the revocation window after logout.
    pub fn revoke(&self, token: &str) {
        self.cache.put(token, Decision::Invalid);
    }

    async fn validate_and_cache(
        &self,
        method: &MethodName,
        auth_header: &str,
        token: &str,
    ) -> Result<CallIdentity, AuthError> {
        let verdict = self.auth.validate(auth_header).await?;

        match verdict {
            Some(verdict) if verdict.is_valid => {
                self.cache
                    .put(token, Decision::Valid(verdict.claims.clone()));
                debug!(method = %method, claims = verdict.claims.len(), "token validated");
                Ok(Self::admitted(auth_header, verdict.claims))
            }
            Some(verdict) => {
                self.cache.put(token, Decision::Invalid);
                let message = if verdict.message.is_empty() {
                    "Invalid token".to_string()
                } else {
                    verdict.message
                };
                warn!(method = %method, reason = %message, "token rejected by auth service");
                Err(AuthError::Unauthenticated(message))
            }
            None => {
                // The service answered but produced no verdict; treat the
                // same as an invalid token.
                self.cache.put(token, Decision::Invalid);
                warn!(method = %method, "no validation verdict from auth service");
                Err(AuthError::Unauthenticated("Invalid token".to_string()))
            }
        }
    }

    fn admitted(auth_header: &str, claims: Vec<Claim>) -> CallIdentity {
        let context = IdentityContext::from_claims(&claims, Some(auth_header.to_string()));
        CallIdentity::Authenticated { context, claims }
    }
}
