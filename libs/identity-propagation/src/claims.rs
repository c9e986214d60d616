//! Identity claims issued by the auth service.

use serde::{Deserialize, Serialize};

/// A single identity assertion, as returned by the auth service's
/// validation endpoint: `{"type": "role", "value": "admin"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub value: String,
}

impl Claim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// Find a claim value by type.
///
/// Returns the first match; the auth service does not issue duplicate types.
pub(crate) fn claim_value<'a>(claims: &'a [Claim], claim_type: &str) -> Option<&'a str> {
    claims
        .iter()
        .find(|c| c.claim_type == claim_type)
        .map(|c| c.value.as_str())
}
