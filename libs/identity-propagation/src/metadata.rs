//! Outbound call metadata
//!
//! Renders an [`IdentityContext`] into the metadata entries backend services
//! expect on every identity-sensitive RPC.

use tonic::metadata::AsciiMetadataValue;
use tonic::Request;
use tracing::warn;

use crate::context::IdentityContext;

pub const AUTHORIZATION_KEY: &str = "authorization";
pub const USER_ID_KEY: &str = "x-user-id";
pub const USER_ROLE_KEY: &str = "x-user-role";
pub const USER_EMAIL_KEY: &str = "x-user-email";

/// Headers attached to a backend RPC call.
///
/// Built fresh per call from the current [`IdentityContext`]; never cached.
/// Fields whose source value is empty are omitted entirely rather than sent
/// as empty headers.
#[derive(Debug, Clone, Default)]
pub struct OutboundCallMetadata {
    authorization: Option<String>,
    user_id: String,
    user_role: String,
    user_email: String,
}

impl OutboundCallMetadata {
    pub fn from_identity(identity: &IdentityContext) -> Self {
        Self {
            authorization: identity.bearer.clone(),
            user_id: identity.user_id.clone(),
            user_role: identity.role.clone(),
            user_email: identity.email.clone(),
        }
    }

    /// The `(key, value)` entries that will be attached, empties skipped.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = Vec::with_capacity(4);

        if let Some(auth) = self.authorization.as_deref() {
            if !auth.is_empty() {
                entries.push((AUTHORIZATION_KEY, auth));
            }
        }
        if !self.user_id.is_empty() {
            entries.push((USER_ID_KEY, self.user_id.as_str()));
        }
        if !self.user_role.is_empty() {
            entries.push((USER_ROLE_KEY, self.user_role.as_str()));
        }
        if !self.user_email.is_empty() {
            entries.push((USER_EMAIL_KEY, self.user_email.as_str()));
        }

        entries
    }

    /// Inject the entries into an outbound request's metadata.
    ///
    /// Values that are not valid ASCII metadata (possible only for
    /// caller-supplied header content) are skipped with a warning rather
    /// than failing the call.
    pub fn apply<T>(&self, request: &mut Request<T>) {
        for (key, value) in self.entries() {
            match AsciiMetadataValue::try_from(value) {
                Ok(value) => {
                    request.metadata_mut().insert(key, value);
                }
                Err(_) => {
                    warn!(key, "skipping outbound metadata entry with non-ascii value");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::Claim;

    fn identity() -> IdentityContext {
        IdentityContext::from_claims(
            &[
                Claim::new("sub", "c-42"),
                Claim::new("role", "admin"),
                Claim::new("email", "admin@commerce.dev"),
            ],
            Some("Bearer tok-123".into()),
        )
    }

    #[test]
    fn test_all_entries_present() {
        let meta = OutboundCallMetadata::from_identity(&identity());

        assert_eq!(
            meta.entries(),
            vec![
                (AUTHORIZATION_KEY, "Bearer tok-123"),
                (USER_ID_KEY, "c-42"),
                (USER_ROLE_KEY, "admin"),
                (USER_EMAIL_KEY, "admin@commerce.dev"),
            ]
        );
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        // No email claim and no bearer: both headers must be absent.
        let identity = IdentityContext::from_claims(&[Claim::new("sub", "c-1")], None);
        let meta = OutboundCallMetadata::from_identity(&identity);

        let keys: Vec<&str> = meta.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![USER_ID_KEY, USER_ROLE_KEY]);
    }

    #[test]
    fn test_apply_injects_into_request_metadata() {
        let meta = OutboundCallMetadata::from_identity(&identity());

        let mut request = Request::new(());
        meta.apply(&mut request);

        assert_eq!(
            request.metadata().get(AUTHORIZATION_KEY).unwrap(),
            "Bearer tok-123"
        );
        assert_eq!(request.metadata().get(USER_ID_KEY).unwrap(), "c-42");
        assert_eq!(request.metadata().get(USER_ROLE_KEY).unwrap(), "admin");
        assert_eq!(
            request.metadata().get(USER_EMAIL_KEY).unwrap(),
            "admin@commerce.dev"
        );
    }

    #[test]
    fn test_bearer_forwarded_verbatim() {
        let identity = IdentityContext::from_claims(&[], Some("Bearer  spaced ".into()));
        let meta = OutboundCallMetadata::from_identity(&identity);

        assert_eq!(meta.entries()[0], (AUTHORIZATION_KEY, "Bearer  spaced "));
    }
}
