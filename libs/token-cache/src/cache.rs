//! The cache itself.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use identity_propagation::Claim;
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};

/// Default decision lifetime.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// A cached validation decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Token validated successfully; the claim set returned by the auth
    /// service at validation time.
    Valid(Vec<Claim>),
    /// Token rejected by the auth service.
    Invalid,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    decision: Decision,
    expires_at: Instant,
}

/// Concurrent token-validation cache with TTL-based expiry.
///
/// One entry per raw token string. Entries are authoritative for at most
/// the configured TTL; after that `get` reports absence and the decision
/// must be re-derived from the auth service.
pub struct TokenValidationCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenValidationCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        debug!(ttl_secs = ttl.as_secs(), "initializing token validation cache");
        Self {
            entries: DashMap::new(),
            ttl,
            clock,
        }
    }

    /// Look up the decision for a token.
    ///
    /// Returns `None` when no decision is on file *or* the entry has
    /// expired; expired entries are evicted on the way out. Callers must
    /// treat `None` as "re-validate", never as stale-valid.
    pub fn get(&self, token: &str) -> Option<Decision> {
        let now = self.clock.now();

        let hit = self
            .entries
            .get(token)
            .map(|entry| (entry.decision.clone(), entry.expires_at));

        match hit {
            Some((decision, expires_at)) if now < expires_at => {
                trace!("token cache hit");
                Some(decision)
            }
            Some(_) => {
                // Re-check under the shard lock: a concurrent put may have
                // refreshed the entry since we looked.
                self.entries.remove_if(token, |_, entry| entry.expires_at <= now);
                trace!("token cache entry expired");
                None
            }
            None => None,
        }
    }

    /// Record a decision, overwriting any existing entry and resetting its
    /// expiry to now + TTL.
    pub fn put(&self, token: impl Into<String>, decision: Decision) {
        let expires_at = self.clock.now() + self.ttl;
        self.entries.insert(token.into(), CacheEntry { decision, expires_at });
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn cache_with_manual_clock(ttl: Duration) -> (TokenValidationCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let cache = TokenValidationCache::with_clock(ttl, clock.clone());
        (cache, clock)
    }

    #[test]
    fn test_absent_token_has_no_decision() {
        let (cache, _clock) = cache_with_manual_clock(DEFAULT_TTL);

        assert_eq!(cache.get("tok"), None);
    }

    #[test]
    fn test_decision_survives_within_ttl() {
        let (cache, clock) = cache_with_manual_clock(Duration::from_secs(60));

        cache.put("tok", Decision::Invalid);
        clock.advance(Duration::from_secs(59));

        assert_eq!(cache.get("tok"), Some(Decision::Invalid));
    }

    #[test]
    fn test_expired_decision_is_absent_and_evicted() {
        let (cache, clock) = cache_with_manual_clock(Duration::from_secs(60));

        cache.put("tok", Decision::Valid(vec![]));
        clock.advance(Duration::from_secs(60));

        assert_eq!(cache.get("tok"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_overwrites_and_resets_expiry() {
        let (cache, clock) = cache_with_manual_clock(Duration::from_secs(60));

        cache.put("tok", Decision::Invalid);
        clock.advance(Duration::from_secs(45));

        // Re-validation flips the decision and restarts the window.
        cache.put("tok", Decision::Valid(vec![Claim::new("sub", "c-1")]));
        clock.advance(Duration::from_secs(45));

        assert_eq!(
            cache.get("tok"),
            Some(Decision::Valid(vec![Claim::new("sub", "c-1")]))
        );
    }

    #[test]
    fn test_valid_decision_keeps_claim_set() {
        let (cache, _clock) = cache_with_manual_clock(DEFAULT_TTL);
        let claims = vec![
            Claim::new("sub", "c-9"),
            Claim::new("role", "admin"),
        ];

        cache.put("tok", Decision::Valid(claims.clone()));

        assert_eq!(cache.get("tok"), Some(Decision::Valid(claims)));
    }

    #[test]
    fn test_entries_are_independent_per_token() {
        let (cache, _clock) = cache_with_manual_clock(DEFAULT_TTL);

        cache.put("tok-a", Decision::Valid(vec![]));
        cache.put("tok-b", Decision::Invalid);

        assert_eq!(cache.get("tok-a"), Some(Decision::Valid(vec![])));
        assert_eq!(cache.get("tok-b"), Some(Decision::Invalid));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_concurrent_writers_converge_to_one_entry() {
        let cache = Arc::new(TokenValidationCache::new(DEFAULT_TTL));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    let claims = vec![Claim::new("sub", format!("writer-{i}"))];
                    for _ in 0..100 {
                        cache.put("tok", Decision::Valid(claims.clone()));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Exactly one entry survives and it is one of the written values,
        // intact (no torn claim set).
        assert_eq!(cache.len(), 1);
        match cache.get("tok") {
            Some(Decision::Valid(claims)) => {
                assert_eq!(claims.len(), 1);
                assert_eq!(claims[0].claim_type, "sub");
                assert!(claims[0].value.starts_with("writer-"));
            }
            other => panic!("unexpected decision: {other:?}"),
        }
    }
}
