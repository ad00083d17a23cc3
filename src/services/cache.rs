use crate::models::{Compatibility, RequesterProfile, ScoringWeights};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

/// Cache key for one compatibility result
///
/// Scores are computed from the requester's side only, so the key is the
/// ordered (requester, candidate) pair. The revision changes whenever the
/// requester profile or the weights change, which makes stale entries miss.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreKey {
    pub requester_id: String,
    pub candidate_id: String,
    pub requester_revision: u64,
}

impl ScoreKey {
    pub fn new(requester_id: &str, candidate_id: &str, requester_revision: u64) -> Self {
        Self {
            requester_id: requester_id.to_string(),
            candidate_id: candidate_id.to_string(),
            requester_revision,
        }
    }
}

/// Revision of a requester profile scored with the given weights
pub fn requester_revision(requester: &RequesterProfile, weights: &ScoringWeights) -> u64 {
    let mut hasher = DefaultHasher::new();
    requester.hash(&mut hasher);
    weights.hash(&mut hasher);
    hasher.finish()
}

/// In-memory memo of compatibility results
///
/// Bounded by entry count and expired after the configured TTL.
pub struct ScoreCache {
    cache: moka::future::Cache<ScoreKey, Compatibility>,
}

impl ScoreCache {
    /// Create a new score cache
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Get a cached result
    pub async fn get(&self, key: &ScoreKey) -> Option<Compatibility> {
        self.cache.get(key).await
    }

    /// Return the cached result or compute and store it
    pub async fn get_or_score<F>(&self, key: ScoreKey, score: F) -> Compatibility
    where
        F: FnOnce() -> Compatibility,
    {
        if let Some(hit) = self.cache.get(&key).await {
            tracing::trace!("Score cache hit: {} -> {}", key.requester_id, key.candidate_id);
            return hit;
        }

        let computed = score();
        self.cache.insert(key, computed.clone()).await;
        computed
    }

    /// Drop every entry
    pub async fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        self.cache.run_pending_tasks().await;
        CacheStats {
            entries: self.cache.entry_count(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChildProfile;
    use std::cell::Cell;

    fn requester(neighborhood: &str) -> RequesterProfile {
        RequesterProfile {
            id: "me".to_string(),
            display_name: "Me".to_string(),
            age: 30,
            neighborhood: neighborhood.to_string(),
            children: vec![ChildProfile::new(2, "Boy")],
            nationality: String::new(),
            employment_status: String::new(),
            interests: Default::default(),
        }
    }

    fn compat(score: u8) -> Compatibility {
        Compatibility {
            score,
            shared_interests: vec![],
        }
    }

    #[tokio::test]
    async fn test_get_or_score_computes_once() {
        let cache = ScoreCache::new(100, 60);
        let calls = Cell::new(0);
        let key = ScoreKey::new("me", "c1", 1);

        let first = cache
            .get_or_score(key.clone(), || {
                calls.set(calls.get() + 1);
                compat(80)
            })
            .await;
        let second = cache
            .get_or_score(key.clone(), || {
                calls.set(calls.get() + 1);
                compat(10)
            })
            .await;

        assert_eq!(first.score, 80);
        assert_eq!(second.score, 80);
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.stats().await.entries, 1);
    }

    #[tokio::test]
    async fn test_key_is_ordered_pair() {
        let cache = ScoreCache::new(100, 60);
        cache.get_or_score(ScoreKey::new("a", "b", 1), || compat(70)).await;

        assert!(cache.get(&ScoreKey::new("b", "a", 1)).await.is_none());
        assert_eq!(cache.get(&ScoreKey::new("a", "b", 1)).await.map(|c| c.score), Some(70));
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = ScoreCache::new(100, 60);
        cache.get_or_score(ScoreKey::new("a", "b", 1), || compat(70)).await;
        cache.clear().await;

        assert!(cache.get(&ScoreKey::new("a", "b", 1)).await.is_none());
    }

    #[test]
    fn test_revision_tracks_profile_and_weights() {
        let weights = ScoringWeights::default();
        let base = requester_revision(&requester("JLT"), &weights);

        assert_eq!(base, requester_revision(&requester("JLT"), &weights));
        assert_ne!(base, requester_revision(&requester("Mirdif"), &weights));

        let heavier = ScoringWeights {
            nationality: 10,
            ..weights
        };
        assert_ne!(base, requester_revision(&requester("JLT"), &heavier));
    }
}
