use crate::core::{
    filters::{apply_filters, FilterStats},
    nearby::find_nearby,
    proximity::{default_graph, ProximityGraph},
    ranker::rank,
    scoring::calculate_compatibility,
};
use crate::models::{
    CandidateProfile, Compatibility, FilterCriteria, RequesterProfile, ScoredCandidate, ScoringWeights,
};
use std::sync::Arc;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
    pub stats: FilterStats,
}

/// Whether `candidate` belongs in the requester's candidate pool
///
/// The requester never appears in their own matches or nearby list.
#[inline]
pub fn is_candidate_for(requester: &RequesterProfile, candidate: &CandidateProfile) -> bool {
    candidate.id != requester.id
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Compatibility scoring per candidate
/// 2. Stable ranking by score
/// 3. Filter panel criteria
///
/// The nearby short list is an independent path over the raw candidates.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    graph: Arc<ProximityGraph>,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, graph: ProximityGraph) -> Self {
        Self {
            weights,
            graph: Arc::new(graph),
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), default_graph())
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn graph(&self) -> &ProximityGraph {
        &self.graph
    }

    /// Score one candidate from the requester's viewpoint
    pub fn score(&self, requester: &RequesterProfile, candidate: &CandidateProfile) -> Compatibility {
        calculate_compatibility(requester, candidate, &self.graph, &self.weights)
    }

    /// Find matches for the requester
    ///
    /// # Arguments
    /// * `requester` - The current user's profile
    /// * `candidates` - Already materialized candidate list
    /// * `criteria` - Filter panel criteria
    ///
    /// # Returns
    /// MatchResult with the filtered candidates in ranked order
    pub fn find_matches(
        &self,
        requester: &RequesterProfile,
        candidates: Vec<CandidateProfile>,
        criteria: &FilterCriteria,
    ) -> MatchResult {
        let scored = candidates
            .into_iter()
            .filter(|candidate| is_candidate_for(requester, candidate))
            .map(|candidate| {
                let compatibility = self.score(requester, &candidate);
                ScoredCandidate::new(candidate, compatibility)
            })
            .collect();

        self.rank_and_filter(scored, criteria)
    }

    /// Rank already scored candidates and apply the criteria
    ///
    /// Callers that score through a cache use this directly; they must
    /// pre-filter the pool with [`is_candidate_for`].
    pub fn rank_and_filter(&self, mut scored: Vec<ScoredCandidate>, criteria: &FilterCriteria) -> MatchResult {
        let total_candidates = scored.len();

        rank(&mut scored);
        let (matches, stats) = apply_filters(scored, criteria);

        tracing::debug!(
            "Kept {} of {} candidates (filtered: {:?})",
            matches.len(),
            total_candidates,
            stats
        );

        MatchResult {
            matches,
            total_candidates,
            stats,
        }
    }

    /// Short list of nearby mothers with similarly aged children
    pub fn nearby<'a>(
        &self,
        requester: &RequesterProfile,
        candidates: &'a [CandidateProfile],
    ) -> Vec<&'a CandidateProfile> {
        find_nearby(requester, candidates, &self.graph)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
