use crate::models::ScoredCandidate;

/// Sort candidates by compatibility, highest first
///
/// `sort_by` is stable, so equal scores keep their input order and ranking
/// an already ranked list leaves it unchanged.
pub fn rank(candidates: &mut [ScoredCandidate]) {
    candidates.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));
}
