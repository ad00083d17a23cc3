use crate::core::{children::has_close_child_age, proximity::ProximityGraph};
use crate::models::{CandidateProfile, Compatibility, RequesterProfile, ScoringWeights};

/// Maximum compatibility score
pub const MAX_SCORE: u8 = 100;

/// Child ages within this many years count as close
pub const CHILD_AGE_TOLERANCE: u8 = 2;

/// Calculate the compatibility (0-100) of a candidate from the requester's viewpoint
///
/// Scoring formula with default weights:
/// score = (
///     40 same neighborhood, else 30 adjacent neighborhood +
///     30 any child pair within 2 years +
///     10 same employment status +
///     5 per shared interest, capped at 15 +
///     5 same nationality
/// )
///
/// Always computed from the requester's side; callers caching results must
/// key on the ordered pair. Empty fields carry no information and never match.
pub fn calculate_compatibility(
    requester: &RequesterProfile,
    candidate: &CandidateProfile,
    graph: &ProximityGraph,
    weights: &ScoringWeights,
) -> Compatibility {
    let location = location_points(&requester.neighborhood, &candidate.neighborhood, graph, weights);

    let child_age = if has_close_child_age(&requester.children, &candidate.children, CHILD_AGE_TOLERANCE) {
        u32::from(weights.child_age)
    } else {
        0
    };

    let employment = exact_points(
        &requester.employment_status,
        &candidate.employment_status,
        weights.employment,
    );

    let shared_interests: Vec<String> = requester
        .interests
        .intersection(&candidate.interests)
        .cloned()
        .collect();
    let interests = shared_interest_points(shared_interests.len(), weights);

    let nationality = exact_points(&requester.nationality, &candidate.nationality, weights.nationality);

    let total = location + child_age + employment + interests + nationality;

    Compatibility {
        score: total.min(u32::from(MAX_SCORE)) as u8,
        shared_interests,
    }
}

/// Same neighborhood wins over adjacency; the two never stack
#[inline]
fn location_points(mine: &str, theirs: &str, graph: &ProximityGraph, weights: &ScoringWeights) -> u32 {
    if mine.is_empty() {
        0
    } else if mine == theirs {
        u32::from(weights.same_neighborhood)
    } else if graph.is_adjacent(mine, theirs) {
        u32::from(weights.adjacent_neighborhood)
    } else {
        0
    }
}

#[inline]
fn exact_points(mine: &str, theirs: &str, points: u8) -> u32 {
    if !mine.is_empty() && mine == theirs {
        u32::from(points)
    } else {
        0
    }
}

#[inline]
fn shared_interest_points(shared: usize, weights: &ScoringWeights) -> u32 {
    let raw = u32::try_from(shared)
        .unwrap_or(u32::MAX)
        .saturating_mul(u32::from(weights.per_shared_interest));
    raw.min(u32::from(weights.shared_interest_cap))
}
