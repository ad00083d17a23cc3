use crate::core::{
    children::has_close_child_age, matcher::is_candidate_for, proximity::ProximityGraph,
    scoring::CHILD_AGE_TOLERANCE,
};
use crate::models::{CandidateProfile, RequesterProfile};

/// Maximum size of the nearby short list
pub const NEARBY_LIMIT: usize = 3;

/// Check the two nearby predicates for one candidate
///
/// The candidate must live in the requester's neighborhood or an adjacent
/// one, and have a child within the age tolerance of one of the
/// requester's children.
#[inline]
pub fn is_nearby_match(requester: &RequesterProfile, candidate: &CandidateProfile, graph: &ProximityGraph) -> bool {
    graph.is_nearby(&requester.neighborhood, &candidate.neighborhood)
        && has_close_child_age(&requester.children, &candidate.children, CHILD_AGE_TOLERANCE)
}

/// Short list of nearby mothers, first matches in input order
///
/// No ranking is applied. The requester's own profile is skipped.
pub fn find_nearby<'a>(
    requester: &RequesterProfile,
    candidates: &'a [CandidateProfile],
    graph: &ProximityGraph,
) -> Vec<&'a CandidateProfile> {
    candidates
        .iter()
        .filter(|candidate| is_candidate_for(requester, candidate))
        .filter(|candidate| is_nearby_match(requester, candidate, graph))
        .take(NEARBY_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::proximity::default_graph;
    use crate::models::ChildProfile;

    fn requester() -> RequesterProfile {
        RequesterProfile {
            id: "me".to_string(),
            display_name: "Me".to_string(),
            age: 33,
            neighborhood: "Dubai Marina".to_string(),
            children: vec![ChildProfile::new(3, "Boy")],
            nationality: String::new(),
            employment_status: String::new(),
            interests: Default::default(),
        }
    }

    fn candidate(id: &str, neighborhood: &str, child_age: u8) -> CandidateProfile {
        CandidateProfile {
            id: id.to_string(),
            display_name: id.to_string(),
            age: 30,
            neighborhood: neighborhood.to_string(),
            children: vec![ChildProfile::new(child_age, "Girl")],
            nationality: String::new(),
            employment_status: String::new(),
            interests: Default::default(),
            bio: String::new(),
        }
    }

    #[test]
    fn test_requires_both_predicates() {
        let graph = default_graph();
        let me = requester();

        assert!(is_nearby_match(&me, &candidate("a", "Dubai Marina", 4), &graph));
        assert!(is_nearby_match(&me, &candidate("b", "Palm Jumeirah", 1), &graph));
        assert!(!is_nearby_match(&me, &candidate("c", "Palm Jumeirah", 10), &graph));
        assert!(!is_nearby_match(&me, &candidate("d", "Mirdif", 3), &graph));
    }

    #[test]
    fn test_capped_at_three_in_input_order() {
        let graph = default_graph();
        let candidates = vec![
            candidate("far", "Mirdif", 3),
            candidate("a", "JBR", 2),
            candidate("b", "Dubai Marina", 5),
            candidate("c", "JLT", 3),
            candidate("d", "Dubai Marina", 3),
        ];

        let nearby = find_nearby(&requester(), &candidates, &graph);
        let ids: Vec<&str> = nearby.iter().map(|c| c.id.as_str()).collect();

        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_skips_self_and_empty_input() {
        let graph = default_graph();
        assert!(find_nearby(&requester(), &[], &graph).is_empty());
        assert!(find_nearby(&requester(), &[candidate("me", "Dubai Marina", 3)], &graph).is_empty());
    }
}
