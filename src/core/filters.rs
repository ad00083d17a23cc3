use serde::{Deserialize, Serialize};
use crate::core::{children::matches_child_filter, range::{parse_range, AgeRange}};
use crate::models::{criteria::is_active, CandidateProfile, FilterCriteria, ScoredCandidate};

/// Counts of candidates removed by each filter rule
///
/// A candidate is counted once, against the first rule it fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStats {
    pub filtered_by_age: usize,
    pub filtered_by_children: usize,
    pub filtered_by_neighborhood: usize,
    pub filtered_by_nationality: usize,
    pub filtered_by_employment: usize,
    pub filtered_by_score: usize,
    pub filtered_by_query: usize,
}

impl FilterStats {
    pub fn total_filtered(&self) -> usize {
        self.filtered_by_age
            + self.filtered_by_children
            + self.filtered_by_neighborhood
            + self.filtered_by_nationality
            + self.filtered_by_employment
            + self.filtered_by_score
            + self.filtered_by_query
    }

    fn record(&mut self, rejection: Rejection) {
        let counter = match rejection {
            Rejection::Age => &mut self.filtered_by_age,
            Rejection::Children => &mut self.filtered_by_children,
            Rejection::Neighborhood => &mut self.filtered_by_neighborhood,
            Rejection::Nationality => &mut self.filtered_by_nationality,
            Rejection::Employment => &mut self.filtered_by_employment,
            Rejection::Score => &mut self.filtered_by_score,
            Rejection::Query => &mut self.filtered_by_query,
        };
        *counter += 1;
    }
}

/// Rule a candidate failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Age,
    Children,
    Neighborhood,
    Nationality,
    Employment,
    Score,
    Query,
}

/// Apply the filter panel criteria to scored candidates
///
/// Every rule is ANDed; input order is preserved so a ranked list stays
/// ranked. Default criteria with `min_compatibility = 0` keep everything.
pub fn apply_filters(
    candidates: Vec<ScoredCandidate>,
    criteria: &FilterCriteria,
) -> (Vec<ScoredCandidate>, FilterStats) {
    let mut stats = FilterStats::default();
    let age_range = parse_range(&criteria.requester_age_range);

    let filtered = candidates
        .into_iter()
        .filter(|candidate| match check_candidate(candidate, criteria, age_range) {
            Ok(()) => true,
            Err(rejection) => {
                stats.record(rejection);
                false
            }
        })
        .collect();

    (filtered, stats)
}

/// Check one candidate against every rule, reporting the first failure
pub fn check_candidate(
    candidate: &ScoredCandidate,
    criteria: &FilterCriteria,
    age_range: AgeRange,
) -> Result<(), Rejection> {
    let profile = &candidate.profile;

    if !age_range.contains(i64::from(profile.age)) {
        return Err(Rejection::Age);
    }

    if !criteria
        .active_child_filters()
        .all(|slot| matches_child_filter(&profile.children, slot))
    {
        return Err(Rejection::Children);
    }

    if !matches_exact(&criteria.neighborhood, &profile.neighborhood) {
        return Err(Rejection::Neighborhood);
    }

    if !matches_exact(&criteria.nationality, &profile.nationality) {
        return Err(Rejection::Nationality);
    }

    if !matches_exact(&criteria.employment_status, &profile.employment_status) {
        return Err(Rejection::Employment);
    }

    if candidate.compatibility_score < criteria.min_compatibility {
        return Err(Rejection::Score);
    }

    if let Some(query) = criteria.query() {
        if !matches_query(profile, query) {
            return Err(Rejection::Query);
        }
    }

    Ok(())
}

/// Exact-match filter, skipped when the wanted value is "all"
#[inline]
pub fn matches_exact(wanted: &str, actual: &str) -> bool {
    !is_active(wanted) || wanted.trim() == actual
}

/// Case-insensitive substring match on display name, bio and interests
pub fn matches_query(profile: &CandidateProfile, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |text: &str| text.to_lowercase().contains(&needle);

    contains(profile.display_name.as_str())
        || contains(profile.bio.as_str())
        || profile.interests.iter().any(|interest| contains(interest.as_str()))
}
