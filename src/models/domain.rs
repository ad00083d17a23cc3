use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use validator::Validate;

/// A child as seen by the matching engine
///
/// `age` is `None` when no birth date was available. Unknown ages never
/// satisfy an age constraint and never count towards child-age proximity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChildProfile {
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub gender: String,
}

impl ChildProfile {
    pub fn new(age: u8, gender: &str) -> Self {
        Self {
            age: Some(age),
            gender: gender.to_string(),
        }
    }
}

/// Candidate mother profile from the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub id: String,
    pub display_name: String,
    pub age: u8,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub children: Vec<ChildProfile>,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub employment_status: String,
    #[serde(default)]
    pub interests: BTreeSet<String>,
    #[serde(default)]
    pub bio: String,
}

/// The current user's profile, the viewpoint every score is computed from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequesterProfile {
    pub id: String,
    pub display_name: String,
    pub age: u8,
    pub neighborhood: String,
    pub children: Vec<ChildProfile>,
    pub nationality: String,
    pub employment_status: String,
    pub interests: BTreeSet<String>,
}

impl RequesterProfile {
    /// Build the requester from an account settings snapshot
    ///
    /// Missing fields fall back to empty values, which the scorer treats as
    /// "no information". Child ages are derived from birth dates relative to
    /// `today`; a child without a birth date keeps an unknown age.
    pub fn from_settings(settings: &AccountSettings, today: NaiveDate) -> Self {
        let children = settings
            .children
            .iter()
            .map(|child| ChildProfile {
                age: child.birth_date.and_then(|birth| age_on(birth, today)),
                gender: child.gender.clone().unwrap_or_default(),
            })
            .collect();

        Self {
            id: settings.user_id.clone(),
            display_name: settings.display_name.clone().unwrap_or_default(),
            age: settings.age.unwrap_or(0),
            neighborhood: settings.neighborhood.clone().unwrap_or_default(),
            children,
            nationality: settings.nationality.clone().unwrap_or_default(),
            employment_status: settings.employment_status.clone().unwrap_or_default(),
            interests: settings.interests.clone().unwrap_or_default(),
        }
    }
}

/// Whole years between `birth` and `today`, `None` for future dates
fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u8> {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u8::try_from(years).ok()
}

/// Read-only snapshot from the account settings store
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    #[validate(length(min = 1))]
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub children: Vec<ChildRecord>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub employment_status: Option<String>,
    #[serde(default)]
    pub interests: Option<BTreeSet<String>>,
}

/// Stored child entry in account settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildRecord {
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// Candidate with its derived compatibility score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    pub compatibility_score: u8,
    pub shared_interests: Vec<String>,
}

impl ScoredCandidate {
    pub fn new(profile: CandidateProfile, compatibility: Compatibility) -> Self {
        Self {
            profile,
            compatibility_score: compatibility.score,
            shared_interests: compatibility.shared_interests,
        }
    }
}

/// Result of scoring one candidate from the requester's viewpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compatibility {
    pub score: u8,
    pub shared_interests: Vec<String>,
}

/// Points awarded by each compatibility rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoringWeights {
    pub same_neighborhood: u8,
    pub adjacent_neighborhood: u8,
    pub child_age: u8,
    pub employment: u8,
    pub per_shared_interest: u8,
    pub shared_interest_cap: u8,
    pub nationality: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            same_neighborhood: 40,
            adjacent_neighborhood: 30,
            child_age: 30,
            employment: 10,
            per_shared_interest: 5,
            shared_interest_cap: 15,
            nationality: 5,
        }
    }
}

/// Requester's relationship to one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Connected,
    Accepted,
    Rejected,
}

/// Relationship state of one requester, keyed by candidate id
///
/// Kept apart from the candidate records so matching passes never need to
/// mutate a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipBook {
    entries: HashMap<String, Relationship>,
}

impl RelationshipBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest relationship with a candidate, returning the previous one
    pub fn record(&mut self, candidate_id: &str, relationship: Relationship) -> Option<Relationship> {
        self.entries.insert(candidate_id.to_string(), relationship)
    }

    pub fn status(&self, candidate_id: &str) -> Option<Relationship> {
        self.entries.get(candidate_id).copied()
    }

    pub fn is_rejected(&self, candidate_id: &str) -> bool {
        self.status(candidate_id) == Some(Relationship::Rejected)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Relationship)> {
        self.entries.iter().map(|(id, rel)| (id.as_str(), *rel))
    }
}
