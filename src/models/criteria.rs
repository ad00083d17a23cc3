use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::range::parse_range;

/// Sentinel for an unconstrained filter value
pub const ALL: &str = "all";

/// Default minimum compatibility score for the filtered result
pub const DEFAULT_MIN_COMPATIBILITY: u8 = 70;

/// True when a filter value carries a constraint
#[inline]
pub fn is_active(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !value.eq_ignore_ascii_case(ALL)
}

/// Criteria collected by the filter panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default = "default_all")]
    pub requester_age_range: String,
    #[validate(length(max = 3))]
    #[serde(default)]
    pub child_filters: Vec<ChildFilter>,
    #[serde(default = "default_all")]
    pub neighborhood: String,
    #[serde(default = "default_all")]
    pub nationality: String,
    #[serde(default = "default_all")]
    pub employment_status: String,
    #[validate(range(max = 100))]
    #[serde(default = "default_min_compatibility")]
    pub min_compatibility: u8,
    #[serde(default)]
    pub free_text_query: Option<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            requester_age_range: default_all(),
            child_filters: Vec::new(),
            neighborhood: default_all(),
            nationality: default_all(),
            employment_status: default_all(),
            min_compatibility: DEFAULT_MIN_COMPATIBILITY,
            free_text_query: None,
        }
    }
}

impl FilterCriteria {
    /// Criteria that keep every candidate regardless of score
    pub fn unfiltered() -> Self {
        Self {
            min_compatibility: 0,
            ..Self::default()
        }
    }

    /// Child slots carrying at least one constraint
    pub fn active_child_filters(&self) -> impl Iterator<Item = &ChildFilter> {
        self.child_filters.iter().filter(|slot| slot.is_active())
    }

    /// Trimmed free-text query, `None` when blank
    pub fn query(&self) -> Option<&str> {
        self.free_text_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

/// One child-specific constraint of the filter panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildFilter {
    #[serde(default = "default_all")]
    pub age_range: String,
    #[serde(default = "default_all")]
    pub gender: String,
}

impl Default for ChildFilter {
    fn default() -> Self {
        Self {
            age_range: default_all(),
            gender: default_all(),
        }
    }
}

impl ChildFilter {
    pub fn new(age_range: &str, gender: &str) -> Self {
        Self {
            age_range: age_range.to_string(),
            gender: gender.to_string(),
        }
    }

    /// A slot constrains only when its age range parses to a real bound
    /// or its gender is set. Malformed age tokens count as unconstrained.
    pub fn is_active(&self) -> bool {
        !parse_range(&self.age_range).is_any() || is_active(&self.gender)
    }
}

fn default_all() -> String {
    ALL.to_string()
}

fn default_min_compatibility() -> u8 {
    DEFAULT_MIN_COMPATIBILITY
}
