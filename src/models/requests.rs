use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::{AccountSettings, FilterCriteria};

/// Request to find ranked, filtered matches
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(nested)]
    pub requester: AccountSettings,
    #[validate(nested)]
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request for the nearby short list
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyRequest {
    #[validate(nested)]
    pub requester: AccountSettings,
}

/// Request to record a connect/accept/reject action
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordRelationshipRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "candidate_id", rename = "candidateId")]
    pub candidate_id: String,
    pub action: String,
}
