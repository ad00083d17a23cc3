use serde::{Deserialize, Serialize};
use crate::core::FilterStats;
use crate::models::domain::{CandidateProfile, Relationship, ScoredCandidate};

/// One entry of the find matches response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    #[serde(flatten)]
    pub candidate: ScoredCandidate,
    pub relationship: Option<Relationship>,
}

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesResponse {
    pub matches: Vec<MatchEntry>,
    pub total_results: usize,
    pub total_candidates: usize,
    pub filter_stats: FilterStats,
}

/// Response for nearby endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyResponse {
    pub nearby: Vec<CandidateProfile>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub candidates: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Record relationship response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRelationshipResponse {
    pub success: bool,
    pub event_id: String,
    pub previous: Option<Relationship>,
}
