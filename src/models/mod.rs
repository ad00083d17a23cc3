// Model exports
pub mod criteria;
pub mod domain;
pub mod requests;
pub mod responses;

pub use criteria::{ChildFilter, FilterCriteria, ALL, DEFAULT_MIN_COMPATIBILITY};
pub use domain::{
    AccountSettings, CandidateProfile, ChildProfile, ChildRecord, Compatibility, Relationship,
    RelationshipBook, RequesterProfile, ScoredCandidate, ScoringWeights,
};
pub use requests::{FindMatchesRequest, NearbyRequest, RecordRelationshipRequest};
pub use responses::{
    ErrorResponse, FindMatchesResponse, HealthResponse, MatchEntry, NearbyResponse,
    RecordRelationshipResponse,
};
