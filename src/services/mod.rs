// Service exports
pub mod cache;
pub mod directory;
pub mod relationships;

pub use cache::{requester_revision, CacheStats, ScoreCache, ScoreKey};
pub use directory::{CandidateDirectory, DirectoryError};
pub use relationships::{parse_action, RelationshipError, RelationshipStore};
