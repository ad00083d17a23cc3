use crate::models::{Relationship, RelationshipBook};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur when recording a relationship action
#[derive(Debug, Error)]
pub enum RelationshipError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Cannot record a relationship with yourself")]
    SelfRelationship,
}

/// Parse a connect/accept/reject action
pub fn parse_action(action: &str) -> Result<Relationship, RelationshipError> {
    match action.trim().to_lowercase().as_str() {
        "connect" | "connected" => Ok(Relationship::Connected),
        "accept" | "accepted" => Ok(Relationship::Accepted),
        "reject" | "rejected" => Ok(Relationship::Rejected),
        other => Err(RelationshipError::UnknownAction(other.to_string())),
    }
}

/// Relationship books of every user
pub struct RelationshipStore {
    books: RwLock<HashMap<String, RelationshipBook>>,
}

impl RelationshipStore {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
        }
    }

    /// Record a relationship, returning the previous state with that candidate
    pub async fn record(
        &self,
        user_id: &str,
        candidate_id: &str,
        relationship: Relationship,
    ) -> Result<Option<Relationship>, RelationshipError> {
        if user_id == candidate_id {
            return Err(RelationshipError::SelfRelationship);
        }

        let mut books = self.books.write().await;
        let previous = books
            .entry(user_id.to_string())
            .or_default()
            .record(candidate_id, relationship);

        tracing::debug!(
            "Recorded relationship {} -> {}: {:?} (was {:?})",
            user_id,
            candidate_id,
            relationship,
            previous
        );
        Ok(previous)
    }

    /// Snapshot of a user's book, empty when nothing was recorded
    pub async fn book(&self, user_id: &str) -> RelationshipBook {
        self.books
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for RelationshipStore {
    fn default() -> Self {
        Self::new()
    }
}
