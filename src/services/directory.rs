use crate::models::CandidateProfile;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the candidate directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to read fixture: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid fixture format: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Duplicate candidate id: {0}")]
    DuplicateId(String),
}

/// Materialized list of candidate profiles
///
/// Loaded once per process; the matching engine only ever sees snapshots.
#[derive(Debug, Clone, Default)]
pub struct CandidateDirectory {
    candidates: Vec<CandidateProfile>,
}

impl CandidateDirectory {
    /// Build a directory from profiles already in memory
    pub fn from_profiles(candidates: Vec<CandidateProfile>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::with_capacity(candidates.len());
        for candidate in &candidates {
            if !seen.insert(candidate.id.as_str()) {
                return Err(DirectoryError::DuplicateId(candidate.id.clone()));
            }
        }
        Ok(Self { candidates })
    }

    /// Load a JSON array of candidate profiles
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, DirectoryError> {
        let candidates: Vec<CandidateProfile> = serde_json::from_str(raw)?;
        Self::from_profiles(candidates)
    }

    /// Load from an optional path, falling back to an empty directory
    pub fn load_or_empty(path: Option<&str>) -> Result<Self, DirectoryError> {
        match path {
            Some(path) if Path::new(path).exists() => {
                let directory = Self::load(path)?;
                tracing::info!("Loaded {} candidates from {}", directory.len(), path);
                Ok(directory)
            }
            Some(path) => {
                tracing::warn!("Candidate fixture {} not found, starting with an empty directory", path);
                Ok(Self::default())
            }
            None => {
                tracing::warn!("No candidate fixture configured, starting with an empty directory");
                Ok(Self::default())
            }
        }
    }

    pub fn all(&self) -> &[CandidateProfile] {
        &self.candidates
    }

    /// Owned copy for a matching pass
    pub fn snapshot(&self) -> Vec<CandidateProfile> {
        self.candidates.clone()
    }

    pub fn get(&self, id: &str) -> Option<&CandidateProfile> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
