//! Mum Match - compatibility scoring and filter engine for mother matching
//!
//! This library ranks candidate mother profiles against the current user and
//! narrows them by the filter panel criteria. The engine in [`core`] is pure
//! and synchronous; [`routes`] and [`services`] expose it as a JSON service.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, ProximityGraph, default_graph, parse_range};
pub use crate::models::{CandidateProfile, RequesterProfile, FilterCriteria, ChildFilter, ScoredCandidate, ScoringWeights};
