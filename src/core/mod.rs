// Core algorithm exports
pub mod children;
pub mod filters;
pub mod matcher;
pub mod nearby;
pub mod proximity;
pub mod range;
pub mod ranker;
pub mod scoring;

pub use children::{has_close_child_age, matches_child_filter};
pub use filters::{apply_filters, check_candidate, matches_exact, matches_query, FilterStats, Rejection};
pub use matcher::{is_candidate_for, MatchResult, Matcher};
pub use nearby::{find_nearby, is_nearby_match, NEARBY_LIMIT};
pub use proximity::{default_graph, ProximityGraph};
pub use range::{parse_range, AgeRange};
pub use ranker::rank;
pub use scoring::{calculate_compatibility, CHILD_AGE_TOLERANCE, MAX_SCORE};
