use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{is_candidate_for, Matcher};
use crate::models::{
    CandidateProfile, ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, MatchEntry,
    NearbyRequest, NearbyResponse, RecordRelationshipRequest, RecordRelationshipResponse, RelationshipBook,
    RequesterProfile, ScoredCandidate,
};
use crate::services::{parse_action, requester_revision, CandidateDirectory, RelationshipStore, ScoreCache, ScoreKey};
use std::sync::Arc;

/// Result size limits for the find endpoint
#[derive(Debug, Clone, Copy)]
pub struct MatchLimits {
    pub default_limit: u16,
    pub max_limit: u16,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<CandidateDirectory>,
    pub relationships: Arc<RelationshipStore>,
    pub cache: Arc<ScoreCache>,
    pub matcher: Matcher,
    pub limits: MatchLimits,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/neighborhoods", web::get().to(list_neighborhoods))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/nearby", web::post().to(find_nearby))
        .route("/matches/relationship", web::post().to(record_relationship))
        .route("/matches/relationships", web::get().to(get_relationships));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

/// Today's date in UTC, used to derive children's ages
fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Candidates the requester has not rejected
fn visible_candidates<'a>(
    directory: &'a CandidateDirectory,
    book: &'a RelationshipBook,
) -> impl Iterator<Item = &'a CandidateProfile> {
    directory.all().iter().filter(move |c| !book.is_rejected(&c.id))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.directory.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        candidates: state.directory.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Neighborhood adjacency used for proximity
///
/// GET /api/v1/neighborhoods
async fn list_neighborhoods(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.matcher.graph().to_sorted())
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "requester": { "userId": "string", "neighborhood": "string", "children": [] },
///   "criteria": { "childFilters": [], "minCompatibility": 70 },
///   "limit": 20
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let req = req.into_inner();
    let requester = RequesterProfile::from_settings(&req.requester, today());
    let limit = usize::from(
        req.limit
            .unwrap_or(state.limits.default_limit)
            .min(state.limits.max_limit),
    );

    tracing::info!("Finding matches for user: {}, limit: {}", requester.id, limit);

    let book = state.relationships.book(&requester.id).await;
    let revision = requester_revision(&requester, state.matcher.weights());

    let mut scored = Vec::with_capacity(state.directory.len());
    let pool = visible_candidates(&state.directory, &book).filter(|c| is_candidate_for(&requester, c));
    for candidate in pool {
        let key = ScoreKey::new(&requester.id, &candidate.id, revision);
        let compatibility = state
            .cache
            .get_or_score(key, || state.matcher.score(&requester, candidate))
            .await;
        scored.push(ScoredCandidate::new(candidate.clone(), compatibility));
    }

    let mut result = state.matcher.rank_and_filter(scored, &req.criteria);
    let total_results = result.matches.len();
    result.matches.truncate(limit);

    let matches: Vec<MatchEntry> = result
        .matches
        .into_iter()
        .map(|candidate| MatchEntry {
            relationship: book.status(&candidate.profile.id),
            candidate,
        })
        .collect();

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        matches.len(),
        requester.id,
        result.total_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches,
        total_results,
        total_candidates: result.total_candidates,
        filter_stats: result.stats,
    })
}

/// Nearby short list endpoint
///
/// POST /api/v1/matches/nearby
async fn find_nearby(
    state: web::Data<AppState>,
    req: web::Json<NearbyRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let requester = RequesterProfile::from_settings(&req.requester, today());
    let book = state.relationships.book(&requester.id).await;
    let candidates: Vec<CandidateProfile> = visible_candidates(&state.directory, &book).cloned().collect();

    let nearby: Vec<CandidateProfile> = state
        .matcher
        .nearby(&requester, &candidates)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!("Found {} nearby mums for {}", nearby.len(), requester.id);

    HttpResponse::Ok().json(NearbyResponse { nearby })
}

/// Record relationship endpoint
///
/// POST /api/v1/matches/relationship
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "candidateId": "string",
///   "action": "connect|accept|reject"
/// }
/// ```
async fn record_relationship(
    state: web::Data<AppState>,
    req: web::Json<RecordRelationshipRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let relationship = match parse_action(&req.action) {
        Ok(relationship) => relationship,
        Err(e) => {
            return bad_request(
                "Invalid action",
                format!("{}. Action must be one of: connect, accept, reject", e),
            );
        }
    };

    if state.directory.get(&req.candidate_id).is_none() {
        tracing::warn!("Recording relationship with unknown candidate {}", req.candidate_id);
    }

    match state
        .relationships
        .record(&req.user_id, &req.candidate_id, relationship)
        .await
    {
        Ok(previous) => HttpResponse::Ok().json(RecordRelationshipResponse {
            success: true,
            event_id: uuid::Uuid::new_v4().to_string(),
            previous,
        }),
        Err(e) => bad_request("Invalid relationship", e.to_string()),
    }
}

/// Get a user's relationship book
///
/// GET /api/v1/matches/relationships?userId={userId}
async fn get_relationships(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let user_id = match query.get("userId") {
        Some(id) => id,
        None => {
            return bad_request(
                "Missing userId parameter",
                "userId query parameter is required".to_string(),
            );
        }
    };

    let book = state.relationships.book(user_id).await;
    let relationships: std::collections::BTreeMap<&str, _> = book.iter().collect();

    HttpResponse::Ok().json(serde_json::json!({
        "userId": user_id,
        "relationships": relationships,
        "count": book.len(),
    }))
}
