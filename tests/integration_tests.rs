// Integration tests for Mum Match

use actix_web::{test, web, App};
use mum_match::core::{Matcher, NEARBY_LIMIT};
use mum_match::models::{
    CandidateProfile, ChildFilter, ChildProfile, FilterCriteria, FindMatchesResponse, NearbyResponse,
    RecordRelationshipResponse, Relationship, RequesterProfile,
};
use mum_match::routes::{self, AppState, MatchLimits};
use mum_match::services::{CandidateDirectory, RelationshipStore, ScoreCache};
use serde_json::json;
use std::collections::BTreeSet;
use std::sync::Arc;

fn interests(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn scenario_requester() -> RequesterProfile {
    RequesterProfile {
        id: "me".to_string(),
        display_name: "Me".to_string(),
        age: 33,
        neighborhood: "Dubai Marina".to_string(),
        children: vec![ChildProfile::new(3, "Boy")],
        nationality: "British Expat".to_string(),
        employment_status: "Part-time".to_string(),
        interests: interests(&["Yoga", "Reading"]),
    }
}

fn candidate_a() -> CandidateProfile {
    CandidateProfile {
        id: "a".to_string(),
        display_name: "Candidate A".to_string(),
        age: 32,
        neighborhood: "Dubai Marina".to_string(),
        children: vec![ChildProfile::new(4, "Girl")],
        nationality: "British Expat".to_string(),
        employment_status: "Part-time".to_string(),
        interests: interests(&["Yoga", "Reading", "Beach Days"]),
        bio: "Beach playdates".to_string(),
    }
}

fn candidate_b() -> CandidateProfile {
    CandidateProfile {
        id: "b".to_string(),
        display_name: "Candidate B".to_string(),
        age: 36,
        neighborhood: "Palm Jumeirah".to_string(),
        children: vec![ChildProfile::new(10, "Boy")],
        nationality: "Chinese Expat".to_string(),
        employment_status: "Full-time".to_string(),
        interests: BTreeSet::new(),
        bio: String::new(),
    }
}

fn create_test_profile(id: &str, neighborhood: &str, child_age: u8) -> CandidateProfile {
    CandidateProfile {
        id: id.to_string(),
        display_name: format!("Mum {}", id),
        age: 30,
        neighborhood: neighborhood.to_string(),
        children: vec![ChildProfile::new(child_age, "Boy")],
        nationality: "British Expat".to_string(),
        employment_status: "Part-time".to_string(),
        interests: interests(&["Yoga"]),
        bio: String::new(),
    }
}

#[std::prelude::v1::test]
fn test_integration_example_scenario() {
    let matcher = Matcher::with_default_weights();
    let requester = scenario_requester();

    assert_eq!(matcher.score(&requester, &candidate_a()).score, 95);
    assert_eq!(matcher.score(&requester, &candidate_b()).score, 30);

    let result = matcher.find_matches(&requester, vec![candidate_b(), candidate_a()], &FilterCriteria::default());
    let ids: Vec<&str> = result.matches.iter().map(|m| m.profile.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);
    assert_eq!(result.total_candidates, 2);

    let candidates = vec![candidate_a(), candidate_b()];
    let nearby = matcher.nearby(&requester, &candidates);
    let nearby_ids: Vec<&str> = nearby.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(nearby_ids, vec!["a"]);
}

#[std::prelude::v1::test]
fn test_integration_ranked_and_filtered() {
    let matcher = Matcher::with_default_weights();
    let requester = scenario_requester();

    let candidates = vec![
        create_test_profile("1", "Mirdif", 3),        // 0 + 30 + 10 + 5 + 5 = 50
        create_test_profile("2", "JBR", 4),           // 30 + 30 + 10 + 5 + 5 = 80
        create_test_profile("3", "Dubai Marina", 9),  // 40 + 0 + 10 + 5 + 5 = 60
        create_test_profile("4", "Dubai Marina", 2),  // 40 + 30 + 10 + 5 + 5 = 90
        create_test_profile("5", "JLT", 5),           // 30 + 30 + 10 + 5 + 5 = 80
    ];

    let result = matcher.find_matches(&requester, candidates.clone(), &FilterCriteria::unfiltered());
    let ranked: Vec<(&str, u8)> = result
        .matches
        .iter()
        .map(|m| (m.profile.id.as_str(), m.compatibility_score))
        .collect();
    assert_eq!(ranked, vec![("4", 90), ("2", 80), ("5", 80), ("3", 60), ("1", 50)]);

    for pair in result.matches.windows(2) {
        assert!(pair[0].compatibility_score >= pair[1].compatibility_score);
    }

    let criteria = FilterCriteria {
        neighborhood: "Dubai Marina".to_string(),
        min_compatibility: 0,
        child_filters: vec![ChildFilter::new("0-3", "Boy")],
        ..FilterCriteria::default()
    };
    let result = matcher.find_matches(&requester, candidates, &criteria);
    let ids: Vec<&str> = result.matches.iter().map(|m| m.profile.id.as_str()).collect();
    assert_eq!(ids, vec!["4"]);
    assert_eq!(result.stats.filtered_by_children, 3);
    assert_eq!(result.stats.filtered_by_neighborhood, 1);
}

#[std::prelude::v1::test]
fn test_integration_nearby_cap() {
    let matcher = Matcher::with_default_weights();
    let requester = scenario_requester();
    let candidates: Vec<CandidateProfile> = (0..10)
        .map(|i| create_test_profile(&i.to_string(), "Dubai Marina", 3))
        .collect();

    let nearby = matcher.nearby(&requester, &candidates);

    assert_eq!(nearby.len(), NEARBY_LIMIT);
    assert_eq!(nearby[0].id, "0");
    assert_eq!(nearby[2].id, "2");
}

fn test_state() -> AppState {
    let directory = CandidateDirectory::from_profiles(vec![
        candidate_a(),
        candidate_b(),
        create_test_profile("c", "JBR", 2),
        create_test_profile("me", "Dubai Marina", 3),
    ])
    .unwrap();

    AppState {
        directory: Arc::new(directory),
        relationships: Arc::new(RelationshipStore::new()),
        cache: Arc::new(ScoreCache::new(1_000, 60)),
        matcher: Matcher::with_default_weights(),
        limits: MatchLimits::default(),
    }
}

fn requester_json() -> serde_json::Value {
    json!({
        "userId": "me",
        "displayName": "Me",
        "neighborhood": "Dubai Marina",
        "children": [{ "gender": "Boy" }],
        "nationality": "British Expat",
        "employmentStatus": "Part-time",
        "interests": ["Yoga", "Reading"]
    })
}

#[actix_web::test]
async fn test_route_find_matches() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(routes::configure_payload_errors)
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({ "requester": requester_json(), "criteria": { "minCompatibility": 50 } }))
        .to_request();
    let resp: FindMatchesResponse = test::call_and_read_body_json(&app, req).await;

    // Child without birth date adds nothing; self is excluded
    let scores: Vec<(&str, u8)> = resp
        .matches
        .iter()
        .map(|m| (m.candidate.profile.id.as_str(), m.candidate.compatibility_score))
        .collect();
    assert_eq!(scores, vec![("a", 65), ("c", 50)]);
    assert_eq!(resp.total_candidates, 3);
    assert_eq!(resp.total_results, 2);
    assert!(resp.matches.iter().all(|m| m.relationship.is_none()));
}

#[actix_web::test]
async fn test_route_rejected_candidates_hidden() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/relationship")
        .set_json(json!({ "userId": "me", "candidateId": "a", "action": "reject" }))
        .to_request();
    let resp: RecordRelationshipResponse = test::call_and_read_body_json(&app, req).await;
    assert!(resp.success);
    assert_eq!(resp.previous, None);

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/relationship")
        .set_json(json!({ "userId": "me", "candidateId": "c", "action": "connect" }))
        .to_request();
    let _: RecordRelationshipResponse = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({ "requester": requester_json(), "criteria": { "minCompatibility": 0 } }))
        .to_request();
    let resp: FindMatchesResponse = test::call_and_read_body_json(&app, req).await;

    assert!(resp.matches.iter().all(|m| m.candidate.profile.id != "a"));
    let connected = resp
        .matches
        .iter()
        .find(|m| m.candidate.profile.id == "c")
        .and_then(|m| m.relationship);
    assert_eq!(connected, Some(Relationship::Connected));
}

#[actix_web::test]
async fn test_route_nearby() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/nearby")
        .set_json(json!({ "requester": {
            "userId": "me",
            "neighborhood": "Dubai Marina",
            "children": [{ "birthDate": "2000-01-01", "gender": "Boy" }]
        } }))
        .to_request();
    let resp: NearbyResponse = test::call_and_read_body_json(&app, req).await;

    // Requester's child is an adult now, so no one has a close child age
    assert!(resp.nearby.is_empty());
}

#[actix_web::test]
async fn test_route_validation_errors() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(routes::configure_payload_errors)
            .configure(routes::configure_routes),
    )
    .await;

    let too_many_slots = json!({
        "requester": requester_json(),
        "criteria": { "childFilters": [{}, {}, {}, {}] }
    });
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(too_many_slots)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/relationship")
        .set_json(json!({ "userId": "me", "candidateId": "a", "action": "poke" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::get()
        .uri("/api/v1/matches/relationships")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_route_health() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["candidates"], 4);
}
