// HTTP tests for Chowk Match

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use chowk_match::config::MatchingSettings;
use chowk_match::models::{
    FindMatchesResponse, GeoPoint, HealthResponse, JobSpec, Pay, PayType, RateCard, RateSuggestion,
    Rating, WeeklyAvailability, WorkerProfile,
};
use chowk_match::routes::{self, AppState};
use chowk_match::services::CacheManager;
use chowk_match::{InMemoryRepository, MatchingService};
use chrono::{TimeZone, Utc};
use serde_json::json;

fn seeded_state(cache: Option<Arc<CacheManager>>) -> AppState {
    let site = GeoPoint::new(77.2090, 28.6139);

    let job = JobSpec {
        id: "job-1".to_string(),
        title: "Rewire flat".to_string(),
        skills: vec!["Electrician".to_string()],
        location: site,
        pay: Pay { amount: 180.0, pay_type: PayType::Hourly },
        start_date: Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap(),
    };

    let workers = (0..15)
        .map(|i| WorkerProfile {
            user_id: format!("e{}", i),
            name: format!("Electrician {}", i),
            skills: vec!["Electrician".to_string()],
            experience_years: 3,
            location: GeoPoint::new(site.longitude + i as f64 * 0.01, site.latitude),
            rate: RateCard { hourly: 180.0, daily: 900.0, project: None },
            availability: WeeklyAvailability::default(),
            rating: Rating { avg: 4.0, count: 5 },
            is_available: true,
        })
        .collect();

    AppState {
        service: MatchingService::with_default_weights(Arc::new(InMemoryRepository::with_data(
            vec![job],
            workers,
        ))),
        cache,
        matching: MatchingSettings { default_limit: 10, max_limit: 12 },
    }
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health() {
    let app = app!(seeded_state(None));

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.status, "healthy");
}

#[actix_web::test]
async fn test_match_default_and_capped_limit() {
    let app = app!(seeded_state(None));

    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({ "jobId": "job-1" }))
        .to_request();
    let body: FindMatchesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.total, 10);
    assert_eq!(body.matches[0].labourer_id, "e0");

    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({ "jobId": "job-1", "limit": 50 }))
        .to_request();
    let body: FindMatchesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.total, 12);
}

#[actix_web::test]
async fn test_match_unknown_job_is_404() {
    let app = app!(seeded_state(None));

    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({ "jobId": "nope" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_match_validation_errors_are_400() {
    let app = app!(seeded_state(None));

    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({ "jobId": "job-1", "limit": 0 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_rate_suggestion_from_market() {
    let app = app!(seeded_state(Some(Arc::new(CacheManager::local_only(100, 60)))));

    let payload = json!({
        "skill": "Electrician",
        "experienceYears": 2,
        "location": [77.2090, 28.6139]
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/rate-suggestion")
        .set_json(&payload)
        .to_request();
    let first: RateSuggestion = test::call_and_read_body_json(&app, req).await;

    // 180/900 averages scaled by 1.1
    assert_eq!(first.suggested.hourly, 198);
    assert_eq!(first.suggested.daily, 990);

    // Served from cache on repeat
    let req = test::TestRequest::post()
        .uri("/api/v1/rate-suggestion")
        .set_json(&payload)
        .to_request();
    let second: RateSuggestion = test::call_and_read_body_json(&app, req).await;
    assert_eq!(first, second);
}

#[actix_web::test]
async fn test_rate_suggestion_rejects_bad_location() {
    let app = app!(seeded_state(None));

    let req = test::TestRequest::post()
        .uri("/api/v1/rate-suggestion")
        .set_json(json!({ "skill": "Cook", "experienceYears": 1, "location": [500.0, 28.6] }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/rate-suggestion")
        .set_json(json!({ "skill": "Cook", "experienceYears": 1, "location": [77.2] }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_cached_rate_suggestion_echoes_each_location() {
    let app = app!(seeded_state(Some(Arc::new(CacheManager::local_only(100, 60)))));

    let first_point = [77.2091, 28.6139];
    let second_point = [77.2094, 28.6141];

    for point in [first_point, second_point] {
        let req = test::TestRequest::post()
            .uri("/api/v1/rate-suggestion")
            .set_json(json!({ "skill": "Electrician", "experienceYears": 2, "location": point }))
            .to_request();
        let body: RateSuggestion = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.factors.location, GeoPoint::new(point[0], point[1]));
    }
}
