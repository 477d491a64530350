// Unit tests for Chowk Match

use chowk_match::core::{
    distance::{calculate_bounding_box, haversine_distance, is_within_bounding_box, offset_north},
    filters::{matches_candidate_query, matches_comparable_query},
    rates::{default_base_rate, demand_level, experience_multiplier},
    scoring::{calculate_distance_score, calculate_match_score, calculate_rate_score, calculate_skill_score},
};
use chowk_match::models::{
    CandidateQuery, ComparableQuery, DemandLevel, GeoPoint, JobSpec, Pay, PayType, RateCard, Rating,
    ScoringWeights, WeeklyAvailability, WorkerProfile,
};
use chrono::{TimeZone, Utc, Weekday};

fn delhi() -> GeoPoint {
    GeoPoint::new(77.2090, 28.6139)
}

fn create_profile(skills: &[&str]) -> WorkerProfile {
    WorkerProfile {
        user_id: "test".to_string(),
        name: "Test".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        experience_years: 4,
        location: delhi(),
        rate: RateCard { hourly: 150.0, daily: 800.0, project: Some(4000.0) },
        availability: WeeklyAvailability::default(),
        rating: Rating { avg: 4.0, count: 9 },
        is_available: true,
    }
}

fn create_job(start_day: u32) -> JobSpec {
    JobSpec {
        id: "job".to_string(),
        title: "Shelves".to_string(),
        skills: vec!["Carpenter".to_string()],
        location: delhi(),
        pay: Pay { amount: 800.0, pay_type: PayType::Daily },
        start_date: Utc.with_ymd_and_hms(2025, 6, start_day, 8, 0, 0).unwrap(),
    }
}

#[test]
fn test_haversine_distance_zero() {
    assert!(haversine_distance(&delhi(), &delhi()) < 0.01);
}

#[test]
fn test_haversine_distance_delhi_to_gurgaon() {
    // Connaught Place to Gurgaon Cyber City is roughly 20-30 km
    let gurgaon = GeoPoint::new(77.0890, 28.4950);
    let distance = haversine_distance(&delhi(), &gurgaon);
    assert!(distance > 15_000.0 && distance < 30_000.0, "got {}", distance);
}

#[test]
fn test_bounding_box_contains_radius() {
    let bbox = calculate_bounding_box(&delhi(), 25_000.0);

    for meters in [0.0, 10_000.0, 24_999.0] {
        assert!(is_within_bounding_box(&offset_north(&delhi(), meters), &bbox));
    }
    assert!(!is_within_bounding_box(&offset_north(&delhi(), 40_000.0), &bbox));
}

#[test]
fn test_skill_match_zero_when_disjoint() {
    let job = vec!["Electrician".to_string()];
    let profile = vec!["Painter".to_string(), "Cook".to_string()];
    assert_eq!(calculate_skill_score(&job, &profile), 0.0);
}

#[test]
fn test_distance_score_linear_decay() {
    assert_eq!(calculate_distance_score(25_000.0), 50.0);
    assert_eq!(calculate_distance_score(49_000.0), 2.0);
}

#[test]
fn test_rate_score_symmetric_gap() {
    assert_eq!(calculate_rate_score(800.0, 400.0), 50.0);
    assert_eq!(calculate_rate_score(800.0, 1200.0), 50.0);
}

#[test]
fn test_availability_follows_start_weekday() {
    // 2025-06-01 is a Sunday, 2025-06-02 a Monday
    let job_sunday = create_job(1);
    let job_monday = create_job(2);
    let profile = create_profile(&["Carpenter"]);
    let weights = ScoringWeights::default();

    let (_, sunday, _) = calculate_match_score(&job_sunday, &profile, &weights);
    let (_, monday, _) = calculate_match_score(&job_monday, &profile, &weights);

    assert_eq!(sunday.availability_score, 0.0);
    assert_eq!(monday.availability_score, 100.0);

    let mut weekend_worker = create_profile(&["Carpenter"]);
    weekend_worker.availability.day_mut(Weekday::Sun).available = true;
    let (_, sunday, _) = calculate_match_score(&job_sunday, &weekend_worker, &weights);
    assert_eq!(sunday.availability_score, 100.0);
}

#[test]
fn test_total_is_weighted_sum() {
    let job = create_job(2);
    let profile = create_profile(&["Carpenter"]);

    // skill 100, distance 100, rate 100, availability 100, experience 40, rating 80
    let (total, factors, _) = calculate_match_score(&job, &profile, &ScoringWeights::default());

    assert_eq!(factors.experience_score, 40.0);
    assert_eq!(factors.rating_score, 80.0);
    assert_eq!(total, 93);
}

#[test]
fn test_candidate_and_comparable_filters() {
    let profile = create_profile(&["Carpenter", "Painter"]);

    let candidate = CandidateQuery {
        skills: vec!["Painter".to_string()],
        center: delhi(),
        radius_m: 50_000.0,
    };
    assert!(matches_candidate_query(&profile, &candidate));

    let comparable = ComparableQuery {
        skill: "Carpenter".to_string(),
        min_experience: 5,
        max_experience: 9,
        center: delhi(),
        radius_m: 25_000.0,
    };
    assert!(!matches_comparable_query(&profile, &comparable));
}

#[test]
fn test_default_rate_table() {
    assert_eq!(default_base_rate("Carpenter"), (150.0, 800.0));
    assert_eq!(default_base_rate("Security Guard"), (100.0, 600.0));
    assert_eq!(default_base_rate("Welder"), (160.0, 850.0));
    assert_eq!(default_base_rate("Barber"), (100.0, 600.0));
}

#[test]
fn test_experience_multiplier() {
    assert_eq!(experience_multiplier(0), 1.0);
    assert!((experience_multiplier(10) - 1.5).abs() < 1e-12);
}

#[test]
fn test_demand_thresholds() {
    assert_eq!(demand_level(0), DemandLevel::High);
    assert_eq!(demand_level(14), DemandLevel::Medium);
    assert_eq!(demand_level(15), DemandLevel::Low);
}
