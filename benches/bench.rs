// Criterion benchmarks for Chowk Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use chowk_match::core::{
    distance::{calculate_bounding_box, haversine_distance},
    rates::suggest_rates,
    Matcher,
};
use chowk_match::models::{GeoPoint, JobSpec, Pay, PayType, RateCard, Rating, WeeklyAvailability, WorkerProfile};
use chrono::{TimeZone, Utc};

const SKILLS: &[&str] = &["Carpenter", "Plumber", "Electrician", "Painter", "Mason", "Welder"];

fn site() -> GeoPoint {
    GeoPoint::new(77.2090, 28.6139)
}

fn create_candidate(id: usize) -> WorkerProfile {
    let offset = (id as f64 * 0.001) % 0.4;
    WorkerProfile {
        user_id: id.to_string(),
        name: format!("Worker {}", id),
        skills: vec![SKILLS[id % SKILLS.len()].to_string(), SKILLS[(id + 1) % SKILLS.len()].to_string()],
        experience_years: (id % 15) as u32,
        location: GeoPoint::new(site().longitude + offset, site().latitude + offset),
        rate: RateCard {
            hourly: 100.0 + (id % 50) as f64,
            daily: 600.0 + (id % 300) as f64,
            project: None,
        },
        availability: WeeklyAvailability::default(),
        rating: Rating { avg: (id % 6) as f64 * 0.8, count: (id % 40) as u32 },
        is_available: true,
    }
}

fn create_job() -> JobSpec {
    JobSpec {
        id: "bench-job".to_string(),
        title: "Renovation".to_string(),
        skills: vec!["Plumber".to_string(), "Mason".to_string()],
        location: site(),
        pay: Pay { amount: 750.0, pay_type: PayType::Daily },
        start_date: Utc.with_ymd_and_hms(2025, 3, 3, 8, 0, 0).unwrap(),
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    let a = site();
    let b = GeoPoint::new(77.3910, 28.5355);
    c.bench_function("haversine_distance", |bench| {
        bench.iter(|| haversine_distance(black_box(&a), black_box(&b)));
    });
}

fn bench_bounding_box(c: &mut Criterion) {
    c.bench_function("bounding_box_calculation", |b| {
        b.iter(|| calculate_bounding_box(black_box(&site()), black_box(50_000.0)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let job = create_job();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<WorkerProfile> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| matcher.rank(black_box(&job), black_box(candidates.clone()), black_box(10)));
            },
        );
    }

    group.finish();
}

fn bench_rate_suggestion(c: &mut Criterion) {
    let comparables: Vec<WorkerProfile> = (0..200).map(create_candidate).collect();

    c.bench_function("suggest_rates_200_comparables", |b| {
        b.iter(|| suggest_rates(black_box("Mason"), black_box(5), black_box(site()), black_box(&comparables)));
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_bounding_box,
    bench_ranking,
    bench_rate_suggestion
);

criterion_main!(benches);
