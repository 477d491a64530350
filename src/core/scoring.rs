use chrono::Datelike;
use crate::models::{JobSpec, WorkerProfile, MatchFactors, ScoringWeights};
use crate::core::distance::haversine_distance;

/// Distance score loses this many points per kilometer
const DISTANCE_POINTS_PER_KM: f64 = 2.0;

/// Experience score gains this many points per year
const EXPERIENCE_POINTS_PER_YEAR: f64 = 10.0;

/// Highest possible rating average
const MAX_RATING: f64 = 5.0;

/// Score a worker profile against a job
///
/// Returns the rounded total (0-100), the per-factor breakdown and the
/// Haversine distance in meters that fed the distance factor.
///
/// Scoring formula:
/// total = round(
///     skill_match * 0.40 +         # Share of job skills the worker has
///     distance_score * 0.20 +      # Minus 2 points per km
///     rate_score * 0.15 +          # Relative gap between pay and worker rate
///     availability_score * 0.10 +  # Free on the job's start weekday
///     experience_score * 0.10 +    # 10 points per year, capped
///     rating_score * 0.05          # Average review rating
/// )
///
/// The caller guarantees a positive job pay amount.
pub fn calculate_match_score(
    job: &JobSpec,
    profile: &WorkerProfile,
    weights: &ScoringWeights,
) -> (u8, MatchFactors, f64) {
    let distance_m = haversine_distance(&job.location, &profile.location);
    let profile_rate = profile.rate.for_pay_type(job.pay.pay_type);
    let start_weekday = job.start_date.weekday();

    let factors = MatchFactors {
        skill_match: calculate_skill_score(&job.skills, &profile.skills),
        distance_score: calculate_distance_score(distance_m),
        rate_score: calculate_rate_score(job.pay.amount, profile_rate),
        availability_score: if profile.availability.is_available_on(start_weekday) { 100.0 } else { 0.0 },
        experience_score: calculate_experience_score(profile.experience_years),
        rating_score: calculate_rating_score(profile.rating.avg),
    };

    let total = factors.skill_match * weights.skill
        + factors.distance_score * weights.distance
        + factors.rate_score * weights.rate
        + factors.availability_score * weights.availability
        + factors.experience_score * weights.experience
        + factors.rating_score * weights.rating;

    (total.round().clamp(0.0, 100.0) as u8, factors, distance_m)
}

/// Share of the job's distinct skills the worker has, as a percentage
pub fn calculate_skill_score(job_skills: &[String], profile_skills: &[String]) -> f64 {
    let mut required: Vec<&str> = job_skills.iter().map(String::as_str).collect();
    required.sort_unstable();
    required.dedup();

    if required.is_empty() {
        return 0.0;
    }

    let common = required
        .iter()
        .filter(|skill| profile_skills.iter().any(|s| s == *skill))
        .count();

    clamp_score(common as f64 / required.len() as f64 * 100.0)
}

/// 100 at the job site, minus 2 points per kilometer
#[inline]
pub fn calculate_distance_score(distance_m: f64) -> f64 {
    clamp_score(100.0 - (distance_m / 1000.0) * DISTANCE_POINTS_PER_KM)
}

/// 100 when the worker's rate equals the job's pay, falling linearly with the relative gap
#[inline]
pub fn calculate_rate_score(pay_amount: f64, profile_rate: f64) -> f64 {
    let rate_diff = (pay_amount - profile_rate).abs() / pay_amount;
    clamp_score(100.0 - rate_diff * 100.0)
}

#[inline]
pub fn calculate_experience_score(experience_years: u32) -> f64 {
    clamp_score(experience_years as f64 * EXPERIENCE_POINTS_PER_YEAR)
}

#[inline]
pub fn calculate_rating_score(rating_avg: f64) -> f64 {
    clamp_score(rating_avg / MAX_RATING * 100.0)
}

/// Clamp into [0, 100]; NaN maps to 0
#[inline]
fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}
