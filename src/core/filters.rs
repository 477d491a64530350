use crate::models::{WorkerProfile, CandidateQuery, ComparableQuery, GeoPoint};
use crate::core::distance::{haversine_distance, is_within_bounding_box, calculate_bounding_box};

/// Check if a profile is a match candidate for a job query
///
/// Any repository implementation must return exactly the profiles this
/// predicate accepts. Stores with their own spatial index use it to refine
/// a coarser pre-filter.
#[inline]
pub fn matches_candidate_query(profile: &WorkerProfile, query: &CandidateQuery) -> bool {
    if !profile.is_available {
        return false;
    }

    // Shares at least one skill with the job
    if !profile.skills.iter().any(|s| query.skills.contains(s)) {
        return false;
    }

    is_within_radius(profile, query.center, query.radius_m)
}

/// Check if a profile is comparable for a rate suggestion query
#[inline]
pub fn matches_comparable_query(profile: &WorkerProfile, query: &ComparableQuery) -> bool {
    if !profile.has_skill(&query.skill) {
        return false;
    }

    if profile.experience_years < query.min_experience
        || profile.experience_years > query.max_experience {
        return false;
    }

    is_within_radius(profile, query.center, query.radius_m)
}

/// Bounding box pre-filter followed by the exact Haversine check
#[inline]
fn is_within_radius(profile: &WorkerProfile, center: GeoPoint, radius_m: f64) -> bool {
    let bbox = calculate_bounding_box(&center, radius_m);
    if !is_within_bounding_box(&profile.location, &bbox) {
        return false;
    }

    haversine_distance(&center, &profile.location) <= radius_m
}
