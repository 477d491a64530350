// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod rates;
pub mod scoring;

pub use distance::{haversine_distance, calculate_bounding_box, is_within_bounding_box};
pub use filters::{matches_candidate_query, matches_comparable_query};
pub use matcher::{Matcher, MATCH_RADIUS_M};
pub use rates::{suggest_rates, demand_level, RATE_RADIUS_M};
pub use scoring::calculate_match_score;
