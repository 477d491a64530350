//! Chowk Match - worker matching and rate suggestion for the Labour Chowk marketplace
//!
//! Ranks nearby daily-wage workers for a posted job with a six-factor weighted
//! score, and suggests hourly/daily/project rates from comparable workers in
//! the neighbourhood. Both operations are read-only over a geo-indexed
//! profile store behind [`services::GeoProfileRepository`].

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Matcher, distance::haversine_distance};
pub use error::MatchingError;
pub use models::{JobSpec, WorkerProfile, MatchResult, RateSuggestion, GeoPoint, ScoringWeights};
pub use services::{GeoProfileRepository, InMemoryRepository, MatchingService};
