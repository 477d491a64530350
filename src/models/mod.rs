// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BoundingBox, CandidateQuery, ComparableQuery, DayAvailability, DemandLevel, GeoPoint, JobSpec,
    MarketBand, MatchFactors, MatchResult, Pay, PayType, RateBasis, RateCard, RateFactors,
    RateSuggestion, Rating, ScoringWeights, SuggestedRates, WeeklyAvailability, WorkerProfile,
};
pub use requests::{FindMatchesRequest, RateSuggestionRequest};
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse};
