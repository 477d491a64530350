use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::MatchingSettings;
use crate::error::MatchingError;
use crate::models::{ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, RateSuggestion, RateSuggestionRequest};
use crate::services::{CacheKey, CacheManager, MatchingService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: MatchingService,
    pub cache: Option<Arc<CacheManager>>,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(find_matches))
        .route("/rate-suggestion", web::post().to(suggest_rates));
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.service.repository().health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "jobId": "string",
///   "limit": 10
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> Result<HttpResponse, MatchingError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return Ok(validation_failed(errors));
    }

    let limit = state.matching.effective_limit(req.limit);

    tracing::info!("Finding matches for job: {}, limit: {}", req.job_id, limit);

    let matches = state
        .service
        .find_matches(&req.job_id, limit)
        .await
        .inspect_err(|e| tracing::warn!("Matching failed for job {}: {}", req.job_id, e))?;

    tracing::info!("Returning {} matches for job {}", matches.len(), req.job_id);

    Ok(HttpResponse::Ok().json(FindMatchesResponse {
        total: matches.len(),
        matches,
    }))
}

/// Rate suggestion endpoint
///
/// POST /api/v1/rate-suggestion
///
/// Request body:
/// ```json
/// {
///   "skill": "Electrician",
///   "experienceYears": 3,
///   "location": [77.2090, 28.6139]
/// }
/// ```
async fn suggest_rates(
    state: web::Data<AppState>,
    req: web::Json<RateSuggestionRequest>,
) -> Result<HttpResponse, MatchingError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rate suggestion request: {:?}", errors);
        return Ok(validation_failed(errors));
    }

    let cache_key = CacheKey::rate_suggestion(&req.skill, req.experience_years, &req.location);

    if let Some(cache) = &state.cache {
        match cache.get::<RateSuggestion>(&cache_key).await {
            Ok(cached) => {
                tracing::debug!("Serving cached rate suggestion: {}", cache_key);
                return Ok(HttpResponse::Ok().json(cached));
            }
            Err(crate::services::CacheError::CacheMiss(_)) => {}
            Err(e) => tracing::warn!("Cache read failed for {}: {}", cache_key, e),
        }
    }

    let suggestion = state
        .service
        .suggest_rates(&req.skill, req.experience_years, req.location)
        .await
        .inspect_err(|e| tracing::warn!("Rate suggestion failed for {}: {}", req.skill, e))?;

    if let Some(cache) = &state.cache {
        if let Err(e) = cache.set(&cache_key, &suggestion).await {
            tracing::warn!("Failed to cache rate suggestion: {}", e);
        }
    }

    tracing::info!(
        "Suggested rates for {} ({} years): {:?} from {} comparables",
        req.skill,
        req.experience_years,
        suggestion.suggested,
        suggestion.factors.comparables
    );

    Ok(HttpResponse::Ok().json(suggestion))
}
