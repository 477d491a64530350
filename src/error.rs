use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::services::StoreError;

/// Errors surfaced by the matching and rate suggestion operations
#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Upstream failure: {0}")]
    UpstreamFailure(#[from] StoreError),
}

impl MatchingError {
    fn kind(&self) -> &'static str {
        match self {
            MatchingError::NotFound(_) => "not_found",
            MatchingError::InvalidArgument(_) => "invalid_argument",
            MatchingError::UpstreamFailure(_) => "upstream_failure",
        }
    }
}

impl ResponseError for MatchingError {
    fn status_code(&self) -> StatusCode {
        match self {
            MatchingError::NotFound(_) => StatusCode::NOT_FOUND,
            MatchingError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            MatchingError::UpstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}
