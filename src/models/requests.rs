use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::GeoPoint;

/// Request to find matching workers for a job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "job_id", rename = "jobId")]
    pub job_id: String,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

/// Request for a rate suggestion
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RateSuggestionRequest {
    #[validate(custom(function = "validate_skill"))]
    pub skill: String,
    // Mirrors MAX_EXPERIENCE_YEARS in the matching service
    #[validate(range(max = 50))]
    #[serde(alias = "experience_years", rename = "experienceYears")]
    pub experience_years: u32,
    #[validate(custom(function = "validate_location"))]
    pub location: GeoPoint,
}

fn validate_skill(skill: &str) -> Result<(), ValidationError> {
    if skill.trim().is_empty() {
        return Err(ValidationError::new("blank_skill"));
    }
    Ok(())
}

fn validate_location(location: &GeoPoint) -> Result<(), ValidationError> {
    if !location.is_valid() {
        return Err(ValidationError::new("invalid_coordinates"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_matches_limit_optional() {
        let req: FindMatchesRequest = serde_json::from_str(r#"{"jobId": "job-1"}"#).unwrap();
        assert_eq!(req.limit, None);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_find_matches_rejects_empty_job_and_zero_limit() {
        let req: FindMatchesRequest =
            serde_json::from_str(r#"{"jobId": "", "limit": 0}"#).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("job_id"));
        assert!(fields.contains_key("limit"));
    }

    #[test]
    fn test_rate_request_validation() {
        let ok: RateSuggestionRequest = serde_json::from_str(
            r#"{"skill": "Mason", "experienceYears": 4, "location": [77.2, 28.6]}"#,
        )
        .unwrap();
        assert!(ok.validate().is_ok());

        let bad: RateSuggestionRequest = serde_json::from_str(
            r#"{"skill": "  ", "experienceYears": 60, "location": [277.2, 28.6]}"#,
        )
        .unwrap();
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("skill"));
        assert!(fields.contains_key("experience_years"));
        assert!(fields.contains_key("location"));
    }

    #[test]
    fn test_rate_request_rejects_short_location() {
        let parsed: Result<RateSuggestionRequest, _> = serde_json::from_str(
            r#"{"skill": "Mason", "experienceYears": 4, "location": [77.2]}"#,
        );
        assert!(parsed.is_err());
    }
}
