use std::sync::Arc;

use crate::core::{rates, Matcher, MATCH_RADIUS_M, RATE_RADIUS_M};
use crate::error::MatchingError;
use crate::models::{CandidateQuery, ComparableQuery, GeoPoint, MatchResult, RateSuggestion};
use crate::services::repository::GeoProfileRepository;

/// Highest experience accepted for rate suggestions
///
/// A sanity bound on input: at 0.05 per year the multiplier would otherwise
/// grow without limit on typos such as 300.
pub const MAX_EXPERIENCE_YEARS: u32 = 50;

/// Matching and rate suggestion operations over a profile store
///
/// Stateless apart from its repository handle; clones share the handle and
/// can serve any number of concurrent requests. Store failures propagate as
/// `MatchingError::UpstreamFailure` without retries.
#[derive(Clone)]
pub struct MatchingService {
    repository: Arc<dyn GeoProfileRepository>,
    matcher: Matcher,
}

impl MatchingService {
    pub fn new(repository: Arc<dyn GeoProfileRepository>, matcher: Matcher) -> Self {
        Self { repository, matcher }
    }

    pub fn with_default_weights(repository: Arc<dyn GeoProfileRepository>) -> Self {
        Self::new(repository, Matcher::with_default_weights())
    }

    pub fn repository(&self) -> &Arc<dyn GeoProfileRepository> {
        &self.repository
    }

    /// Rank nearby workers for a job
    ///
    /// Candidates share at least one skill with the job, are flagged
    /// available and sit within 50km of the job site. Returns at most
    /// `limit` results ordered by score.
    pub async fn find_matches(&self, job_id: &str, limit: usize) -> Result<Vec<MatchResult>, MatchingError> {
        if job_id.trim().is_empty() {
            return Err(MatchingError::InvalidArgument("job id must not be empty".to_string()));
        }
        if limit == 0 {
            return Err(MatchingError::InvalidArgument("limit must be positive".to_string()));
        }

        let job = self
            .repository
            .find_job(job_id)
            .await?
            .ok_or_else(|| MatchingError::NotFound(format!("job {}", job_id)))?;

        Matcher::validate_job(&job)?;

        let query = CandidateQuery {
            skills: job.skills.clone(),
            center: job.location,
            radius_m: MATCH_RADIUS_M,
        };

        let candidates = self.repository.find_candidates(&query).await?;
        let candidate_count = candidates.len();

        let matches = self.matcher.rank(&job, candidates, limit)?;

        tracing::debug!(
            "Ranked {} candidates for job {}, returning {}",
            candidate_count,
            job_id,
            matches.len()
        );

        Ok(matches)
    }

    /// Suggest hourly, daily and project rates for a skill at a location
    ///
    /// Comparable workers have the skill, are within two years of the given
    /// experience and sit within 25km. With none, a static per-skill table is
    /// used.
    pub async fn suggest_rates(
        &self,
        skill: &str,
        experience_years: u32,
        location: GeoPoint,
    ) -> Result<RateSuggestion, MatchingError> {
        let skill = skill.trim();
        if skill.is_empty() {
            return Err(MatchingError::InvalidArgument("skill must not be empty".to_string()));
        }
        if experience_years > MAX_EXPERIENCE_YEARS {
            return Err(MatchingError::InvalidArgument(format!(
                "experience must be at most {} years",
                MAX_EXPERIENCE_YEARS
            )));
        }
        if !location.is_valid() {
            return Err(MatchingError::InvalidArgument(format!(
                "location {:?} is not a valid [longitude, latitude] pair",
                location
            )));
        }

        let (min_experience, max_experience) = rates::experience_window(experience_years);
        let query = ComparableQuery {
            skill: skill.to_string(),
            min_experience,
            max_experience,
            center: location,
            radius_m: RATE_RADIUS_M,
        };

        let comparables = self.repository.find_comparables(&query).await?;

        tracing::debug!(
            "Found {} comparable {} profiles for {} years",
            comparables.len(),
            skill,
            experience_years
        );

        Ok(rates::suggest_rates(skill, experience_years, location, &comparables))
    }
}
