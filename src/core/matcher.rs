use std::cmp::Ordering;

use crate::error::MatchingError;
use crate::models::{JobSpec, WorkerProfile, MatchResult, ScoringWeights};
use crate::core::scoring::calculate_match_score;

/// Candidates are drawn from this radius around the job site
pub const MATCH_RADIUS_M: f64 = 50_000.0;

/// Ranks candidate workers for a job
///
/// # Pipeline Stages
/// 1. Job sanity checks (pay amount, location)
/// 2. Six-factor scoring per candidate
/// 3. Ranking: score descending, then distance ascending, then worker id
/// 4. Truncation to the requested limit
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Reject jobs that cannot be scored
    pub fn validate_job(job: &JobSpec) -> Result<(), MatchingError> {
        if !job.pay.amount.is_finite() || job.pay.amount <= 0.0 {
            return Err(MatchingError::InvalidArgument(format!(
                "job {} has non-positive pay amount {}",
                job.id, job.pay.amount
            )));
        }

        if !job.location.is_valid() {
            return Err(MatchingError::InvalidArgument(format!(
                "job {} has invalid location {:?}",
                job.id, job.location
            )));
        }

        Ok(())
    }

    /// Score, rank and truncate candidates for a job
    ///
    /// # Arguments
    /// * `job` - The job to match against
    /// * `candidates` - Profiles returned by the candidate query
    /// * `limit` - Maximum number of matches to return
    pub fn rank(
        &self,
        job: &JobSpec,
        candidates: Vec<WorkerProfile>,
        limit: usize,
    ) -> Result<Vec<MatchResult>, MatchingError> {
        Self::validate_job(job)?;

        let mut matches: Vec<MatchResult> = candidates
            .into_iter()
            .map(|profile| {
                let (score, factors, distance_m) = calculate_match_score(job, &profile, &self.weights);

                MatchResult {
                    labourer_id: profile.user_id.clone(),
                    profile,
                    distance_m,
                    score,
                    factors,
                }
            })
            .collect();

        // Score descending; nearest first on ties, then worker id for determinism
        matches.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| {
                    a.distance_m
                        .partial_cmp(&b.distance_m)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.labourer_id.cmp(&b.labourer_id))
        });

        matches.truncate(limit);

        Ok(matches)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
