use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CandidateQuery, ComparableQuery, JobSpec, WorkerProfile};

/// Errors that can occur when reading from the profile store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to jobs and geo-indexed worker profiles
///
/// Implementations must honour the query semantics exactly: every profile
/// returned satisfies `core::filters::matches_candidate_query` (or
/// `matches_comparable_query`) and none that satisfies it is left out.
/// Results come back nearest first.
#[async_trait]
pub trait GeoProfileRepository: Send + Sync {
    /// Look up a job by id; `Ok(None)` when it does not exist
    async fn find_job(&self, job_id: &str) -> Result<Option<JobSpec>, StoreError>;

    /// Available workers sharing a skill with the job, within the radius
    async fn find_candidates(&self, query: &CandidateQuery) -> Result<Vec<WorkerProfile>, StoreError>;

    /// Workers with the skill and similar experience, within the radius
    async fn find_comparables(&self, query: &ComparableQuery) -> Result<Vec<WorkerProfile>, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}
