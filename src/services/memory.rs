use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::{haversine_distance, matches_candidate_query, matches_comparable_query};
use crate::models::{CandidateQuery, ComparableQuery, GeoPoint, JobSpec, WorkerProfile};
use crate::services::repository::{GeoProfileRepository, StoreError};

/// In-memory profile store
///
/// Backs tests and local runs without a database. Filtering uses
/// the same predicates the Postgres store refines with, so both agree.
#[derive(Default)]
pub struct InMemoryRepository {
    jobs: RwLock<HashMap<String, JobSpec>>,
    profiles: RwLock<Vec<WorkerProfile>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(jobs: Vec<JobSpec>, profiles: Vec<WorkerProfile>) -> Self {
        Self {
            jobs: RwLock::new(jobs.into_iter().map(|job| (job.id.clone(), job)).collect()),
            profiles: RwLock::new(profiles),
        }
    }

    /// Insert or replace a profile keyed by user id
    pub async fn upsert_profile(&self, profile: WorkerProfile) {
        let mut profiles = self.profiles.write().await;
        match profiles.iter_mut().find(|p| p.user_id == profile.user_id) {
            Some(existing) => *existing = profile,
            None => profiles.push(profile),
        }
    }

    pub async fn profile_count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

/// Sort nearest first, mirroring a `$near` style spatial query
fn sort_by_distance(profiles: &mut [WorkerProfile], center: &GeoPoint) {
    profiles.sort_by(|a, b| {
        haversine_distance(center, &a.location)
            .partial_cmp(&haversine_distance(center, &b.location))
            .unwrap_or(Ordering::Equal)
    });
}

#[async_trait]
impl GeoProfileRepository for InMemoryRepository {
    async fn find_job(&self, job_id: &str) -> Result<Option<JobSpec>, StoreError> {
        Ok(self.jobs.read().await.get(job_id).cloned())
    }

    async fn find_candidates(&self, query: &CandidateQuery) -> Result<Vec<WorkerProfile>, StoreError> {
        let mut found: Vec<WorkerProfile> = self
            .profiles
            .read()
            .await
            .iter()
            .filter(|profile| matches_candidate_query(profile, query))
            .cloned()
            .collect();

        sort_by_distance(&mut found, &query.center);
        Ok(found)
    }

    async fn find_comparables(&self, query: &ComparableQuery) -> Result<Vec<WorkerProfile>, StoreError> {
        let mut found: Vec<WorkerProfile> = self
            .profiles
            .read()
            .await
            .iter()
            .filter(|profile| matches_comparable_query(profile, query))
            .cloned()
            .collect();

        sort_by_distance(&mut found, &query.center);
        Ok(found)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
