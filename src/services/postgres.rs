use std::cmp::Ordering;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::core::{calculate_bounding_box, haversine_distance, matches_candidate_query, matches_comparable_query};
use crate::models::{
    CandidateQuery, ComparableQuery, GeoPoint, JobSpec, Pay, PayType, RateCard, Rating,
    WeeklyAvailability, WorkerProfile,
};
use crate::services::repository::{GeoProfileRepository, StoreError};

const PROFILE_COLUMNS: &str = r#"
    user_id, name, skills, experience_years, longitude, latitude,
    rate_hourly, rate_daily, rate_project, availability,
    rating_avg, rating_count, is_available
"#;

/// PostgreSQL-backed profile store
///
/// Profiles keep plain longitude/latitude columns under a btree index. Queries
/// narrow by skill and bounding box in SQL, then the exact Haversine radius is
/// applied here before ordering nearest first.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

}

fn profile_from_row(row: &PgRow) -> Result<WorkerProfile, StoreError> {
    let user_id: String = row.try_get("user_id")?;
    let experience_years = non_negative(&user_id, "experience_years", row.try_get("experience_years")?)?;
    let rating_count = non_negative(&user_id, "rating_count", row.try_get("rating_count")?)?;
    let Json(availability): Json<WeeklyAvailability> = row.try_get("availability")?;

    Ok(WorkerProfile {
        name: row.try_get("name")?,
        skills: row.try_get("skills")?,
        experience_years,
        location: GeoPoint::new(row.try_get("longitude")?, row.try_get("latitude")?),
        rate: RateCard {
            hourly: row.try_get("rate_hourly")?,
            daily: row.try_get("rate_daily")?,
            project: row.try_get("rate_project")?,
        },
        availability,
        rating: Rating {
            avg: row.try_get("rating_avg")?,
            count: rating_count,
        },
        is_available: row.try_get("is_available")?,
        user_id,
    })
}

/// Convert a signed integer column that must never be negative
fn non_negative(user_id: &str, column: &str, value: i32) -> Result<u32, StoreError> {
    u32::try_from(value).map_err(|_| {
        StoreError::InvalidRecord(format!("profile {} has negative {} ({})", user_id, column, value))
    })
}

fn job_from_row(row: &PgRow) -> Result<JobSpec, StoreError> {
    let id: String = row.try_get("id")?;
    let pay_type: String = row.try_get("pay_type")?;
    let pay_type: PayType = pay_type
        .parse()
        .map_err(|e| StoreError::InvalidRecord(format!("job {}: {}", id, e)))?;

    Ok(JobSpec {
        title: row.try_get("title")?,
        skills: row.try_get("skills")?,
        location: GeoPoint::new(row.try_get("longitude")?, row.try_get("latitude")?),
        pay: Pay {
            amount: row.try_get("pay_amount")?,
            pay_type,
        },
        start_date: row.try_get("start_date")?,
        id,
    })
}

/// Decode rows, keep those passing the exact predicate, order nearest first
fn refine<F>(rows: &[PgRow], center: &GeoPoint, keep: F) -> Result<Vec<WorkerProfile>, StoreError>
where
    F: Fn(&WorkerProfile) -> bool,
{
    let mut ranked: Vec<(f64, WorkerProfile)> = Vec::with_capacity(rows.len());
    for row in rows {
        let profile = profile_from_row(row)?;
        if keep(&profile) {
            ranked.push((haversine_distance(center, &profile.location), profile));
        }
    }

    ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    Ok(ranked.into_iter().map(|(_, profile)| profile).collect())
}

#[async_trait]
impl GeoProfileRepository for PostgresClient {
    async fn find_job(&self, job_id: &str) -> Result<Option<JobSpec>, StoreError> {
        let query = r#"
            SELECT id, title, skills, longitude, latitude, pay_amount, pay_type, start_date
            FROM jobs
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(job_from_row).transpose()
    }

    async fn find_candidates(&self, query: &CandidateQuery) -> Result<Vec<WorkerProfile>, StoreError> {
        let bbox = calculate_bounding_box(&query.center, query.radius_m);
        let [(west_min, west_max), (east_min, east_max)] = bbox.longitude_ranges();

        let sql = format!(
            r#"
            SELECT {}
            FROM worker_profiles
            WHERE skills && $1
              AND is_available = TRUE
              AND latitude BETWEEN $2 AND $3
              AND (longitude BETWEEN $4 AND $5 OR longitude BETWEEN $6 AND $7)
            "#,
            PROFILE_COLUMNS
        );

        let rows = sqlx::query(&sql)
            .bind(&query.skills)
            .bind(bbox.min_lat)
            .bind(bbox.max_lat)
            .bind(west_min)
            .bind(west_max)
            .bind(east_min)
            .bind(east_max)
            .fetch_all(&self.pool)
            .await?;

        let candidates = refine(&rows, &query.center, |p| matches_candidate_query(p, query))?;

        tracing::debug!(
            "Candidate query returned {} rows, {} within {}m",
            rows.len(),
            candidates.len(),
            query.radius_m
        );

        Ok(candidates)
    }

    async fn find_comparables(&self, query: &ComparableQuery) -> Result<Vec<WorkerProfile>, StoreError> {
        let bbox = calculate_bounding_box(&query.center, query.radius_m);
        let [(west_min, west_max), (east_min, east_max)] = bbox.longitude_ranges();

        let sql = format!(
            r#"
            SELECT {}
            FROM worker_profiles
            WHERE $1 = ANY(skills)
              AND experience_years BETWEEN $2 AND $3
              AND latitude BETWEEN $4 AND $5
              AND (longitude BETWEEN $6 AND $7 OR longitude BETWEEN $8 AND $9)
            "#,
            PROFILE_COLUMNS
        );

        let rows = sqlx::query(&sql)
            .bind(&query.skill)
            .bind(i32::try_from(query.min_experience).unwrap_or(i32::MAX))
            .bind(i32::try_from(query.max_experience).unwrap_or(i32::MAX))
            .bind(bbox.min_lat)
            .bind(bbox.max_lat)
            .bind(west_min)
            .bind(west_max)
            .bind(east_min)
            .bind(east_max)
            .fetch_all(&self.pool)
            .await?;

        let comparables = refine(&rows, &query.center, |p| matches_comparable_query(p, query))?;

        tracing::debug!(
            "Comparable query for {} returned {} rows, {} within {}m",
            query.skill,
            rows.len(),
            comparables.len(),
            query.radius_m
        );

        Ok(comparables)
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
