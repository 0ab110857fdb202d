// src/analytics/handlers.rs

use axum::{extract::Extension, response::Json};
use chrono::{Duration, NaiveDate, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::analytics::models::AnalyticsData;
use crate::analytics::snapshot::{build_snapshot, SnapshotInputs};
use crate::auth::AdminToken;
use crate::common::{date_part, parse_skill_list, ApiError, AppState};

/// Gather rows and reduce them into a fresh snapshot.
///
/// The independent reads are issued in parallel and joined. Any read failure
/// aborts the whole computation; there are no partial results and no retry.
/// Also used by the analytics export endpoint.
pub async fn compute_snapshot(state: &AppState) -> Result<AnalyticsData, ApiError> {
    let today = Utc::now().date_naive();
    let midnight = format!("{} 00:00:00", today);
    let window_start = format!("{} 00:00:00", today - Duration::days(10));

    let (total_users, users_created_today, job_rows, window_signups, resource_rows) =
        tokio::try_join!(
            async {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
                    .fetch_one(&state.db)
                    .await
            },
            async {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE created_at >= ?")
                    .bind(&midnight)
                    .fetch_one(&state.db)
                    .await
            },
            async {
                sqlx::query_as::<_, (Option<String>, Option<String>)>(
                    "SELECT required_skills, job_type FROM jobs",
                )
                .fetch_all(&state.db)
                .await
            },
            async {
                sqlx::query_scalar::<_, Option<String>>(
                    "SELECT created_at FROM users WHERE created_at >= ? ORDER BY created_at ASC",
                )
                .bind(&window_start)
                .fetch_all(&state.db)
                .await
            },
            async {
                sqlx::query_scalar::<_, Option<String>>(
                    "SELECT related_skills FROM learning_resources",
                )
                .fetch_all(&state.db)
                .await
            },
        )
        .map_err(|e| {
            error!(error = %e, "Database error gathering analytics inputs");
            ApiError::DatabaseError(e)
        })?;

    let (job_skill_lists, job_types): (Vec<Vec<String>>, Vec<Option<String>>) = job_rows
        .into_iter()
        .map(|(skills, job_type)| (parse_skill_list(skills.as_deref()), job_type))
        .unzip();

    // Malformed timestamps are dropped rather than failing the request.
    let window_signup_dates: Vec<NaiveDate> = window_signups
        .into_iter()
        .flatten()
        .filter_map(|ts| NaiveDate::parse_from_str(&date_part(&ts), "%Y-%m-%d").ok())
        .collect();

    let resource_skill_tags: Vec<String> = resource_rows.into_iter().flatten().collect();

    let inputs = SnapshotInputs {
        total_users,
        users_created_today,
        job_skill_lists,
        job_types,
        window_signup_dates,
        resource_skill_tags,
    };

    Ok(build_snapshot(&inputs, today))
}

/// GET /api/admin/analytics - Compute the analytics snapshot
pub async fn get_analytics(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminToken,
) -> Result<Json<AnalyticsData>, ApiError> {
    let state = state_lock.read().await.clone();

    info!("Computing analytics snapshot");

    let snapshot = compute_snapshot(&state).await?;

    info!(
        total_users = snapshot.metrics.total_users,
        jobs_suggested = snapshot.metrics.jobs_suggested,
        skill_gap_coverage = snapshot.metrics.skill_gap_coverage,
        "Analytics snapshot computed"
    );

    Ok(Json(snapshot))
}
