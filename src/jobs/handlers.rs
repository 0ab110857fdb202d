// src/jobs/handlers.rs

use axum::{
    extract::{Extension, Path, Query},
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::auth::AdminToken;
use crate::common::{generate_job_id, ApiError, AppState, Validator};
use crate::jobs::models::*;
use crate::jobs::validators::JobValidator;

const JOB_COLUMNS: &str = "id, job_title, company, location, required_skills, \
    experience_level, job_type, description, is_active, created_at, updated_at";

/// GET /api/admin/jobs - List jobs with optional filters and pagination
pub async fn list_jobs(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminToken,
    Query(params): Query<JobQueryParams>,
) -> Result<Json<Vec<JobView>>, ApiError> {
    let state = state_lock.read().await.clone();

    let limit = params.limit.unwrap_or(50).clamp(1, 200);
    let offset = params.offset.unwrap_or(0).max(0);

    let mut sql = format!("SELECT {} FROM jobs WHERE 1=1", JOB_COLUMNS);
    let mut binds: Vec<String> = Vec::new();

    if let Some(job_type) = params.job_type.as_deref().filter(|v| *v != "all") {
        sql.push_str(" AND job_type = ?");
        binds.push(job_type.to_string());
    }
    if let Some(level) = params.experience_level.as_deref().filter(|v| *v != "all") {
        sql.push_str(" AND experience_level = ?");
        binds.push(level.to_string());
    }
    if let Some(location) = params.location.as_deref().filter(|v| *v != "all") {
        sql.push_str(" AND location LIKE ?");
        binds.push(format!("%{}%", location));
    }
    sql.push_str(" ORDER BY created_at DESC LIMIT ? OFFSET ?");

    let mut query = sqlx::query_as::<_, Job>(&sql);
    for bind in &binds {
        query = query.bind(bind);
    }

    let jobs = query
        .bind(limit)
        .bind(offset)
        .fetch_all(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error listing jobs");
            ApiError::DatabaseError(e)
        })?;

    let views: Vec<JobView> = jobs.into_iter().map(Into::into).collect();

    debug!(
        job_count = views.len(),
        limit = limit,
        offset = offset,
        "Jobs list loaded"
    );

    Ok(Json(views))
}

/// POST /api/admin/jobs - Create a new job
pub async fn create_job(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminToken,
    Json(body): Json<CreateJob>,
) -> Result<Json<JobView>, ApiError> {
    let validation = JobValidator.validate(&body);
    if !validation.is_valid {
        return Err(validation.into());
    }

    let state = state_lock.read().await.clone();
    let id = generate_job_id();
    let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let required_skills_json = body
        .required_skills
        .as_ref()
        .map(|s| serde_json::to_string(s).unwrap_or_else(|_| "[]".to_string()))
        .unwrap_or_else(|| "[]".to_string());

    let experience_level = map_experience_level(body.experience_level.as_deref());
    let job_type = map_category_to_job_type(body.category.as_deref());

    sqlx::query(
        r#"INSERT INTO jobs (
            id, job_title, company, location, required_skills, experience_level,
            job_type, description, is_active, created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, 1, ?, ?)"#,
    )
    .bind(&id)
    .bind(&body.title)
    .bind(body.company.as_deref())
    .bind(body.location.as_deref())
    .bind(&required_skills_json)
    .bind(experience_level)
    .bind(job_type)
    .bind(body.description.as_deref().unwrap_or(""))
    .bind(&now)
    .bind(&now)
    .execute(&state.db)
    .await
    .map_err(|e| {
        error!(error = %e, job_id = %id, title = %body.title, "Database error creating job");
        ApiError::DatabaseError(e)
    })?;

    let job = sqlx::query_as::<_, Job>(&format!("SELECT {} FROM jobs WHERE id = ?", JOB_COLUMNS))
        .bind(&id)
        .fetch_one(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    info!(job_id = %id, title = %job.job_title, "Job created");

    Ok(Json(job.into()))
}

/// PUT /api/admin/jobs/:id - Update a job
pub async fn update_job(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminToken,
    Path(id): Path<String>,
    Json(body): Json<UpdateJob>,
) -> Result<Json<JobView>, ApiError> {
    let validation = JobValidator.validate(&body);
    if !validation.is_valid {
        return Err(validation.into());
    }

    let state = state_lock.read().await.clone();

    let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    if exists == 0 {
        return Err(ApiError::NotFound(format!("Job not found: {}", id)));
    }

    let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let required_skills_json = body
        .required_skills
        .as_ref()
        .map(|s| serde_json::to_string(s).unwrap_or_else(|_| "[]".to_string()))
        .unwrap_or_else(|| "[]".to_string());

    let experience_level = map_experience_level(body.experience_level.as_deref());
    let job_type = map_category_to_job_type(body.category.as_deref());

    sqlx::query(
        r#"UPDATE jobs SET
            job_title = ?, company = ?, location = ?, required_skills = ?,
            experience_level = ?, job_type = ?, description = ?, updated_at = ?
        WHERE id = ?"#,
    )
    .bind(&body.title)
    .bind(body.company.as_deref())
    .bind(body.location.as_deref())
    .bind(&required_skills_json)
    .bind(experience_level)
    .bind(job_type)
    .bind(body.description.as_deref().unwrap_or(""))
    .bind(&now)
    .bind(&id)
    .execute(&state.db)
    .await
    .map_err(|e| {
        error!(error = %e, job_id = %id, "Database error updating job");
        ApiError::DatabaseError(e)
    })?;

    let job = sqlx::query_as::<_, Job>(&format!("SELECT {} FROM jobs WHERE id = ?", JOB_COLUMNS))
        .bind(&id)
        .fetch_one(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    info!(job_id = %id, "Job updated");

    Ok(Json(job.into()))
}

/// DELETE /api/admin/jobs/:id - Delete a job
pub async fn delete_job(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminToken,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let result = sqlx::query("DELETE FROM jobs WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, job_id = %id, "Database error deleting job");
            ApiError::DatabaseError(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!("Job not found: {}", id)));
    }

    info!(job_id = %id, "Job deleted");

    Ok(Json(serde_json::json!({ "success": true })))
}
