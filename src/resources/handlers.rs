// src/resources/handlers.rs

use axum::{
    extract::{Extension, Path, Query},
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::auth::AdminToken;
use crate::common::{generate_resource_id, ApiError, AppState, Validator};
use crate::resources::models::*;
use crate::resources::validators::ResourceValidator;

const RESOURCE_COLUMNS: &str =
    "id, title, platform, url, related_skills, cost_indicator, created_at, updated_at";

/// GET /api/admin/resources - List learning resources with optional filters
pub async fn list_resources(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminToken,
    Query(params): Query<ResourceQueryParams>,
) -> Result<Json<Vec<ResourceView>>, ApiError> {
    let state = state_lock.read().await.clone();

    let limit = params.limit.unwrap_or(50).clamp(1, 200);
    let offset = params.offset.unwrap_or(0).max(0);

    let mut sql = format!(
        "SELECT {} FROM learning_resources WHERE 1=1",
        RESOURCE_COLUMNS
    );
    let mut binds: Vec<String> = Vec::new();

    if let Some(platform) = params.resource_type.as_deref().filter(|v| *v != "all") {
        sql.push_str(" AND platform = ?");
        binds.push(platform.to_string());
    }
    if let Some(skill) = params.skill_category.as_deref().filter(|v| *v != "all") {
        sql.push_str(" AND related_skills LIKE ?");
        binds.push(format!("%{}%", skill));
    }
    sql.push_str(" ORDER BY created_at DESC LIMIT ? OFFSET ?");

    let mut query = sqlx::query_as::<_, LearningResource>(&sql);
    for bind in &binds {
        query = query.bind(bind);
    }

    let resources = query
        .bind(limit)
        .bind(offset)
        .fetch_all(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error listing learning resources");
            ApiError::DatabaseError(e)
        })?;

    let views: Vec<ResourceView> = resources.into_iter().map(Into::into).collect();

    debug!(
        resource_count = views.len(),
        limit = limit,
        offset = offset,
        "Learning resources list loaded"
    );

    Ok(Json(views))
}

/// POST /api/admin/resources - Create a learning resource
pub async fn create_resource(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminToken,
    Json(body): Json<CreateResource>,
) -> Result<Json<ResourceView>, ApiError> {
    let validation = ResourceValidator.validate(&body);
    if !validation.is_valid {
        return Err(validation.into());
    }

    let state = state_lock.read().await.clone();
    let id = generate_resource_id();
    let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

    sqlx::query(
        r#"INSERT INTO learning_resources (
            id, title, platform, url, related_skills, cost_indicator, created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
    )
    .bind(&id)
    .bind(&body.title)
    .bind(body.provider.as_deref().unwrap_or("Unknown"))
    .bind(&body.url)
    .bind(body.skill_category.as_deref().unwrap_or(""))
    .bind(cost_indicator_for(body.is_free.unwrap_or(false)))
    .bind(&now)
    .bind(&now)
    .execute(&state.db)
    .await
    .map_err(|e| {
        error!(error = %e, resource_id = %id, title = %body.title, "Database error creating learning resource");
        ApiError::DatabaseError(e)
    })?;

    let resource = sqlx::query_as::<_, LearningResource>(&format!(
        "SELECT {} FROM learning_resources WHERE id = ?",
        RESOURCE_COLUMNS
    ))
    .bind(&id)
    .fetch_one(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    info!(resource_id = %id, title = %resource.title, "Learning resource created");

    Ok(Json(resource.into()))
}

/// PUT /api/admin/resources/:id - Update a learning resource
pub async fn update_resource(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminToken,
    Path(id): Path<String>,
    Json(body): Json<UpdateResource>,
) -> Result<Json<ResourceView>, ApiError> {
    let validation = ResourceValidator.validate(&body);
    if !validation.is_valid {
        return Err(validation.into());
    }

    let state = state_lock.read().await.clone();
    let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let result = sqlx::query(
        r#"UPDATE learning_resources SET
            title = ?, platform = ?, url = ?, related_skills = ?,
            cost_indicator = ?, updated_at = ?
        WHERE id = ?"#,
    )
    .bind(&body.title)
    .bind(body.provider.as_deref().unwrap_or("Unknown"))
    .bind(&body.url)
    .bind(body.skill_category.as_deref().unwrap_or(""))
    .bind(cost_indicator_for(body.is_free.unwrap_or(false)))
    .bind(&now)
    .bind(&id)
    .execute(&state.db)
    .await
    .map_err(|e| {
        error!(error = %e, resource_id = %id, "Database error updating learning resource");
        ApiError::DatabaseError(e)
    })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!("Resource not found: {}", id)));
    }

    let resource = sqlx::query_as::<_, LearningResource>(&format!(
        "SELECT {} FROM learning_resources WHERE id = ?",
        RESOURCE_COLUMNS
    ))
    .bind(&id)
    .fetch_one(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    info!(resource_id = %id, "Learning resource updated");

    Ok(Json(resource.into()))
}

/// DELETE /api/admin/resources/:id - Delete a learning resource
pub async fn delete_resource(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminToken,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let result = sqlx::query("DELETE FROM learning_resources WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, resource_id = %id, "Database error deleting learning resource");
            ApiError::DatabaseError(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!("Resource not found: {}", id)));
    }

    info!(resource_id = %id, "Learning resource deleted");

    Ok(Json(serde_json::json!({ "success": true })))
}
