// src/users/handlers.rs

use axum::{
    extract::{Extension, Query},
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::auth::AdminToken;
use crate::common::{ApiError, AppState};
use crate::users::models::*;

/// GET /api/admin/users - List users joined with job-seeker profiles
pub async fn list_users(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminToken,
    Query(params): Query<UserQueryParams>,
) -> Result<Json<Vec<UserView>>, ApiError> {
    let state = state_lock.read().await.clone();

    let limit = params.limit.unwrap_or(50).clamp(1, 200);
    let offset = params.offset.unwrap_or(0).max(0);

    let mut sql = String::from(
        r#"SELECT
            u.id, u.email, u.role, u.status, u.created_at,
            s.full_name, s.education_level, s.department, s.resume_link,
            s.experience_level, s.preferred_career_track, s.skills, s.about,
            s.location
        FROM users u
        LEFT JOIN job_seekers s ON s.user_id = u.id
        WHERE 1=1"#,
    );
    let mut binds: Vec<String> = Vec::new();

    if let Some(role) = params.role.as_deref().filter(|v| *v != "all") {
        sql.push_str(" AND u.role = ?");
        binds.push(role.to_string());
    }
    sql.push_str(" ORDER BY u.created_at DESC LIMIT ? OFFSET ?");

    let mut query = sqlx::query_as::<_, UserProfileRow>(&sql);
    for bind in &binds {
        query = query.bind(bind);
    }

    let rows = query
        .bind(limit)
        .bind(offset)
        .fetch_all(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error listing users");
            ApiError::DatabaseError(e)
        })?;

    let views: Vec<UserView> = rows.into_iter().map(Into::into).collect();

    debug!(
        user_count = views.len(),
        limit = limit,
        offset = offset,
        "Users list loaded"
    );

    Ok(Json(views))
}

/// PATCH /api/admin/users - Apply a status action to a user
pub async fn update_user_status(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminToken,
    Json(body): Json<UserStatusUpdate>,
) -> Result<Json<User>, ApiError> {
    if body.user_id.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "User ID and action are required".to_string(),
        ));
    }

    let Some(new_status) = status_for_action(&body.action) else {
        warn!(action = %body.action, "Rejected unknown user status action");
        return Err(ApiError::BadRequest("Invalid action".to_string()));
    };

    let state = state_lock.read().await.clone();
    let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let result = sqlx::query("UPDATE users SET status = ?, updated_at = ? WHERE id = ?")
        .bind(new_status)
        .bind(&now)
        .bind(&body.user_id)
        .execute(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %body.user_id, "Database error updating user status");
            ApiError::DatabaseError(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!(
            "User not found: {}",
            body.user_id
        )));
    }

    let user = sqlx::query_as::<_, User>(
        "SELECT id, email, role, status, created_at, updated_at FROM users WHERE id = ?",
    )
    .bind(&body.user_id)
    .fetch_one(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    info!(
        user_id = %body.user_id,
        action = %body.action,
        new_status = new_status,
        "User status updated"
    );

    Ok(Json(user))
}
