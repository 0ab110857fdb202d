// src/exports/handlers.rs

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::analytics::handlers::compute_snapshot;
use crate::auth::AdminToken;
use crate::common::{ApiError, AppState};
use crate::exports::csv::build_csv;
use crate::jobs::models::{Job, JobView};
use crate::resources::models::{LearningResource, ResourceView};
use crate::users::models::{UserProfileRow, UserView};

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
    /// Analytics only: which dataset to flatten into CSV.
    pub section: Option<String>,
}

fn download(
    content: String,
    filename: &str,
    content_type: &'static str,
) -> (StatusCode, [(&'static str, String); 2], String) {
    (
        StatusCode::OK,
        [
            ("Content-Type", content_type.to_string()),
            (
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        content,
    )
}

fn json_pretty<T: serde::Serialize>(data: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(data).map_err(|e| {
        error!(error = %e, "JSON serialization error during export");
        ApiError::ExportError("Failed to serialize export data".to_string())
    })
}

fn invalid_format(format: &str) -> ApiError {
    warn!(format = format, "Invalid export format requested");
    ApiError::BadRequest("Invalid format. Use 'csv' or 'json'".to_string())
}

const JOB_EXPORT_HEADERS: [&str; 10] = [
    "title",
    "company",
    "category",
    "experienceLevel",
    "requiredSkills",
    "applicants",
    "location",
    "salary",
    "status",
    "createdAt",
];

/// GET /api/admin/export/jobs - Export jobs in CSV or JSON format
pub async fn export_jobs(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminToken,
    Query(params): Query<ExportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let state = state_lock.read().await.clone();
    let format = params.format.as_deref().unwrap_or("csv");

    let jobs = sqlx::query_as::<_, Job>(
        "SELECT id, job_title, company, location, required_skills, experience_level, \
         job_type, description, is_active, created_at, updated_at FROM jobs \
         ORDER BY created_at DESC",
    )
    .fetch_all(&state.db)
    .await
    .map_err(|e| {
        error!(error = %e, "Database error fetching jobs for export");
        ApiError::DatabaseError(e)
    })?;

    let views: Vec<JobView> = jobs.into_iter().map(Into::into).collect();
    let record_count = views.len();

    match format {
        "csv" => {
            let rows: Vec<Value> = views
                .iter()
                .map(|view| {
                    let mut row = serde_json::to_value(view).unwrap_or_else(|_| json!({}));
                    // Flatten for the spreadsheet: skills joined, flag as text.
                    row["requiredSkills"] = json!(view.required_skills.join("; "));
                    row["status"] = json!(if view.is_active { "Active" } else { "Inactive" });
                    row
                })
                .collect();

            let csv_content = build_csv(&rows, &JOB_EXPORT_HEADERS);

            info!(record_count = record_count, format = "csv", "Jobs exported");
            Ok(download(csv_content, "jobs-data.csv", "text/csv"))
        }
        "json" => {
            let json_content = json_pretty(&views)?;
            info!(record_count = record_count, format = "json", "Jobs exported");
            Ok(download(json_content, "jobs-data.json", "application/json"))
        }
        other => Err(invalid_format(other)),
    }
}

const USER_EXPORT_HEADERS: [&str; 15] = [
    "name",
    "email",
    "status",
    "role",
    "joinedAt",
    "lastActiveAt",
    "profileCompleteness",
    "jobsApplied",
    "skillsAssessed",
    "location",
    "experienceLevel",
    "targetRole",
    "learningProgress.completedCourses",
    "learningProgress.hoursSpent",
    "learningProgress.certificationsEarned",
];

/// GET /api/admin/export/users - Export users in CSV or JSON format
pub async fn export_users(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminToken,
    Query(params): Query<ExportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let state = state_lock.read().await.clone();
    let format = params.format.as_deref().unwrap_or("csv");

    let rows = sqlx::query_as::<_, UserProfileRow>(
        r#"SELECT
            u.id, u.email, u.role, u.status, u.created_at,
            s.full_name, s.education_level, s.department, s.resume_link,
            s.experience_level, s.preferred_career_track, s.skills, s.about,
            s.location
        FROM users u
        LEFT JOIN job_seekers s ON s.user_id = u.id
        ORDER BY u.created_at DESC"#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(|e| {
        error!(error = %e, "Database error fetching users for export");
        ApiError::DatabaseError(e)
    })?;

    let views: Vec<UserView> = rows.into_iter().map(Into::into).collect();
    let record_count = views.len();

    match format {
        "csv" => {
            let rows: Vec<Value> = views
                .iter()
                .map(|view| {
                    let mut row = serde_json::to_value(view).unwrap_or_else(|_| json!({}));
                    row["skillsAssessed"] = json!(view.skills_assessed.join("; "));
                    row
                })
                .collect();

            let csv_content = build_csv(&rows, &USER_EXPORT_HEADERS);

            info!(record_count = record_count, format = "csv", "Users exported");
            Ok(download(csv_content, "users-data.csv", "text/csv"))
        }
        "json" => {
            let json_content = json_pretty(&views)?;
            info!(record_count = record_count, format = "json", "Users exported");
            Ok(download(json_content, "users-data.json", "application/json"))
        }
        other => Err(invalid_format(other)),
    }
}

const RESOURCE_EXPORT_HEADERS: [&str; 8] = [
    "title",
    "type",
    "skillCategory",
    "difficulty",
    "duration",
    "provider",
    "price",
    "url",
];

/// GET /api/admin/export/resources - Export learning resources
pub async fn export_resources(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminToken,
    Query(params): Query<ExportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let state = state_lock.read().await.clone();
    let format = params.format.as_deref().unwrap_or("csv");

    let resources = sqlx::query_as::<_, LearningResource>(
        "SELECT id, title, platform, url, related_skills, cost_indicator, \
         created_at, updated_at FROM learning_resources ORDER BY created_at DESC",
    )
    .fetch_all(&state.db)
    .await
    .map_err(|e| {
        error!(error = %e, "Database error fetching resources for export");
        ApiError::DatabaseError(e)
    })?;

    let views: Vec<ResourceView> = resources.into_iter().map(Into::into).collect();
    let record_count = views.len();

    match format {
        "csv" => {
            let rows: Vec<Value> = views
                .iter()
                .map(|view| {
                    let mut row = serde_json::to_value(view).unwrap_or_else(|_| json!({}));
                    row["price"] = json!(if view.is_free { "Free" } else { "Paid" });
                    row
                })
                .collect();

            let csv_content = build_csv(&rows, &RESOURCE_EXPORT_HEADERS);

            info!(
                record_count = record_count,
                format = "csv",
                "Resources exported"
            );
            Ok(download(csv_content, "resources-data.csv", "text/csv"))
        }
        "json" => {
            let json_content = json_pretty(&views)?;
            info!(
                record_count = record_count,
                format = "json",
                "Resources exported"
            );
            Ok(download(
                json_content,
                "resources-data.json",
                "application/json",
            ))
        }
        other => Err(invalid_format(other)),
    }
}

/// GET /api/admin/export/analytics - Export the analytics snapshot
///
/// CSV flattens one dataset selected by ?section= (default metrics);
/// JSON returns the full snapshot.
pub async fn export_analytics(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _admin: AdminToken,
    Query(params): Query<ExportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let state = state_lock.read().await.clone();
    let format = params.format.as_deref().unwrap_or("csv");

    let snapshot = compute_snapshot(&state).await?;

    match format {
        "csv" => {
            let section = params.section.as_deref().unwrap_or("metrics");
            let (rows, headers, filename): (Vec<Value>, Vec<&str>, &str) = match section {
                "metrics" => (
                    vec![
                        json!({"metric": "Total Users Analyzed", "value": snapshot.metrics.total_users}),
                        json!({"metric": "Jobs Suggested", "value": snapshot.metrics.jobs_suggested}),
                        json!({"metric": "Active Today", "value": snapshot.metrics.active_today}),
                        json!({"metric": "Skill Gap Coverage", "value": format!("{}%", snapshot.metrics.skill_gap_coverage)}),
                    ],
                    vec!["metric", "value"],
                    "analytics-metrics.csv",
                ),
                "skillsDemand" => (
                    snapshot
                        .skills_demand
                        .iter()
                        .map(|d| serde_json::to_value(d).unwrap_or_else(|_| json!({})))
                        .collect(),
                    vec!["skill", "count"],
                    "skills-demand.csv",
                ),
                "jobCategories" => (
                    snapshot
                        .job_categories
                        .iter()
                        .map(|c| serde_json::to_value(c).unwrap_or_else(|_| json!({})))
                        .collect(),
                    vec!["category", "percentage", "count"],
                    "job-categories.csv",
                ),
                "userGrowth" => (
                    snapshot
                        .user_growth
                        .iter()
                        .map(|p| serde_json::to_value(p).unwrap_or_else(|_| json!({})))
                        .collect(),
                    vec!["date", "users"],
                    "user-growth.csv",
                ),
                "commonGaps" => (
                    snapshot
                        .common_gaps
                        .iter()
                        .map(|g| serde_json::to_value(g).unwrap_or_else(|_| json!({})))
                        .collect(),
                    vec!["skill", "occurrences"],
                    "skill-gaps.csv",
                ),
                other => {
                    warn!(section = other, "Invalid analytics export section");
                    return Err(ApiError::BadRequest(
                        "Invalid section. Use 'metrics', 'skillsDemand', 'jobCategories', \
                         'userGrowth' or 'commonGaps'"
                            .to_string(),
                    ));
                }
            };

            let csv_content = build_csv(&rows, &headers);

            info!(section = section, format = "csv", "Analytics exported");
            Ok(download(csv_content, filename, "text/csv"))
        }
        "json" => {
            let json_content = json_pretty(&snapshot)?;
            info!(format = "json", "Analytics exported");
            Ok(download(
                json_content,
                "full-analytics-data.json",
                "application/json",
            ))
        }
        other => Err(invalid_format(other)),
    }
}
