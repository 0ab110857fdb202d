// src/users/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::{date_part, parse_skill_list};

// ============================================================================
// User Models
// ============================================================================

/// Users row (account table).
#[derive(FromRow, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Users row joined with the job-seeker profile (LEFT JOIN, so every
/// profile column is optional).
#[derive(FromRow, Debug)]
pub struct UserProfileRow {
    pub id: String,
    pub email: String,
    pub role: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub full_name: Option<String>,
    pub education_level: Option<String>,
    pub department: Option<String>,
    pub resume_link: Option<String>,
    pub experience_level: Option<String>,
    pub preferred_career_track: Option<String>,
    pub skills: Option<String>, // JSON array string
    pub about: Option<String>,
    pub location: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LearningProgress {
    pub completed_courses: i64,
    pub hours_spent: i64,
    pub certifications_earned: i64,
}

/// UI-facing user view model with the derived profile-completeness score.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: String,
    pub role: String,
    pub joined_at: String,
    pub last_active_at: String,
    pub skills_assessed: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub jobs_applied: i64,
    pub profile_completeness: i64,
    pub location: String,
    pub experience_level: String,
    pub current_job: String,
    pub target_role: String,
    pub learning_progress: LearningProgress,
}

/// Number of profile fields that feed the completeness score.
const PROFILE_FIELDS: i64 = 9;

/// Percentage of filled profile fields, rounded.
pub fn profile_completeness(row: &UserProfileRow) -> i64 {
    let filled = [
        row.full_name.is_some(),
        row.education_level.is_some(),
        row.department.is_some(),
        row.resume_link.is_some(),
        row.experience_level.is_some(),
        row.preferred_career_track.is_some(),
        !parse_skill_list(row.skills.as_deref()).is_empty(),
        row.about.is_some(),
        row.location.is_some(),
    ]
    .iter()
    .filter(|filled| **filled)
    .count() as i64;

    (filled as f64 / PROFILE_FIELDS as f64 * 100.0).round() as i64
}

impl From<UserProfileRow> for UserView {
    fn from(row: UserProfileRow) -> Self {
        let completeness = profile_completeness(&row);
        let created_at = row.created_at.clone().unwrap_or_default();

        UserView {
            id: row.id,
            name: row
                .full_name
                .unwrap_or_else(|| "Anonymous User".to_string()),
            email: row.email,
            status: row.status.unwrap_or_else(|| "active".to_string()),
            role: row.role.unwrap_or_else(|| "jobseeker".to_string()),
            joined_at: date_part(&created_at),
            // created_at stands in; there is no real activity signal
            last_active_at: created_at,
            skills_assessed: parse_skill_list(row.skills.as_deref()),
            skill_gaps: Vec::new(), // not derived per user
            jobs_applied: 0,        // no applications table in the schema
            profile_completeness: completeness,
            location: row.location.unwrap_or_default(),
            experience_level: row
                .experience_level
                .unwrap_or_else(|| "Fresher".to_string()),
            current_job: String::new(),
            target_role: row.preferred_career_track.unwrap_or_default(),
            learning_progress: LearningProgress {
                completed_courses: 0,
                hours_spent: 0,
                certifications_earned: 0,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserQueryParams {
    pub role: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusUpdate {
    pub user_id: String,
    pub action: String,
}

/// Translate a status action into the stored status value.
pub fn status_for_action(action: &str) -> Option<&'static str> {
    match action {
        "block" => Some("blocked"),
        "unblock" => Some("active"),
        "activate" => Some("active"),
        "deactivate" => Some("inactive"),
        _ => None,
    }
}
