// src/jobs/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::{date_part, parse_skill_list};

// ============================================================================
// Job Models
// ============================================================================

/// Database row shape (external schema names).
#[derive(FromRow, Serialize, Deserialize, Debug)]
pub struct Job {
    pub id: String,
    pub job_title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub required_skills: Option<String>, // JSON array string in DB
    pub experience_level: Option<String>,
    pub job_type: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<i64>, // 0 or 1 in SQLite
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// UI-facing view model: renamed fields, parsed skills, defaulted columns.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JobView {
    pub id: String,
    pub title: String,
    pub company: Option<String>,
    pub category: Option<String>,
    pub required_skills: Vec<String>,
    pub experience_level: Option<String>,
    pub location: Option<String>,
    pub salary: Option<i64>,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub applicants: i64,
    pub description: Option<String>,
}

impl From<Job> for JobView {
    fn from(job: Job) -> Self {
        JobView {
            id: job.id,
            title: job.job_title,
            company: job.company,
            category: job.job_type,
            required_skills: parse_skill_list(job.required_skills.as_deref()),
            experience_level: job.experience_level,
            location: job.location,
            salary: None, // not in the schema
            is_active: job.is_active.unwrap_or(1) == 1,
            created_at: job.created_at.as_deref().map(date_part),
            applicants: 0, // not in the schema
            description: job.description,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateJob {
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub experience_level: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJob {
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub experience_level: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JobQueryParams {
    pub job_type: Option<String>,
    pub experience_level: Option<String>,
    pub location: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ============================================================================
// Write-side field mapping
// ============================================================================
//
// The dashboard submits UI-level values; the schema only knows a narrower
// set. Unknown values fall through to the schema defaults, never an error.

/// Map a UI experience level onto the schema's values.
/// "senior" collapses to "Mid" because the schema has no senior tier.
pub fn map_experience_level(input: Option<&str>) -> &'static str {
    match input.map(|s| s.to_lowercase()).as_deref() {
        Some("entry") => "Entry",
        Some("mid") => "Mid",
        Some("senior") => "Mid",
        Some("intern") => "Intern",
        _ => "Entry",
    }
}

/// Map a UI category onto the schema's `job_type` values.
pub fn map_category_to_job_type(input: Option<&str>) -> &'static str {
    match input {
        Some("Frontend") | Some("Backend") | Some("Full Stack") => "Full-time",
        Some("Internship") => "Internship",
        Some("Part-time") => "Part-time",
        Some("Freelance") => "Freelance",
        _ => "Full-time",
    }
}
