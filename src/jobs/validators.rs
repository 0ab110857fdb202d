// src/jobs/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};

// ============================================================================
// Job Validators
// ============================================================================

pub struct JobValidator;

fn validate_job_fields(
    title: &str,
    description: Option<&str>,
    location: Option<&str>,
    company: Option<&str>,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    if title.trim().is_empty() {
        result.add_error("title", "Job title is required");
    } else if title.len() > 255 {
        result.add_error("title", "Job title must be less than 255 characters");
    }

    if let Some(description) = description {
        if description.len() > 10000 {
            result.add_error(
                "description",
                "Description must be less than 10000 characters",
            );
        }
    }

    if let Some(location) = location {
        if location.len() > 255 {
            result.add_error("location", "Location must be less than 255 characters");
        }
    }

    if let Some(company) = company {
        if company.len() > 255 {
            result.add_error("company", "Company name must be less than 255 characters");
        }
    }

    result
}

impl Validator<CreateJob> for JobValidator {
    fn validate(&self, data: &CreateJob) -> ValidationResult {
        validate_job_fields(
            &data.title,
            data.description.as_deref(),
            data.location.as_deref(),
            data.company.as_deref(),
        )
    }
}

impl Validator<UpdateJob> for JobValidator {
    fn validate(&self, data: &UpdateJob) -> ValidationResult {
        validate_job_fields(
            &data.title,
            data.description.as_deref(),
            data.location.as_deref(),
            data.company.as_deref(),
        )
    }
}
