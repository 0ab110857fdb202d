// src/resources/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};

pub struct ResourceValidator;

fn validate_resource_fields(title: &str, url: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if title.trim().is_empty() {
        result.add_error("title", "Resource title is required");
    } else if title.len() > 255 {
        result.add_error("title", "Resource title must be less than 255 characters");
    }

    if url.trim().is_empty() {
        result.add_error("url", "Resource URL is required");
    } else if !url.starts_with("http") {
        result.add_error("url", "Resource URL must start with http");
    }

    result
}

impl Validator<CreateResource> for ResourceValidator {
    fn validate(&self, data: &CreateResource) -> ValidationResult {
        validate_resource_fields(&data.title, &data.url)
    }
}

impl Validator<UpdateResource> for ResourceValidator {
    fn validate(&self, data: &UpdateResource) -> ValidationResult {
        validate_resource_fields(&data.title, &data.url)
    }
}
