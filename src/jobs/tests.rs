//! Tests for the jobs module
//!
//! Covers the row-to-view transform (field renaming and defaulting), the
//! write-side value maps, and request validation.

#[cfg(test)]
mod tests {
    use crate::common::Validator;
    use crate::jobs::models::*;
    use crate::jobs::validators::JobValidator;

    fn sample_row() -> Job {
        Job {
            id: "J_K7NP3X".to_string(),
            job_title: "Backend Engineer".to_string(),
            company: Some("Acme".to_string()),
            location: Some("Remote".to_string()),
            required_skills: Some(r#"["Rust","SQL"]"#.to_string()),
            experience_level: Some("Mid".to_string()),
            job_type: Some("Full-time".to_string()),
            description: Some("Build the backend".to_string()),
            is_active: Some(1),
            created_at: Some("2024-05-01 10:15:00".to_string()),
            updated_at: Some("2024-05-02 09:00:00".to_string()),
        }
    }

    #[test]
    fn test_job_view_renames_and_parses_fields() {
        let view: JobView = sample_row().into();

        assert_eq!(view.title, "Backend Engineer");
        assert_eq!(view.category, Some("Full-time".to_string()));
        assert_eq!(view.required_skills, vec!["Rust", "SQL"]);
        assert_eq!(view.created_at, Some("2024-05-01".to_string()));
        assert!(view.is_active);
    }

    #[test]
    fn test_job_view_defaults_absent_columns() {
        let view: JobView = sample_row().into();

        // Neither salary nor applicants exist in the schema.
        assert_eq!(view.salary, None);
        assert_eq!(view.applicants, 0);
    }

    #[test]
    fn test_job_view_skips_malformed_skills_silently() {
        let mut row = sample_row();
        row.required_skills = Some("not a json array".to_string());
        let view: JobView = row.into();
        assert!(view.required_skills.is_empty());

        let mut row = sample_row();
        row.required_skills = None;
        row.is_active = None;
        let view: JobView = row.into();
        assert!(view.required_skills.is_empty());
        assert!(view.is_active, "missing is_active defaults to active");
    }

    #[test]
    fn test_experience_level_mapping() {
        assert_eq!(map_experience_level(Some("entry")), "Entry");
        assert_eq!(map_experience_level(Some("Mid")), "Mid");
        // The schema has no senior tier.
        assert_eq!(map_experience_level(Some("senior")), "Mid");
        assert_eq!(map_experience_level(Some("intern")), "Intern");
        assert_eq!(map_experience_level(Some("unknown")), "Entry");
        assert_eq!(map_experience_level(None), "Entry");
    }

    #[test]
    fn test_category_to_job_type_mapping() {
        assert_eq!(map_category_to_job_type(Some("Frontend")), "Full-time");
        assert_eq!(map_category_to_job_type(Some("Backend")), "Full-time");
        assert_eq!(map_category_to_job_type(Some("Full Stack")), "Full-time");
        assert_eq!(map_category_to_job_type(Some("Internship")), "Internship");
        assert_eq!(map_category_to_job_type(Some("Part-time")), "Part-time");
        assert_eq!(map_category_to_job_type(Some("Freelance")), "Freelance");
        assert_eq!(map_category_to_job_type(Some("Gardening")), "Full-time");
        assert_eq!(map_category_to_job_type(None), "Full-time");
    }

    #[test]
    fn test_job_validator_valid_data() {
        let request = CreateJob {
            title: "Software Engineer".to_string(),
            company: Some("Test Company".to_string()),
            location: Some("Remote".to_string()),
            required_skills: Some(vec!["Rust".to_string(), "SQL".to_string()]),
            experience_level: Some("mid".to_string()),
            category: Some("Backend".to_string()),
            description: Some("Test description".to_string()),
        };

        let result = JobValidator.validate(&request);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_job_validator_rejects_empty_title() {
        let request = CreateJob {
            title: "   ".to_string(),
            company: None,
            location: None,
            required_skills: None,
            experience_level: None,
            category: None,
            description: None,
        };

        let result = JobValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "title"));
    }

    #[test]
    fn test_job_validator_rejects_oversized_fields() {
        let request = UpdateJob {
            title: "x".repeat(256),
            company: Some("y".repeat(256)),
            location: None,
            required_skills: None,
            experience_level: None,
            category: None,
            description: Some("z".repeat(10001)),
        };

        let result = JobValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "title"));
        assert!(result.errors.iter().any(|e| e.field == "company"));
        assert!(result.errors.iter().any(|e| e.field == "description"));
    }
}
