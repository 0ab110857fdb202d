//! Tests for the learning-resources module

#[cfg(test)]
mod tests {
    use crate::common::Validator;
    use crate::resources::models::*;
    use crate::resources::validators::ResourceValidator;

    fn sample_row() -> LearningResource {
        LearningResource {
            id: "L_3XW9K2".to_string(),
            title: "Intro to SQL".to_string(),
            platform: Some("Coursera".to_string()),
            url: Some("https://example.com/sql".to_string()),
            related_skills: Some("SQL, Databases".to_string()),
            cost_indicator: Some("Free".to_string()),
            created_at: Some("2024-05-01 10:00:00".to_string()),
            updated_at: None,
        }
    }

    #[test]
    fn test_resource_view_mapping() {
        let view: ResourceView = sample_row().into();

        assert_eq!(view.provider, "Coursera");
        assert_eq!(view.skill_category, "SQL, Databases");
        assert!(view.is_free);
        // Defaults for columns the schema does not carry.
        assert_eq!(view.resource_type, "course");
        assert_eq!(view.difficulty, "beginner");
        assert_eq!(view.duration, "N/A");
    }

    #[test]
    fn test_resource_view_paid_and_missing_cost() {
        let mut row = sample_row();
        row.cost_indicator = Some("Paid".to_string());
        let view: ResourceView = row.into();
        assert!(!view.is_free);

        let mut row = sample_row();
        row.cost_indicator = None;
        let view: ResourceView = row.into();
        assert!(!view.is_free);
    }

    #[test]
    fn test_cost_indicator_round_trip() {
        assert_eq!(cost_indicator_for(true), "Free");
        assert_eq!(cost_indicator_for(false), "Paid");
    }

    #[test]
    fn test_resource_validator_valid_data() {
        let request = CreateResource {
            title: "Rust Book".to_string(),
            provider: Some("No Starch".to_string()),
            url: "https://example.com/rust".to_string(),
            skill_category: Some("Rust".to_string()),
            is_free: Some(true),
        };

        let result = ResourceValidator.validate(&request);
        assert!(result.is_valid);
    }

    #[test]
    fn test_resource_validator_rejects_missing_fields() {
        let request = CreateResource {
            title: "".to_string(),
            provider: None,
            url: "ftp://example.com".to_string(),
            skill_category: None,
            is_free: None,
        };

        let result = ResourceValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "title"));
        assert!(result.errors.iter().any(|e| e.field == "url"));
    }
}
