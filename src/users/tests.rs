//! Tests for the users module
//!
//! Covers the profile-completeness derivation, view-model defaulting, and
//! the status-action table.

#[cfg(test)]
mod tests {
    use crate::users::models::*;

    fn empty_profile() -> UserProfileRow {
        UserProfileRow {
            id: "U_8F2QW1".to_string(),
            email: "user@example.com".to_string(),
            role: Some("jobseeker".to_string()),
            status: Some("active".to_string()),
            created_at: Some("2024-04-15 08:00:00".to_string()),
            full_name: None,
            education_level: None,
            department: None,
            resume_link: None,
            experience_level: None,
            preferred_career_track: None,
            skills: None,
            about: None,
            location: None,
        }
    }

    fn full_profile() -> UserProfileRow {
        UserProfileRow {
            full_name: Some("Ada Example".to_string()),
            education_level: Some("Bachelor".to_string()),
            department: Some("CS".to_string()),
            resume_link: Some("https://example.com/resume.pdf".to_string()),
            experience_level: Some("Mid".to_string()),
            preferred_career_track: Some("Backend".to_string()),
            skills: Some(r#"["Rust","SQL"]"#.to_string()),
            about: Some("About me".to_string()),
            location: Some("Berlin".to_string()),
            ..empty_profile()
        }
    }

    #[test]
    fn test_profile_completeness_empty_and_full() {
        assert_eq!(profile_completeness(&empty_profile()), 0);
        assert_eq!(profile_completeness(&full_profile()), 100);
    }

    #[test]
    fn test_profile_completeness_partial_rounds() {
        let mut row = empty_profile();
        row.full_name = Some("Ada".to_string());
        row.location = Some("Berlin".to_string());
        // 2 of 9 fields -> 22%
        assert_eq!(profile_completeness(&row), 22);

        row.about = Some("hi".to_string());
        // 3 of 9 fields -> 33%
        assert_eq!(profile_completeness(&row), 33);
    }

    #[test]
    fn test_empty_skill_list_does_not_count_as_filled() {
        let mut row = empty_profile();
        row.skills = Some("[]".to_string());
        assert_eq!(profile_completeness(&row), 0);

        row.skills = Some("not json".to_string());
        assert_eq!(profile_completeness(&row), 0);
    }

    #[test]
    fn test_user_view_defaults() {
        let view: UserView = empty_profile().into();

        assert_eq!(view.name, "Anonymous User");
        assert_eq!(view.status, "active");
        assert_eq!(view.joined_at, "2024-04-15");
        assert_eq!(view.experience_level, "Fresher");
        assert!(view.skills_assessed.is_empty());
        assert_eq!(view.jobs_applied, 0);
        assert_eq!(view.learning_progress.completed_courses, 0);
    }

    #[test]
    fn test_user_view_carries_profile_fields() {
        let view: UserView = full_profile().into();

        assert_eq!(view.name, "Ada Example");
        assert_eq!(view.target_role, "Backend");
        assert_eq!(view.skills_assessed, vec!["Rust", "SQL"]);
        assert_eq!(view.profile_completeness, 100);
    }

    #[test]
    fn test_status_for_action_table() {
        assert_eq!(status_for_action("block"), Some("blocked"));
        assert_eq!(status_for_action("unblock"), Some("active"));
        assert_eq!(status_for_action("activate"), Some("active"));
        assert_eq!(status_for_action("deactivate"), Some("inactive"));
        assert_eq!(status_for_action("promote"), None);
    }
}
