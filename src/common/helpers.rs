// Helper functions shared across modules

/// Parses a JSON-encoded skill array stored in a TEXT column.
/// Malformed or absent values yield an empty list rather than an error,
/// matching the dashboard's silent-default behavior for optional fields.
pub fn parse_skill_list(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str::<Vec<String>>(s).ok())
        .unwrap_or_default()
}

/// Splits a comma-separated skill-tag string into trimmed, non-empty tags.
pub fn split_skill_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Returns the calendar-date part of a stored timestamp.
/// Accepts both "YYYY-MM-DD HH:MM:SS" and ISO-8601 "YYYY-MM-DDTHH:MM:SS".
pub fn date_part(timestamp: &str) -> String {
    timestamp
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skill_list_valid_json() {
        let skills = parse_skill_list(Some(r#"["React","SQL"]"#));
        assert_eq!(skills, vec!["React".to_string(), "SQL".to_string()]);
    }

    #[test]
    fn test_parse_skill_list_malformed_defaults_to_empty() {
        assert!(parse_skill_list(Some("not json")).is_empty());
        assert!(parse_skill_list(Some("{\"a\":1}")).is_empty());
        assert!(parse_skill_list(None).is_empty());
    }

    #[test]
    fn test_split_skill_tags_trims_and_drops_empties() {
        let tags = split_skill_tags(" React , SQL ,, Docker ");
        assert_eq!(tags, vec!["React", "SQL", "Docker"]);
    }

    #[test]
    fn test_date_part_handles_both_separators() {
        assert_eq!(date_part("2024-05-01 12:30:00"), "2024-05-01");
        assert_eq!(date_part("2024-05-01T12:30:00Z"), "2024-05-01");
        assert_eq!(date_part("2024-05-01"), "2024-05-01");
    }
}
