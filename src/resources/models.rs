// src/resources/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Learning Resource Models
// ============================================================================

/// Database row shape. `related_skills` is a comma-separated string and
/// `cost_indicator` is 'Free' or 'Paid'.
#[derive(FromRow, Serialize, Deserialize, Debug)]
pub struct LearningResource {
    pub id: String,
    pub title: String,
    pub platform: Option<String>,
    pub url: Option<String>,
    pub related_skills: Option<String>,
    pub cost_indicator: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// UI-facing view model. Columns absent from the schema get fixed defaults.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResourceView {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub skill_category: String,
    pub url: String,
    pub duration: String,
    pub difficulty: String,
    pub provider: String,
    pub is_free: bool,
}

impl From<LearningResource> for ResourceView {
    fn from(resource: LearningResource) -> Self {
        ResourceView {
            id: resource.id,
            title: resource.title,
            resource_type: "course".to_string(), // not in the schema
            skill_category: resource.related_skills.unwrap_or_default(),
            url: resource.url.unwrap_or_default(),
            duration: "N/A".to_string(),         // not in the schema
            difficulty: "beginner".to_string(),  // not in the schema
            provider: resource.platform.unwrap_or_default(),
            is_free: resource.cost_indicator.as_deref() == Some("Free"),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateResource {
    pub title: String,
    pub provider: Option<String>,
    pub url: String,
    pub skill_category: Option<String>,
    pub is_free: Option<bool>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResource {
    pub title: String,
    pub provider: Option<String>,
    pub url: String,
    pub skill_category: Option<String>,
    pub is_free: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ResourceQueryParams {
    /// Filters by platform; the dashboard calls it "type".
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub skill_category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Cost indicator stored for a free/paid flag.
pub fn cost_indicator_for(is_free: bool) -> &'static str {
    if is_free {
        "Free"
    } else {
        "Paid"
    }
}
