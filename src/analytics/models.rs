// src/analytics/models.rs

use serde::Serialize;

// ============================================================================
// Analytics Snapshot Models
// ============================================================================
//
// The snapshot is derived per request and never persisted. Field names are
// camelCase on the wire, matching the dashboard contract.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub metrics: Metrics,
    pub skills_demand: Vec<SkillDemand>,
    pub job_categories: Vec<JobCategory>,
    pub user_growth: Vec<GrowthPoint>,
    pub common_gaps: Vec<SkillGap>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_users: i64,
    pub jobs_suggested: i64,
    pub active_today: i64,
    pub skill_gap_coverage: i64,
}

#[derive(Debug, Serialize)]
pub struct SkillDemand {
    pub skill: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct JobCategory {
    pub category: String,
    pub percentage: i64,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct GrowthPoint {
    pub date: String,
    pub users: i64,
}

#[derive(Debug, Serialize)]
pub struct SkillGap {
    pub skill: String,
    pub occurrences: i64,
}
