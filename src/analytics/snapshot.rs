// src/analytics/snapshot.rs
//
// The aggregation routine: a pure, synchronous reduction of raw rows into
// the analytics snapshot. All inputs are in-memory collections; no I/O.

use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

use super::models::*;
use crate::common::split_skill_tags;

/// Raw inputs for one snapshot, gathered by the route handler.
#[derive(Debug, Default)]
pub struct SnapshotInputs {
    pub total_users: i64,
    /// Users created since today 00:00 UTC.
    pub users_created_today: i64,
    /// Parsed `required_skills` per job (malformed rows already dropped to []).
    pub job_skill_lists: Vec<Vec<String>>,
    /// `job_type` per job, one entry per job row.
    pub job_types: Vec<Option<String>>,
    /// Creation dates of users that signed up inside the growth window.
    pub window_signup_dates: Vec<NaiveDate>,
    /// Raw comma-separated `related_skills` strings, one per resource.
    pub resource_skill_tags: Vec<String>,
}

/// Occurrence counter that remembers first-seen key order, so equal counts
/// keep a deterministic tie-break after a stable sort.
#[derive(Debug, Default)]
struct CountTable {
    order: Vec<String>,
    counts: HashMap<String, i64>,
}

impl CountTable {
    fn bump(&mut self, key: &str) {
        if let Some(count) = self.counts.get_mut(key) {
            *count += 1;
        } else {
            self.counts.insert(key.to_string(), 1);
            self.order.push(key.to_string());
        }
    }

    fn get(&self, key: &str) -> i64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    fn total(&self) -> i64 {
        self.counts.values().sum()
    }

    /// Pairs in first-seen order.
    fn pairs(&self) -> Vec<(String, i64)> {
        self.order
            .iter()
            .map(|key| (key.clone(), self.counts[key]))
            .collect()
    }
}

/// Number of calendar days in the growth window; the series has
/// `GROWTH_WINDOW_DAYS + 1` points (both endpoints inclusive).
const GROWTH_WINDOW_DAYS: i64 = 10;

/// How many skills make the demand ranking.
const TOP_SKILLS: usize = 10;

/// How many under-served skills make the gap list.
const TOP_GAPS: usize = 8;

/// Build the full snapshot. `today` is the end of the growth window.
pub fn build_snapshot(inputs: &SnapshotInputs, today: NaiveDate) -> AnalyticsData {
    let demand = count_skill_demand(&inputs.job_skill_lists);
    let resource_coverage = count_resource_tags(&inputs.resource_skill_tags);

    let skills_demand = rank_skills_demand(&demand);
    let job_categories = categorize_jobs(&inputs.job_types);
    let user_growth = cumulative_growth(
        inputs.total_users,
        &inputs.window_signup_dates,
        today,
    );
    let common_gaps = find_common_gaps(&demand, &resource_coverage);
    let skill_gap_coverage = coverage_percentage(demand.total(), resource_coverage.total());

    AnalyticsData {
        metrics: Metrics {
            total_users: inputs.total_users,
            jobs_suggested: inputs.job_skill_lists.len() as i64,
            active_today: estimate_active_today(inputs.users_created_today, inputs.total_users),
            skill_gap_coverage,
        },
        skills_demand,
        job_categories,
        user_growth,
        common_gaps,
    }
}

fn count_skill_demand(job_skill_lists: &[Vec<String>]) -> CountTable {
    let mut demand = CountTable::default();
    for skills in job_skill_lists {
        for skill in skills {
            demand.bump(skill);
        }
    }
    demand
}

fn count_resource_tags(resource_skill_tags: &[String]) -> CountTable {
    let mut coverage = CountTable::default();
    for raw in resource_skill_tags {
        for tag in split_skill_tags(raw) {
            coverage.bump(&tag);
        }
    }
    coverage
}

/// Top skills by demand count, descending. Ties keep first-seen order
/// (stable sort over an insertion-ordered table).
fn rank_skills_demand(demand: &CountTable) -> Vec<SkillDemand> {
    let mut pairs = demand.pairs();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs
        .into_iter()
        .take(TOP_SKILLS)
        .map(|(skill, count)| SkillDemand { skill, count })
        .collect()
}

/// Group jobs by type. Percentages are independently rounded; drift away
/// from a 100 total is accepted. Jobs without a type land in "Unknown" so
/// the counts still sum to the job total.
fn categorize_jobs(job_types: &[Option<String>]) -> Vec<JobCategory> {
    let mut types = CountTable::default();
    for job_type in job_types {
        types.bump(job_type.as_deref().unwrap_or("Unknown"));
    }

    let total = job_types.len() as i64;
    types
        .pairs()
        .into_iter()
        .map(|(category, count)| JobCategory {
            category,
            percentage: if total > 0 {
                (count as f64 / total as f64 * 100.0).round() as i64
            } else {
                0
            },
            count,
        })
        .collect()
}

/// Cumulative user count per calendar day over the inclusive window, one
/// point per day including days with no signups. The starting level is the
/// user total minus everyone who signed up inside the window, so the series
/// ends at the current total.
fn cumulative_growth(
    total_users: i64,
    window_signup_dates: &[NaiveDate],
    today: NaiveDate,
) -> Vec<GrowthPoint> {
    let mut signups_by_day: HashMap<NaiveDate, i64> = HashMap::new();
    for date in window_signup_dates {
        *signups_by_day.entry(*date).or_insert(0) += 1;
    }

    let window_start = today - Duration::days(GROWTH_WINDOW_DAYS);
    let mut cumulative = total_users - window_signup_dates.len() as i64;

    (0..=GROWTH_WINDOW_DAYS)
        .map(|offset| {
            let date = window_start + Duration::days(offset);
            cumulative += signups_by_day.get(&date).copied().unwrap_or(0);
            GrowthPoint {
                date: date.format("%b %-d").to_string(),
                users: cumulative,
            }
        })
        .collect()
}

/// Skills where demand exceeds learning-resource coverage, sorted by the
/// size of the shortfall, top entries only.
fn find_common_gaps(demand: &CountTable, resource_coverage: &CountTable) -> Vec<SkillGap> {
    let mut gaps: Vec<SkillGap> = demand
        .pairs()
        .into_iter()
        .filter_map(|(skill, count)| {
            let occurrences = count - resource_coverage.get(&skill);
            (occurrences > 0).then_some(SkillGap { skill, occurrences })
        })
        .collect();

    gaps.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
    gaps.truncate(TOP_GAPS);
    gaps
}

/// Resource-tag count over demand count as a percentage, clamped to
/// [0, 100]. Zero demand means nothing is uncovered, hence 100.
fn coverage_percentage(total_demand: i64, total_resource_tags: i64) -> i64 {
    if total_demand == 0 {
        return 100;
    }
    let raw = (total_resource_tags as f64 / total_demand as f64 * 100.0).round() as i64;
    raw.clamp(0, 100)
}

/// Users created today stand in for active users; when there are none, the
/// dashboard's 12%-of-total heuristic is replicated as a fallback.
fn estimate_active_today(users_created_today: i64, total_users: i64) -> i64 {
    if users_created_today > 0 {
        users_created_today
    } else {
        (total_users as f64 * 0.12).round() as i64
    }
}
