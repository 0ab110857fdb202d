//! Tests for the analytics snapshot routine
//!
//! These verify the aggregation properties the dashboard relies on:
//! - category counts sum to the job total
//! - demand and gap rankings are bounded, sorted, and deterministically
//!   tie-broken
//! - the growth series covers the full window and never decreases
//! - coverage stays inside [0, 100] with the zero-demand rule

#[cfg(test)]
mod tests {
    use crate::analytics::snapshot::{build_snapshot, SnapshotInputs};
    use chrono::{Duration, NaiveDate};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_skills_demand_counts_and_ranking() {
        let inputs = SnapshotInputs {
            job_skill_lists: vec![skills(&["React", "SQL"]), skills(&["React"])],
            job_types: vec![None, None],
            ..Default::default()
        };

        let snapshot = build_snapshot(&inputs, day(2024, 5, 20));

        assert_eq!(snapshot.skills_demand.len(), 2);
        assert_eq!(snapshot.skills_demand[0].skill, "React");
        assert_eq!(snapshot.skills_demand[0].count, 2);
        assert_eq!(snapshot.skills_demand[1].skill, "SQL");
        assert_eq!(snapshot.skills_demand[1].count, 1);
    }

    #[test]
    fn test_skills_demand_truncates_to_ten_sorted_non_increasing() {
        // 15 distinct skills, skill-N appears N times
        let mut job_skill_lists = Vec::new();
        for n in 1..=15 {
            for _ in 0..n {
                job_skill_lists.push(vec![format!("skill-{}", n)]);
            }
        }
        let inputs = SnapshotInputs {
            job_skill_lists,
            ..Default::default()
        };

        let snapshot = build_snapshot(&inputs, day(2024, 5, 20));

        assert_eq!(snapshot.skills_demand.len(), 10);
        for pair in snapshot.skills_demand.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
        assert_eq!(snapshot.skills_demand[0].skill, "skill-15");
    }

    #[test]
    fn test_skills_demand_ties_keep_first_seen_order() {
        let inputs = SnapshotInputs {
            job_skill_lists: vec![
                skills(&["Go", "Rust"]),
                skills(&["Zig"]),
                skills(&["Rust", "Go"]),
                skills(&["Zig"]),
            ],
            ..Default::default()
        };

        let snapshot = build_snapshot(&inputs, day(2024, 5, 20));

        // All three appear twice; Go was seen first, then Rust, then Zig.
        let order: Vec<&str> = snapshot
            .skills_demand
            .iter()
            .map(|d| d.skill.as_str())
            .collect();
        assert_eq!(order, vec!["Go", "Rust", "Zig"]);
    }

    #[test]
    fn test_job_category_counts_sum_to_total_jobs() {
        let inputs = SnapshotInputs {
            job_skill_lists: vec![vec![]; 7],
            job_types: vec![
                Some("Full-time".to_string()),
                Some("Full-time".to_string()),
                Some("Part-time".to_string()),
                Some("Internship".to_string()),
                Some("Internship".to_string()),
                Some("Internship".to_string()),
                None,
            ],
            ..Default::default()
        };

        let snapshot = build_snapshot(&inputs, day(2024, 5, 20));

        let count_sum: i64 = snapshot.job_categories.iter().map(|c| c.count).sum();
        assert_eq!(count_sum, 7);

        let unknown = snapshot
            .job_categories
            .iter()
            .find(|c| c.category == "Unknown")
            .unwrap();
        assert_eq!(unknown.count, 1);
    }

    #[test]
    fn test_job_category_percentages_are_rounded_not_normalized() {
        // 3 categories of 1 job each: each rounds to 33, summing to 99.
        let inputs = SnapshotInputs {
            job_skill_lists: vec![vec![]; 3],
            job_types: vec![
                Some("Full-time".to_string()),
                Some("Part-time".to_string()),
                Some("Freelance".to_string()),
            ],
            ..Default::default()
        };

        let snapshot = build_snapshot(&inputs, day(2024, 5, 20));

        let percentage_sum: i64 = snapshot.job_categories.iter().map(|c| c.percentage).sum();
        assert_eq!(percentage_sum, 99);
        assert!(percentage_sum <= 100);
    }

    #[test]
    fn test_user_growth_has_eleven_points_and_is_non_decreasing() {
        let today = day(2024, 5, 20);
        let inputs = SnapshotInputs {
            total_users: 50,
            window_signup_dates: vec![
                today - Duration::days(9),
                today - Duration::days(9),
                today - Duration::days(4),
                today,
            ],
            ..Default::default()
        };

        let snapshot = build_snapshot(&inputs, today);

        assert_eq!(snapshot.user_growth.len(), 11);
        for pair in snapshot.user_growth.windows(2) {
            assert!(pair[0].users <= pair[1].users);
        }
        // Starting level is total minus window signups; final point is the total.
        assert_eq!(snapshot.user_growth[0].users, 46);
        assert_eq!(snapshot.user_growth.last().unwrap().users, 50);
    }

    #[test]
    fn test_user_growth_includes_empty_days() {
        let today = day(2024, 5, 20);
        let inputs = SnapshotInputs {
            total_users: 10,
            window_signup_dates: vec![today - Duration::days(10)],
            ..Default::default()
        };

        let snapshot = build_snapshot(&inputs, today);

        // One signup on the first day, then a flat series across empty days.
        assert_eq!(snapshot.user_growth[0].users, 10);
        for point in &snapshot.user_growth[1..] {
            assert_eq!(point.users, 10);
        }
        assert_eq!(snapshot.user_growth[0].date, "May 10");
        assert_eq!(snapshot.user_growth[10].date, "May 20");
    }

    #[test]
    fn test_common_gaps_positive_bounded_and_sorted() {
        let mut job_skill_lists = Vec::new();
        // 12 skills with demand 12..=1
        for n in 1..=12 {
            for _ in 0..n {
                job_skill_lists.push(vec![format!("gap-{}", n)]);
            }
        }
        let inputs = SnapshotInputs {
            job_skill_lists,
            // gap-12 is fully covered; everything else has zero coverage
            resource_skill_tags: vec!["gap-12, gap-12, gap-12".to_string(); 4],
            ..Default::default()
        };

        let snapshot = build_snapshot(&inputs, day(2024, 5, 20));

        assert!(snapshot.common_gaps.len() <= 8);
        assert!(snapshot.common_gaps.iter().all(|g| g.occurrences > 0));
        for pair in snapshot.common_gaps.windows(2) {
            assert!(pair[0].occurrences >= pair[1].occurrences);
        }
        assert!(snapshot.common_gaps.iter().all(|g| g.skill != "gap-12"));
        assert_eq!(snapshot.common_gaps[0].skill, "gap-11");
    }

    #[test]
    fn test_resource_tags_are_split_and_trimmed() {
        let inputs = SnapshotInputs {
            job_skill_lists: vec![skills(&["React"]), skills(&["React"])],
            resource_skill_tags: vec![" React ,, React".to_string()],
            ..Default::default()
        };

        let snapshot = build_snapshot(&inputs, day(2024, 5, 20));

        // Demand 2, coverage 2: no gap and full coverage.
        assert!(snapshot.common_gaps.is_empty());
        assert_eq!(snapshot.metrics.skill_gap_coverage, 100);
    }

    #[test]
    fn test_skill_gap_coverage_bounds() {
        // Coverage far exceeding demand clamps to 100.
        let rich = SnapshotInputs {
            job_skill_lists: vec![skills(&["React"])],
            resource_skill_tags: vec!["React, React, React, React".to_string()],
            ..Default::default()
        };
        let snapshot = build_snapshot(&rich, day(2024, 5, 20));
        assert_eq!(snapshot.metrics.skill_gap_coverage, 100);

        // Partial coverage lands strictly inside the range.
        let partial = SnapshotInputs {
            job_skill_lists: vec![skills(&["React"]), skills(&["React"]), skills(&["SQL"])],
            resource_skill_tags: vec!["React".to_string()],
            ..Default::default()
        };
        let snapshot = build_snapshot(&partial, day(2024, 5, 20));
        assert_eq!(snapshot.metrics.skill_gap_coverage, 33);
    }

    #[test]
    fn test_zero_demand_means_full_coverage() {
        let inputs = SnapshotInputs::default();
        let snapshot = build_snapshot(&inputs, day(2024, 5, 20));
        assert_eq!(snapshot.metrics.skill_gap_coverage, 100);
        assert_eq!(snapshot.metrics.total_users, 0);
        assert_eq!(snapshot.metrics.jobs_suggested, 0);
    }

    #[test]
    fn test_active_today_uses_real_signal_when_present() {
        let inputs = SnapshotInputs {
            total_users: 100,
            users_created_today: 7,
            ..Default::default()
        };
        let snapshot = build_snapshot(&inputs, day(2024, 5, 20));
        assert_eq!(snapshot.metrics.active_today, 7);
    }

    #[test]
    fn test_active_today_falls_back_to_heuristic() {
        let inputs = SnapshotInputs {
            total_users: 100,
            users_created_today: 0,
            ..Default::default()
        };
        let snapshot = build_snapshot(&inputs, day(2024, 5, 20));
        assert_eq!(snapshot.metrics.active_today, 12);
    }

    #[test]
    fn test_jobs_suggested_counts_all_job_rows() {
        let inputs = SnapshotInputs {
            job_skill_lists: vec![vec![], skills(&["React"]), vec![]],
            job_types: vec![None, Some("Full-time".to_string()), None],
            ..Default::default()
        };
        let snapshot = build_snapshot(&inputs, day(2024, 5, 20));
        assert_eq!(snapshot.metrics.jobs_suggested, 3);
    }
}
