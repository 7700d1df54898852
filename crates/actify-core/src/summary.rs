//! Aggregations over the assignment sequence.
//!
//! All pure functions, re-derived from the full sequence on every render.

use std::collections::BTreeMap;

use actify_model::{ActingAssignment, SummaryStats};

/// Count assignments by lifecycle status.
pub fn summarize(assignments: &[ActingAssignment]) -> SummaryStats {
    let mut stats = SummaryStats::default();
    for assignment in assignments {
        stats.record(assignment.status);
    }
    stats
}

/// Assignment count per department, descending by count, ties by name.
pub fn department_distribution(assignments: &[ActingAssignment]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for assignment in assignments {
        *counts.entry(assignment.department.as_str()).or_default() += 1;
    }
    let mut distribution: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    distribution
}

/// Leading slice of the ordered sequence, for highlight-style consumers.
pub fn highlights(assignments: &[ActingAssignment], count: usize) -> &[ActingAssignment] {
    &assignments[..assignments.len().min(count)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use actify_model::{ActingStatus, DaysRemaining};

    fn assignment(name: &str, department: &str, status: ActingStatus) -> ActingAssignment {
        ActingAssignment {
            sequence_number: "1".to_string(),
            person_name: name.to_string(),
            department: department.to_string(),
            role_title: "Acting Lead".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-12-31".to_string(),
            status,
            days_remaining: DaysRemaining::Known(10),
        }
    }

    #[test]
    fn test_summarize_counts() {
        let assignments = vec![
            assignment("A", "Finance", ActingStatus::Active),
            assignment("B", "Finance", ActingStatus::ExpiringSoon),
            assignment("C", "Ops", ActingStatus::Expired),
        ];
        let stats = summarize(&assignments);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.expiring_soon, 1);
        assert_eq!(stats.expired, 1);
    }

    #[test]
    fn test_distribution_orders_by_count_then_name() {
        let assignments = vec![
            assignment("A", "Ops", ActingStatus::Active),
            assignment("B", "Finance", ActingStatus::Active),
            assignment("C", "Ops", ActingStatus::Active),
            assignment("D", "HR", ActingStatus::Active),
        ];
        let distribution = department_distribution(&assignments);
        assert_eq!(distribution, vec![
            ("Ops".to_string(), 2),
            ("Finance".to_string(), 1),
            ("HR".to_string(), 1),
        ]);
    }

    #[test]
    fn test_highlights_slices_prefix() {
        let assignments = vec![
            assignment("A", "Ops", ActingStatus::Active),
            assignment("B", "Finance", ActingStatus::Active),
        ];
        assert_eq!(highlights(&assignments, 1).len(), 1);
        assert_eq!(highlights(&assignments, 1)[0].person_name, "A");
        assert_eq!(highlights(&assignments, 5).len(), 2);
    }
}
