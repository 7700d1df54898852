//! Transient table filters: free-text search plus a status selector.

use actify_model::{ActingAssignment, ActingStatus};

/// Filter state for the assignment table. Default matches everything.
#[derive(Debug, Clone, Default)]
pub struct AssignmentFilter {
    /// Case-insensitive substring matched against name or department.
    pub search: Option<String>,
    /// Restrict to one lifecycle status.
    pub status: Option<ActingStatus>,
}

impl AssignmentFilter {
    /// Whether one assignment passes both filter criteria.
    pub fn matches(&self, assignment: &ActingAssignment) -> bool {
        let matches_search = match &self.search {
            Some(needle) => {
                let needle = needle.to_lowercase();
                assignment.person_name.to_lowercase().contains(&needle)
                    || assignment.department.to_lowercase().contains(&needle)
            }
            None => true,
        };
        let matches_status = match self.status {
            Some(status) => assignment.status == status,
            None => true,
        };
        matches_search && matches_status
    }

    /// Apply the filter, preserving sequence order.
    pub fn apply<'a>(&self, assignments: &'a [ActingAssignment]) -> Vec<&'a ActingAssignment> {
        assignments
            .iter()
            .filter(|assignment| self.matches(assignment))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actify_model::DaysRemaining;

    fn assignment(name: &str, department: &str, status: ActingStatus) -> ActingAssignment {
        ActingAssignment {
            sequence_number: "1".to_string(),
            person_name: name.to_string(),
            department: department.to_string(),
            role_title: "Acting Lead".to_string(),
            start_date: String::new(),
            end_date: String::new(),
            status,
            days_remaining: DaysRemaining::Known(40),
        }
    }

    #[test]
    fn test_search_matches_name_or_department() {
        let data = vec![
            assignment("Jane Doe", "Finance", ActingStatus::Active),
            assignment("John Roe", "Operations", ActingStatus::Active),
        ];
        let filter = AssignmentFilter {
            search: Some("fin".to_string()),
            status: None,
        };
        let matched = filter.apply(&data);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].person_name, "Jane Doe");

        let filter = AssignmentFilter {
            search: Some("ROE".to_string()),
            status: None,
        };
        assert_eq!(filter.apply(&data).len(), 1);
    }

    #[test]
    fn test_status_filter() {
        let data = vec![
            assignment("Jane", "Finance", ActingStatus::Active),
            assignment("John", "Finance", ActingStatus::Expired),
        ];
        let filter = AssignmentFilter {
            search: None,
            status: Some(ActingStatus::Expired),
        };
        let matched = filter.apply(&data);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].person_name, "John");
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let data = vec![assignment("Jane", "Finance", ActingStatus::Active)];
        assert_eq!(AssignmentFilter::default().apply(&data).len(), 1);
    }
}
