pub mod assignment;
pub mod schema;
pub mod status;
pub mod summary;

pub use assignment::{
    ActingAssignment, DEFAULT_ROLE_TITLE, DaysRemaining, UNASSIGNED_DEPARTMENT, UNKNOWN_NAME,
};
pub use schema::{MIN_ROW_FIELDS, SHEET_COLUMNS, SheetColumn};
pub use status::{ActingStatus, EXPIRING_WINDOW_DAYS, ParseStatusError};
pub use summary::SummaryStats;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_serializes() {
        let assignment = ActingAssignment {
            sequence_number: "1".to_string(),
            person_name: "Jane Doe".to_string(),
            department: "Finance".to_string(),
            role_title: "Acting Manager".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-12-31".to_string(),
            status: ActingStatus::Active,
            days_remaining: DaysRemaining::Known(213),
        };
        let json = serde_json::to_string(&assignment).expect("serialize assignment");
        let round: ActingAssignment = serde_json::from_str(&json).expect("deserialize assignment");
        assert_eq!(round, assignment);
    }

    #[test]
    fn unknown_days_serialize_as_null() {
        let json = serde_json::to_value(DaysRemaining::Unknown).expect("serialize days");
        assert!(json.is_null());
        let round: DaysRemaining = serde_json::from_value(json).expect("deserialize days");
        assert_eq!(round, DaysRemaining::Unknown);
    }
}
