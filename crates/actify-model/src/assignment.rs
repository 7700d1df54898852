//! The acting assignment record and its derived day count.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::status::ActingStatus;

/// Sentinel used when the name column is blank.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Sentinel used when the department column is blank.
pub const UNASSIGNED_DEPARTMENT: &str = "Unassigned";

/// Sentinel used when the role column is blank.
pub const DEFAULT_ROLE_TITLE: &str = "Acting Position";

/// Signed whole-day distance from the reference date to the end date.
///
/// The source sheet is uncontrolled; an end date that fails to parse yields
/// `Unknown` rather than a bogus number. Unknown day counts always classify
/// as `Expired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum DaysRemaining {
    /// Whole days until the end date; negative means the date has passed.
    Known(i64),
    /// The end date could not be parsed.
    Unknown,
}

impl DaysRemaining {
    /// Classify this day count into a lifecycle status.
    pub fn status(&self) -> ActingStatus {
        match self {
            DaysRemaining::Known(days) => ActingStatus::from_days_remaining(*days),
            DaysRemaining::Unknown => ActingStatus::Expired,
        }
    }

    /// Returns the day count when known.
    pub fn known(&self) -> Option<i64> {
        match self {
            DaysRemaining::Known(days) => Some(*days),
            DaysRemaining::Unknown => None,
        }
    }
}

impl From<Option<i64>> for DaysRemaining {
    fn from(value: Option<i64>) -> Self {
        match value {
            Some(days) => DaysRemaining::Known(days),
            None => DaysRemaining::Unknown,
        }
    }
}

impl From<DaysRemaining> for Option<i64> {
    fn from(value: DaysRemaining) -> Self {
        value.known()
    }
}

impl fmt::Display for DaysRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaysRemaining::Known(days) => write!(f, "{days}"),
            DaysRemaining::Unknown => write!(f, "-"),
        }
    }
}

/// One normalized acting assignment row.
///
/// Records are immutable after construction; every refresh cycle rebuilds
/// the full sequence from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActingAssignment {
    /// Display ordinal from the sheet, or the 1-based filtered position
    /// when the sheet cell is blank.
    pub sequence_number: String,
    /// Employee name (column 1).
    pub person_name: String,
    /// Department (column 2).
    pub department: String,
    /// Acting role title (column 3).
    pub role_title: String,
    /// Raw start date text (column 4); never parsed.
    pub start_date: String,
    /// Raw end date text (column 5); parsed separately for classification.
    pub end_date: String,
    /// Derived lifecycle status.
    pub status: ActingStatus,
    /// Derived day count against the reference date.
    pub days_remaining: DaysRemaining,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_days_classify_expired() {
        assert_eq!(DaysRemaining::Unknown.status(), ActingStatus::Expired);
    }

    #[test]
    fn test_known_days_delegate_to_thresholds() {
        assert_eq!(DaysRemaining::Known(45).status(), ActingStatus::Active);
        assert_eq!(
            DaysRemaining::Known(10).status(),
            ActingStatus::ExpiringSoon
        );
        assert_eq!(DaysRemaining::Known(-3).status(), ActingStatus::Expired);
    }

    #[test]
    fn test_display() {
        assert_eq!(DaysRemaining::Known(-2).to_string(), "-2");
        assert_eq!(DaysRemaining::Unknown.to_string(), "-");
    }
}
