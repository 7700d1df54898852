//! Lifecycle status classification for acting assignments.
//!
//! Status is a pure function of the signed day count between the reference
//! date (today, midnight-normalized) and the assignment end date:
//!
//! - negative days: the assignment has already ended (`Expired`)
//! - 0 to 30 days inclusive: the assignment ends soon (`ExpiringSoon`)
//! - more than 30 days: the assignment is comfortably running (`Active`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A status string that matches none of the known spellings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown acting status: {0}")]
pub struct ParseStatusError(pub String);

/// Inclusive upper bound (in days) of the "expiring soon" window.
pub const EXPIRING_WINDOW_DAYS: i64 = 30;

/// Lifecycle status of an acting assignment.
///
/// The logical tag is decoupled from its display string; `as_str` returns
/// the wire/display form used by the spreadsheet consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActingStatus {
    /// End date is more than 30 days out.
    Active,

    /// End date falls within the next 30 days (today included).
    ExpiringSoon,

    /// End date has passed, or could not be determined.
    Expired,
}

impl ActingStatus {
    /// Returns the canonical display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActingStatus::Active => "ACTIVE",
            ActingStatus::ExpiringSoon => "EXPIRING SOON",
            ActingStatus::Expired => "EXPIRED",
        }
    }

    /// Classify a known whole-day distance to the end date.
    pub fn from_days_remaining(days: i64) -> Self {
        if days < 0 {
            ActingStatus::Expired
        } else if days <= EXPIRING_WINDOW_DAYS {
            ActingStatus::ExpiringSoon
        } else {
            ActingStatus::Active
        }
    }

    /// Returns true for statuses that warrant an HR reminder.
    pub fn needs_follow_up(&self) -> bool {
        matches!(self, ActingStatus::ExpiringSoon | ActingStatus::Expired)
    }
}

impl fmt::Display for ActingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActingStatus {
    type Err = ParseStatusError;

    /// Parse a status string. Accepts the display form ("EXPIRING SOON")
    /// and identifier-style spellings, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACTIVE" => Ok(ActingStatus::Active),
            "EXPIRING SOON" | "EXPIRING_SOON" | "EXPIRING" => Ok(ActingStatus::ExpiringSoon),
            "EXPIRED" => Ok(ActingStatus::Expired),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}
