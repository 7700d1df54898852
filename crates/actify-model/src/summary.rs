//! Summary counts over an assignment sequence.

use serde::{Deserialize, Serialize};

use crate::status::ActingStatus;

/// Counts by lifecycle status, rebuilt on every refresh cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Total number of assignments.
    pub total: usize,
    /// Assignments with more than 30 days left.
    pub active: usize,
    /// Assignments ending within the next 30 days.
    pub expiring_soon: usize,
    /// Assignments whose end date has passed or is unknown.
    pub expired: usize,
}

impl SummaryStats {
    /// Count one assignment by its status.
    pub fn record(&mut self, status: ActingStatus) {
        self.total += 1;
        match status {
            ActingStatus::Active => self.active += 1,
            ActingStatus::ExpiringSoon => self.expiring_soon += 1,
            ActingStatus::Expired => self.expired += 1,
        }
    }
}
