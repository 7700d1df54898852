//! Row-to-record normalization and status classification.
//!
//! Consumes raw tokenized rows (header already stripped) and emits the
//! ordered sequence of domain records for one refresh cycle. Malformed rows
//! are dropped silently; the sheet is an uncontrolled source and blank or
//! partial lines are expected.

use chrono::NaiveDate;
use tracing::debug;

use actify_model::{
    ActingAssignment, DEFAULT_ROLE_TITLE, DaysRemaining, MIN_ROW_FIELDS, SheetColumn,
    UNASSIGNED_DEPARTMENT, UNKNOWN_NAME,
};

use crate::datetime::parse_sheet_date;

/// Build the assignment sequence for one pass.
///
/// Rows with fewer than [`MIN_ROW_FIELDS`] fields or a blank name are
/// discarded. Retained rows map positionally per the sheet schema, in
/// source order; when the ordinal cell is blank the 1-based position within
/// the filtered sequence is used instead. `today` is the single reference
/// date shared by the whole pass.
pub fn build_assignments(rows: &[Vec<String>], today: NaiveDate) -> Vec<ActingAssignment> {
    let mut assignments = Vec::new();
    for row in rows {
        if row.len() < MIN_ROW_FIELDS || SheetColumn::Name.field(row).is_empty() {
            debug!(fields = row.len(), "dropping blank or malformed row");
            continue;
        }
        let fallback_ordinal = (assignments.len() + 1).to_string();
        let end_date = SheetColumn::EndDate.field(row).to_string();
        let days_remaining = match parse_sheet_date(&end_date) {
            Some(end) => DaysRemaining::Known((end - today).num_days()),
            None => DaysRemaining::Unknown,
        };
        assignments.push(ActingAssignment {
            sequence_number: field_or(row, SheetColumn::Ordinal, &fallback_ordinal),
            person_name: field_or(row, SheetColumn::Name, UNKNOWN_NAME),
            department: field_or(row, SheetColumn::Department, UNASSIGNED_DEPARTMENT),
            role_title: field_or(row, SheetColumn::Role, DEFAULT_ROLE_TITLE),
            start_date: SheetColumn::StartDate.field(row).to_string(),
            end_date,
            status: days_remaining.status(),
            days_remaining,
        });
    }
    assignments
}

fn field_or(row: &[String], column: SheetColumn, default: &str) -> String {
    let value = column.field(row);
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
