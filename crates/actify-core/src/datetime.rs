//! Date handling for the uncontrolled sheet source.
//!
//! End dates arrive as free text. Classification compares calendar dates
//! only, so everything is normalized to whole days; no time-of-day survives
//! parsing.

use chrono::{Local, NaiveDate};

/// Date formats the sheet has produced so far, in match order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Parse a raw end-date cell into a calendar date.
///
/// Returns `None` for empty or unrecognized text; such rows classify as
/// expired with an unknown day count.
pub fn parse_sheet_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// The midnight-normalized reference date for one ingestion pass.
///
/// Computed once per pass so every record in a batch compares against the
/// identical reference point, even across a day boundary.
pub fn reference_today() -> NaiveDate {
    Local::now().date_naive()
}
