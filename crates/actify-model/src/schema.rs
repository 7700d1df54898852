//! Positional layout of the spreadsheet export.
//!
//! Column binding is positional, not header-name based: the export carries
//! a fixed column order and any structural change to the sheet silently
//! breaks the mapping. Keeping the mapping as one declared table makes a
//! future migration to header-based binding a local change.

use std::fmt;

/// Minimum number of fields a row must carry to be considered data.
/// Shorter rows are blank or malformed source lines and are dropped.
pub const MIN_ROW_FIELDS: usize = 5;

/// Columns of the export, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetColumn {
    /// Display ordinal ("No").
    Ordinal,
    /// Employee name.
    Name,
    /// Department.
    Department,
    /// Acting role title.
    Role,
    /// Assignment start date (raw text).
    StartDate,
    /// Assignment end date (raw text, parsed for classification).
    EndDate,
}

/// All sheet columns in positional order.
pub const SHEET_COLUMNS: [SheetColumn; 6] = [
    SheetColumn::Ordinal,
    SheetColumn::Name,
    SheetColumn::Department,
    SheetColumn::Role,
    SheetColumn::StartDate,
    SheetColumn::EndDate,
];

impl SheetColumn {
    /// Zero-based position of this column in a raw row.
    pub fn index(&self) -> usize {
        match self {
            SheetColumn::Ordinal => 0,
            SheetColumn::Name => 1,
            SheetColumn::Department => 2,
            SheetColumn::Role => 3,
            SheetColumn::StartDate => 4,
            SheetColumn::EndDate => 5,
        }
    }

    /// Human-readable column label.
    pub fn label(&self) -> &'static str {
        match self {
            SheetColumn::Ordinal => "No",
            SheetColumn::Name => "Name",
            SheetColumn::Department => "Department",
            SheetColumn::Role => "Acting Role",
            SheetColumn::StartDate => "Start Date",
            SheetColumn::EndDate => "End Date",
        }
    }

    /// Fetch this column's value from a raw row, empty when the row is
    /// shorter than the column position.
    pub fn field<'a>(&self, row: &'a [String]) -> &'a str {
        row.get(self.index()).map(String::as_str).unwrap_or("")
    }
}

impl fmt::Display for SheetColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
