pub mod error;
pub mod fetch;
pub mod tokenize;

pub use error::{IngestError, Result};
pub use fetch::{DEFAULT_GID, DEFAULT_SHEET_ID, SheetClient, SheetSource};
pub use tokenize::{parse_line, tokenize_csv};
