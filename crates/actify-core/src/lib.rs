pub mod broadcast;
pub mod datetime;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod refresh;
pub mod summary;

pub use broadcast::{BroadcastMessage, compose_single_reminder, compose_team_reminder};
pub use datetime::{parse_sheet_date, reference_today};
pub use error::{CoreError, Result};
pub use filter::AssignmentFilter;
pub use normalize::build_assignments;
pub use refresh::{AssignmentLoader, DashboardSnapshot, RefreshController, SheetLoader};
pub use summary::{department_distribution, highlights, summarize};
