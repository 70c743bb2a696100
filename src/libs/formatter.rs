//! Display formatting for timestamps and table rows.
//!
//! Tables show timestamps as `16-Oct-26 09:05`. Interchange files never go
//! through this module; they keep chrono's ISO-8601 form.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use dewit::libs::formatter::format_timestamp;
//!
//! let at = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap().and_hms_opt(9, 5, 0).unwrap();
//! assert_eq!(format_timestamp(&at), "03-Feb-26 09:05");
//! ```

use super::task::TaskItem;
use chrono::{NaiveDate, NaiveDateTime};

pub const TIMESTAMP_FORMAT: &str = "%d-%b-%y %H:%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A task with every column pre-rendered for a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTask {
    pub id: String,
    pub description: String,
    pub status: String,
    pub tags: String,
    pub added_on: String,
    /// Empty when the task is not done.
    pub completed_on: String,
}

impl From<&TaskItem> for FormattedTask {
    fn from(task: &TaskItem) -> Self {
        FormattedTask {
            id: task.id.to_string(),
            description: task.description.clone(),
            status: task.status.to_string(),
            tags: task.tags.to_csv(),
            added_on: format_timestamp(&task.added_on),
            completed_on: format_optional_timestamp(task.completed_on.as_ref()),
        }
    }
}

pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_optional_timestamp(at: Option<&NaiveDateTime>) -> String {
    at.map(format_timestamp).unwrap_or_default()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
