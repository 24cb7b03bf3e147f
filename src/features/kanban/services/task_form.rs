use chrono::{DateTime, NaiveDateTime, Utc};

use crate::core::clock::DisplayZone;
use crate::core::models::{TaskDraft, TaskStatus};
use crate::error::FormError;

/// Format of an `<input type="datetime-local">` value (seconds optional).
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Raw values of the create form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: String,
    pub due_date: String,
}

impl TaskForm {
    /// The browser already enforces `required` and `min`; this only turns the
    /// strings into typed values.
    pub fn into_draft(self, zone: DisplayZone) -> Result<TaskDraft, FormError> {
        let status = self
            .status
            .parse::<TaskStatus>()
            .map_err(|_| FormError::InvalidStatus(self.status.clone()))?;
        let due_date = parse_datetime_local(&self.due_date, zone)
            .ok_or_else(|| FormError::InvalidDueDate(self.due_date.clone()))?;
        Ok(TaskDraft {
            title: self.title,
            description: self.description,
            status,
            due_date,
        })
    }
}

pub fn parse_datetime_local(raw: &str, zone: DisplayZone) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let naive = NaiveDateTime::parse_from_str(raw, DATETIME_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    zone.resolve(naive)
}

pub fn format_datetime_local(at: DateTime<Utc>, zone: DisplayZone) -> String {
    zone.format(at, DATETIME_LOCAL_FORMAT)
}
