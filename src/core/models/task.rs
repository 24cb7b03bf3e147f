use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(TaskId)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    pub fn all() -> [TaskStatus; 3] {
        [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Done]
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task status '{0}'")]
pub struct UnknownStatus(pub String);

// Exact match only: "pending" or "In  Progress" are not statuses
impl FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::all()
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(deserialize_with = "deserialize_due_date")]
    pub due_date: DateTime<Utc>,
}

impl Task {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn update_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: DateTime<Utc>,
}

/// Body of `PATCH /tasks/{id}/`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StatusUpdate {
    pub status: TaskStatus,
}

/// Parses a wire timestamp. The backend stores naive datetimes, so an
/// offset-less value is read as UTC.
pub fn parse_wire_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .map(|naive| naive.and_utc())
}

fn deserialize_due_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_wire_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid due_date '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_uses_exact_wire_strings() {
        assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), "\"In Progress\"");
        assert_eq!("Done".parse::<TaskStatus>().unwrap(), TaskStatus::Done);
        assert!("done".parse::<TaskStatus>().is_err());
        assert!("In-Progress".parse::<TaskStatus>().is_err());
        assert!(serde_json::from_str::<TaskStatus>("\"pending\"").is_err());
    }

    #[test]
    fn decodes_backend_task_with_null_description() {
        let json = r#"{"id":7,"title":"Write report","description":null,"status":"In Progress","due_date":"2025-03-01T09:30:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, TaskId(7));
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.description_text(), "");
        assert_eq!(task.due_date, Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap());
    }

    #[test]
    fn offset_and_naive_timestamps_are_utc() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(parse_wire_timestamp("2025-03-01T10:30:00+01:00"), Some(expected));
        assert_eq!(parse_wire_timestamp("2025-03-01T09:30:00.000"), Some(expected));
        assert_eq!(parse_wire_timestamp("2025-03-01T09:30"), Some(expected));
        assert_eq!(parse_wire_timestamp("next tuesday"), None);
    }

    #[test]
    fn malformed_due_date_is_rejected() {
        let json = r#"{"id":1,"title":"x","status":"Pending","due_date":"soon"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn draft_serializes_due_date_as_utc() {
        let draft = TaskDraft {
            title: "A".into(),
            description: String::new(),
            status: TaskStatus::Pending,
            due_date: Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["status"], "Pending");
        assert_eq!(value["due_date"], "2025-03-01T09:30:00Z");
    }
}
