//! Status <-> column identifier table.
//!
//! Columns are addressed by their element id. The table is the only place
//! that knows the mapping, in both directions.

use std::collections::HashSet;

use thiserror::Error;

use super::models::TaskStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnTableError {
    #[error("status '{0}' has no column")]
    MissingStatus(TaskStatus),
    #[error("status '{0}' is mapped to more than one column")]
    DuplicateStatus(TaskStatus),
    #[error("column id '{0}' is used by more than one status")]
    DuplicateColumn(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTable {
    entries: Vec<(TaskStatus, &'static str)>,
}

impl Default for ColumnTable {
    fn default() -> Self {
        Self {
            entries: vec![
                (TaskStatus::Pending, "pending-list"),
                (TaskStatus::InProgress, "in-progress-list"),
                (TaskStatus::Done, "done-list"),
            ],
        }
    }
}

impl ColumnTable {
    pub fn new(entries: Vec<(TaskStatus, &'static str)>) -> Self {
        Self { entries }
    }

    /// Checks that every status has exactly one column and no column id is
    /// shared, so that both lookups are total and inverse to each other.
    pub fn validate(&self) -> Result<(), ColumnTableError> {
        let mut seen_status = HashSet::new();
        let mut seen_column = HashSet::new();
        for (status, column) in &self.entries {
            if !seen_status.insert(*status) {
                return Err(ColumnTableError::DuplicateStatus(*status));
            }
            if !seen_column.insert(*column) {
                return Err(ColumnTableError::DuplicateColumn(column.to_string()));
            }
        }
        for status in TaskStatus::all() {
            if !seen_status.contains(&status) {
                return Err(ColumnTableError::MissingStatus(status));
            }
        }
        Ok(())
    }

    pub fn column_for(&self, status: TaskStatus) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, column)| *column)
    }

    pub fn status_for(&self, column_id: &str) -> Option<TaskStatus> {
        self.entries
            .iter()
            .find(|(_, column)| *column == column_id)
            .map(|(status, _)| *status)
    }

    pub fn columns(&self) -> impl Iterator<Item = (TaskStatus, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}
