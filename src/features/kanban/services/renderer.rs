use chrono::{DateTime, Utc};

use crate::core::clock::DisplayZone;
use crate::core::columns::ColumnTable;
use crate::core::models::{Task, TaskId, TaskStatus};
use crate::core::urgency::{classify, UrgencyTier};

use super::render_target::RenderTarget;

pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const OVERDUE_MARKER: &str = "(Overdue)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueBadge {
    pub tier: UrgencyTier,
    pub label: String,
}

impl DueBadge {
    pub fn css_class(&self) -> &'static str {
        self.tier.css_class()
    }
}

/// Everything a card shows. Cards are rebuilt from the task, never edited in
/// place, apart from the badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    pub task_id: TaskId,
    pub dom_id: String,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub badge: DueBadge,
}

#[derive(Debug, Clone)]
pub struct TaskCardRenderer {
    zone: DisplayZone,
    columns: ColumnTable,
}

impl TaskCardRenderer {
    pub fn new(zone: DisplayZone, columns: ColumnTable) -> Self {
        Self { zone, columns }
    }

    pub fn columns(&self) -> &ColumnTable {
        &self.columns
    }

    pub fn dom_id(id: TaskId) -> String {
        format!("task-{id}")
    }

    pub fn badge(&self, due: DateTime<Utc>, now: DateTime<Utc>) -> DueBadge {
        let tier = classify(due, now);
        let shown = self.zone.format(due, DUE_DATE_FORMAT);
        let label = match tier {
            UrgencyTier::Overdue => format!("{shown} {OVERDUE_MARKER}"),
            _ => shown,
        };
        DueBadge { tier, label }
    }

    pub fn render(&self, task: &Task, now: DateTime<Utc>) -> TaskCard {
        TaskCard {
            task_id: task.id,
            dom_id: Self::dom_id(task.id),
            title: task.title.clone(),
            description: task.description_text().to_string(),
            due_date: task.due_date,
            badge: self.badge(task.due_date, now),
        }
    }

    /// Puts `card` in the column for `status`, replacing any card already
    /// shown for the same task.
    pub fn place(&self, target: &dyn RenderTarget, card: TaskCard, status: TaskStatus) -> bool {
        let Some(column) = self.columns.column_for(status) else {
            tracing::error!("No column for status {}", status);
            return false;
        };
        target.remove(card.task_id);
        target.place(card, column);
        true
    }

    pub fn remove_by_id(&self, target: &dyn RenderTarget, id: TaskId) -> bool {
        target.remove(id)
    }
}
