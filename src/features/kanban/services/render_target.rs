use crate::core::models::TaskId;

use super::renderer::{DueBadge, TaskCard};

/// Where the board draws its cards. The browser implementation is signal
/// backed; tests record calls.
pub trait RenderTarget {
    /// Inserts `card` into the column with element id `column_id`.
    fn place(&self, card: TaskCard, column_id: &'static str);
    /// Detaches the card for `id`. Returns false when no such card is shown.
    fn remove(&self, id: TaskId) -> bool;
    fn update_badge(&self, id: TaskId, badge: DueBadge);
    /// Lower bound of the create form's due date input, `%Y-%m-%dT%H:%M`.
    fn set_min_due(&self, value: String);
    fn close_create_form(&self);
}

/// Blocking user dialogs and transient notices.
pub trait UserPrompt {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    fn toast(&self, message: &str);
}
