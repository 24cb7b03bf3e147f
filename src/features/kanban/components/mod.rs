pub mod header;
pub mod board;
pub mod column;
pub mod task_card;
pub mod toast;
pub mod kanban_page;

pub use header::KanbanHeader;
pub use board::KanbanBoard;
pub use column::KanbanColumn;
pub use task_card::TaskCardView;
pub use toast::Toast;
pub use kanban_page::KanbanPage;

/// Data transfer format carrying the dragged task id.
pub const DRAG_FORMAT: &str = "text";
