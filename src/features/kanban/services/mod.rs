pub mod board_controller;
pub mod refresh;
pub mod render_target;
pub mod renderer;
pub mod task_form;

pub use board_controller::{BoardContext, BoardController};
pub use refresh::{RefreshCycle, RefreshSchedule};
pub use render_target::{RenderTarget, UserPrompt};
pub use renderer::{DueBadge, TaskCard, TaskCardRenderer};
pub use task_form::TaskForm;
