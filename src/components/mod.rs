pub mod task_modal;

pub use task_modal::TaskModal;
