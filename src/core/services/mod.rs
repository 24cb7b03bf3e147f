pub mod task_api;

pub use task_api::*;
