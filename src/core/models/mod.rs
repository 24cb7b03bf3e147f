pub mod task;

pub use task::{parse_wire_timestamp, StatusUpdate, Task, TaskDraft, TaskId, TaskStatus, UnknownStatus};
