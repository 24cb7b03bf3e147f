pub mod components;
pub mod services;
pub mod hooks;

pub use components::*;
pub use services::*;
pub use hooks::*;
