pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;

pub use app::App;
pub use config::BoardConfig;
pub use error::{ApiError, BoardError, ConfigError, FormError};
