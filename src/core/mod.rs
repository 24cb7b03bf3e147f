pub mod clock;
pub mod columns;
pub mod models;
pub mod services;
pub mod urgency;
