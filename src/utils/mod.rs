/// Module containing environment and credential file helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;

pub use config::*;
pub use logger::*;
