//! CLI library for testing purposes

pub mod commands;
pub mod config;
pub mod report;

pub use commands::CollectMode;
pub use config::Config;
