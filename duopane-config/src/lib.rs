//! Configuration system for the duopane workspace shell.
//!
//! This crate provides configuration loading, saving, and default values
//! for the pane orchestrator. It includes:
//!
//! - The `Config` struct and its YAML persistence
//! - Editor pool policy types (`AcquireMode`)
//! - Log level selection shared with the CLI
//! - Typed configuration errors

pub mod config;
pub mod defaults;
mod error;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::{AcquireMode, LogLevel};
