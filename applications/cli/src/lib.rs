//! Tilawah CLI Library
//!
//! Command line front end: chapter listing, simulated recitation, reading
//! positions, bookmarks, the Hijri date and prayer times.
//!
//! This library exposes the command implementations for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod simulated;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{CliError, Result};
