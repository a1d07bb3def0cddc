//! Configuration module for filekit.
//!
//! This module handles:
//! - Loading settings from TOML files
//! - Locating the per-user settings file
//! - Settings validation

pub mod loader;
pub mod validation;

pub use loader::{IoSettings, ResourceSettings, Settings};
pub use validation::validate_settings;
