//! YAML module.
//!
//! Provides:
//! - Loading YAML text, files and resources into a bound target type
//! - Dumping values as block-style YAML

pub mod manager;

pub use manager::YamlManager;
