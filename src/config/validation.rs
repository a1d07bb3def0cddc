//! Settings validation logic.

use std::path::PathBuf;

use crate::config::loader::Settings;
use crate::error::{Error, Result};

/// Validate the entire settings structure.
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_roots(&settings.resources.roots)?;

    Ok(())
}

/// Validate resource roots.
///
/// Roots that do not exist yet are allowed; roots that exist must be directories.
pub fn validate_roots(roots: &[PathBuf]) -> Result<()> {
    if roots.is_empty() {
        return Err(Error::MissingConfig("resources.roots".to_string()));
    }

    for root in roots {
        if root.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                field: "resources.roots".to_string(),
                message: "Root path cannot be empty".to_string(),
            });
        }

        if root.exists() && !root.is_dir() {
            return Err(Error::ConfigValidation {
                field: "resources.roots".to_string(),
                message: format!("'{}' is not a directory", root.display()),
            });
        }
    }

    Ok(())
}
