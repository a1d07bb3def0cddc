//! Error types for filekit.

use thiserror::Error;

/// Main error type for the library and the CLI.
///
/// Plain filesystem operations never produce these: they report failure as
/// `false` or an empty value. Only location resolution, configuration and
/// YAML handling return errors.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Resource resolution errors
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    // YAML errors
    #[error("YAML format error: {0}")]
    Format(#[from] serde_yaml::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes used by the `filekit` binary.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const OPERATION_FAILED: i32 = 1;
    pub const RESOURCE_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const FORMAT_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_format_error_keeps_source() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [1, 2").unwrap_err();
        let err = Error::from(yaml_err);

        assert!(err.to_string().starts_with("YAML format error:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_validation_message() {
        let err = Error::ConfigValidation {
            field: "resources.roots".to_string(),
            message: "not a directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for 'resources.roots': not a directory"
        );
    }
}
