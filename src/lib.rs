//! filekit - small managers around files, folders, resources and YAML.
//!
//! Every manager owns exactly one location, fixed at construction. File and
//! folder operations report failure as `false` or an empty value; resource
//! resolution, settings and YAML handling return [`Result`].
//!
//! # Features
//!
//! - Directory listing and recursive creation
//! - File create, delete, copy (from file, bytes, text or reader), append and read
//! - Resource lookup through an ordered search path
//! - YAML load and block-style dump bound to a target type
//!
//! # Example
//!
//! ```no_run
//! use serde::Deserialize;
//! use filekit::{Charset, FileManager, SearchPath, YamlManager};
//!
//! #[derive(Deserialize)]
//! struct Network {
//!     port: u16,
//! }
//!
//! fn main() -> filekit::Result<()> {
//!     let loader = SearchPath::new(["resources"]);
//!     let file = FileManager::from_root_resource(&loader, "config.yml")?;
//!     println!("{}", file.read().text(Charset::Utf8));
//!
//!     let network: Network = YamlManager::new().load_file(&file)?;
//!     println!("port {}", network.port);
//!     Ok(())
//! }
//! ```

pub mod charset;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod yaml;

// Re-exports for convenience
pub use charset::Charset;
pub use config::{validate_settings, Settings};
pub use error::{Error, Result};
pub use fs::{FileManager, FolderManager, ResourceLoader, SearchPath};
pub use yaml::YamlManager;
