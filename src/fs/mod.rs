//! Filesystem module.
//!
//! Provides:
//! - Directory management (`FolderManager`)
//! - File management with grouped copy, write and read operations (`FileManager`)
//! - Resource lookup feeding file managers (`ResourceLoader`, `SearchPath`)

pub mod file;
pub mod folder;
pub mod resource;

pub use file::{CopyOps, FileManager, ReadOps, WriteOps};
pub use folder::FolderManager;
pub use resource::{ResourceLoader, SearchPath};
