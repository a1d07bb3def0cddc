//! Resource resolution.
//!
//! A resource-backed file manager is an ordinary [`FileManager`] whose
//! directory comes from a [`ResourceLoader`] lookup instead of a literal path.

use std::path::{Path, PathBuf};

use url::Url;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::fs::file::FileManager;
use crate::fs::folder::FolderManager;

/// Resolves resource names to locations.
///
/// Names use `/` separators. The empty name denotes the loader root.
pub trait ResourceLoader {
    fn resource(&self, name: &str) -> Option<Url>;
}

/// Ordered list of root directories searched for resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    roots: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Search only the current working directory.
    pub fn current_dir() -> Result<Self> {
        Ok(Self::new([std::env::current_dir()?]))
    }

    /// Search the directory holding the running executable.
    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().ok_or_else(|| {
            Error::InvalidLocation(format!("Executable has no parent: {}", exe.display()))
        })?;
        Ok(Self::new([dir]))
    }

    /// Search the roots listed in the settings, in order.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.resources.roots.iter().cloned())
    }

    /// Append a root searched after the existing ones.
    pub fn push(&mut self, root: impl Into<PathBuf>) {
        self.roots.push(root.into());
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl ResourceLoader for SearchPath {
    fn resource(&self, name: &str) -> Option<Url> {
        self.roots.iter().find_map(|root| {
            let candidate = join_resource(root, name);
            if !candidate.exists() {
                return None;
            }
            let absolute = candidate.canonicalize().ok()?;
            let url = if absolute.is_dir() {
                Url::from_directory_path(&absolute)
            } else {
                Url::from_file_path(&absolute)
            };
            url.ok()
        })
    }
}

fn join_resource(root: &Path, name: &str) -> PathBuf {
    name.split('/')
        .filter(|part| !part.is_empty())
        .fold(root.to_path_buf(), |path, part| path.join(part))
}

impl FileManager {
    /// Resolve `dir` through `loader` and manage `file_name` inside it.
    ///
    /// An empty `dir` means the loader root.
    pub fn from_resource(loader: &dyn ResourceLoader, dir: &str, file_name: &str) -> Result<Self> {
        let url = loader.resource(dir).ok_or_else(|| {
            Error::ResourceNotFound(if dir.is_empty() {
                "<root>".to_string()
            } else {
                dir.to_string()
            })
        })?;
        let folder = FolderManager::from_url(&url)?;

        tracing::info!("Resolved resource {}/{} to {}", dir, file_name, folder);
        Ok(Self::in_folder(folder, file_name))
    }

    /// Manage `file_name` at the loader root.
    pub fn from_root_resource(loader: &dyn ResourceLoader, file_name: &str) -> Result<Self> {
        Self::from_resource(loader, "", file_name)
    }
}
