//! Directory manager.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Error, Result};
use crate::fs::file::FileManager;

/// Owns one directory path and the directory-level operations on it.
///
/// The path is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderManager {
    path: PathBuf,
}

impl FolderManager {
    /// Create a manager for `path`, normalizing redundant separators and `.` components.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: normalize(path.as_ref()),
        }
    }

    /// Create a manager from a `file:` URL.
    pub fn from_url(url: &Url) -> Result<Self> {
        let path = url
            .to_file_path()
            .map_err(|_| Error::InvalidLocation(format!("Not a local file URL: {}", url)))?;
        Ok(Self::new(path))
    }

    /// Create a manager from a `file:` URI string.
    pub fn from_uri(uri: &str) -> Result<Self> {
        Self::from_url(&Url::parse(uri)?)
    }

    /// The normalized directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base names of all direct children, sorted.
    ///
    /// Any enumeration failure yields an empty list.
    pub fn list(&self) -> Vec<String> {
        match read_names(self.fs_path()) {
            Ok(mut names) => {
                names.sort();
                names
            }
            Err(e) => {
                tracing::debug!("Cannot list {}: {}", self.fs_path().display(), e);
                Vec::new()
            }
        }
    }

    /// One file manager per entry returned by [`list`](Self::list).
    pub fn files(&self) -> Vec<FileManager> {
        self.list()
            .into_iter()
            .map(|name| FileManager::in_folder(self.clone(), &name))
            .collect()
    }

    /// Create the directory and any missing parents.
    ///
    /// Returns `true` when the directory exists afterwards.
    pub fn create_dir(&self) -> bool {
        match fs::create_dir_all(&self.path) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to create directory {}: {}", self.path.display(), e);
                false
            }
        }
    }

    /// Path handed to the OS; an empty path means the working directory.
    fn fs_path(&self) -> &Path {
        if self.path.as_os_str().is_empty() {
            Path::new(".")
        } else {
            &self.path
        }
    }
}

impl fmt::Display for FolderManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}

fn read_names(dir: &Path) -> io::Result<Vec<String>> {
    fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalizes_path() {
        let folder = FolderManager::new("data//nested/./dir/");
        assert_eq!(folder.path(), Path::new("data/nested/dir"));
        assert_eq!(folder.to_string(), PathBuf::from("data/nested/dir").display().to_string());
    }

    #[test]
    fn test_create_dir_creates_ancestors() {
        let tmp = TempDir::new().unwrap();
        let deep = tmp.path().join("a").join("b").join("c");
        let folder = FolderManager::new(&deep);

        assert!(folder.create_dir());
        assert!(deep.is_dir());
        assert!(tmp.path().join("a").join("b").is_dir());
        assert!(tmp.path().join("a").is_dir());

        // Already present is still success
        assert!(folder.create_dir());
    }

    #[test]
    fn test_create_dir_over_file_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        assert!(!FolderManager::new(blocker.join("child")).create_dir());
    }

    #[test]
    fn test_list_returns_base_names() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.txt"), b"").unwrap();
        fs::write(tmp.path().join("a.yml"), b"").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let folder = FolderManager::new(tmp.path());
        assert_eq!(folder.list(), vec!["a.yml", "b.txt", "sub"]);
    }

    #[test]
    fn test_list_empty_and_missing() {
        let tmp = TempDir::new().unwrap();
        assert!(FolderManager::new(tmp.path()).list().is_empty());
        assert!(FolderManager::new(tmp.path().join("missing")).list().is_empty());
    }

    #[test]
    fn test_files_wraps_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("one"), b"1").unwrap();
        fs::write(tmp.path().join("two"), b"2").unwrap();

        let files = FolderManager::new(tmp.path()).files();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name(), "one");
        assert_eq!(files[1].path(), tmp.path().join("two"));
        assert!(files.iter().all(FileManager::exists));
    }

    #[test]
    fn test_from_url() {
        let tmp = TempDir::new().unwrap();
        let url = Url::from_directory_path(tmp.path()).unwrap();
        let folder = FolderManager::from_url(&url).unwrap();
        assert_eq!(folder.path(), tmp.path());

        let parsed = FolderManager::from_uri(url.as_str()).unwrap();
        assert_eq!(parsed, folder);
        assert!(matches!(
            FolderManager::from_uri("not a uri"),
            Err(Error::UrlParse(_))
        ));

        let remote = Url::parse("https://example.com/config").unwrap();
        assert!(matches!(
            FolderManager::from_url(&remote),
            Err(Error::InvalidLocation(_))
        ));
    }
}
