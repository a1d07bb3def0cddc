//! File manager.
//!
//! A [`FileManager`] is a [`FolderManager`] plus a file name. Its operations
//! open, act on and close the file within a single call. Failures are logged
//! and reported only as `false` or an empty value, so callers cannot tell
//! "missing" from "unreadable".

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Component, Path, PathBuf};

use url::Url;

use crate::charset::Charset;
use crate::error::Result;
use crate::fs::folder::FolderManager;

/// Owns one file path inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileManager {
    folder: FolderManager,
    file_name: String,
    path: PathBuf,
}

impl FileManager {
    /// Manage `file_name` inside the directory `dir`.
    pub fn new(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self::in_folder(FolderManager::new(dir), file_name)
    }

    /// Manage `file_name` inside an existing folder manager's directory.
    ///
    /// Root and drive prefixes are dropped from `file_name`, so the file
    /// always lives under the folder.
    pub fn in_folder(folder: FolderManager, file_name: &str) -> Self {
        let relative = relative_name(file_name);
        let path = folder.path().join(&relative);
        Self {
            folder,
            file_name: relative.to_string_lossy().into_owned(),
            path,
        }
    }

    /// Manage `file_name` inside the directory named by a `file:` URL.
    pub fn from_url(dir: &Url, file_name: &str) -> Result<Self> {
        Ok(Self::in_folder(FolderManager::from_url(dir)?, file_name))
    }

    /// Split a full path into its parent directory and file name.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match path.file_name() {
            Some(name) => Self::new(
                path.parent().unwrap_or_else(|| Path::new("")),
                &name.to_string_lossy(),
            ),
            None => Self::new(path, ""),
        }
    }

    /// The directory holding the file.
    pub fn folder(&self) -> &FolderManager {
        &self.folder
    }

    /// File name relative to the folder.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the path currently refers to an existing entry.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the parent directories, then the file itself.
    ///
    /// Returns `false` if the file already exists or cannot be created.
    pub fn create_file(&self) -> bool {
        self.folder.create_dir();

        let created = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path);
        report(&self.path, "create", created.map(drop))
    }

    /// Delete the file. Returns `false` if it was absent or deletion failed.
    pub fn delete_file(&self) -> bool {
        report(&self.path, "delete", fs::remove_file(&self.path))
    }

    /// Operations that replace the file contents.
    pub fn copy(&self) -> CopyOps<'_> {
        CopyOps { path: &self.path }
    }

    /// Operations that append to the file.
    pub fn write(&self) -> WriteOps<'_> {
        WriteOps { path: &self.path }
    }

    /// Operations that read the whole file.
    pub fn read(&self) -> ReadOps<'_> {
        ReadOps { path: &self.path }
    }
}

impl fmt::Display for FileManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Replace the target file with content from another source.
///
/// Every variant creates the file if needed and truncates existing content.
#[derive(Debug, Clone, Copy)]
pub struct CopyOps<'a> {
    path: &'a Path,
}

impl CopyOps<'_> {
    /// Copy another managed file over this one.
    ///
    /// Copying a file onto itself leaves it untouched and succeeds.
    pub fn file(&self, source: &FileManager) -> bool {
        if same_file(source.path(), self.path) {
            tracing::debug!("Skipping copy of {} onto itself", self.path.display());
            return true;
        }
        report(self.path, "copy", fs::copy(source.path(), self.path).map(drop))
    }

    pub fn bytes(&self, source: &[u8]) -> bool {
        report(self.path, "copy", fs::write(self.path, source))
    }

    /// Encode `source` with `charset` and store it.
    pub fn text(&self, source: &str, charset: Charset) -> bool {
        self.bytes(&charset.encode(source))
    }

    /// Drain a reader into the file.
    pub fn reader(&self, mut source: impl Read) -> bool {
        let copied = File::create(self.path).and_then(|mut file| io::copy(&mut source, &mut file));
        report(self.path, "copy", copied.map(drop))
    }
}

/// Append to the end of an existing file.
#[derive(Debug, Clone, Copy)]
pub struct WriteOps<'a> {
    path: &'a Path,
}

impl WriteOps<'_> {
    /// Append raw bytes. Returns `false` if the file does not exist.
    pub fn bytes(&self, data: &[u8]) -> bool {
        let appended = OpenOptions::new()
            .append(true)
            .open(self.path)
            .and_then(|mut file| file.write_all(data));
        report(self.path, "append to", appended)
    }

    /// Append text encoded with `charset`.
    pub fn text(&self, data: &str, charset: Charset) -> bool {
        self.bytes(&charset.encode(data))
    }
}

/// Read the whole file.
#[derive(Debug, Clone, Copy)]
pub struct ReadOps<'a> {
    path: &'a Path,
}

impl ReadOps<'_> {
    /// Decode the file with `charset`; empty on any failure.
    pub fn text(&self, charset: Charset) -> String {
        charset.decode(&self.bytes())
    }

    /// Raw file contents; empty on any failure.
    pub fn bytes(&self) -> Vec<u8> {
        fs::read(self.path).unwrap_or_else(|e| {
            tracing::debug!("Failed to read {}: {}", self.path.display(), e);
            Vec::new()
        })
    }
}

fn relative_name(file_name: &str) -> PathBuf {
    Path::new(file_name)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect()
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn report(path: &Path, action: &str, outcome: io::Result<()>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("Failed to {} {}: {}", action, path.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scratch(tmp: &TempDir, name: &str) -> FileManager {
        FileManager::new(tmp.path().join("data"), name)
    }

    #[test]
    fn test_path_is_dir_plus_name() {
        let file = FileManager::new("config", "app.yml");
        assert_eq!(file.path(), Path::new("config/app.yml"));
        assert_eq!(file.file_name(), "app.yml");
        assert_eq!(file.folder().path(), Path::new("config"));
    }

    #[test]
    fn test_from_path_splits() {
        let file = FileManager::from_path("settings/net/server.yml");
        assert_eq!(file.folder().path(), Path::new("settings/net"));
        assert_eq!(file.file_name(), "server.yml");

        let bare = FileManager::from_path("server.yml");
        assert_eq!(bare.folder().path(), Path::new(""));
        assert_eq!(bare.path(), Path::new("server.yml"));
    }

    #[test]
    fn test_create_file_once() {
        let tmp = TempDir::new().unwrap();
        let file = scratch(&tmp, "new.txt");

        assert!(!file.exists());
        assert!(file.create_file());
        assert!(file.exists());
        assert!(tmp.path().join("data").is_dir());

        // Second attempt on the same path reports failure
        assert!(!file.create_file());
    }

    #[test]
    fn test_delete_file() {
        let tmp = TempDir::new().unwrap();
        let file = scratch(&tmp, "gone.txt");

        assert!(!file.delete_file());
        assert!(file.create_file());
        assert!(file.delete_file());
        assert!(!file.exists());
        assert!(!file.delete_file());
    }

    #[test]
    fn test_write_appends() {
        let tmp = TempDir::new().unwrap();
        let file = scratch(&tmp, "log.txt");

        assert!(file.create_file());
        assert!(file.write().text("ab", Charset::Utf8));
        assert!(file.write().text("cd", Charset::Utf8));
        assert!(file.write().bytes(b"ef"));

        assert_eq!(file.read().text(Charset::Utf8), "abcdef");
    }

    #[test]
    fn test_write_requires_existing_file() {
        let tmp = TempDir::new().unwrap();
        let file = scratch(&tmp, "absent.txt");

        assert!(!file.write().bytes(b"data"));
        assert!(!file.exists());
    }

    #[test]
    fn test_copy_bytes_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let file = scratch(&tmp, "blob.bin");
        assert!(file.folder().create_dir());

        let payload = [0u8, 159, 146, 150, 255, 10];
        assert!(file.copy().bytes(&payload));
        assert_eq!(file.read().bytes(), payload);
    }

    #[test]
    fn test_copy_truncates_existing() {
        let tmp = TempDir::new().unwrap();
        let file = scratch(&tmp, "short.txt");
        assert!(file.create_file());

        assert!(file.copy().text("a much longer body", Charset::Utf8));
        assert!(file.copy().text("tiny", Charset::Utf8));
        assert_eq!(file.read().text(Charset::Utf8), "tiny");
    }

    #[test]
    fn test_copy_text_with_charset() {
        let tmp = TempDir::new().unwrap();
        let file = scratch(&tmp, "wide.txt");
        assert!(file.folder().create_dir());

        assert!(file.copy().text("hé", Charset::Utf16Le));
        assert_eq!(file.read().bytes(), vec![b'h', 0x00, 0xE9, 0x00]);
        assert_eq!(file.read().text(Charset::Utf16Le), "hé");
    }

    #[test]
    fn test_copy_from_file_and_reader() {
        let tmp = TempDir::new().unwrap();
        let source = scratch(&tmp, "source.txt");
        let target = scratch(&tmp, "target.txt");
        assert!(source.create_file());
        assert!(source.write().text("shared", Charset::Utf8));

        assert!(target.copy().file(&source));
        assert_eq!(target.read().text(Charset::Utf8), "shared");

        assert!(target.copy().reader(&b"streamed"[..]));
        assert_eq!(target.read().text(Charset::Utf8), "streamed");
    }

    #[test]
    fn test_copy_onto_itself_keeps_contents() {
        let tmp = TempDir::new().unwrap();
        let file = scratch(&tmp, "same.txt");
        let alias = FileManager::new(tmp.path().join("data").join("..").join("data"), "same.txt");
        assert!(file.create_file());
        assert!(file.write().text("keep me", Charset::Utf8));

        assert!(file.copy().file(&alias));
        assert!(file.copy().file(&file));
        assert_eq!(file.read().text(Charset::Utf8), "keep me");
    }

    #[test]
    fn test_absolute_name_stays_in_folder() {
        let tmp = TempDir::new().unwrap();
        let outside = tmp.path().join("outside.txt");
        let file = FileManager::new(tmp.path().join("data"), &outside.to_string_lossy());

        assert!(file.path().starts_with(tmp.path().join("data")));
        assert!(file.create_file());
        assert!(!outside.exists());
        assert!(Path::new(file.file_name()).is_relative());
    }

    #[test]
    fn test_copy_from_missing_file_fails() {
        let tmp = TempDir::new().unwrap();
        let source = scratch(&tmp, "nope.txt");
        let target = scratch(&tmp, "target.txt");
        assert!(target.create_file());

        assert!(!target.copy().file(&source));
    }

    #[test]
    fn test_read_missing_is_empty() {
        let tmp = TempDir::new().unwrap();
        let file = scratch(&tmp, "missing.txt");

        assert_eq!(file.read().text(Charset::Utf8), "");
        assert!(file.read().bytes().is_empty());
    }
}
