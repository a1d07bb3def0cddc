//! YAML load and dump bound to a target type.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::charset::Charset;
use crate::error::{Error, Result};
use crate::fs::{FileManager, ResourceLoader};

/// Parses YAML into `T` and serializes `T` back to block-style YAML.
///
/// With the default `T = serde_yaml::Value` the manager works on untyped
/// mappings. A manager built with [`with_loader`](Self::with_loader) can also
/// load resources by name.
pub struct YamlManager<T = serde_yaml::Value> {
    loader: Option<Arc<dyn ResourceLoader + Send + Sync>>,
    target: PhantomData<fn() -> T>,
}

impl<T> YamlManager<T> {
    pub fn new() -> Self {
        Self {
            loader: None,
            target: PhantomData,
        }
    }

    /// Bind a loader used by [`load_resource`](Self::load_resource).
    pub fn with_loader(loader: impl ResourceLoader + Send + Sync + 'static) -> Self {
        Self {
            loader: Some(Arc::new(loader)),
            target: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> YamlManager<T> {
    /// Parse YAML text into the target type.
    pub fn load_str(&self, source: &str) -> Result<T> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Read the file as UTF-8 and parse it.
    ///
    /// An unreadable file is parsed as empty text.
    pub fn load_file(&self, file: &FileManager) -> Result<T> {
        self.load_str(&file.read().text(Charset::Utf8))
    }

    /// Resolve `dir` through the bound loader and parse `file_name` inside it.
    pub fn load_resource(&self, dir: &str, file_name: &str) -> Result<T> {
        let loader = self.loader.as_deref().ok_or_else(|| {
            Error::ResourceNotFound(format!("{}/{} (no resource loader bound)", dir, file_name))
        })?;
        let file = FileManager::from_resource(loader, dir, file_name)?;
        self.load_file(&file)
    }
}

impl<T: Serialize> YamlManager<T> {
    /// Serialize as block-style YAML without type tags.
    pub fn dump(&self, value: &T) -> Result<String> {
        Ok(serde_yaml::to_string(value)?)
    }
}

impl<T> Default for YamlManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for YamlManager<T> {
    fn clone(&self) -> Self {
        Self {
            loader: self.loader.clone(),
            target: PhantomData,
        }
    }
}

impl<T> fmt::Debug for YamlManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YamlManager")
            .field("target", &std::any::type_name::<T>())
            .field("has_loader", &self.loader.is_some())
            .finish()
    }
}
