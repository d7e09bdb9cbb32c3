//! Host store primitives
//!
//! A [`HostStore`] is the show-control surface's key/value state as seen from
//! the patchbay: `get` reads a UI value, `set` publishes one slot's labels.
//! Two stores are provided:
//! - [`MemoryStore`]: in-process, records every write (tests, embedding)
//! - [`YamlStore`]: file-backed, for running the handler standalone

use crate::error::HostError;
use patchbay_core::SourceLabel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Host key/value primitives the adapter relies on
pub trait HostStore {
    /// Read a host value by key
    fn get(&self, key: &str) -> Option<String>;

    /// Publish a label list at a patchbay path
    fn set(&mut self, path: &str, labels: &[SourceLabel]) -> Result<(), HostError>;
}

/// In-memory host store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
    patchbay: BTreeMap<String, Vec<SourceLabel>>,
    /// Paths written, in call order
    writes: Vec<String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a host value (e.g. the selected preset)
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Labels last published at `path`
    pub fn published(&self, path: &str) -> Option<&[SourceLabel]> {
        self.patchbay.get(path).map(Vec::as_slice)
    }

    /// Every path written so far, in call order
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// Forget recorded writes (published values are kept)
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl HostStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, path: &str, labels: &[SourceLabel]) -> Result<(), HostError> {
        self.writes.push(path.to_string());
        self.patchbay.insert(path.to_string(), labels.to_vec());
        Ok(())
    }
}

/// On-disk layout of a [`YamlStore`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreDocument {
    /// Host UI values (preset selector etc.)
    pub values: BTreeMap<String, String>,
    /// Published patchbay paths
    pub patchbay: BTreeMap<String, Vec<SourceLabel>>,
}

/// File-backed host store
///
/// Writes are held in memory until [`YamlStore::flush`].
#[derive(Debug)]
pub struct YamlStore {
    path: PathBuf,
    document: StoreDocument,
}

impl YamlStore {
    /// Open a store file, starting empty if it doesn't exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, HostError> {
        let path = path.into();

        let document = if path.exists() {
            let contents =
                std::fs::read_to_string(&path).map_err(|e| HostError::io(&path, e))?;
            serde_yaml::from_str(&contents)?
        } else {
            log::info!("YamlStore: {:?} doesn't exist, starting empty", path);
            StoreDocument::default()
        };

        Ok(Self { path, document })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current in-memory contents
    pub fn document(&self) -> &StoreDocument {
        &self.document
    }

    /// Set a host value (e.g. the selected preset)
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.document.values.insert(key.into(), value.into());
    }

    /// Write the document to disk, creating parent directories
    pub fn flush(&self) -> Result<(), HostError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| HostError::io(parent, e))?;
        }

        let yaml = serde_yaml::to_string(&self.document)?;
        std::fs::write(&self.path, yaml).map_err(|e| HostError::io(&self.path, e))?;

        log::debug!("YamlStore: flushed {:?}", self.path);
        Ok(())
    }
}

impl HostStore for YamlStore {
    fn get(&self, key: &str) -> Option<String> {
        self.document.values.get(key).cloned()
    }

    fn set(&mut self, path: &str, labels: &[SourceLabel]) -> Result<(), HostError> {
        self.document
            .patchbay
            .insert(path.to_string(), labels.to_vec());
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::collections::HashSet;

    /// Store wrapper that refuses writes to a fixed set of paths
    pub(crate) struct RefusingStore<S> {
        inner: S,
        read_only: HashSet<String>,
    }

    impl<S: HostStore> RefusingStore<S> {
        pub(crate) fn new<'a>(inner: S, read_only: impl IntoIterator<Item = &'a str>) -> Self {
            Self {
                inner,
                read_only: read_only.into_iter().map(str::to_string).collect(),
            }
        }

        pub(crate) fn inner(&self) -> &S {
            &self.inner
        }

        pub(crate) fn inner_mut(&mut self) -> &mut S {
            &mut self.inner
        }

        pub(crate) fn make_read_only(&mut self, path: &str) {
            self.read_only.insert(path.to_string());
        }
    }

    impl<S: HostStore> HostStore for RefusingStore<S> {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, path: &str, labels: &[SourceLabel]) -> Result<(), HostError> {
            if self.read_only.contains(path) {
                return Err(HostError::rejected(path, "path is read-only"));
            }
            self.inner.set(path, labels)
        }
    }
}
