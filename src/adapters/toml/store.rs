//! TOML-backed link store
//!
//! Implements the `LinkStore` port trait on top of the `[links]` and
//! `[relocations]` sections of the configuration file.

use std::path::{Path, PathBuf};

use log::info;

use crate::config::ConfigFile;
use crate::core::ports::LinkStore;

/// Link store persisted in the configuration file
///
/// Every mutation rewrites the file before it returns. When the write
/// fails the in-memory state is left untouched.
#[derive(Debug, Clone)]
pub struct TomlLinkStore {
    /// Configuration file path
    path: PathBuf,
    /// Current file content
    file: ConfigFile,
}

impl TomlLinkStore {
    /// Create a store over an already loaded configuration file
    #[must_use]
    pub const fn new(path: PathBuf, file: ConfigFile) -> Self {
        Self { path, file }
    }

    /// Load the store from `path`
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let file = ConfigFile::load(path)?;
        Ok(Self::new(path.to_path_buf(), file))
    }

    /// Configuration file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current configuration content
    #[must_use]
    pub const fn config(&self) -> &ConfigFile {
        &self.file
    }

    fn commit(&mut self, update: impl FnOnce(&mut ConfigFile) -> bool) -> anyhow::Result<bool> {
        let mut next = self.file.clone();
        if !update(&mut next) {
            return Ok(false);
        }
        next.save(&self.path)?;
        self.file = next;
        Ok(true)
    }
}

impl LinkStore for TomlLinkStore {
    fn link(&self, review_id: &str) -> Option<String> {
        self.file.links.get(review_id).cloned()
    }

    fn links(&self) -> Vec<(String, String)> {
        self.file.links.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn add_link(&mut self, review_id: &str, path: &str) -> anyhow::Result<()> {
        self.commit(|file| {
            file.links.insert(review_id.to_string(), path.to_string());
            true
        })?;
        info!("Link #{review_id} to '{path}' added");
        Ok(())
    }

    fn remove_link(&mut self, review_id: &str) -> anyhow::Result<bool> {
        self.commit(|file| file.links.remove(review_id).is_some())
    }

    fn relocation(&self, account: &str) -> Option<String> {
        self.file.relocations.get(account).cloned()
    }

    fn relocations(&self) -> Vec<(String, String)> {
        self.file.relocations.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn add_relocation(&mut self, account: &str, effective: &str) -> anyhow::Result<()> {
        self.commit(|file| {
            file.relocations.insert(account.to_string(), effective.to_string());
            true
        })?;
        info!("Account '{account}' relocated to '{effective}'");
        Ok(())
    }

    fn remove_relocation(&mut self, account: &str) -> anyhow::Result<bool> {
        self.commit(|file| file.relocations.remove(account).is_some())
    }
}
