//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real I/O operations.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::bail;
use coursesync::core::ports::{FetchSource, LinkPrompt, LinkStore, VcsError, VersionControl};

/// In-memory implementation of LinkStore
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    pub links: BTreeMap<String, String>,
    pub relocations: BTreeMap<String, String>,
    /// Make every mutation fail
    pub read_only: bool,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link(mut self, review_id: &str, path: &str) -> Self {
        self.links.insert(review_id.to_string(), path.to_string());
        self
    }

    pub fn with_relocation(mut self, account: &str, effective: &str) -> Self {
        self.relocations.insert(account.to_string(), effective.to_string());
        self
    }
}

impl LinkStore for MemoryLinkStore {
    fn link(&self, review_id: &str) -> Option<String> {
        self.links.get(review_id).cloned()
    }

    fn links(&self) -> Vec<(String, String)> {
        self.links.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn add_link(&mut self, review_id: &str, path: &str) -> anyhow::Result<()> {
        if self.read_only {
            bail!("store is read-only");
        }
        self.links.insert(review_id.to_string(), path.to_string());
        Ok(())
    }

    fn remove_link(&mut self, review_id: &str) -> anyhow::Result<bool> {
        if self.read_only {
            bail!("store is read-only");
        }
        Ok(self.links.remove(review_id).is_some())
    }

    fn relocation(&self, account: &str) -> Option<String> {
        self.relocations.get(account).cloned()
    }

    fn relocations(&self) -> Vec<(String, String)> {
        self.relocations.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn add_relocation(&mut self, account: &str, effective: &str) -> anyhow::Result<()> {
        if self.read_only {
            bail!("store is read-only");
        }
        self.relocations.insert(account.to_string(), effective.to_string());
        Ok(())
    }

    fn remove_relocation(&mut self, account: &str) -> anyhow::Result<bool> {
        if self.read_only {
            bail!("store is read-only");
        }
        Ok(self.relocations.remove(account).is_some())
    }
}

/// Version control mock recording every checkout
///
/// A successful checkout creates the destination, a `content` file and
/// records the revision as the working copy revision.
#[derive(Debug, Default)]
pub struct RecordingVcs {
    pub checkouts: RefCell<Vec<(FetchSource, PathBuf)>>,
    /// Accounts whose checkout fails
    pub failing: Vec<String>,
    /// Working copy revisions by path
    pub revisions: RefCell<HashMap<PathBuf, String>>,
    /// Make `working_revision` fail
    pub broken_info: bool,
}

impl RecordingVcs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(account: &str) -> Self {
        Self {
            failing: vec![account.to_string()],
            ..Self::default()
        }
    }

    pub fn checkout_count(&self) -> usize {
        self.checkouts.borrow().len()
    }

    pub fn destinations(&self) -> Vec<PathBuf> {
        self.checkouts.borrow().iter().map(|(_, d)| d.clone()).collect()
    }

    pub fn set_revision(&self, path: &Path, revision: &str) {
        self.revisions.borrow_mut().insert(path.to_path_buf(), revision.to_string());
    }
}

impl VersionControl for RecordingVcs {
    fn checkout(&self, source: &FetchSource, destination: &Path) -> Result<(), VcsError> {
        self.checkouts.borrow_mut().push((source.clone(), destination.to_path_buf()));

        if self.failing.contains(&source.account) {
            return Err(VcsError::ExitStatus {
                program: "svn".to_string(),
                code: Some(1),
            });
        }

        fs::create_dir_all(destination).map_err(|e| VcsError::Output(e.to_string()))?;
        fs::write(destination.join("content"), &source.path).map_err(|e| VcsError::Output(e.to_string()))?;
        let revision = source.revision.clone().unwrap_or_else(|| "HEAD".to_string());
        self.set_revision(destination, &revision);
        Ok(())
    }

    fn working_revision(&self, path: &Path) -> Result<String, VcsError> {
        if self.broken_info {
            return Err(VcsError::Output("no entry element".to_string()));
        }
        self.revisions
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| VcsError::Output(format!("'{}' is not a working copy", path.display())))
    }
}

/// Link prompt answering from a script
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pub answers: VecDeque<Option<String>>,
    /// Every question asked: task name and candidates
    pub asked: Vec<(String, Vec<String>)>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[Option<&str>]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.map(String::from)).collect(),
            asked: Vec::new(),
        }
    }
}

impl LinkPrompt for ScriptedPrompt {
    fn choose(&mut self, task: &str, candidates: &[String]) -> Option<String> {
        self.asked.push((task.to_string(), candidates.to_vec()));
        self.answers.pop_front().flatten()
    }
}
