//! Task hierarchy normalization
//!
//! Turns the flat `task id → (parent id, title)` table of a course into
//! `task id → qualified name`. Parent chains are walked iteratively with a
//! memo table, so every id is resolved exactly once and deep hierarchies
//! never grow the call stack.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::core::models::QualifiedName;

/// Fatal hierarchy errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    /// A task is its own transitive ancestor
    #[error("task #{task_id} is its own ancestor")]
    Cycle {
        /// A task on the cycle
        task_id: String,
    },
}

/// One row of the hierarchy table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyEntry {
    /// Parent task id; `None` for a root
    pub parent_id: Option<String>,
    /// Untrimmed title
    pub title: String,
}

impl HierarchyEntry {
    /// Create a new entry
    #[must_use]
    pub fn new(parent_id: Option<&str>, title: &str) -> Self {
        Self {
            parent_id: parent_id.map(String::from),
            title: title.to_string(),
        }
    }
}

/// Resolved names of a course
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    names: HashMap<String, QualifiedName>,
    orphans: Vec<(String, String)>,
}

impl Hierarchy {
    /// Qualified name of a task
    #[must_use]
    pub fn name(&self, task_id: &str) -> Option<&QualifiedName> {
        self.names.get(task_id)
    }

    /// Number of resolved tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no task was resolved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Tasks left out because an ancestor is missing, as `(task id, missing parent id)`
    #[must_use]
    pub fn orphans(&self) -> &[(String, String)] {
        &self.orphans
    }
}

enum Outcome {
    Resolved,
    Orphan(String),
}

/// Resolve the qualified name of every task in `entries`
///
/// Tasks whose parent chain reaches an id missing from `entries` are
/// reported in [`Hierarchy::orphans`] instead of being named.
pub fn normalize(entries: &HashMap<String, HierarchyEntry>) -> Result<Hierarchy, HierarchyError> {
    let mut hierarchy = Hierarchy::default();
    let mut orphaned: HashMap<String, String> = HashMap::new();

    let mut ids: Vec<&String> = entries.keys().collect();
    ids.sort();

    for id in ids {
        if hierarchy.names.contains_key(id) || orphaned.contains_key(id) {
            continue;
        }

        // Walk up until a root, a memoized ancestor or a dead end.
        let mut chain: Vec<&str> = Vec::new();
        let mut on_chain: HashSet<&str> = HashSet::new();
        let mut current: &str = id;

        let outcome = loop {
            if hierarchy.names.contains_key(current) {
                break Outcome::Resolved;
            }
            if let Some(missing) = orphaned.get(current) {
                break Outcome::Orphan(missing.clone());
            }
            let Some(entry) = entries.get(current) else {
                break Outcome::Orphan(current.to_string());
            };
            if !on_chain.insert(current) {
                return Err(HierarchyError::Cycle {
                    task_id: current.to_string(),
                });
            }
            chain.push(current);

            match entry.parent_id.as_deref() {
                Some(parent) => current = parent,
                None => break Outcome::Resolved,
            }
        };

        // Name the chain top-down.
        match outcome {
            Outcome::Resolved => {
                for task_id in chain.into_iter().rev() {
                    let entry = &entries[task_id];
                    let name = match entry.parent_id.as_deref() {
                        Some(parent) => hierarchy.names[parent].child(&entry.title),
                        None => QualifiedName::root(&entry.title),
                    };
                    hierarchy.names.insert(task_id.to_string(), name);
                }
            },
            Outcome::Orphan(missing) => {
                for task_id in chain {
                    orphaned.insert(task_id.to_string(), missing.clone());
                }
            },
        }
    }

    let mut orphans: Vec<(String, String)> = orphaned.into_iter().collect();
    orphans.sort();
    hierarchy.orphans = orphans;

    Ok(hierarchy)
}
