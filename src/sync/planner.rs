//! Destination planning
//!
//! Every submission gets its own directory,
//! `{root}/{qualified task name}/{student}`. A bulk fetch of a whole
//! repository goes to `{root}/{unsorted}/{student}` instead.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::{QualifiedName, Submission};

/// The destination directory could not be created
#[derive(Debug, Error)]
#[error("cannot create directory '{}': {source}", .path.display())]
pub struct PlanError {
    /// Directory that could not be created
    pub path: PathBuf,
    /// Underlying I/O error
    pub source: std::io::Error,
}

/// Computes and creates checkout directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planner {
    root: PathBuf,
    unsorted: String,
}

impl Planner {
    /// Create a planner for a course root and unsorted bucket name
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, unsorted: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            unsorted: unsorted.into(),
        }
    }

    /// Local root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Destination of a submission, without touching the filesystem
    #[must_use]
    pub fn destination(&self, submission: &Submission, bulk: bool) -> PathBuf {
        if bulk {
            self.bulk_destination(&submission.student.name)
        } else {
            self.task_destination(&submission.task.name, &submission.student.name)
        }
    }

    /// `{root}/{task}/{student}`
    #[must_use]
    pub fn task_destination(&self, task: &QualifiedName, student: &str) -> PathBuf {
        self.root.join(task.to_path()).join(student)
    }

    /// `{root}/{unsorted}/{student}`
    #[must_use]
    pub fn bulk_destination(&self, student: &str) -> PathBuf {
        self.root.join(&self.unsorted).join(student)
    }

    /// Destination of a submission, created with its parents if absent
    pub fn prepare(&self, submission: &Submission, bulk: bool) -> Result<PathBuf, PlanError> {
        let path = self.destination(submission, bulk);
        if !path.is_dir() {
            fs::create_dir_all(&path).map_err(|source| PlanError {
                path: path.clone(),
                source,
            })?;
        }
        Ok(path)
    }
}
