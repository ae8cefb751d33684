//! Task model
//!
//! Tasks form a hierarchy on the course service (homework → problem).
//! Locally a task is identified by its [`QualifiedName`]: the trimmed
//! titles on the path from the hierarchy root down to the task.

use std::path::{MAIN_SEPARATOR, PathBuf};

use serde::{Serialize, Serializer};

/// Ordered sequence of trimmed titles from root to leaf
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    segments: Vec<String>,
}

impl QualifiedName {
    /// Name of a root task
    #[must_use]
    pub fn root(title: &str) -> Self {
        Self {
            segments: vec![title.trim().to_string()],
        }
    }

    /// Name of a child task under `self`
    #[must_use]
    pub fn child(&self, title: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(title.trim().to_string());
        Self { segments }
    }

    /// Title segments, root first
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Relative filesystem path built from the segments
    #[must_use]
    pub fn to_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut separator = String::new();
        separator.push(MAIN_SEPARATOR);
        f.write_str(&self.segments.join(&separator))
    }
}

impl Serialize for QualifiedName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A task of a course
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Task {
    /// Course the task belongs to
    pub course_id: String,

    /// Task title, trimmed
    pub title: String,

    /// Full hierarchical name, unique within the course
    pub name: QualifiedName,
}

impl Task {
    /// Create a new task
    #[must_use]
    pub fn new(course_id: impl Into<String>, title: &str, name: QualifiedName) -> Self {
        Self {
            course_id: course_id.into(),
            title: title.trim().to_string(),
            name,
        }
    }
}
