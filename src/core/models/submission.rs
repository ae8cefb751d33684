//! Submission model
//!
//! A submission is one student's attempt at one task. When the course
//! service has VCS information for it, the submission carries a
//! [`Location`] describing where it lives in the student's repository.

use std::rc::Rc;

use super::{Student, Task};

/// Where a submission lives in the student's repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path relative to the student's repository root; empty when the
    /// service only knows the review id
    pub path: String,

    /// Code review identifier, used as the key for remembered links
    pub review_id: String,

    /// Revision to fetch; `None` means the latest one
    pub revision: Option<String>,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(path: impl Into<String>, review_id: impl Into<String>, revision: Option<String>) -> Self {
        Self {
            path: path.into(),
            review_id: review_id.into(),
            revision,
        }
    }

    /// Whether the service reported a usable path
    ///
    /// A path of only whitespace counts as no path: such a submission is
    /// resolved through its review id like an empty one.
    #[must_use]
    pub fn has_path(&self) -> bool {
        !self.path.trim().is_empty()
    }
}

/// A student's attempt at a task
#[derive(Debug, Clone)]
pub struct Submission {
    /// The task
    pub task: Rc<Task>,

    /// The student
    pub student: Rc<Student>,

    /// VCS location; `None` when nothing was submitted
    pub location: Option<Location>,
}

impl Submission {
    /// Create a new submission
    #[must_use]
    pub const fn new(task: Rc<Task>, student: Rc<Student>, location: Option<Location>) -> Self {
        Self {
            task,
            student,
            location,
        }
    }
}
