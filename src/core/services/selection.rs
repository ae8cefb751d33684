//! Submission selection
//!
//! A run can be narrowed by course, task and student. Each filter is an
//! allow-list: empty admits everything, otherwise at least one of the
//! submission's values for that dimension must appear in it. The ignore
//! list works the other way round and applies to all dimensions at once.

use crate::core::models::Submission;

/// Filters applied before resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Course ids
    pub courses: Vec<String>,
    /// Qualified task names or task titles
    pub tasks: Vec<String>,
    /// Student display names or accounts
    pub students: Vec<String>,
    /// Values that exclude a submission wherever they match
    pub ignore: Vec<String>,
}

impl Selection {
    /// Whether the submission takes part in the run
    #[must_use]
    pub fn admits(&self, submission: &Submission) -> bool {
        let task = &submission.task;
        let student = &submission.student;
        let task_name = task.name.to_string();

        let course = [task.course_id.as_str()];
        let tasks = [task_name.as_str(), task.title.as_str()];
        let students = [student.name.as_str(), student.account.as_str()];

        selected(&self.courses, &course)
            && selected(&self.tasks, &tasks)
            && selected(&self.students, &students)
            && !self.ignored(&[&course[..], &tasks[..], &students[..]].concat())
    }

    fn ignored(&self, values: &[&str]) -> bool {
        !self.ignore.is_empty() && intersects(&self.ignore, values)
    }
}

/// Allow-list test: empty filter admits all, otherwise the values must meet it
#[must_use]
pub fn selected(filter: &[String], values: &[&str]) -> bool {
    filter.is_empty() || intersects(filter, values)
}

fn intersects(filter: &[String], values: &[&str]) -> bool {
    values.iter().any(|v| filter.iter().any(|f| f == v))
}
