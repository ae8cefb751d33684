//! In-memory course data model
//!
//! Holds every student, task and submission loaded in one run. Built by
//! [`crate::core::services::ModelBuilder`]; read-only afterwards.

use std::cmp::Ordering;
use std::rc::Rc;

use super::{Student, Submission, Task};

/// All entities loaded for one run
#[derive(Debug, Default)]
pub struct CourseModel {
    pub(crate) students: Vec<Rc<Student>>,
    pub(crate) tasks: Vec<(String, Rc<Task>)>,
    pub(crate) submissions: Vec<Submission>,
}

impl CourseModel {
    /// Students in order of first appearance
    #[must_use]
    pub fn students(&self) -> &[Rc<Student>] {
        &self.students
    }

    /// Students ordered by display name, then account
    #[must_use]
    pub fn students_by_name(&self) -> Vec<Rc<Student>> {
        let mut students = self.students.clone();
        students.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.account.cmp(&b.account)));
        students
    }

    /// Distinct tasks in order of first appearance
    pub fn tasks(&self) -> impl Iterator<Item = &Rc<Task>> {
        self.tasks.iter().map(|(_, task)| task)
    }

    /// Distinct qualified task names ordered by task id
    ///
    /// Ids that look like numbers are compared numerically.
    #[must_use]
    pub fn task_names(&self) -> Vec<String> {
        let mut ordered: Vec<&(String, Rc<Task>)> = self.tasks.iter().collect();
        ordered.sort_by(|a, b| compare_ids(&a.0, &b.0));

        let mut names: Vec<String> = Vec::with_capacity(ordered.len());
        for (_, task) in ordered {
            let name = task.name.to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Submissions in delivery order (course, task, student)
    #[must_use]
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Whether nothing was loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty() && self.tasks.is_empty()
    }
}

fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
