//! Course data model builder
//!
//! Feeds each raw course through validation and hierarchy normalization,
//! then assembles the entity graph. Problems stay local: an invalid record
//! is skipped, a course with a cyclic hierarchy is skipped, and everything
//! else is kept.

use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, error, info, log};
use serde_json::Value;

use crate::core::models::{CourseModel, Location, QualifiedName, Student, Submission, Task};
use crate::core::ports::LinkStore;

use super::hierarchy::{HierarchyEntry, normalize};
use super::validator::{RawLocation, ValidatedCourse, validate_course};

/// Incremental builder of a [`CourseModel`]
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: CourseModel,
    students: HashMap<String, Rc<Student>>,
    tasks: HashMap<(String, QualifiedName), Rc<Task>>,
}

impl ModelBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one course from its raw JSON
    ///
    /// Returns `false` when the whole course had to be skipped.
    pub fn add_course(&mut self, course_id: &str, data: &Value, relocations: &dyn LinkStore) -> bool {
        info!("Processing course #{course_id}");

        let validated = validate_course(course_id, data);
        for issue in &validated.issues {
            log!(issue.level, "{}", issue.message);
        }

        self.add_validated(course_id, &validated, relocations)
    }

    /// Add one already validated course
    pub fn add_validated(
        &mut self,
        course_id: &str,
        course: &ValidatedCourse,
        relocations: &dyn LinkStore,
    ) -> bool {
        let entries: HashMap<String, HierarchyEntry> = course
            .tasks
            .iter()
            .map(|t| (t.id.clone(), HierarchyEntry::new(t.parent_id.as_deref(), &t.title)))
            .collect();

        let hierarchy = match normalize(&entries) {
            Ok(hierarchy) => hierarchy,
            Err(e) => {
                error!("Course #{course_id} skipped: {e}");
                return false;
            },
        };

        for (task_id, missing) in hierarchy.orphans() {
            error!("Course #{course_id}: task #{task_id} skipped, parent #{missing} not found");
        }

        for raw in &course.tasks {
            let Some(name) = hierarchy.name(&raw.id) else {
                continue;
            };
            let task = self.task(course_id, &raw.id, &raw.title, name);
            debug!("Processing task '{}'", task.name);

            for raw_student in &raw.students {
                let student = self.student(&raw_student.name, &raw_student.account, relocations);
                let location = raw_student.svn.as_ref().map(location);
                self.model
                    .submissions
                    .push(Submission::new(Rc::clone(&task), student, location));
            }
        }

        info!("Processing course #{course_id} complete");
        true
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> CourseModel {
        info!(
            "{} tasks, {} students, {} submissions loaded",
            self.model.tasks.len(),
            self.model.students.len(),
            self.model.submissions.len()
        );
        self.model
    }

    fn task(&mut self, course_id: &str, task_id: &str, title: &str, name: &QualifiedName) -> Rc<Task> {
        let key = (course_id.to_string(), name.clone());
        if let Some(task) = self.tasks.get(&key) {
            return Rc::clone(task);
        }

        let task = Rc::new(Task::new(course_id, title, name.clone()));
        self.tasks.insert(key, Rc::clone(&task));
        self.model.tasks.push((task_id.to_string(), Rc::clone(&task)));
        task
    }

    fn student(&mut self, name: &str, reported: &str, relocations: &dyn LinkStore) -> Rc<Student> {
        let account = relocations.effective_account(reported);
        if account != reported {
            debug!("Account '{reported}' relocated to '{account}'");
        }

        if let Some(student) = self.students.get(&account) {
            return Rc::clone(student);
        }

        let student = Rc::new(Student::new(name, account.clone()));
        self.students.insert(account, Rc::clone(&student));
        self.model.students.push(Rc::clone(&student));
        student
    }
}

fn location(raw: &RawLocation) -> Location {
    Location::new(raw.path.clone(), raw.review_id.clone(), raw.revision.clone())
}

/// Build a model from `(course id, raw JSON)` pairs, in order
#[must_use]
pub fn build_model(courses: &[(String, Value)], relocations: &dyn LinkStore) -> CourseModel {
    let mut builder = ModelBuilder::new();
    for (course_id, data) in courses {
        builder.add_course(course_id, data, relocations);
    }
    builder.build()
}
