//! Raw course data validation
//!
//! The course service is only partially trustworthy: records may lack
//! fields or carry ids as numbers in one place and strings in another.
//! Validation keeps every record that can still be used, defaults what can
//! be defaulted and reports the rest. A single malformed record never costs
//! the whole course.

use std::path::{Component, Path};

use log::Level;
use serde_json::{Map, Value};

const TASKS: &str = "tasks";
const TASK_ID: &str = "task_id";
const TASK_PARENT: &str = "parent_task_id";
const TASK_TITLE: &str = "title";
const STUDENTS: &str = "students";
const STUDENT_ACCOUNT: &str = "username";
const STUDENT_NAME: &str = "user_name";
const SVN: &str = "svn";
const SVN_PATH: &str = "svn_path";
const SVN_REVIEW: &str = "rb_review_id";
const SVN_REVISION: &str = "svn_rev";

/// A problem found while validating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// `Error` for dropped records, `Warn` for defaulted fields
    pub level: Level,
    /// Human-readable description
    pub message: String,
}

impl Issue {
    fn error(message: String) -> Self {
        Self {
            level: Level::Error,
            message,
        }
    }

    fn warn(message: String) -> Self {
        Self {
            level: Level::Warn,
            message,
        }
    }
}

/// VCS block of a student record, after defaulting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLocation {
    /// Repository-relative path, empty when missing
    pub path: String,
    /// Review id, empty when missing
    pub review_id: String,
    /// Revision, `None` when missing
    pub revision: Option<String>,
}

/// A structurally valid student record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStudent {
    /// Reported account
    pub account: String,
    /// Display name
    pub name: String,
    /// VCS block; `None` means no submission
    pub svn: Option<RawLocation>,
}

/// A structurally valid task record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTask {
    /// Task id
    pub id: String,
    /// Parent task id; `None` for a root
    pub parent_id: Option<String>,
    /// Untrimmed title
    pub title: String,
    /// Valid students of the task
    pub students: Vec<RawStudent>,
}

/// Result of validating one course
#[derive(Debug, Clone, Default)]
pub struct ValidatedCourse {
    /// Valid tasks, in delivery order
    pub tasks: Vec<RawTask>,
    /// Issues, in the order they were found
    pub issues: Vec<Issue>,
}

impl ValidatedCourse {
    /// Messages of the issues that dropped a record
    #[must_use]
    pub fn errors(&self) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|i| i.level == Level::Error)
            .map(|i| i.message.as_str())
            .collect()
    }

    /// Messages of the issues that defaulted a field
    #[must_use]
    pub fn warnings(&self) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|i| i.level == Level::Warn)
            .map(|i| i.message.as_str())
            .collect()
    }
}

/// Filter one course's raw JSON into its well-formed subset
#[must_use]
pub fn validate_course(course_id: &str, data: &Value) -> ValidatedCourse {
    let mut result = ValidatedCourse::default();

    let Some(tasks) = data.get(TASKS).and_then(Value::as_array) else {
        result
            .issues
            .push(Issue::error(format!("Course #{course_id}: tasks not found")));
        return result;
    };

    for task in tasks {
        if let Some(task) = validate_task(course_id, task, &mut result.issues) {
            result.tasks.push(task);
        }
    }

    result
}

fn validate_task(course_id: &str, task: &Value, issues: &mut Vec<Issue>) -> Option<RawTask> {
    let Some(task) = task.as_object() else {
        issues.push(Issue::error(format!("Course #{course_id}: task record is not an object")));
        return None;
    };

    let Some(id) = task.get(TASK_ID).and_then(id_string) else {
        issues.push(Issue::error(format!("Course #{course_id}: task id not found")));
        return None;
    };

    let Some(title) = task.get(TASK_TITLE).and_then(Value::as_str) else {
        issues.push(Issue::error(format!("Course #{course_id}: task #{id} has no title")));
        return None;
    };
    if !is_path_segment(title) {
        issues.push(Issue::error(format!(
            "Course #{course_id}: task #{id} has unusable title '{title}'"
        )));
        return None;
    }

    let parent_id = match task.get(TASK_PARENT) {
        None => {
            issues.push(Issue::warn(format!(
                "Course #{course_id}: task #{id} has no parent, treated as root"
            )));
            None
        },
        Some(parent) => id_string(parent),
    };

    let students = match task.get(STUDENTS).and_then(Value::as_array) {
        None => {
            issues.push(Issue::warn(format!("Course #{course_id}: task #{id} has no students")));
            Vec::new()
        },
        Some(students) => students
            .iter()
            .filter_map(|s| validate_student(course_id, &id, s, issues))
            .collect(),
    };

    Some(RawTask {
        id,
        parent_id,
        title: title.to_string(),
        students,
    })
}

fn validate_student(
    course_id: &str,
    task_id: &str,
    student: &Value,
    issues: &mut Vec<Issue>,
) -> Option<RawStudent> {
    let Some(student) = student.as_object() else {
        issues.push(Issue::error(format!(
            "Course #{course_id}, task #{task_id}: student record is not an object"
        )));
        return None;
    };

    let Some(account) = student.get(STUDENT_ACCOUNT).and_then(id_string) else {
        issues.push(Issue::error(format!(
            "Course #{course_id}, task #{task_id}: student login not found"
        )));
        return None;
    };

    let Some(name) = student.get(STUDENT_NAME).and_then(Value::as_str) else {
        issues.push(Issue::error(format!(
            "Course #{course_id}, task #{task_id}: student '{account}' has no name"
        )));
        return None;
    };
    if !is_path_segment(name) {
        issues.push(Issue::error(format!(
            "Course #{course_id}, task #{task_id}: student '{account}' has unusable name '{name}'"
        )));
        return None;
    }

    let svn = match student.get(SVN) {
        Some(Value::Object(svn)) if !svn.is_empty() => {
            Some(validate_svn(course_id, task_id, name, svn, issues))
        },
        _ => None,
    };

    Some(RawStudent {
        account,
        name: name.to_string(),
        svn,
    })
}

fn validate_svn(
    course_id: &str,
    task_id: &str,
    student: &str,
    svn: &Map<String, Value>,
    issues: &mut Vec<Issue>,
) -> RawLocation {
    let mut field = |key: &str, what: &str| {
        let value = svn.get(key).and_then(id_string);
        if value.is_none() {
            issues.push(Issue::warn(format!(
                "Course #{course_id}, task #{task_id}, student '{student}': {what} not found"
            )));
        }
        value
    };

    let path = field(SVN_PATH, "svn path").unwrap_or_default();
    let review_id = field(SVN_REVIEW, "review id").unwrap_or_default();
    let revision = field(SVN_REVISION, "svn revision");

    RawLocation {
        path,
        review_id,
        revision,
    }
}

/// Titles and names become directory names: after trimming, each must be
/// exactly one plain path component.
fn is_path_segment(text: &str) -> bool {
    let text = text.trim();
    if text.chars().any(std::path::is_separator) {
        return false;
    }
    let mut components = Path::new(text).components();
    matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}

/// Normalize a JSON identifier (string or number) to its string form
fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
