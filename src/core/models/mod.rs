//! Domain models for coursesync
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Student`] - Who submitted
//! - [`Task`] - What was submitted, named by its [`QualifiedName`]
//! - [`Submission`] - A student's attempt, with an optional [`Location`]
//! - [`CourseModel`] - Everything loaded for one run

mod course;
mod student;
mod submission;
mod task;

pub use course::CourseModel;
pub use student::Student;
pub use submission::{Location, Submission};
pub use task::{QualifiedName, Task};
