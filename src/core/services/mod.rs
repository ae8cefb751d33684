//! Business logic services
//!
//! - [`validator`] - Filters raw course JSON into well-formed records
//! - [`hierarchy`] - Names tasks by walking parent links
//! - [`loader`] - Fetches raw course data
//! - [`builder`] - Assembles the course model
//! - [`resolver`] - Chooses where each submission is fetched from
//! - [`selection`] - Narrows a run by course, task and student

pub mod builder;
pub mod hierarchy;
pub mod loader;
pub mod resolver;
pub mod selection;
pub mod validator;

pub use builder::{ModelBuilder, build_model};
pub use hierarchy::{Hierarchy, HierarchyEntry, HierarchyError, normalize};
pub use loader::load_courses;
pub use resolver::{Resolution, ResolveOptions, Resolver};
pub use selection::{Selection, selected};
pub use validator::{Issue, RawLocation, RawStudent, RawTask, ValidatedCourse, validate_course};
