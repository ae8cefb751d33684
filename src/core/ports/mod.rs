//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (course service, version control, storage,
//! the operator's console).
//!
//! Implementations live in the `adapters` module.

mod course_source;
mod link_prompt;
mod link_store;
mod vcs;

pub use course_source::CourseSource;
pub use link_prompt::LinkPrompt;
pub use link_store::LinkStore;
pub use vcs::{FetchSource, VcsError, VersionControl};
