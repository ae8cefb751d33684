//! Core domain logic for coursesync
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Student, Task, Submission, CourseModel)
//! - `services/` - Validation, naming, model building, resolution, selection
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
