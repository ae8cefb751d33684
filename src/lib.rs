//! coursesync - Mirror coursework submissions into a local directory tree
//!
//! Course data comes from a remote course service as JSON; submissions live
//! in per-student Subversion repositories. This library validates the course
//! data, names tasks by their hierarchy, decides where every submission is
//! fetched from and checks it out into `{root}/{task}/{student}`.

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code)]
#![warn(missing_docs, missing_debug_implementations, unused_qualifications)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;
pub mod sync;
