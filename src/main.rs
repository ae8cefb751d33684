//! coursesync - Mirror coursework submissions into a local directory tree
//!
//! Loads course data from the course service, resolves where every
//! submission lives in version control and checks it out locally.

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the coursesync CLI
fn main() {
    std::process::exit(cli::run());
}
