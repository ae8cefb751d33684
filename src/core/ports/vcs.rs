//! Version control system port
//!
//! Defines the interface for fetching submissions with an external client.

use std::path::Path;

use thiserror::Error;

/// Errors reported by a version control client
#[derive(Debug, Error)]
pub enum VcsError {
    /// The client could not be started
    #[error("cannot run {program}: {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The client ran but reported failure
    #[error("{program} exited with {}", describe_exit(.code))]
    ExitStatus {
        /// Program that failed
        program: String,
        /// Exit code, `None` when killed by a signal
        code: Option<i32>,
    },

    /// The client's output could not be understood
    #[error("unexpected output: {0}")]
    Output(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(|| "a signal".to_string(), |c| format!("status {c}"))
}

/// What to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSource {
    /// Repository account
    pub account: String,

    /// Path relative to the account's repository root; empty for the whole repository
    pub path: String,

    /// Revision to fetch; `None` for the latest
    pub revision: Option<String>,
}

impl FetchSource {
    /// Create a new fetch source
    #[must_use]
    pub fn new(account: impl Into<String>, path: impl Into<String>, revision: Option<String>) -> Self {
        Self {
            account: account.into(),
            path: path.into(),
            revision,
        }
    }
}

/// Version control client abstraction
pub trait VersionControl {
    /// Materialize `source` into `destination`, overwriting local modifications
    fn checkout(&self, source: &FetchSource, destination: &Path) -> Result<(), VcsError>;

    /// Revision currently checked out in the working copy at `path`
    fn working_revision(&self, path: &Path) -> Result<String, VcsError>;
}
