//! Update checking
//!
//! Tells, without side effects, whether a submission's checkout is behind
//! the revision the course service expects. When the answer cannot be
//! determined the result says so; it never claims "up to date" on a guess.

use std::path::Path;

use log::debug;

use crate::core::models::Submission;
use crate::core::ports::VersionControl;

/// Result of an update check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The submission has no location, so there is nothing to fetch
    NothingToFetch,
    /// The checkout is missing or at another revision
    NeedsUpdate,
    /// The checkout is at the expected revision
    UpToDate,
    /// The state could not be determined
    Unknown(String),
}

impl UpdateStatus {
    /// Whether a fetch would change something (or might)
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        matches!(self, Self::NeedsUpdate | Self::Unknown(_))
    }

    /// Short label for listings
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NothingToFetch => "no submission",
            Self::NeedsUpdate => "needs update",
            Self::UpToDate => "up to date",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// Compares working copies against expected revisions
pub struct UpdateChecker<'a> {
    vcs: &'a dyn VersionControl,
}

impl std::fmt::Debug for UpdateChecker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateChecker").finish_non_exhaustive()
    }
}

impl<'a> UpdateChecker<'a> {
    /// Create a checker
    #[must_use]
    pub fn new(vcs: &'a dyn VersionControl) -> Self {
        Self { vcs }
    }

    /// Check the checkout of `submission` at `destination`
    #[must_use]
    pub fn check(&self, submission: &Submission, destination: &Path) -> UpdateStatus {
        let Some(location) = &submission.location else {
            return UpdateStatus::NothingToFetch;
        };

        if !destination.exists() {
            return UpdateStatus::NeedsUpdate;
        }

        let Some(expected) = location.revision.as_deref() else {
            return UpdateStatus::Unknown("expected revision not reported".to_string());
        };

        match self.vcs.working_revision(destination) {
            Ok(actual) => {
                debug!(
                    "'{}' is at revision {actual}, expected {expected}",
                    destination.display()
                );
                if actual == expected {
                    UpdateStatus::UpToDate
                } else {
                    UpdateStatus::NeedsUpdate
                }
            },
            Err(e) => UpdateStatus::Unknown(e.to_string()),
        }
    }
}
