//! Fetch orchestration
//!
//! Runs the checkout for one submission and keeps a revision marker inside
//! the checkout. The marker records what was last fetched *successfully*
//! (account, path and revision): it is removed before every checkout and
//! written only once the client reports success, so an interrupted fetch
//! is retried on the next run. Caching only decides whether a matching
//! marker may skip the checkout.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::ports::{FetchSource, VcsError, VersionControl};
use crate::paths;

/// Outcome of a successful fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The client checked the revision out
    Fetched,
    /// The marker shows the revision is already there
    UpToDate,
}

/// Content of the revision marker file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionMarker {
    /// Repository account fetched from
    pub account: String,
    /// Path inside the repository; empty for the whole repository
    pub path: String,
    /// Revision fetched
    pub revision: String,
    /// When it was fetched (RFC3339)
    pub fetched_at: String,
}

impl RevisionMarker {
    /// Marker for `source` fetched now at `revision`
    #[must_use]
    pub fn now(source: &FetchSource, revision: &str) -> Self {
        Self {
            account: source.account.clone(),
            path: source.path.clone(),
            revision: revision.to_string(),
            fetched_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Whether the marker describes `source` at `revision`
    #[must_use]
    pub fn matches(&self, source: &FetchSource, revision: &str) -> bool {
        self.revision == revision && self.account == source.account && self.path == source.path
    }

    /// Read the marker of a checkout
    ///
    /// A missing or unreadable marker is reported as `None`.
    #[must_use]
    pub fn read(destination: &Path) -> Option<Self> {
        let path = paths::revision_marker(destination);
        let content = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(marker) => Some(marker),
            Err(e) => {
                debug!("Ignoring malformed revision marker '{}': {e}", path.display());
                None
            },
        }
    }

    /// Write the marker into a checkout
    pub fn write(&self, destination: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(paths::revision_marker(destination), content)?;
        Ok(())
    }

    /// Remove the marker of a checkout, if any
    pub fn clear(destination: &Path) -> std::io::Result<()> {
        match fs::remove_file(paths::revision_marker(destination)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// Runs checkouts through a version control client
pub struct Fetcher<'a> {
    vcs: &'a dyn VersionControl,
    caching: bool,
}

impl std::fmt::Debug for Fetcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher").field("caching", &self.caching).finish_non_exhaustive()
    }
}

impl<'a> Fetcher<'a> {
    /// Create a fetcher; `caching` lets a matching marker skip the checkout
    #[must_use]
    pub fn new(vcs: &'a dyn VersionControl, caching: bool) -> Self {
        Self { vcs, caching }
    }

    /// Fetch `source` into `destination`
    ///
    /// Local modifications in `destination` are overwritten.
    pub fn fetch(&self, source: &FetchSource, destination: &Path) -> Result<FetchOutcome, VcsError> {
        info!(
            "Fetching '{}/{}' at revision {}",
            source.account,
            source.path,
            source.revision.as_deref().unwrap_or("HEAD")
        );

        let revision = source.revision.as_deref();

        if self.caching
            && let Some(revision) = revision
            && RevisionMarker::read(destination).is_some_and(|m| m.matches(source, revision))
        {
            info!("Revision {revision} already in '{}'. Skip", destination.display());
            return Ok(FetchOutcome::UpToDate);
        }

        if let Err(e) = RevisionMarker::clear(destination) {
            warn!("Cannot remove revision marker in '{}': {e}", destination.display());
        }

        self.vcs.checkout(source, destination)?;
        info!("Fetched to '{}'", destination.display());

        if let Some(revision) = revision
            && let Err(e) = RevisionMarker::now(source, revision).write(destination)
        {
            warn!("Cannot write revision marker in '{}': {e:#}", destination.display());
        }

        Ok(FetchOutcome::Fetched)
    }
}
