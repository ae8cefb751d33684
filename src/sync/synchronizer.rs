//! Synchronization run
//!
//! Walks the selected submissions in delivery order and, one at a time,
//! resolves, plans and fetches them. A failure only ever affects the
//! submission it happened on; the run always goes on.

use log::{error, info, warn};

use crate::core::models::Submission;
use crate::core::ports::{FetchSource, LinkPrompt, LinkStore, VersionControl};
use crate::core::services::{Resolution, ResolveOptions, Resolver, Selection};
use crate::output::{StatusEntry, StatusReport, SubmissionInfo, SyncEntry, SyncOutcome, SyncReport};

use super::candidates::link_candidates;
use super::fetch::{FetchOutcome, Fetcher};
use super::planner::Planner;
use super::update::{UpdateChecker, UpdateStatus};

/// Options of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// Resolution policy
    pub resolve: ResolveOptions,
    /// Ask for a link after bulk-fetching an unresolved submission
    pub ask_link: bool,
    /// Skip checkouts whose revision marker matches
    pub caching: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            resolve: ResolveOptions::default(),
            ask_link: false,
            caching: true,
        }
    }
}

/// Drives one synchronization run
pub struct Synchronizer<'a> {
    planner: Planner,
    vcs: &'a dyn VersionControl,
    links: &'a mut dyn LinkStore,
    prompt: Option<&'a mut dyn LinkPrompt>,
    options: SyncOptions,
}

impl std::fmt::Debug for Synchronizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synchronizer")
            .field("planner", &self.planner)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<'a> Synchronizer<'a> {
    /// Create a synchronizer
    #[must_use]
    pub fn new(
        planner: Planner,
        vcs: &'a dyn VersionControl,
        links: &'a mut dyn LinkStore,
        options: SyncOptions,
    ) -> Self {
        Self {
            planner,
            vcs,
            links,
            prompt: None,
            options,
        }
    }

    /// Use `prompt` to ask for links after bulk fetches
    #[must_use]
    pub fn with_prompt(mut self, prompt: &'a mut dyn LinkPrompt) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Synchronize every submission admitted by `selection`
    pub fn synchronize(&mut self, submissions: &[Submission], selection: &Selection) -> SyncReport {
        info!("Start synchronization");

        let mut resolver = Resolver::new(self.options.resolve);
        let fetcher = Fetcher::new(self.vcs, self.options.caching);
        let mut report = SyncReport::default();

        for submission in submissions.iter().filter(|s| selection.admits(s)) {
            report.entries.push(self.sync_one(submission, &mut resolver, &fetcher));
        }

        info!("Synchronization completed");
        report
    }

    fn sync_one(&mut self, submission: &Submission, resolver: &mut Resolver, fetcher: &Fetcher<'_>) -> SyncEntry {
        let info = SubmissionInfo::from(submission);
        info!("Checking submission {info}");

        let resolution = resolver.resolve(submission, &mut *self.links);
        let entry = |outcome, destination: Option<String>| SyncEntry {
            submission: info.clone(),
            outcome,
            destination,
        };

        let path = match &resolution {
            Resolution::NoSubmission => return entry(SyncOutcome::NoSubmission, None),
            Resolution::Unresolved => return entry(SyncOutcome::Unresolved, None),
            Resolution::Forced {
                already_fetched: true,
            } => {
                self.ask_link(submission);
                return entry(SyncOutcome::AlreadyFetched, None);
            },
            Resolution::DirectPath { path, .. } | Resolution::LinkedPath { path } => path.clone(),
            Resolution::Forced {
                already_fetched: false,
            } => String::new(),
        };

        let destination = match self.planner.prepare(submission, resolution.is_bulk()) {
            Ok(destination) => destination,
            Err(e) => {
                error!("Make directory error: {e}");
                return entry(SyncOutcome::Failed(e.to_string()), None);
            },
        };
        let shown = Some(destination.display().to_string());

        let revision = submission.location.as_ref().and_then(|l| l.revision.clone());
        let source = FetchSource::new(submission.student.account.clone(), path, revision);

        match fetcher.fetch(&source, &destination) {
            Ok(outcome) => {
                if resolution.is_bulk() {
                    self.ask_link(submission);
                }
                match outcome {
                    FetchOutcome::Fetched => entry(SyncOutcome::Fetched, shown),
                    FetchOutcome::UpToDate => entry(SyncOutcome::UpToDate, shown),
                }
            },
            Err(e) => {
                error!("Download error: {e}");
                entry(SyncOutcome::Failed(e.to_string()), shown)
            },
        }
    }

    /// Offer the operator to link the submission to a directory of the bulk checkout
    fn ask_link(&mut self, submission: &Submission) {
        if !self.options.ask_link {
            return;
        }
        let Some(prompt) = self.prompt.as_deref_mut() else {
            return;
        };
        let Some(location) = &submission.location else {
            return;
        };
        if location.review_id.is_empty() {
            warn!("Submission has no review id, cannot link it");
            return;
        }

        let root = self.planner.bulk_destination(&submission.student.name);
        let candidates = link_candidates(&root);

        let Some(path) = prompt.choose(&submission.task.name.to_string(), &candidates) else {
            info!("No link chosen for review #{}", location.review_id);
            return;
        };

        if let Err(e) = self.links.add_link(&location.review_id, &path) {
            error!("Failed to add link: {e:#}");
        }
    }

    /// Report what a run would change, without touching anything
    ///
    /// Links are never removed and no directory is created; the link store
    /// is only read.
    pub fn plan(&mut self, submissions: &[Submission], selection: &Selection) -> StatusReport {
        let options = ResolveOptions {
            remove_redundant_links: false,
            ..self.options.resolve
        };
        let mut resolver = Resolver::new(options);
        let checker = UpdateChecker::new(self.vcs);
        let mut report = StatusReport::default();

        for submission in submissions.iter().filter(|s| selection.admits(s)) {
            let resolution = resolver.resolve(submission, &mut *self.links);
            if resolution.fetch_path().is_none() {
                continue;
            }

            let destination = self.planner.destination(submission, resolution.is_bulk());
            let status = checker.check(submission, &destination);
            if let UpdateStatus::Unknown(reason) = &status {
                error!("Cannot determine state of '{}': {reason}", destination.display());
            }
            if !status.is_actionable() {
                continue;
            }

            report.entries.push(StatusEntry {
                submission: SubmissionInfo::from(submission),
                status: status.label().to_string(),
                reason: match status {
                    UpdateStatus::Unknown(reason) => Some(reason),
                    _ => None,
                },
                destination: Some(destination.display().to_string()),
            });
        }

        report
    }
}
