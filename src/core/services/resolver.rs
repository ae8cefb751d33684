//! Submission resolver
//!
//! Decides where a submission is fetched from. The fallback order is:
//!
//! 1. the path reported by the course service,
//! 2. a link remembered for the submission's review id,
//! 3. with `force`, the student's whole repository into the unsorted bucket.
//!
//! A forced bulk fetch pulls everything the student has, so it happens at
//! most once per account and run.

use std::collections::HashSet;

use log::{error, info, warn};

use crate::core::models::Submission;
use crate::core::ports::LinkStore;

/// Where a submission is fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing was submitted
    NoSubmission,

    /// The course service reported the path
    DirectPath {
        /// Repository-relative path
        path: String,
        /// A link for the review id existed and is no longer needed
        redundant_link: bool,
    },

    /// The path comes from a remembered link
    LinkedPath {
        /// Repository-relative path
        path: String,
    },

    /// No path, no link and bulk fetching disabled
    Unresolved,

    /// No path and no link: fetch the whole repository
    Forced {
        /// The account's repository was already fetched in this run
        already_fetched: bool,
    },
}

impl Resolution {
    /// Repository-relative path to fetch, if the submission is fetched at all
    #[must_use]
    pub fn fetch_path(&self) -> Option<&str> {
        match self {
            Self::DirectPath { path, .. } | Self::LinkedPath { path } => Some(path.as_str()),
            Self::Forced {
                already_fetched: false,
            } => Some(""),
            Self::NoSubmission | Self::Unresolved | Self::Forced { .. } => None,
        }
    }

    /// Whether the fetch targets the unsorted bucket
    #[must_use]
    pub const fn is_bulk(&self) -> bool {
        matches!(self, Self::Forced { .. })
    }
}

/// Resolver options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Bulk-fetch submissions that have neither a path nor a link
    pub force: bool,
    /// Delete links made redundant by a reported path
    pub remove_redundant_links: bool,
}

/// Per-run submission resolver
#[derive(Debug, Default)]
pub struct Resolver {
    options: ResolveOptions,
    bulk_fetched: HashSet<String>,
}

impl Resolver {
    /// Create a resolver for one run
    #[must_use]
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            options,
            bulk_fetched: HashSet::new(),
        }
    }

    /// Resolve one submission
    ///
    /// Removing a redundant link is the only store mutation; a failure to
    /// do so is logged and does not change the resolution.
    pub fn resolve(&mut self, submission: &Submission, links: &mut dyn LinkStore) -> Resolution {
        let Some(location) = &submission.location else {
            info!("No submission found. Skip");
            return Resolution::NoSubmission;
        };

        let linked = if location.review_id.is_empty() {
            None
        } else {
            links.link(&location.review_id)
        };

        if location.has_path() {
            let redundant_link = linked.is_some();
            if redundant_link {
                warn!("Link for review #{} is redundant", location.review_id);
                if self.options.remove_redundant_links {
                    match links.remove_link(&location.review_id) {
                        Ok(_) => info!("Link for review #{} removed", location.review_id),
                        Err(e) => error!("Failed to remove link #{}: {e:#}", location.review_id),
                    }
                }
            }
            return Resolution::DirectPath {
                path: location.path.clone(),
                redundant_link,
            };
        }

        if let Some(path) = linked {
            info!("Review #{} resolved through link", location.review_id);
            return Resolution::LinkedPath { path };
        }

        warn!("Submission has only review id #{}", location.review_id);

        if !self.options.force {
            warn!("Path is not specified. Skip");
            return Resolution::Unresolved;
        }

        let account = &submission.student.account;
        let already_fetched = !self.bulk_fetched.insert(account.clone());
        if already_fetched {
            info!("Repository '{account}' already fetched. Skip");
        }
        Resolution::Forced { already_fetched }
    }

    /// Whether `account` was bulk-fetched in this run
    #[must_use]
    pub fn is_bulk_fetched(&self, account: &str) -> bool {
        self.bulk_fetched.contains(account)
    }

    /// Resolver options
    #[must_use]
    pub const fn options(&self) -> ResolveOptions {
        self.options
    }
}
