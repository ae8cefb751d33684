//! Synchronization engine
//!
//! Everything that touches the local tree or runs the VCS client:
//!
//! - [`planner`] - Checkout directories
//! - [`fetch`] - Checkouts and the revision marker
//! - [`update`] - Working copy revision checks
//! - [`candidates`] - Link suggestions after a bulk fetch
//! - [`synchronizer`] - The run itself

pub mod candidates;
pub mod fetch;
pub mod planner;
pub mod synchronizer;
pub mod update;

pub use candidates::link_candidates;
pub use fetch::{FetchOutcome, Fetcher, RevisionMarker};
pub use planner::{PlanError, Planner};
pub use synchronizer::{SyncOptions, Synchronizer};
pub use update::{UpdateChecker, UpdateStatus};
