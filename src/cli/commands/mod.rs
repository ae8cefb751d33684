//! Command implementations

mod context;
mod link;
mod list;
mod relocate;
mod sync;

pub use link::link;
pub use list::{students, tasks};
pub use relocate::relocate;
pub use sync::{SyncRequest, sync};
