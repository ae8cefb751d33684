//! Link prompt port
//!
//! After a forced bulk fetch the operator may pick which directory of the
//! student's repository holds a task. The engine only needs a choice or a
//! cancellation; how it is obtained is up to the implementation.

/// Interactive chooser for link targets
pub trait LinkPrompt {
    /// Choose the path for `task`, from `candidates` or entered manually
    ///
    /// Returns `None` when the operator cancels.
    fn choose(&mut self, task: &str, candidates: &[String]) -> Option<String>;
}
