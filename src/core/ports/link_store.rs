//! Link and relocation store port
//!
//! Defines the persistent associations the resolver relies on:
//!
//! - links: review id → path relative to the student's repository
//! - relocations: reported account → account actually used locally
//!
//! A missing key is a normal state, not an error. Every mutation must be
//! durable before it returns.

/// Persistent link and relocation storage
pub trait LinkStore {
    /// Path linked to a review id, if any
    fn link(&self, review_id: &str) -> Option<String>;

    /// All links, ordered by review id
    fn links(&self) -> Vec<(String, String)>;

    /// Remember `path` for `review_id`, replacing an existing link
    fn add_link(&mut self, review_id: &str, path: &str) -> anyhow::Result<()>;

    /// Forget the link of `review_id`
    ///
    /// Returns `false` when there was nothing to remove.
    fn remove_link(&mut self, review_id: &str) -> anyhow::Result<bool>;

    /// Effective account for a reported one, if relocated
    fn relocation(&self, account: &str) -> Option<String>;

    /// All relocations, ordered by reported account
    fn relocations(&self) -> Vec<(String, String)>;

    /// Relocate `account` to `effective`
    fn add_relocation(&mut self, account: &str, effective: &str) -> anyhow::Result<()>;

    /// Drop the relocation of `account`
    ///
    /// Returns `false` when there was nothing to remove.
    fn remove_relocation(&mut self, account: &str) -> anyhow::Result<bool>;

    /// Account to use locally for a reported account
    fn effective_account(&self, account: &str) -> String {
        self.relocation(account).unwrap_or_else(|| account.to_string())
    }
}
