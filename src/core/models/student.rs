//! Student model

use serde::Serialize;

/// A student, keyed by their (possibly relocated) repository account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Student {
    /// Display name as reported by the course service
    pub name: String,

    /// Repository account, unique across the model
    pub account: String,
}

impl Student {
    /// Create a new student
    #[must_use]
    pub fn new(name: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account: account.into(),
        }
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.account)
    }
}
