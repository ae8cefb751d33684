//! Process exit codes
//!
//! Fatal failures are grouped into categories, each with its own exit code,
//! so scripts can tell a broken configuration from missing credentials.

use crate::config::ConfigError;

/// Exit code categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Finished normally (0)
    Success,
    /// Configuration unreadable, invalid or incomplete (1)
    Config,
    /// Authentication data missing or client setup failed (2)
    Auth,
    /// Course id list missing or malformed (3)
    Parse,
    /// Any other failure of the requested command (4)
    Failure,
}

impl ExitCode {
    /// Numeric process exit code
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Config => 1,
            Self::Auth => 2,
            Self::Parse => 3,
            Self::Failure => 4,
        }
    }

    /// Short name of the category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Config => "CONFIG_ERROR",
            Self::Auth => "AUTH_ERROR",
            Self::Parse => "PARSE_ERROR",
            Self::Failure => "FAILURE",
        }
    }

    /// Find the exit code for an error chain
    #[must_use]
    pub fn of(error: &anyhow::Error) -> Self {
        error
            .chain()
            .find_map(|cause| {
                cause
                    .downcast_ref::<ConfigError>()
                    .map(ConfigError::exit_code)
                    .or_else(|| cause.downcast_ref::<AuthError>().map(|_| Self::Auth))
            })
            .unwrap_or(Self::Failure)
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.code())
    }
}

/// The authenticated client for the course service could not be set up
#[derive(Debug, thiserror::Error)]
#[error("cannot set up authentication: {0}")]
pub struct AuthError(pub String);
