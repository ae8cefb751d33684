//! Subversion adapter
//!
//! Implements the `VersionControl` trait by running the `svn` command line
//! client.
//!
//! - [`info`] - Parsing of `svn info --xml` output

pub mod info;

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use crate::core::ports::{FetchSource, VcsError, VersionControl};

pub use info::parse_info_revision;

/// Subversion client invoked as a subprocess
#[derive(Debug, Clone)]
pub struct SvnClient {
    /// Executable to run
    program: PathBuf,
    /// Repository base URL; accounts are directories below it
    base_url: String,
    /// Login
    username: String,
    /// Password
    password: String,
}

impl SvnClient {
    /// Create a client running `program`
    #[must_use]
    pub fn new(
        program: PathBuf,
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            program,
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Tries to figure out where `svn` is installed
    ///
    /// Falls back to the bare program name, in which case a missing client
    /// shows up as a per-submission failure.
    #[must_use]
    pub fn lookup_program() -> PathBuf {
        which::which("svn").unwrap_or_else(|_| PathBuf::from("svn"))
    }

    /// Executable this client runs
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// URL of a fetch source: `{base}/{account}[/{path}][@{revision}]`
    #[must_use]
    pub fn url(&self, source: &FetchSource) -> String {
        let mut url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            source.account.trim_matches('/')
        );

        let path = source.path.trim_matches('/');
        if !path.is_empty() {
            url.push('/');
            url.push_str(path);
        }

        if let Some(revision) = &source.revision {
            url.push('@');
            url.push_str(revision);
        }

        url
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--non-interactive");
        cmd
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl VersionControl for SvnClient {
    fn checkout(&self, source: &FetchSource, destination: &Path) -> Result<(), VcsError> {
        let url = self.url(source);
        debug!("+ {} checkout {url} {}", self.program_name(), destination.display());

        let status = self
            .command()
            .args(["checkout", "--force", "--no-auth-cache"])
            .args(["--username", &self.username])
            .args(["--password", &self.password])
            .arg(&url)
            .arg(destination)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| VcsError::Spawn {
                program: self.program_name(),
                source,
            })?;

        if !status.success() {
            return Err(VcsError::ExitStatus {
                program: self.program_name(),
                code: status.code(),
            });
        }

        Ok(())
    }

    fn working_revision(&self, path: &Path) -> Result<String, VcsError> {
        debug!("+ {} info --xml {}", self.program_name(), path.display());

        let output = self
            .command()
            .args(["info", "--xml"])
            .arg(path)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| VcsError::Spawn {
                program: self.program_name(),
                source,
            })?;

        if !output.status.success() {
            return Err(VcsError::ExitStatus {
                program: self.program_name(),
                code: output.status.code(),
            });
        }

        parse_info_revision(&String::from_utf8_lossy(&output.stdout))
    }
}
