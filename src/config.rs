//! Configuration management
//!
//! The configuration file is TOML with four sections:
//!
//! ```toml
//! [auth]
//! url = "https://anytask.example.org/"
//! username = "lecturer"
//! password = "secret"
//!
//! [course]
//! root = "course"
//! unsorted = "unsorted"
//! svn = "https://svn.example.org/"
//! ids = "12, 15"
//! ignore = "demo"
//!
//! [links]
//! "42" = "hw1"
//!
//! [relocations]
//! "old-login" = "new-login"
//! ```
//!
//! `[links]` and `[relocations]` are written back by the link store; any
//! other content of the file is preserved when that happens.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ExitCode;

/// Errors raised while loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("cannot load config file '{}': {source}", .path.display())]
    Unreadable {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not valid TOML or has wrongly typed values
    #[error("cannot parse config file '{}': {source}", .path.display())]
    Invalid {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        source: Box<toml::de::Error>,
    },

    /// A required course setting is absent
    #[error("missing required setting '{section}.{key}'")]
    MissingKey {
        /// Section name
        section: &'static str,
        /// Key name
        key: &'static str,
    },

    /// Authentication data is absent
    #[error("cannot read data for authentication: missing 'auth.{key}'")]
    MissingAuth {
        /// Key name
        key: &'static str,
    },

    /// The course id list is absent or malformed
    #[error("cannot read course identifiers: {0}")]
    CourseIds(String),
}

impl ConfigError {
    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Unreadable { .. } | Self::Invalid { .. } | Self::MissingKey { .. } => ExitCode::Config,
            Self::MissingAuth { .. } => ExitCode::Auth,
            Self::CourseIds(_) => ExitCode::Parse,
        }
    }
}

/// `[auth]` section as stored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthSection {
    /// Course service base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Login for the course service and the VCS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password for the course service and the VCS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Unrecognized keys, kept on rewrite
    #[serde(flatten, default)]
    pub extra: toml::Table,
}

/// `[course]` section as stored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseSection {
    /// Local root directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Directory name of the bulk-fetch bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsorted: Option<String>,
    /// VCS base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svn: Option<String>,
    /// Comma-separated course ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<String>,
    /// Comma-separated values excluded from every run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<String>,
    /// VCS executable override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    /// Unrecognized keys, kept on rewrite
    #[serde(flatten, default)]
    pub extra: toml::Table,
}

/// The configuration file as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// `[auth]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthSection>,
    /// `[course]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseSection>,
    /// `[links]`: review id → repository-relative path
    #[serde(default)]
    pub links: BTreeMap<String, String>,
    /// `[relocations]`: reported account → effective account
    #[serde(default)]
    pub relocations: BTreeMap<String, String>,
    /// Unrecognized sections, kept on rewrite
    #[serde(flatten, default)]
    pub extra: toml::Table,
}

impl ConfigFile {
    /// Load the configuration file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&data).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    /// Parse configuration text
    pub fn parse(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    /// Write the configuration to `path`
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Credentials and location of the course service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSettings {
    /// Course service base URL
    pub url: String,
    /// Login
    pub username: String,
    /// Password
    pub password: String,
}

/// Validated settings needed for a synchronization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Course service access
    pub auth: AuthSettings,
    /// Local root directory
    pub root: PathBuf,
    /// Bulk-fetch bucket name
    pub unsorted: String,
    /// VCS base URL
    pub svn_url: String,
    /// Course ids, in configured order
    pub course_ids: Vec<String>,
    /// Values excluded from every run
    pub ignore: Vec<String>,
    /// VCS executable override
    pub client: Option<PathBuf>,
}

impl Settings {
    /// Validate the stored configuration
    ///
    /// Missing course settings, missing authentication data and a bad
    /// course id list are reported as distinct errors.
    pub fn from_file(file: &ConfigFile) -> Result<Self, ConfigError> {
        let course = file.course.clone().unwrap_or_default();
        let required = |value: Option<String>, key: &'static str| {
            value.ok_or(ConfigError::MissingKey {
                section: "course",
                key,
            })
        };

        let root = required(course.root, "root")?;
        let unsorted = required(course.unsorted, "unsorted")?;
        let svn_url = required(course.svn, "svn")?;

        let auth = file.auth.clone().unwrap_or_default();
        let auth = AuthSettings {
            url: auth.url.ok_or(ConfigError::MissingAuth { key: "url" })?,
            username: auth.username.ok_or(ConfigError::MissingAuth { key: "username" })?,
            password: auth.password.ok_or(ConfigError::MissingAuth { key: "password" })?,
        };

        let ids = course
            .ids
            .ok_or_else(|| ConfigError::CourseIds("missing 'course.ids'".to_string()))?;
        let course_ids = parse_course_ids(&ids)?;

        Ok(Self {
            auth,
            root: PathBuf::from(root),
            unsorted,
            svn_url,
            course_ids,
            ignore: course.ignore.as_deref().map(split_list).unwrap_or_default(),
            client: course.client.map(PathBuf::from),
        })
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Parse the comma-separated course id list
///
/// Empty entries (`"1,,2"`) and ids containing whitespace or `/` are rejected.
pub fn parse_course_ids(value: &str) -> Result<Vec<String>, ConfigError> {
    let mut ids = Vec::new();
    for (index, raw) in value.split(',').enumerate() {
        let id = raw.trim();
        if id.is_empty() {
            return Err(ConfigError::CourseIds(format!("empty entry at position {}", index + 1)));
        }
        if id.contains(char::is_whitespace) || id.contains('/') {
            return Err(ConfigError::CourseIds(format!("invalid course id '{id}'")));
        }
        ids.push(id.to_string());
    }
    Ok(ids)
}
