//! HTTP course source
//!
//! Implements the `CourseSource` trait against the course service's JSON
//! endpoint, `GET {url}/course/{id}?format=json`, with HTTP Basic
//! authentication.

use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::AuthSettings;
use crate::core::ports::CourseSource;
use crate::error::AuthError;

/// Request timeout for one course document
const TIMEOUT: Duration = Duration::from_secs(60);

/// Errors loading a course document
#[derive(Debug, Error)]
pub enum CourseSourceError {
    /// The request could not be sent or the body not read
    #[error("request to {url} failed: {source}")]
    Request {
        /// Requested URL
        url: String,
        /// Underlying HTTP error
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// Status code
        status: u16,
    },

    /// The body is not valid JSON
    #[error("invalid JSON from {url}: {source}")]
    Decode {
        /// Requested URL
        url: String,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

/// Course service client
#[derive(Debug, Clone)]
pub struct HttpCourseSource {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl HttpCourseSource {
    /// Prepare an authenticated client
    pub fn new(auth: &AuthSettings) -> Result<Self, AuthError> {
        info!("Preparing HTTP Basic authorization for '{}'", auth.username);

        if !(auth.url.starts_with("http://") || auth.url.starts_with("https://")) {
            return Err(AuthError(format!("unsupported service URL '{}'", auth.url)));
        }

        let client = Client::builder()
            .timeout(TIMEOUT)
            .user_agent(concat!("coursesync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AuthError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: auth.url.clone(),
            username: auth.username.clone(),
            password: auth.password.clone(),
        })
    }

    /// URL of a course document
    #[must_use]
    pub fn course_url(&self, course_id: &str) -> String {
        format!("{}/course/{course_id}?format=json", self.base_url.trim_end_matches('/'))
    }

    fn fetch(&self, course_id: &str) -> Result<serde_json::Value, CourseSourceError> {
        let url = self.course_url(course_id);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .map_err(|source| CourseSourceError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CourseSourceError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|source| CourseSourceError::Request {
            url: url.clone(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| CourseSourceError::Decode { url, source })
    }
}

impl CourseSource for HttpCourseSource {
    fn load_course(&self, course_id: &str) -> anyhow::Result<serde_json::Value> {
        Ok(self.fetch(course_id)?)
    }
}
