//! Course loading
//!
//! Pulls raw course JSON from a [`CourseSource`]. A course that cannot be
//! loaded is logged and left out; the others still load.

use log::{error, info};
use serde_json::Value;

use crate::core::ports::CourseSource;

/// Load every course in `ids`, in order, skipping failures
#[must_use]
pub fn load_courses(source: &dyn CourseSource, ids: &[String]) -> Vec<(String, Value)> {
    let mut courses = Vec::with_capacity(ids.len());

    for id in ids {
        info!("Loading course #{id}");
        match source.load_course(id) {
            Ok(data) => courses.push((id.clone(), data)),
            Err(e) => error!("Failed to load course #{id}: {e:#}"),
        }
    }

    courses
}
