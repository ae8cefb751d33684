//! Course source port
//!
//! Defines where raw course data comes from.

/// Provider of raw course JSON
pub trait CourseSource {
    /// Load the raw JSON document of one course
    fn load_course(&self, course_id: &str) -> anyhow::Result<serde_json::Value>;
}
