//! Shared setup for commands that talk to the course service

use std::path::Path;

use coursesync::adapters::{HttpCourseSource, TomlLinkStore};
use coursesync::config::Settings;
use coursesync::core::models::CourseModel;
use coursesync::core::services::{build_model, load_courses};

/// Everything a course-reading command needs
pub struct Context {
    pub settings: Settings,
    pub store: TomlLinkStore,
}

impl Context {
    /// Load and validate the configuration at `config`
    pub fn load(config: &Path) -> anyhow::Result<Self> {
        let store = TomlLinkStore::open(config)?;
        let settings = Settings::from_file(store.config())?;
        Ok(Self { settings, store })
    }

    /// Download all configured courses and build the model
    ///
    /// Courses that fail to load are logged and left out.
    pub fn model(&self) -> anyhow::Result<CourseModel> {
        let source = HttpCourseSource::new(&self.settings.auth)?;
        let courses = load_courses(&source, &self.settings.course_ids);
        Ok(build_model(&courses, &self.store))
    }
}
