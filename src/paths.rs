//! Centralized path definitions for coursesync
//!
//! ## Layout
//!
//! ```text
//! ./coursesync.toml                      # Config (or ~/.config/coursesync/config.toml)
//! {root}/
//! ├── {task}/{subtask}/{student}/        # One checkout per submission
//! │   └── .coursesync-revision           # Last successful fetch (account, path, revision)
//! └── {unsorted}/{student}/              # Bulk checkout of a whole repository
//! ```

use std::path::{Path, PathBuf};

/// Config filename looked up in the working directory
pub const CONFIG_FILE: &str = "coursesync.toml";

/// Directory under the user config dir
const GLOBAL_DIR: &str = "coursesync";

/// Config filename under [`GLOBAL_DIR`]
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Revision marker kept inside each checkout
pub const REVISION_MARKER: &str = ".coursesync-revision";

/// Working copy metadata directory of the VCS client
pub const VCS_METADATA_DIR: &str = ".svn";

/// Resolve the configuration file to use
///
/// An explicit path always wins. Otherwise `coursesync.toml` in the working
/// directory is used when present, then the per-user config file.
#[must_use]
pub fn config_file(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return local;
    }

    match global_config_file() {
        Some(global) if global.exists() => global,
        _ => local,
    }
}

/// Get path to the per-user config file, e.g. `~/.config/coursesync/config.toml`
#[must_use]
pub fn global_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GLOBAL_DIR).join(GLOBAL_CONFIG_FILE))
}

/// Get path to the revision marker of a checkout
#[must_use]
pub fn revision_marker(destination: &Path) -> PathBuf {
    destination.join(REVISION_MARKER)
}
