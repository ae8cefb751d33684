//! Link candidates
//!
//! After a bulk fetch, the directories near the top of the student's
//! checkout are the likely homes of a task. The usual `branches`, `tags`
//! and `trunk` layout directories are only offered through their children.

use std::path::Path;

use walkdir::WalkDir;

use crate::paths::VCS_METADATA_DIR;

const LAYOUT_DIRS: [&str; 3] = ["branches", "tags", "trunk"];

/// Candidate link paths under a bulk checkout, sorted
///
/// Lists directories one and two levels below `root`, relative to it and
/// `/`-separated. A missing root yields no candidates.
#[must_use]
pub fn link_candidates(root: &Path) -> Vec<String> {
    let mut candidates: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.file_name() != VCS_METADATA_DIR)
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
        .filter(|e| {
            !(e.depth() == 1 && e.file_name().to_str().is_some_and(|n| LAYOUT_DIRS.contains(&n)))
        })
        .filter_map(|e| {
            let relative = e.path().strip_prefix(root).ok()?;
            let parts: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            Some(parts.join("/"))
        })
        .collect();

    candidates.sort();
    candidates
}
