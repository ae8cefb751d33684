//! `svn info --xml` parsing

use regex::Regex;

use crate::core::ports::VcsError;

/// `revision` attribute of an `<entry>` start tag
const ENTRY_REVISION: &str = r#"<entry\b[^>]*?\srevision\s*=\s*(?:"([^"]*)"|'([^']*)')"#;

/// Extract the revision of the first `<entry>` reported by `svn info --xml`
pub fn parse_info_revision(xml: &str) -> Result<String, VcsError> {
    let re = Regex::new(ENTRY_REVISION).map_err(|e| VcsError::Output(e.to_string()))?;

    let captures = re
        .captures(xml)
        .ok_or_else(|| VcsError::Output("no entry with a revision attribute".to_string()))?;

    let revision = captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str().trim())
        .unwrap_or_default();

    if revision.is_empty() {
        return Err(VcsError::Output("empty revision attribute".to_string()));
    }

    Ok(revision.to_string())
}
