//! Link management command - add, list, remove links

use std::path::Path;

use anyhow::bail;

use crate::cli::app::LinkAction;
use coursesync::adapters::TomlLinkStore;
use coursesync::core::ports::LinkStore;
use coursesync::output::{MappingListResult, OperationResult, OutputMode};

/// Handle link subcommands
pub fn link(config: &Path, action: LinkAction, mode: OutputMode) -> anyhow::Result<()> {
    let mut store = TomlLinkStore::open(config)?;

    match action {
        LinkAction::Add { review_id, path } => {
            let path = path.join(" ");
            store.add_link(&review_id, &path)?;
            OperationResult {
                success: true,
                message: format!("Linked review #{review_id} to '{path}'"),
            }
            .render(mode);
        },
        LinkAction::Remove { review_id } => {
            if !store.remove_link(&review_id)? {
                bail!("no link for review #{review_id}");
            }
            OperationResult {
                success: true,
                message: format!("Removed link for review #{review_id}"),
            }
            .render(mode);
        },
        LinkAction::List => MappingListResult::new("links", store.links()).render(mode),
    }

    Ok(())
}
