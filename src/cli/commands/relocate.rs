//! Relocation management command - add, list, remove relocations

use std::path::Path;

use anyhow::bail;

use crate::cli::app::RelocateAction;
use coursesync::adapters::TomlLinkStore;
use coursesync::core::ports::LinkStore;
use coursesync::output::{MappingListResult, OperationResult, OutputMode};

/// Handle relocation subcommands
pub fn relocate(config: &Path, action: RelocateAction, mode: OutputMode) -> anyhow::Result<()> {
    let mut store = TomlLinkStore::open(config)?;

    match action {
        RelocateAction::Add { from, to } => {
            if from == to {
                bail!("account '{from}' cannot be relocated to itself");
            }
            store.add_relocation(&from, &to)?;
            OperationResult {
                success: true,
                message: format!("Account '{from}' relocated to '{to}'"),
            }
            .render(mode);
        },
        RelocateAction::Remove { from } => {
            if !store.remove_relocation(&from)? {
                bail!("no relocation for account '{from}'");
            }
            OperationResult {
                success: true,
                message: format!("Removed relocation for account '{from}'"),
            }
            .render(mode);
        },
        RelocateAction::List => MappingListResult::new("relocations", store.relocations()).render(mode),
    }

    Ok(())
}
