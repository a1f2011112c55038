use clap::Subcommand;

use crate::cli_commands::{ComponentSetArgs, EntryTarget};

#[derive(Subcommand)]
pub(crate) enum ComponentCommands {
    /// Create or update a component; only the given fields change
    Set(ComponentSetArgs),

    /// Remove a component with its ports and env vars
    Rm(EntryTarget),
}
