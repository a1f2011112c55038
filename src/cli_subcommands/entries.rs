use clap::Subcommand;

use crate::cli_commands::EntryTarget;

#[derive(Subcommand)]
pub(crate) enum PortCommands {
    /// Set a port mapping
    Set {
        #[command(flatten)]
        target: EntryTarget,
        scheme: String,
        port: u16,
        /// Replace this existing scheme
        #[arg(long, value_name = "OLD")]
        replace: Option<String>,
    },

    /// Remove a port mapping
    Rm {
        #[command(flatten)]
        target: EntryTarget,
        scheme: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum EnvCommands {
    /// Set an environment variable
    Set {
        #[command(flatten)]
        target: EntryTarget,
        key: String,
        value: String,
        /// Replace this existing key
        #[arg(long, value_name = "OLD")]
        replace: Option<String>,
    },

    /// Remove an environment variable
    Rm {
        #[command(flatten)]
        target: EntryTarget,
        key: String,
    },
}
