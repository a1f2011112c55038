use clap::Subcommand;

mod cli_commands;
mod cli_exec;
mod cli_runtime;
mod cli_subcommands;

use self::cli_commands::{AppsArgs, RemoveAppArgs, RenameArgs, ShowArgs};
use self::cli_subcommands::{ComponentCommands, EnvCommands, PortCommands};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List applications
    Apps(AppsArgs),

    /// Show an application with its components
    Show(ShowArgs),

    /// Remove an application
    Rm(RemoveAppArgs),

    /// Rename an application
    Rename(RenameArgs),

    /// Create, edit or remove components
    Component {
        #[command(subcommand)]
        command: ComponentCommands,
    },

    /// Set or remove component port mappings
    Port {
        #[command(subcommand)]
        command: PortCommands,
    },

    /// Set or remove component environment variables
    Env {
        #[command(subcommand)]
        command: EnvCommands,
    },
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
