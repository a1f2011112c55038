use super::applications::{
    handle_apps_command, handle_remove_command, handle_rename_command, handle_show_command,
};
use super::components::handle_component_command;
use super::entries::{handle_env_command, handle_port_command};
use super::*;

pub(super) fn handle_command(global: &GlobalArgs, command: Commands) -> Result<()> {
    let cfg = load_config(global)?;
    let mut sync = connect(&cfg)?;
    match command {
        Commands::Apps(args) => handle_apps_command(&sync, args.json)?,
        Commands::Show(args) => handle_show_command(&sync, &args.app, args.json)?,
        Commands::Rm(args) => handle_remove_command(&mut sync, &args.app)?,
        Commands::Rename(args) => handle_rename_command(&mut sync, &args.app, &args.new_name)?,
        Commands::Component { command } => {
            handle_component_command(&mut sync, command, cfg.quiet_period())?
        }
        Commands::Port { command } => handle_port_command(&mut sync, command)?,
        Commands::Env { command } => handle_env_command(&mut sync, command)?,
    }

    Ok(())
}
