use agora::model::{EnvVar, PortMapping};
use agora::tracking::Tracked;

use crate::cli_subcommands::{EnvCommands, PortCommands};

use super::*;

pub(super) fn handle_port_command(
    sync: &mut Synchronizer<RemoteClient>,
    command: PortCommands,
) -> Result<()> {
    match command {
        PortCommands::Set {
            target,
            scheme,
            port,
            replace,
        } => {
            focus_component(sync, &target.app, &target.component)?;
            match replace {
                Some(old) => {
                    let current = sync
                        .editor()
                        .selected_component()
                        .value()
                        .ports
                        .get(&old)
                        .copied()
                        .with_context(|| format!("port '{}' not found", old))?;
                    let mut entry = Tracked::saved(PortMapping::new(old, current));
                    *entry.value_mut() = PortMapping::new(scheme.as_str(), port);
                    sync.save_port_entry(&mut entry)?;
                }
                None => sync.save_port_mapping(&scheme, port)?,
            }
            println!(
                "Set port {}={} on {}/{}",
                scheme, port, target.app, target.component
            );
        }
        PortCommands::Rm { target, scheme } => {
            focus_component(sync, &target.app, &target.component)?;
            sync.delete_port_mapping(&scheme)?;
            println!(
                "Removed port {} from {}/{}",
                scheme, target.app, target.component
            );
        }
    }
    Ok(())
}

pub(super) fn handle_env_command(
    sync: &mut Synchronizer<RemoteClient>,
    command: EnvCommands,
) -> Result<()> {
    match command {
        EnvCommands::Set {
            target,
            key,
            value,
            replace,
        } => {
            focus_component(sync, &target.app, &target.component)?;
            match replace {
                Some(old) => {
                    let current = sync
                        .editor()
                        .selected_component()
                        .value()
                        .env
                        .get(&old)
                        .cloned()
                        .with_context(|| format!("env var '{}' not found", old))?;
                    let mut entry = Tracked::saved(EnvVar::new(old, current));
                    *entry.value_mut() = EnvVar::new(key.as_str(), value.as_str());
                    sync.save_env_entry(&mut entry)?;
                }
                None => sync.save_env_var(&key, &value)?,
            }
            println!("Set env {} on {}/{}", key, target.app, target.component);
        }
        EnvCommands::Rm { target, key } => {
            focus_component(sync, &target.app, &target.component)?;
            sync.delete_env_var(&key)?;
            println!(
                "Removed env {} from {}/{}",
                key, target.app, target.component
            );
        }
    }
    Ok(())
}
