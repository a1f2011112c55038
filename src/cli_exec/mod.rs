use anyhow::{Context, Result};

use agora::remote::RemoteClient;
use agora::sync::Synchronizer;

use crate::Commands;
use crate::cli_runtime::{GlobalArgs, connect, load_config};

mod applications;
mod components;
mod dispatch;
mod entries;

pub(super) fn handle_command(global: &GlobalArgs, command: Commands) -> Result<()> {
    dispatch::handle_command(global, command)
}

/// Selects `app`, then the component named `component` inside it.
fn focus_component(
    sync: &mut Synchronizer<RemoteClient>,
    app: &str,
    component: &str,
) -> Result<()> {
    sync.select_application(app)?;
    sync.select_component(component)
        .with_context(|| format!("in application '{}'", app))?;
    Ok(())
}
