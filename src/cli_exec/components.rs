use std::time::{Duration, Instant};

use agora::form::{ComponentForm, Field};
use agora::model::Component;

use crate::cli_commands::ComponentSetArgs;
use crate::cli_subcommands::ComponentCommands;

use super::*;

pub(super) fn handle_component_command(
    sync: &mut Synchronizer<RemoteClient>,
    command: ComponentCommands,
    quiet_period: Duration,
) -> Result<()> {
    match command {
        ComponentCommands::Set(args) => handle_component_set(sync, args, quiet_period),
        ComponentCommands::Rm(target) => {
            sync.select_application(&target.app)?;
            sync.remove_component(&target.component)?;
            println!("Removed component {}/{}", target.app, target.component);
            Ok(())
        }
    }
}

fn handle_component_set(
    sync: &mut Synchronizer<RemoteClient>,
    args: ComponentSetArgs,
    quiet_period: Duration,
) -> Result<()> {
    let edits = field_edits(&args);
    for (field, text) in &edits {
        if let Err(msg) = field.write(&mut Component::default(), text) {
            anyhow::bail!("--{}: {}", field_flag(*field), msg);
        }
    }

    if sync.editor().application(&args.app).is_some() {
        sync.select_application(&args.app)?;
    } else if args.create_app {
        sync.create_application();
        sync.editor_mut().set_application_name(args.app.as_str())?;
    } else {
        anyhow::bail!(
            "application '{}' not found (pass --create-app to create it)",
            args.app
        );
    }

    let exists = sync
        .editor()
        .application(&args.app)
        .is_some_and(|a| a.components.contains_key(&args.component));
    if exists {
        sync.select_component(&args.component)?;
    } else {
        sync.add_component_draft();
    }

    // Fields go through the same commit triggers as interactive edits; flushing
    // commits the changed ones without waiting out the quiet period.
    let mut form = ComponentForm::new(sync.editor().selected_component().value(), quiet_period);
    let now = Instant::now();
    if !exists {
        form.input(Field::Name, args.component.as_str(), now);
    }
    for (field, text) in edits {
        form.input(field, text, now);
    }
    let commits = form.flush();

    let mut enum_changed = false;
    let working = sync.editor_mut().component_mut();
    if let Some(d) = args.distribution.filter(|d| *d != working.distribution) {
        working.distribution = d;
        enum_changed = true;
    }
    if let Some(t) = args.component_type.filter(|t| *t != working.component_type) {
        working.component_type = t;
        enum_changed = true;
    }

    if commits.is_empty() {
        if !enum_changed {
            println!("Nothing to change for {}/{}", args.app, args.component);
            return Ok(());
        }
        sync.save_component()?;
    } else {
        sync.commit_fields(&commits)?;
    }

    let editor = sync.editor();
    println!(
        "Saved component {}/{}",
        editor.selected_application_name().unwrap_or(args.app.as_str()),
        editor.selected_component().name()
    );
    Ok(())
}

fn field_edits(args: &ComponentSetArgs) -> Vec<(Field, String)> {
    [
        (Field::Name, &args.rename),
        (Field::Cpus, &args.cpus),
        (Field::Mem, &args.mem),
        (Field::DiskSpace, &args.disk_space),
        (Field::DistUrl, &args.dist_url),
        (Field::Command, &args.command),
        (Field::Version, &args.version),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
    .collect()
}

fn field_flag(field: Field) -> String {
    match field {
        Field::Name => "rename".to_string(),
        other => other.as_str().replace('_', "-"),
    }
}
