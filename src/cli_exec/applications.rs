use agora::model::Application;

use super::*;

pub(super) fn handle_apps_command(sync: &Synchronizer<RemoteClient>, json: bool) -> Result<()> {
    let apps = sync.editor().applications();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(apps).context("serialize applications json")?
        );
        return Ok(());
    }

    if apps.is_empty() {
        println!("No applications");
    }
    for app in apps {
        println!("{} ({} components)", app.name, app.components.len());
    }
    Ok(())
}

pub(super) fn handle_show_command(
    sync: &Synchronizer<RemoteClient>,
    name: &str,
    json: bool,
) -> Result<()> {
    let app = sync
        .editor()
        .application(name)
        .with_context(|| format!("application '{}' not found", name))?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(app).context("serialize application json")?
        );
    } else {
        print_application(app);
    }
    Ok(())
}

fn print_application(app: &Application) {
    println!("{}", app.name);
    for c in app.components.values() {
        println!(
            "  {} {} {} cpus={} mem={}MB",
            c.name, c.version, c.component_type, c.cpus, c.mem
        );
        if let Some(disk) = c.disk_space {
            println!("    disk_space: {}MB", disk);
        }
        println!("    dist: {} ({})", c.dist_url, c.distribution.label());
        if let Some(cmd) = &c.command {
            println!("    command: {}", cmd);
        }
        for (scheme, port) in &c.ports {
            println!("    port {}: {}", scheme, port);
        }
        for (key, value) in &c.env {
            println!("    env {}={}", key, value);
        }
    }
}

pub(super) fn handle_remove_command(
    sync: &mut Synchronizer<RemoteClient>,
    name: &str,
) -> Result<()> {
    sync.remove_application(name)?;
    println!("Removed application {}", name);
    Ok(())
}

pub(super) fn handle_rename_command(
    sync: &mut Synchronizer<RemoteClient>,
    name: &str,
    new_name: &str,
) -> Result<()> {
    sync.select_application(name)?;
    sync.editor_mut().set_application_name(new_name)?;
    sync.save_application()?;
    println!("Renamed application {} -> {}", name, new_name);
    Ok(())
}
