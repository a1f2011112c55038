use super::*;

pub(crate) fn applications_path(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join("applications.json")
}

pub(crate) fn load_applications_from_disk(data_dir: &std::path::Path) -> Result<Applications> {
    let path = applications_path(data_dir);
    if !path.exists() {
        return Ok(Applications::new());
    }
    let bytes = std::fs::read(&path).with_context(|| format!("read {}", path.display()))?;
    let list: Vec<Application> =
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
    Ok(list.into_iter().map(|a| (a.name.clone(), a)).collect())
}

pub(crate) fn persist_applications(state: &AppState, apps: &Applications) -> Result<()> {
    let list: Vec<&Application> = apps.values().collect();
    let bytes = serde_json::to_vec_pretty(&list).context("serialize applications")?;
    write_atomic_overwrite(&applications_path(&state.data_dir), &bytes)
        .context("write applications.json")?;
    Ok(())
}

pub(crate) fn write_atomic_overwrite(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir {}", parent.display()))?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    std::fs::write(&tmp, bytes).with_context(|| format!("write {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/bin/agora_server/persistence_tests.rs"]
mod tests;
