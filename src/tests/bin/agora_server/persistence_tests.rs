use tempfile::tempdir;

use super::*;

fn state_in(data_dir: &std::path::Path) -> AppState {
    AppState {
        data_dir: data_dir.to_path_buf(),
        applications: Arc::new(RwLock::new(Applications::new())),
        dev_token: None,
    }
}

#[test]
fn missing_file_loads_as_empty() {
    let temp = tempdir().expect("create temp dir");
    let apps = load_applications_from_disk(temp.path()).expect("load applications");
    assert!(apps.is_empty());
}

#[test]
fn persisted_applications_load_in_order() {
    let temp = tempdir().expect("create temp dir");
    let state = state_in(temp.path());

    let mut apps = Applications::new();
    apps.insert("web".to_string(), Application::named("web"));
    apps.insert("batch".to_string(), Application::named("batch"));
    persist_applications(&state, &apps).expect("persist applications");

    let loaded = load_applications_from_disk(temp.path()).expect("load applications");
    let names: Vec<&str> = loaded.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["web", "batch"]);

    let leftovers: Vec<_> = std::fs::read_dir(temp.path())
        .expect("read data dir")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains("tmp"))
        .collect();
    assert!(leftovers.is_empty(), "atomic write leaves no temp files");
}

#[test]
fn corrupt_file_is_an_error() {
    let temp = tempdir().expect("create temp dir");
    std::fs::write(applications_path(temp.path()), b"{not json").expect("write file");
    let err = load_applications_from_disk(temp.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("applications.json"));
}
