use tempfile::tempdir;

use agora::model::Component;

use super::*;

fn valid_app(name: &str) -> Application {
    let mut c = Component::named("api");
    c.cpus = 1;
    c.mem = 256;
    c.dist_url = "hdfs://namenode/apps/api.jar".to_string();
    c.version = "0.0.1".to_string();
    c.ports.insert("https".to_string(), 443);
    c.ports.insert("http".to_string(), 80);
    c.env.insert("Z".to_string(), "1".to_string());
    c.env.insert("A".to_string(), "2".to_string());

    let mut app = Application::named(name);
    app.components.insert("api".to_string(), c);
    app
}

fn state_in(data_dir: &std::path::Path) -> Arc<AppState> {
    Arc::new(AppState {
        data_dir: data_dir.to_path_buf(),
        applications: Arc::new(RwLock::new(Applications::new())),
        dev_token: None,
    })
}

#[test]
fn canonicalize_sorts_entries_but_keeps_component_order() {
    let mut app = valid_app("web");
    let mut worker = app.components["api"].clone();
    worker.name = "worker".to_string();
    app.components.shift_insert(0, "worker".to_string(), worker);

    let app = canonicalize(app);
    let components: Vec<&str> = app.components.keys().map(String::as_str).collect();
    assert_eq!(components, vec!["worker", "api"]);
    let ports: Vec<&str> = app.components["api"].ports.keys().map(String::as_str).collect();
    assert_eq!(ports, vec!["http", "https"]);
    let env: Vec<&str> = app.components["api"].env.keys().map(String::as_str).collect();
    assert_eq!(env, vec!["A", "Z"]);
}

#[tokio::test]
async fn store_application_persists_canonical_form() {
    let temp = tempdir().expect("create temp dir");
    let state = state_in(temp.path());

    let Ok(stored) = store_application(&state, valid_app("web")).await else {
        panic!("store application");
    };
    assert_eq!(stored.components["api"].ports.get_index(0).map(|(k, _)| k.as_str()), Some("http"));

    let on_disk = load_applications_from_disk(temp.path()).expect("load applications");
    assert_eq!(on_disk.get("web"), Some(&stored));
}

#[tokio::test]
async fn invalid_application_is_rejected_without_changes() {
    let temp = tempdir().expect("create temp dir");
    let state = state_in(temp.path());

    let mut app = valid_app("web");
    app.components["api"].cpus = 0;
    let Err(resp) = store_application(&state, app).await else {
        panic!("invalid application was stored");
    };
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(state.applications.read().await.is_empty());
    assert!(!applications_path(temp.path()).exists());
}

#[tokio::test]
async fn delete_missing_application_is_not_found() {
    let temp = tempdir().expect("create temp dir");
    let state = state_in(temp.path());

    let Err(resp) = delete_application(State(state.clone()), Path("web".to_string())).await else {
        panic!("deleted a missing application");
    };
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    assert!(store_application(&state, valid_app("web")).await.is_ok());
    let Ok(status) = delete_application(State(state.clone()), Path("web".to_string())).await else {
        panic!("delete application");
    };
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(load_applications_from_disk(temp.path()).expect("load").is_empty());
}

#[tokio::test]
async fn put_requires_matching_names() {
    let temp = tempdir().expect("create temp dir");
    let state = state_in(temp.path());

    let Err(resp) = put_application(
        State(state.clone()),
        Path("other".to_string()),
        Json(valid_app("web")),
    )
    .await
    else {
        panic!("stored under a mismatched name");
    };
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
