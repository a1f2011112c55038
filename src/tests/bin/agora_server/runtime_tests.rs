use std::path::PathBuf;

use tempfile::tempdir;

use super::app::build_state;
use super::*;

fn args_with_data_dir(data_dir: PathBuf) -> Args {
    Args {
        addr: "127.0.0.1:0".parse().expect("parse socket addr"),
        addr_file: None,
        data_dir,
        dev_token: None,
    }
}

#[test]
fn args_default_to_open_access() {
    let args = Args::try_parse_from(["agora-server"]).expect("parse args");
    assert_eq!(args.dev_token, None);
    assert_eq!(args.data_dir, PathBuf::from("./agora-data"));
}

#[tokio::test]
async fn build_state_loads_persisted_applications() {
    let temp = tempdir().expect("create temp dir");
    std::fs::write(
        temp.path().join("applications.json"),
        br#"[{"name":"web","components":{}},{"name":"batch"}]"#,
    )
    .expect("seed applications");

    let mut args = args_with_data_dir(temp.path().to_path_buf());
    args.dev_token = Some("secret".to_string());
    let state = build_state(&args).expect("build state");

    let apps = state.applications.read().await;
    let names: Vec<&str> = apps.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["web", "batch"]);
    assert_eq!(state.dev_token.as_deref(), Some("secret"));
}

#[tokio::test]
async fn ephemeral_bind_publishes_the_real_port() {
    let temp = tempdir().expect("create temp dir");
    let addr_file = temp.path().join("run").join("addr");
    std::fs::create_dir_all(temp.path().join("run")).expect("create run dir");
    std::fs::write(&addr_file, "stale").expect("seed addr file");

    let (_listener, local_addr) = bind("127.0.0.1:0".parse().expect("parse socket addr"))
        .await
        .expect("bind");
    assert_ne!(local_addr.port(), 0);

    publish_addr(&addr_file, local_addr).expect("publish addr");
    let written = std::fs::read_to_string(&addr_file).expect("read addr file");
    assert_eq!(written, local_addr.to_string());
}
