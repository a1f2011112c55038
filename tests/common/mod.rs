use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use agora::model::{Application, Component};

pub const TOKEN: &str = "dev";

pub struct ServerGuard {
    pub base_url: String,
    pub token: Option<String>,
    _data_dir: Option<tempfile::TempDir>,
    child: Child,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Spawns a server on a fresh data dir, requiring [`TOKEN`].
pub fn spawn_server() -> Result<ServerGuard> {
    let data_dir = tempfile::tempdir().context("create server tempdir")?;
    let mut guard = spawn_server_in(data_dir.path(), Some(TOKEN))?;
    guard._data_dir = Some(data_dir);
    Ok(guard)
}

pub fn spawn_server_in(data_dir: &Path, token: Option<&str>) -> Result<ServerGuard> {
    let addr_file = data_dir.join("addr.txt");
    let _ = std::fs::remove_file(&addr_file);

    let mut args = vec![
        "--addr".to_string(),
        "127.0.0.1:0".to_string(),
        "--addr-file".to_string(),
        addr_file.display().to_string(),
        "--data-dir".to_string(),
        data_dir.display().to_string(),
    ];
    if let Some(token) = token {
        args.push("--dev-token".to_string());
        args.push(token.to_string());
    }

    let child = Command::new(env!("CARGO_BIN_EXE_agora-server"))
        .args(&args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn agora-server")?;

    let base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&base_url)?;

    Ok(ServerGuard {
        base_url,
        token: token.map(str::to_string),
        _data_dir: None,
        child,
    })
}

fn read_addr_file(addr_file: &Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("server did not become healthy at {}/healthz", base_url);
        }
        match client.get(format!("{}/healthz", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

#[allow(dead_code)]
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// `web` with a single valid `api` component exposing `http:8000`.
#[allow(dead_code)]
pub fn web_application() -> Application {
    let mut api = Component::named("api");
    api.cpus = 1;
    api.mem = 256;
    api.dist_url = "hdfs://namenode/apps/api.jar".to_string();
    api.version = "0.0.1".to_string();
    api.ports.insert("http".to_string(), 8000);

    let mut app = Application::named("web");
    app.components.insert("api".to_string(), api);
    app
}
