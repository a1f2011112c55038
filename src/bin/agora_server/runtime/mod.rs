use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

mod app;

use self::app::{build_app_router, build_state};
use super::persistence::write_atomic_overwrite;

#[derive(Parser)]
#[command(name = "agora-server")]
#[command(about = "Agora application store (development)", long_about = None)]
pub(super) struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:9292")]
    pub(super) addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    pub(super) addr_file: Option<PathBuf>,

    /// Data directory; applications are kept in applications.json
    #[arg(long, default_value = "./agora-data")]
    pub(super) data_dir: PathBuf,

    /// Require this bearer token on /api routes
    #[arg(long)]
    pub(super) dev_token: Option<String>,
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    std::fs::create_dir_all(&args.data_dir)
        .with_context(|| format!("create data dir {}", args.data_dir.display()))?;

    let state = build_state(&args).context("load applications from disk")?;
    let app = build_app_router(state);
    let (listener, local_addr) = bind(args.addr).await?;
    tracing::info!(addr = %local_addr, data_dir = %args.data_dir.display(), "agora-server listening");
    if let Some(addr_file) = &args.addr_file {
        publish_addr(addr_file, local_addr)?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("agora-server stopped");
    Ok(())
}

async fn bind(addr: SocketAddr) -> Result<(tokio::net::TcpListener, SocketAddr)> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {}", addr))?;
    let local_addr = listener.local_addr().context("read listener local addr")?;
    Ok((listener, local_addr))
}

/// Writes the bound address to `addr_file`; readers never observe a partial address.
fn publish_addr(addr_file: &Path, local_addr: SocketAddr) -> Result<()> {
    write_atomic_overwrite(addr_file, local_addr.to_string().as_bytes())
        .with_context(|| format!("write addr file {}", addr_file.display()))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

#[cfg(test)]
#[path = "../../../tests/bin/agora_server/runtime_tests.rs"]
mod tests;
