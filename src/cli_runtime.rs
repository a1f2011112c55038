use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser};

use agora::config::ClientConfig;
use agora::remote::RemoteClient;
use agora::sync::Synchronizer;

use crate::Commands;

#[derive(Parser)]
#[command(name = "agora")]
#[command(about = "Manage applications in an agora application store", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Client config file (defaults to ./agora.json when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Store base URL (overrides the config file)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Bearer token (overrides the config file)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Log more (repeat for trace output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);
    crate::cli_exec::handle_command(&cli.global, cli.command)
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

pub(crate) fn load_config(global: &GlobalArgs) -> Result<ClientConfig> {
    let cfg = ClientConfig::load(global.config.as_deref())?;
    Ok(cfg.with_overrides(global.url.clone(), global.token.clone()))
}

/// Connects to the configured store and loads the application list.
pub(crate) fn connect(cfg: &ClientConfig) -> Result<Synchronizer<RemoteClient>> {
    let client = RemoteClient::new(cfg.base_url.clone(), cfg.token.clone())?;
    Synchronizer::connect(client).with_context(|| format!("connect to {}", cfg.base_url))
}
