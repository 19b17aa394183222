//! Papo TUI entry point.

use std::path::PathBuf;

use clap::Parser;
use papo_client::ClientId;
use papo_tui::{Runtime, register};
use tracing_subscriber::EnvFilter;

const DEFAULT_SERVER: &str = "wss://worker-production-47e8.up.railway.app/ws";

/// Papo terminal chat client
#[derive(Parser, Debug)]
#[command(name = "papo")]
#[command(about = "Terminal client for the papo chat server")]
#[command(version)]
struct Args {
    /// WebSocket endpoint base (the client id is appended to the path)
    ///
    /// Defaults to the PAPO_SERVER environment variable, then the public
    /// server.
    #[arg(short, long)]
    server: Option<String>,

    /// Append logs to this file (the terminal is busy rendering)
    ///
    /// Filtered by PAPO_LOG, e.g. PAPO_LOG=papo_client=debug.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_env("PAPO_LOG"))
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let base = args
        .server
        .or_else(|| std::env::var("PAPO_SERVER").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());

    let client_id = ClientId::generate();
    let endpoint = papo_client::endpoint(&base, &client_id);
    register::spawn(client_id, endpoint.clone());

    let runtime = Runtime::new(endpoint)?;
    Ok(runtime.run().await?)
}
