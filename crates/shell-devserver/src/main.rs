//! `shell-devserver [PORT] [--root DIR]`

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shell_devserver::config::PORT_ENV;

#[derive(Debug, Parser)]
#[command(name = "shell-devserver", version, about = "Serve the dashboard shell with SPA fallback")]
struct Cli {
    /// Port to listen on. The PORT environment variable takes precedence.
    port: Option<u16>,

    /// Document root.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: std::net::IpAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shell_devserver=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let port = shell_devserver::port(std::env::var(PORT_ENV).ok().as_deref(), cli.port)?;
    let root = cli
        .root
        .canonicalize()
        .with_context(|| format!("document root {} not found", cli.root.display()))?;

    let addr = SocketAddr::new(cli.host, port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(root = %root.display(), "SPA dev server running at http://localhost:{port}/");
    axum::serve(listener, shell_devserver::app(root))
        .await
        .context("server error")?;
    Ok(())
}
