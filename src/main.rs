//! Portfolio edge service binary.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌────────────────────────────────────────────────┐
//!                  │                PORTFOLIO EDGE                  │
//!                  │                                                │
//!   Request        │  ┌──────────┐   ┌─────────┐   ┌────────────┐  │
//!   ───────────────┼─▶│ routing  │──▶│  http   │──▶│  content   │  │
//!                  │  │ decision │   │ server  │   │ assembly   │  │
//!                  │  └────┬─────┘   └─────────┘   └─────┬──────┘  │
//!                  │       │ redirect                    │         │
//!   Response       │       ▼                             ▼         │
//!   ◀──────────────┼── pass / rewrite / 30x      manual + remote   │
//!                  │                             + prebuilt cache  │
//!                  │                                                │
//!                  │  Cross-cutting: config, observability          │
//!                  └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use portfolio_edge::config::{load_config, SiteConfig};
use portfolio_edge::content::{assemble, ArxivClient, PrebuiltCache};
use portfolio_edge::http::HttpServer;
use portfolio_edge::observability::init_logging;

#[derive(Debug, Parser)]
#[command(name = "portfolio-edge", about = "Multi-tenant portfolio edge service")]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the content API and host routing (default).
    Serve,

    /// Aggregate every content kind once and write the prebuilt caches.
    Prebuild,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };

    init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        tenants = config.hosts.tenants.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Prebuild => prebuild(config).await,
    }
}

async fn serve(config: SiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn prebuild(config: SiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    let cache = PrebuiltCache::new(config.content.prebuilt_dir.clone());
    let arxiv = ArxivClient::new(
        &config.arxiv,
        std::time::Duration::from_secs(config.timeouts.fetch_secs),
    )?;

    assemble::prebuild(&config.content, &cache, &arxiv).await?;

    tracing::info!("Prebuild complete");
    Ok(())
}
