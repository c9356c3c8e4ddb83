// Destiny Scanner - Web Server
// REST API with Axum

use anyhow::{Context, Result};
use clap::Parser;
use destiny_scanner::api::{router, AppState};
use destiny_scanner::{logging, LocalInsightProvider, ScannerConfig, VERSION};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Destiny Scanner HTTP API
#[derive(Parser)]
#[command(name = "destiny-server", version)]
struct Args {
    /// Configuration file (defaults to ./destiny-scanner.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override server.bind_addr
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ScannerConfig::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }
    let addr = config.bind_addr()?;

    logging::init(&config.logging)?;

    println!("🌐 Destiny Scanner - Web Server v{}", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let state = AppState::new(Arc::new(LocalInsightProvider::new()), &config);
    let app = router(state, &config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    info!(%addr, cors_permissive = config.server.cors_permissive, "server listening");
    println!("\n🚀 Server running on http://{}", addr);
    println!("   API: http://{}/api/numerology/1990-05-07", addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .context("server stopped")?;

    Ok(())
}
