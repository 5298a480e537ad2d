//! buzzwin-server: engagement scoring HTTP service.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use buzzwin_core::config::{BuzzwinConfig, CliOverrides};
use buzzwin_core::constants::VERSION;
use buzzwin_core::tracing::init_tracing;
use buzzwin_server::{router, AppContext};

#[derive(Parser, Debug)]
#[command(name = "buzzwin-server")]
#[command(about = "Karma, levels, and ritual stats for Buzzwin")]
struct Args {
    /// Config file (defaults to ./buzzwin.toml when present)
    #[arg(long, env = "BUZZWIN_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    bind: Option<String>,

    /// SQLite database file
    #[arg(long)]
    db: Option<PathBuf>,

    /// Keep all data in memory, ignoring any configured database file
    #[arg(long, default_value_t = false)]
    in_memory: bool,

    /// Emit logs as JSON
    #[arg(long, env = "BUZZWIN_JSON_LOGS", default_value_t = false)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.json_logs);

    let overrides = CliOverrides {
        bind_addr: args.bind,
        db_path: args.db,
        in_memory: args.in_memory,
    };
    let config = BuzzwinConfig::load(args.config.as_deref(), Some(&overrides))
        .context("failed to load configuration")?;

    info!(
        version = VERSION,
        bind = %config.server.bind_addr,
        db = ?config.storage.db_path,
        "starting buzzwin-server"
    );

    let bind_addr = config.server.bind_addr.clone();
    let ctx = Arc::new(AppContext::new(config).context("failed to open storage")?);
    let app = router(ctx);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(addr = %bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
