use crate::app::{build_router, AppState};
use crate::cli::ServeCommand;
use crate::config::Config;
use anyhow::{Context, Result};
use cadence_core::db;
use cadence_core::repository::SqliteRepository;
use cadence_core::service::TaskService;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn serve(command: ServeCommand) -> Result<()> {
    let mut config = Config::new().context("invalid configuration")?;
    config.apply_overrides(&command);

    let pool = db::establish_connection(&config.dbfile, config.max_connections)
        .await
        .with_context(|| format!("failed to open database '{}'", config.dbfile))?;
    info!(dbfile = %config.dbfile, "database ready");

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, web_dir = %config.web_dir, "listening");

    let state = Arc::new(AppState::new(config, TaskService::new(SqliteRepository::new(pool))));
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
