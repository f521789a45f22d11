mod draft;
mod error;
mod routes;
mod setup;


use anyhow::{Context, Result};
use axum::routing::{delete, get};
use axum::Router;
use clap::Parser;
use notesapp::config::NotesConfig;
use notesapp::store::fs::FileStore;
use notesapp::store::DataStore;
use routes::AppState;
use setup::{init_logging, Cli};
use std::sync::Arc;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.resolve_config()?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(serve(config))
}

pub fn router(store: Arc<dyn DataStore>) -> Router {
    let state = Arc::new(AppState { store });

    Router::new()
        .route(
            "/api/notes",
            get(routes::list_notes).post(routes::create_note),
        )
        .route("/api/notes/:id", delete(routes::delete_note))
        .with_state(state)
}

async fn serve(config: NotesConfig) -> Result<()> {
    let store = Arc::new(FileStore::new(config.data_file.clone()));

    // Refuse to start on a data file we could not serve from anyway.
    let existing = {
        let store = Arc::clone(&store);
        tokio::task::spawn_blocking(move || store.list_notes())
            .await
            .context("Startup check did not complete")?
            .with_context(|| format!("Cannot read notes from {}", config.data_file.display()))?
    };
    log::info!(
        "Serving {} notes from {}",
        existing.len(),
        config.data_file.display()
    );

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    log::info!("App listening on http://{}", addr);

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Could not listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
