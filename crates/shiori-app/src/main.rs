use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use shiori_config::Config;
use shiori_journal::{JournalStore, Session};
use tokio::signal;

mod controller;
mod events;
mod render;
mod state;
mod ui;
mod view;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

/// Personal reading journal with dictionary lookups and translations
#[derive(Parser)]
#[command(name = "shiori", version, about)]
struct Args {
    /// Override the journal data file location
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Tracing filter directive, e.g. "debug" (falls back to RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let filter = match &args.log_filter {
        Some(directive) => tracing_subscriber::EnvFilter::new(directive),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::new();
    if let Some(path) = args.data_file {
        config.storage.data_file = path;
    }

    let data_file = config.storage.data_file.clone();
    let session = Session::open(JournalStore::new(&data_file))
        .with_context(|| format!("failed to load journal from {}", data_file.display()))?;
    tracing::info!(books = session.journal().books.len(), "journal loaded");

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(session);

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    tokio::select! {
        _ = shutdown => {
            tracing::info!("shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => tracing::error!("task exited: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    Ok(())
}
