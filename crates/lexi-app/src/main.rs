use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use lexi_config::Config;
use tokio::signal;

mod command;
mod controller;
mod events;
mod io;
mod logging;
mod profile;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about = "Learn words from video captions", long_about = None)]
struct Args {
    /// Config profile to load
    #[arg(short, long, default_value = "main")]
    profile: String,

    /// Override the backend URL from the profile
    #[arg(long)]
    backend_url: Option<String>,

    /// Log filter, e.g. `info` or `lexi_dictionary=debug` (RUST_LOG wins)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    logging::init_tracing(&args.log_level);

    if let Err(e) = profile::init_user_config() {
        tracing::warn!("Could not initialize user config: {:#}", e);
    }
    let mut config = profile::load_user_profile(&args.profile).unwrap_or_else(|e| {
        tracing::warn!("Failed to load profile {}: {:#}, using defaults", args.profile, e);
        Config::new()
    });
    if let Some(url) = args.backend_url {
        config.backend.url = url;
    }

    let state = Arc::new(AppState::new(config)?);
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks().await;
    let cancel = controller.cancel_token();

    tokio::select! {
        result = signal::ctrl_c() => match result {
            Ok(()) => tracing::info!("Shutdown requested"),
            Err(e) => tracing::error!("Failed to listen for Ctrl+C: {e}"),
        },
        _ = cancel.cancelled() => {}
        Some(result) = tasks.join_next() => match result {
            Ok(Ok(())) => tracing::warn!("A task exited early"),
            Ok(Err(e)) => tracing::error!("Task failed: {e:#}"),
            Err(e) => tracing::error!("Task panicked: {e}"),
        },
    }

    controller.shutdown();

    let drain = async {
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::error!("Task failed during shutdown: {e:#}"),
                Err(e) => tracing::error!("Task panicked during shutdown: {e}"),
            }
        }
    };
    if tokio::time::timeout(Duration::from_secs(2), drain).await.is_err() {
        tracing::warn!("Tasks did not stop in time, aborting");
        tasks.abort_all();
    }

    Ok(())
}
