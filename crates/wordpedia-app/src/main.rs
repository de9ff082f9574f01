use std::sync::Arc;

use clap::Parser;
use tokio::signal;

pub mod backend;
pub mod cli;
pub mod controller;
pub mod events;
pub mod io;
pub mod logging;
pub mod lookup_context;
pub mod profile;
pub mod render;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::backend::GeminiBackendFactory;
use self::cli::Args;
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    logging::init_tracing(args.json_logs);

    if let Some(name) = &args.new_profile {
        let root = profile::wordpedia_root()?;
        profile::init_user_config(&root)?;
        let path = profile::add_profile_from_default(&root, name)?;
        println!("Created profile '{}' at {}", name, path.display());
        return Ok(());
    }

    let config = profile::load_config(&args.profile)?;
    tracing::info!("Loaded profile '{}'", args.profile);

    let channel_capacity = config.channel_capacity;
    let state = Arc::new(AppState::new(config));
    let input = io::spawn_stdin_reader()?;

    let controller = AppController::new(state, channel_capacity);
    let mut tasks = controller.spawn_tasks(Arc::new(GeminiBackendFactory), input, args.word);

    let mut outcome = Ok(());
    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task finished"),
                Ok(Err(e)) => {
                    tracing::error!("Task failed: {e:#}");
                    outcome = Err(e);
                }
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;

    outcome
}
