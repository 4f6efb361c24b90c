use std::sync::Arc;

use players_common::config::{ConfigError, ServerConfig};
use players_memory::store::PlayerStore;
use thiserror::Error;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    players_common::init();

    tracing::info!("Starting in-memory players api server...");

    if let Err(err) = run().await {
        tracing::error!(error = %err, "players api server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let server = ServerConfig::from_env()?;
    let store = Arc::new(PlayerStore::new());

    players_common::server::serve(players_memory::app(store), server).await?;

    Ok(())
}
