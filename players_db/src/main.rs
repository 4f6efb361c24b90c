use players_common::config::{ConfigError, DatabaseConfig, ServerConfig};
use players_db::db;
use thiserror::Error;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    players_common::init();

    tracing::info!("Starting players api server...");

    if let Err(err) = run().await {
        tracing::error!(error = %err, "players api server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let database = DatabaseConfig::from_env()?;
    let server = ServerConfig::from_env()?;

    let pool = db::connect(&database.dsn).await?;
    db::init_schema(&pool).await?;

    tracing::info!("Database connection established.");

    players_common::server::serve(players_db::app(pool), server).await?;

    Ok(())
}
