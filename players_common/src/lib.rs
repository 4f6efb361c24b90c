//! Pieces shared by both player services: configuration, the error type
//! returned by handlers, logging setup, the health route and the server loop.

pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod server;

pub use error::ApiError;

/// Process start-up for both binaries: read `.env`, then install logging so
/// a `RUST_LOG` from the file takes effect, then report how the file load
/// went.
pub fn init() {
    let (dotenv, filter) = load_environment(config::load_dotenv);
    logging::init(filter);
    config::log_dotenv(&dotenv);
}

/// The log filter is only built once the environment file has been applied.
fn load_environment(
    load: impl FnOnce() -> config::DotenvResult,
) -> (config::DotenvResult, tracing_subscriber::EnvFilter) {
    let dotenv = load();
    (dotenv, logging::env_filter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_sees_rust_log_from_env_file() {
        let dir = std::env::temp_dir().join(format!("players-common-log-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(".env");
        std::fs::write(&path, "RUST_LOG=players_common=trace\n").unwrap();

        let (dotenv, filter) = load_environment(|| config::load_dotenv_from(&path));
        assert!(dotenv.is_ok());

        // An outer RUST_LOG wins over the file; either way the filter must
        // reflect the variable as it stands after loading.
        let rust_log = std::env::var("RUST_LOG").unwrap();
        assert_eq!(
            filter.to_string(),
            tracing_subscriber::EnvFilter::new(&rust_log).to_string()
        );
    }
}
