//! Server initialization and startup logic for jobboard.

use std::sync::{Arc, OnceLock};

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobboard_api::{load_store, ApiConfig, ApiServer, AppState, JobStore};
use jobboard_config::{Config, LoggingConfig};

/// Flushes buffered file log lines on drop, so it lives for the whole process.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Keep the file writer's guard alive. Fails if one is already held.
fn keep_log_guard(guard: WorkerGuard) -> Result<(), Box<dyn std::error::Error>> {
    LOG_GUARD
        .set(guard)
        .map_err(|_| "file logging is already initialized".into())
}

/// Initialize tracing with console output and, when configured, a daily
/// rolling log file.
///
/// `RUST_LOG` takes precedence over `logging.level`.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file_layer = match &logging.file_dir {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("jobboard")
                .filename_suffix("log")
                .max_log_files(30)
                .build(log_dir)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            keep_log_guard(guard)?;

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Run the server in foreground.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting jobboard v{}", env!("CARGO_PKG_VERSION"));

    let store = load_store(&config.store.seed_path, config.store.seed_required).await?;
    info!("Job store ready with {} jobs", store.len().await);

    let state = Arc::new(AppState::new(Arc::new(store)));
    let server = ApiServer::new(
        ApiConfig::new(config.server.host, config.server.port),
        state,
    );

    server.run().await
}
