use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize tracing.
///
/// The filter comes from `RUST_LOG`, falling back to the configured level.
/// Set `CHECKMATE_LOG` to a file path to write logs there instead of stderr.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    if let Some(log_path) = std::env::var_os("CHECKMATE_LOG") {
        match std::fs::File::create(&log_path) {
            Ok(file) => {
                let file_layer = fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true);
                let _ = registry.with(file_layer).try_init();
                return;
            }
            Err(err) => {
                eprintln!(
                    "Warning: Failed to create log file {}: {}",
                    log_path.to_string_lossy(),
                    err
                );
            }
        }
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());
    let _ = registry.with(stderr_layer).try_init();
}
