use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global `tracing` subscriber. Logs go to stderr so stdout
/// stays clean for frames and reports.
///
/// The filter comes from `RUST_LOG` (default `info`); set
/// `FLEETBRIDGE_LOG_JSON=1` for JSON lines.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let use_json = std::env::var("FLEETBRIDGE_LOG_JSON")
        .map(|value| value == "1")
        .unwrap_or(false);

    if use_json {
        let _ = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .json()
            .with_writer(std::io::stderr)
            .try_init();
    } else {
        let _ = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
