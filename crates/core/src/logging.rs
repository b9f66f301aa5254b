use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber for `component`.
///
/// Everything goes to `~/.abmaker/logs/`; with `to_stderr` the same events are
/// also echoed to the terminal. Keep the returned guard alive for the whole
/// run, dropping it flushes and stops the background writer.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let log_dir = dirs::home_dir()
        .unwrap_or_else(|| ".".into())
        .join(".abmaker/logs");
    let _ = std::fs::create_dir_all(&log_dir);

    // One file per component and day, e.g. cli.2026-10-16
    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins; refresh/export progress is logged at info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // File layer: plain text, module targets kept for grepping
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if to_stderr {
        // Terminal layer: colored, without targets to keep lines short
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    guard
}
