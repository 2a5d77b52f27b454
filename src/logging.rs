use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for the command-line front end.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`. Output goes to
/// stderr so it never mixes with listings on stdout. Set `STOREFRONT_LOG` to
/// a file path to write logs there instead.
///
/// Log files get unique names so concurrent invocations do not clobber each
/// other: `{path}.{timestamp}.{pid}`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let Some(file) = std::env::var("STOREFRONT_LOG")
        .ok()
        .and_then(|path| create_log_file(&path))
    else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_timer(fmt::time::UtcTime::rfc_3339()),
            )
            .init();
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// Create `{path}.{timestamp}.{pid}`. On failure a warning goes to stderr and
/// the caller logs to stderr instead.
fn create_log_file(path: &str) -> Option<std::fs::File> {
    let unique_path = log_file_name(path, std::process::id());
    match std::fs::File::create(&unique_path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Warning: Failed to create log file {}: {}", unique_path, e);
            None
        }
    }
}

fn log_file_name(path: &str, pid: u32) -> String {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", path, timestamp, pid)
}
