use tracing_subscriber::{fmt, EnvFilter};

/// Crates whose events follow the configured level. Dependencies stay at
/// `warn` so a `debug` board run is not drowned in library noise.
const BOARD_TARGETS: [&str; 3] = ["vc_core", "vc_telemetry", "velocity"];

/// Fallback filter directives used when `RUST_LOG` is unset.
///
/// A bare level such as `"debug"` is scoped to the board crates. A value that
/// already looks like a directive list (`"vc_core=trace,warn"`) is passed
/// through untouched.
pub fn default_directives(level: &str) -> String {
    let level = level.trim();
    if level.is_empty() {
        return "warn".to_string();
    }
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    let scoped: Vec<String> = BOARD_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    format!("warn,{}", scoped.join(","))
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(default_level)))
}

/// Initialize logging with human-readable output on stderr, keeping stdout
/// free for rendered boards.
///
/// `RUST_LOG` wins when set; otherwise `default_level` goes through
/// [`default_directives`].
///
/// Safe to call multiple times (e.g. in tests) -- subsequent calls are no-ops.
pub fn init_logging(service_name: &str, default_level: &str) {
    fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init()
        .ok();

    tracing::debug!(service = service_name, "logging ready (human-readable)");
}

/// Initialize logging with one JSON object per event on stderr.
///
/// Safe to call multiple times -- subsequent calls are no-ops.
pub fn init_logging_json(service_name: &str, default_level: &str) {
    fmt()
        .json()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .try_init()
        .ok();

    tracing::debug!(service = service_name, "logging ready (json)");
}
