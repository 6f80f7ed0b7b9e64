//! Logging setup for the modeline host.
//!
//! Logs go to stderr so the per-file report on stdout stays clean.
//!
//! ## Environment Variables
//!
//! 1. **`MODELINE_LOG`** (highest priority) - a bare level such as `debug`
//!    applies to this crate only, anything else is used as a full filter
//! 2. **`RUST_LOG`** - Standard tracing environment variable
//! 3. **Default** - `warn` globally, `info` for this crate

use std::env;
use tracing_subscriber::EnvFilter;

pub type LogError = Box<dyn std::error::Error + Send + Sync>;

/// Initialize logging.
///
/// Safe to call multiple times; only the first call installs a subscriber.
pub fn init() -> Result<(), LogError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(create_filter())
        .try_init()
}

/// Initialize logging for tests, ignoring an already installed subscriber.
pub fn test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(create_filter())
        .try_init();
}

fn create_filter() -> EnvFilter {
    if let Ok(modeline_log) = env::var("MODELINE_LOG") {
        return expand_modeline_log(&modeline_log);
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }

    EnvFilter::new("warn,modeline=info")
}

/// `MODELINE_LOG=debug` becomes `warn,modeline=debug`; filters with module
/// syntax are used as-is.
fn expand_modeline_log(modeline_log: &str) -> EnvFilter {
    EnvFilter::new(expand_directives(modeline_log))
}

fn expand_directives(modeline_log: &str) -> String {
    if modeline_log.contains('=') || modeline_log.contains(',') || modeline_log.contains(':') {
        return modeline_log.to_string();
    }
    format!("warn,modeline={modeline_log}")
}
