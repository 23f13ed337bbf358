//! Logging setup for ecosharectl
//!
//! Logs go to stderr so stdout stays clean for tips and JSON.
//! Filter priority: $ECOSHARE_LOG, then -v/-vv, then "warn".

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ECOSHARE_LOG";

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber; safe to call once per process
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
