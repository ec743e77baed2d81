//! Logging setup
//!
//! Installs a `tracing` subscriber that writes to stderr. `-v` flags pick
//! the level and `HANGMAN_LOG` overrides them with a full filter.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "HANGMAN_LOG";

/// Map a `-v` count to a tracing directive
///
/// 0 → `warn`, 1 → `info`, 2 → `debug`, 3+ → `trace`.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Directive used when `HANGMAN_LOG` is unset
///
/// The TUI owns the terminal, so it logs nothing unless `-v` was given.
#[must_use]
pub const fn default_directive(verbosity: u8, tui: bool) -> &'static str {
    if tui && verbosity == 0 {
        "off"
    } else {
        verbosity_to_directive(verbosity)
    }
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbosity: u8, tui: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, tui)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
