//! Diagnostic logging to stderr.
//!
//! The menu itself is printed through [`crate::ui::OutputFormatter`]; tracing
//! events carry the extra detail (scan results, spawned commands, renames)
//! and stay quiet unless `-v` or `RUST_LOG` asks for them.

use console::Term;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter directive for a verbosity level.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "autoxiso=warn",
        1 => "autoxiso=info",
        _ => "autoxiso=debug",
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the verbosity
/// level. Calling this twice is harmless.
pub fn init(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(Term::stderr().features().colors_supported())
        .with_target(false)
        .with_level(true)
        .compact();

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();

    if result.is_ok() {
        tracing::debug!(
            version = env!("CARGO_PKG_VERSION"),
            verbosity,
            "logging initialized"
        );
    }
}
