//! Structured logging configuration.
//!
//! Logs go to stderr so that JSON results on stdout stay machine-readable.
//! Records emitted by `league_pairing` through the `log` facade are bridged
//! into the same subscriber.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn,lp_cli=info";

/// Initialize structured logging
///
/// The level is configurable via the `RUST_LOG` env var, e.g.
/// `RUST_LOG=league_pairing=debug` to see every generated round.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::debug!("Logging initialized");
}
