//! Diagnostic tracing for the `moonfuel` binary.
//!
//! Answers go to stdout. Everything emitted here goes to stderr so the two
//! never mix.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// `--verbose` forces `debug`. Otherwise `RUST_LOG` is honored and the
/// level defaults to `warn`.
///
/// # Example
/// ```bash
/// RUST_LOG=moonfuel_moons=trace moonfuel moons --steps 10
/// ```
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
