//! Diagnostic tracing for the CLI.
//!
//! Reads `RUST_LOG` when set. Otherwise defaults to `warn`, or `debug` with
//! `--verbose`. Output goes to stderr so it never mixes with rendered results.
//!
//! ```bash
//! RUST_LOG=studentapp=debug students toggle 3
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. from tests) is harmless, so the error is ignored.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
