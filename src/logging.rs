//! Diagnostic logging.
//!
//! Diagnostics go through `tracing` and are written to stderr so they never
//! mix with command output on stdout.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "popfavs=warn";
const VERBOSE_FILTER: &str = "popfavs=debug";

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug output for
/// this crate. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
