//! Tracing subscriber bootstrap for hosts embedding trackform

use tracing_subscriber::EnvFilter;

fn filter(verbose: bool) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    if verbose {
        filter.add_directive(tracing::Level::DEBUG.into())
    } else {
        filter
    }
}

/// Install a global fmt subscriber honouring `RUST_LOG`
///
/// Returns `false` when a subscriber was already installed.
pub fn try_init(verbose: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Same as [`try_init`], ignoring an already installed subscriber
pub fn init(verbose: bool) {
    if !try_init(verbose) {
        tracing::debug!("tracing subscriber already installed");
    }
}
