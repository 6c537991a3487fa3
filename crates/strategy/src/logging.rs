//! Tracing setup for the binaries.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the stderr `fmt` subscriber.
///
/// `RUST_LOG` controls verbosity; without it only warnings are shown.
pub fn init() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter_builder().from_env_lossy())
        .init();
}

fn filter_builder() -> tracing_subscriber::filter::Builder {
    EnvFilter::builder().with_default_directive(LevelFilter::WARN.into())
}
