//! Tracing setup shared by the demo binaries.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset, empty or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` selects what is logged; without it only warnings and errors
/// appear, so the demo output on stdout stays readable. Use
/// `RUST_LOG=statecraft=debug` to see every dispatched action.
pub fn init() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build the filter from a `RUST_LOG` value, falling back to
/// [`DEFAULT_FILTER`].
fn filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
