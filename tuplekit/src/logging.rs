//! Development-time tracing for debugging sequence operations.
//!
//! Operations emit `trace!`/`debug!` events with input and output lengths and
//! a `warn!` when a precondition rejects the input. Nothing is printed until
//! a subscriber is installed.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize a tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format. Returns an error if a global subscriber
/// is already installed.
///
/// # Example
/// ```bash
/// RUST_LOG=tuplekit=trace cargo test
/// ```
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_existing_subscriber() {
        let _ = init();
        assert!(init().is_err());
    }
}
