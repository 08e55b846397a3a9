//! # Logging Module
//!
//! Diagnostic logging for relicense, built on `tracing`.
//!
//! Status lines meant for the user are printed by [`crate::output`]; this
//! module only covers the diagnostic stream, which goes to stderr and is
//! silent below `warn` unless `RUST_LOG` asks for more.
//!
//! ## Example
//!
//! ```rust
//! use relicense::logging::init_tracing;
//!
//! init_tracing();
//! tracing::debug!("Scanning directory: {}", "internal/");
//! ```

use tracing_subscriber::EnvFilter;

/// Filter directives used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from optional `RUST_LOG`-style directives.
///
/// Missing or unparsable directives fall back to [`DEFAULT_FILTER`].
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
  directives
    .filter(|d| !d.trim().is_empty())
    .and_then(|d| EnvFilter::try_new(d).ok())
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global tracing subscriber.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
  let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

  let result = tracing_subscriber::fmt()
    .with_env_filter(build_filter(directives.as_deref()))
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .try_init();

  if result.is_err() {
    tracing::trace!("Tracing subscriber already installed");
  }
}
