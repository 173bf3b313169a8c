//! Logging helper
//!
//! Used by binaries and tests built on `loadable` to implement consistent logging

// Imports
use {
	std::env,
	tracing::level_filters::LevelFilter,
	tracing_subscriber::{prelude::*, util::TryInitError},
};

/// Initializes logging.
///
/// If a global subscriber was already installed, this does nothing.
pub fn init() {
	// Note: Tests call this from multiple threads, so losing the race is expected
	if let Err(err) = self::try_init() {
		tracing::trace!(?err, "Logger was already initialized");
	}
}

/// Tries to initialize logging
pub fn try_init() -> Result<(), TryInitError> {
	// Create the registry
	let registry = tracing_subscriber::registry();

	// Check if we should use colors
	let log_use_color = env::var("RUST_LOG_COLOR").map_or(true, |value| self::parse_bool(&value));

	// Add all the layers
	let filter = tracing_subscriber::EnvFilter::builder()
		.with_default_directive(LevelFilter::INFO.into())
		.from_env_lossy();
	let layer = tracing_subscriber::fmt::layer()
		.with_ansi(log_use_color)
		.with_test_writer()
		.with_filter(filter);

	// Finally initialize it
	registry.with(layer).try_init()
}

/// Parses a boolean environment variable value
fn parse_bool(value: &str) -> bool {
	matches!(value.trim().to_uppercase().as_str(), "1" | "YES" | "TRUE")
}
