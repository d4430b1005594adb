//! Tracing, logging, diagnostics (shared setup).

/// Initialize process-wide observability (tracing/logging) from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let (config, errors) = config::LogConfig::from_env();
    tracing::init_with(&config);

    for error in errors {
        ::tracing::warn!(error = %error, "ignoring invalid logging configuration; using default");
    }
}

/// Environment-driven logging configuration.
pub mod config;

/// Diagnostic sinks backed by `tracing`.
pub mod sink;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{ConfigError, LogConfig, LogFormat};
pub use sink::TracingSink;
