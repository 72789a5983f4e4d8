#![forbid(unsafe_code)]

//! Logging setup for the session runner.
//!
//! Library crates only emit `tracing` events. This module installs the
//! subscriber: a `fmt` layer on stderr (text or JSON) behind an
//! [`EnvFilter`]. Page output owns stdout.
//!
//! # Filter precedence
//!
//! 1. `--log=FILTER`
//! 2. `TENESSI_LOG`
//! 3. `RUST_LOG`
//! 4. `info`
//!
//! An unparsable filter falls back to the default rather than failing.

use std::env;
use std::io;

use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Filter used when nothing else is configured.
pub const DEFAULT_FILTER: &str = "info";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line format.
    #[default]
    Text,
    /// JSON lines for machine parsing.
    Json,
}

/// Configuration for logging behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Output format.
    pub format: LogFormat,
    /// Explicit filter; beats the environment.
    pub filter: Option<String>,
}

/// Pick the filter directive string according to the precedence above.
pub fn resolve_filter<F>(explicit: Option<&str>, env: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .map(str::to_string)
        .or_else(|| env("TENESSI_LOG"))
        .or_else(|| env("RUST_LOG"))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Build an `EnvFilter` from `directives`, falling back to [`DEFAULT_FILTER`].
pub fn build_env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    let directives = resolve_filter(config.filter.as_deref(), |key| env::var(key).ok());
    let filter = build_env_filter(&directives);
    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(io::stderr).with_target(false))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
    }
}
