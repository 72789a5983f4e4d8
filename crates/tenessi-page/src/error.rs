#![forbid(unsafe_code)]

//! Top-level error for the session runner.

use std::fmt;
use std::io;

use tenessi_segments::CatalogError;
use tracing_subscriber::util::TryInitError;

use crate::cli::CliError;
use crate::script::ScriptError;

/// Anything that stops a session before or while it runs.
#[derive(Debug)]
pub enum PageError {
    /// Reading input or writing output failed.
    Io(io::Error),
    /// The segment catalog could not be loaded.
    Catalog(CatalogError),
    /// The session script is malformed.
    Script(ScriptError),
    /// The command line is invalid.
    Cli(CliError),
    /// The log subscriber could not be installed.
    Logging(TryInitError),
}

impl PageError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Cli(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Catalog(err) => write!(f, "catalog error: {err}"),
            Self::Script(err) => write!(f, "{err}"),
            Self::Cli(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "failed to initialize logging: {err}"),
        }
    }
}

impl std::error::Error for PageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Catalog(err) => Some(err),
            Self::Script(err) => Some(err),
            Self::Cli(err) => Some(err),
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<io::Error> for PageError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<CatalogError> for PageError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<ScriptError> for PageError {
    fn from(err: ScriptError) -> Self {
        Self::Script(err)
    }
}

impl From<CliError> for PageError {
    fn from(err: CliError) -> Self {
        Self::Cli(err)
    }
}

impl From<TryInitError> for PageError {
    fn from(err: TryInitError) -> Self {
        Self::Logging(err)
    }
}
