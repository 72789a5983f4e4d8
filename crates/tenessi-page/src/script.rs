#![forbid(unsafe_code)]

//! Session scripts: JSON-lines page events.
//!
//! Blank lines and lines starting with `#` are skipped. Line numbers in
//! errors are 1-based.

use std::fmt;
use std::io::{self, BufRead};

use crate::event::PageEvent;

/// A session script could not be read.
#[derive(Debug)]
pub enum ScriptError {
    /// Reading the input failed.
    Io(io::Error),
    /// A line is not a valid event.
    Parse {
        /// 1-based line number.
        line: usize,
        /// Parser error.
        source: serde_json::Error,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read script: {err}"),
            Self::Parse { line, source } => write!(f, "script line {line}: {source}"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for ScriptError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Parse one script line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<PageEvent>, ScriptError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|source| ScriptError::Parse {
            line: line_no,
            source,
        })
}

/// Read every event from `reader`.
pub fn read_script<R: BufRead>(reader: R) -> Result<Vec<PageEvent>, ScriptError> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        if let Some(event) = parse_line(idx + 1, &line?)? {
            events.push(event);
        }
    }
    Ok(events)
}
