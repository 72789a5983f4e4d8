#![forbid(unsafe_code)]

//! Catalog and selection errors.
//!
//! None of these are user-facing: the page only ever offers identifiers the
//! catalog knows, so hitting one means a programming defect. Callers abort
//! the interaction that produced it and keep the rest of the page running.

use std::fmt;

use crate::catalog::SegmentId;

/// Failure to load or query the segment catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// The identifier is not part of the catalog.
    UnknownSegment(String),
    /// A catalog document omits a known segment.
    MissingSegment(SegmentId),
    /// A catalog document lists a segment twice.
    DuplicateSegment(SegmentId),
    /// The catalog document is not valid JSON for the expected schema.
    Parse(serde_json::Error),
}

impl CatalogError {
    /// Stable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownSegment(_) => "unknown-segment",
            Self::MissingSegment(_) => "missing-segment",
            Self::DuplicateSegment(_) => "duplicate-segment",
            Self::Parse(_) => "catalog-parse",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSegment(id) => write!(f, "unknown segment: {id:?}"),
            Self::MissingSegment(id) => write!(f, "catalog has no entry for segment {id}"),
            Self::DuplicateSegment(id) => write!(f, "catalog lists segment {id} more than once"),
            Self::Parse(err) => write!(f, "invalid segment catalog: {err}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Failure of a selection transition.
#[derive(Debug)]
pub enum SelectionError {
    /// The requested segment could not be resolved.
    Catalog(CatalogError),
    /// Reopen was requested before any segment was ever selected.
    NothingSelected,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "{err}"),
            Self::NothingSelected => write!(f, "no segment has been selected yet"),
        }
    }
}

impl std::error::Error for SelectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            Self::NothingSelected => None,
        }
    }
}

impl From<CatalogError> for SelectionError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}
