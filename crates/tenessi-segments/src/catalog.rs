#![forbid(unsafe_code)]

//! Immutable segment content.
//!
//! The catalog is configuration, not state: it is parsed once from a JSON
//! document, validated to contain exactly one entry per [`SegmentId`], and
//! then shared read-only (behind an [`Arc`]) by the selection coordinator and
//! the rendering layer.
//!
//! The built-in document ships inside the binary; [`SegmentCatalog::from_json`]
//! accepts an alternate document with the same schema:
//!
//! ```json
//! { "segments": [ { "id": "construction", "card_title": "...", "title": "...",
//!                   "description": "...", "metrics": [ { "label": "...", "value": "..." } ],
//!                   "case_study": "..." } ] }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("../data/segments.json");

/// Identifier of a market segment served by the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentId {
    /// Civil construction and heavy industry.
    Construction,
    /// High-end nautical division.
    Maritime,
}

impl SegmentId {
    /// Every segment, in card order.
    pub const ALL: [SegmentId; 2] = [Self::Construction, Self::Maritime];

    /// Stable identifier string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Construction => "construction",
            Self::Maritime => "maritime",
        }
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownSegment(s.to_string()))
    }
}

/// One labelled figure shown in a segment's detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// What is measured.
    pub label: String,
    /// The headline value.
    pub value: String,
}

/// Display content of one segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentEntry {
    /// Segment identifier.
    pub id: SegmentId,
    /// Heading on the segment card.
    pub card_title: String,
    /// Heading of the detail panel.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Ordered metric pairs.
    pub metrics: Vec<Metric>,
    /// Case-study narrative.
    pub case_study: String,
}

#[derive(Deserialize)]
struct CatalogDocument {
    segments: Vec<SegmentEntry>,
}

/// Read-only lookup from [`SegmentId`] to [`SegmentEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentCatalog {
    entries: BTreeMap<SegmentId, SegmentEntry>,
}

impl SegmentCatalog {
    /// The catalog embedded in the binary, parsed on first use.
    #[must_use]
    pub fn builtin() -> Arc<SegmentCatalog> {
        static BUILTIN: OnceLock<Arc<SegmentCatalog>> = OnceLock::new();
        Arc::clone(BUILTIN.get_or_init(|| {
            Arc::new(
                Self::from_json(BUILTIN_CATALOG).expect("embedded segment catalog is well-formed"),
            )
        }))
    }

    /// Parse and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::from_entries(doc.segments)
    }

    /// Build a catalog from entries, requiring exactly one per segment.
    pub fn from_entries(
        entries: impl IntoIterator<Item = SegmentEntry>,
    ) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for entry in entries {
            let id = entry.id;
            if map.insert(id, entry).is_some() {
                return Err(CatalogError::DuplicateSegment(id));
            }
        }
        if let Some(missing) = SegmentId::ALL.into_iter().find(|id| !map.contains_key(id)) {
            return Err(CatalogError::MissingSegment(missing));
        }
        debug!(segments = map.len(), "segment catalog loaded");
        Ok(Self { entries: map })
    }

    /// Entry for `id`.
    pub fn get(&self, id: SegmentId) -> Result<&SegmentEntry, CatalogError> {
        self.entries
            .get(&id)
            .ok_or_else(|| CatalogError::UnknownSegment(id.to_string()))
    }

    /// Entry for the identifier string `id`.
    pub fn lookup(&self, id: &str) -> Result<&SegmentEntry, CatalogError> {
        self.get(id.parse()?)
    }

    /// Whether `id` has an entry.
    #[must_use]
    pub fn contains(&self, id: SegmentId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Entries in card order.
    pub fn iter(&self) -> impl Iterator<Item = &SegmentEntry> {
        self.entries.values()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: SegmentId) -> SegmentEntry {
        SegmentEntry {
            id,
            card_title: format!("card {id}"),
            title: format!("title {id}"),
            description: "desc".into(),
            metrics: vec![Metric {
                label: "l".into(),
                value: "v".into(),
            }],
            case_study: "case".into(),
        }
    }

    #[test]
    fn builtin_has_every_segment() {
        let catalog = SegmentCatalog::builtin();
        assert_eq!(catalog.len(), SegmentId::ALL.len());
        for id in SegmentId::ALL {
            assert!(catalog.contains(id));
            assert_eq!(catalog.get(id).unwrap().id, id);
        }
    }

    #[test]
    fn builtin_content_matches_page_copy() {
        let catalog = SegmentCatalog::builtin();
        let construction = catalog.get(SegmentId::Construction).unwrap();
        assert_eq!(construction.title, "CONSTRUÇÃO CIVIL & INDÚSTRIA");
        assert_eq!(construction.metrics.len(), 3);
        assert_eq!(construction.metrics[0].value, "+R$ 500M");

        let maritime = catalog.lookup("maritime").unwrap();
        assert_eq!(maritime.card_title, "DIVISÃO NÁUTICA (YACHTS)");
        assert_eq!(maritime.metrics[2].label, "Posicionamento");
    }

    #[test]
    fn builtin_is_shared() {
        let a = SegmentCatalog::builtin();
        let b = SegmentCatalog::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn unknown_identifier_fails() {
        let catalog = SegmentCatalog::builtin();
        let err = catalog.lookup("aerospace").unwrap_err();
        assert_eq!(err.code(), "unknown-segment");
        assert!(matches!(err, CatalogError::UnknownSegment(ref s) if s == "aerospace"));
    }

    #[test]
    fn missing_segment_is_rejected() {
        let err = SegmentCatalog::from_entries([entry(SegmentId::Maritime)]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingSegment(SegmentId::Construction)
        ));
    }

    #[test]
    fn duplicate_segment_is_rejected() {
        let err = SegmentCatalog::from_entries([
            entry(SegmentId::Construction),
            entry(SegmentId::Construction),
            entry(SegmentId::Maritime),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateSegment(SegmentId::Construction)
        ));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = SegmentCatalog::from_json("{\"segments\": [{\"id\": \"aerospace\"}]}").unwrap_err();
        assert_eq!(err.code(), "catalog-parse");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn segment_id_round_trip() {
        for id in SegmentId::ALL {
            assert_eq!(id.as_str().parse::<SegmentId>().unwrap(), id);
        }
        assert!("Construction".parse::<SegmentId>().is_err());
    }
}
