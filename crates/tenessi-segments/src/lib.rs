#![forbid(unsafe_code)]

//! Market segments and the disclosure panel that presents them.
//!
//! - [`catalog`]: immutable segment content, loaded once at startup
//! - [`selection`]: which segment is selected and whether its panel is shown
//! - [`panel`]: the narrow contract a disclosure panel implementation must
//!   satisfy, plus [`Drawer`], a headless reference implementation
//!
//! The panel is a collaborator. The only signal it sends back is the dismiss
//! message handed to it through [`PanelProps`].

pub mod catalog;
pub mod error;
pub mod panel;
pub mod selection;

pub use catalog::{Metric, SegmentCatalog, SegmentEntry, SegmentId};
pub use error::{CatalogError, SelectionError};
pub use panel::{
    CASE_STUDY_BADGE, DisclosurePanel, Drawer, PanelBlock, PanelContent, PanelGesture, PanelProps,
    SPECIALIST_CTA_LABEL, TRANSITION_DURATION_MS, TransitionPhase,
};
pub use selection::{
    DIAGNOSTIC_ANCHOR, SECTORS_ANCHOR, ScrollIntent, SelectionCoordinator, SelectionPhase,
    SelectionState,
};
