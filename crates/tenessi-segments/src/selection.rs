#![forbid(unsafe_code)]

//! Segment selection state machine.
//!
//! ```text
//!            select(id)                 select(id')
//!  Closed ──────────────▶ Open(id) ───────────────▶ Open(id')
//!    ▲                       │
//!    └──── dismiss() ────────┘   (selected id is retained)
//! ```
//!
//! Dismissal only hides the panel. The last selected identifier stays in
//! place so a closing transition still has content to show, and so
//! [`SelectionCoordinator::reopen`] can bring the same content back.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{SegmentCatalog, SegmentEntry, SegmentId};
use crate::error::SelectionError;

/// Anchor of the segment cards section.
pub const SECTORS_ANCHOR: &str = "setores";
/// Anchor of the diagnostic (lead-capture form) section.
pub const DIAGNOSTIC_ANCHOR: &str = "diagnostic";

/// Selected segment and panel visibility.
///
/// `visible` is only ever `true` while `selected` is `Some`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    /// Last selected segment, retained across dismissals.
    pub selected: Option<SegmentId>,
    /// Whether the disclosure panel should be shown.
    pub visible: bool,
}

/// Coarse phase of the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Panel hidden (a previous selection may be retained).
    Closed,
    /// Panel shown for this segment.
    Open(SegmentId),
}

/// Request for the page shell to bring an anchor section into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollIntent {
    /// Target section anchor.
    pub anchor: &'static str,
}

/// Tracks which segment is selected and whether its panel is visible.
///
/// The coordinator is the only writer of its [`SelectionState`].
#[derive(Debug, Clone)]
pub struct SelectionCoordinator {
    catalog: Arc<SegmentCatalog>,
    state: SelectionState,
}

impl SelectionCoordinator {
    /// Create a coordinator in the `Closed` phase with nothing selected.
    #[must_use]
    pub fn new(catalog: Arc<SegmentCatalog>) -> Self {
        Self {
            catalog,
            state: SelectionState::default(),
        }
    }

    /// Open the panel for `id`, replacing whatever was shown.
    ///
    /// Fails with `unknown-segment` if the catalog has no entry for `id`;
    /// the state is left untouched in that case.
    pub fn select(&mut self, id: SegmentId) -> Result<(), SelectionError> {
        self.catalog.get(id)?;
        let previous = self.phase();
        self.state = SelectionState {
            selected: Some(id),
            visible: true,
        };
        info!(segment = id.as_str(), ?previous, "segment selected");
        Ok(())
    }

    /// Open the panel for the identifier string `id`.
    pub fn select_by_name(&mut self, id: &str) -> Result<(), SelectionError> {
        let entry = self.catalog.lookup(id)?;
        let id = entry.id;
        self.select(id)
    }

    /// Hide the panel, keeping the selected identifier.
    ///
    /// Returns `true` if the panel was visible.
    pub fn dismiss(&mut self) -> bool {
        let was_visible = std::mem::replace(&mut self.state.visible, false);
        if was_visible {
            info!(segment = ?self.state.selected.map(SegmentId::as_str), "panel dismissed");
        } else {
            debug!("dismiss ignored: panel already hidden");
        }
        was_visible
    }

    /// Panel call-to-action: hide the panel and ask the page shell to scroll
    /// to the segments section.
    #[must_use]
    pub fn dismiss_and_scroll(&mut self) -> ScrollIntent {
        self.dismiss();
        ScrollIntent {
            anchor: SECTORS_ANCHOR,
        }
    }

    /// Show the panel again for the retained selection.
    pub fn reopen(&mut self) -> Result<(), SelectionError> {
        let id = self.state.selected.ok_or(SelectionError::NothingSelected)?;
        self.select(id)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        match self.state {
            SelectionState {
                selected: Some(id),
                visible: true,
            } => SelectionPhase::Open(id),
            _ => SelectionPhase::Closed,
        }
    }

    /// Content of the retained selection, visible or not.
    #[must_use]
    pub fn selected_entry(&self) -> Option<&SegmentEntry> {
        self.state
            .selected
            .and_then(|id| self.catalog.get(id).ok())
    }

    /// The catalog this coordinator resolves identifiers against.
    #[must_use]
    pub fn catalog(&self) -> &Arc<SegmentCatalog> {
        &self.catalog
    }
}
