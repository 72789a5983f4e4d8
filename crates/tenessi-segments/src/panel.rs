#![forbid(unsafe_code)]

//! Disclosure panel contract and a headless drawer implementation.
//!
//! The owner drives a panel with three inputs, bundled in [`PanelProps`]:
//! a visibility flag, the content to show, and the message to send back when
//! the panel closes itself. A panel implementation owns its own transition
//! animation and dismissal gestures; whenever a gesture closes it, it returns
//! the dismiss message exactly once so the owner's state can follow.
//!
//! # Invariants
//!
//! 1. **Single inbound signal**: the dismiss message is the only thing a panel
//!    sends back. It is returned once per visible-to-hidden change, whether a
//!    gesture or the owner's props closed the panel.
//! 2. **Content outlives visibility**: hiding keeps the last content so the
//!    closing transition can still draw it.
//! 3. **No content, no visibility**: props without content force the panel
//!    hidden.
//!
//! # Failure Modes
//!
//! | Scenario | Behavior |
//! |----------|----------|
//! | Gesture while hidden | Ignored, returns `None` |
//! | Props hide an already hidden panel | Returns `None` |
//! | Repeated dismiss gestures | First returns the message, later ones `None` |
//! | Zero transition duration | Phases settle on the next tick |

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Metric, SegmentEntry};
use crate::selection::SECTORS_ANCHOR;

/// Default open/close transition length.
pub const TRANSITION_DURATION_MS: u64 = 300;

/// Badge shown above a segment's case study.
pub const CASE_STUDY_BADGE: &str = "CASE STUDY";

/// Label of the call-to-action inside a segment panel.
pub const SPECIALIST_CTA_LABEL: &str = "FALAR COM ESPECIALISTA DO SETOR";

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// One block of panel body content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBlock {
    /// A paragraph of text.
    Paragraph(String),
    /// Metric value/label pairs.
    Metrics(Vec<Metric>),
    /// A badged narrative.
    CaseStudy {
        /// Badge text.
        badge: String,
        /// Narrative text.
        narrative: String,
    },
    /// A button that asks the page to scroll to `anchor`.
    Action {
        /// Button label.
        label: String,
        /// Target section anchor.
        anchor: &'static str,
    },
}

/// Title plus arbitrary body content injected into a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelContent {
    /// Panel heading.
    pub title: String,
    /// Body blocks in display order.
    pub blocks: Vec<PanelBlock>,
}

impl PanelContent {
    /// Content with a title and no body.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// Append a body block.
    #[must_use]
    pub fn with_block(mut self, block: PanelBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Detail content for a segment: description, metrics, case study, and
    /// the call-to-action back to the segments section.
    #[must_use]
    pub fn for_segment(entry: &SegmentEntry) -> Self {
        Self::new(entry.title.clone())
            .with_block(PanelBlock::Paragraph(entry.description.clone()))
            .with_block(PanelBlock::Metrics(entry.metrics.clone()))
            .with_block(PanelBlock::CaseStudy {
                badge: CASE_STUDY_BADGE.to_string(),
                narrative: entry.case_study.clone(),
            })
            .with_block(PanelBlock::Action {
                label: SPECIALIST_CTA_LABEL.to_string(),
                anchor: SECTORS_ANCHOR,
            })
    }
}

/// Inputs the owner passes to a panel on every update.
#[derive(Debug, Clone)]
pub struct PanelProps<M> {
    /// Whether the panel should be shown.
    pub visible: bool,
    /// Content to show (retained by the panel while hiding).
    pub content: Option<PanelContent>,
    /// Message returned when the panel closes itself.
    pub on_dismiss: M,
}

/// A user gesture that closes a panel from the inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelGesture {
    /// Click on the dimmed backdrop.
    BackdropClick,
    /// Escape key.
    Escape,
    /// The panel's own close button.
    CloseButton,
}

/// Narrow contract every disclosure panel implementation satisfies.
pub trait DisclosurePanel<M> {
    /// Apply the owner's latest props. Returns the dismiss message if the
    /// props closed a visible panel.
    fn update(&mut self, props: PanelProps<M>) -> Option<M>;

    /// Feed a dismissal gesture. Returns the dismiss message if the gesture
    /// closed the panel.
    fn gesture(&mut self, gesture: PanelGesture) -> Option<M>;

    /// Whether the panel is logically visible.
    fn is_visible(&self) -> bool;
}

// ---------------------------------------------------------------------------
// Drawer
// ---------------------------------------------------------------------------

/// Transition phase of a [`Drawer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Not drawn.
    #[default]
    Closed,
    /// Sliding in.
    Opening,
    /// Fully shown.
    Open,
    /// Sliding out, still drawing the last content.
    Closing,
}

/// Headless side drawer.
///
/// Transition progress is advanced explicitly through [`Drawer::tick`] so the
/// drawer stays deterministic under test.
#[derive(Debug, Clone)]
pub struct Drawer<M> {
    visible: bool,
    content: Option<PanelContent>,
    on_dismiss: Option<M>,
    phase: TransitionPhase,
    progress: f32,
    duration: Duration,
}

impl<M> Default for Drawer<M> {
    fn default() -> Self {
        Self {
            visible: false,
            content: None,
            on_dismiss: None,
            phase: TransitionPhase::Closed,
            progress: 0.0,
            duration: Duration::from_millis(TRANSITION_DURATION_MS),
        }
    }
}

impl<M: Clone> Drawer<M> {
    /// Create a closed drawer with the default transition length.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transition length.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Advance the open/close transition by `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) {
        if !matches!(self.phase, TransitionPhase::Opening | TransitionPhase::Closing) {
            return;
        }
        let step = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };
        self.progress = (self.progress + step).clamp(0.0, 1.0);
        if self.progress >= 1.0 {
            self.phase = match self.phase {
                TransitionPhase::Opening => TransitionPhase::Open,
                _ => TransitionPhase::Closed,
            };
            self.progress = 1.0;
            debug!(phase = ?self.phase, "drawer transition settled");
        }
    }

    /// Current transition phase.
    #[must_use]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Whether anything is drawn (open, or still transitioning).
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.phase != TransitionPhase::Closed
    }

    /// How far the drawer is slid in, from 0.0 (hidden) to 1.0 (shown).
    #[must_use]
    pub fn openness(&self) -> f32 {
        match self.phase {
            TransitionPhase::Closed => 0.0,
            TransitionPhase::Opening => self.progress,
            TransitionPhase::Open => 1.0,
            TransitionPhase::Closing => 1.0 - self.progress,
        }
    }

    /// Content currently held by the drawer.
    #[must_use]
    pub fn content(&self) -> Option<&PanelContent> {
        self.content.as_ref()
    }

    fn begin(&mut self, phase: TransitionPhase) {
        // Reversing mid-transition continues from the current openness.
        let openness = self.openness();
        self.progress = match phase {
            TransitionPhase::Opening => openness,
            _ => 1.0 - openness,
        };
        self.phase = phase;
    }

    fn show(&mut self) {
        if !self.visible {
            self.visible = true;
            self.begin(TransitionPhase::Opening);
        }
    }

    fn hide(&mut self) {
        if self.visible {
            self.visible = false;
            self.begin(TransitionPhase::Closing);
        }
    }
}

impl<M: Clone> DisclosurePanel<M> for Drawer<M> {
    fn update(&mut self, props: PanelProps<M>) -> Option<M> {
        self.on_dismiss = Some(props.on_dismiss);
        let was_visible = self.visible;
        let has_content = props.content.is_some();
        if has_content || !self.is_rendered() {
            self.content = props.content;
        }
        if props.visible && has_content {
            self.show();
            return None;
        }
        self.hide();
        if !was_visible {
            return None;
        }
        debug!("drawer closed by props");
        self.on_dismiss.clone()
    }

    fn gesture(&mut self, gesture: PanelGesture) -> Option<M> {
        if !self.visible {
            return None;
        }
        self.hide();
        debug!(?gesture, "drawer dismissed by gesture");
        self.on_dismiss.clone()
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
