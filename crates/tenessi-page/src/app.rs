#![forbid(unsafe_code)]

//! The landing page model.
//!
//! [`LandingPage`] owns the lead-capture form, the segment selection, and the
//! drawer that shows the selected segment. Everything the page does outside
//! its own state (the success acknowledgment, scrolling to a section, error
//! log lines) leaves [`LandingPage::update`] as a [`Cmd`].
//!
//! | Message | State change | Command |
//! |---------|--------------|---------|
//! | `Change` / `Blur` | form field transition | none |
//! | `Submit` | form revalidated | acknowledgment when accepted |
//! | `CardClick` | segment selected, drawer shown | log line on unknown segment |
//! | `PanelGesture` | drawer hides itself | `PanelDismissed` fed back |
//! | `PanelDismissed` | selection hidden | none |
//! | `PanelCta` | selection hidden | scroll to `setores` |
//! | `HeroCta` | none | scroll to `diagnostic` |

use std::sync::Arc;
use std::time::Duration;

use tenessi_forms::{FieldId, FormController, FormSnapshot, SubmissionEffect, SubmitOutcome};
use tenessi_runtime::{Cmd, Frame, Model};
use tenessi_segments::{
    DIAGNOSTIC_ANCHOR, DisclosurePanel, Drawer, PanelContent, PanelGesture, PanelProps,
    SegmentCatalog, SelectionCoordinator,
};
use tracing::{debug, error, warn};

use crate::event::PageEvent;
use crate::view;

/// Acknowledgment shown after an accepted submission.
pub const SUCCESS_ACKNOWLEDGMENT: &str =
    "Diagnóstico solicitado com sucesso! Nossa equipe entrará em contato.";

/// Messages handled by [`LandingPage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Input value changed.
    Change(FieldId, String),
    /// Input lost focus.
    Blur(FieldId, String),
    /// Submit the form.
    Submit,
    /// Clear the form.
    Reset,
    /// Segment card clicked.
    CardClick(String),
    /// Dismissal gesture on the drawer.
    PanelGesture(PanelGesture),
    /// The drawer closed itself.
    PanelDismissed,
    /// Call-to-action inside the drawer.
    PanelCta,
    /// Reopen the last selected segment.
    Reopen,
    /// Hero call-to-action.
    HeroCta,
    /// Advance drawer transitions.
    Tick(Duration),
    /// End the session.
    Quit,
}

impl From<PageEvent> for Msg {
    fn from(event: PageEvent) -> Self {
        match event {
            PageEvent::Change { field, value } => Self::Change(field, value),
            PageEvent::Blur { field, value } => Self::Blur(field, value),
            PageEvent::Submit => Self::Submit,
            PageEvent::Reset => Self::Reset,
            PageEvent::CardClick { segment } => Self::CardClick(segment),
            PageEvent::PanelGesture { gesture } => Self::PanelGesture(gesture),
            PageEvent::PanelCta => Self::PanelCta,
            PageEvent::Reopen => Self::Reopen,
            PageEvent::HeroCta => Self::HeroCta,
            PageEvent::Tick { ms } => Self::Tick(Duration::from_millis(ms)),
            PageEvent::Quit => Self::Quit,
        }
    }
}

/// Accepted submissions, in order. Stands in for the hand-off to whatever
/// collects leads.
#[derive(Debug, Default)]
pub struct Submissions {
    accepted: Vec<FormSnapshot>,
}

impl Submissions {
    /// Accepted snapshots, oldest first.
    #[must_use]
    pub fn accepted(&self) -> &[FormSnapshot] {
        &self.accepted
    }
}

impl SubmissionEffect for Submissions {
    fn on_accepted(&mut self, snapshot: &FormSnapshot) {
        self.accepted.push(snapshot.clone());
    }
}

/// Page state: form, segment selection, and the drawer.
#[derive(Debug)]
pub struct LandingPage {
    form: FormController,
    submissions: Submissions,
    selection: SelectionCoordinator,
    drawer: Drawer<Msg>,
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::new(SegmentCatalog::builtin())
    }
}

impl LandingPage {
    /// A pristine page over `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<SegmentCatalog>) -> Self {
        Self {
            form: FormController::new(),
            submissions: Submissions::default(),
            selection: SelectionCoordinator::new(catalog),
            drawer: Drawer::new(),
        }
    }

    /// Set the drawer's open/close transition length.
    #[must_use]
    pub fn with_transition(mut self, duration: Duration) -> Self {
        self.drawer = self.drawer.with_duration(duration);
        self
    }

    /// The lead-capture form.
    #[must_use]
    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Accepted submissions.
    #[must_use]
    pub fn submissions(&self) -> &Submissions {
        &self.submissions
    }

    /// The segment selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionCoordinator {
        &self.selection
    }

    /// The segment drawer.
    #[must_use]
    pub fn drawer(&self) -> &Drawer<Msg> {
        &self.drawer
    }

    /// Push the selection state into the drawer's props.
    fn sync_drawer(&mut self) {
        let state = self.selection.state();
        let content = self.selection.selected_entry().map(PanelContent::for_segment);
        // Props only hide the drawer after the selection is already hidden.
        let _ = self.drawer.update(PanelProps {
            visible: state.visible,
            content,
            on_dismiss: Msg::PanelDismissed,
        });
    }

    fn submit(&mut self) -> Cmd<Msg> {
        match self.form.submit(&mut self.submissions) {
            SubmitOutcome::Accepted(_) => Cmd::alert(SUCCESS_ACKNOWLEDGMENT),
            SubmitOutcome::Blocked { .. } => Cmd::none(),
        }
    }

    fn card_click(&mut self, segment: &str) -> Cmd<Msg> {
        match self.selection.select_by_name(segment) {
            Ok(()) => {
                self.sync_drawer();
                Cmd::none()
            }
            Err(err) => {
                error!(segment, code = "unknown-segment", %err, "card click ignored");
                Cmd::log(format!("card click ignored: {err}"))
            }
        }
    }
}

impl Model for LandingPage {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Change(field, value) => {
                self.form.change(field, value);
                Cmd::none()
            }
            Msg::Blur(field, value) => {
                self.form.blur(field, value);
                Cmd::none()
            }
            Msg::Submit => self.submit(),
            Msg::Reset => {
                self.form.reset();
                Cmd::none()
            }
            Msg::CardClick(segment) => self.card_click(&segment),
            Msg::PanelGesture(gesture) => match self.drawer.gesture(gesture) {
                Some(dismissed) => Cmd::msg(dismissed),
                None => Cmd::none(),
            },
            Msg::PanelDismissed => {
                self.selection.dismiss();
                self.sync_drawer();
                Cmd::none()
            }
            Msg::PanelCta => {
                if !self.drawer.is_visible() {
                    debug!("panel call-to-action ignored: drawer hidden");
                    return Cmd::none();
                }
                let intent = self.selection.dismiss_and_scroll();
                self.sync_drawer();
                Cmd::scroll_into_view(intent.anchor)
            }
            Msg::Reopen => match self.selection.reopen() {
                Ok(()) => {
                    self.sync_drawer();
                    Cmd::none()
                }
                Err(err) => {
                    warn!(%err, "reopen ignored");
                    Cmd::log(format!("reopen ignored: {err}"))
                }
            },
            Msg::HeroCta => Cmd::scroll_into_view(DIAGNOSTIC_ANCHOR),
            Msg::Tick(elapsed) => {
                self.drawer.tick(elapsed);
                Cmd::none()
            }
            Msg::Quit => Cmd::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        view::render_page(self, frame);
    }
}
