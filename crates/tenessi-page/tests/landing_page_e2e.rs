#![forbid(unsafe_code)]

//! End-to-end landing page scenarios driven through `ProgramSimulator`.

use tenessi_forms::{FieldError, FieldId, FieldPhase};
use tenessi_page::{LandingPage, Msg, PageEvent, SUCCESS_ACKNOWLEDGMENT, read_script};
use tenessi_runtime::{CmdRecord, ProgramSimulator};
use tenessi_segments::{PanelGesture, SegmentId, SelectionPhase, TransitionPhase};

fn sim() -> ProgramSimulator<LandingPage> {
    let mut sim = ProgramSimulator::new(LandingPage::default());
    sim.init();
    sim
}

fn fill(sim: &mut ProgramSimulator<LandingPage>, values: [(FieldId, &str); 5]) {
    for (field, value) in values {
        sim.send(Msg::Change(field, value.to_string()));
        sim.send(Msg::Blur(field, value.to_string()));
    }
}

const VALID: [(FieldId, &str); 5] = [
    (FieldId::FullName, "Maria Silva"),
    (FieldId::Role, "Diretora"),
    (FieldId::Email, "maria@empresa.com"),
    (FieldId::Company, "Grupo XYZ"),
    (FieldId::Segment, "construcao"),
];

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

#[test]
fn valid_submission_acknowledged_exactly_once() {
    let mut sim = sim();
    fill(&mut sim, VALID);
    sim.send(Msg::Submit);

    assert_eq!(sim.alerts(), [SUCCESS_ACKNOWLEDGMENT]);
    let page = sim.model();
    assert_eq!(page.form().accepted_count(), 1);
    let accepted = page.submissions().accepted();
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].value(FieldId::Email), "maria@empresa.com");
    assert_eq!(accepted[0].value(FieldId::Segment), "construcao");
}

#[test]
fn pristine_submit_blocks_and_reveals_every_required_error() {
    let mut sim = sim();
    sim.send(Msg::Submit);

    assert!(sim.alerts().is_empty());
    let form = sim.model().form();
    for field in FieldId::ALL {
        assert_eq!(form.visible_error(field), Some(FieldError::Required), "{field}");
        assert_eq!(form.phase(field), FieldPhase::TouchedInvalid);
    }

    let frame = sim.capture_frame(80);
    assert_eq!(
        frame
            .lines()
            .iter()
            .filter(|l| l.contains("Este campo é obrigatório"))
            .count(),
        5
    );
}

#[test]
fn typing_before_blur_shows_nothing() {
    let mut sim = sim();
    sim.send(Msg::Change(FieldId::Email, "maria@".into()));
    assert_eq!(sim.model().form().visible_error(FieldId::Email), None);

    sim.send(Msg::Blur(FieldId::Email, "maria@".into()));
    assert_eq!(
        sim.model().form().visible_error(FieldId::Email),
        Some(FieldError::InvalidFormat)
    );

    sim.send(Msg::Change(FieldId::Email, "maria@empresa.com".into()));
    assert_eq!(sim.model().form().phase(FieldId::Email), FieldPhase::TouchedValid);
}

#[test]
fn submit_recomputes_instead_of_trusting_stored_errors() {
    let mut sim = sim();
    // Only changed, never blurred: no stored errors yet.
    for (field, value) in VALID {
        sim.send(Msg::Change(field, value.to_string()));
    }
    sim.send(Msg::Change(FieldId::FullName, "Al".into()));
    sim.send(Msg::Submit);

    assert!(sim.alerts().is_empty());
    assert_eq!(
        sim.model().form().visible_error(FieldId::FullName),
        Some(FieldError::TooShort { min: 3 })
    );
}

#[test]
fn each_accepted_submit_acknowledges_again() {
    let mut sim = sim();
    fill(&mut sim, VALID);
    sim.send(Msg::Submit);
    sim.send(Msg::Submit);
    assert_eq!(sim.alerts().len(), 2);
    assert_eq!(sim.model().submissions().accepted().len(), 2);
}

#[test]
fn reset_returns_form_to_pristine() {
    let mut sim = sim();
    sim.send(Msg::Submit);
    sim.send(Msg::Reset);
    assert!(sim.model().form().store().is_pristine());
    assert!(!sim.capture_frame(80).contains("obrigatório"));
}

// ---------------------------------------------------------------------------
// Segments
// ---------------------------------------------------------------------------

#[test]
fn select_then_dismiss_retains_segment() {
    let mut sim = sim();
    sim.send(Msg::CardClick("construction".into()));
    assert_eq!(
        sim.model().selection().phase(),
        SelectionPhase::Open(SegmentId::Construction)
    );

    sim.send(Msg::PanelGesture(PanelGesture::BackdropClick));
    let state = sim.model().selection().state();
    assert!(!state.visible);
    assert_eq!(state.selected, Some(SegmentId::Construction));
    assert_eq!(sim.model().drawer().phase(), TransitionPhase::Closing);
    assert!(sim.command_log().contains(&CmdRecord::Msg));
}

#[test]
fn reselect_while_open_swaps_content() {
    let mut sim = sim();
    sim.send(Msg::CardClick("construction".into()));
    sim.send(Msg::CardClick("maritime".into()));
    let page = sim.model();
    assert_eq!(page.selection().phase(), SelectionPhase::Open(SegmentId::Maritime));
    assert_eq!(
        page.drawer().content().map(|c| c.title.as_str()),
        Some("DIVISÃO NÁUTICA DE ALTA PERFORMANCE")
    );
}

#[test]
fn unknown_segment_aborts_only_the_click() {
    let mut sim = sim();
    sim.send(Msg::CardClick("construction".into()));
    sim.send(Msg::CardClick("aviation".into()));

    assert_eq!(
        sim.model().selection().phase(),
        SelectionPhase::Open(SegmentId::Construction)
    );
    assert_eq!(sim.logs().len(), 1);
    assert!(sim.logs()[0].contains("aviation"));
    assert!(sim.is_running());
}

#[test]
fn panel_cta_dismisses_and_scrolls_to_sectors() {
    let mut sim = sim();
    sim.send(Msg::CardClick("maritime".into()));
    sim.send(Msg::PanelCta);
    assert_eq!(sim.scroll_requests(), ["setores"]);
    assert!(!sim.model().selection().state().visible);
}

#[test]
fn hero_cta_scrolls_to_diagnostic() {
    let mut sim = sim();
    sim.send(Msg::HeroCta);
    assert_eq!(sim.scroll_requests(), ["diagnostic"]);
}

#[test]
fn drawer_frame_follows_transition() {
    let mut sim = sim();
    sim.send(Msg::CardClick("construction".into()));
    sim.send(Msg::Tick(std::time::Duration::from_millis(300)));
    let open = sim.capture_frame(80).clone();
    assert!(open.contains("[aberto 100%]"));
    assert!(open.contains("+R$ 500M  VGV Digital Gerido"));

    sim.send(Msg::PanelGesture(PanelGesture::Escape));
    assert!(sim.capture_frame(80).contains("fechando"));

    sim.send(Msg::Tick(std::time::Duration::from_millis(300)));
    assert!(!sim.capture_frame(80).contains("CASE STUDY"));
}

#[test]
fn form_and_panel_are_independent() {
    let mut sim = sim();
    sim.send(Msg::Blur(FieldId::FullName, "Al".into()));
    sim.send(Msg::CardClick("maritime".into()));
    sim.send(Msg::PanelGesture(PanelGesture::CloseButton));
    assert_eq!(
        sim.model().form().visible_error(FieldId::FullName),
        Some(FieldError::TooShort { min: 3 })
    );
}

// ---------------------------------------------------------------------------
// Scripts
// ---------------------------------------------------------------------------

#[test]
fn scripted_session_replays_through_simulator() {
    let script = r#"
# lead from the construction card
{"event":"card_click","segment":"construction"}
{"event":"panel_cta"}
{"event":"change","field":"nome","value":"Maria Silva"}
{"event":"change","field":"cargo","value":"Diretora"}
{"event":"change","field":"email","value":"maria@empresa.com"}
{"event":"change","field":"empresa","value":"Grupo XYZ"}
{"event":"change","field":"segmento","value":"construcao"}
{"event":"submit"}
{"event":"quit"}
{"event":"hero_cta"}
"#;
    let events = read_script(script.as_bytes()).unwrap();
    assert_eq!(events.last(), Some(&PageEvent::HeroCta));

    let mut sim = sim();
    sim.send_all(events.into_iter().map(Msg::from));
    assert_eq!(sim.alerts(), [SUCCESS_ACKNOWLEDGMENT]);
    assert_eq!(sim.scroll_requests(), ["setores"]);
    assert!(!sim.is_running());
}
