#![forbid(unsafe_code)]

//! Text rendering of the landing page.
//!
//! The form section is drawn from [`FieldView`]s, which apply the one
//! display rule the form has: an error is shown only once its field is
//! touched. The drawer is drawn whenever it is on screen, including while it
//! slides out.

use tenessi_forms::{FieldId, FormController, SegmentOption};
use tenessi_runtime::Frame;
use tenessi_segments::{DIAGNOSTIC_ANCHOR, PanelBlock, SECTORS_ANCHOR, TransitionPhase};
use unicode_segmentation::UnicodeSegmentation;

use crate::app::LandingPage;

/// Hero call-to-action label.
pub const HERO_CTA_LABEL: &str = "SOLICITAR DIAGNÓSTICO ESTRATÉGICO";
/// Form submit button label.
pub const SUBMIT_LABEL: &str = "SOLICITAR DIAGNÓSTICO AGORA";
/// Link text on each segment card.
pub const CARD_LINK_LABEL: &str = "Ver detalhes";

/// How one form field should be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Which field.
    pub field: FieldId,
    /// Accessible label.
    pub label: &'static str,
    /// Text in the input: the value, or the placeholder when empty.
    pub text: String,
    /// Whether `text` is the placeholder.
    pub placeholder: bool,
    /// Error message to show, if any.
    pub error: Option<String>,
}

impl FieldView {
    /// Build the view of `field` from the controller's current state.
    #[must_use]
    pub fn of(form: &FormController, field: FieldId) -> Self {
        let value = form.field(field).value.as_str();
        let (text, placeholder) = if value.is_empty() {
            (field.placeholder().to_string(), true)
        } else if field == FieldId::Segment {
            let shown = SegmentOption::find(value).map_or(value, |opt| opt.label);
            (shown.to_string(), false)
        } else {
            (value.to_string(), false)
        };
        Self {
            field,
            label: field.aria_label(),
            text,
            placeholder,
            error: form.visible_error(field).map(|e| e.message()),
        }
    }

    /// Whether the input should be styled as invalid.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }
}

/// Views of every field in display order.
#[must_use]
pub fn field_views(form: &FormController) -> Vec<FieldView> {
    FieldId::ALL
        .into_iter()
        .map(|field| FieldView::of(form, field))
        .collect()
}

/// Greedy word wrap by grapheme count.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut len = 0;
    for word in text.split_whitespace() {
        let word_len = word.graphemes(true).count();
        if len > 0 && len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            len = 0;
        }
        if len > 0 {
            current.push(' ');
            len += 1;
        }
        current.push_str(word);
        len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Draw the whole page.
pub fn render_page(page: &LandingPage, frame: &mut Frame) {
    render_hero(frame);
    render_sectors(page, frame);
    render_form(page.form(), frame);
    render_drawer(page, frame);
}

fn render_hero(frame: &mut Frame) {
    frame.line("TENESSI · CONSULTORIA ESTRATÉGICA");
    frame.rule('=');
    frame.line("ESTRATÉGIA DIGITAL PARA LIDERANÇA DE MERCADO.");
    frame.line(format!("[ {HERO_CTA_LABEL} ] -> #{DIAGNOSTIC_ANCHOR}"));
    frame.rule('-');
}

fn render_sectors(page: &LandingPage, frame: &mut Frame) {
    let state = page.selection().state();
    frame.line(format!("#{SECTORS_ANCHOR}  QUEM ATENDEMOS"));
    for entry in page.selection().catalog().iter() {
        let marker = if state.visible && state.selected == Some(entry.id) {
            "(*)"
        } else {
            "( )"
        };
        frame.line(format!(
            "  {marker} {}  {CARD_LINK_LABEL} [{}]",
            entry.card_title, entry.id
        ));
    }
    frame.rule('-');
}

fn render_form(form: &FormController, frame: &mut Frame) {
    frame.line(format!(
        "#{DIAGNOSTIC_ANCHOR}  AGENDE UM DIAGNÓSTICO ESTRATÉGICO"
    ));
    for view in field_views(form) {
        let text = if view.placeholder {
            format!("<{}>", view.text)
        } else {
            view.text
        };
        let flag = if view.error.is_some() { '!' } else { ' ' };
        frame.line(format!("{flag} {}: {text}", view.label));
        if let Some(message) = view.error {
            frame.line(format!("    {message}"));
        }
    }
    frame.line(format!("[ {SUBMIT_LABEL} ]"));
    if form.accepted_count() > 0 {
        frame.line(format!("solicitações enviadas: {}", form.accepted_count()));
    }
}

fn render_drawer(page: &LandingPage, frame: &mut Frame) {
    let drawer = page.drawer();
    let Some(content) = drawer.content().filter(|_| drawer.is_rendered()) else {
        return;
    };
    let body_width = usize::from(frame.width()).saturating_sub(2).max(1);
    let phase = match drawer.phase() {
        TransitionPhase::Opening => "abrindo",
        TransitionPhase::Closing => "fechando",
        _ => "aberto",
    };

    frame.rule('#');
    frame.line(format!(
        "| {} [{phase} {:.0}%]",
        content.title,
        drawer.openness() * 100.0
    ));
    for block in &content.blocks {
        match block {
            PanelBlock::Paragraph(text) => {
                for line in wrap(text, body_width) {
                    frame.line(format!("| {line}"));
                }
            }
            PanelBlock::Metrics(metrics) => {
                for metric in metrics {
                    frame.line(format!("|   {}  {}", metric.value, metric.label));
                }
            }
            PanelBlock::CaseStudy { badge, narrative } => {
                frame.line(format!("| [{badge}]"));
                for line in wrap(narrative, body_width) {
                    frame.line(format!("| {line}"));
                }
            }
            PanelBlock::Action { label, anchor } => {
                frame.line(format!("| [ {label} ] -> #{anchor}"));
            }
        }
    }
    frame.rule('#');
}
