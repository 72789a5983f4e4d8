#![forbid(unsafe_code)]

//! Page events as they arrive from a session script.
//!
//! One event per JSON object, tagged by `event`:
//!
//! ```json
//! {"event":"change","field":"nome","value":"Maria Silva"}
//! {"event":"blur","field":"email","value":"maria@empresa.com"}
//! {"event":"submit"}
//! {"event":"card_click","segment":"construction"}
//! {"event":"panel_gesture","gesture":"escape"}
//! {"event":"tick","ms":300}
//! ```
//!
//! Segment identifiers stay as raw strings here. Resolving them is the
//! selection coordinator's job, so an unknown card is reported there.

use serde::{Deserialize, Serialize};
use tenessi_forms::FieldId;
use tenessi_segments::PanelGesture;

/// A user interaction with the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PageEvent {
    /// Input value changed.
    Change {
        /// Field that changed.
        field: FieldId,
        /// New raw value.
        value: String,
    },
    /// Input lost focus.
    Blur {
        /// Field that lost focus.
        field: FieldId,
        /// Raw value at blur time.
        value: String,
    },
    /// Form submit button.
    Submit,
    /// Clear the form.
    Reset,
    /// A segment card was clicked.
    CardClick {
        /// Segment identifier as written on the card.
        segment: String,
    },
    /// A dismissal gesture on the open panel.
    PanelGesture {
        /// Which gesture.
        gesture: PanelGesture,
    },
    /// The call-to-action inside the panel.
    PanelCta,
    /// Show the last selected segment again.
    Reopen,
    /// The hero call-to-action.
    HeroCta,
    /// Wall-clock time passing, for panel transitions.
    Tick {
        /// Elapsed milliseconds.
        ms: u64,
    },
    /// End the session.
    Quit,
}

impl PageEvent {
    /// Short event name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Change { .. } => "change",
            Self::Blur { .. } => "blur",
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::CardClick { .. } => "card_click",
            Self::PanelGesture { .. } => "panel_gesture",
            Self::PanelCta => "panel_cta",
            Self::Reopen => "reopen",
            Self::HeroCta => "hero_cta",
            Self::Tick { .. } => "tick",
            Self::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_events_by_wire_name() {
        let ev: PageEvent =
            serde_json::from_str(r#"{"event":"change","field":"empresa","value":"Grupo XYZ"}"#)
                .unwrap();
        assert_eq!(
            ev,
            PageEvent::Change {
                field: FieldId::Company,
                value: "Grupo XYZ".into()
            }
        );
    }

    #[test]
    fn parses_unit_and_gesture_events() {
        let submit: PageEvent = serde_json::from_str(r#"{"event":"submit"}"#).unwrap();
        assert_eq!(submit, PageEvent::Submit);

        let g: PageEvent =
            serde_json::from_str(r#"{"event":"panel_gesture","gesture":"backdrop_click"}"#)
                .unwrap();
        assert_eq!(
            g,
            PageEvent::PanelGesture {
                gesture: PanelGesture::BackdropClick
            }
        );
    }

    #[test]
    fn card_click_keeps_raw_segment() {
        let ev: PageEvent =
            serde_json::from_str(r#"{"event":"card_click","segment":"aviation"}"#).unwrap();
        assert_eq!(ev.kind(), "card_click");
        assert!(matches!(ev, PageEvent::CardClick { segment } if segment == "aviation"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = serde_json::from_str::<PageEvent>(
            r#"{"event":"change","field":"telefone","value":"1"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn serializes_with_tag() {
        let json = serde_json::to_string(&PageEvent::Tick { ms: 300 }).unwrap();
        assert_eq!(json, r#"{"event":"tick","ms":300}"#);
    }
}
