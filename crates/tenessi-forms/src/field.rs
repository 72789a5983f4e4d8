#![forbid(unsafe_code)]

//! Field identifiers and static field metadata.
//!
//! The lead-capture form has a fixed set of five mandatory fields. Each one
//! has a stable wire name (the `name` attribute the page submits under), a
//! placeholder, and an accessible label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of one input slot in the lead-capture form.
///
/// Variants are declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldId {
    /// Full name of the contact.
    #[serde(rename = "nome")]
    FullName,
    /// Role or title inside the company.
    #[serde(rename = "cargo")]
    Role,
    /// Corporate e-mail address.
    #[serde(rename = "email")]
    Email,
    /// Company or economic group.
    #[serde(rename = "empresa")]
    Company,
    /// Market segment chosen from [`SEGMENT_OPTIONS`].
    #[serde(rename = "segmento")]
    Segment,
}

impl FieldId {
    /// Number of fields in the form.
    pub const COUNT: usize = 5;

    /// All fields, in display order.
    pub const ALL: [FieldId; Self::COUNT] = [
        Self::FullName,
        Self::Role,
        Self::Email,
        Self::Company,
        Self::Segment,
    ];

    /// Dense index of this field (its position in [`FieldId::ALL`]).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wire name used by the page markup.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FullName => "nome",
            Self::Role => "cargo",
            Self::Email => "email",
            Self::Company => "empresa",
            Self::Segment => "segmento",
        }
    }

    /// Placeholder text shown while the input is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::FullName => "NOME COMPLETO",
            Self::Role => "CARGO / POSIÇÃO",
            Self::Email => "E-MAIL CORPORATIVO",
            Self::Company => "EMPRESA / GRUPO",
            Self::Segment => SEGMENT_PLACEHOLDER,
        }
    }

    /// Accessible label for assistive technology.
    #[must_use]
    pub const fn aria_label(self) -> &'static str {
        match self {
            Self::FullName => "Nome completo",
            Self::Role => "Cargo ou posição na empresa",
            Self::Email => "E-mail corporativo",
            Self::Company => "Nome da empresa ou grupo econômico",
            Self::Segment => "Segmento de atuação",
        }
    }

    /// Every field in this form is mandatory.
    #[must_use]
    pub const fn is_required(self) -> bool {
        true
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A wire name that does not belong to any form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown form field: {:?}", self.0)
    }
}

impl std::error::Error for UnknownField {}

// ---------------------------------------------------------------------------
// Segment choice options
// ---------------------------------------------------------------------------

/// Placeholder entry of the segment select. Its value is the empty string.
pub const SEGMENT_PLACEHOLDER: &str = "SELECIONE SEU SEGMENTO";

/// One option of the segment-choice select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentOption {
    /// Submitted value.
    pub value: &'static str,
    /// Display label.
    pub label: &'static str,
}

/// Options offered by the segment-choice field.
pub const SEGMENT_OPTIONS: [SegmentOption; 3] = [
    SegmentOption {
        value: "construcao",
        label: "Construção Civil",
    },
    SegmentOption {
        value: "maritimo",
        label: "Marítimo / Náutica",
    },
    SegmentOption {
        value: "industria",
        label: "Indústria de Base",
    },
];

impl SegmentOption {
    /// Look up an option by its submitted value.
    #[must_use]
    pub fn find(value: &str) -> Option<&'static SegmentOption> {
        SEGMENT_OPTIONS.iter().find(|opt| opt.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_display_order() {
        for (i, field) in FieldId::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn wire_names_round_trip_through_from_str() {
        for field in FieldId::ALL {
            assert_eq!(field.name().parse::<FieldId>(), Ok(field));
        }
        assert_eq!(
            "telefone".parse::<FieldId>(),
            Err(UnknownField("telefone".into()))
        );
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&FieldId::Company).unwrap();
        assert_eq!(json, "\"empresa\"");
        let back: FieldId = serde_json::from_str("\"cargo\"").unwrap();
        assert_eq!(back, FieldId::Role);
    }

    #[test]
    fn all_fields_are_required() {
        assert!(FieldId::ALL.iter().all(|f| f.is_required()));
    }

    #[test]
    fn segment_option_lookup() {
        assert_eq!(
            SegmentOption::find("maritimo").map(|o| o.label),
            Some("Marítimo / Náutica")
        );
        assert!(SegmentOption::find("").is_none());
    }
}
