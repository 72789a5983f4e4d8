#![forbid(unsafe_code)]

//! Error kinds and the built-in validators.

use std::fmt;

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use super::email::is_email_shape;

// ---------------------------------------------------------------------------
// Error codes
// ---------------------------------------------------------------------------

/// Error code for an empty (or whitespace-only) mandatory field.
pub const ERROR_CODE_REQUIRED: &str = "required";
/// Error code for a malformed e-mail address.
pub const ERROR_CODE_INVALID_FORMAT: &str = "invalid-format";
/// Error code for a value shorter than the field minimum.
pub const ERROR_CODE_TOO_SHORT: &str = "too-short";

// ---------------------------------------------------------------------------
// FieldError
// ---------------------------------------------------------------------------

/// The reason a single field failed validation.
///
/// Field errors are values stored next to the field they belong to. They
/// never propagate past the form controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldError {
    /// The trimmed value is empty.
    Required,
    /// The value is not shaped like an e-mail address.
    InvalidFormat,
    /// The trimmed value has fewer than `min` characters.
    TooShort {
        /// Minimum length in grapheme clusters.
        min: usize,
    },
}

impl FieldError {
    /// Stable code for programmatic handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Required => ERROR_CODE_REQUIRED,
            Self::InvalidFormat => ERROR_CODE_INVALID_FORMAT,
            Self::TooShort { .. } => ERROR_CODE_TOO_SHORT,
        }
    }

    /// User-facing message rendered under the input.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Required => "Este campo é obrigatório".to_string(),
            Self::InvalidFormat => "E-mail inválido".to_string(),
            Self::TooShort { min } => format!("Nome deve ter pelo menos {min} caracteres"),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

// ---------------------------------------------------------------------------
// Validator trait
// ---------------------------------------------------------------------------

/// A pure check over a candidate string value.
///
/// Implementations must not keep state between calls.
pub trait Validator: Send + Sync {
    /// Validate `value`, returning the failure reason if it is rejected.
    fn validate(&self, value: &str) -> Result<(), FieldError>;

    /// Short name for diagnostics.
    fn name(&self) -> &'static str;
}

// ---------------------------------------------------------------------------
// Built-in validators
// ---------------------------------------------------------------------------

/// Strip surrounding whitespace, counting U+FEFF (BOM) as whitespace.
#[must_use]
pub fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Returns `true` if `value` is empty after [`trim_blank`].
#[must_use]
pub fn is_blank(value: &str) -> bool {
    trim_blank(value).is_empty()
}

/// Rejects empty and whitespace-only values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Validator for Required {
    fn validate(&self, value: &str) -> Result<(), FieldError> {
        if is_blank(value) {
            Err(FieldError::Required)
        } else {
            Ok(())
        }
    }

    fn name(&self) -> &'static str {
        "required"
    }
}

/// Rejects values whose trimmed length is below `min` grapheme clusters.
#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    /// Minimum number of user-perceived characters.
    pub min: usize,
}

impl MinLength {
    /// Create a new `MinLength` validator.
    #[must_use]
    pub const fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Validator for MinLength {
    fn validate(&self, value: &str) -> Result<(), FieldError> {
        let len = trim_blank(value).graphemes(true).count();
        if len < self.min {
            Err(FieldError::TooShort { min: self.min })
        } else {
            Ok(())
        }
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}

/// Rejects non-empty values that are not shaped like an e-mail address.
///
/// Empty values pass; pair with [`Required`] to make the field mandatory.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailFormat;

impl Validator for EmailFormat {
    fn validate(&self, value: &str) -> Result<(), FieldError> {
        if is_blank(value) || is_email_shape(value) {
            Ok(())
        } else {
            Err(FieldError::InvalidFormat)
        }
    }

    fn name(&self) -> &'static str {
        "email_format"
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Runs validators in order and reports the first failure.
#[derive(Default)]
pub struct Chain {
    validators: Vec<Box<dyn Validator>>,
}

impl Chain {
    /// Create an empty chain (accepts everything).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validator to the end of the chain.
    #[must_use]
    pub fn then(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Number of validators in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Whether the chain has no validators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Names of the chained validators, in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.validators.iter().map(|v| v.name())
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl Validator for Chain {
    fn validate(&self, value: &str) -> Result<(), FieldError> {
        self.validators.iter().try_for_each(|v| v.validate(value))
    }

    fn name(&self) -> &'static str {
        "chain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert_eq!(Required.validate(""), Err(FieldError::Required));
        assert_eq!(Required.validate(" \t\n"), Err(FieldError::Required));
        assert_eq!(Required.validate(" x "), Ok(()));
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        assert_eq!(Required.validate("\u{FEFF}"), Err(FieldError::Required));
        assert_eq!(Required.validate(" \u{FEFF}\t"), Err(FieldError::Required));
        assert_eq!(trim_blank("\u{FEFF}Jo\u{FEFF}"), "Jo");
        assert_eq!(
            MinLength::new(3).validate("\u{FEFF}Jo\u{FEFF}"),
            Err(FieldError::TooShort { min: 3 })
        );
        assert_eq!(EmailFormat.validate("\u{FEFF}"), Ok(()));
    }

    #[test]
    fn min_length_counts_trimmed_graphemes() {
        let v = MinLength::new(3);
        assert_eq!(v.validate("Jo"), Err(FieldError::TooShort { min: 3 }));
        assert_eq!(v.validate("  Jo  "), Err(FieldError::TooShort { min: 3 }));
        assert_eq!(v.validate("Joe"), Ok(()));
        // "e" + combining acute is one grapheme.
        assert_eq!(
            v.validate("Ze\u{301}"),
            Err(FieldError::TooShort { min: 3 })
        );
        assert_eq!(v.validate("Zoé"), Ok(()));
    }

    #[test]
    fn email_format_skips_empty() {
        assert_eq!(EmailFormat.validate(""), Ok(()));
        assert_eq!(EmailFormat.validate("a@b"), Err(FieldError::InvalidFormat));
        assert_eq!(EmailFormat.validate("a@b.c"), Ok(()));
    }

    #[test]
    fn chain_reports_first_failure() {
        let chain = Chain::new().then(Required).then(MinLength::new(3));
        assert_eq!(chain.validate(""), Err(FieldError::Required));
        assert_eq!(chain.validate("ab"), Err(FieldError::TooShort { min: 3 }));
        assert_eq!(chain.validate("abc"), Ok(()));
        assert_eq!(chain.len(), 2);
        assert_eq!(
            chain.names().collect::<Vec<_>>(),
            vec!["required", "min_length"]
        );
    }

    #[test]
    fn empty_chain_accepts_everything() {
        let chain = Chain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.validate(""), Ok(()));
    }

    #[test]
    fn codes_and_messages() {
        assert_eq!(FieldError::Required.code(), "required");
        assert_eq!(FieldError::InvalidFormat.code(), "invalid-format");
        assert_eq!(FieldError::TooShort { min: 3 }.code(), "too-short");
        assert_eq!(FieldError::Required.to_string(), "Este campo é obrigatório");
        assert_eq!(FieldError::InvalidFormat.to_string(), "E-mail inválido");
        assert_eq!(
            FieldError::TooShort { min: 3 }.to_string(),
            "Nome deve ter pelo menos 3 caracteres"
        );
    }
}
