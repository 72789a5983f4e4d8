#![forbid(unsafe_code)]

//! Field → validator chain mapping.

use std::fmt;
use std::sync::OnceLock;

use super::validators::{Chain, EmailFormat, FieldError, MinLength, Required, Validator};
use crate::field::FieldId;

/// Minimum trimmed length of the full-name field.
pub const FULL_NAME_MIN_LEN: usize = 3;

/// The validation rule set for every form field.
///
/// Immutable once built. [`ValidationRules::standard`] is the rule set the
/// page uses; [`validate_field`] evaluates it through a shared instance.
pub struct ValidationRules {
    chains: [Chain; FieldId::COUNT],
}

impl ValidationRules {
    /// Build the standard rule set.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            chains: FieldId::ALL.map(Self::standard_chain),
        }
    }

    fn standard_chain(field: FieldId) -> Chain {
        let chain = Chain::new().then(Required);
        match field {
            FieldId::FullName => chain.then(MinLength::new(FULL_NAME_MIN_LEN)),
            FieldId::Email => chain.then(EmailFormat),
            FieldId::Role | FieldId::Company | FieldId::Segment => chain,
        }
    }

    /// Replace the chain for one field.
    #[must_use]
    pub fn with_chain(mut self, field: FieldId, chain: Chain) -> Self {
        self.chains[field.index()] = chain;
        self
    }

    /// Validate `value` for `field`. Returns the single error, if any.
    #[must_use]
    pub fn validate(&self, field: FieldId, value: &str) -> Option<FieldError> {
        self.chains[field.index()].validate(value).err()
    }

    /// The validator chain attached to `field`.
    #[must_use]
    pub fn chain(&self, field: FieldId) -> &Chain {
        &self.chains[field.index()]
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for ValidationRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for field in FieldId::ALL {
            map.entry(&field.name(), self.chain(field));
        }
        map.finish()
    }
}

/// Validate one field against the standard rule set.
#[must_use]
pub fn validate_field(field: FieldId, value: &str) -> Option<FieldError> {
    static STANDARD: OnceLock<ValidationRules> = OnceLock::new();
    STANDARD
        .get_or_init(ValidationRules::standard)
        .validate(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_required_for_every_field() {
        for field in FieldId::ALL {
            assert_eq!(validate_field(field, ""), Some(FieldError::Required));
            assert_eq!(validate_field(field, "   "), Some(FieldError::Required));
            assert_eq!(validate_field(field, "\u{FEFF}"), Some(FieldError::Required));
        }
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate_field(FieldId::Email, "a@b.c"), None);
        assert_eq!(
            validate_field(FieldId::Email, "a@b"),
            Some(FieldError::InvalidFormat)
        );
        assert_eq!(
            validate_field(FieldId::Email, "plainaddress"),
            Some(FieldError::InvalidFormat)
        );
        for numeric_top in ["a@1.2", "a@-.-", "user@example.123"] {
            assert_eq!(
                validate_field(FieldId::Email, numeric_top),
                Some(FieldError::InvalidFormat),
                "{numeric_top}"
            );
        }
    }

    #[test]
    fn name_rules() {
        assert_eq!(
            validate_field(FieldId::FullName, "Jo"),
            Some(FieldError::TooShort { min: 3 })
        );
        assert_eq!(validate_field(FieldId::FullName, "Joe"), None);
        assert_eq!(
            validate_field(FieldId::FullName, "  Jo  "),
            Some(FieldError::TooShort { min: 3 })
        );
    }

    #[test]
    fn format_and_length_rules_are_field_specific() {
        // A short value is fine outside the name field.
        assert_eq!(validate_field(FieldId::Role, "CE"), None);
        // A non-email is fine outside the email field.
        assert_eq!(validate_field(FieldId::Company, "plainaddress"), None);
        assert_eq!(validate_field(FieldId::Segment, "construcao"), None);
    }

    #[test]
    fn custom_chain_overrides_standard() {
        let rules = ValidationRules::standard()
            .with_chain(FieldId::Role, Chain::new().then(Required).then(MinLength::new(5)));
        assert_eq!(
            rules.validate(FieldId::Role, "CEO"),
            Some(FieldError::TooShort { min: 5 })
        );
        assert_eq!(rules.validate(FieldId::FullName, "Joe"), None);
    }

    #[test]
    fn debug_lists_chains_by_wire_name() {
        let dbg = format!("{:?}", ValidationRules::standard());
        assert!(dbg.contains("\"nome\": [\"required\", \"min_length\"]"));
        assert!(dbg.contains("\"email\": [\"required\", \"email_format\"]"));
    }
}
