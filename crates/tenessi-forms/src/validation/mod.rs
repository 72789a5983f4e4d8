#![forbid(unsafe_code)]

//! Per-field validation rules.
//!
//! Rules are pure: the same `(field, value)` pair always yields the same
//! result, independent of call order or how often it is asked. A field never
//! reports more than one error at a time; the first failing validator in a
//! field's chain wins.
//!
//! | Field      | Chain                                |
//! |------------|--------------------------------------|
//! | `nome`     | `Required` → `MinLength(3)`          |
//! | `email`    | `Required` → `EmailFormat`           |
//! | all others | `Required`                           |
//!
//! # Example
//!
//! ```
//! use tenessi_forms::{FieldError, FieldId, validate_field};
//!
//! assert_eq!(validate_field(FieldId::Email, "   "), Some(FieldError::Required));
//! assert_eq!(validate_field(FieldId::Email, "a@b"), Some(FieldError::InvalidFormat));
//! assert_eq!(validate_field(FieldId::Email, "a@b.c"), None);
//! ```

mod email;
mod rules;
mod validators;

pub use email::is_email_shape;
pub use rules::{ValidationRules, validate_field};
pub use validators::{
    Chain, ERROR_CODE_INVALID_FORMAT, ERROR_CODE_REQUIRED, ERROR_CODE_TOO_SHORT, EmailFormat,
    FieldError, MinLength, Required, Validator, is_blank, trim_blank,
};
