#![forbid(unsafe_code)]

//! Lead-capture form engine.
//!
//! The crate is split leaf-first:
//!
//! - [`validation`]: pure per-field rules (`required`, `invalid-format`, `too-short`)
//! - [`store`]: the value / touched / error record for every field
//! - [`controller`]: the change / blur / submit state machine
//!
//! Every operation runs synchronously inside the handler for the user event
//! that triggered it. Nothing here blocks, awaits, or performs I/O.
//!
//! # Example
//!
//! ```
//! use tenessi_forms::{FieldId, FormController, FormSnapshot};
//!
//! let mut form = FormController::new();
//! form.change(FieldId::FullName, "Jo");
//! assert_eq!(form.visible_error(FieldId::FullName), None);
//!
//! form.blur(FieldId::FullName, "Jo");
//! assert!(form.visible_error(FieldId::FullName).is_some());
//!
//! let outcome = form.submit(&mut |_: &FormSnapshot| {});
//! assert!(!outcome.is_accepted());
//! ```

pub mod controller;
pub mod field;
pub mod store;
pub mod validation;

pub use controller::{FieldPhase, FormController, SubmissionEffect, SubmitOutcome};
pub use field::{FieldId, SEGMENT_OPTIONS, SEGMENT_PLACEHOLDER, SegmentOption, UnknownField};
pub use store::{FieldState, FieldStateStore, FormSnapshot};
pub use validation::{FieldError, ValidationRules, Validator, validate_field};
