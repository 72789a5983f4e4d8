#![forbid(unsafe_code)]

//! Form state machine.
//!
//! Each field moves `Untouched → TouchedValid | TouchedInvalid` on its first
//! blur and then flips between the two touched phases as its value changes.
//!
//! | Event    | Untouched field                  | Touched field             |
//! |----------|----------------------------------|---------------------------|
//! | change   | store value, no error computed   | store value, recompute    |
//! | blur     | store value, touch, recompute    | store value, recompute    |
//! | submit   | recompute every field from its value, touch every field  ||
//!
//! A submit attempt is binary: either every field is valid and the supplied
//! [`SubmissionEffect`] runs exactly once, or nothing is submitted and every
//! error becomes visible. Attempts are independent of each other.

use tracing::{debug, debug_span, info};

use crate::field::FieldId;
use crate::store::{FieldState, FieldStateStore, FormSnapshot};
use crate::validation::{FieldError, ValidationRules};

/// Observable phase of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPhase {
    /// Never blurred (and not yet submitted) since the last reset.
    Untouched,
    /// Touched and currently valid.
    TouchedValid,
    /// Touched and carrying an error.
    TouchedInvalid,
}

/// Side effect run when a submit attempt passes validation.
///
/// The reference page acknowledges the request to the user; a production
/// deployment would hand the snapshot to a lead-submission backend.
pub trait SubmissionEffect {
    /// Called once per accepted submission.
    fn on_accepted(&mut self, snapshot: &FormSnapshot);
}

impl<F> SubmissionEffect for F
where
    F: FnMut(&FormSnapshot),
{
    fn on_accepted(&mut self, snapshot: &FormSnapshot) {
        self(snapshot);
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the effect ran with this snapshot.
    Accepted(FormSnapshot),
    /// At least one field failed; nothing was submitted.
    Blocked {
        /// Failing fields in display order.
        errors: Vec<(FieldId, FieldError)>,
    },
}

impl SubmitOutcome {
    /// Whether the submission went through.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Errors that blocked the submission (empty when accepted).
    #[must_use]
    pub fn errors(&self) -> &[(FieldId, FieldError)] {
        match self {
            Self::Accepted(_) => &[],
            Self::Blocked { errors } => errors,
        }
    }
}

/// Drives the field state store from user events.
#[derive(Debug, Default)]
pub struct FormController {
    store: FieldStateStore,
    rules: ValidationRules,
    attempts: u32,
    accepted: u32,
}

impl FormController {
    /// Create a controller with empty fields and the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with a custom rule set.
    #[must_use]
    pub fn with_rules(rules: ValidationRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// The user edited `field`.
    ///
    /// The value is always stored. The error is recomputed only once the
    /// field has been touched, so a field is never flagged before the user
    /// has left it at least once.
    pub fn change(&mut self, field: FieldId, value: impl Into<String>) {
        self.store.set_value(field, value);
        if self.store.is_touched(field) {
            self.revalidate(field);
        }
        debug!(
            field = field.name(),
            touched = self.store.is_touched(field),
            error = self.store.error(field).map(|e| e.code()),
            "field changed"
        );
    }

    /// The user left `field` with `value` in it.
    ///
    /// Marks the field touched and recomputes its error regardless of its
    /// prior phase. Repeating the call with the same value is a no-op.
    pub fn blur(&mut self, field: FieldId, value: impl Into<String>) {
        self.store.set_value(field, value);
        self.store.set_touched(field);
        self.revalidate(field);
        debug!(
            field = field.name(),
            error = self.store.error(field).map(|e| e.code()),
            "field blurred"
        );
    }

    /// Attempt to submit the form.
    ///
    /// Every field is revalidated from its current value (stored errors are
    /// never trusted) and marked touched. If no field has an error, `effect`
    /// runs exactly once with the snapshot.
    pub fn submit<E>(&mut self, effect: &mut E) -> SubmitOutcome
    where
        E: SubmissionEffect + ?Sized,
    {
        self.attempts = self.attempts.saturating_add(1);
        let span = debug_span!("form_submit", attempt = self.attempts);
        let _guard = span.enter();

        for field in FieldId::ALL {
            self.revalidate(field);
        }
        self.store.mark_all_touched();

        let snapshot = self.store.snapshot();
        let errors = snapshot.errors();
        if !errors.is_empty() || !snapshot.is_submittable() {
            info!(
                errors = errors.len(),
                fields = ?errors.iter().map(|(f, e)| (f.name(), e.code())).collect::<Vec<_>>(),
                "submission blocked"
            );
            return SubmitOutcome::Blocked { errors };
        }

        effect.on_accepted(&snapshot);
        self.accepted = self.accepted.saturating_add(1);
        info!(accepted = self.accepted, "submission accepted");
        SubmitOutcome::Accepted(snapshot)
    }

    /// Return every field to its initial phase.
    pub fn reset(&mut self) {
        self.store.reset();
        debug!("form reset");
    }

    fn revalidate(&mut self, field: FieldId) {
        let error = self.rules.validate(field, self.store.value(field));
        self.store.set_error(field, error);
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// State of one field.
    #[must_use]
    pub fn field(&self, field: FieldId) -> &FieldState {
        self.store.get(field)
    }

    /// Phase of one field.
    #[must_use]
    pub fn phase(&self, field: FieldId) -> FieldPhase {
        let state = self.store.get(field);
        match (state.touched, state.error) {
            (false, _) => FieldPhase::Untouched,
            (true, None) => FieldPhase::TouchedValid,
            (true, Some(_)) => FieldPhase::TouchedInvalid,
        }
    }

    /// Error to render for `field`: present only when touched and invalid.
    #[must_use]
    pub fn visible_error(&self, field: FieldId) -> Option<FieldError> {
        let state = self.store.get(field);
        if state.shows_error() { state.error } else { None }
    }

    /// Read access to the underlying store.
    #[must_use]
    pub fn store(&self) -> &FieldStateStore {
        &self.store
    }

    /// Current snapshot of every field.
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        self.store.snapshot()
    }

    /// Number of submit attempts since creation.
    #[must_use]
    pub fn attempt_count(&self) -> u32 {
        self.attempts
    }

    /// Number of accepted submissions since creation.
    #[must_use]
    pub fn accepted_count(&self) -> u32 {
        self.accepted
    }
}
