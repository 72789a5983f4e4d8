#![forbid(unsafe_code)]

//! Authoritative per-field state.
//!
//! The store is a plain data holder: it never validates and never derives an
//! error on its own. The [`FormController`](crate::FormController) decides
//! when errors are recomputed and writes them back here.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::field::FieldId;
use crate::validation::{FieldError, is_blank};

/// Value, touched flag, and last computed error of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldState {
    /// Current raw value as typed or selected.
    pub value: String,
    /// `true` once the field has lost focus at least once since the last reset.
    pub touched: bool,
    /// Last computed error, if any.
    pub error: Option<FieldError>,
}

impl FieldState {
    /// Whether the error should be shown to the user.
    #[must_use]
    pub fn shows_error(&self) -> bool {
        self.touched && self.error.is_some()
    }
}

/// Holds one [`FieldState`] for every [`FieldId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldStateStore {
    fields: [FieldState; FieldId::COUNT],
}

impl FieldStateStore {
    /// Create a store with empty, untouched, error-free fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State of one field.
    #[must_use]
    pub fn get(&self, field: FieldId) -> &FieldState {
        &self.fields[field.index()]
    }

    /// Current value of one field.
    #[must_use]
    pub fn value(&self, field: FieldId) -> &str {
        &self.get(field).value
    }

    /// Whether the field has been touched.
    #[must_use]
    pub fn is_touched(&self, field: FieldId) -> bool {
        self.get(field).touched
    }

    /// Last stored error of one field.
    #[must_use]
    pub fn error(&self, field: FieldId) -> Option<FieldError> {
        self.get(field).error
    }

    /// Replace the value. The stored error is left as it is.
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.fields[field.index()].value = value.into();
    }

    /// Mark the field as touched. Idempotent.
    pub fn set_touched(&mut self, field: FieldId) {
        self.fields[field.index()].touched = true;
    }

    /// Overwrite the stored error.
    pub fn set_error(&mut self, field: FieldId, error: Option<FieldError>) {
        self.fields[field.index()].error = error;
    }

    /// Mark every field as touched.
    pub fn mark_all_touched(&mut self) {
        self.fields.iter_mut().for_each(|f| f.touched = true);
    }

    /// Return every field to empty, untouched, and error-free.
    pub fn reset(&mut self) {
        self.fields = Default::default();
    }

    /// Iterate over fields in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldState)> {
        FieldId::ALL.into_iter().zip(self.fields.iter())
    }

    /// Fields that have been touched.
    #[must_use]
    pub fn touched_fields(&self) -> Vec<FieldId> {
        self.iter()
            .filter_map(|(id, state)| state.touched.then_some(id))
            .collect()
    }

    /// Whether no field has been touched.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.fields.iter().all(|f| !f.touched)
    }

    /// Capture the current state of every field.
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self.iter().map(|(id, state)| (id, state.clone())).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// FormSnapshot
// ---------------------------------------------------------------------------

/// Every field's state at one instant.
///
/// Used to gate submission and, once accepted, as the payload handed to a
/// submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    fields: BTreeMap<FieldId, FieldState>,
}

impl FormSnapshot {
    /// State of one field.
    #[must_use]
    pub fn field(&self, field: FieldId) -> Option<&FieldState> {
        self.fields.get(&field)
    }

    /// Value of one field (empty if absent).
    #[must_use]
    pub fn value(&self, field: FieldId) -> &str {
        self.field(field).map_or("", |f| f.value.as_str())
    }

    /// Every field that carries an error, in display order.
    #[must_use]
    pub fn errors(&self) -> Vec<(FieldId, FieldError)> {
        self.fields
            .iter()
            .filter_map(|(id, state)| state.error.map(|e| (*id, e)))
            .collect()
    }

    /// Number of fields carrying an error.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.fields.values().filter(|f| f.error.is_some()).count()
    }

    /// Submission is allowed only if every required field has a value and no
    /// field carries an error.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        let all_filled = FieldId::ALL
            .iter()
            .filter(|id| id.is_required())
            .all(|id| !is_blank(self.value(*id)));
        all_filled && self.error_count() == 0
    }

    /// Field values keyed by wire name, for hand-off to a submission backend.
    #[must_use]
    pub fn values(&self) -> BTreeMap<&'static str, &str> {
        self.fields
            .iter()
            .map(|(id, state)| (id.name(), state.value.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_pristine() {
        let store = FieldStateStore::new();
        assert!(store.is_pristine());
        for (_, state) in store.iter() {
            assert_eq!(state, &FieldState::default());
        }
    }

    #[test]
    fn set_value_does_not_touch_error() {
        let mut store = FieldStateStore::new();
        store.set_error(FieldId::Email, Some(FieldError::InvalidFormat));
        store.set_value(FieldId::Email, "a@b.c");
        assert_eq!(store.value(FieldId::Email), "a@b.c");
        assert_eq!(store.error(FieldId::Email), Some(FieldError::InvalidFormat));
    }

    #[test]
    fn set_touched_is_idempotent() {
        let mut store = FieldStateStore::new();
        store.set_touched(FieldId::Role);
        store.set_touched(FieldId::Role);
        assert!(store.is_touched(FieldId::Role));
        assert_eq!(store.touched_fields(), vec![FieldId::Role]);
    }

    #[test]
    fn mark_all_touched_and_reset() {
        let mut store = FieldStateStore::new();
        store.set_value(FieldId::Company, "Grupo XYZ");
        store.mark_all_touched();
        assert_eq!(store.touched_fields(), FieldId::ALL.to_vec());
        store.reset();
        assert!(store.is_pristine());
        assert_eq!(store.value(FieldId::Company), "");
    }

    #[test]
    fn shows_error_requires_touch() {
        let mut state = FieldState {
            error: Some(FieldError::Required),
            ..FieldState::default()
        };
        assert!(!state.shows_error());
        state.touched = true;
        assert!(state.shows_error());
    }

    #[test]
    fn snapshot_gates_on_values_and_errors() {
        let mut store = FieldStateStore::new();
        assert!(!store.snapshot().is_submittable());

        for field in FieldId::ALL {
            store.set_value(field, "valor");
        }
        assert!(store.snapshot().is_submittable());

        store.set_error(FieldId::Email, Some(FieldError::InvalidFormat));
        let snap = store.snapshot();
        assert!(!snap.is_submittable());
        assert_eq!(snap.errors(), vec![(FieldId::Email, FieldError::InvalidFormat)]);
        assert_eq!(snap.error_count(), 1);
    }

    #[test]
    fn snapshot_serializes_by_wire_name() {
        let mut store = FieldStateStore::new();
        store.set_value(FieldId::FullName, "Maria Silva");
        let json = serde_json::to_value(store.snapshot()).unwrap();
        assert_eq!(json["fields"]["nome"]["value"], "Maria Silva");
        assert_eq!(json["fields"]["email"]["error"], serde_json::Value::Null);
        assert_eq!(store.snapshot().values()["nome"], "Maria Silva");
    }
}
