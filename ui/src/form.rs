//! Reactive form state shared by the create and edit forms
//!
//! A form is a flat map of field name to string value plus a parallel map
//! of field name to validation message. Both live in signals so inputs
//! and error labels update in place.

use std::collections::BTreeMap;

use leptos::prelude::*;

/// One entry in a select field.
///
/// `label` is what the admin sees, `value` is what gets submitted and `id`
/// ties the option back to the backend record it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    pub id: String,
}

impl SelectOption {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            id: id.into(),
        }
    }
}

/// Field values and validation errors for one form instance
#[derive(Clone, Copy)]
pub struct FormState {
    values: RwSignal<BTreeMap<String, String>>,
    errors: RwSignal<BTreeMap<String, String>>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            values: RwSignal::new(BTreeMap::new()),
            errors: RwSignal::new(BTreeMap::new()),
        }
    }

    /// Current value of a field, tracked so inputs re-render on change
    pub fn value(&self, field: &str) -> String {
        self.values
            .with(|values| values.get(field).cloned().unwrap_or_default())
    }

    pub fn set_value(&self, field: &str, value: String) {
        self.values.update(|values| {
            values.insert(field.to_string(), value);
        });
    }

    /// Validation message for a field, if any
    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.with(|errors| errors.get(field).cloned())
    }

    /// Replaces all validation messages at once, clearing fields that
    /// are absent from the new map
    pub fn set_errors(&self, errors: BTreeMap<String, String>) {
        self.errors.set(errors);
    }

    pub fn clear_errors(&self) {
        self.errors.update(|errors| errors.clear());
    }

    /// Seeds the form with values loaded from the backend
    pub fn populate(&self, entries: impl IntoIterator<Item = (String, String)>) {
        self.values.update(|values| {
            for (field, value) in entries {
                values.insert(field, value);
            }
        });
    }

    /// Untracked snapshot of the values, for validation and submission
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values.get_untracked()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
