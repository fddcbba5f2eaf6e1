use serde::{Deserialize, Serialize};

use crate::domain::{FormState, OrderSummary, ValidationErrors};

/// A change event as emitted by a form input.
///
/// `raw_value` is the input's value attribute; for checkboxes it names the
/// topping and `checked` says whether it is now selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFieldEvent {
    pub field_name: String,
    #[serde(default)]
    pub raw_value: String,
    #[serde(default)]
    pub is_checkbox_toggle: bool,
    #[serde(default)]
    pub checked: bool,
}

impl RawFieldEvent {
    pub fn text(field_name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            raw_value: raw_value.into(),
            is_checkbox_toggle: false,
            checked: false,
        }
    }

    pub fn checkbox(
        field_name: impl Into<String>,
        raw_value: impl Into<String>,
        checked: bool,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            raw_value: raw_value.into(),
            is_checkbox_toggle: true,
            checked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum FormEvent {
    Change(RawFieldEvent),
    Submit,
    Reset,
}

/// Everything the presentation layer binds to after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    pub form: FormState,
    pub errors: ValidationErrors,
    pub is_valid: bool,
    pub submitted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_order: Option<OrderSummary>,
    pub show_failure: bool,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
