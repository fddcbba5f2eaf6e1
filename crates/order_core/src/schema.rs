//! Validation rule set for the order form.
//!
//! Every rule is evaluated on every call; nothing short-circuits, so the
//! resulting error map always has one entry per failing field.

use serde::{Deserialize, Serialize};
use shared::domain::{FormField, FormState, Size, ValidationErrors};

pub const DEFAULT_MIN_FULL_NAME_LEN: usize = 3;
pub const DEFAULT_MAX_FULL_NAME_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessages {
    pub full_name_required: String,
    pub full_name_too_short: String,
    pub full_name_too_long: String,
    pub size_required: String,
    pub size_incorrect: String,
}

impl ValidationMessages {
    pub fn for_limits(min_full_name_len: usize, max_full_name_len: Option<usize>) -> Self {
        Self {
            full_name_required: "Full name is required".into(),
            full_name_too_short: format!(
                "full name must be at least {min_full_name_len} characters"
            ),
            full_name_too_long: format!(
                "full name must be at most {} characters",
                max_full_name_len.unwrap_or(DEFAULT_MAX_FULL_NAME_LEN)
            ),
            size_required: "Size is required".into(),
            size_incorrect: format!(
                "size must be {}",
                Size::ALL.map(Size::code).join(" or ")
            ),
        }
    }
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self::for_limits(DEFAULT_MIN_FULL_NAME_LEN, Some(DEFAULT_MAX_FULL_NAME_LEN))
    }
}

/// Outcome of validating the whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: ValidationErrors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    min_full_name_len: usize,
    max_full_name_len: Option<usize>,
    messages: ValidationMessages,
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_FULL_NAME_LEN))
    }
}

impl FormSchema {
    /// Schema with the standard minimum length and an optional maximum.
    /// Messages are generated to match the limits.
    pub fn new(max_full_name_len: Option<usize>) -> Self {
        Self {
            min_full_name_len: DEFAULT_MIN_FULL_NAME_LEN,
            max_full_name_len,
            messages: ValidationMessages::for_limits(DEFAULT_MIN_FULL_NAME_LEN, max_full_name_len),
        }
    }

    pub fn with_messages(mut self, messages: ValidationMessages) -> Self {
        self.messages = messages;
        self
    }

    pub fn min_full_name_len(&self) -> usize {
        self.min_full_name_len
    }

    pub fn max_full_name_len(&self) -> Option<usize> {
        self.max_full_name_len
    }

    pub fn messages(&self) -> &ValidationMessages {
        &self.messages
    }

    pub fn validate(&self, state: &FormState) -> ValidationReport {
        let mut errors = ValidationErrors::new();
        for field in FormField::ALL {
            if let Some(message) = self.validate_field(state, field) {
                errors.insert(field, message);
            }
        }

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Returns the active error message for one field, if it fails.
    pub fn validate_field(&self, state: &FormState, field: FormField) -> Option<String> {
        match field {
            FormField::FullName => self.check_full_name(&state.full_name),
            FormField::Size => self.check_size(&state.size),
            // Any subset of the catalog is acceptable, including none.
            FormField::Toppings => None,
        }
    }

    fn check_full_name(&self, full_name: &str) -> Option<String> {
        let len = full_name.chars().count();
        if len == 0 {
            return Some(self.messages.full_name_required.clone());
        }
        if len < self.min_full_name_len {
            return Some(self.messages.full_name_too_short.clone());
        }
        match self.max_full_name_len {
            Some(max) if len > max => Some(self.messages.full_name_too_long.clone()),
            _ => None,
        }
    }

    fn check_size(&self, size: &str) -> Option<String> {
        if size.is_empty() {
            return Some(self.messages.size_required.clone());
        }
        match Size::from_code(size) {
            Some(_) => None,
            None => Some(self.messages.size_incorrect.clone()),
        }
    }
}

#[cfg(test)]
#[path = "tests/schema_tests.rs"]
mod tests;
