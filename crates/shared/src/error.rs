use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ToppingId, ValidationErrors};

/// Input that cannot be applied to the form at all (as opposed to input that
/// is applied and then fails validation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),
    #[error("'{0}' is not a topping in the catalog")]
    UnknownTopping(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("order rejected: {} field(s) failed validation", errors.len())]
pub struct SubmitRejected {
    pub errors: ValidationErrors,
}

impl SubmitRejected {
    pub fn new(errors: ValidationErrors) -> Self {
        Self { errors }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("topping id {0} appears more than once")]
    DuplicateId(ToppingId),
    #[error("topping label '{0}' appears more than once")]
    DuplicateLabel(String),
    #[error("topping {0} has an empty label")]
    EmptyLabel(ToppingId),
}
