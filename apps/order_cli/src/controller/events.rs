//! Results of feeding one form event through the controller.

use shared::{
    domain::OrderSummary,
    error::{FormError, SubmitRejected},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Updated,
    Submitted(OrderSummary),
    Rejected(SubmitRejected),
    Ignored(FormError),
    Reset,
}

impl FormOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            FormOutcome::Updated => "updated",
            FormOutcome::Submitted(_) => "submitted",
            FormOutcome::Rejected(_) => "rejected",
            FormOutcome::Ignored(_) => "ignored",
            FormOutcome::Reset => "reset",
        }
    }

    /// True when the event did not have the effect the user asked for.
    pub fn is_failure(&self) -> bool {
        matches!(self, FormOutcome::Rejected(_) | FormOutcome::Ignored(_))
    }

    pub fn message(&self) -> Option<String> {
        match self {
            FormOutcome::Rejected(rejected) => Some(rejected.to_string()),
            FormOutcome::Ignored(err) => Some(err.to_string()),
            _ => None,
        }
    }
}
