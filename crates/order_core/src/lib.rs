use serde::{Deserialize, Serialize};
use shared::{
    domain::{FormField, FormState, OrderSummary, Size, ToppingId, ValidationErrors},
    error::{FormError, SubmitRejected},
    protocol::{FormView, RawFieldEvent},
};
use tracing::{debug, info, warn};

pub mod catalog;
pub mod schema;

pub use catalog::ToppingCatalog;
pub use schema::{FormSchema, ValidationMessages, ValidationReport};

/// When the stored error map is refreshed after a field change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevalidationPolicy {
    /// Every change recomputes the full error map, including on construction.
    #[default]
    WholeForm,
    /// A change recomputes only the edited field's entry; untouched fields
    /// report nothing until edited.
    ChangedField,
}

/// A typed edit to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    FullName(String),
    Size(String),
    Topping { id: ToppingId, selected: bool },
}

impl FieldChange {
    pub fn field(&self) -> FormField {
        match self {
            FieldChange::FullName(_) => FormField::FullName,
            FieldChange::Size(_) => FormField::Size,
            FieldChange::Topping { .. } => FormField::Toppings,
        }
    }
}

/// Owns the order form state and gates submission on validity.
#[derive(Debug, Clone)]
pub struct OrderFormController {
    catalog: ToppingCatalog,
    schema: FormSchema,
    policy: RevalidationPolicy,
    state: FormState,
    errors: ValidationErrors,
    last_order: Option<OrderSummary>,
}

impl Default for OrderFormController {
    fn default() -> Self {
        Self::new(
            ToppingCatalog::default(),
            FormSchema::default(),
            RevalidationPolicy::default(),
        )
    }
}

impl OrderFormController {
    pub fn new(catalog: ToppingCatalog, schema: FormSchema, policy: RevalidationPolicy) -> Self {
        let mut controller = Self {
            catalog,
            schema,
            policy,
            state: FormState::default(),
            errors: ValidationErrors::new(),
            last_order: None,
        };
        controller.refresh_initial_errors();
        controller
    }

    pub fn catalog(&self) -> &ToppingCatalog {
        &self.catalog
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn policy(&self) -> RevalidationPolicy {
        self.policy
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn last_order(&self) -> Option<&OrderSummary> {
        self.last_order.as_ref()
    }

    pub fn submitted(&self) -> bool {
        self.last_order.is_some()
    }

    /// Always evaluated against the current state, never cached.
    pub fn is_valid(&self) -> bool {
        self.validate().is_valid
    }

    pub fn validate(&self) -> ValidationReport {
        self.schema.validate(&self.state)
    }

    /// Applies one field edit. Topping ids outside the catalog are refused
    /// and leave state and errors untouched.
    pub fn set_field(&mut self, change: FieldChange) -> Result<(), FormError> {
        if let FieldChange::Topping { id, .. } = &change {
            if !self.catalog.contains(*id) {
                warn!(topping = %id, "ignoring topping outside the catalog");
                return Err(FormError::UnknownTopping(id.to_string()));
            }
        }

        let field = change.field();
        match change {
            FieldChange::FullName(value) => self.state.full_name = value,
            FieldChange::Size(value) => self.state.size = value,
            FieldChange::Topping { id, selected } => {
                if selected {
                    self.state.toppings.insert(id);
                } else {
                    self.state.toppings.remove(&id);
                }
            }
        }
        debug!(field = field.name(), "form field changed");
        self.revalidate(field);
        Ok(())
    }

    /// Translates an input event into a typed change and applies it.
    ///
    /// Unknown fields and toppings outside the catalog leave the state as it
    /// was, for deselection as well as selection.
    pub fn apply_raw(&mut self, event: &RawFieldEvent) -> Result<(), FormError> {
        let change = match self.parse_raw(event) {
            Ok(change) => change,
            Err(err) => {
                warn!(
                    field = %event.field_name,
                    value = %event.raw_value,
                    "ignoring form event: {err}"
                );
                return Err(err);
            }
        };
        self.set_field(change)
    }

    fn parse_raw(&self, event: &RawFieldEvent) -> Result<FieldChange, FormError> {
        let field: FormField = event.field_name.parse()?;
        match (field, event.is_checkbox_toggle) {
            (FormField::Toppings, _) => {
                let id = self
                    .catalog
                    .resolve(&event.raw_value)
                    .ok_or_else(|| FormError::UnknownTopping(event.raw_value.clone()))?;
                Ok(FieldChange::Topping {
                    id,
                    selected: event.checked,
                })
            }
            // Only toppings are rendered as checkboxes.
            (_, true) => Err(FormError::UnknownField(event.field_name.clone())),
            (FormField::FullName, false) => Ok(FieldChange::FullName(event.raw_value.clone())),
            (FormField::Size, false) => Ok(FieldChange::Size(event.raw_value.clone())),
        }
    }

    /// Submits the order if every rule passes.
    ///
    /// On rejection nothing is mutated, so the stored errors keep showing
    /// whatever the presentation layer last displayed.
    pub fn submit(&mut self) -> Result<OrderSummary, SubmitRejected> {
        let report = self.validate();
        let size = match Size::from_code(&self.state.size) {
            Some(size) if report.is_valid => size,
            _ => {
                warn!(failing = report.errors.len(), "order submission rejected");
                return Err(SubmitRejected::new(report.errors));
            }
        };

        let summary = OrderSummary {
            full_name: self.state.full_name.clone(),
            size,
            topping_count: self.state.toppings.len(),
        };
        info!(
            size = summary.size.code(),
            toppings = summary.topping_count,
            "order submitted"
        );

        self.state = FormState::default();
        self.errors.clear();
        self.last_order = Some(summary.clone());
        Ok(summary)
    }

    /// Returns the form to its freshly constructed state, forgetting any
    /// previous order.
    pub fn reset(&mut self) {
        self.state = FormState::default();
        self.last_order = None;
        self.errors.clear();
        self.refresh_initial_errors();
        debug!("order form reset");
    }

    pub fn view(&self) -> FormView {
        let is_valid = self.is_valid();
        let submitted = self.submitted();
        FormView {
            form: self.state.clone(),
            errors: self.errors.clone(),
            is_valid,
            submitted,
            last_order: self.last_order.clone(),
            show_failure: !submitted && !is_valid,
        }
    }

    fn revalidate(&mut self, changed: FormField) {
        match self.policy {
            RevalidationPolicy::WholeForm => {
                self.errors = self.validate().errors;
            }
            RevalidationPolicy::ChangedField => {
                match self.schema.validate_field(&self.state, changed) {
                    Some(message) => self.errors.insert(changed, message),
                    None => {
                        self.errors.remove(changed);
                    }
                }
            }
        }
    }

    fn refresh_initial_errors(&mut self) {
        if self.policy == RevalidationPolicy::WholeForm {
            self.errors = self.validate().errors;
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
