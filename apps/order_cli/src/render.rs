//! Plain-text rendering of controller outputs.

use order_core::ToppingCatalog;
use shared::domain::{OrderSummary, ValidationErrors};

/// Success banner text. Sizes are spelled out ("medium"), not echoed as codes.
pub fn confirmation(summary: &OrderSummary) -> String {
    let toppings = match summary.topping_count {
        0 => "with no toppings".to_string(),
        1 => "with 1 topping".to_string(),
        n => format!("with {n} toppings"),
    };
    format!(
        "Thank you for your order, {}!\nYour {} pizza\n{toppings}",
        summary.full_name,
        summary.size.display_name()
    )
}

pub fn field_errors(errors: &ValidationErrors) -> Vec<String> {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect()
}

pub fn catalog(catalog: &ToppingCatalog) -> String {
    catalog
        .toppings()
        .iter()
        .map(|topping| format!("{:>3}  {}", topping.id.0, topping.label))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
