use super::*;
use crate::domain::{FormField, Size};

#[test]
fn form_events_use_tagged_json() {
    let submit: FormEvent = serde_json::from_str(r#"{"type":"submit"}"#).expect("submit");
    assert_eq!(submit, FormEvent::Submit);

    let change: FormEvent = serde_json::from_str(
        r#"{"type":"change","payload":{"field_name":"toppings","raw_value":"Ham","is_checkbox_toggle":true,"checked":true}}"#,
    )
    .expect("change");
    assert_eq!(change, FormEvent::Change(RawFieldEvent::checkbox("toppings", "Ham", true)));
}

#[test]
fn text_change_defaults_checkbox_flags() {
    let change: FormEvent =
        serde_json::from_str(r#"{"type":"change","payload":{"field_name":"size","raw_value":"M"}}"#)
            .expect("change");
    assert_eq!(change, FormEvent::Change(RawFieldEvent::text("size", "M")));
}

#[test]
fn form_view_serializes_errors_by_field_name() {
    let mut errors = ValidationErrors::new();
    errors.insert(FormField::FullName, "Full name is required");
    let view = FormView {
        form: FormState::default(),
        errors,
        is_valid: false,
        submitted: true,
        last_order: Some(OrderSummary {
            full_name: "Alice".to_string(),
            size: Size::Medium,
            topping_count: 1,
        }),
        show_failure: false,
    };

    let json = serde_json::to_value(&view).expect("serialize");
    assert_eq!(json["errors"]["full_name"], "Full name is required");
    assert_eq!(json["last_order"]["size"], "M");
    assert_eq!(json["last_order"]["topping_count"], 1);
}
