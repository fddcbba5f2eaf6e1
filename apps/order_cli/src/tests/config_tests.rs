use super::*;

use std::{collections::HashMap, fs};

use shared::domain::{FormField, ToppingId};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = load_settings(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(settings.max_full_name_len, Some(20));
    assert_eq!(settings.revalidation, RevalidationPolicy::WholeForm);
    assert!(settings.toppings.is_none());
}

#[test]
fn file_values_replace_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("order_form.toml");
    fs::write(
        &path,
        r#"
max_full_name_len = 12
revalidation = "changed_field"

[messages]
size_required = "Pick a size"

[[toppings]]
id = 10
label = "Olives"

[[toppings]]
id = 11
label = "Basil"
"#,
    )
    .expect("write settings");

    let settings = load_settings(&path).expect("load");
    assert_eq!(settings.max_full_name_len, Some(12));
    assert_eq!(settings.revalidation, RevalidationPolicy::ChangedField);
    assert_eq!(
        settings.toppings,
        Some(vec![Topping::new(10, "Olives"), Topping::new(11, "Basil")])
    );

    let controller = settings.build_controller().expect("controller");
    assert_eq!(controller.catalog().len(), 2);
    assert!(controller.catalog().contains(ToppingId(11)));
    assert_eq!(controller.schema().max_full_name_len(), Some(12));
    assert_eq!(controller.schema().messages().size_required, "Pick a size");
    assert_eq!(
        controller.schema().messages().full_name_too_long,
        "full name must be at most 12 characters"
    );
}

#[test]
fn zero_max_length_disables_the_cap() {
    let mut settings = Settings::default();
    apply_file_settings(
        &mut settings,
        FileSettings {
            max_full_name_len: Some(0),
            ..FileSettings::default()
        },
    );
    assert_eq!(settings.max_full_name_len, None);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("order_form.toml");
    fs::write(&path, "max_full_name_len = \"twenty\"\n").expect("write settings");

    let err = load_settings(&path).expect_err("bad type");
    assert!(err.to_string().contains("failed to parse settings file"));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("order_form.toml");
    fs::write(&path, "crust = \"thin\"\n").expect("write settings");

    assert!(load_settings(&path).is_err());
}

#[test]
fn duplicate_toppings_fail_controller_construction() {
    let settings = Settings {
        toppings: Some(vec![Topping::new(1, "Ham"), Topping::new(1, "Bacon")]),
        ..Settings::default()
    };
    assert_eq!(
        settings.build_controller().expect_err("duplicate id"),
        CatalogError::DuplicateId(ToppingId(1))
    );
}

#[test]
fn env_overrides_apply_in_order() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env(&[
            ("ORDER_MAX_FULL_NAME_LEN", "30"),
            ("APP__MAX_FULL_NAME_LEN", "25"),
            ("APP__REVALIDATION", "Changed-Field"),
        ]),
    );
    assert_eq!(settings.max_full_name_len, Some(25));
    assert_eq!(settings.revalidation, RevalidationPolicy::ChangedField);
}

#[test]
fn unparsable_env_values_are_ignored() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env(&[
            ("ORDER_MAX_FULL_NAME_LEN", "many"),
            ("APP__REVALIDATION", "sometimes"),
        ]),
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn default_settings_build_the_standard_form() {
    let controller = Settings::default().build_controller().expect("controller");
    assert_eq!(controller.catalog().len(), 5);
    assert_eq!(controller.policy(), RevalidationPolicy::WholeForm);
    assert_eq!(
        controller.errors().get(FormField::FullName),
        Some("Full name is required")
    );
}
