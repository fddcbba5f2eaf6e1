use super::*;

#[test]
fn size_codes_are_exact() {
    assert_eq!(Size::from_code("S"), Some(Size::Small));
    assert_eq!(Size::from_code("M"), Some(Size::Medium));
    assert_eq!(Size::from_code("L"), Some(Size::Large));
    assert_eq!(Size::from_code("m"), None);
    assert_eq!(Size::from_code(" M"), None);
    assert_eq!(Size::from_code(""), None);
    assert_eq!(Size::from_code("XL"), None);
}

#[test]
fn form_field_accepts_html_input_names() {
    assert_eq!("fullName".parse::<FormField>(), Ok(FormField::FullName));
    assert_eq!("fullname".parse::<FormField>(), Ok(FormField::FullName));
    assert_eq!("full_name".parse::<FormField>(), Ok(FormField::FullName));
    assert_eq!("size".parse::<FormField>(), Ok(FormField::Size));
    assert_eq!("toppings".parse::<FormField>(), Ok(FormField::Toppings));
    assert_eq!(
        "crust".parse::<FormField>(),
        Err(FormError::UnknownField("crust".to_string()))
    );
}

#[test]
fn validation_errors_hold_one_message_per_field() {
    let mut errors = ValidationErrors::new();
    errors.insert(FormField::Size, "first");
    errors.insert(FormField::Size, "second");
    errors.insert(FormField::FullName, "name");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(FormField::Size), Some("second"));
    assert_eq!(errors.remove(FormField::Size).as_deref(), Some("second"));
    assert!(!errors.contains(FormField::Size));
    assert_eq!(
        errors.iter().collect::<Vec<_>>(),
        vec![(FormField::FullName, "name")]
    );
}
