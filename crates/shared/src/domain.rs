use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::FormError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ToppingId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topping {
    pub id: ToppingId,
    pub label: String,
}

impl Topping {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id: ToppingId(id),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn code(self) -> &'static str {
        match self {
            Size::Small => "S",
            Size::Medium => "M",
            Size::Large => "L",
        }
    }

    /// Full lowercase name for the order confirmation: "your medium pizza",
    /// not the bare code ("your m pizza").
    pub fn display_name(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    /// Exact match on the size code; no case folding or trimming.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.code() == code)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FullName,
    Size,
    Toppings,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::FullName, FormField::Size, FormField::Toppings];

    pub fn name(self) -> &'static str {
        match self {
            FormField::FullName => "full_name",
            FormField::Size => "size",
            FormField::Toppings => "toppings",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = FormError;

    /// Accepts the snake_case field names plus the input names used by HTML
    /// forms (`fullName`, `fullname`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "full_name" | "fullName" | "fullname" => Ok(FormField::FullName),
            "size" => Ok(FormField::Size),
            "toppings" => Ok(FormField::Toppings),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Current values of every form field.
///
/// `size` holds the raw selection so an unrecognised code can be reported by
/// validation instead of being lost at input time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub full_name: String,
    pub size: String,
    pub toppings: BTreeSet<ToppingId>,
}

/// Active error message per field. A field is present only while it fails a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FormField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub full_name: String,
    pub size: Size,
    pub topping_count: usize,
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
