//! Static topping catalog consumed by the order form.

use std::collections::HashSet;

use shared::{
    domain::{Topping, ToppingId},
    error::CatalogError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToppingCatalog {
    toppings: Vec<Topping>,
}

impl Default for ToppingCatalog {
    fn default() -> Self {
        Self {
            toppings: vec![
                Topping::new(1, "Pepperoni"),
                Topping::new(2, "Green Peppers"),
                Topping::new(3, "Pineapple"),
                Topping::new(4, "Mushrooms"),
                Topping::new(5, "Ham"),
            ],
        }
    }
}

impl ToppingCatalog {
    /// Builds a catalog, rejecting duplicate ids, duplicate labels (compared
    /// case-insensitively) and blank labels. Order is preserved for display.
    pub fn new(toppings: Vec<Topping>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        let mut labels = HashSet::new();

        for topping in &toppings {
            if topping.label.trim().is_empty() {
                return Err(CatalogError::EmptyLabel(topping.id));
            }
            if !ids.insert(topping.id) {
                return Err(CatalogError::DuplicateId(topping.id));
            }
            if !labels.insert(topping.label.to_lowercase()) {
                return Err(CatalogError::DuplicateLabel(topping.label.clone()));
            }
        }

        Ok(Self { toppings })
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    pub fn len(&self) -> usize {
        self.toppings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toppings.is_empty()
    }

    pub fn contains(&self, id: ToppingId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: ToppingId) -> Option<&Topping> {
        self.toppings.iter().find(|topping| topping.id == id)
    }

    /// Maps a checkbox value to a topping id. Checkboxes may carry either the
    /// numeric id or the display label; labels match case-insensitively. A
    /// numeric value that is not an id falls through to the label match.
    pub fn resolve(&self, raw: &str) -> Option<ToppingId> {
        let raw = raw.trim();
        if let Some(topping) = raw.parse::<u32>().ok().and_then(|id| self.get(ToppingId(id))) {
            return Some(topping.id);
        }

        let wanted = raw.to_lowercase();
        self.toppings
            .iter()
            .find(|topping| topping.label.to_lowercase() == wanted)
            .map(|topping| topping.id)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
