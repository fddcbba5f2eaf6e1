use std::{fs, io, path::Path};

use anyhow::Context;
use order_core::{
    FormSchema, OrderFormController, RevalidationPolicy, ToppingCatalog, ValidationMessages,
};
use serde::Deserialize;
use shared::{domain::Topping, error::CatalogError};

pub const DEFAULT_CONFIG_PATH: &str = "order_form.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_full_name_len: Option<usize>,
    pub revalidation: RevalidationPolicy,
    pub toppings: Option<Vec<Topping>>,
    pub messages: MessageOverrides,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_full_name_len: Some(order_core::schema::DEFAULT_MAX_FULL_NAME_LEN),
            revalidation: RevalidationPolicy::WholeForm,
            toppings: None,
            messages: MessageOverrides::default(),
        }
    }
}

impl Settings {
    pub fn build_controller(&self) -> Result<OrderFormController, CatalogError> {
        let catalog = match &self.toppings {
            Some(toppings) => ToppingCatalog::new(toppings.clone())?,
            None => ToppingCatalog::default(),
        };
        let schema = FormSchema::new(self.max_full_name_len);
        let messages = self.messages.apply(schema.messages().clone());
        Ok(OrderFormController::new(
            catalog,
            schema.with_messages(messages),
            self.revalidation,
        ))
    }
}

/// Message strings replaced from the `[messages]` table; unset keys keep the
/// generated defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageOverrides {
    pub full_name_required: Option<String>,
    pub full_name_too_short: Option<String>,
    pub full_name_too_long: Option<String>,
    pub size_required: Option<String>,
    pub size_incorrect: Option<String>,
}

impl MessageOverrides {
    fn apply(&self, mut messages: ValidationMessages) -> ValidationMessages {
        let overrides = [
            (&self.full_name_required, &mut messages.full_name_required),
            (&self.full_name_too_short, &mut messages.full_name_too_short),
            (&self.full_name_too_long, &mut messages.full_name_too_long),
            (&self.size_required, &mut messages.size_required),
            (&self.size_incorrect, &mut messages.size_incorrect),
        ];
        for (source, target) in overrides {
            if let Some(v) = source {
                *target = v.clone();
            }
        }
        messages
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    max_full_name_len: Option<usize>,
    revalidation: Option<RevalidationPolicy>,
    toppings: Option<Vec<Topping>>,
    #[serde(default)]
    messages: MessageOverrides,
}

/// Defaults, then the toml file at `path` (if present), then environment.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
            apply_file_settings(&mut settings, file_cfg);
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file; using defaults");
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()));
        }
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.max_full_name_len {
        settings.max_full_name_len = max_len_setting(v);
    }
    if let Some(v) = file_cfg.revalidation {
        settings.revalidation = v;
    }
    if let Some(v) = file_cfg.toppings {
        settings.toppings = Some(v);
    }
    settings.messages = file_cfg.messages;
}

fn apply_env_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    for key in ["ORDER_MAX_FULL_NAME_LEN", "APP__MAX_FULL_NAME_LEN"] {
        if let Some(v) = var(key) {
            match v.trim().parse::<usize>() {
                Ok(parsed) => settings.max_full_name_len = max_len_setting(parsed),
                Err(_) => tracing::warn!("ignoring {key}={v}: not a non-negative integer"),
            }
        }
    }

    if let Some(v) = var("APP__REVALIDATION") {
        match parse_policy(&v) {
            Some(policy) => settings.revalidation = policy,
            None => tracing::warn!(
                "ignoring APP__REVALIDATION={v}: expected whole_form or changed_field"
            ),
        }
    }
}

/// `0` turns the maximum-length rule off.
fn max_len_setting(raw: usize) -> Option<usize> {
    (raw > 0).then_some(raw)
}

fn parse_policy(raw: &str) -> Option<RevalidationPolicy> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "whole_form" => Some(RevalidationPolicy::WholeForm),
        "changed_field" => Some(RevalidationPolicy::ChangedField),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
