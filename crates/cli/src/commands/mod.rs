pub mod browse;
pub mod check;
pub mod config;
pub mod doctor;
pub mod presets;
pub mod suggest;

use anyhow::Context;
use clap::Args;
use rigcheck_core::catalog::{default_catalog, load_catalog, CatalogBundle};
use rigcheck_core::config::{AppConfig, LoadOptions};
use rigcheck_core::compat::pricing::format_price;
use rigcheck_core::domain::{Component, ComponentId, Selection, Slot};
use rigcheck_core::errors::{ApplicationError, DomainError};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data: None,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn success_with_data(
        command: &str,
        message: impl Into<String>,
        data: &impl Serialize,
    ) -> Self {
        let data = match serde_json::to_value(data) {
            Ok(data) => data,
            Err(error) => {
                return Self::failure(command, "serialization", error.to_string(), 1);
            }
        };
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data: Some(data),
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    /// Classifies an error through the `ApplicationError` it wraps, if any.
    pub fn from_error(command: &str, error: &anyhow::Error) -> Self {
        let error_class = error
            .downcast_ref::<ApplicationError>()
            .map_or("internal", ApplicationError::error_class);
        Self::failure(command, error_class, format!("{error:#}"), exit_code_for(error_class))
    }
}

fn exit_code_for(error_class: &str) -> u8 {
    match error_class {
        "config_validation" => 2,
        "catalog_load" => 3,
        "invalid_selection" => 4,
        "domain_validation" => 5,
        _ => 1,
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Selection flags shared by `check`, `suggest` and `browse`.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    #[arg(long, help = "Start from a preset build")]
    pub preset: Option<String>,
    #[arg(
        long = "pick",
        value_name = "SLOT=ID",
        help = "Put catalog part ID into SLOT; an empty ID clears the slot"
    )]
    pub picks: Vec<String>,
}

impl SelectionArgs {
    /// Applies the preset first, then every pick in order, so picks override the preset.
    pub fn build(&self, bundle: &CatalogBundle) -> Result<Selection, ApplicationError> {
        let mut selection = match &self.preset {
            Some(id) => bundle.presets.get(id)?.apply(&bundle.catalog),
            None => Selection::new(),
        };

        for raw in &self.picks {
            let (slot, id) = parse_pick(raw)?;
            match id {
                Some(id) => {
                    let component = bundle.catalog.resolve(slot, &id)?;
                    selection.set(component.clone());
                }
                None => {
                    selection.clear(slot);
                }
            }
        }

        Ok(selection)
    }
}

fn parse_pick(raw: &str) -> Result<(Slot, Option<ComponentId>), DomainError> {
    let (slot, id) =
        raw.split_once('=').ok_or_else(|| DomainError::InvalidPick(raw.to_owned()))?;
    let slot: Slot = slot.parse()?;
    let id = id.trim();
    Ok((slot, (!id.is_empty()).then(|| ComponentId::new(id))))
}

/// Compact view of one catalog part in command output.
#[derive(Debug, Serialize)]
pub struct PartView {
    pub slot: Slot,
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: Decimal,
    pub price_display: String,
}

impl PartView {
    pub fn new(component: &Component) -> Self {
        Self {
            slot: component.slot(),
            id: component.id.as_str().to_owned(),
            name: component.name.clone(),
            brand: component.brand.clone(),
            price: component.price,
            price_display: format_price(component.price),
        }
    }

    pub fn from_selection(selection: &Selection) -> Vec<Self> {
        selection.components().map(Self::new).collect()
    }
}

/// Effective configuration plus the catalog it points at.
#[derive(Debug)]
pub struct CommandContext {
    pub config: AppConfig,
    pub bundle: CatalogBundle,
}

pub fn load_config(options: &LoadOptions) -> anyhow::Result<AppConfig> {
    AppConfig::load(options.clone())
        .map_err(ApplicationError::from)
        .context("configuration could not be loaded")
}

pub fn load_bundle(config: &AppConfig) -> anyhow::Result<CatalogBundle> {
    let loaded = match &config.catalog.path {
        Some(path) => load_catalog(path),
        None => default_catalog(),
    };
    loaded.map_err(ApplicationError::from).context("component catalog could not be loaded")
}

pub fn load_context(options: &LoadOptions) -> anyhow::Result<CommandContext> {
    let config = load_config(options)?;
    let bundle = load_bundle(&config)?;
    Ok(CommandContext { config, bundle })
}
