use thiserror::Error;

use crate::{
    catalog::CatalogError,
    config::ConfigError,
    domain::{component::ComponentId, slot::Slot},
};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown slot `{0}` (expected cpu|gpu|mainboard|ram|ssd|hdd|psu|cooling|case)")]
    UnknownSlot(String),
    #[error("component `{id}` is not in the {slot} catalog")]
    UnknownComponent { slot: Slot, id: ComponentId },
    #[error("preset `{0}` is not registered")]
    UnknownPreset(String),
    #[error("pick `{0}` must look like SLOT=ID")]
    InvalidPick(String),
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("catalog failure: {0}")]
    Catalog(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Stable machine-readable class used in structured command output.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::UnknownSlot(_))
            | Self::Domain(DomainError::UnknownComponent { .. })
            | Self::Domain(DomainError::UnknownPreset(_))
            | Self::Domain(DomainError::InvalidPick(_)) => "invalid_selection",
            Self::Domain(DomainError::InvariantViolation(_)) => "domain_validation",
            Self::Catalog(_) => "catalog_load",
            Self::Configuration(_) => "config_validation",
        }
    }
}

impl From<CatalogError> for ApplicationError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value.to_string())
    }
}

impl From<ConfigError> for ApplicationError {
    fn from(value: ConfigError) -> Self {
        Self::Configuration(value.to_string())
    }
}
