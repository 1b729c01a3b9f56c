//! TOML catalog loading.
//!
//! A catalog file holds one array of tables per slot (`[[cpu]]`, `[[gpu]]`, ...) and
//! any number of `[[preset]]` tables. The default catalog is compiled into the binary.

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use super::Catalog;
use crate::domain::component::{
    CaseSpec, Component, ComponentId, ComponentSpec, CoolingSpec, CpuSpec, GpuSpec, HddSpec,
    MainboardSpec, PsuSpec, RamSpec, SsdSpec,
};
use crate::domain::preset::{Preset, PresetRegistry};
use crate::domain::slot::Slot;
use crate::errors::DomainError;

const DEFAULT_CATALOG: &str = include_str!("../../data/catalog.toml");
const DEFAULT_ORIGIN: &str = "embedded default catalog";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog from {origin}: {source}")]
    Parse { origin: String, source: toml::de::Error },
    #[error("duplicate {slot} component id `{id}` in {origin}")]
    DuplicateComponent { origin: String, slot: Slot, id: ComponentId },
    #[error("invalid presets in {origin}: {source}")]
    Presets { origin: String, source: DomainError },
}

/// The catalog together with the presets that reference it.
#[derive(Clone, Debug, Default)]
pub struct CatalogBundle {
    pub catalog: Catalog,
    pub presets: PresetRegistry,
}

pub fn default_catalog() -> Result<CatalogBundle, CatalogError> {
    parse_with_origin(DEFAULT_CATALOG, DEFAULT_ORIGIN)
}

pub fn load_catalog(path: &Path) -> Result<CatalogBundle, CatalogError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;
    parse_with_origin(&raw, &path.display().to_string())
}

pub fn parse_catalog(raw: &str) -> Result<CatalogBundle, CatalogError> {
    parse_with_origin(raw, "inline catalog")
}

fn parse_with_origin(raw: &str, origin: &str) -> Result<CatalogBundle, CatalogError> {
    let file: CatalogFile = toml::from_str(raw)
        .map_err(|source| CatalogError::Parse { origin: origin.to_owned(), source })?;

    let presets = PresetRegistry::new(file.presets.clone())
        .map_err(|source| CatalogError::Presets { origin: origin.to_owned(), source })?;
    let components = file.into_components();

    for (position, component) in components.iter().enumerate() {
        let duplicate = components[..position]
            .iter()
            .any(|earlier| earlier.slot() == component.slot() && earlier.id == component.id);
        if duplicate {
            return Err(CatalogError::DuplicateComponent {
                origin: origin.to_owned(),
                slot: component.slot(),
                id: component.id.clone(),
            });
        }
    }

    let catalog = Catalog::new(components);
    info!(
        event_name = "catalog.loaded",
        origin,
        component_count = catalog.len(),
        preset_count = presets.len(),
        "component catalog loaded"
    );

    Ok(CatalogBundle { catalog, presets })
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    cpu: Vec<CatalogEntry<CpuSpec>>,
    #[serde(default, alias = "vga")]
    gpu: Vec<CatalogEntry<GpuSpec>>,
    #[serde(default)]
    mainboard: Vec<CatalogEntry<MainboardSpec>>,
    #[serde(default)]
    ram: Vec<CatalogEntry<RamSpec>>,
    #[serde(default)]
    ssd: Vec<CatalogEntry<SsdSpec>>,
    #[serde(default)]
    hdd: Vec<CatalogEntry<HddSpec>>,
    #[serde(default)]
    psu: Vec<CatalogEntry<PsuSpec>>,
    #[serde(default)]
    cooling: Vec<CatalogEntry<CoolingSpec>>,
    #[serde(default)]
    case: Vec<CatalogEntry<CaseSpec>>,
    #[serde(default, rename = "preset")]
    presets: Vec<Preset>,
}

impl CatalogFile {
    fn into_components(self) -> Vec<Component> {
        let mut components = Vec::new();
        extend(&mut components, self.cpu);
        extend(&mut components, self.gpu);
        extend(&mut components, self.mainboard);
        extend(&mut components, self.ram);
        extend(&mut components, self.ssd);
        extend(&mut components, self.hdd);
        extend(&mut components, self.psu);
        extend(&mut components, self.cooling);
        extend(&mut components, self.case);
        components
    }
}

#[derive(Debug, Deserialize)]
struct CatalogEntry<S> {
    id: ComponentId,
    name: String,
    #[serde(default)]
    brand: String,
    price: Decimal,
    #[serde(flatten)]
    spec: S,
}

fn extend<S: Into<ComponentSpec>>(target: &mut Vec<Component>, entries: Vec<CatalogEntry<S>>) {
    target.extend(entries.into_iter().map(|entry| Component {
        id: entry.id,
        name: entry.name,
        brand: entry.brand,
        price: entry.price,
        spec: entry.spec.into(),
    }));
}
