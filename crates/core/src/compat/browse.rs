use serde::{Deserialize, Serialize};

use super::predicates::{
    case_accepts_mainboard, cooler_fits_case, cooler_socket_support, cpu_fits_mainboard,
    cpu_supports_ram_type, gpu_fits_case, ram_fits_mainboard,
};
use crate::catalog::Catalog;
use crate::domain::component::{Component, ComponentSpec};
use crate::domain::selection::Selection;
use crate::domain::slot::Slot;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrowseEntry {
    pub component: Component,
    pub compatible: bool,
}

/// Lists catalog entries for `slot`, optionally filtered by a case-insensitive
/// name/brand substring. Compatible entries come first, then ascending price.
pub fn browse(
    slot: Slot,
    catalog: &Catalog,
    selection: &Selection,
    query: Option<&str>,
) -> Vec<BrowseEntry> {
    let needle = query.map(str::trim).filter(|q| !q.is_empty()).map(str::to_lowercase);

    let mut entries: Vec<BrowseEntry> = catalog
        .components(slot)
        .iter()
        .filter(|component| {
            needle.as_deref().map_or(true, |needle| matches_query(component, needle))
        })
        .map(|component| BrowseEntry {
            component: component.clone(),
            compatible: is_compatible(component, selection),
        })
        .collect();

    entries.sort_by(|left, right| {
        right
            .compatible
            .cmp(&left.compatible)
            .then_with(|| left.component.price.cmp(&right.component.price))
    });
    entries
}

fn matches_query(component: &Component, needle: &str) -> bool {
    component.name.to_lowercase().contains(needle)
        || component.brand.to_lowercase().contains(needle)
}

/// Whether `candidate` could be dropped into its slot without breaking a hard
/// constraint against what is already selected. Empty slots never disqualify.
pub fn is_compatible(candidate: &Component, selection: &Selection) -> bool {
    let cpu = selection.cpu();
    let board = selection.mainboard();
    let ram = selection.ram();
    let gpu = selection.gpu();
    let cooler = selection.cooling();
    let case = selection.case();

    match &candidate.spec {
        ComponentSpec::Mainboard(spec) => {
            cpu.map_or(true, |cpu| cpu_fits_mainboard(&cpu, spec))
                && ram.map_or(true, |ram| ram_fits_mainboard(&ram, spec))
                && case.map_or(true, |case| case_accepts_mainboard(&case, spec))
        }
        ComponentSpec::Cpu(spec) => {
            board.map_or(true, |board| cpu_fits_mainboard(spec, &board))
                && ram.map_or(true, |ram| cpu_supports_ram_type(spec, ram.ram_type))
        }
        ComponentSpec::Ram(spec) => {
            board.map_or(true, |board| ram_fits_mainboard(spec, &board))
                && cpu.map_or(true, |cpu| cpu_supports_ram_type(&cpu, spec.ram_type))
        }
        ComponentSpec::Case(spec) => {
            board.map_or(true, |board| case_accepts_mainboard(spec, &board))
                && gpu.map_or(true, |gpu| gpu_fits_case(&gpu, spec))
                && cooler.map_or(true, |cooler| cooler_fits_case(&cooler, spec))
        }
        ComponentSpec::Cooling(spec) => {
            cpu.map_or(true, |cpu| cooler_socket_support(spec, &cpu.socket) != Some(false))
                && case.map_or(true, |case| cooler_fits_case(spec, &case))
        }
        ComponentSpec::Gpu(spec) => case.map_or(true, |case| gpu_fits_case(spec, &case)),
        ComponentSpec::Ssd(_) | ComponentSpec::Hdd(_) | ComponentSpec::Psu(_) => true,
    }
}
