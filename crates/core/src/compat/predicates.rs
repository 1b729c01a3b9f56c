//! Pairwise compatibility checks shared by the rule evaluator, the suggestion
//! generator and catalog browsing.

use crate::domain::component::{CaseSpec, CoolingSpec, CpuSpec, GpuSpec, MainboardSpec, RamSpec};
use crate::domain::slot::{RamType, Tier};

/// Fixed allowance for the rest of the system (board, drives, fans) in watts.
pub const BASE_SYSTEM_DRAW: u32 = 50;

pub fn sockets_match(cpu: &CpuSpec, mainboard: &MainboardSpec) -> bool {
    cpu.socket == mainboard.socket
}

pub fn cpu_supports_ram_type(cpu: &CpuSpec, ram_type: RamType) -> bool {
    cpu.ram_types.contains(&ram_type)
}

/// Same socket and a memory type the CPU controller can drive.
pub fn cpu_fits_mainboard(cpu: &CpuSpec, mainboard: &MainboardSpec) -> bool {
    sockets_match(cpu, mainboard) && cpu_supports_ram_type(cpu, mainboard.ram_type)
}

pub fn ram_fits_mainboard(ram: &RamSpec, mainboard: &MainboardSpec) -> bool {
    ram.ram_type == mainboard.ram_type
}

/// `Some(true/false)` when the cooler publishes a socket list, `None` otherwise.
pub fn cooler_socket_support(cooler: &CoolingSpec, socket: &str) -> Option<bool> {
    cooler.sockets.as_ref().map(|sockets| sockets.iter().any(|candidate| candidate == socket))
}

pub fn case_accepts_mainboard(case: &CaseSpec, mainboard: &MainboardSpec) -> bool {
    case.form_factors.contains(&mainboard.form_factor)
}

pub fn gpu_fits_case(gpu: &GpuSpec, case: &CaseSpec) -> bool {
    gpu.length <= case.max_gpu_length
}

pub fn cooler_fits_case(cooler: &CoolingSpec, case: &CaseSpec) -> bool {
    let height_ok = cooler.height.map_or(true, |height| height <= case.max_cooler_height);
    let radiator_ok =
        cooler.radiator_size.map_or(true, |size| case.radiator_support.contains(&size));
    height_ok && radiator_ok
}

pub fn tiers_balanced(cpu: Tier, gpu: Tier) -> bool {
    cpu.distance(gpu) <= 1
}

/// Estimated full-load draw: CPU TDP plus GPU TDP plus the base allowance.
pub fn estimated_draw(cpu_tdp: Option<u32>, gpu_tdp: Option<u32>) -> u32 {
    cpu_tdp.unwrap_or(0).saturating_add(gpu_tdp.unwrap_or(0)).saturating_add(BASE_SYSTEM_DRAW)
}

/// PSU wattage to recommend for `draw`: 30% margin, rounded up to the next 50 W.
pub fn recommended_psu_wattage(draw: u32) -> u32 {
    draw.saturating_mul(13).div_ceil(500).saturating_mul(50)
}
