use serde::{Deserialize, Serialize};

use super::predicates::{
    cooler_socket_support, cpu_fits_mainboard, estimated_draw, ram_fits_mainboard,
    recommended_psu_wattage,
};
use crate::catalog::Catalog;
use crate::domain::component::{Component, ComponentSpec};
use crate::domain::selection::Selection;
use crate::domain::slot::Slot;

pub const MAX_ITEMS_PER_GROUP: usize = 3;

/// Candidates for one empty slot, in catalog order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuggestionGroup {
    pub slot: Slot,
    pub title: String,
    pub reason: String,
    pub items: Vec<Component>,
}

pub trait SuggestionEngine: Send + Sync {
    fn suggest(&self, selection: &Selection, catalog: &Catalog) -> Vec<SuggestionGroup>;
}

#[derive(Default)]
pub struct DeterministicSuggestionEngine;

impl SuggestionEngine for DeterministicSuggestionEngine {
    fn suggest(&self, selection: &Selection, catalog: &Catalog) -> Vec<SuggestionGroup> {
        suggest(selection, catalog)
    }
}

/// Groups come out in the order mainboard, ram, psu, cooling, gpu. A slot with no
/// eligible candidate produces no group at all.
pub fn suggest(selection: &Selection, catalog: &Catalog) -> Vec<SuggestionGroup> {
    [
        mainboard_group(selection, catalog),
        ram_group(selection, catalog),
        psu_group(selection, catalog),
        cooling_group(selection, catalog),
        gpu_group(selection, catalog),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn group(
    catalog: &Catalog,
    slot: Slot,
    title: &str,
    reason: String,
    eligible: impl Fn(&ComponentSpec) -> bool,
) -> Option<SuggestionGroup> {
    let items: Vec<Component> = catalog
        .components(slot)
        .iter()
        .filter(|component| eligible(&component.spec))
        .take(MAX_ITEMS_PER_GROUP)
        .cloned()
        .collect();

    if items.is_empty() {
        return None;
    }
    Some(SuggestionGroup { slot, title: title.to_owned(), reason, items })
}

fn mainboard_group(selection: &Selection, catalog: &Catalog) -> Option<SuggestionGroup> {
    let cpu = selection.cpu()?;
    if selection.is_filled(Slot::Mainboard) {
        return None;
    }

    group(
        catalog,
        Slot::Mainboard,
        "Compatible mainboards",
        format!("Socket {} with memory the {} supports.", cpu.socket, cpu.name()),
        |spec| matches!(spec, ComponentSpec::Mainboard(board) if cpu_fits_mainboard(&cpu, board)),
    )
}

fn ram_group(selection: &Selection, catalog: &Catalog) -> Option<SuggestionGroup> {
    let board = selection.mainboard()?;
    if selection.is_filled(Slot::Ram) {
        return None;
    }

    group(
        catalog,
        Slot::Ram,
        "Matching memory kits",
        format!("{} kits for {}.", board.ram_type, board.name()),
        |spec| matches!(spec, ComponentSpec::Ram(ram) if ram_fits_mainboard(ram, &board)),
    )
}

fn psu_group(selection: &Selection, catalog: &Catalog) -> Option<SuggestionGroup> {
    let cpu = selection.cpu();
    let gpu = selection.gpu();
    if (cpu.is_none() && gpu.is_none()) || selection.is_filled(Slot::Psu) {
        return None;
    }

    let draw = estimated_draw(cpu.map(|cpu| cpu.tdp), gpu.map(|gpu| gpu.tdp));
    let target = recommended_psu_wattage(draw);
    group(
        catalog,
        Slot::Psu,
        "Power supplies with headroom",
        format!("At least {target}W for an estimated {draw}W load."),
        |spec| matches!(spec, ComponentSpec::Psu(psu) if psu.wattage >= target),
    )
}

fn cooling_group(selection: &Selection, catalog: &Catalog) -> Option<SuggestionGroup> {
    let cpu = selection.cpu()?;
    if selection.is_filled(Slot::Cooling) {
        return None;
    }

    group(
        catalog,
        Slot::Cooling,
        "Coolers for this CPU",
        format!("Rated for {}W or more and mounts on {}.", cpu.tdp, cpu.socket),
        |spec| {
            matches!(spec, ComponentSpec::Cooling(cooler)
                if cooler.tdp_support >= cpu.tdp
                    && cooler_socket_support(cooler, &cpu.socket) == Some(true))
        },
    )
}

fn gpu_group(selection: &Selection, catalog: &Catalog) -> Option<SuggestionGroup> {
    let cpu = selection.cpu()?;
    if selection.is_filled(Slot::Gpu) {
        return None;
    }

    let window = cpu.tier.neighbourhood();
    group(
        catalog,
        Slot::Gpu,
        "Balanced graphics cards",
        format!("Within one tier of the {} CPU tier.", cpu.tier),
        |spec| matches!(spec, ComponentSpec::Gpu(gpu) if window.contains(&gpu.tier)),
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{suggest, MAX_ITEMS_PER_GROUP};
    use crate::catalog::Catalog;
    use crate::domain::component::{Component, CoolingSpec, CpuSpec, GpuSpec, PsuSpec};
    use crate::domain::selection::Selection;
    use crate::domain::slot::{RamType, Slot, Tier};

    fn cpu(tdp: u32, tier: Tier) -> Component {
        Component::new(
            "cpu",
            "Test CPU",
            Decimal::from(5_000_000),
            CpuSpec {
                socket: "AM5".to_owned(),
                ram_types: vec![RamType::Ddr5],
                tdp,
                tier,
                cores: 8,
                threads: 16,
                boost_clock: 5.0,
            },
        )
    }

    fn gpu(id: &str, tdp: u32, tier: Tier) -> Component {
        Component::new(
            id,
            id,
            Decimal::from(10_000_000),
            GpuSpec { tdp, length: 280, recommended_psu: 650, tier, vram: 12 },
        )
    }

    fn psu(id: &str, wattage: u32) -> Component {
        Component::new(
            id,
            id,
            Decimal::from(1_500_000),
            PsuSpec { wattage, efficiency: String::new(), modular: String::new() },
        )
    }

    fn cooler(id: &str, tdp_support: u32, sockets: Option<&[&str]>) -> Component {
        Component::new(
            id,
            id,
            Decimal::from(900_000),
            CoolingSpec {
                kind: "Air".to_owned(),
                tdp_support,
                sockets: sockets.map(|list| list.iter().map(|s| (*s).to_owned()).collect()),
                height: Some(150),
                radiator_size: None,
            },
        )
    }

    fn ids(items: &[Component]) -> Vec<&str> {
        items.iter().map(|component| component.id.as_str()).collect()
    }

    #[test]
    fn psu_target_adds_thirty_percent_and_rounds_up() {
        // 105 + 220 + 50 = 375W -> 487.5W -> 500W.
        let catalog = Catalog::new(vec![
            psu("psu-450", 450),
            psu("psu-500", 500),
            psu("psu-650", 650),
            psu("psu-750", 750),
            psu("psu-850", 850),
        ]);
        let selection =
            Selection::from_components([cpu(105, Tier::High), gpu("gpu", 220, Tier::High)]);

        let groups = suggest(&selection, &catalog);
        let psu_group = groups.iter().find(|group| group.slot == Slot::Psu).expect("psu group");
        assert_eq!(ids(&psu_group.items), vec!["psu-500", "psu-650", "psu-750"]);
        assert!(psu_group.reason.contains("500W"));
    }

    #[test]
    fn gpu_window_is_one_tier_either_side() {
        let catalog = Catalog::new(vec![
            gpu("gpu-budget", 120, Tier::Budget),
            gpu("gpu-mid", 170, Tier::Mid),
            gpu("gpu-ultra", 450, Tier::Ultra),
            gpu("gpu-high", 220, Tier::High),
        ]);
        let selection = Selection::from_components([cpu(65, Tier::MidHigh)]);

        let groups = suggest(&selection, &catalog);
        let gpu_group = groups.iter().find(|group| group.slot == Slot::Gpu).expect("gpu group");
        assert_eq!(ids(&gpu_group.items), vec!["gpu-mid", "gpu-high"]);
    }

    #[test]
    fn coolers_need_enough_tdp_and_a_declared_socket() {
        let catalog = Catalog::new(vec![
            cooler("weak", 65, Some(&["AM5"])),
            cooler("undeclared", 250, None),
            cooler("intel-only", 250, Some(&["LGA1700"])),
            cooler("good", 220, Some(&["LGA1700", "AM5"])),
        ]);
        let selection = Selection::from_components([cpu(120, Tier::High)]);

        let groups = suggest(&selection, &catalog);
        let cooling = groups.iter().find(|group| group.slot == Slot::Cooling).expect("cooling");
        assert_eq!(ids(&cooling.items), vec!["good"]);
    }

    #[test]
    fn filled_slots_and_empty_candidate_lists_produce_no_group() {
        let catalog = Catalog::new(vec![psu("psu-300", 300), gpu("gpu-ultra", 450, Tier::Ultra)]);
        let selection = Selection::from_components([cpu(105, Tier::Budget)]);

        // PSU target is 250W; the only GPU is out of the tier window.
        let groups = suggest(&selection, &catalog);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].slot, Slot::Psu);

        let mut with_psu = selection.clone();
        with_psu.set(psu("psu-300", 300));
        assert!(suggest(&with_psu, &catalog).is_empty());
    }

    #[test]
    fn groups_never_exceed_three_items() {
        let catalog = Catalog::new((0..6).map(|n| psu(&format!("psu-{n}"), 1000)).collect());
        let selection = Selection::from_components([cpu(65, Tier::Mid)]);

        for group in suggest(&selection, &catalog) {
            assert!(group.items.len() <= MAX_ITEMS_PER_GROUP);
        }
    }
}
