use serde::{Deserialize, Serialize};

use super::predicates::{
    case_accepts_mainboard, cooler_socket_support, cpu_supports_ram_type, estimated_draw,
    ram_fits_mainboard, sockets_match, tiers_balanced,
};
use crate::domain::selection::Selection;
use crate::domain::slot::{Slot, StorageInterface};

/// Minimum PSU headroom, as a percentage of rated wattage, before a build is flagged.
pub const PSU_HEADROOM_WARNING_PCT: i64 = 20;
/// GPU clearance in millimetres below which a fitting card is still flagged as tight.
pub const GPU_TIGHT_FIT_MM: u32 = 20;

/// Ordered from most to least severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Issue,
    Warning,
    Strength,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub code: String,
    pub title: String,
    pub detail: String,
    pub slots: Vec<Slot>,
}

impl Finding {
    pub fn involves(&self, slot: Slot) -> bool {
        self.slots.contains(&slot)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStatus {
    pub has_issue: bool,
    pub has_warning: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Findings {
    pub issues: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub strengths: Vec<Finding>,
    pub selected_count: usize,
}

impl Findings {
    pub fn empty(selected_count: usize) -> Self {
        Self { selected_count, ..Self::default() }
    }

    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Issue => self.issues.push(finding),
            Severity::Warning => self.warnings.push(finding),
            Severity::Strength => self.strengths.push(finding),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty() && self.warnings.is_empty() && self.strengths.is_empty()
    }

    /// All findings, most severe first, rule order within a severity.
    pub fn iter(&self) -> impl Iterator<Item = &Finding> + '_ {
        self.issues.iter().chain(&self.warnings).chain(&self.strengths)
    }

    pub fn codes(&self) -> Vec<&str> {
        self.iter().map(|finding| finding.code.as_str()).collect()
    }

    pub fn status_for(&self, slot: Slot) -> SlotStatus {
        SlotStatus {
            has_issue: self.issues.iter().any(|finding| finding.involves(slot)),
            has_warning: self.warnings.iter().any(|finding| finding.involves(slot)),
        }
    }
}

pub trait RuleEvaluator: Send + Sync {
    fn evaluate(&self, selection: &Selection) -> Findings;
}

#[derive(Default)]
pub struct DeterministicRuleEvaluator;

impl RuleEvaluator for DeterministicRuleEvaluator {
    fn evaluate(&self, selection: &Selection) -> Findings {
        evaluate(selection)
    }
}

type Rule = fn(&Selection, &mut Findings);

const RULES: [Rule; 14] = [
    cpu_mainboard_socket,
    cpu_mainboard_ram_type,
    ram_mainboard,
    cpu_ram_type,
    psu_capacity,
    psu_gpu_recommendation,
    cooler_tdp,
    cooler_socket,
    case_form_factor,
    case_gpu_length,
    case_cooler_height,
    case_radiator,
    ssd_m2_slot,
    cpu_gpu_balance,
];

/// Runs every rule against the selection. Fewer than two filled slots yields no findings.
pub fn evaluate(selection: &Selection) -> Findings {
    let selected_count = selection.selected_count();
    let mut findings = Findings::empty(selected_count);
    if selected_count < 2 {
        return findings;
    }

    for rule in RULES {
        rule(selection, &mut findings);
    }
    findings
}

fn finding(
    severity: Severity,
    code: &str,
    title: impl Into<String>,
    detail: impl Into<String>,
    slots: &[Slot],
) -> Finding {
    Finding {
        severity,
        code: code.to_owned(),
        title: title.into(),
        detail: detail.into(),
        slots: slots.to_vec(),
    }
}

fn cpu_mainboard_socket(selection: &Selection, findings: &mut Findings) {
    let (Some(cpu), Some(board)) = (selection.cpu(), selection.mainboard()) else {
        return;
    };
    let slots = [Slot::Cpu, Slot::Mainboard];

    if sockets_match(&cpu, &board) {
        findings.push(finding(
            Severity::Strength,
            "SOCKET_MATCH",
            "CPU socket matches the mainboard",
            format!("Both use socket {}.", cpu.socket),
            &slots,
        ));
    } else {
        findings.push(finding(
            Severity::Issue,
            "SOCKET_MISMATCH",
            "CPU does not fit the mainboard socket",
            format!(
                "{} uses socket {} but {} has socket {}.",
                cpu.name(),
                cpu.socket,
                board.name(),
                board.socket
            ),
            &slots,
        ));
    }
}

fn cpu_mainboard_ram_type(selection: &Selection, findings: &mut Findings) {
    let (Some(cpu), Some(board)) = (selection.cpu(), selection.mainboard()) else {
        return;
    };

    if !cpu_supports_ram_type(&cpu, board.ram_type) {
        findings.push(finding(
            Severity::Issue,
            "CPU_MAINBOARD_RAM_TYPE",
            "CPU does not support the mainboard memory type",
            format!(
                "{} supports {} but {} takes {}.",
                cpu.name(),
                join(&cpu.ram_types),
                board.name(),
                board.ram_type
            ),
            &[Slot::Cpu, Slot::Mainboard],
        ));
    }
}

fn ram_mainboard(selection: &Selection, findings: &mut Findings) {
    let (Some(ram), Some(board)) = (selection.ram(), selection.mainboard()) else {
        return;
    };
    let slots = [Slot::Ram, Slot::Mainboard];

    if ram_fits_mainboard(&ram, &board) {
        findings.push(finding(
            Severity::Strength,
            "RAM_TYPE_MATCH",
            "Memory type matches the mainboard",
            format!("{} is {} as the mainboard expects.", ram.name(), ram.ram_type),
            &slots,
        ));
    } else {
        findings.push(finding(
            Severity::Issue,
            "RAM_TYPE_MISMATCH",
            "Memory type does not match the mainboard",
            format!(
                "{} is {} but {} only takes {}.",
                ram.name(),
                ram.ram_type,
                board.name(),
                board.ram_type
            ),
            &slots,
        ));
    }

    if ram.capacity > board.max_ram {
        findings.push(finding(
            Severity::Warning,
            "RAM_CAPACITY_EXCEEDED",
            "Memory kit exceeds the mainboard maximum",
            format!(
                "The kit is {}GB, the mainboard supports at most {}GB.",
                ram.capacity, board.max_ram
            ),
            &slots,
        ));
    }

    if ram.sticks > board.ram_slots {
        findings.push(finding(
            Severity::Issue,
            "RAM_SLOTS_EXCEEDED",
            "Not enough memory slots",
            format!(
                "The kit has {} sticks but the mainboard has {} slots.",
                ram.sticks, board.ram_slots
            ),
            &slots,
        ));
    }
}

fn cpu_ram_type(selection: &Selection, findings: &mut Findings) {
    let (Some(cpu), Some(ram)) = (selection.cpu(), selection.ram()) else {
        return;
    };

    if !cpu_supports_ram_type(&cpu, ram.ram_type) {
        findings.push(finding(
            Severity::Issue,
            "CPU_RAM_TYPE",
            "CPU does not support this memory type",
            format!(
                "{} supports {} but the kit is {}.",
                cpu.name(),
                join(&cpu.ram_types),
                ram.ram_type
            ),
            &[Slot::Cpu, Slot::Ram],
        ));
    }
}

fn psu_capacity(selection: &Selection, findings: &mut Findings) {
    let Some(psu) = selection.psu() else {
        return;
    };
    let cpu = selection.cpu();
    let gpu = selection.gpu();

    let draw = estimated_draw(cpu.map(|cpu| cpu.tdp), gpu.map(|gpu| gpu.tdp));
    let wattage = i64::from(psu.wattage);
    let headroom = wattage - i64::from(draw);

    let mut slots = vec![Slot::Psu];
    if cpu.is_some() {
        slots.push(Slot::Cpu);
    }
    if gpu.is_some() {
        slots.push(Slot::Gpu);
    }

    if headroom < 0 {
        findings.push(finding(
            Severity::Issue,
            "PSU_INSUFFICIENT",
            "Power supply is too weak",
            format!(
                "The system needs about {draw}W but the PSU delivers {}W ({}W short).",
                psu.wattage, -headroom
            ),
            &slots,
        ));
    } else if headroom * 100 < PSU_HEADROOM_WARNING_PCT * wattage {
        findings.push(finding(
            Severity::Warning,
            "PSU_LOW_HEADROOM",
            "Power supply runs close to full load",
            format!(
                "{}W PSU for an estimated {draw}W load. Aim for 20-30% headroom.",
                psu.wattage
            ),
            &slots,
        ));
    } else {
        findings.push(finding(
            Severity::Strength,
            "PSU_SUFFICIENT",
            "Power supply has enough capacity",
            format!(
                "{}W covers the estimated {draw}W with {}% to spare.",
                psu.wattage,
                headroom * 100 / wattage
            ),
            &slots,
        ));
    }
}

fn psu_gpu_recommendation(selection: &Selection, findings: &mut Findings) {
    let (Some(psu), Some(gpu)) = (selection.psu(), selection.gpu()) else {
        return;
    };

    if psu.wattage < gpu.recommended_psu {
        findings.push(finding(
            Severity::Warning,
            "PSU_BELOW_GPU_RECOMMENDATION",
            "Power supply is below the GPU recommendation",
            format!(
                "{} recommends at least {}W, the PSU has {}W.",
                gpu.name(),
                gpu.recommended_psu,
                psu.wattage
            ),
            &[Slot::Psu, Slot::Gpu],
        ));
    }
}

fn cooler_tdp(selection: &Selection, findings: &mut Findings) {
    let (Some(cooler), Some(cpu)) = (selection.cooling(), selection.cpu()) else {
        return;
    };
    let slots = [Slot::Cooling, Slot::Cpu];

    if cooler.tdp_support < cpu.tdp {
        findings.push(finding(
            Severity::Warning,
            "COOLER_TDP_LOW",
            "Cooler may not keep up with the CPU",
            format!(
                "{} is rated for {}W, the CPU draws {}W and may throttle under load.",
                cooler.name(),
                cooler.tdp_support,
                cpu.tdp
            ),
            &slots,
        ));
    } else {
        findings.push(finding(
            Severity::Strength,
            "COOLER_TDP_OK",
            "Cooler handles the CPU heat output",
            format!("Rated for {}W against a {}W CPU.", cooler.tdp_support, cpu.tdp),
            &slots,
        ));
    }
}

fn cooler_socket(selection: &Selection, findings: &mut Findings) {
    let (Some(cooler), Some(cpu)) = (selection.cooling(), selection.cpu()) else {
        return;
    };

    if cooler_socket_support(&cooler, &cpu.socket) == Some(false) {
        findings.push(finding(
            Severity::Issue,
            "COOLER_SOCKET_UNSUPPORTED",
            "Cooler does not mount on this CPU socket",
            format!("{} has no mounting kit for socket {}.", cooler.name(), cpu.socket),
            &[Slot::Cooling, Slot::Cpu],
        ));
    }
}

fn case_form_factor(selection: &Selection, findings: &mut Findings) {
    let (Some(case), Some(board)) = (selection.case(), selection.mainboard()) else {
        return;
    };
    let slots = [Slot::Case, Slot::Mainboard];

    if case_accepts_mainboard(&case, &board) {
        findings.push(finding(
            Severity::Strength,
            "CASE_FORM_FACTOR_OK",
            "Case fits the mainboard",
            format!("The case accepts {} boards.", board.form_factor),
            &slots,
        ));
    } else {
        findings.push(finding(
            Severity::Issue,
            "CASE_FORM_FACTOR_MISMATCH",
            "Mainboard does not fit the case",
            format!(
                "{} is {}, the case supports {}.",
                board.name(),
                board.form_factor,
                join(&case.form_factors)
            ),
            &slots,
        ));
    }
}

fn case_gpu_length(selection: &Selection, findings: &mut Findings) {
    let (Some(case), Some(gpu)) = (selection.case(), selection.gpu()) else {
        return;
    };
    let slots = [Slot::Case, Slot::Gpu];

    if gpu.length > case.max_gpu_length {
        findings.push(finding(
            Severity::Issue,
            "GPU_TOO_LONG",
            "Graphics card is too long for the case",
            format!(
                "{} is {}mm long, the case fits at most {}mm.",
                gpu.name(),
                gpu.length,
                case.max_gpu_length
            ),
            &slots,
        ));
        return;
    }

    let clearance = case.max_gpu_length - gpu.length;
    if clearance < GPU_TIGHT_FIT_MM {
        findings.push(finding(
            Severity::Warning,
            "GPU_TIGHT_FIT",
            "Graphics card is a tight fit",
            format!(
                "{}mm card in a {}mm bay leaves {clearance}mm.",
                gpu.length, case.max_gpu_length
            ),
            &slots,
        ));
    }
}

fn case_cooler_height(selection: &Selection, findings: &mut Findings) {
    let (Some(case), Some(cooler)) = (selection.case(), selection.cooling()) else {
        return;
    };
    let Some(height) = cooler.height else {
        return;
    };

    if height > case.max_cooler_height {
        findings.push(finding(
            Severity::Issue,
            "COOLER_TOO_TALL",
            "Cooler is too tall for the case",
            format!(
                "{} is {height}mm tall, the case fits at most {}mm.",
                cooler.name(),
                case.max_cooler_height
            ),
            &[Slot::Case, Slot::Cooling],
        ));
    }
}

fn case_radiator(selection: &Selection, findings: &mut Findings) {
    let (Some(case), Some(cooler)) = (selection.case(), selection.cooling()) else {
        return;
    };
    let Some(radiator) = cooler.radiator_size else {
        return;
    };

    if !case.radiator_support.contains(&radiator) {
        let supported = if case.radiator_support.is_empty() {
            "no radiators".to_owned()
        } else {
            format!("{}mm radiators", join(&case.radiator_support).replace(", ", "/"))
        };
        findings.push(finding(
            Severity::Issue,
            "RADIATOR_UNSUPPORTED",
            "Case cannot mount the radiator",
            format!(
                "{} needs a {radiator}mm mount, {} supports {supported}.",
                cooler.name(),
                case.name()
            ),
            &[Slot::Case, Slot::Cooling],
        ));
    }
}

fn ssd_m2_slot(selection: &Selection, findings: &mut Findings) {
    let (Some(ssd), Some(board)) = (selection.ssd(), selection.mainboard()) else {
        return;
    };
    if ssd.interface != StorageInterface::NvmeM2 {
        return;
    }
    let slots = [Slot::Ssd, Slot::Mainboard];

    if board.m2_slots == 0 {
        findings.push(finding(
            Severity::Issue,
            "NO_M2_SLOT",
            "Mainboard has no M.2 slot",
            format!("{} cannot host the NVMe drive {}.", board.name(), ssd.name()),
            &slots,
        ));
    } else {
        findings.push(finding(
            Severity::Strength,
            "M2_SLOT_AVAILABLE",
            "NVMe drive has an M.2 slot",
            format!("The mainboard has {} M.2 slots.", board.m2_slots),
            &slots,
        ));
    }
}

fn cpu_gpu_balance(selection: &Selection, findings: &mut Findings) {
    let (Some(cpu), Some(gpu)) = (selection.cpu(), selection.gpu()) else {
        return;
    };
    let slots = [Slot::Cpu, Slot::Gpu];

    if tiers_balanced(cpu.tier, gpu.tier) {
        findings.push(finding(
            Severity::Strength,
            "TIER_BALANCED",
            "CPU and GPU are well balanced",
            format!("CPU tier {} pairs with GPU tier {}.", cpu.tier, gpu.tier),
            &slots,
        ));
    } else if cpu.tier > gpu.tier {
        findings.push(finding(
            Severity::Warning,
            "GPU_BOTTLENECK",
            "GPU is weak for this CPU",
            format!(
                "CPU tier {} is well above GPU tier {}; the GPU will limit games.",
                cpu.tier, gpu.tier
            ),
            &slots,
        ));
    } else {
        findings.push(finding(
            Severity::Warning,
            "CPU_BOTTLENECK",
            "CPU is weak for this GPU",
            format!(
                "GPU tier {} is well above CPU tier {}; the CPU will hold the GPU back.",
                gpu.tier, cpu.tier
            ),
            &slots,
        ));
    }
}

fn join<T: std::fmt::Display>(values: &[T]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{evaluate, Severity};
    use crate::domain::component::{
        CaseSpec, Component, CoolingSpec, CpuSpec, GpuSpec, MainboardSpec, PsuSpec, RamSpec,
        SsdSpec,
    };
    use crate::domain::selection::Selection;
    use crate::domain::slot::{FormFactor, RamType, Slot, StorageInterface, Tier};

    fn cpu(socket: &str, ram_types: &[RamType], tdp: u32, tier: Tier) -> Component {
        Component::new(
            "cpu",
            "Test CPU",
            Decimal::from(5_000_000),
            CpuSpec {
                socket: socket.to_owned(),
                ram_types: ram_types.to_vec(),
                tdp,
                tier,
                cores: 8,
                threads: 16,
                boost_clock: 5.0,
            },
        )
    }

    fn board(socket: &str, ram_type: RamType) -> Component {
        Component::new(
            "board",
            "Test Board",
            Decimal::from(3_000_000),
            MainboardSpec {
                socket: socket.to_owned(),
                chipset: String::new(),
                ram_type,
                ram_slots: 4,
                max_ram: 128,
                m2_slots: 2,
                form_factor: FormFactor::Atx,
            },
        )
    }

    fn gpu(tdp: u32, length: u32, recommended_psu: u32, tier: Tier) -> Component {
        Component::new(
            "gpu",
            "Test GPU",
            Decimal::from(10_000_000),
            GpuSpec { tdp, length, recommended_psu, tier, vram: 12 },
        )
    }

    fn psu(wattage: u32) -> Component {
        Component::new(
            "psu",
            "Test PSU",
            Decimal::from(1_500_000),
            PsuSpec { wattage, efficiency: String::new(), modular: String::new() },
        )
    }

    fn case(max_gpu_length: u32, max_cooler_height: u32, radiators: &[u32]) -> Component {
        Component::new(
            "case",
            "Test Case",
            Decimal::from(1_500_000),
            CaseSpec {
                form_factors: vec![FormFactor::Atx, FormFactor::MicroAtx],
                max_gpu_length,
                max_cooler_height,
                radiator_support: radiators.to_vec(),
            },
        )
    }

    fn cooler(sockets: Option<&[&str]>, height: Option<u32>, radiator: Option<u32>) -> Component {
        Component::new(
            "cooler",
            "Test Cooler",
            Decimal::from(800_000),
            CoolingSpec {
                kind: String::new(),
                tdp_support: 150,
                sockets: sockets.map(|list| list.iter().map(|s| (*s).to_owned()).collect()),
                height,
                radiator_size: radiator,
            },
        )
    }

    #[test]
    fn single_component_produces_no_findings() {
        let findings = evaluate(&Selection::from_components([psu(300)]));

        assert!(findings.is_empty());
        assert_eq!(findings.selected_count, 1);
    }

    #[test]
    fn socket_mismatch_is_exactly_one_issue_tagged_cpu_and_mainboard() {
        let selection = Selection::from_components([
            cpu("AM5", &[RamType::Ddr5], 105, Tier::High),
            board("LGA1700", RamType::Ddr5),
        ]);
        let findings = evaluate(&selection);

        let socket: Vec<_> =
            findings.iter().filter(|finding| finding.code.starts_with("SOCKET_")).collect();
        assert_eq!(socket.len(), 1);
        assert_eq!(socket[0].code, "SOCKET_MISMATCH");
        assert_eq!(socket[0].severity, Severity::Issue);
        assert_eq!(socket[0].slots, vec![Slot::Cpu, Slot::Mainboard]);
    }

    #[test]
    fn socket_match_is_one_strength_with_the_same_tag() {
        let selection = Selection::from_components([
            cpu("AM5", &[RamType::Ddr5], 105, Tier::High),
            board("AM5", RamType::Ddr5),
        ]);
        let findings = evaluate(&selection);

        assert_eq!(findings.codes(), vec!["SOCKET_MATCH"]);
        assert_eq!(findings.strengths[0].slots, vec![Slot::Cpu, Slot::Mainboard]);
    }

    #[test]
    fn psu_headroom_boundary_switches_from_warning_to_issue() {
        // 100 + 200 + 50 = 350W estimated draw.
        let parts = || {
            [cpu("AM5", &[RamType::Ddr5], 100, Tier::High), gpu(200, 250, 300, Tier::High)]
        };

        let mut exact = Selection::from_components(parts());
        exact.set(psu(350));
        let findings = evaluate(&exact);
        assert!(findings.warnings.iter().any(|finding| finding.code == "PSU_LOW_HEADROOM"));
        assert!(findings.issues.iter().all(|finding| finding.code != "PSU_INSUFFICIENT"));

        let mut short = Selection::from_components(parts());
        short.set(psu(349));
        let findings = evaluate(&short);
        let issue = findings
            .issues
            .iter()
            .find(|finding| finding.code == "PSU_INSUFFICIENT")
            .expect("insufficient psu");
        assert_eq!(issue.slots, vec![Slot::Psu, Slot::Cpu, Slot::Gpu]);
    }

    #[test]
    fn psu_strength_and_gpu_recommendation_warning_coexist() {
        let selection = Selection::from_components([
            cpu("AM5", &[RamType::Ddr5], 105, Tier::High),
            board("AM5", RamType::Ddr5),
            psu(550),
            gpu(220, 280, 650, Tier::High),
        ]);
        let findings = evaluate(&selection);

        assert!(findings.strengths.iter().any(|finding| finding.code == "PSU_SUFFICIENT"));
        let warning = findings
            .warnings
            .iter()
            .find(|finding| finding.code == "PSU_BELOW_GPU_RECOMMENDATION")
            .expect("recommendation warning");
        assert_eq!(warning.slots, vec![Slot::Psu, Slot::Gpu]);
    }

    #[test]
    fn oversized_tdp_from_a_custom_catalog_is_just_insufficient_power() {
        let selection = Selection::from_components([
            cpu("AM5", &[RamType::Ddr5], u32::MAX, Tier::Ultra),
            gpu(u32::MAX, 250, 300, Tier::Ultra),
            psu(1_000),
        ]);
        let findings = evaluate(&selection);

        assert!(findings.issues.iter().any(|finding| finding.code == "PSU_INSUFFICIENT"));
    }

    #[test]
    fn psu_rule_runs_with_only_a_psu_and_one_other_part() {
        let selection = Selection::from_components([psu(100), board("AM5", RamType::Ddr5)]);
        let findings = evaluate(&selection);

        // 50W base draw against 100W leaves 50% headroom.
        assert_eq!(findings.codes(), vec!["PSU_SUFFICIENT"]);
        assert_eq!(findings.strengths[0].slots, vec![Slot::Psu]);
    }

    #[test]
    fn ram_checks_type_capacity_and_stick_count() {
        let ram = Component::new(
            "ram",
            "Test Kit",
            Decimal::from(9_000_000),
            RamSpec {
                ram_type: RamType::Ddr4,
                capacity: 256,
                speed: 3200,
                sticks: 8,
                latency: String::new(),
            },
        );
        let selection = Selection::from_components([
            ram,
            board("AM5", RamType::Ddr5),
            cpu("AM5", &[RamType::Ddr5], 105, Tier::High),
        ]);
        let findings = evaluate(&selection);
        let codes = findings.codes();

        let expected_codes =
            ["RAM_TYPE_MISMATCH", "RAM_SLOTS_EXCEEDED", "CPU_RAM_TYPE", "RAM_CAPACITY_EXCEEDED"];
        for expected in expected_codes {
            assert!(codes.contains(&expected), "missing {expected} in {codes:?}");
        }
        assert!(!codes.contains(&"RAM_TYPE_MATCH"));
    }

    #[test]
    fn cpu_memory_controller_must_support_the_board() {
        let selection = Selection::from_components([
            cpu("AM4", &[RamType::Ddr4], 65, Tier::Mid),
            board("AM4", RamType::Ddr5),
        ]);

        assert!(evaluate(&selection).codes().contains(&"CPU_MAINBOARD_RAM_TYPE"));
    }

    #[test]
    fn cooler_rules_respect_declared_sockets_only() {
        let unsupported = Selection::from_components([
            cpu("AM5", &[RamType::Ddr5], 170, Tier::Ultra),
            cooler(Some(&["LGA1700"]), None, None),
        ]);
        let findings = evaluate(&unsupported);
        let codes = findings.codes();
        assert!(codes.contains(&"COOLER_SOCKET_UNSUPPORTED"));
        assert!(codes.contains(&"COOLER_TDP_LOW"));

        let undeclared = Selection::from_components([
            cpu("AM5", &[RamType::Ddr5], 105, Tier::High),
            cooler(None, None, None),
        ]);
        assert_eq!(evaluate(&undeclared).codes(), vec!["COOLER_TDP_OK"]);
    }

    #[test]
    fn case_checks_gpu_length_cooler_height_and_radiator() {
        let tight =
            Selection::from_components([case(300, 160, &[240]), gpu(200, 290, 550, Tier::Mid)]);
        assert_eq!(evaluate(&tight).codes(), vec!["GPU_TIGHT_FIT"]);

        let too_long =
            Selection::from_components([case(300, 160, &[240]), gpu(200, 301, 550, Tier::Mid)]);
        assert_eq!(evaluate(&too_long).codes(), vec!["GPU_TOO_LONG"]);

        let roomy =
            Selection::from_components([case(320, 160, &[240]), gpu(200, 300, 550, Tier::Mid)]);
        assert!(evaluate(&roomy).is_empty());

        let tall =
            Selection::from_components([case(300, 160, &[240]), cooler(None, Some(165), None)]);
        assert_eq!(evaluate(&tall).codes(), vec!["COOLER_TOO_TALL"]);

        let radiator =
            Selection::from_components([case(300, 160, &[240]), cooler(None, None, Some(360))]);
        assert_eq!(evaluate(&radiator).codes(), vec!["RADIATOR_UNSUPPORTED"]);
    }

    #[test]
    fn case_form_factor_and_m2_slots() {
        let mut eatx_board = board("AM5", RamType::Ddr5);
        if let crate::domain::component::ComponentSpec::Mainboard(spec) = &mut eatx_board.spec {
            spec.form_factor = FormFactor::EAtx;
            spec.m2_slots = 0;
        }
        let nvme = Component::new(
            "ssd",
            "Test NVMe",
            Decimal::from(2_000_000),
            SsdSpec { interface: StorageInterface::NvmeM2, capacity: 1000, read_speed: 7000 },
        );
        let selection = Selection::from_components([eatx_board, case(300, 160, &[]), nvme]);
        let findings = evaluate(&selection);

        assert_eq!(findings.codes(), vec!["CASE_FORM_FACTOR_MISMATCH", "NO_M2_SLOT"]);
        assert!(findings.status_for(Slot::Ssd).has_issue);
        assert!(!findings.status_for(Slot::Cpu).has_issue);
    }

    #[test]
    fn accepted_board_form_factor_is_a_strength() {
        let mut micro_board = board("AM5", RamType::Ddr5);
        if let crate::domain::component::ComponentSpec::Mainboard(spec) = &mut micro_board.spec {
            spec.form_factor = FormFactor::MicroAtx;
        }
        let findings = evaluate(&Selection::from_components([micro_board, case(300, 160, &[])]));

        assert_eq!(findings.codes(), vec!["CASE_FORM_FACTOR_OK"]);
        assert_eq!(findings.strengths[0].slots, vec![Slot::Case, Slot::Mainboard]);
    }

    #[test]
    fn nvme_drive_on_a_board_with_m2_slots_is_a_strength() {
        let nvme = Component::new(
            "ssd",
            "Test NVMe",
            Decimal::from(2_000_000),
            SsdSpec { interface: StorageInterface::NvmeM2, capacity: 1000, read_speed: 7000 },
        );
        let findings = evaluate(&Selection::from_components([nvme, board("AM5", RamType::Ddr5)]));

        assert_eq!(findings.codes(), vec!["M2_SLOT_AVAILABLE"]);
        assert_eq!(findings.strengths[0].slots, vec![Slot::Ssd, Slot::Mainboard]);
    }

    #[test]
    fn matching_memory_type_is_a_strength() {
        let ram = Component::new(
            "ram",
            "Test Kit",
            Decimal::from(2_500_000),
            RamSpec {
                ram_type: RamType::Ddr5,
                capacity: 32,
                speed: 6000,
                sticks: 2,
                latency: String::new(),
            },
        );
        let findings = evaluate(&Selection::from_components([ram, board("AM5", RamType::Ddr5)]));

        assert_eq!(findings.codes(), vec!["RAM_TYPE_MATCH"]);
        assert_eq!(findings.strengths[0].slots, vec![Slot::Ram, Slot::Mainboard]);
    }

    #[test]
    fn sata_drives_skip_the_m2_rule() {
        let sata = Component::new(
            "ssd",
            "Test SATA",
            Decimal::from(1_000_000),
            SsdSpec { interface: StorageInterface::Sata, capacity: 500, read_speed: 550 },
        );
        let selection = Selection::from_components([sata, board("AM5", RamType::Ddr5)]);

        assert!(evaluate(&selection).is_empty());
    }

    #[test]
    fn tier_balance_is_direction_specific() {
        let gpu_bound = Selection::from_components([
            cpu("AM5", &[RamType::Ddr5], 170, Tier::Ultra),
            gpu(130, 240, 450, Tier::Mid),
        ]);
        assert_eq!(evaluate(&gpu_bound).codes(), vec!["GPU_BOTTLENECK"]);

        let cpu_bound = Selection::from_components([
            cpu("AM4", &[RamType::Ddr4], 65, Tier::Budget),
            gpu(320, 330, 850, Tier::High),
        ]);
        assert_eq!(evaluate(&cpu_bound).codes(), vec!["CPU_BOTTLENECK"]);

        let balanced = Selection::from_components([
            cpu("AM5", &[RamType::Ddr5], 105, Tier::High),
            gpu(220, 280, 650, Tier::MidHigh),
        ]);
        let findings = evaluate(&balanced);
        assert_eq!(findings.codes(), vec!["TIER_BALANCED"]);
        assert_eq!(findings.strengths[0].slots, vec![Slot::Cpu, Slot::Gpu]);
    }
}
