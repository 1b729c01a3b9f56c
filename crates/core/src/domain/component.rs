use std::fmt;
use std::ops::Deref;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::slot::{FormFactor, RamType, Slot, StorageInterface, Tier};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComponentId(pub String);

impl ComponentId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CpuSpec {
    pub socket: String,
    pub ram_types: Vec<RamType>,
    pub tdp: u32,
    pub tier: Tier,
    #[serde(default)]
    pub cores: u32,
    #[serde(default)]
    pub threads: u32,
    #[serde(default)]
    pub boost_clock: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GpuSpec {
    pub tdp: u32,
    /// Card length in millimetres.
    pub length: u32,
    pub recommended_psu: u32,
    pub tier: Tier,
    #[serde(default)]
    pub vram: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MainboardSpec {
    pub socket: String,
    #[serde(default)]
    pub chipset: String,
    pub ram_type: RamType,
    pub ram_slots: u32,
    /// Maximum supported memory in GB.
    pub max_ram: u32,
    pub m2_slots: u32,
    pub form_factor: FormFactor,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RamSpec {
    #[serde(rename = "type")]
    pub ram_type: RamType,
    /// Kit capacity in GB.
    pub capacity: u32,
    pub speed: u32,
    pub sticks: u32,
    #[serde(default)]
    pub latency: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SsdSpec {
    #[serde(rename = "type")]
    pub interface: StorageInterface,
    pub capacity: u32,
    #[serde(default)]
    pub read_speed: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HddSpec {
    pub capacity: u32,
    pub rpm: u32,
    #[serde(default)]
    pub cache: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PsuSpec {
    pub wattage: u32,
    #[serde(default)]
    pub efficiency: String,
    #[serde(default)]
    pub modular: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoolingSpec {
    #[serde(default)]
    pub kind: String,
    pub tdp_support: u32,
    /// `None` when the vendor publishes no socket list.
    #[serde(default)]
    pub sockets: Option<Vec<String>>,
    /// Air cooler height in millimetres.
    #[serde(default)]
    pub height: Option<u32>,
    /// AIO radiator length in millimetres.
    #[serde(default)]
    pub radiator_size: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseSpec {
    pub form_factors: Vec<FormFactor>,
    pub max_gpu_length: u32,
    pub max_cooler_height: u32,
    #[serde(default)]
    pub radiator_support: Vec<u32>,
}

/// Category-specific attributes; the variant fixes which slot a component may occupy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentSpec {
    Cpu(CpuSpec),
    Gpu(GpuSpec),
    Mainboard(MainboardSpec),
    Ram(RamSpec),
    Ssd(SsdSpec),
    Hdd(HddSpec),
    Psu(PsuSpec),
    Cooling(CoolingSpec),
    Case(CaseSpec),
}

impl ComponentSpec {
    pub fn slot(&self) -> Slot {
        match self {
            ComponentSpec::Cpu(_) => Slot::Cpu,
            ComponentSpec::Gpu(_) => Slot::Gpu,
            ComponentSpec::Mainboard(_) => Slot::Mainboard,
            ComponentSpec::Ram(_) => Slot::Ram,
            ComponentSpec::Ssd(_) => Slot::Ssd,
            ComponentSpec::Hdd(_) => Slot::Hdd,
            ComponentSpec::Psu(_) => Slot::Psu,
            ComponentSpec::Cooling(_) => Slot::Cooling,
            ComponentSpec::Case(_) => Slot::Case,
        }
    }
}

macro_rules! spec_conversions {
    ($($variant:ident => $spec:ty),+ $(,)?) => {
        $(
            impl From<$spec> for ComponentSpec {
                fn from(spec: $spec) -> Self {
                    ComponentSpec::$variant(spec)
                }
            }
        )+
    };
}

spec_conversions! {
    Cpu => CpuSpec,
    Gpu => GpuSpec,
    Mainboard => MainboardSpec,
    Ram => RamSpec,
    Ssd => SsdSpec,
    Hdd => HddSpec,
    Psu => PsuSpec,
    Cooling => CoolingSpec,
    Case => CaseSpec,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub price: Decimal,
    pub spec: ComponentSpec,
}

impl Component {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        spec: impl Into<ComponentSpec>,
    ) -> Self {
        Self {
            id: ComponentId(id.into()),
            name: name.into(),
            brand: String::new(),
            price,
            spec: spec.into(),
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn slot(&self) -> Slot {
        self.spec.slot()
    }
}

/// A selected component viewed through its category schema.
#[derive(Debug)]
pub struct Part<'a, S> {
    pub component: &'a Component,
    pub spec: &'a S,
}

impl<S> Clone for Part<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Part<'_, S> {}

impl<'a, S> Part<'a, S> {
    pub fn name(&self) -> &'a str {
        &self.component.name
    }
}

impl<S> Deref for Part<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.spec
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{Component, ComponentSpec, PsuSpec};
    use crate::domain::slot::Slot;

    #[test]
    fn slot_is_derived_from_the_spec_variant() {
        let psu = Component::new(
            "psu-650",
            "Example 650W",
            Decimal::from(1_500_000),
            PsuSpec { wattage: 650, efficiency: "80+ Gold".to_owned(), modular: String::new() },
        );

        assert_eq!(psu.slot(), Slot::Psu);
        assert!(matches!(psu.spec, ComponentSpec::Psu(PsuSpec { wattage: 650, .. })));
    }
}
