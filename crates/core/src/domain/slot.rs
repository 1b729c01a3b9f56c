use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::errors::DomainError;

/// One of the nine fixed hardware categories a build holds at most one component in.
///
/// Declaration order is the display order used by selections, summaries and suggestions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Cpu,
    Gpu,
    Mainboard,
    Ram,
    Ssd,
    Hdd,
    Psu,
    Cooling,
    Case,
}

impl Slot {
    pub const ALL: [Slot; 9] = [
        Slot::Cpu,
        Slot::Gpu,
        Slot::Mainboard,
        Slot::Ram,
        Slot::Ssd,
        Slot::Hdd,
        Slot::Psu,
        Slot::Cooling,
        Slot::Case,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Cpu => "cpu",
            Slot::Gpu => "gpu",
            Slot::Mainboard => "mainboard",
            Slot::Ram => "ram",
            Slot::Ssd => "ssd",
            Slot::Hdd => "hdd",
            Slot::Psu => "psu",
            Slot::Cooling => "cooling",
            Slot::Case => "case",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(Self::Cpu),
            "gpu" | "vga" => Ok(Self::Gpu),
            "mainboard" | "motherboard" => Ok(Self::Mainboard),
            "ram" => Ok(Self::Ram),
            "ssd" => Ok(Self::Ssd),
            "hdd" => Ok(Self::Hdd),
            "psu" => Ok(Self::Psu),
            "cooling" | "cooler" => Ok(Self::Cooling),
            "case" => Ok(Self::Case),
            other => Err(DomainError::UnknownSlot(other.to_owned())),
        }
    }
}

// Parsed through `FromStr` so map keys and legacy names (`vga`) work in every format.
impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Coarse performance rank used to balance CPU and GPU choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Budget,
    Mid,
    MidHigh,
    High,
    Ultra,
}

impl Tier {
    pub const ALL: [Tier; 5] = [Tier::Budget, Tier::Mid, Tier::MidHigh, Tier::High, Tier::Ultra];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn distance(self, other: Tier) -> usize {
        self.index().abs_diff(other.index())
    }

    /// Tiers within one step of `self`, clamped to the scale.
    pub fn neighbourhood(self) -> &'static [Tier] {
        let index = self.index();
        let start = index.saturating_sub(1);
        let end = (index + 2).min(Self::ALL.len());
        &Self::ALL[start..end]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Budget => "budget",
            Tier::Mid => "mid",
            Tier::MidHigh => "mid-high",
            Tier::High => "high",
            Tier::Ultra => "ultra",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RamType {
    #[serde(rename = "DDR3")]
    Ddr3,
    #[serde(rename = "DDR4")]
    Ddr4,
    #[serde(rename = "DDR5")]
    Ddr5,
}

impl fmt::Display for RamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RamType::Ddr3 => "DDR3",
            RamType::Ddr4 => "DDR4",
            RamType::Ddr5 => "DDR5",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormFactor {
    #[serde(rename = "E-ATX")]
    EAtx,
    #[serde(rename = "ATX")]
    Atx,
    #[serde(rename = "Micro-ATX", alias = "mATX")]
    MicroAtx,
    #[serde(rename = "Mini-ITX")]
    MiniItx,
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormFactor::EAtx => "E-ATX",
            FormFactor::Atx => "ATX",
            FormFactor::MicroAtx => "Micro-ATX",
            FormFactor::MiniItx => "Mini-ITX",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageInterface {
    #[serde(rename = "NVMe M.2")]
    NvmeM2,
    #[serde(rename = "M.2 SATA")]
    M2Sata,
    #[serde(rename = "SATA")]
    Sata,
}

impl fmt::Display for StorageInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StorageInterface::NvmeM2 => "NVMe M.2",
            StorageInterface::M2Sata => "M.2 SATA",
            StorageInterface::Sata => "SATA",
        })
    }
}
