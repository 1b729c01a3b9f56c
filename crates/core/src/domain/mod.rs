pub mod component;
pub mod preset;
pub mod selection;
pub mod slot;

pub use component::{
    CaseSpec, Component, ComponentId, ComponentSpec, CoolingSpec, CpuSpec, GpuSpec, HddSpec,
    MainboardSpec, Part, PsuSpec, RamSpec, SsdSpec,
};
pub use preset::{Preset, PresetId, PresetRegistry};
pub use selection::Selection;
pub use slot::{FormFactor, RamType, Slot, StorageInterface, Tier};
