use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::component::ComponentId;
use crate::domain::selection::Selection;
use crate::domain::slot::Slot;
use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PresetId(pub String);

/// A named reference build: seeds a selection in bulk and marks known-good builds for scoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: PresetId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub budget: String,
    pub components: BTreeMap<Slot, ComponentId>,
}

impl Preset {
    /// The slot -> component id pairs this preset pins, in slot order.
    ///
    /// Both `apply` and `matches` walk this list so the two never disagree on what
    /// the preset contains.
    pub fn assignments(&self) -> impl Iterator<Item = (Slot, &ComponentId)> + '_ {
        self.components.iter().map(|(slot, id)| (*slot, id))
    }

    /// Builds a fresh selection from the catalog. Ids the catalog does not know leave
    /// their slot empty, as do slots the preset does not mention.
    pub fn apply(&self, catalog: &Catalog) -> Selection {
        let mut selection = Selection::new();
        for (slot, id) in self.assignments() {
            if let Some(component) = catalog.find(slot, id) {
                selection.set(component.clone());
            }
        }
        selection
    }

    /// True when every slot the preset pins holds exactly that component id.
    pub fn matches(&self, selection: &Selection) -> bool {
        self.assignments().all(|(slot, id)| selection.component_id(slot) == Some(id))
    }

    pub fn unresolved(&self, catalog: &Catalog) -> Vec<(Slot, ComponentId)> {
        self.assignments()
            .filter(|(slot, id)| catalog.find(*slot, id).is_none())
            .map(|(slot, id)| (slot, id.clone()))
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PresetRegistry {
    presets: Vec<Preset>,
}

impl PresetRegistry {
    pub fn new(presets: Vec<Preset>) -> Result<Self, DomainError> {
        for (position, preset) in presets.iter().enumerate() {
            if preset.components.is_empty() {
                return Err(DomainError::InvariantViolation(format!(
                    "preset `{}` pins no components",
                    preset.id.0
                )));
            }
            if presets[..position].iter().any(|earlier| earlier.id == preset.id) {
                return Err(DomainError::InvariantViolation(format!(
                    "duplicate preset id `{}`",
                    preset.id.0
                )));
            }
        }
        Ok(Self { presets })
    }

    pub fn find(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.id.0.eq_ignore_ascii_case(id.trim()))
    }

    pub fn get(&self, id: &str) -> Result<&Preset, DomainError> {
        self.find(id).ok_or_else(|| DomainError::UnknownPreset(id.trim().to_owned()))
    }

    pub fn matching(&self, selection: &Selection) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.matches(selection))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> + '_ {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
