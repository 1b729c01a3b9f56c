mod loader;

pub use loader::{default_catalog, load_catalog, parse_catalog, CatalogBundle, CatalogError};

use crate::domain::component::{Component, ComponentId};
use crate::domain::slot::Slot;
use crate::errors::DomainError;

/// Read-only candidate lists per slot, kept in the order they were loaded.
///
/// Catalog order is treated as relevance order by the suggestion generator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    entries: [Vec<Component>; 9],
}

impl Catalog {
    pub fn new(components: Vec<Component>) -> Self {
        let mut entries: [Vec<Component>; 9] = Default::default();
        for component in components {
            entries[component.slot().index()].push(component);
        }
        Self { entries }
    }

    pub fn components(&self, slot: Slot) -> &[Component] {
        &self.entries[slot.index()]
    }

    pub fn find(&self, slot: Slot, id: &ComponentId) -> Option<&Component> {
        self.components(slot).iter().find(|component| &component.id == id)
    }

    /// Like `find`, but a missing id is an error naming the slot.
    pub fn resolve(&self, slot: Slot, id: &ComponentId) -> Result<&Component, DomainError> {
        self.find(slot, id)
            .ok_or_else(|| DomainError::UnknownComponent { slot, id: id.clone() })
    }

    pub fn len(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Vec::is_empty)
    }
}
