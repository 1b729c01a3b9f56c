use crate::domain::component::{
    CaseSpec, Component, ComponentId, ComponentSpec, CoolingSpec, CpuSpec, GpuSpec,
    MainboardSpec, Part, PsuSpec, RamSpec, SsdSpec,
};
use crate::domain::slot::Slot;

/// The caller's current slot -> component assignment.
///
/// All nine slots always exist; each holds at most one component and the component's
/// spec variant always matches the slot it sits in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    slots: [Option<Component>; 9],
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_components(components: impl IntoIterator<Item = Component>) -> Self {
        let mut selection = Self::new();
        for component in components {
            selection.set(component);
        }
        selection
    }

    pub fn get(&self, slot: Slot) -> Option<&Component> {
        self.slots[slot.index()].as_ref()
    }

    pub fn is_filled(&self, slot: Slot) -> bool {
        self.slots[slot.index()].is_some()
    }

    /// Places `component` in its own slot, returning whatever was there before.
    pub fn set(&mut self, component: Component) -> Option<Component> {
        let slot = component.slot();
        self.slots[slot.index()].replace(component)
    }

    pub fn clear(&mut self, slot: Slot) -> Option<Component> {
        self.slots[slot.index()].take()
    }

    pub fn reset(&mut self) {
        self.slots = Default::default();
    }

    pub fn selected_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn component_id(&self, slot: Slot) -> Option<&ComponentId> {
        self.get(slot).map(|component| &component.id)
    }

    /// Every slot in display order, filled or not.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Option<&Component>)> + '_ {
        Slot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    pub fn components(&self) -> impl Iterator<Item = &Component> + '_ {
        self.slots.iter().flatten()
    }

    pub fn cpu(&self) -> Option<Part<'_, CpuSpec>> {
        let component = self.get(Slot::Cpu)?;
        match &component.spec {
            ComponentSpec::Cpu(spec) => Some(Part { component, spec }),
            _ => None,
        }
    }

    pub fn gpu(&self) -> Option<Part<'_, GpuSpec>> {
        let component = self.get(Slot::Gpu)?;
        match &component.spec {
            ComponentSpec::Gpu(spec) => Some(Part { component, spec }),
            _ => None,
        }
    }

    pub fn mainboard(&self) -> Option<Part<'_, MainboardSpec>> {
        let component = self.get(Slot::Mainboard)?;
        match &component.spec {
            ComponentSpec::Mainboard(spec) => Some(Part { component, spec }),
            _ => None,
        }
    }

    pub fn ram(&self) -> Option<Part<'_, RamSpec>> {
        let component = self.get(Slot::Ram)?;
        match &component.spec {
            ComponentSpec::Ram(spec) => Some(Part { component, spec }),
            _ => None,
        }
    }

    pub fn ssd(&self) -> Option<Part<'_, SsdSpec>> {
        let component = self.get(Slot::Ssd)?;
        match &component.spec {
            ComponentSpec::Ssd(spec) => Some(Part { component, spec }),
            _ => None,
        }
    }

    pub fn psu(&self) -> Option<Part<'_, PsuSpec>> {
        let component = self.get(Slot::Psu)?;
        match &component.spec {
            ComponentSpec::Psu(spec) => Some(Part { component, spec }),
            _ => None,
        }
    }

    pub fn cooling(&self) -> Option<Part<'_, CoolingSpec>> {
        let component = self.get(Slot::Cooling)?;
        match &component.spec {
            ComponentSpec::Cooling(spec) => Some(Part { component, spec }),
            _ => None,
        }
    }

    pub fn case(&self) -> Option<Part<'_, CaseSpec>> {
        let component = self.get(Slot::Case)?;
        match &component.spec {
            ComponentSpec::Case(spec) => Some(Part { component, spec }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::Selection;
    use crate::domain::component::{Component, HddSpec, PsuSpec};
    use crate::domain::slot::Slot;

    fn psu(id: &str, wattage: u32) -> Component {
        Component::new(
            id,
            format!("PSU {wattage}W"),
            Decimal::from(1_000_000),
            PsuSpec { wattage, efficiency: String::new(), modular: String::new() },
        )
    }

    #[test]
    fn new_selection_exposes_all_nine_empty_slots() {
        let selection = Selection::new();
        let slots: Vec<_> = selection.iter().collect();

        assert_eq!(slots.len(), 9);
        assert!(slots.iter().all(|(_, component)| component.is_none()));
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn set_replaces_the_component_in_the_same_slot() {
        let mut selection = Selection::new();
        assert!(selection.set(psu("psu-550", 550)).is_none());

        let previous = selection.set(psu("psu-750", 750)).expect("previous psu");
        assert_eq!(previous.id.as_str(), "psu-550");
        assert_eq!(selection.selected_count(), 1);
        assert_eq!(selection.psu().map(|psu| psu.wattage), Some(750));
    }

    #[test]
    fn clear_and_reset_empty_slots() {
        let mut selection = Selection::new();
        selection.set(psu("psu-550", 550));
        selection.set(Component::new(
            "hdd-1tb",
            "HDD 1TB",
            Decimal::from(900_000),
            HddSpec { capacity: 1000, rpm: 7200, cache: 64 },
        ));

        assert!(selection.clear(Slot::Psu).is_some());
        assert!(selection.clear(Slot::Psu).is_none());
        assert_eq!(selection.selected_count(), 1);

        selection.reset();
        assert_eq!(selection, Selection::new());
    }
}
