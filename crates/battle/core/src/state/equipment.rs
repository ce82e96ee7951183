//! Equipment slots referencing inventory pieces by stable handle.

use crate::state::inventory::ItemHandle;

/// The four gear slots a party member can fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipSlot {
    Weapon,
    Armor,
    Helmet,
    Accessory,
}

/// A member's equipped gear, one optional [`ItemHandle`] per slot.
///
/// Slots hold stable handles into the shared inventory rather than array
/// positions, so removing or reordering inventory entries never silently
/// redirects a member's gear. Equipment can still be unequipped or sold out
/// from under a member; lookups through a stale handle simply miss and the
/// stat aggregator falls back to the base stat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentSlots {
    pub weapon: Option<ItemHandle>,
    pub armor: Option<ItemHandle>,
    pub helmet: Option<ItemHandle>,
    pub accessory: Option<ItemHandle>,
}

impl EquipmentSlots {
    /// Creates empty slots (nothing equipped).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the handle in a slot, if any.
    pub fn get(&self, slot: EquipSlot) -> Option<ItemHandle> {
        match slot {
            EquipSlot::Weapon => self.weapon,
            EquipSlot::Armor => self.armor,
            EquipSlot::Helmet => self.helmet,
            EquipSlot::Accessory => self.accessory,
        }
    }

    /// Equips a handle into a slot, returning the previous occupant if any.
    pub fn equip(&mut self, slot: EquipSlot, handle: ItemHandle) -> Option<ItemHandle> {
        self.slot_mut(slot).replace(handle)
    }

    /// Empties a slot, returning the handle that was equipped if any.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<ItemHandle> {
        self.slot_mut(slot).take()
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<ItemHandle> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::Helmet => &mut self.helmet,
            EquipSlot::Accessory => &mut self.accessory,
        }
    }
}
