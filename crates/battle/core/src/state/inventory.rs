//! Shared party inventory: consumable stacks and equipment pieces.
//!
//! Equipment is addressed by [`ItemHandle`], a stable id minted from a
//! monotonic counter. Handles survive removals and reorderings, so a party
//! member's gear slots can never be silently redirected to a different piece
//! the way raw array indices would be.

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::BattleConfig;
use crate::state::equipment::EquipSlot;
use crate::state::party::{Job, PartyMember};
use crate::state::status::StatusFlags;

/// Stable reference to an equipment piece owned by the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

/// Consumable item kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumableKind {
    Potion,
    HiPotion,
    Ether,
    Elixir,
    Antidote,
    Tent,
}

/// Restorative payload of a consumable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsumableEffect {
    pub hp_restore: u16,
    pub mp_restore: u16,
    pub cures: StatusFlags,
}

impl ConsumableKind {
    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Potion => "Potion",
            Self::HiPotion => "Hi-Potion",
            Self::Ether => "Ether",
            Self::Elixir => "Elixir",
            Self::Antidote => "Antidote",
            Self::Tent => "Tent",
        }
    }

    /// The effect applied when used on a party member.
    ///
    /// 9999 restores are effectively "to full"; the stat mutators clamp.
    pub fn effect(&self) -> ConsumableEffect {
        match self {
            Self::Potion => ConsumableEffect {
                hp_restore: 50,
                ..Default::default()
            },
            Self::HiPotion => ConsumableEffect {
                hp_restore: 150,
                ..Default::default()
            },
            Self::Ether => ConsumableEffect {
                mp_restore: 30,
                ..Default::default()
            },
            Self::Elixir => ConsumableEffect {
                hp_restore: 9999,
                mp_restore: 9999,
                ..Default::default()
            },
            Self::Antidote => ConsumableEffect {
                cures: StatusFlags::POISON,
                ..Default::default()
            },
            Self::Tent => ConsumableEffect {
                hp_restore: 9999,
                mp_restore: 9999,
                ..Default::default()
            },
        }
    }
}

bitflags! {
    /// Which jobs may equip a piece. Empty means no restriction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct JobMask: u8 {
        const KNIGHT     = 1 << 0;
        const BLACK_BELT = 1 << 1;
        const THIEF      = 1 << 2;
        const SAGE       = 1 << 3;
        const PRIEST     = 1 << 4;
        const MAGE       = 1 << 5;
    }
}

impl JobMask {
    /// True if the mask permits the job (an empty mask permits all).
    pub fn allows(&self, job: Job) -> bool {
        self.is_empty() || self.contains(job.into())
    }
}

impl From<Job> for JobMask {
    fn from(job: Job) -> Self {
        match job {
            Job::Knight => JobMask::KNIGHT,
            Job::BlackBelt => JobMask::BLACK_BELT,
            Job::Thief => JobMask::THIEF,
            Job::Sage => JobMask::SAGE,
            Job::Priest => JobMask::PRIEST,
            Job::Mage => JobMask::MAGE,
        }
    }
}

/// Definition of an equipment piece.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EquipmentPiece {
    pub name: &'static str,
    pub slot: EquipSlot,
    pub attack_bonus: u16,
    pub defense_bonus: u16,
    pub intelligence_bonus: u16,
    pub agility_bonus: u16,
    pub usable_by: JobMask,
}

/// A consumable stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub kind: ConsumableKind,
    pub quantity: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
struct EquipmentEntry {
    handle: ItemHandle,
    equipped: bool,
    piece: EquipmentPiece,
}

/// Errors from equip/unequip operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EquipError {
    #[error("no equipment with that handle")]
    UnknownHandle,
    #[error("piece cannot be equipped by this job")]
    WrongJob,
    #[error("piece is already equipped by another member")]
    AlreadyEquipped,
}

/// The shared inventory aggregate.
///
/// Owned by the caller for the session; the engine borrows it for stat
/// aggregation and for granting steal/drop loot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Inventory {
    stacks: ArrayVec<ItemStack, { BattleConfig::MAX_ITEM_STACKS }>,
    equipment: ArrayVec<EquipmentEntry, { BattleConfig::MAX_EQUIPMENT }>,
    next_handle: u32,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Consumables
    // ========================================================================

    /// Adds `quantity` of a consumable, stacking onto an existing entry.
    ///
    /// Returns false (no mutation) when a new stack would exceed capacity.
    pub fn add_item(&mut self, kind: ConsumableKind, quantity: u8) -> bool {
        if let Some(stack) = self.stacks.iter_mut().find(|s| s.kind == kind) {
            stack.quantity = stack.quantity.saturating_add(quantity);
            return true;
        }
        if self.stacks.is_full() {
            return false;
        }
        self.stacks.push(ItemStack { kind, quantity });
        true
    }

    /// Removes up to `quantity` of a consumable; drops the stack at zero.
    ///
    /// Returns false if the item is not held.
    pub fn remove_item(&mut self, kind: ConsumableKind, quantity: u8) -> bool {
        let Some(pos) = self.stacks.iter().position(|s| s.kind == kind) else {
            return false;
        };
        if self.stacks[pos].quantity <= quantity {
            self.stacks.remove(pos);
        } else {
            self.stacks[pos].quantity -= quantity;
        }
        true
    }

    /// Quantity held of a consumable.
    pub fn quantity(&self, kind: ConsumableKind) -> u8 {
        self.stacks
            .iter()
            .find(|s| s.kind == kind)
            .map_or(0, |s| s.quantity)
    }

    /// True when no new consumable stack can be added.
    pub fn is_full(&self) -> bool {
        self.stacks.is_full()
    }

    /// Consumes one of the given item on a member, applying its restore and
    /// cure effects. Returns false if the item is not held.
    pub fn use_item(&mut self, kind: ConsumableKind, member: &mut PartyMember) -> bool {
        if self.quantity(kind) == 0 {
            return false;
        }
        let effect = kind.effect();
        if effect.hp_restore > 0 {
            member.stats.heal(effect.hp_restore);
        }
        if effect.mp_restore > 0 {
            member.stats.restore_mp(effect.mp_restore);
        }
        if !effect.cures.is_empty() {
            member.status.clear_matching(effect.cures);
        }
        self.remove_item(kind, 1)
    }

    /// Iterates over held consumable stacks.
    pub fn stacks(&self) -> impl Iterator<Item = &ItemStack> {
        self.stacks.iter()
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    /// Adds an equipment piece, returning its newly minted stable handle.
    ///
    /// Returns None when the equipment list is at capacity.
    pub fn add_equipment(&mut self, piece: EquipmentPiece) -> Option<ItemHandle> {
        if self.equipment.is_full() {
            return None;
        }
        let handle = ItemHandle(self.next_handle);
        self.next_handle += 1;
        self.equipment.push(EquipmentEntry {
            handle,
            equipped: false,
            piece,
        });
        Some(handle)
    }

    /// Removes an equipment piece by handle. Handles of other pieces are
    /// unaffected. Returns the removed piece, or None if unknown.
    pub fn remove_equipment(&mut self, handle: ItemHandle) -> Option<EquipmentPiece> {
        let pos = self.equipment.iter().position(|e| e.handle == handle)?;
        Some(self.equipment.remove(pos).piece)
    }

    /// Looks up an equipment piece by handle.
    pub fn equipment(&self, handle: ItemHandle) -> Option<&EquipmentPiece> {
        self.equipment
            .iter()
            .find(|e| e.handle == handle)
            .map(|e| &e.piece)
    }

    /// Equips a piece into the member's matching slot.
    ///
    /// Any piece previously in that slot is released back to the pool. The
    /// same physical piece cannot be worn by two members at once.
    pub fn equip(&mut self, handle: ItemHandle, member: &mut PartyMember) -> Result<(), EquipError> {
        let entry = self
            .equipment
            .iter()
            .find(|e| e.handle == handle)
            .ok_or(EquipError::UnknownHandle)?;
        if entry.equipped {
            return Err(EquipError::AlreadyEquipped);
        }
        if !entry.piece.usable_by.allows(member.job) {
            return Err(EquipError::WrongJob);
        }

        let slot = entry.piece.slot;
        if let Some(previous) = member.equipment.equip(slot, handle) {
            self.set_equipped(previous, false);
        }
        self.set_equipped(handle, true);
        Ok(())
    }

    /// Unequips whatever the member has in the slot. Returns false if empty.
    pub fn unequip(&mut self, slot: EquipSlot, member: &mut PartyMember) -> bool {
        match member.equipment.unequip(slot) {
            Some(handle) => {
                self.set_equipped(handle, false);
                true
            }
            None => false,
        }
    }

    fn set_equipped(&mut self, handle: ItemHandle, equipped: bool) {
        if let Some(entry) = self.equipment.iter_mut().find(|e| e.handle == handle) {
            entry.equipped = equipped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::party::test_support::test_member;

    fn dagger() -> EquipmentPiece {
        EquipmentPiece {
            name: "Dagger",
            slot: EquipSlot::Weapon,
            attack_bonus: 5,
            defense_bonus: 0,
            intelligence_bonus: 0,
            agility_bonus: 0,
            usable_by: JobMask::empty(),
        }
    }

    fn great_sword() -> EquipmentPiece {
        EquipmentPiece {
            name: "Great Sword",
            slot: EquipSlot::Weapon,
            attack_bonus: 18,
            defense_bonus: 0,
            intelligence_bonus: 0,
            agility_bonus: 0,
            usable_by: JobMask::KNIGHT,
        }
    }

    #[test]
    fn stacks_merge_and_cap() {
        let mut inv = Inventory::new();
        assert!(inv.add_item(ConsumableKind::Potion, 2));
        assert!(inv.add_item(ConsumableKind::Potion, 3));
        assert_eq!(inv.quantity(ConsumableKind::Potion), 5);
        assert!(inv.remove_item(ConsumableKind::Potion, 5));
        assert_eq!(inv.quantity(ConsumableKind::Potion), 0);
    }

    #[test]
    fn handles_survive_removal() {
        let mut inv = Inventory::new();
        let first = inv.add_equipment(dagger()).unwrap();
        let second = inv.add_equipment(great_sword()).unwrap();
        inv.remove_equipment(first);
        // The second piece keeps its identity even though the list shifted.
        assert_eq!(inv.equipment(second).unwrap().name, "Great Sword");
        assert!(inv.equipment(first).is_none());
    }

    #[test]
    fn job_mask_gates_equipping() {
        let mut inv = Inventory::new();
        let sword = inv.add_equipment(great_sword()).unwrap();
        let mut mage = test_member(Job::Mage);
        assert_eq!(inv.equip(sword, &mut mage), Err(EquipError::WrongJob));

        let mut knight = test_member(Job::Knight);
        assert!(inv.equip(sword, &mut knight).is_ok());
        assert_eq!(knight.equipment.weapon, Some(sword));
    }

    #[test]
    fn one_piece_one_wearer() {
        let mut inv = Inventory::new();
        let knife = inv.add_equipment(dagger()).unwrap();
        let mut a = test_member(Job::Thief);
        let mut b = test_member(Job::Thief);
        assert!(inv.equip(knife, &mut a).is_ok());
        assert_eq!(inv.equip(knife, &mut b), Err(EquipError::AlreadyEquipped));

        assert!(inv.unequip(EquipSlot::Weapon, &mut a));
        assert!(inv.equip(knife, &mut b).is_ok());
    }

    #[test]
    fn use_item_restores_and_cures() {
        let mut inv = Inventory::new();
        inv.add_item(ConsumableKind::Potion, 1);
        inv.add_item(ConsumableKind::Antidote, 1);

        let mut member = test_member(Job::Knight);
        member.stats.hp = 10;
        member.status.apply(crate::state::StatusKind::Poison, 3);

        assert!(inv.use_item(ConsumableKind::Potion, &mut member));
        assert_eq!(member.stats.hp, 60);
        assert!(inv.use_item(ConsumableKind::Antidote, &mut member));
        assert!(!member.status.has(crate::state::StatusKind::Poison));
        assert!(!inv.use_item(ConsumableKind::Potion, &mut member));
    }
}
