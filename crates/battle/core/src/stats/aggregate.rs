//! Equipment-bonus stat aggregation.
//!
//! Each total is the base stat plus the bonus of every currently equipped
//! piece that contributes to it:
//!
//! | total        | contributing slots          |
//! |--------------|-----------------------------|
//! | attack       | weapon, accessory           |
//! | defense      | armor, helmet, accessory    |
//! | intelligence | weapon, armor, helmet       |
//! | agility      | accessory                   |
//! | luck         | (no equipment bonus)        |
//!
//! Buff modifiers are intentionally not folded in here; the damage and heal
//! paths apply them separately through the buff ledger. All functions are
//! pure and safe against a detached or unequipped member: a slot whose
//! handle no longer resolves simply contributes nothing.

use crate::state::equipment::EquipSlot;
use crate::state::inventory::{EquipmentPiece, Inventory};
use crate::state::party::PartyMember;

fn slot_piece<'a>(
    member: &PartyMember,
    inventory: &'a Inventory,
    slot: EquipSlot,
) -> Option<&'a EquipmentPiece> {
    member
        .equipment
        .get(slot)
        .and_then(|handle| inventory.equipment(handle))
}

/// Effective attack: strength plus weapon and accessory bonuses.
pub fn total_attack(member: &PartyMember, inventory: &Inventory) -> u16 {
    let mut total = member.stats.strength;
    for slot in [EquipSlot::Weapon, EquipSlot::Accessory] {
        if let Some(piece) = slot_piece(member, inventory, slot) {
            total = total.saturating_add(piece.attack_bonus);
        }
    }
    total
}

/// Effective defense: base defense plus armor, helmet and accessory bonuses.
pub fn total_defense(member: &PartyMember, inventory: &Inventory) -> u16 {
    let mut total = member.stats.defense;
    for slot in [EquipSlot::Armor, EquipSlot::Helmet, EquipSlot::Accessory] {
        if let Some(piece) = slot_piece(member, inventory, slot) {
            total = total.saturating_add(piece.defense_bonus);
        }
    }
    total
}

/// Effective intelligence: base plus weapon, armor and helmet bonuses.
pub fn total_intelligence(member: &PartyMember, inventory: &Inventory) -> u16 {
    let mut total = member.stats.intelligence;
    for slot in [EquipSlot::Weapon, EquipSlot::Armor, EquipSlot::Helmet] {
        if let Some(piece) = slot_piece(member, inventory, slot) {
            total = total.saturating_add(piece.intelligence_bonus);
        }
    }
    total
}

/// Effective agility: base plus accessory bonus.
pub fn total_agility(member: &PartyMember, inventory: &Inventory) -> u16 {
    let mut total = member.stats.agility;
    if let Some(piece) = slot_piece(member, inventory, EquipSlot::Accessory) {
        total = total.saturating_add(piece.agility_bonus);
    }
    total
}

/// Effective luck: no equipment contributes, so this is the base stat.
pub fn total_luck(member: &PartyMember, _inventory: &Inventory) -> u16 {
    member.stats.luck
}
