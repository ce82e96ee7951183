//! Equipment definitions and starting kits.

use battle_core::state::{EquipSlot, EquipmentPiece, Inventory, Job, JobMask, Party};

const fn piece(
    name: &'static str,
    slot: EquipSlot,
    attack: u16,
    defense: u16,
    intelligence: u16,
    agility: u16,
    usable_by: JobMask,
) -> EquipmentPiece {
    EquipmentPiece {
        name,
        slot,
        attack_bonus: attack,
        defense_bonus: defense,
        intelligence_bonus: intelligence,
        agility_bonus: agility,
        usable_by,
    }
}

const ANY: JobMask = JobMask::empty();
const CASTERS: JobMask = JobMask::MAGE.union(JobMask::SAGE);
const ROBED: JobMask = JobMask::MAGE.union(JobMask::SAGE).union(JobMask::PRIEST);

// ============================================================================
// Weapons
// ============================================================================

pub fn dagger() -> EquipmentPiece {
    piece("Dagger", EquipSlot::Weapon, 5, 0, 0, 0, ANY)
}

pub fn short_sword() -> EquipmentPiece {
    piece("Short Sword", EquipSlot::Weapon, 8, 0, 0, 0, ANY)
}

pub fn long_sword() -> EquipmentPiece {
    piece("Long Sword", EquipSlot::Weapon, 12, 0, 0, 0, JobMask::KNIGHT)
}

pub fn great_sword() -> EquipmentPiece {
    piece("Great Sword", EquipSlot::Weapon, 18, 0, 0, 0, JobMask::KNIGHT)
}

pub fn staff() -> EquipmentPiece {
    piece("Staff", EquipSlot::Weapon, 4, 0, 3, 0, ANY)
}

pub fn iron_staff() -> EquipmentPiece {
    piece("Iron Staff", EquipSlot::Weapon, 7, 0, 5, 0, ANY)
}

pub fn wooden_rod() -> EquipmentPiece {
    piece("Wooden Rod", EquipSlot::Weapon, 3, 0, 5, 0, CASTERS)
}

pub fn iron_rod() -> EquipmentPiece {
    piece("Iron Rod", EquipSlot::Weapon, 5, 0, 8, 0, CASTERS)
}

pub fn nunchaku() -> EquipmentPiece {
    piece("Nunchaku", EquipSlot::Weapon, 10, 0, 0, 0, JobMask::BLACK_BELT)
}

pub fn iron_nunchaku() -> EquipmentPiece {
    piece("Iron Nunchaku", EquipSlot::Weapon, 15, 0, 0, 0, JobMask::BLACK_BELT)
}

// ============================================================================
// Armor
// ============================================================================

pub fn cloth_armor() -> EquipmentPiece {
    piece("Cloth Armor", EquipSlot::Armor, 0, 3, 0, 0, ANY)
}

pub fn leather_armor() -> EquipmentPiece {
    piece("Leather Armor", EquipSlot::Armor, 0, 6, 0, 0, ANY)
}

pub fn chain_mail() -> EquipmentPiece {
    piece("Chain Mail", EquipSlot::Armor, 0, 10, 0, 0, JobMask::KNIGHT)
}

pub fn plate_mail() -> EquipmentPiece {
    piece("Plate Mail", EquipSlot::Armor, 0, 15, 0, 0, JobMask::KNIGHT)
}

pub fn robe() -> EquipmentPiece {
    piece("Robe", EquipSlot::Armor, 0, 4, 2, 0, ROBED)
}

pub fn silk_robe() -> EquipmentPiece {
    piece("Silk Robe", EquipSlot::Armor, 0, 7, 4, 0, ROBED)
}

// ============================================================================
// Helmets
// ============================================================================

pub fn leather_cap() -> EquipmentPiece {
    piece("Leather Cap", EquipSlot::Helmet, 0, 2, 0, 0, ANY)
}

pub fn iron_helm() -> EquipmentPiece {
    piece("Iron Helm", EquipSlot::Helmet, 0, 5, 0, 0, JobMask::KNIGHT)
}

pub fn wizard_hat() -> EquipmentPiece {
    piece("Wizard Hat", EquipSlot::Helmet, 0, 2, 3, 0, CASTERS)
}

// ============================================================================
// Accessories
// ============================================================================

pub fn power_ring() -> EquipmentPiece {
    piece("Power Ring", EquipSlot::Accessory, 3, 0, 0, 0, ANY)
}

pub fn defense_ring() -> EquipmentPiece {
    piece("Defense Ring", EquipSlot::Accessory, 0, 3, 0, 0, ANY)
}

pub fn luck_ring() -> EquipmentPiece {
    piece("Luck Ring", EquipSlot::Accessory, 0, 0, 0, 3, ANY)
}

/// The gear a freshly formed member of a job starts with.
pub fn starting_kit(job: Job) -> Vec<EquipmentPiece> {
    match job {
        Job::Knight => vec![short_sword(), chain_mail(), iron_helm()],
        Job::BlackBelt => vec![nunchaku(), cloth_armor()],
        Job::Thief => vec![dagger(), leather_armor(), leather_cap()],
        Job::Sage => vec![staff(), robe(), wizard_hat()],
        Job::Priest => vec![staff(), robe()],
        Job::Mage => vec![wooden_rod(), silk_robe(), wizard_hat()],
    }
}

/// Adds and equips each member's starting kit through the shared inventory.
///
/// Pieces that no longer fit (inventory at capacity) are skipped.
pub fn give_starting_equipment(inventory: &mut Inventory, party: &mut Party) {
    for index in 0..party.members.len() {
        let job = party.members[index].job;
        for gear in starting_kit(job) {
            let Some(handle) = inventory.add_equipment(gear) else {
                continue;
            };
            let member = &mut party.members[index];
            let _ = inventory.equip(handle, member);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::JobTable;
    use battle_core::stats;

    #[test]
    fn starting_kits_respect_their_own_job_masks() {
        for job in [
            Job::Knight,
            Job::BlackBelt,
            Job::Thief,
            Job::Sage,
            Job::Priest,
            Job::Mage,
        ] {
            for gear in starting_kit(job) {
                assert!(gear.usable_by.allows(job), "{} vs {job:?}", gear.name);
            }
        }
    }

    #[test]
    fn knight_kit_raises_attack_and_defense() {
        let mut party = Party::new();
        party.add_member("Argus", Job::Knight, &JobTable);
        let mut inventory = Inventory::new();

        give_starting_equipment(&mut inventory, &mut party);

        let knight = party.member(0).unwrap();
        // Base str 12 + Short Sword 8; base def 10 + Chain Mail 10 + Iron Helm 5.
        assert_eq!(stats::total_attack(knight, &inventory), 20);
        assert_eq!(stats::total_defense(knight, &inventory), 25);
    }
}
