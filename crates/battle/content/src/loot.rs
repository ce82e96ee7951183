//! Theft and drop probability tables.

use battle_core::state::{ConsumableKind, EnemyKind};
use battle_core::{LootOracle, StealEntry};

const fn entry(loot: Option<ConsumableKind>, weight: u8, min: u8, max: u8) -> StealEntry {
    StealEntry {
        loot,
        weight,
        quantity_min: min,
        quantity_max: max,
    }
}

use ConsumableKind::{Antidote, Elixir, Ether, HiPotion, Potion, Tent};

/// Per-kind 3-entry steal tables. A `None` entry is the "pockets were empty"
/// sentinel; weights that sum below 100 leave the remainder as empty too.
#[rustfmt::skip]
static STEAL_TABLES: [(EnemyKind, [StealEntry; 3]); 6] = [
    (EnemyKind::Goblin, [
        entry(Some(Potion), 50, 1, 1),
        entry(Some(Antidote), 30, 1, 1),
        entry(None, 20, 0, 0),
    ]),
    (EnemyKind::Orc, [
        entry(Some(Potion), 40, 1, 2),
        entry(Some(HiPotion), 35, 1, 1),
        entry(None, 25, 0, 0),
    ]),
    (EnemyKind::Skeleton, [
        entry(Some(Antidote), 45, 1, 1),
        entry(Some(Ether), 30, 1, 1),
        entry(None, 25, 0, 0),
    ]),
    (EnemyKind::Wolf, [
        entry(Some(Potion), 55, 1, 1),
        entry(Some(Tent), 25, 1, 1),
        entry(None, 20, 0, 0),
    ]),
    (EnemyKind::Dragon, [
        entry(Some(HiPotion), 40, 1, 2),
        entry(Some(Ether), 35, 1, 1),
        entry(Some(Elixir), 15, 1, 1),
    ]),
    (EnemyKind::Demon, [
        entry(Some(Elixir), 45, 1, 1),
        entry(Some(Ether), 35, 1, 2),
        entry(Some(HiPotion), 20, 1, 1),
    ]),
];

static LOW_TIER_DROPS: &[ConsumableKind] = &[Potion, Antidote];
static MID_TIER_DROPS: &[ConsumableKind] = &[Potion, HiPotion, Ether, Antidote];
static HIGH_TIER_DROPS: &[ConsumableKind] = &[HiPotion, Ether, Elixir];

/// The standard loot tables.
pub struct LootTables;

impl LootTables {
    const LOW_TIER_MAX_LEVEL: u8 = 3;
    const MID_TIER_MAX_LEVEL: u8 = 7;
}

impl LootOracle for LootTables {
    fn steal_table(&self, kind: EnemyKind) -> &[StealEntry; 3] {
        // The array covers every kind; fall back to the first row only if
        // the table and the enum ever drift apart.
        STEAL_TABLES
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, table)| table)
            .unwrap_or(&STEAL_TABLES[0].1)
    }

    fn drop_pool(&self, enemy_level: u8) -> &[ConsumableKind] {
        if enemy_level <= Self::LOW_TIER_MAX_LEVEL {
            LOW_TIER_DROPS
        } else if enemy_level <= Self::MID_TIER_MAX_LEVEL {
            MID_TIER_DROPS
        } else {
            HIGH_TIER_DROPS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_table() {
        for kind in [
            EnemyKind::Goblin,
            EnemyKind::Orc,
            EnemyKind::Skeleton,
            EnemyKind::Wolf,
            EnemyKind::Dragon,
            EnemyKind::Demon,
        ] {
            let table = LootTables.steal_table(kind);
            let total: u32 = table.iter().map(|e| u32::from(e.weight)).sum();
            assert!(total <= 100, "{kind:?} weights exceed 100");
        }
    }

    #[test]
    fn quantity_ranges_are_ordered() {
        for (_, table) in &STEAL_TABLES {
            for entry in table {
                assert!(entry.quantity_min <= entry.quantity_max);
            }
        }
    }

    #[test]
    fn drop_tiers_split_by_level() {
        assert_eq!(LootTables.drop_pool(1), LOW_TIER_DROPS);
        assert_eq!(LootTables.drop_pool(3), LOW_TIER_DROPS);
        assert_eq!(LootTables.drop_pool(4), MID_TIER_DROPS);
        assert_eq!(LootTables.drop_pool(7), MID_TIER_DROPS);
        assert_eq!(LootTables.drop_pool(8), HIGH_TIER_DROPS);
    }
}
