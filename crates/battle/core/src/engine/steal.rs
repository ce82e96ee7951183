//! Theft resolution.

use crate::config::BattleConfig;
use crate::env::{BattleRng, LootOracle};
use crate::state::{Enemy, Inventory};

use super::report::StealReport;

/// Steal success chance in percent: `50 + luck/2 - 2 * enemy_level`,
/// floored and capped by the config constants.
pub(crate) fn steal_chance(luck: i32, enemy_level: u8) -> i32 {
    (50 + luck / 2 - 2 * i32::from(enemy_level))
        .clamp(BattleConfig::STEAL_CHANCE_FLOOR, BattleConfig::STEAL_CHANCE_CAP)
}

/// Attempts to steal from a living, not-yet-pilfered enemy.
///
/// The caller has already rejected dead and already-stolen targets. On a
/// successful roll the enemy's steal table is sampled by cumulative weight;
/// the "nothing" sentinel leaves the enemy open for another try, while an
/// actual item marks it stolen-from for the rest of the battle.
pub(crate) fn attempt(
    luck: i32,
    enemy: &mut Enemy,
    inventory: &mut Inventory,
    loot: &dyn LootOracle,
    rng: &mut BattleRng,
) -> StealReport {
    let chance = steal_chance(luck, enemy.level);
    if rng.percent() as i32 > chance {
        return StealReport::Failed;
    }

    let table = loot.steal_table(enemy.kind);
    let roll = rng.percent() as u32;
    let mut cumulative = 0u32;
    for entry in table {
        cumulative += u32::from(entry.weight);
        if roll <= cumulative {
            let Some(item) = entry.loot else {
                return StealReport::NothingToTake;
            };
            let quantity = rng.range(
                u32::from(entry.quantity_min),
                u32::from(entry.quantity_max),
            ) as u8;
            if !inventory.add_item(item, quantity) {
                return StealReport::InventoryFull;
            }
            enemy.stolen_from = true;
            tracing::debug!(enemy = enemy.name, item = item.name(), quantity, "steal success");
            return StealReport::Taken { item, quantity };
        }
    }

    StealReport::NothingToTake
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chance_is_floored_and_capped() {
        // High luck, weak enemy: capped at 90.
        assert_eq!(steal_chance(200, 1), 90);
        // Low luck, strong enemy: floored at 10.
        assert_eq!(steal_chance(0, 40), 10);
        // Middle of the curve: 50 + 6 - 4 = 52.
        assert_eq!(steal_chance(12, 2), 52);
    }
}
