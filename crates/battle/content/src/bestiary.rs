//! Enemy generation data: names, spawn pools and level scaling.

use battle_core::state::{BuffLedger, Enemy, EnemyKind, StatusLedger};
use battle_core::BestiaryOracle;

/// Kinds eligible in shallow dungeons: the weaker half of the roster.
static LOW_LEVEL_POOL: &[EnemyKind] = &[
    EnemyKind::Goblin,
    EnemyKind::Orc,
    EnemyKind::Skeleton,
    EnemyKind::Wolf,
];

static FULL_POOL: &[EnemyKind] = &[
    EnemyKind::Goblin,
    EnemyKind::Orc,
    EnemyKind::Skeleton,
    EnemyKind::Wolf,
    EnemyKind::Dragon,
    EnemyKind::Demon,
];

/// The standard bestiary.
pub struct Bestiary;

impl Bestiary {
    /// Dungeon levels below this only spawn the weaker kinds.
    const FULL_POOL_DUNGEON_LEVEL: u8 = 3;

    pub fn display_name(kind: EnemyKind) -> &'static str {
        match kind {
            EnemyKind::Goblin => "Goblin",
            EnemyKind::Orc => "Orc",
            EnemyKind::Skeleton => "Skeleton",
            EnemyKind::Wolf => "Wolf",
            EnemyKind::Dragon => "Dragon",
            EnemyKind::Demon => "Demon",
        }
    }
}

impl BestiaryOracle for Bestiary {
    fn kind_pool(&self, dungeon_level: u8) -> &[EnemyKind] {
        if dungeon_level < Self::FULL_POOL_DUNGEON_LEVEL {
            LOW_LEVEL_POOL
        } else {
            FULL_POOL
        }
    }

    /// Stats are linear in level and kind ordinal: stronger kinds get more
    /// of everything at the same level.
    fn spawn(&self, kind: EnemyKind, level: u8) -> Enemy {
        let ord = kind.ordinal();
        let lvl = u16::from(level);
        let max_hp = 20 + lvl * 5 + ord * 10;
        Enemy {
            name: Self::display_name(kind),
            kind,
            max_hp,
            hp: max_hp,
            attack: 5 + lvl * 2 + ord,
            defense: 3 + lvl + ord,
            agility: 5 + ord,
            level,
            exp_reward: 10 + u32::from(level) * 5,
            gold_reward: 5 + u32::from(level) * 3,
            stolen_from: false,
            buffs: BuffLedger::new(),
            status: StatusLedger::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_dungeons_skip_the_strong_kinds() {
        let pool = Bestiary.kind_pool(1);
        assert!(!pool.contains(&EnemyKind::Dragon));
        assert!(!pool.contains(&EnemyKind::Demon));
        assert_eq!(Bestiary.kind_pool(3).len(), 6);
    }

    #[test]
    fn scaling_is_linear_in_level_and_kind() {
        let goblin = Bestiary.spawn(EnemyKind::Goblin, 1);
        assert_eq!(goblin.max_hp, 25);
        assert_eq!(goblin.attack, 7);
        assert_eq!(goblin.defense, 4);
        assert_eq!(goblin.exp_reward, 15);
        assert_eq!(goblin.gold_reward, 8);

        let demon = Bestiary.spawn(EnemyKind::Demon, 10);
        assert_eq!(demon.max_hp, 20 + 50 + 50);
        assert_eq!(demon.attack, 5 + 20 + 5);
        assert_eq!(demon.defense, 3 + 10 + 5);
        assert_eq!(demon.agility, 10);
    }

    #[test]
    fn spawned_enemies_start_alive_and_unpilfered() {
        let wolf = Bestiary.spawn(EnemyKind::Wolf, 4);
        assert!(wolf.is_alive());
        assert!(!wolf.stolen_from);
        assert_eq!(wolf.hp, wolf.max_hp);
    }
}
