//! The battle aggregate: opposition, turn order and terminal flags.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::env::{BattleEnv, BattleRng};
use crate::state::boss::Boss;
use crate::state::enemy::Enemy;
use crate::state::party::Party;

/// One slot in the turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorSlot {
    /// A party member, by roster index.
    Party(usize),
    /// A regular enemy, by pack index.
    Enemy(usize),
    /// The boss of a boss battle.
    Boss,
}

impl ActorSlot {
    /// True for enemy-side slots (regular enemy or boss).
    pub const fn is_enemy_side(&self) -> bool {
        matches!(self, Self::Enemy(_) | Self::Boss)
    }
}

/// State of a single battle from initialization to settlement.
///
/// Owns the enemy pack by value; a boss is borrowed per engine call from the
/// dungeon that owns it (`is_boss_battle` tags which mode applies, and the
/// two are mutually exclusive). Also owns the battle's RNG stream, so a
/// battle replays identically from the same seed and action sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Battle {
    pub enemies: ArrayVec<Enemy, { BattleConfig::MAX_ENEMIES }>,
    pub is_boss_battle: bool,
    /// Fixed turn order: party slots in roster order, then enemy/boss slots.
    /// Dead actors are skipped at resolution time, never removed from here.
    pub turn_order: ArrayVec<ActorSlot, { BattleConfig::MAX_TURN_SLOTS }>,
    /// Wrapping index into `turn_order`.
    pub cursor: usize,
    pub won: bool,
    pub fled: bool,
    pub rng: BattleRng,
    pub config: BattleConfig,
}

impl Battle {
    /// Starts a regular battle: 1-4 procedurally generated enemies scaled by
    /// dungeon level, with kinds drawn from the bestiary's level pool.
    pub fn against_pack(
        dungeon_level: u8,
        party_count: usize,
        seed: u64,
        env: &BattleEnv<'_>,
    ) -> Self {
        let mut rng = BattleRng::new(seed);
        let count = rng.range(1, BattleConfig::MAX_ENEMIES as u32) as usize;

        let mut enemies = ArrayVec::new();
        let pool = env.bestiary.kind_pool(dungeon_level);
        for _ in 0..count {
            let kind = pool[rng.index(pool.len())];
            let level = dungeon_level.saturating_add(rng.range(0, 3) as u8);
            let enemy = env.bestiary.spawn(kind, level);
            tracing::debug!(name = enemy.name, level = enemy.level, "enemy joins the battle");
            enemies.push(enemy);
        }

        let turn_order = fixed_turn_order(party_count, count, false);
        tracing::info!(enemy_count = count, dungeon_level, "battle start");

        Self {
            enemies,
            is_boss_battle: false,
            turn_order,
            cursor: 0,
            won: false,
            fled: false,
            rng,
            config: BattleConfig::default(),
        }
    }

    /// Starts a boss battle. The boss itself stays owned by the dungeon and
    /// is handed to the engine per call.
    pub fn against_boss(party_count: usize, seed: u64) -> Self {
        tracing::info!("boss battle start");
        Self {
            enemies: ArrayVec::new(),
            is_boss_battle: true,
            turn_order: fixed_turn_order(party_count, 0, true),
            cursor: 0,
            won: false,
            fled: false,
            rng: BattleRng::new(seed),
            config: BattleConfig::default(),
        }
    }

    /// The slot whose turn it currently is.
    pub fn whose_turn(&self) -> ActorSlot {
        self.turn_order[self.cursor]
    }

    /// Advances the cursor by one, wrapping modulo the order length.
    pub fn advance_cursor(&mut self) {
        self.cursor = (self.cursor + 1) % self.turn_order.len();
    }

    /// First living enemy index, the redirect target for dead/out-of-range
    /// requests. None when the pack is wiped.
    pub fn first_living_enemy(&self) -> Option<usize> {
        self.enemies.iter().position(|e| e.is_alive())
    }

    /// Indices of living enemies.
    pub fn living_enemy_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_alive())
            .map(|(i, _)| i)
    }

    /// Resolves a requested enemy target, redirecting dead or out-of-range
    /// indices to the first living enemy.
    pub fn resolve_enemy_target(&self, requested: usize) -> Option<usize> {
        match self.enemies.get(requested) {
            Some(enemy) if enemy.is_alive() => Some(requested),
            _ => self.first_living_enemy(),
        }
    }

    /// True once exactly one terminal condition holds: party wiped, fled,
    /// won, or the entire opposition is dead.
    pub fn is_over(&self, party: &Party, boss: Option<&Boss>) -> bool {
        if party.is_defeated() || self.fled || self.won {
            return true;
        }
        if self.is_boss_battle {
            boss.is_some_and(|b| !b.is_alive())
        } else {
            self.first_living_enemy().is_none()
        }
    }

    /// True when the battle ended in victory (not fled, party standing).
    pub fn is_victory(&self, party: &Party, boss: Option<&Boss>) -> bool {
        self.is_over(party, boss) && !self.fled && !party.is_defeated()
    }
}

/// Builds the fixed turn order: all party slots in roster order, then all
/// enemy slots (or the single boss slot).
///
/// This ordering is deliberate: agility plays no part in it even though the
/// stat exists, matching the documented behavior of the battle rules.
pub fn fixed_turn_order(
    party_count: usize,
    enemy_count: usize,
    is_boss: bool,
) -> ArrayVec<ActorSlot, { BattleConfig::MAX_TURN_SLOTS }> {
    let mut order = ArrayVec::new();
    for i in 0..party_count.min(BattleConfig::MAX_PARTY_SIZE) {
        order.push(ActorSlot::Party(i));
    }
    if is_boss {
        order.push(ActorSlot::Boss);
    } else {
        for i in 0..enemy_count.min(BattleConfig::MAX_ENEMIES) {
            order.push(ActorSlot::Enemy(i));
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_party_first_then_enemies() {
        let order = fixed_turn_order(2, 3, false);
        assert_eq!(
            order.as_slice(),
            &[
                ActorSlot::Party(0),
                ActorSlot::Party(1),
                ActorSlot::Enemy(0),
                ActorSlot::Enemy(1),
                ActorSlot::Enemy(2),
            ]
        );
    }

    #[test]
    fn boss_battles_get_one_boss_slot() {
        let order = fixed_turn_order(4, 0, true);
        assert_eq!(order.len(), 5);
        assert_eq!(order[4], ActorSlot::Boss);
    }

    #[test]
    fn cursor_wraps() {
        let mut battle = Battle::against_boss(2, 1);
        assert_eq!(battle.whose_turn(), ActorSlot::Party(0));
        battle.advance_cursor();
        battle.advance_cursor();
        assert_eq!(battle.whose_turn(), ActorSlot::Boss);
        battle.advance_cursor();
        assert_eq!(battle.whose_turn(), ActorSlot::Party(0));
    }
}
