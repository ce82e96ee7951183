//! Oracle traits supplying static content to the battle engine.
//!
//! The engine is data-independent: skill definitions, job tables, enemy
//! scaling and loot odds all come from read-only oracles bundled in a
//! [`BattleEnv`]. Static content crates implement these traits; tests can
//! substitute minimal fixtures.

mod rng;

pub use rng::BattleRng;

use crate::skill::{Skill, SkillId};
use crate::state::{ConsumableKind, Enemy, EnemyKind, Job};
use crate::stats::CharacterStats;

/// Oracle providing skill catalog lookups.
///
/// Implementations must treat the catalog as immutable; the engine never
/// asks for anything but point lookups by id.
pub trait SkillOracle {
    /// Returns the skill definition for an id, or None if unknown.
    fn skill(&self, id: SkillId) -> Option<&Skill>;
}

/// Oracle providing per-job base stats, starting skills and level unlocks.
pub trait JobOracle {
    /// Level-1 base stats for a job.
    fn base_stats(&self, job: Job) -> CharacterStats;

    /// Skills known at party formation.
    fn starting_skills(&self, job: Job) -> &[SkillId];

    /// Skills unlocked upon reaching exactly `level`. Empty for most levels.
    fn unlocks_at(&self, job: Job, level: u8) -> &[SkillId];
}

/// Oracle providing enemy generation data.
pub trait BestiaryOracle {
    /// Enemy kinds eligible to spawn at a dungeon level.
    ///
    /// Low dungeon levels return a pool weighted toward the weaker kinds.
    fn kind_pool(&self, dungeon_level: u8) -> &[EnemyKind];

    /// Builds a fresh enemy of the given kind at the given level.
    fn spawn(&self, kind: EnemyKind, level: u8) -> Enemy;
}

/// One entry of a per-enemy-type steal table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StealEntry {
    /// Item yielded on selection; None is the "nothing to steal" sentinel.
    pub loot: Option<ConsumableKind>,
    /// Selection weight out of the table's cumulative total.
    pub weight: u8,
    /// Inclusive quantity range granted on success.
    pub quantity_min: u8,
    pub quantity_max: u8,
}

/// Oracle providing theft and drop probability tables.
pub trait LootOracle {
    /// The 3-entry weighted steal table for an enemy kind.
    fn steal_table(&self, kind: EnemyKind) -> &[StealEntry; 3];

    /// The consumable pool an enemy of this level may drop from.
    fn drop_pool(&self, enemy_level: u8) -> &[ConsumableKind];
}

/// Read-only content bundle threaded through every engine call.
#[derive(Clone, Copy)]
pub struct BattleEnv<'a> {
    pub skills: &'a dyn SkillOracle,
    pub jobs: &'a dyn JobOracle,
    pub bestiary: &'a dyn BestiaryOracle,
    pub loot: &'a dyn LootOracle,
}

impl<'a> BattleEnv<'a> {
    pub fn new(
        skills: &'a dyn SkillOracle,
        jobs: &'a dyn JobOracle,
        bestiary: &'a dyn BestiaryOracle,
        loot: &'a dyn LootOracle,
    ) -> Self {
        Self {
            skills,
            jobs,
            bestiary,
            loot,
        }
    }
}
