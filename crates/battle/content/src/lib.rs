//! Hand-authored static game content.
//!
//! This crate houses the data the battle rules are parameterized over and
//! exposes it through `battle-core`'s oracle traits:
//! - Skill catalog (every job's skills and spells)
//! - Job tables (base stats, starting skills, level unlocks)
//! - Bestiary (enemy names and level scaling)
//! - Loot tables (steal odds and drop pools)
//! - Armory (equipment definitions and starting kits)
//!
//! Content is consumed by the engine through read-only oracles and never
//! appears in battle state.

pub mod armory;
pub mod bestiary;
pub mod jobs;
pub mod loot;
pub mod skills;

pub use armory::{give_starting_equipment, starting_kit};
pub use bestiary::Bestiary;
pub use jobs::JobTable;
pub use loot::LootTables;
pub use skills::SkillCatalog;

use battle_core::BattleEnv;

/// The full standard content set.
pub static SKILLS: SkillCatalog = SkillCatalog;
pub static JOBS: JobTable = JobTable;
pub static BESTIARY: Bestiary = Bestiary;
pub static LOOT: LootTables = LootTables;

/// A [`BattleEnv`] wired to the standard content tables.
pub fn standard_env() -> BattleEnv<'static> {
    BattleEnv::new(&SKILLS, &JOBS, &BESTIARY, &LOOT)
}
