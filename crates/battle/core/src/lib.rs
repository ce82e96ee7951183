//! Deterministic battle resolution and character progression rules.
//!
//! `battle-core` defines the canonical combat rules (actions, engine, battle
//! state) together with the stat aggregation and progression model they
//! depend on. All battle mutation flows through [`engine::BattleEngine`];
//! static content (skills, jobs, bestiary, loot tables) is supplied through
//! the oracle traits in [`env`] so the rules stay data-independent.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod skill;
pub mod state;
pub mod stats;

pub use config::BattleConfig;
pub use engine::{
    ActionError, ActionKind, ActionOutcome, BattleAction, BattleEngine, EnemyTurnOutcome,
    HealReport, HitReport, LevelUp, RewardSummary, SkillEffect, StealReport, TargetId,
    UpkeepReport,
};
pub use env::{BattleEnv, BattleRng, BestiaryOracle, JobOracle, LootOracle, SkillOracle, StealEntry};
pub use error::ErrorSeverity;
pub use skill::{ScalingStat, Skill, SkillId, SkillKind, StatusPayload};
pub use state::{
    ActiveBuff, ActiveStatus, ActorSlot, Battle, Boss, BuffKind, BuffLedger, ConsumableKind,
    Enemy, EnemyKind, EquipSlot, EquipmentPiece, EquipmentSlots, Inventory, ItemHandle, Job,
    KeyItem, Party, PartyMember, StatusFlags, StatusKind, StatusLedger,
};
pub use stats::CharacterStats;
