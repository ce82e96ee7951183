//! Character statistics, equipment-bonus aggregation and progression.
//!
//! The stored stats are the single source of truth; everything battle-facing
//! is derived at the point of use. [`aggregate`] folds equipped-item bonuses
//! into effective totals, while buff modifiers are deliberately kept out of
//! the aggregator and applied separately by the damage/heal paths.

mod aggregate;
mod core;
mod progression;

pub use aggregate::{
    total_agility, total_attack, total_defense, total_intelligence, total_luck,
};
pub use core::CharacterStats;
pub use progression::{exp_for_next_level, gain_experience, LevelUp};
