//! Skill catalog entry types.
//!
//! Skills are immutable catalog entries looked up by id through
//! [`crate::env::SkillOracle`]. The engine never mutates an entry and never
//! assumes skill ids form contiguous ranges; the id constants below are
//! grouped by job family purely for readability.

use crate::state::StatusKind;

/// Identifier of a skill catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillId(pub u8);

impl SkillId {
    // Knight
    pub const POWER_STRIKE: SkillId = SkillId(1);
    pub const SHIELD_BASH: SkillId = SkillId(2);
    pub const TAUNT: SkillId = SkillId(3);
    pub const GUARD: SkillId = SkillId(4);

    // Black Belt
    pub const FOCUS_STRIKE: SkillId = SkillId(10);
    pub const COUNTER_STANCE: SkillId = SkillId(11);
    pub const MEDITATION: SkillId = SkillId(12);

    // Thief
    pub const STEAL: SkillId = SkillId(20);
    pub const BACKSTAB: SkillId = SkillId(21);
    pub const SMOKE_BOMB: SkillId = SkillId(22);
    pub const POISON_BLADE: SkillId = SkillId(23);
    pub const FLASH: SkillId = SkillId(24);

    // Sage
    pub const FIRE: SkillId = SkillId(30);
    pub const FIRE2: SkillId = SkillId(31);
    pub const FIRE3: SkillId = SkillId(32);
    pub const CURE: SkillId = SkillId(33);
    pub const CURE2: SkillId = SkillId(34);
    pub const TRANQUILITY: SkillId = SkillId(35);
    pub const TIME_WARP: SkillId = SkillId(36);
    pub const MUTE: SkillId = SkillId(37);
    pub const PETRIFY: SkillId = SkillId(38);

    // Priest
    pub const HEAL: SkillId = SkillId(40);
    pub const HEAL2: SkillId = SkillId(41);
    pub const HEAL3: SkillId = SkillId(42);
    pub const PROTECT: SkillId = SkillId(43);
    pub const ESUNA: SkillId = SkillId(44);
    pub const PRAYER: SkillId = SkillId(45);
    pub const BLINDING_LIGHT: SkillId = SkillId(46);

    // Mage
    pub const BOLT: SkillId = SkillId(50);
    pub const BOLT2: SkillId = SkillId(51);
    pub const BOLT3: SkillId = SkillId(52);
    pub const ICE: SkillId = SkillId(53);
    pub const ICE2: SkillId = SkillId(54);
    pub const ICE3: SkillId = SkillId(55);
    pub const FOCUS: SkillId = SkillId(56);
    pub const SLOW: SkillId = SkillId(57);
    pub const SILENCE: SkillId = SkillId(58);
    pub const TOXIC_CLOUD: SkillId = SkillId(59);
    pub const STONE_GAZE: SkillId = SkillId(60);
}

/// Broad behavior class of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillKind {
    /// Deals damage scaled by the declared stat.
    Attack,
    /// Restores HP to one or all living party members.
    Heal,
    /// Grants the actor a named buff.
    Buff,
    /// Rolls a status-effect payload against enemies.
    Debuff,
    /// Attempts to steal a consumable from an enemy.
    Steal,
}

/// The attribute a skill's effect is computed from.
///
/// Strength, Agility and Luck scaling make a skill physical (defense
/// applies); Intelligence scaling makes it magical (defense is ignored).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalingStat {
    Strength,
    Intelligence,
    Agility,
    Luck,
}

impl ScalingStat {
    /// Returns true if skills scaling on this stat are resolved as physical
    /// damage (target defense subtracted).
    pub const fn is_physical(&self) -> bool {
        !matches!(self, Self::Intelligence)
    }
}

/// Optional status effect carried by a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusPayload {
    pub status: StatusKind,
    /// Percent chance (1-100) to apply, rolled per target hit.
    pub chance: u8,
    /// Duration in turns once applied.
    pub duration: u8,
}

/// Immutable skill catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Skill {
    pub id: SkillId,
    pub name: &'static str,
    pub kind: SkillKind,
    pub scaling: ScalingStat,
    pub mp_cost: u16,
    /// Base damage or healing amount.
    pub power: u16,
    /// True if the skill targets the enemy side.
    pub targets_enemy: bool,
    /// True if the skill hits every valid target instead of one.
    pub targets_all: bool,
    /// Status effect payload, if the skill carries one.
    pub status: Option<StatusPayload>,
    pub description: &'static str,
}
