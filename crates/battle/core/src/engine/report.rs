//! Read-only reports describing what an action resolved to.
//!
//! The external UI renders battle narration from these; the engine itself
//! never formats player-facing text.

use crate::skill::SkillId;
use crate::state::{BuffKind, ConsumableKind, StatusKind};

/// Identifies who was hit or healed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetId {
    Party(usize),
    Enemy(usize),
    Boss,
}

/// One resolved hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitReport {
    pub target: TargetId,
    pub damage: u16,
    pub critical: bool,
    /// True when a blinded attacker whiffed; no damage was dealt.
    pub missed: bool,
    pub defeated: bool,
    /// Status applied by the skill's payload, if the roll succeeded.
    pub status_applied: Option<StatusKind>,
}

/// One resolved heal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealReport {
    /// Party roster index.
    pub target: usize,
    pub restored: u16,
}

/// Outcome of a steal attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StealReport {
    /// The success roll failed.
    Failed,
    /// The table came up with the "nothing" sentinel.
    NothingToTake,
    /// Loot was added to the shared inventory.
    Taken { item: ConsumableKind, quantity: u8 },
    /// Loot was rolled but the inventory had no room.
    InventoryFull,
}

/// What a skill resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillEffect {
    /// Offensive skill: one hit per target struck.
    Damage(Vec<HitReport>),
    /// Restorative skill.
    Healing {
        heals: Vec<HealReport>,
        /// True when the skill also granted MP regen to the party (Prayer).
        regen_granted: bool,
        /// True when the skill cleared the target's statuses (Esuna).
        cured: bool,
    },
    /// The actor gained a named buff.
    BuffGranted(BuffKind),
    /// Debuff rolls against enemy targets.
    Debuff {
        afflicted: Vec<TargetId>,
        resisted: Vec<TargetId>,
    },
    /// Steal attempt result.
    Steal(StealReport),
    /// Legacy flavor skill with no mechanical effect.
    NoEffect,
}

/// What the actor's turn-start upkeep produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpkeepReport {
    /// MP restored by regen buffs.
    pub mp_regained: u16,
    /// Poison damage taken at turn start.
    pub poison_damage: u16,
}

/// Result of a submitted player action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    /// The actor is dead; the turn advanced with no effect.
    SkippedDead,
    /// A status (or poison death) consumed the turn.
    Incapacitated {
        cause: StatusKind,
        upkeep: UpkeepReport,
    },
    Attack {
        upkeep: UpkeepReport,
        hit: HitReport,
    },
    Skill {
        upkeep: UpkeepReport,
        skill: SkillId,
        effect: SkillEffect,
    },
    Defended {
        upkeep: UpkeepReport,
    },
    /// The flee roll failed; the turn was consumed.
    FleeFailed {
        upkeep: UpkeepReport,
    },
    /// The battle ended by escape. The turn cursor does not advance.
    Fled {
        upkeep: UpkeepReport,
    },
}

/// Result of one auto-resolved enemy or boss turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyTurnOutcome {
    /// The slot's enemy is dead; the turn advanced with no effect.
    SkippedDead,
    /// A status (or poison death) consumed the enemy's turn.
    Incapacitated {
        attacker: TargetId,
        cause: StatusKind,
        /// True when poison finished the enemy off during upkeep.
        died: bool,
    },
    Attack {
        attacker: TargetId,
        hit: HitReport,
        /// Retaliation from a counter-stance member, if one triggered.
        counter: Option<HitReport>,
    },
}
