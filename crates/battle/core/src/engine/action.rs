//! Player-submitted battle actions.

use crate::skill::SkillId;

/// What a party member does with their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Basic attack. The target index is an enemy slot; dead or out-of-range
    /// targets are redirected to the first living enemy. Ignored in boss
    /// battles (the boss is the only target).
    Attack { target: usize },

    /// Use a known skill. `target` is an enemy index for offensive skills
    /// and a party index for heals; all-target skills ignore it.
    Skill { skill: SkillId, target: usize },

    /// Take a defensive stance: doubled defense until the next turn.
    Defend,

    /// Attempt to run. Disallowed in boss battles; otherwise 50/50.
    Flee,
}

/// A fully resolved player action, assembled by the UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleAction {
    /// Roster index of the acting member. Must match the current turn slot.
    pub actor: usize,
    pub kind: ActionKind,
}

impl BattleAction {
    pub fn attack(actor: usize, target: usize) -> Self {
        Self {
            actor,
            kind: ActionKind::Attack { target },
        }
    }

    pub fn skill(actor: usize, skill: SkillId, target: usize) -> Self {
        Self {
            actor,
            kind: ActionKind::Skill { skill, target },
        }
    }

    pub fn defend(actor: usize) -> Self {
        Self {
            actor,
            kind: ActionKind::Defend,
        }
    }

    pub fn flee(actor: usize) -> Self {
        Self {
            actor,
            kind: ActionKind::Flee,
        }
    }
}
