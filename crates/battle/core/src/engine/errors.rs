//! Engine error types.
//!
//! Everything here is a local, recoverable condition reported to the caller;
//! nothing panics across the engine boundary. [`ActionError::severity`]
//! distinguishes refusals (pick another action) from validation problems and
//! caller contract violations.

use crate::error::ErrorSeverity;
use crate::skill::SkillId;

/// Errors from submitting or auto-resolving battle actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// The battle already reached a terminal state.
    #[error("battle is already over")]
    BattleOver,

    /// A boss battle needs a boss reference, a regular battle must not have one.
    #[error("boss reference does not match the battle mode")]
    BossMismatch,

    /// The current turn slot belongs to the enemy side.
    #[error("it is not a party member's turn")]
    NotPlayerTurn,

    /// The current turn slot belongs to the party.
    #[error("it is not an enemy turn")]
    NotEnemyTurn,

    /// The submitted actor is not the member whose turn it is.
    #[error("actor {submitted} acted out of turn (current: {current})")]
    ActorNotCurrent { submitted: usize, current: usize },

    /// No catalog entry for the requested skill id.
    #[error("unknown skill id {0:?}")]
    UnknownSkill(SkillId),

    /// The actor has not learned the requested skill.
    #[error("skill {0:?} is not known by the actor")]
    SkillNotKnown(SkillId),

    /// Not enough MP; nothing was mutated and the turn did not advance.
    #[error("insufficient MP: need {needed}, have {available}")]
    InsufficientMp { needed: u16, available: u16 },

    /// Silenced characters cannot use skills.
    #[error("actor is silenced and cannot use skills")]
    Silenced,

    /// Stealing is disallowed against bosses.
    #[error("cannot steal from a boss")]
    StealFromBoss,

    /// Fleeing is disallowed unconditionally in boss battles.
    #[error("cannot flee from a boss battle")]
    FleeFromBoss,

    /// The steal target is already dead.
    #[error("target is already defeated")]
    TargetDead,

    /// The enemy has already been stolen from this battle.
    #[error("target has already been stolen from")]
    AlreadyStolen,

    /// A party-side target index outside the roster.
    #[error("invalid target index {index}")]
    InvalidTarget { index: usize },

    /// Rewards were requested without a victory.
    #[error("rewards require a victorious battle")]
    VictoryNotAchieved,
}

impl ActionError {
    /// Classifies the error for recovery strategies.
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientMp { .. }
            | Self::Silenced
            | Self::StealFromBoss
            | Self::FleeFromBoss
            | Self::TargetDead
            | Self::AlreadyStolen => ErrorSeverity::Refused,

            Self::UnknownSkill(_) | Self::SkillNotKnown(_) | Self::InvalidTarget { .. } => {
                ErrorSeverity::Validation
            }

            Self::BattleOver
            | Self::BossMismatch
            | Self::NotPlayerTurn
            | Self::NotEnemyTurn
            | Self::ActorNotCurrent { .. }
            | Self::VictoryNotAchieved => ErrorSeverity::Contract,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusals_are_recoverable() {
        assert!(ActionError::Silenced.severity().is_recoverable());
        assert!(
            ActionError::InsufficientMp {
                needed: 5,
                available: 2
            }
            .severity()
            .is_recoverable()
        );
        assert!(!ActionError::BattleOver.severity().is_recoverable());
    }
}
