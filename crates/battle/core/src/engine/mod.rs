//! Battle turn execution and action resolution.
//!
//! [`BattleEngine`] is the authoritative reducer for a [`Battle`]. It borrows
//! the battle, the party, the shared inventory and (in boss mode) the boss
//! for the duration of one call sequence; the caller owns all of them. Every
//! player action flows through the same pipeline:
//!
//! 1. `pre_validate` - refusals and contract checks, no mutation
//! 2. `apply` - turn-start upkeep, then the action itself
//! 3. `post_validate` - debug-level invariant assertions
//!
//! Refused actions (`Err`) leave the battle untouched and do not consume the
//! turn; applied actions always advance the cursor, except a successful flee
//! which ends the battle on the spot.

mod action;
mod attack;
mod errors;
mod report;
mod rewards;
mod skills;
mod steal;
mod upkeep;

pub use action::{ActionKind, BattleAction};
pub use errors::ActionError;
pub use report::{
    ActionOutcome, EnemyTurnOutcome, HealReport, HitReport, SkillEffect, StealReport, TargetId,
    UpkeepReport,
};
pub use rewards::{LevelUp, RewardSummary};

use crate::env::BattleEnv;
use crate::skill::SkillKind;
use crate::state::{ActorSlot, Battle, Boss, Inventory, Party, StatusKind};

/// The battle engine: single mutating entry point for battle state.
pub struct BattleEngine<'a> {
    battle: &'a mut Battle,
    party: &'a mut Party,
    inventory: &'a mut Inventory,
    boss: Option<&'a mut Boss>,
    env: BattleEnv<'a>,
}

impl<'a> BattleEngine<'a> {
    /// Creates an engine over a battle and its collaborators.
    ///
    /// Boss battles require a boss reference and regular battles must not
    /// carry one; a mismatch is a caller contract violation.
    pub fn new(
        battle: &'a mut Battle,
        party: &'a mut Party,
        inventory: &'a mut Inventory,
        boss: Option<&'a mut Boss>,
        env: BattleEnv<'a>,
    ) -> Result<Self, ActionError> {
        if battle.is_boss_battle != boss.is_some() {
            return Err(ActionError::BossMismatch);
        }
        Ok(Self {
            battle,
            party,
            inventory,
            boss,
            env,
        })
    }

    /// The slot whose turn it currently is.
    pub fn whose_turn(&self) -> ActorSlot {
        self.battle.whose_turn()
    }

    /// True once the battle reached any terminal state.
    pub fn is_over(&self) -> bool {
        self.battle.is_over(self.party, self.boss.as_deref())
    }

    /// True when the battle ended in victory.
    pub fn is_victory(&self) -> bool {
        self.battle.is_victory(self.party, self.boss.as_deref())
    }

    /// Resolves one player action for the member whose turn it is.
    pub fn submit_action(&mut self, action: &BattleAction) -> Result<ActionOutcome, ActionError> {
        if self.is_over() {
            return Err(ActionError::BattleOver);
        }
        let ActorSlot::Party(current) = self.battle.whose_turn() else {
            return Err(ActionError::NotPlayerTurn);
        };
        if action.actor != current {
            return Err(ActionError::ActorNotCurrent {
                submitted: action.actor,
                current,
            });
        }
        let Some(member) = self.party.member(current) else {
            return Err(ActionError::InvalidTarget { index: current });
        };

        // Dead actors are skipped silently; the turn advances with no effect.
        if !member.is_alive() {
            self.battle.advance_cursor();
            return Ok(ActionOutcome::SkippedDead);
        }

        self.pre_validate(current, &action.kind)?;
        let outcome = self.apply(current, action.kind);
        self.post_validate();
        Ok(outcome)
    }

    /// Refusal and validation checks. Nothing is mutated on failure, and the
    /// turn does not advance.
    fn pre_validate(&self, actor: usize, kind: &ActionKind) -> Result<(), ActionError> {
        match kind {
            ActionKind::Attack { .. } | ActionKind::Defend => Ok(()),
            ActionKind::Flee => {
                if self.battle.is_boss_battle {
                    Err(ActionError::FleeFromBoss)
                } else {
                    Ok(())
                }
            }
            ActionKind::Skill { skill, target } => {
                let member = self
                    .party
                    .member(actor)
                    .ok_or(ActionError::InvalidTarget { index: actor })?;
                let def = self
                    .env
                    .skills
                    .skill(*skill)
                    .ok_or(ActionError::UnknownSkill(*skill))?;
                if !member.knows_skill(*skill) {
                    return Err(ActionError::SkillNotKnown(*skill));
                }
                if member.status.has(StatusKind::Silence) {
                    return Err(ActionError::Silenced);
                }
                if member.stats.mp < def.mp_cost {
                    return Err(ActionError::InsufficientMp {
                        needed: def.mp_cost,
                        available: member.stats.mp,
                    });
                }
                match def.kind {
                    SkillKind::Steal => {
                        if self.battle.is_boss_battle {
                            return Err(ActionError::StealFromBoss);
                        }
                        let enemy = self
                            .battle
                            .enemies
                            .get(*target)
                            .ok_or(ActionError::InvalidTarget { index: *target })?;
                        if !enemy.is_alive() {
                            return Err(ActionError::TargetDead);
                        }
                        if enemy.stolen_from {
                            return Err(ActionError::AlreadyStolen);
                        }
                    }
                    SkillKind::Heal => {
                        if !def.targets_all && self.party.member(*target).is_none() {
                            return Err(ActionError::InvalidTarget { index: *target });
                        }
                    }
                    _ => {}
                }
                Ok(())
            }
        }
    }

    /// Runs the actor's upkeep and resolves the action.
    fn apply(&mut self, actor: usize, kind: ActionKind) -> ActionOutcome {
        let raw = {
            let member = &mut self.party.members[actor];
            upkeep::tick_member(member, &mut self.battle.rng)
        };
        let upkeep = UpkeepReport {
            mp_regained: raw.mp_regained,
            poison_damage: raw.poison_damage,
        };
        if let Some(cause) = raw.incapacity {
            tracing::debug!(actor, %cause, "turn lost to status");
            self.battle.advance_cursor();
            return ActionOutcome::Incapacitated { cause, upkeep };
        }

        let outcome = match kind {
            ActionKind::Attack { target } => {
                let hit = self.resolve_attack(actor, target);
                ActionOutcome::Attack { upkeep, hit }
            }
            ActionKind::Skill { skill, target } => {
                let effect = self.resolve_skill(actor, skill, target);
                ActionOutcome::Skill {
                    upkeep,
                    skill,
                    effect,
                }
            }
            ActionKind::Defend => {
                use crate::state::BuffKind;
                self.party.members[actor].buffs.add(BuffKind::Defend, 0, 1);
                ActionOutcome::Defended { upkeep }
            }
            ActionKind::Flee => {
                let flee_chance = self.battle.config.flee_chance;
                if self.battle.rng.chance(flee_chance) {
                    self.battle.fled = true;
                    tracing::info!("party fled the battle");
                    // Fleeing ends the battle immediately; no turn advance.
                    return ActionOutcome::Fled { upkeep };
                }
                ActionOutcome::FleeFailed { upkeep }
            }
        };

        self.battle.advance_cursor();
        outcome
    }

    /// Auto-resolves one enemy or boss turn.
    pub fn advance_enemy_turn(&mut self) -> Result<EnemyTurnOutcome, ActionError> {
        if self.is_over() {
            return Err(ActionError::BattleOver);
        }
        let outcome = match self.battle.whose_turn() {
            ActorSlot::Party(_) => return Err(ActionError::NotEnemyTurn),
            ActorSlot::Enemy(index) => self.resolve_pack_enemy_turn(index),
            ActorSlot::Boss => self.resolve_boss_turn(),
        };
        self.post_validate();
        Ok(outcome)
    }

    /// Settles rewards after a victory, consuming the engine.
    ///
    /// Distributes full EXP to every living member (which may level them up),
    /// adds gold to the party purse, and rolls post-battle item drops.
    pub fn settle_rewards(self) -> Result<RewardSummary, ActionError> {
        rewards::settle(self)
    }

    /// Debug-level invariant checks after every mutation.
    fn post_validate(&self) {
        debug_assert!(self.battle.cursor < self.battle.turn_order.len());
        for member in &self.party.members {
            debug_assert!(member.stats.hp <= member.stats.max_hp);
            debug_assert!(member.stats.mp <= member.stats.max_mp);
        }
        for enemy in &self.battle.enemies {
            debug_assert!(enemy.hp <= enemy.max_hp);
        }
        if let Some(boss) = self.boss.as_deref() {
            debug_assert!(boss.hp <= boss.max_hp);
        }
    }
}

/// Uniformly random living enemy index, used for confusion redirects and
/// similar "pick anyone standing" rolls.
fn random_living_enemy(battle: &mut Battle) -> Option<usize> {
    let living: Vec<usize> = battle.living_enemy_indices().collect();
    if living.is_empty() {
        return None;
    }
    Some(living[battle.rng.index(living.len())])
}
