//! Skill resolution: attack, heal, buff, debuff and steal dispatch.

use crate::combat;
use crate::skill::{ScalingStat, Skill, SkillId, SkillKind, StatusPayload};
use crate::state::{Battle, BuffKind, StatusKind};

use super::report::{HealReport, HitReport, SkillEffect, StealReport, TargetId};
use super::{random_living_enemy, steal, BattleEngine};

impl BattleEngine<'_> {
    /// Resolves a pre-validated skill. MP is deducted here, after the
    /// actor's upkeep has run and incapacity has been ruled out.
    pub(super) fn resolve_skill(
        &mut self,
        actor: usize,
        skill_id: SkillId,
        target: usize,
    ) -> SkillEffect {
        let Some(def) = self.env.skills.skill(skill_id).cloned() else {
            // Pre-validation already rejected unknown ids.
            return SkillEffect::NoEffect;
        };

        self.party.members[actor].stats.spend_mp(def.mp_cost);
        tracing::debug!(actor, skill = def.name, "skill used");

        match def.kind {
            SkillKind::Attack => self.resolve_attack_skill(actor, &def, target),
            SkillKind::Heal => self.resolve_heal_skill(actor, &def, target),
            SkillKind::Buff => self.resolve_buff_skill(actor, def.id),
            SkillKind::Debuff => self.resolve_debuff_skill(&def, target),
            SkillKind::Steal => self.resolve_steal_skill(actor, target),
        }
    }

    /// Damage skills. Strength/Agility/Luck scaling is physical (defense
    /// applies per target); Intelligence scaling is magical (defense is
    /// ignored, one damage value applied to every target).
    fn resolve_attack_skill(&mut self, actor: usize, def: &Skill, target: usize) -> SkillEffect {
        let member = &self.party.members[actor];
        let scaling = self.scaling_value(actor, def.scaling);
        let confused = member.status.has(StatusKind::Confusion);
        let power = i32::from(def.power);

        if self.battle.is_boss_battle {
            let battle = &mut *self.battle;
            let Some(boss) = self.boss.as_deref_mut() else {
                return SkillEffect::Damage(Vec::new());
            };
            let damage = if def.scaling.is_physical() {
                combat::physical_skill_damage(
                    scaling,
                    power,
                    boss.effective_defense(),
                    &mut battle.rng,
                )
            } else {
                combat::magical_skill_damage(scaling, power, &mut battle.rng)
            };
            let defeated = boss.take_damage(damage);
            if defeated {
                battle.won = true;
                tracing::info!(boss = boss.name, "boss defeated");
            }
            // Bosses shrug off status payloads; they carry no status ledger.
            return SkillEffect::Damage(vec![HitReport {
                target: TargetId::Boss,
                damage,
                critical: false,
                missed: false,
                defeated,
                status_applied: None,
            }]);
        }

        let battle = &mut *self.battle;
        let mut hits = Vec::new();

        if def.targets_all {
            // The full computed damage lands on every living enemy; magical
            // skills roll the variance once for the whole volley.
            let magical_damage = if def.scaling.is_physical() {
                None
            } else {
                Some(combat::magical_skill_damage(scaling, power, &mut battle.rng))
            };
            let targets: Vec<usize> = battle.living_enemy_indices().collect();
            for index in targets {
                let hit = strike_enemy(battle, index, scaling, power, magical_damage, def.status);
                hits.push(hit);
            }
        } else {
            let target_index = if confused {
                random_living_enemy(battle)
            } else {
                battle.resolve_enemy_target(target)
            };
            if let Some(index) = target_index {
                let magical_damage = if def.scaling.is_physical() {
                    None
                } else {
                    Some(combat::magical_skill_damage(scaling, power, &mut battle.rng))
                };
                hits.push(strike_enemy(
                    battle,
                    index,
                    scaling,
                    power,
                    magical_damage,
                    def.status,
                ));
            }
        }

        SkillEffect::Damage(hits)
    }

    /// Restorative skills heal flat `power`, with two named special cases:
    /// Prayer grants the living party MP regen, Esuna clears statuses.
    fn resolve_heal_skill(&mut self, actor: usize, def: &Skill, target: usize) -> SkillEffect {
        let amount = def.power;
        let mut heals = Vec::new();
        let mut regen_granted = false;
        let mut cured = false;

        if def.targets_all {
            for index in 0..self.party.members.len() {
                let member = &mut self.party.members[index];
                if !member.is_alive() {
                    continue;
                }
                let restored = member.stats.heal(amount);
                heals.push(HealReport {
                    target: index,
                    restored,
                });
            }
            if def.id == SkillId::PRAYER {
                regen_granted = true;
                for member in &mut self.party.members {
                    if member.is_alive() {
                        member.buffs.add(BuffKind::RegenMp, 5, 2);
                    }
                }
            }
        } else {
            // Pre-validation guaranteed the index; fall back to the actor.
            let index = if target < self.party.members.len() {
                target
            } else {
                actor
            };
            let member = &mut self.party.members[index];
            let restored = member.stats.heal(amount);
            heals.push(HealReport {
                target: index,
                restored,
            });
            if def.id == SkillId::ESUNA {
                member.status.clear();
                cured = true;
            }
        }

        SkillEffect::Healing {
            heals,
            regen_granted,
            cured,
        }
    }

    /// Buff skills grant the actor a named buff through a closed,
    /// hand-authored mapping from skill id.
    fn resolve_buff_skill(&mut self, actor: usize, id: SkillId) -> SkillEffect {
        let granted = match id {
            SkillId::GUARD => Some((BuffKind::Defend, 0, 1)),
            SkillId::PROTECT => Some((BuffKind::DefenseUp, 50, 3)),
            SkillId::COUNTER_STANCE => Some((BuffKind::Counter, 0, 2)),
            SkillId::MEDITATION => Some((BuffKind::RegenMp, 10, 3)),
            SkillId::TRANQUILITY => Some((BuffKind::RegenMp, 8, 3)),
            SkillId::FOCUS => Some((BuffKind::RegenMp, 12, 3)),
            _ => None,
        };
        match granted {
            Some((kind, magnitude, duration)) => {
                self.party.members[actor].buffs.add(kind, magnitude, duration);
                SkillEffect::BuffGranted(kind)
            }
            None => SkillEffect::NoEffect,
        }
    }

    /// Debuff skills roll their status payload per enemy target. The few
    /// legacy entries without a payload (Taunt, Smoke Bomb) are flavor only.
    fn resolve_debuff_skill(&mut self, def: &Skill, target: usize) -> SkillEffect {
        let Some(payload) = def.status else {
            return SkillEffect::NoEffect;
        };
        // Bosses have no status ledger, so debuffs find nothing to stick to.
        if self.battle.is_boss_battle {
            return SkillEffect::Debuff {
                afflicted: Vec::new(),
                resisted: vec![TargetId::Boss],
            };
        }

        let battle = &mut *self.battle;
        let mut afflicted = Vec::new();
        let mut resisted = Vec::new();

        let targets: Vec<usize> = if def.targets_all {
            battle.living_enemy_indices().collect()
        } else {
            battle.resolve_enemy_target(target).into_iter().collect()
        };
        for index in targets {
            let roll = battle.rng.chance(payload.chance);
            let enemy = &mut battle.enemies[index];
            if roll {
                enemy.status.apply(payload.status, payload.duration);
                afflicted.push(TargetId::Enemy(index));
            } else {
                resisted.push(TargetId::Enemy(index));
            }
        }

        SkillEffect::Debuff {
            afflicted,
            resisted,
        }
    }

    fn resolve_steal_skill(&mut self, actor: usize, target: usize) -> SkillEffect {
        let luck = combat::member_luck(&self.party.members[actor], self.inventory);
        let Battle { enemies, rng, .. } = &mut *self.battle;
        let Some(enemy) = enemies.get_mut(target) else {
            return SkillEffect::Steal(StealReport::Failed);
        };
        let report = steal::attempt(luck, enemy, self.inventory, self.env.loot, rng);
        SkillEffect::Steal(report)
    }

    /// The attacker's effective total of a skill's declared scaling stat,
    /// buff modifiers included.
    fn scaling_value(&self, actor: usize, scaling: ScalingStat) -> i32 {
        let member = &self.party.members[actor];
        match scaling {
            ScalingStat::Strength => combat::member_attack(member, self.inventory),
            ScalingStat::Intelligence => combat::member_intelligence(member, self.inventory),
            ScalingStat::Agility => combat::member_agility(member, self.inventory),
            ScalingStat::Luck => combat::member_luck(member, self.inventory),
        }
    }
}

/// Applies one skill hit to an enemy: damage, then the status payload roll
/// if the enemy survived.
fn strike_enemy(
    battle: &mut Battle,
    index: usize,
    scaling: i32,
    power: i32,
    magical_damage: Option<u16>,
    payload: Option<StatusPayload>,
) -> HitReport {
    let Battle { enemies, rng, .. } = battle;
    let enemy = &mut enemies[index];
    let damage = match magical_damage {
        Some(damage) => damage,
        None => combat::physical_skill_damage(scaling, power, enemy.effective_defense(), rng),
    };
    let defeated = enemy.take_damage(damage);

    let mut status_applied = None;
    if !defeated {
        if let Some(payload) = payload {
            if payload.chance > 0 && rng.chance(payload.chance) {
                enemy.status.apply(payload.status, payload.duration);
                status_applied = Some(payload.status);
            }
        }
    }

    HitReport {
        target: TargetId::Enemy(index),
        damage,
        critical: false,
        missed: false,
        defeated,
        status_applied,
    }
}
