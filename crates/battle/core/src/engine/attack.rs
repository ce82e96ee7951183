//! Basic attack resolution, for both sides of the battle.

use crate::combat;
use crate::state::{Battle, StatusKind};

use super::report::{EnemyTurnOutcome, HitReport, TargetId};
use super::{random_living_enemy, upkeep, BattleEngine};

impl BattleEngine<'_> {
    /// Resolves a party member's basic attack.
    ///
    /// A dead or out-of-range target is redirected to the first living
    /// enemy; a confused attacker hits a random living enemy instead of the
    /// chosen one; a blinded attacker misses half the time. Critical chance
    /// equals the attacker's luck stat in percent.
    pub(super) fn resolve_attack(&mut self, actor: usize, requested: usize) -> HitReport {
        let member = &self.party.members[actor];
        let confused = member.status.has(StatusKind::Confusion);
        let blinded = member.status.has(StatusKind::Blind);
        let attack = combat::member_attack(member, self.inventory);
        let luck = combat::member_luck(member, self.inventory).clamp(0, 100) as u8;
        let attacker_name = member.name.clone();

        let battle = &mut *self.battle;
        let missed = blinded && battle.rng.chance(50);
        let critical = !missed && battle.rng.chance(luck);

        if battle.is_boss_battle {
            let target = TargetId::Boss;
            if missed {
                return miss(target);
            }
            let Some(boss) = self.boss.as_deref_mut() else {
                // Unreachable by construction; report a whiff defensively.
                return miss(target);
            };
            let damage =
                combat::attack_damage(attack, boss.effective_defense(), critical, &mut battle.rng);
            let defeated = boss.take_damage(damage);
            if defeated {
                battle.won = true;
                tracing::info!(boss = boss.name, "boss defeated");
            }
            tracing::debug!(attacker = %attacker_name, damage, critical, "attack on boss");
            return HitReport {
                target,
                damage,
                critical,
                missed: false,
                defeated,
                status_applied: None,
            };
        }

        let target_index = if confused {
            random_living_enemy(battle)
        } else {
            battle.resolve_enemy_target(requested)
        };
        let Some(index) = target_index else {
            // No living enemy; the battle is over and this cannot be reached.
            return miss(TargetId::Enemy(requested));
        };
        let target = TargetId::Enemy(index);
        if missed {
            return miss(target);
        }

        let Battle { enemies, rng, .. } = battle;
        let enemy = &mut enemies[index];
        let damage = combat::attack_damage(attack, enemy.effective_defense(), critical, rng);
        let defeated = enemy.take_damage(damage);
        tracing::debug!(attacker = %attacker_name, enemy = enemy.name, damage, critical, defeated, "attack");
        HitReport {
            target,
            damage,
            critical,
            missed: false,
            defeated,
            status_applied: None,
        }
    }

    /// Auto-resolves a regular enemy's turn.
    pub(super) fn resolve_pack_enemy_turn(&mut self, index: usize) -> EnemyTurnOutcome {
        let attacker = TargetId::Enemy(index);
        {
            let Battle { enemies, rng, .. } = &mut *self.battle;
            let Some(enemy) = enemies.get_mut(index) else {
                self.battle.advance_cursor();
                return EnemyTurnOutcome::SkippedDead;
            };
            if !enemy.is_alive() {
                self.battle.advance_cursor();
                return EnemyTurnOutcome::SkippedDead;
            }

            let raw = upkeep::tick_enemy(enemy, rng);
            if let Some(cause) = raw.incapacity {
                self.battle.advance_cursor();
                return EnemyTurnOutcome::Incapacitated {
                    attacker,
                    cause,
                    died: raw.died,
                };
            }
        }

        let (attack, blinded, enemy_defense) = {
            let enemy = &self.battle.enemies[index];
            (
                enemy.effective_attack(),
                enemy.status.has(StatusKind::Blind),
                enemy.effective_defense(),
            )
        };
        let (hit, counter) = self.strike_party(attacker, attack, blinded, |engine, damage| {
            let enemy = &mut engine.battle.enemies[index];
            enemy.take_damage(damage)
        }, enemy_defense);

        self.battle.advance_cursor();
        EnemyTurnOutcome::Attack {
            attacker,
            hit,
            counter,
        }
    }

    /// Auto-resolves the boss's turn.
    pub(super) fn resolve_boss_turn(&mut self) -> EnemyTurnOutcome {
        let attacker = TargetId::Boss;
        let (attack, defense) = {
            let Some(boss) = self.boss.as_deref_mut() else {
                self.battle.advance_cursor();
                return EnemyTurnOutcome::SkippedDead;
            };
            upkeep::tick_boss(boss);
            (boss.effective_attack(), boss.effective_defense())
        };

        let (hit, counter) = self.strike_party(attacker, attack, false, |engine, damage| {
            let Some(boss) = engine.boss.as_deref_mut() else {
                return false;
            };
            let defeated = boss.take_damage(damage);
            if defeated {
                engine.battle.won = true;
            }
            defeated
        }, defense);

        self.battle.advance_cursor();
        EnemyTurnOutcome::Attack {
            attacker,
            hit,
            counter,
        }
    }

    /// Shared enemy-side strike: pick a random living member, resolve the
    /// hit, then let a counter-stance member retaliate once.
    fn strike_party(
        &mut self,
        attacker: TargetId,
        attack: i32,
        blinded: bool,
        mut damage_attacker: impl FnMut(&mut Self, u16) -> bool,
        attacker_defense: i32,
    ) -> (HitReport, Option<HitReport>) {
        use crate::state::BuffKind;

        let victims: Vec<usize> = self.party.living_indices().collect();
        if victims.is_empty() {
            return (miss(TargetId::Party(0)), None);
        }
        let victim = victims[self.battle.rng.index(victims.len())];
        let target = TargetId::Party(victim);

        if blinded && self.battle.rng.chance(50) {
            return (miss(target), None);
        }

        let defense = combat::member_defense(&self.party.members[victim], self.inventory);
        let damage = combat::attack_damage(attack, defense, false, &mut self.battle.rng);
        let member = &mut self.party.members[victim];
        let defeated = member.take_damage(damage);
        tracing::debug!(victim = %member.name, damage, defeated, "enemy attack");
        let hit = HitReport {
            target,
            damage,
            critical: false,
            missed: false,
            defeated,
            status_applied: None,
        };

        // A standing counter-stance member retaliates once, dropping the
        // stance, with a plain non-critical attack.
        let mut counter = None;
        let member = &self.party.members[victim];
        if member.is_alive() && member.buffs.has(BuffKind::Counter) {
            let counter_attack = combat::member_attack(member, self.inventory);
            self.party.members[victim].buffs.remove(BuffKind::Counter);
            let damage = combat::attack_damage(
                counter_attack,
                attacker_defense,
                false,
                &mut self.battle.rng,
            );
            let defeated = damage_attacker(self, damage);
            counter = Some(HitReport {
                target: attacker,
                damage,
                critical: false,
                missed: false,
                defeated,
                status_applied: None,
            });
        }

        (hit, counter)
    }
}

fn miss(target: TargetId) -> HitReport {
    HitReport {
        target,
        damage: 0,
        critical: false,
        missed: true,
        defeated: false,
        status_applied: None,
    }
}
