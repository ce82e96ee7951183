//! Victory settlement: EXP, gold, level-ups and item drops.

use crate::config::BattleConfig;
use crate::state::{ConsumableKind, KeyItem};
use crate::stats;

pub use crate::stats::LevelUp;

use super::{ActionError, BattleEngine};

/// Everything a victory paid out.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardSummary {
    /// EXP awarded, in full, to every living member (not split).
    pub exp: u32,
    /// Gold added to the shared party purse.
    pub gold: u32,
    /// Consumables dropped by enemies and added to the inventory.
    pub drops: Vec<(ConsumableKind, u8)>,
    /// Level-ups triggered per member (roster index, gains).
    pub level_ups: Vec<(usize, Vec<LevelUp>)>,
    /// The boss's key item, for boss victories.
    pub key_item: Option<KeyItem>,
}

/// Settles a victorious battle. Consumes the engine: a battle settles once.
pub(super) fn settle(engine: BattleEngine<'_>) -> Result<RewardSummary, ActionError> {
    if !engine.is_victory() {
        return Err(ActionError::VictoryNotAchieved);
    }

    let BattleEngine {
        battle,
        party,
        inventory,
        boss,
        env,
    } = engine;

    let (exp, gold, key_item) = if battle.is_boss_battle {
        let boss = boss.as_deref().ok_or(ActionError::BossMismatch)?;
        let reward = u32::from(boss.level) * BattleConfig::BOSS_REWARD_PER_LEVEL;
        (reward, reward, Some(boss.key_item))
    } else {
        let exp: u32 = battle.enemies.iter().map(|e| e.exp_reward).sum();
        let gold: u32 = battle.enemies.iter().map(|e| e.gold_reward).sum();
        (exp, gold, None)
    };

    party.gold += gold;
    tracing::info!(exp, gold, "victory rewards");

    let mut level_ups = Vec::new();
    for index in 0..party.members.len() {
        let member = &mut party.members[index];
        if !member.is_alive() {
            continue;
        }
        let ups = stats::gain_experience(member, exp, &mut battle.rng, env.jobs);
        if !ups.is_empty() {
            level_ups.push((index, ups));
        }
    }

    // Post-battle drops: regular battles only, and an enemy already pilfered
    // by Steal is excluded so the same body never pays out twice.
    let mut drops = Vec::new();
    if !battle.is_boss_battle {
        let drop_chance = battle.config.drop_chance;
        for enemy in &battle.enemies {
            if enemy.stolen_from {
                continue;
            }
            if !battle.rng.chance(drop_chance) {
                continue;
            }
            let pool = env.loot.drop_pool(enemy.level);
            if pool.is_empty() {
                continue;
            }
            let kind = pool[battle.rng.index(pool.len())];
            if inventory.add_item(kind, 1) {
                tracing::debug!(enemy = enemy.name, item = kind.name(), "item dropped");
                drops.push((kind, 1));
            }
        }
    }

    Ok(RewardSummary {
        exp,
        gold,
        drops,
        level_ups,
        key_item,
    })
}
