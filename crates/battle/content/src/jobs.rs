//! Per-job base stats, starting skills and level-gated unlocks.

use battle_core::skill::SkillId;
use battle_core::state::Job;
use battle_core::stats::CharacterStats;
use battle_core::JobOracle;

/// The standard job tables.
pub struct JobTable;

impl JobOracle for JobTable {
    fn base_stats(&self, job: Job) -> CharacterStats {
        // (max_hp, max_mp, strength, defense, intelligence, agility, luck)
        match job {
            // Knight: high HP, high defense, low magic
            Job::Knight => CharacterStats::new(100, 10, 12, 10, 4, 6, 5),
            // Black Belt: medium HP, high strength, high agility
            Job::BlackBelt => CharacterStats::new(80, 5, 14, 8, 5, 12, 8),
            // Thief: low HP, high agility, high luck
            Job::Thief => CharacterStats::new(60, 5, 8, 6, 5, 15, 12),
            // Sage: medium HP, high intelligence, medium MP
            Job::Sage => CharacterStats::new(70, 30, 6, 6, 14, 8, 7),
            // Priest: medium HP, high MP, medium intelligence
            Job::Priest => CharacterStats::new(75, 35, 7, 7, 12, 7, 6),
            // Mage: low HP, very high MP, very high intelligence
            Job::Mage => CharacterStats::new(55, 40, 5, 5, 16, 6, 5),
        }
    }

    fn starting_skills(&self, job: Job) -> &[SkillId] {
        match job {
            Job::Knight => &[SkillId::POWER_STRIKE, SkillId::SHIELD_BASH, SkillId::GUARD],
            Job::BlackBelt => &[SkillId::FOCUS_STRIKE, SkillId::MEDITATION],
            Job::Thief => &[
                SkillId::BACKSTAB,
                SkillId::STEAL,
                SkillId::POISON_BLADE,
                SkillId::FLASH,
            ],
            Job::Sage => &[
                SkillId::FIRE,
                SkillId::CURE,
                SkillId::BOLT,
                SkillId::TRANQUILITY,
                SkillId::TIME_WARP,
                SkillId::MUTE,
                SkillId::PETRIFY,
            ],
            Job::Priest => &[
                SkillId::HEAL,
                SkillId::HEAL2,
                SkillId::ESUNA,
                SkillId::PRAYER,
                SkillId::BLINDING_LIGHT,
            ],
            Job::Mage => &[
                SkillId::FIRE,
                SkillId::BOLT,
                SkillId::ICE,
                SkillId::FOCUS,
                SkillId::SLOW,
                SkillId::SILENCE,
                SkillId::TOXIC_CLOUD,
                SkillId::STONE_GAZE,
            ],
        }
    }

    fn unlocks_at(&self, job: Job, level: u8) -> &[SkillId] {
        match (job, level) {
            (Job::Knight, 5) => &[SkillId::TAUNT],
            (Job::BlackBelt, 5) => &[SkillId::COUNTER_STANCE],
            (Job::Thief, 5) => &[SkillId::SMOKE_BOMB],
            (Job::Sage, 5) => &[SkillId::FIRE2],
            (Job::Sage, 8) => &[SkillId::CURE2],
            (Job::Sage, 12) => &[SkillId::FIRE3],
            (Job::Priest, 5) => &[SkillId::PROTECT],
            (Job::Priest, 10) => &[SkillId::HEAL3],
            (Job::Mage, 4) => &[SkillId::ICE2],
            (Job::Mage, 5) => &[SkillId::BOLT2],
            (Job::Mage, 10) => &[SkillId::ICE3],
            (Job::Mage, 12) => &[SkillId::BOLT3],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::SkillCatalog;
    use battle_core::config::BattleConfig;
    use battle_core::SkillOracle;

    const ALL_JOBS: [Job; 6] = [
        Job::Knight,
        Job::BlackBelt,
        Job::Thief,
        Job::Sage,
        Job::Priest,
        Job::Mage,
    ];

    #[test]
    fn starting_skills_fit_the_known_skill_cap() {
        for job in ALL_JOBS {
            assert!(JobTable.starting_skills(job).len() <= BattleConfig::MAX_KNOWN_SKILLS);
        }
    }

    #[test]
    fn every_listed_skill_exists_in_the_catalog() {
        for job in ALL_JOBS {
            for &id in JobTable.starting_skills(job) {
                assert!(SkillCatalog.skill(id).is_some(), "{job:?} starts with unknown {id:?}");
            }
            for level in 1..=20 {
                for &id in JobTable.unlocks_at(job, level) {
                    assert!(SkillCatalog.skill(id).is_some(), "{job:?} unlocks unknown {id:?}");
                }
            }
        }
    }

    #[test]
    fn mage_learns_second_tier_ice_at_four() {
        assert_eq!(JobTable.unlocks_at(Job::Mage, 4), &[SkillId::ICE2]);
    }

    #[test]
    fn base_stats_start_at_level_one_full_resources() {
        for job in ALL_JOBS {
            let stats = JobTable.base_stats(job);
            assert_eq!(stats.level, 1);
            assert_eq!(stats.hp, stats.max_hp);
            assert_eq!(stats.mp, stats.max_mp);
        }
    }
}
