//! Experience gain and leveling.

use crate::env::{BattleRng, JobOracle};
use crate::skill::SkillId;
use crate::state::party::PartyMember;

/// Cumulative experience required to advance past a level.
///
/// Quadratic curve: `100 * level^2`.
pub fn exp_for_next_level(level: u8) -> u32 {
    100 * u32::from(level) * u32::from(level)
}

/// Record of a single level gained.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUp {
    pub new_level: u8,
    /// Skills unlocked on reaching this level.
    pub learned: Vec<SkillId>,
}

/// Awards experience to a living member, applying every level-up it earns.
///
/// Leveling repeats while `experience >= 100 * level^2`. Each level grants
/// small random stat increments, restores the member to full HP/MP, and
/// checks the job's skill-unlock table. Dead members gain nothing.
pub fn gain_experience(
    member: &mut PartyMember,
    exp: u32,
    rng: &mut BattleRng,
    jobs: &dyn JobOracle,
) -> Vec<LevelUp> {
    if !member.is_alive() {
        return Vec::new();
    }

    member.stats.experience += exp;
    tracing::debug!(name = %member.name, exp, "experience gained");

    let mut level_ups = Vec::new();
    while member.stats.experience >= exp_for_next_level(member.stats.level) {
        member.stats.level += 1;

        member.stats.max_hp += 8 + rng.range(0, 4) as u16;
        member.stats.max_mp += 3 + rng.range(0, 2) as u16;
        member.stats.strength += rng.range(0, 2) as u16;
        member.stats.defense += rng.range(0, 2) as u16;
        member.stats.intelligence += rng.range(0, 2) as u16;
        member.stats.agility += rng.range(0, 2) as u16;
        member.stats.luck += rng.range(0, 1) as u16;
        member.stats.restore_all();

        let mut learned = Vec::new();
        for &skill in jobs.unlocks_at(member.job, member.stats.level) {
            if !member.knows_skill(skill) {
                member.learn_skill(skill);
                learned.push(skill);
            }
        }

        tracing::info!(name = %member.name, level = member.stats.level, "level up");
        level_ups.push(LevelUp {
            new_level: member.stats.level,
            learned,
        });
    }

    level_ups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::party::test_support::test_member;
    use crate::state::party::Job;
    use crate::stats::CharacterStats;

    struct NoUnlocks;

    impl JobOracle for NoUnlocks {
        fn base_stats(&self, _job: Job) -> CharacterStats {
            CharacterStats::new(100, 30, 12, 10, 4, 6, 5)
        }
        fn starting_skills(&self, _job: Job) -> &[SkillId] {
            &[]
        }
        fn unlocks_at(&self, _job: Job, _level: u8) -> &[SkillId] {
            &[]
        }
    }

    #[test]
    fn curve_matches_quadratic_thresholds() {
        assert_eq!(exp_for_next_level(1), 100);
        assert_eq!(exp_for_next_level(2), 400);
        assert_eq!(exp_for_next_level(10), 10_000);
    }

    #[test]
    fn exactly_one_hundred_exp_is_exactly_one_level() {
        let mut member = test_member(Job::Knight);
        let mut rng = BattleRng::new(3);
        let ups = gain_experience(&mut member, 100, &mut rng, &NoUnlocks);
        assert_eq!(ups.len(), 1);
        assert_eq!(member.stats.level, 2);
        // 100 < 400, so no second level.
        assert!(member.stats.experience < exp_for_next_level(2));
    }

    #[test]
    fn big_award_levels_repeatedly_and_restores() {
        let mut member = test_member(Job::Knight);
        member.stats.hp = 1;
        member.stats.mp = 0;
        let mut rng = BattleRng::new(3);
        let ups = gain_experience(&mut member, 400, &mut rng, &NoUnlocks);
        assert_eq!(ups.len(), 2);
        assert_eq!(member.stats.level, 3);
        assert_eq!(member.stats.hp, member.stats.max_hp);
        assert_eq!(member.stats.mp, member.stats.max_mp);
    }

    #[test]
    fn dead_members_gain_nothing() {
        let mut member = test_member(Job::Knight);
        member.stats.hp = 0;
        let mut rng = BattleRng::new(3);
        let ups = gain_experience(&mut member, 1000, &mut rng, &NoUnlocks);
        assert!(ups.is_empty());
        assert_eq!(member.stats.experience, 0);
        assert_eq!(member.stats.level, 1);
    }
}
