//! Party roster and member state.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::env::JobOracle;
use crate::skill::SkillId;
use crate::state::buffs::BuffLedger;
use crate::state::equipment::EquipmentSlots;
use crate::state::status::StatusLedger;
use crate::stats::CharacterStats;

/// Character job classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Job {
    Knight,
    BlackBelt,
    Thief,
    Sage,
    Priest,
    Mage,
}

impl Job {
    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Knight => "Knight",
            Self::BlackBelt => "Black Belt",
            Self::Thief => "Thief",
            Self::Sage => "Sage",
            Self::Priest => "Priest",
            Self::Mage => "Mage",
        }
    }
}

/// A single party member.
///
/// Created at party formation and mutated throughout the session; members
/// are never destroyed mid-session. Gear slots hold stable handles into the
/// shared inventory (see [`crate::state::Inventory`]).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyMember {
    pub name: String,
    pub job: Job,
    pub stats: CharacterStats,
    pub equipment: EquipmentSlots,
    pub status: StatusLedger,
    pub skills: ArrayVec<SkillId, { BattleConfig::MAX_KNOWN_SKILLS }>,
    pub buffs: BuffLedger,
}

impl PartyMember {
    /// Creates a member with job base stats and starting skills.
    pub fn new(name: impl Into<String>, job: Job, jobs: &dyn JobOracle) -> Self {
        let mut member = Self {
            name: name.into(),
            job,
            stats: jobs.base_stats(job),
            equipment: EquipmentSlots::empty(),
            status: StatusLedger::new(),
            skills: ArrayVec::new(),
            buffs: BuffLedger::new(),
        };
        for &skill in jobs.starting_skills(job) {
            member.learn_skill(skill);
        }
        member
    }

    /// Quick check whether the member can act or be targeted.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    /// Applies damage, clamping HP at zero and waking the member from sleep.
    ///
    /// Returns true if this killed the member.
    pub fn take_damage(&mut self, damage: u16) -> bool {
        let died = self.stats.take_damage(damage);
        if damage > 0 {
            self.status.remove(crate::state::status::StatusKind::Sleep);
        }
        died
    }

    /// Learns a skill, ignoring duplicates and overflow past the cap.
    pub fn learn_skill(&mut self, skill: SkillId) {
        if self.skills.contains(&skill) || self.skills.is_full() {
            return;
        }
        self.skills.push(skill);
    }

    /// Whether the member knows a skill.
    pub fn knows_skill(&self, skill: SkillId) -> bool {
        self.skills.contains(&skill)
    }
}

/// The party aggregate: up to four members plus the shared gold purse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    pub members: ArrayVec<PartyMember, { BattleConfig::MAX_PARTY_SIZE }>,
    pub gold: u32,
}

impl Party {
    /// Creates an empty party.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member if there is room. Returns false when full.
    pub fn add_member(&mut self, name: impl Into<String>, job: Job, jobs: &dyn JobOracle) -> bool {
        if self.members.is_full() {
            return false;
        }
        self.members.push(PartyMember::new(name, job, jobs));
        true
    }

    pub fn member(&self, index: usize) -> Option<&PartyMember> {
        self.members.get(index)
    }

    pub fn member_mut(&mut self, index: usize) -> Option<&mut PartyMember> {
        self.members.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True when every member is down (or the party has no members).
    pub fn is_defeated(&self) -> bool {
        self.members.iter().all(|m| !m.is_alive())
    }

    /// Indices of living members.
    pub fn living_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_alive())
            .map(|(i, _)| i)
    }

    /// Fully restores every member and clears their statuses and buffs.
    pub fn heal_all(&mut self) {
        for member in &mut self.members {
            member.stats.restore_all();
            member.status.clear();
            member.buffs.clear();
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// A bare member with Knight-like stats, no oracle required.
    pub fn test_member(job: Job) -> PartyMember {
        PartyMember {
            name: "Tess".into(),
            job,
            stats: CharacterStats::new(100, 30, 12, 10, 4, 6, 5),
            equipment: EquipmentSlots::empty(),
            status: StatusLedger::new(),
            skills: ArrayVec::new(),
            buffs: BuffLedger::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::test_member;
    use super::*;

    #[test]
    fn defeated_only_when_everyone_is_down() {
        let mut party = Party::new();
        party.members.push(test_member(Job::Knight));
        party.members.push(test_member(Job::Mage));
        assert!(!party.is_defeated());

        party.members[0].stats.hp = 0;
        assert!(!party.is_defeated());
        party.members[1].stats.hp = 0;
        assert!(party.is_defeated());
    }

    #[test]
    fn empty_party_counts_as_defeated() {
        assert!(Party::new().is_defeated());
    }

    #[test]
    fn duplicate_skills_are_ignored() {
        let mut member = test_member(Job::Knight);
        member.learn_skill(SkillId::POWER_STRIKE);
        member.learn_skill(SkillId::POWER_STRIKE);
        assert_eq!(member.skills.len(), 1);
    }

    #[test]
    fn heal_all_restores_and_clears() {
        let mut party = Party::new();
        party.members.push(test_member(Job::Knight));
        let member = &mut party.members[0];
        member.stats.hp = 1;
        member.stats.mp = 0;
        member.status.apply(crate::state::StatusKind::Poison, 3);
        member.buffs.add(crate::state::BuffKind::Defend, 0, 1);

        party.heal_all();
        let member = &party.members[0];
        assert_eq!(member.stats.hp, member.stats.max_hp);
        assert_eq!(member.stats.mp, member.stats.max_mp);
        assert!(member.status.is_empty());
        assert!(member.buffs.is_empty());
    }
}
