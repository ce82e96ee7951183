//! Turn-start upkeep: buff ticks, poison damage, incapacity checks.
//!
//! Runs once at the start of every actor's turn, player and enemy alike.
//! Order within the pass: buff tick (regen pays out), incapacity check
//! against the statuses active right now, poison damage, then the status
//! duration tick — so a duration-1 status affects exactly one turn.

use crate::env::BattleRng;
use crate::state::{Boss, Enemy, PartyMember, StatusKind};

/// What upkeep did to the actor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Upkeep {
    pub mp_regained: u16,
    pub poison_damage: u16,
    /// Set when a status consumes this turn (sleep, stone, a failed
    /// paralysis roll, or death by poison).
    pub incapacity: Option<StatusKind>,
    /// True when poison damage killed the actor during this pass.
    pub died: bool,
}

fn roll_incapacity(
    has: impl Fn(StatusKind) -> bool,
    rng: &mut BattleRng,
) -> Option<StatusKind> {
    if has(StatusKind::Stone) {
        return Some(StatusKind::Stone);
    }
    if has(StatusKind::Sleep) {
        return Some(StatusKind::Sleep);
    }
    if has(StatusKind::Paralysis) && rng.chance(50) {
        return Some(StatusKind::Paralysis);
    }
    None
}

/// Poison damage for this tick: 5-10% of max HP, at least 1.
fn poison_damage(max_hp: u16, rng: &mut BattleRng) -> u16 {
    let percent = rng.range(5, 10);
    ((u32::from(max_hp) * percent) / 100).max(1) as u16
}

pub(crate) fn tick_member(member: &mut PartyMember, rng: &mut BattleRng) -> Upkeep {
    let mut upkeep = Upkeep::default();

    let buff_tick = member.buffs.tick();
    upkeep.mp_regained = member.stats.restore_mp(buff_tick.mp_regen);

    upkeep.incapacity = roll_incapacity(|kind| member.status.has(kind), rng);

    if member.status.has(StatusKind::Poison) {
        let dot = poison_damage(member.stats.max_hp, rng);
        upkeep.poison_damage = dot;
        upkeep.died = member.stats.take_damage(dot);
        if upkeep.died {
            upkeep.incapacity = Some(StatusKind::Poison);
        }
    }

    member.status.tick();
    upkeep
}

pub(crate) fn tick_enemy(enemy: &mut Enemy, rng: &mut BattleRng) -> Upkeep {
    let mut upkeep = Upkeep::default();

    enemy.buffs.tick();
    upkeep.incapacity = roll_incapacity(|kind| enemy.status.has(kind), rng);

    if enemy.status.has(StatusKind::Poison) {
        let dot = poison_damage(enemy.max_hp, rng);
        upkeep.poison_damage = dot;
        // Direct HP reduction: DOT is not "damage" that wakes sleepers.
        enemy.hp = enemy.hp.saturating_sub(dot);
        upkeep.died = enemy.hp == 0;
        if upkeep.died {
            upkeep.incapacity = Some(StatusKind::Poison);
        }
    }

    enemy.status.tick();
    upkeep
}

pub(crate) fn tick_boss(boss: &mut Boss) -> Upkeep {
    // Bosses carry buffs but no status ledger.
    boss.buffs.tick();
    Upkeep::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::party::test_support::test_member;
    use crate::state::{BuffKind, Job};

    #[test]
    fn regen_pays_out_during_upkeep() {
        let mut member = test_member(Job::Priest);
        member.stats.mp = 0;
        member.buffs.add(BuffKind::RegenMp, 5, 2);
        let mut rng = BattleRng::new(1);

        let upkeep = tick_member(&mut member, &mut rng);
        assert_eq!(upkeep.mp_regained, 5);
        assert_eq!(member.stats.mp, 5);
    }

    #[test]
    fn sleep_consumes_the_turn() {
        let mut member = test_member(Job::Knight);
        member.status.apply(StatusKind::Sleep, 2);
        let mut rng = BattleRng::new(1);

        let upkeep = tick_member(&mut member, &mut rng);
        assert_eq!(upkeep.incapacity, Some(StatusKind::Sleep));
    }

    #[test]
    fn paralysis_skips_about_half_the_time() {
        let mut rng = BattleRng::new(77);
        let mut skipped = 0;
        for _ in 0..1000 {
            let mut member = test_member(Job::Knight);
            member.status.apply(StatusKind::Paralysis, 2);
            if tick_member(&mut member, &mut rng).incapacity.is_some() {
                skipped += 1;
            }
        }
        assert!((400..=600).contains(&skipped), "skipped {skipped} of 1000");
    }

    #[test]
    fn poison_ticks_between_five_and_ten_percent() {
        let mut rng = BattleRng::new(5);
        for _ in 0..200 {
            let mut member = test_member(Job::Knight);
            member.status.apply(StatusKind::Poison, 3);
            let upkeep = tick_member(&mut member, &mut rng);
            assert!((5..=10).contains(&upkeep.poison_damage));
        }
    }

    #[test]
    fn poison_death_reports_incapacity() {
        let mut member = test_member(Job::Knight);
        member.stats.hp = 1;
        member.status.apply(StatusKind::Poison, 3);
        let mut rng = BattleRng::new(5);

        let upkeep = tick_member(&mut member, &mut rng);
        assert!(upkeep.died);
        assert_eq!(upkeep.incapacity, Some(StatusKind::Poison));
        assert!(!member.is_alive());
    }

    #[test]
    fn duration_one_status_affects_exactly_one_turn() {
        let mut member = test_member(Job::Knight);
        member.status.apply(StatusKind::Sleep, 1);
        let mut rng = BattleRng::new(2);

        assert!(tick_member(&mut member, &mut rng).incapacity.is_some());
        assert!(tick_member(&mut member, &mut rng).incapacity.is_none());
    }
}
