//! Point-of-use effective stats: aggregator totals adjusted by buffs.
//!
//! The stat aggregator folds in equipment only; the damage and heal paths
//! call these wrappers to layer buff percentage modifiers on top, keeping
//! the two concerns separate.

use crate::state::{BuffKind, Inventory, PartyMember};
use crate::stats;

fn apply_percent(total: u16, modifier: i32) -> i32 {
    (i32::from(total) * (100 + modifier) / 100).max(0)
}

/// Effective attack for damage resolution.
pub fn member_attack(member: &PartyMember, inventory: &Inventory) -> i32 {
    let modifier = i32::from(member.buffs.modifier(BuffKind::AttackUp))
        + i32::from(member.buffs.modifier(BuffKind::AttackDown));
    apply_percent(stats::total_attack(member, inventory), modifier)
}

/// Effective defense; the Defend stance doubles it after modifiers.
pub fn member_defense(member: &PartyMember, inventory: &Inventory) -> i32 {
    let modifier = i32::from(member.buffs.modifier(BuffKind::DefenseUp))
        + i32::from(member.buffs.modifier(BuffKind::DefenseDown));
    let mut defense = apply_percent(stats::total_defense(member, inventory), modifier);
    if member.buffs.has(BuffKind::Defend) {
        defense *= 2;
    }
    defense
}

/// Effective intelligence for magical scaling.
pub fn member_intelligence(member: &PartyMember, inventory: &Inventory) -> i32 {
    let modifier = i32::from(member.buffs.modifier(BuffKind::IntellectUp))
        + i32::from(member.buffs.modifier(BuffKind::IntellectDown));
    apply_percent(stats::total_intelligence(member, inventory), modifier)
}

/// Effective agility for physical scaling.
pub fn member_agility(member: &PartyMember, inventory: &Inventory) -> i32 {
    let modifier = i32::from(member.buffs.modifier(BuffKind::AgilityUp))
        + i32::from(member.buffs.modifier(BuffKind::AgilityDown));
    apply_percent(stats::total_agility(member, inventory), modifier)
}

/// Effective luck. No buff kind touches luck; this mirrors the aggregator.
pub fn member_luck(member: &PartyMember, inventory: &Inventory) -> i32 {
    i32::from(stats::total_luck(member, inventory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::party::test_support::test_member;
    use crate::state::Job;

    #[test]
    fn protect_raises_defense_and_defend_doubles() {
        let inventory = Inventory::new();
        let mut member = test_member(Job::Knight);
        assert_eq!(member_defense(&member, &inventory), 10);

        member.buffs.add(BuffKind::DefenseUp, 50, 3);
        assert_eq!(member_defense(&member, &inventory), 15);

        member.buffs.add(BuffKind::Defend, 0, 1);
        assert_eq!(member_defense(&member, &inventory), 30);
    }

    #[test]
    fn attack_down_reduces_but_never_below_zero() {
        let inventory = Inventory::new();
        let mut member = test_member(Job::Knight);
        member.buffs.add(BuffKind::AttackDown, -150, 2);
        assert_eq!(member_attack(&member, &inventory), 0);
    }
}
