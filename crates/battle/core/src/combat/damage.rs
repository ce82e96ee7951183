//! Damage formulas.
//!
//! All intermediate math is done in `i32` so the floor clamps can act before
//! narrowing to the `u16` damage applied to HP. One consistent ordering is
//! used everywhere: clamp the base to >= 1, apply the variance multiplier,
//! then re-clamp (integer division of a small base can otherwise round the
//! result to zero).

use crate::env::BattleRng;

/// Basic attack damage.
///
/// # Formula
///
/// ```text
/// base = attack * 2 - defense      (floor 1)
/// damage = base * variance / 100   (variance in [75, 125], floor 1)
/// critical doubles the final damage
/// ```
pub fn attack_damage(attack: i32, defense: i32, critical: bool, rng: &mut BattleRng) -> u16 {
    let base = (attack * 2 - defense).max(1);
    let variance = rng.range(75, 125) as i32;
    let mut damage = (base * variance / 100).max(1);
    if critical {
        damage *= 2;
    }
    clamp_to_u16(damage)
}

/// Physical skill damage (Strength/Agility/Luck scaling; defense applies).
///
/// # Formula
///
/// ```text
/// base = scaling * 2 + power - defense   (floor 1)
/// damage = base * variance / 100         (variance in [85, 115], floor 1)
/// ```
pub fn physical_skill_damage(scaling: i32, power: i32, defense: i32, rng: &mut BattleRng) -> u16 {
    let base = (scaling * 2 + power - defense).max(1);
    let variance = rng.range(85, 115) as i32;
    clamp_to_u16((base * variance / 100).max(1))
}

/// Magical skill damage (Intelligence scaling; defense is ignored).
///
/// # Formula
///
/// ```text
/// base = scaling * power / 10    (floor 1)
/// damage = base * variance / 100 (variance in [85, 115], floor 1)
/// ```
pub fn magical_skill_damage(scaling: i32, power: i32, rng: &mut BattleRng) -> u16 {
    let base = (scaling * power / 10).max(1);
    let variance = rng.range(85, 115) as i32;
    clamp_to_u16((base * variance / 100).max(1))
}

fn clamp_to_u16(value: i32) -> u16 {
    value.clamp(0, i32::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_damage_stays_in_variance_window() {
        // str 12 vs def 3: base 12*2-3 = 21, so damage lands in [15, 26].
        let mut rng = BattleRng::new(99);
        for _ in 0..1000 {
            let damage = attack_damage(12, 3, false, &mut rng);
            assert!((15..=26).contains(&damage), "damage {damage} out of range");
        }
    }

    #[test]
    fn attack_damage_floors_at_one() {
        let mut rng = BattleRng::new(5);
        for _ in 0..1000 {
            assert!(attack_damage(1, 1000, false, &mut rng) >= 1);
        }
    }

    #[test]
    fn critical_doubles() {
        // Base 21 critical: [30, 52].
        let mut rng = BattleRng::new(21);
        for _ in 0..1000 {
            let damage = attack_damage(12, 3, true, &mut rng);
            assert!((30..=52).contains(&damage), "damage {damage} out of range");
        }
    }

    #[test]
    fn magical_damage_ignores_defense_and_stays_in_window() {
        // int 16, power 25: base 25*16/10 = 40, so damage lands in [34, 46].
        let mut rng = BattleRng::new(7);
        for _ in 0..1000 {
            let damage = magical_skill_damage(16, 25, &mut rng);
            assert!((34..=46).contains(&damage), "damage {damage} out of range");
        }
    }

    #[test]
    fn physical_skill_damage_floors_at_one() {
        let mut rng = BattleRng::new(13);
        for _ in 0..1000 {
            assert!(physical_skill_damage(2, 5, 500, &mut rng) >= 1);
        }
    }
}
