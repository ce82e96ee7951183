//! Damage and healing calculation.

mod damage;
mod effective;

pub use damage::{attack_damage, magical_skill_damage, physical_skill_damage};
pub use effective::{
    member_agility, member_attack, member_defense, member_intelligence, member_luck,
};
