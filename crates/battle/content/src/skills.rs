//! The skill catalog.
//!
//! One immutable table covering every job's skills and spells. Lookup is a
//! linear scan; the table is small and ids are not assumed contiguous.

use battle_core::skill::{ScalingStat, Skill, SkillId, SkillKind, StatusPayload};
use battle_core::state::StatusKind;
use battle_core::SkillOracle;

const fn payload(status: StatusKind, chance: u8, duration: u8) -> Option<StatusPayload> {
    Some(StatusPayload {
        status,
        chance,
        duration,
    })
}

const fn skill(
    id: SkillId,
    name: &'static str,
    kind: SkillKind,
    scaling: ScalingStat,
    mp_cost: u16,
    power: u16,
    targets_enemy: bool,
    targets_all: bool,
    status: Option<StatusPayload>,
    description: &'static str,
) -> Skill {
    Skill {
        id,
        name,
        kind,
        scaling,
        mp_cost,
        power,
        targets_enemy,
        targets_all,
        status,
        description,
    }
}

use ScalingStat::{Agility, Intelligence, Luck, Strength};
use SkillKind::{Attack, Buff, Debuff, Heal, Steal};

#[rustfmt::skip]
static CATALOG: &[Skill] = &[
    // Knight skills (scale on Strength)
    skill(SkillId::POWER_STRIKE, "Power Strike", Attack, Strength, 4, 30, true, false, None, "Strong physical attack"),
    skill(SkillId::SHIELD_BASH, "Shield Bash", Attack, Strength, 3, 20, true, false, None, "Bash enemy with shield"),
    skill(SkillId::TAUNT, "Taunt", Debuff, Strength, 2, 0, true, false, None, "Draw enemy attention"),
    skill(SkillId::GUARD, "Guard", Buff, Strength, 0, 0, false, false, None, "Double defense for 1 turn"),

    // Black Belt skills (scale on Agility)
    skill(SkillId::FOCUS_STRIKE, "Focus Strike", Attack, Agility, 5, 35, true, false, None, "Concentrated attack"),
    skill(SkillId::COUNTER_STANCE, "Counter", Buff, Agility, 4, 0, false, false, None, "Counter next attack"),
    skill(SkillId::MEDITATION, "Meditation", Buff, Agility, 0, 10, false, false, None, "Restore 10 MP per turn for 3 turns"),

    // Thief skills (scale on Luck)
    skill(SkillId::STEAL, "Steal", Steal, Luck, 3, 0, true, false, None, "Steal item from enemy"),
    skill(SkillId::BACKSTAB, "Backstab", Attack, Luck, 6, 40, true, false, None, "Critical strike"),
    skill(SkillId::SMOKE_BOMB, "Smoke Bomb", Debuff, Luck, 5, 0, true, true, None, "Cover the party's retreat"),
    skill(SkillId::POISON_BLADE, "Poison Blade", Attack, Luck, 5, 20, true, false, payload(StatusKind::Poison, 75, 4), "Attack that poisons enemy"),
    skill(SkillId::FLASH, "Flash", Debuff, Luck, 4, 0, true, false, payload(StatusKind::Blind, 80, 3), "Blind enemy to reduce accuracy"),

    // Sage spells (scale on Intelligence)
    skill(SkillId::FIRE, "Fire", Attack, Intelligence, 4, 25, true, false, None, "Fire magic attack"),
    skill(SkillId::FIRE2, "Fire2", Attack, Intelligence, 8, 45, true, false, None, "Strong fire attack"),
    skill(SkillId::FIRE3, "Fire3", Attack, Intelligence, 16, 70, true, true, None, "Massive fire on all"),
    skill(SkillId::CURE, "Cure", Heal, Intelligence, 5, 40, false, false, None, "Restore HP"),
    skill(SkillId::CURE2, "Cure2", Heal, Intelligence, 10, 80, false, false, None, "Restore more HP"),
    skill(SkillId::TRANQUILITY, "Tranquility", Buff, Intelligence, 0, 8, false, false, None, "Restore 8 MP per turn for 3 turns"),
    skill(SkillId::TIME_WARP, "Time Warp", Debuff, Intelligence, 8, 0, true, false, payload(StatusKind::Slow, 85, 4), "Slow enemy agility"),
    skill(SkillId::MUTE, "Mute", Debuff, Intelligence, 6, 0, true, false, payload(StatusKind::Silence, 80, 3), "Silence enemy magic"),
    skill(SkillId::PETRIFY, "Petrify", Debuff, Intelligence, 12, 0, true, false, payload(StatusKind::Stone, 50, 2), "Turn enemy to stone"),

    // Priest spells (scale on Intelligence)
    skill(SkillId::HEAL, "Heal", Heal, Intelligence, 4, 50, false, false, None, "Restore HP"),
    skill(SkillId::HEAL2, "Heal2", Heal, Intelligence, 8, 100, false, false, None, "Restore lots of HP"),
    skill(SkillId::HEAL3, "Heal3", Heal, Intelligence, 12, 150, false, true, None, "Heal entire party"),
    skill(SkillId::PROTECT, "Protect", Buff, Intelligence, 6, 0, false, false, None, "Increase defense"),
    skill(SkillId::ESUNA, "Esuna", Heal, Intelligence, 5, 0, false, false, None, "Cure status effects"),
    skill(SkillId::PRAYER, "Prayer", Heal, Intelligence, 0, 20, false, true, None, "Small party heal + 5 MP regen for 2 turns"),
    skill(SkillId::BLINDING_LIGHT, "Blind Light", Debuff, Intelligence, 7, 0, true, true, payload(StatusKind::Blind, 70, 3), "Blind all enemies"),

    // Mage spells (scale on Intelligence)
    skill(SkillId::BOLT, "Bolt", Attack, Intelligence, 5, 30, true, false, None, "Lightning attack"),
    skill(SkillId::BOLT2, "Bolt2", Attack, Intelligence, 10, 55, true, false, None, "Strong lightning"),
    skill(SkillId::BOLT3, "Bolt3", Attack, Intelligence, 18, 70, true, true, None, "Massive lightning"),
    skill(SkillId::ICE, "Ice", Attack, Intelligence, 5, 30, true, false, None, "Ice attack"),
    skill(SkillId::ICE2, "Ice2", Attack, Intelligence, 10, 55, true, false, None, "Strong ice attack"),
    skill(SkillId::ICE3, "Ice3", Attack, Intelligence, 18, 70, true, true, None, "Massive ice attack"),
    skill(SkillId::FOCUS, "Focus", Buff, Intelligence, 0, 12, false, false, None, "Restore 12 MP per turn for 3 turns"),
    skill(SkillId::SLOW, "Slow", Debuff, Intelligence, 6, 0, true, false, payload(StatusKind::Slow, 90, 4), "Slow enemy turn order"),
    skill(SkillId::SILENCE, "Silence", Debuff, Intelligence, 5, 0, true, false, payload(StatusKind::Silence, 85, 3), "Prevent enemy magic"),
    skill(SkillId::TOXIC_CLOUD, "Toxic Cloud", Debuff, Intelligence, 10, 0, true, true, payload(StatusKind::Poison, 60, 5), "Poison all enemies"),
    skill(SkillId::STONE_GAZE, "Stone Gaze", Debuff, Intelligence, 14, 0, true, false, payload(StatusKind::Stone, 45, 2), "Petrify enemy"),
];

/// The standard skill catalog.
pub struct SkillCatalog;

impl SkillOracle for SkillCatalog {
    fn skill(&self, id: SkillId) -> Option<&Skill> {
        CATALOG.iter().find(|s| s.id == id)
    }
}

impl SkillCatalog {
    /// Every catalog entry, for tooling and tests.
    pub fn all(&self) -> &'static [Skill] {
        CATALOG
    }
}
