//! Boss state, owned by the dungeon and borrowed by the engine.

use crate::state::buffs::BuffLedger;

/// Key items awarded for defeating a dungeon boss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyItem {
    EarthCrystal,
    WaterCrystal,
    FireCrystal,
    WindCrystal,
}

/// A dungeon boss.
///
/// One per dungeon, persisting across the dungeon's lifetime with its
/// `defeated` flag. The battle engine borrows it mutably per call and never
/// copies or destroys it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Boss {
    pub name: &'static str,
    pub max_hp: u16,
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub level: u8,
    pub key_item: KeyItem,
    pub defeated: bool,
    pub buffs: BuffLedger,
}

impl Boss {
    pub fn new(
        name: &'static str,
        max_hp: u16,
        attack: u16,
        defense: u16,
        level: u8,
        key_item: KeyItem,
    ) -> Self {
        Self {
            name,
            max_hp,
            hp: max_hp,
            attack,
            defense,
            level,
            key_item,
            defeated: false,
            buffs: BuffLedger::new(),
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Applies damage, clamping HP at zero and setting `defeated` on kill.
    ///
    /// Returns true if this killed the boss.
    pub fn take_damage(&mut self, damage: u16) -> bool {
        self.hp = self.hp.saturating_sub(damage);
        if self.hp == 0 {
            self.defeated = true;
        }
        self.hp == 0
    }

    /// Effective defense with buff modifiers applied at the point of use.
    pub fn effective_defense(&self) -> i32 {
        use crate::state::buffs::BuffKind;
        let modifier = i32::from(self.buffs.modifier(BuffKind::DefenseUp))
            + i32::from(self.buffs.modifier(BuffKind::DefenseDown));
        let mut defense = i32::from(self.defense) * (100 + modifier) / 100;
        if self.buffs.has(BuffKind::Defend) {
            defense *= 2;
        }
        defense.max(0)
    }

    /// Effective attack with buff modifiers applied at the point of use.
    pub fn effective_attack(&self) -> i32 {
        use crate::state::buffs::BuffKind;
        let modifier = i32::from(self.buffs.modifier(BuffKind::AttackUp))
            + i32::from(self.buffs.modifier(BuffKind::AttackDown));
        (i32::from(self.attack) * (100 + modifier) / 100).max(0)
    }
}
