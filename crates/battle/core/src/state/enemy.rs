//! Enemy state, generated fresh for each battle.

use crate::state::buffs::BuffLedger;
use crate::state::status::{StatusKind, StatusLedger};

/// Enemy species, ordered weakest to strongest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyKind {
    Goblin,
    Orc,
    Skeleton,
    Wolf,
    Dragon,
    Demon,
}

impl EnemyKind {
    /// Ordinal used by stat scaling formulas (stronger kinds scale higher).
    pub const fn ordinal(&self) -> u16 {
        match self {
            Self::Goblin => 0,
            Self::Orc => 1,
            Self::Skeleton => 2,
            Self::Wolf => 3,
            Self::Dragon => 4,
            Self::Demon => 5,
        }
    }
}

/// A battle enemy.
///
/// Generated at battle start from the bestiary's level-scaled tables, owned
/// by the [`crate::state::Battle`] by value and discarded with it; nothing
/// persists across battles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Enemy {
    pub name: &'static str,
    pub kind: EnemyKind,
    pub max_hp: u16,
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub agility: u16,
    pub level: u8,
    pub exp_reward: u32,
    pub gold_reward: u32,
    /// Idempotence marker: set on successful theft, checked again by drops.
    pub stolen_from: bool,
    pub buffs: BuffLedger,
    pub status: StatusLedger,
}

impl Enemy {
    /// Quick check whether the enemy can act or be targeted.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Applies damage, clamping HP at zero and waking a sleeping enemy.
    ///
    /// Returns true if this killed the enemy.
    pub fn take_damage(&mut self, damage: u16) -> bool {
        self.hp = self.hp.saturating_sub(damage);
        if self.status.has(StatusKind::Sleep) {
            self.status.remove(StatusKind::Sleep);
        }
        self.hp == 0
    }

    /// Effective defense for damage resolution: aggregated buff percentage
    /// modifiers applied at the point of use, Defend stance doubling last.
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

    /// Effective attack for damage resolution.
    pub fn effective_attack(&self) -> i32 {
        use crate::state::buffs::BuffKind;
        let modifier = i32::from(self.buffs.modifier(BuffKind::AttackUp))
            + i32::from(self.buffs.modifier(BuffKind::AttackDown));
        (i32::from(self.attack) * (100 + modifier) / 100).max(0)
    }
}
