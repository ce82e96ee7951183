//! Stored character statistics.

/// Per-character stored stats, shared by party members, enemies and bosses.
///
/// All values are bounded non-negative integers. Damage and heal math is done
/// in `i32` by the combat module and narrowed back through the clamped
/// mutators here, so the invariants below hold after every operation:
///
/// - `hp <= max_hp` and `mp <= max_mp`
/// - `hp == 0` means the character is incapacitated for all targeting and
///   turn purposes
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterStats {
    pub max_hp: u16,
    pub hp: u16,
    pub max_mp: u16,
    pub mp: u16,
    pub strength: u16,
    pub defense: u16,
    pub intelligence: u16,
    pub agility: u16,
    pub luck: u16,
    pub level: u8,
    pub experience: u32,
}

impl CharacterStats {
    /// Creates level-1 stats at full resources.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        max_hp: u16,
        max_mp: u16,
        strength: u16,
        defense: u16,
        intelligence: u16,
        agility: u16,
        luck: u16,
    ) -> Self {
        Self {
            max_hp,
            hp: max_hp,
            max_mp,
            mp: max_mp,
            strength,
            defense,
            intelligence,
            agility,
            luck,
            level: 1,
            experience: 0,
        }
    }

    /// Quick check whether the character can act or be targeted.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Applies damage, clamping HP at zero. Returns true if this killed.
    pub fn take_damage(&mut self, damage: u16) -> bool {
        self.hp = self.hp.saturating_sub(damage);
        self.hp == 0
    }

    /// Restores HP up to the maximum. Dead characters cannot be healed.
    ///
    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        if !self.is_alive() {
            return 0;
        }
        let restored = amount.min(self.max_hp - self.hp);
        self.hp += restored;
        restored
    }

    /// Deducts MP, clamping at zero.
    pub fn spend_mp(&mut self, cost: u16) {
        self.mp = self.mp.saturating_sub(cost);
    }

    /// Restores MP up to the maximum. Returns the amount actually restored.
    pub fn restore_mp(&mut self, amount: u16) -> u16 {
        let restored = amount.min(self.max_mp - self.mp);
        self.mp += restored;
        restored
    }

    /// Restores HP and MP to their maximums.
    pub fn restore_all(&mut self) {
        self.hp = self.max_hp;
        self.mp = self.max_mp;
    }
}
