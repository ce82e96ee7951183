/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Percent chance (1-100) that fleeing a regular battle succeeds.
    pub flee_chance: u8,

    /// Percent chance (1-100) that a defeated enemy drops a consumable.
    pub drop_chance: u8,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum party members participating in a battle.
    pub const MAX_PARTY_SIZE: usize = 4;
    /// Maximum enemies in a regular battle.
    pub const MAX_ENEMIES: usize = 4;
    /// Turn order capacity: every party slot plus every enemy/boss slot.
    pub const MAX_TURN_SLOTS: usize = Self::MAX_PARTY_SIZE + Self::MAX_ENEMIES;
    /// Maximum concurrent buffs per character.
    pub const MAX_BUFFS: usize = 4;
    /// Maximum concurrent status effect types per character.
    pub const MAX_STATUS_EFFECTS: usize = 4;
    /// Maximum skills a party member can know.
    pub const MAX_KNOWN_SKILLS: usize = 8;
    /// Maximum consumable stacks in the shared inventory.
    pub const MAX_ITEM_STACKS: usize = 20;
    /// Maximum equipment pieces in the shared inventory.
    pub const MAX_EQUIPMENT: usize = 20;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FLEE_CHANCE: u8 = 50;
    pub const DEFAULT_DROP_CHANCE: u8 = 25;

    /// Steal success floor and cap, in percent.
    pub const STEAL_CHANCE_FLOOR: i32 = 10;
    pub const STEAL_CHANCE_CAP: i32 = 90;

    /// Boss battles reward `level * BOSS_REWARD_PER_LEVEL` EXP and gold.
    pub const BOSS_REWARD_PER_LEVEL: u32 = 100;

    pub fn new() -> Self {
        Self {
            flee_chance: Self::DEFAULT_FLEE_CHANCE,
            drop_chance: Self::DEFAULT_DROP_CHANCE,
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
