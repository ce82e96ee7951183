//! Battle-relevant state types.
//!
//! - [`party`]: party roster, members, jobs
//! - [`enemy`] / [`boss`]: the opposition
//! - [`battle`]: the battle aggregate and turn order
//! - [`buffs`] / [`status`]: bounded temporary-modifier ledgers
//! - [`inventory`] / [`equipment`]: the shared inventory and gear slots

pub mod battle;
pub mod boss;
pub mod buffs;
pub mod enemy;
pub mod equipment;
pub mod inventory;
pub mod party;
pub mod status;

pub use battle::{ActorSlot, Battle, fixed_turn_order};
pub use boss::{Boss, KeyItem};
pub use buffs::{ActiveBuff, BuffKind, BuffLedger, BuffTick};
pub use enemy::{Enemy, EnemyKind};
pub use equipment::{EquipSlot, EquipmentSlots};
pub use inventory::{
    ConsumableEffect, ConsumableKind, EquipError, EquipmentPiece, Inventory, ItemHandle, ItemStack,
    JobMask,
};
pub use party::{Job, Party, PartyMember};
pub use status::{ActiveStatus, StatusFlags, StatusKind, StatusLedger};
