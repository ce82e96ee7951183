//! Bounded per-character buff ledger with duration countdown.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;

/// Types of temporary buffs and stat modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuffKind {
    /// Attack percentage modifier.
    AttackUp,
    /// Defense percentage modifier.
    DefenseUp,
    /// Intelligence percentage modifier.
    IntellectUp,
    /// Agility percentage modifier.
    AgilityUp,
    /// Negative attack percentage modifier.
    AttackDown,
    /// Negative defense percentage modifier.
    DefenseDown,
    /// Negative intelligence percentage modifier.
    IntellectDown,
    /// Negative agility percentage modifier.
    AgilityDown,
    /// Doubled defense while active (the Defend action, Guard skill).
    Defend,
    /// Retaliates with a basic attack when struck, then drops.
    Counter,
    /// Restores `magnitude` MP at the start of each of the owner's turns.
    RegenMp,
}

/// A single active buff instance.
///
/// `magnitude` is a percentage for stat modifiers (50 = +50%), an MP amount
/// for [`BuffKind::RegenMp`], and unused for the stance buffs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveBuff {
    pub kind: BuffKind,
    pub magnitude: i16,
    /// Turns remaining; decremented at the owner's turn start, removed at 0.
    pub turns_left: u8,
}

/// What a ledger tick produced, for the owner to apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuffTick {
    /// Total MP to regenerate this turn (regen ticks before expiry removal).
    pub mp_regen: u16,
}

/// Bounded collection of active buffs, unique by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffLedger {
    buffs: ArrayVec<ActiveBuff, { BattleConfig::MAX_BUFFS }>,
}

impl BuffLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a buff, refreshing magnitude and duration if the kind is already
    /// active. Zero-duration requests and overflow beyond capacity are
    /// silently dropped.
    pub fn add(&mut self, kind: BuffKind, magnitude: i16, duration: u8) {
        if duration == 0 {
            return;
        }
        if let Some(existing) = self.buffs.iter_mut().find(|b| b.kind == kind) {
            existing.magnitude = magnitude;
            existing.turns_left = duration;
            return;
        }
        if !self.buffs.is_full() {
            self.buffs.push(ActiveBuff {
                kind,
                magnitude,
                turns_left: duration,
            });
        }
    }

    /// Removes a buff immediately.
    pub fn remove(&mut self, kind: BuffKind) {
        self.buffs.retain(|b| b.kind != kind);
    }

    /// Removes every active buff.
    pub fn clear(&mut self) {
        self.buffs.clear();
    }

    /// Checks whether a buff kind is active.
    pub fn has(&self, kind: BuffKind) -> bool {
        self.buffs.iter().any(|b| b.kind == kind)
    }

    /// Sums magnitudes of every active buff of the given kind.
    ///
    /// Same-kind re-application refreshes rather than stacks, but the sum
    /// keeps this future-proof for stacking by distinct source.
    pub fn modifier(&self, kind: BuffKind) -> i16 {
        self.buffs
            .iter()
            .filter(|b| b.kind == kind)
            .map(|b| b.magnitude)
            .sum()
    }

    /// Turn-start tick: decrements every duration, collects regen-MP amounts
    /// for buffs still active on this tick, and removes expired entries.
    pub fn tick(&mut self) -> BuffTick {
        let mut outcome = BuffTick::default();
        for buff in &mut self.buffs {
            if buff.turns_left > 0 {
                buff.turns_left -= 1;
            }
            // Regen is collected before the expiry removal below, so a buff
            // still pays out on the tick it runs out.
            if buff.kind == BuffKind::RegenMp {
                outcome.mp_regen += buff.magnitude.max(0) as u16;
            }
        }
        self.buffs.retain(|b| b.turns_left > 0);
        outcome
    }

    /// Returns an iterator over active buffs.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveBuff> {
        self.buffs.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.buffs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buffs.len()
    }
}
