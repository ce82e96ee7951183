//! Status effects: bitset for quick checks plus a duration-tracked ledger.
//!
//! The bitset answers "is this character poisoned?" in O(1); the ledger
//! carries per-effect countdowns. [`StatusLedger`] keeps both in sync, so
//! callers only ever go through it.

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::BattleConfig;

/// Types of status effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusKind {
    /// Damage over time: 5-10% of max HP at the start of each turn.
    Poison,
    /// 50% chance to lose the turn.
    Paralysis,
    /// Cannot act; woken when damaged.
    Sleep,
    /// Offensive actions hit a random target instead of the chosen one.
    Confusion,
    /// Physical attacks miss 50% of the time.
    Blind,
    /// Reduced agility. The fixed turn order gives this no behavioral hook.
    Slow,
    /// Cannot use skills or magic.
    Silence,
    /// Cannot act while petrified.
    Stone,
}

bitflags! {
    /// Quick-check bitset of active status effects.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StatusFlags: u16 {
        const POISON    = 1 << 0;
        const PARALYSIS = 1 << 1;
        const SLEEP     = 1 << 2;
        const CONFUSION = 1 << 3;
        const BLIND     = 1 << 4;
        const SLOW      = 1 << 5;
        const SILENCE   = 1 << 6;
        const STONE     = 1 << 7;
    }
}

impl From<StatusKind> for StatusFlags {
    fn from(kind: StatusKind) -> Self {
        match kind {
            StatusKind::Poison => StatusFlags::POISON,
            StatusKind::Paralysis => StatusFlags::PARALYSIS,
            StatusKind::Sleep => StatusFlags::SLEEP,
            StatusKind::Confusion => StatusFlags::CONFUSION,
            StatusKind::Blind => StatusFlags::BLIND,
            StatusKind::Slow => StatusFlags::SLOW,
            StatusKind::Silence => StatusFlags::SILENCE,
            StatusKind::Stone => StatusFlags::STONE,
        }
    }
}

/// A single status effect with its remaining duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveStatus {
    pub kind: StatusKind,
    /// Turns remaining; decremented at the owner's turn start, removed at 0.
    pub turns_left: u8,
}

/// Bounded set of active status effects, deduplicated by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusLedger {
    flags: StatusFlags,
    effects: ArrayVec<ActiveStatus, { BattleConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a status, refreshing the duration if the kind is already
    /// active. Zero-duration requests and overflow beyond the capacity of
    /// distinct types are silently dropped.
    pub fn apply(&mut self, kind: StatusKind, duration: u8) {
        if duration == 0 {
            return;
        }
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == kind) {
            existing.turns_left = duration;
            return;
        }
        if !self.effects.is_full() {
            self.effects.push(ActiveStatus {
                kind,
                turns_left: duration,
            });
            self.flags |= kind.into();
        }
    }

    /// Removes a status immediately.
    pub fn remove(&mut self, kind: StatusKind) {
        self.effects.retain(|e| e.kind != kind);
        self.flags -= kind.into();
    }

    /// Clears every status effect.
    pub fn clear(&mut self) {
        self.effects.clear();
        self.flags = StatusFlags::empty();
    }

    /// Removes every status whose flag is set in `cured` (item cures).
    pub fn clear_matching(&mut self, cured: StatusFlags) {
        self.effects
            .retain(|e| !cured.contains(StatusFlags::from(e.kind)));
        self.flags -= cured;
    }

    /// Checks whether a status is active.
    #[inline]
    pub fn has(&self, kind: StatusKind) -> bool {
        self.flags.contains(kind.into())
    }

    /// The raw bitset, for snapshotting.
    pub fn flags(&self) -> StatusFlags {
        self.flags
    }

    /// Turn-end tick: decrements durations and removes expired statuses.
    ///
    /// Behavioral consequences (skip, DOT, redirect) are evaluated against
    /// the active set before this is called, so a duration-1 status affects
    /// exactly one of the owner's turns.
    pub fn tick(&mut self) {
        for effect in &mut self.effects {
            if effect.turns_left > 0 {
                effect.turns_left -= 1;
            }
        }
        let mut flags = StatusFlags::empty();
        self.effects.retain(|e| e.turns_left > 0);
        for effect in &self.effects {
            flags |= effect.kind.into();
        }
        self.flags = flags;
    }

    /// Returns an iterator over active statuses.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveStatus> {
        self.effects.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_refreshes_duration_not_appends() {
        let mut ledger = StatusLedger::new();
        ledger.apply(StatusKind::Poison, 4);
        ledger.apply(StatusKind::Poison, 2);
        assert_eq!(ledger.iter().count(), 1);
        assert_eq!(ledger.iter().next().unwrap().turns_left, 2);
        assert!(ledger.has(StatusKind::Poison));
    }

    #[test]
    fn at_most_four_distinct_types() {
        let mut ledger = StatusLedger::new();
        ledger.apply(StatusKind::Poison, 3);
        ledger.apply(StatusKind::Blind, 3);
        ledger.apply(StatusKind::Slow, 3);
        ledger.apply(StatusKind::Silence, 3);
        ledger.apply(StatusKind::Stone, 3);
        assert_eq!(ledger.iter().count(), 4);
        assert!(!ledger.has(StatusKind::Stone));
    }

    #[test]
    fn tick_expires_and_clears_flag() {
        let mut ledger = StatusLedger::new();
        ledger.apply(StatusKind::Silence, 1);
        ledger.apply(StatusKind::Poison, 2);

        ledger.tick();
        assert!(!ledger.has(StatusKind::Silence));
        assert!(ledger.has(StatusKind::Poison));

        ledger.tick();
        assert!(ledger.is_empty());
        assert_eq!(ledger.flags(), StatusFlags::empty());
    }

    #[test]
    fn remove_keeps_flags_in_sync() {
        let mut ledger = StatusLedger::new();
        ledger.apply(StatusKind::Sleep, 3);
        ledger.remove(StatusKind::Sleep);
        assert!(!ledger.has(StatusKind::Sleep));
        assert!(ledger.is_empty());
    }
}
