//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (e.g. [`crate::engine::ActionError`]) are defined in
//! their respective modules alongside the operations they validate. This
//! module provides the shared severity classification used across all of them.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Refused**: the action was rejected without mutating any state; the
///   caller may submit a different action for the same turn.
/// - **Validation**: invalid input (unknown skill, bad actor index); should
///   not be retried without changes.
/// - **Contract**: the caller violated the engine's usage contract (acting on
///   a finished battle, settling rewards without victory). These indicate
///   bugs in the driving layer and are reported instead of panicking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable refusal - retry with an alternative action.
    Refused,

    /// Validation error - invalid input, should not retry unchanged.
    Validation,

    /// Caller contract violation - defensively reported, never fatal.
    Contract,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Refused => "refused",
            Self::Validation => "validation",
            Self::Contract => "contract",
        }
    }

    /// Returns true if the caller can recover by choosing another action.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Refused)
    }
}
