//! Error types for SquadForge

use thiserror::Error;

use crate::player::PlayerId;

/// Main error type for SquadForge operations.
///
/// These are fatal for the call that produced them. Rejected squad
/// mutations and infeasible optimization requests are reported as values,
/// not through this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SquadForgeError {
    /// Malformed constraint set
    #[error("Invalid constraints: {0}")]
    InvalidConstraints(String),

    /// A player id is both locked and excluded
    #[error("Player {0} is both locked and excluded")]
    LockedAndExcluded(PlayerId),

    /// The player pool contains the same id more than once
    #[error("Player {0} appears more than once in the pool")]
    DuplicatePlayer(PlayerId),

    /// Configuration file exists but could not be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Optimization was cancelled before completion
    #[error("Optimization was cancelled")]
    Cancelled,

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for SquadForge operations
pub type Result<T> = std::result::Result<T, SquadForgeError>;
