//! Error types for the dice engine.

/// Errors that can occur during dice operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A roll was requested with no dice. At least one die (the wild die)
    /// must be rolled.
    #[error("invalid dice count: {0} (must be at least 1)")]
    InvalidDiceCount(u32),
}

/// Convenience result type for dice operations.
pub type MechResult<T> = Result<T, MechError>;
