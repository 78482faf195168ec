//! Error types for the core model.

use crate::id::{AttributeId, OptionId};

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating templates and characters.
///
/// Stale-index errors are distinct from validation findings: a stale index
/// means the caller must re-resolve the position (the list changed under
/// it) and retry, while validation findings are reported as
/// [`crate::validate::ValidationIssue`] values and never raised as errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An index captured earlier no longer refers to a valid position.
    #[error("stale index {index}: list has {len} entries (re-resolve and retry)")]
    StaleIndex {
        /// The out-of-range index the caller supplied.
        index: usize,
        /// The list length at the time of the operation.
        len: usize,
    },

    /// An option referenced by ID is not present on the template or character.
    #[error("option not found: {0}")]
    OptionNotFound(OptionId),

    /// An attribute referenced by ID is not present.
    #[error("attribute not found: {0}")]
    AttributeNotFound(AttributeId),
}
