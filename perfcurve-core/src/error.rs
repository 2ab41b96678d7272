/// Error types for perfcurve-core.
///
/// Only broken preconditions are errors. Degenerate metrics (zero
/// denominators) are NaN values, not errors.
use thiserror::Error;

/// Invariant violations surfaced by the checked constructors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PerfError {
    /// Input claimed to be sorted descending by score was not.
    #[error("invariant violation: score {current} at position {index} is greater than preceding score {previous}")]
    NotDescending {
        /// Position of the first out-of-order example.
        index: usize,
        previous: f64,
        current: f64,
    },

    /// A sequence of snapshots does not describe a threshold sweep.
    #[error("invariant violation: {0}")]
    MalformedPath(String),
}

pub type Result<T> = std::result::Result<T, PerfError>;
