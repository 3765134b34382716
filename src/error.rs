//! Error types for the solver.

use thiserror::Error;

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or searching tilings.
///
/// Ordinary infeasibility is never an error: an operator that finds no
/// valid move returns its input unchanged. The only hard failure is a
/// degenerate rectangle, which would break the partition invariant and
/// aborts construction instead of being silently tolerated.
#[derive(Debug, Error)]
pub enum Error {
    /// A rectangle with non-positive width or height.
    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),

    /// Invalid search configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
