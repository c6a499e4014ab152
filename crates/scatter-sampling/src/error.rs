//! Error types for the sampling library.

use thiserror::Error;

/// Errors that can occur while generating a point set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplingError {
    /// The lower bound of an axis lies above its upper bound.
    #[error("invalid region: {axis} range [{min}, {max}] is empty")]
    InvalidRegion {
        /// Axis name, `"x"` or `"z"`.
        axis: &'static str,
        /// Supplied lower bound.
        min: i64,
        /// Supplied upper bound.
        max: i64,
    },

    /// A sampler parameter is unusable.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The region could not host another separated point within the attempt budget.
    #[error(
        "domain too small: placed {placed} of {requested} points, gave up after {attempts} attempts"
    )]
    DomainTooSmall {
        /// Points accepted before giving up.
        placed: usize,
        /// Points requested.
        requested: usize,
        /// Draws spent on the point that could not be placed.
        attempts: usize,
    },
}
