//! This module defines the error types used by the `scatter-map` crate.

#![warn(missing_docs)]

use thiserror::Error;

/// Error type for map operations.
///
/// This enum covers invalid map parameters, cells outside the grid and
/// failures while writing the rendered report.
#[derive(Debug, Error)]
pub enum MapError {
    /// Error for invalid map dimensions.
    /// This variant is returned when map width or height is zero, or their product overflows.
    #[error("invalid map dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        /// Requested number of rows.
        width: usize,
        /// Requested number of columns.
        height: usize,
        /// What is wrong with them.
        reason: &'static str,
    },
    /// Error for an offset too small to scale down onto the grid.
    /// This variant is returned when `(offset / dimension) * 2` comes out as zero.
    #[error("invalid scale on {axis} axis: offset {offset} over {dimension} cells gives a zero divisor")]
    InvalidScale {
        /// Axis name, `"x"` or `"z"`.
        axis: &'static str,
        /// Offset supplied for the axis.
        offset: i64,
        /// Grid cells along the axis.
        dimension: usize,
    },
    /// Error for out-of-bounds access.
    /// This variant is returned when a cell index lies outside `[0, width) × [0, height)`.
    #[error("map access out of bounds: cell ({x}, {z}) outside {width}x{height} grid")]
    OutOfBounds {
        /// Row index along the x axis.
        x: i64,
        /// Column index along the z axis.
        z: i64,
        /// Grid rows.
        width: usize,
        /// Grid columns.
        height: usize,
    },
    /// Error while formatting the report.
    #[error(transparent)]
    Format(#[from] std::fmt::Error),
    /// Error while writing the report.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
