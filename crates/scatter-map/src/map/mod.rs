//! Grid-related functionality for rendering.
//!
//! This module provides the character grid the points are drawn on and the
//! projection from world coordinates onto its cells.

pub mod grid;
pub mod point_types;
pub mod projection;

pub use grid::{Grid, MapCell};
pub use point_types::GridPoint;
pub use projection::{OutOfRange, Projection};
