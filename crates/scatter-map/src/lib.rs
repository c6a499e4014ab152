#![warn(missing_docs)]

//! Coarse ASCII maps of scattered points.
//!
//! Points are shifted and scaled onto a small character grid around a spawn
//! origin, then printed together with their raw coordinates.

pub mod error;
pub mod map;
pub mod render;

pub use error::MapError;
pub use map::{Grid, GridPoint, MapCell, OutOfRange, Projection};
pub use render::{COORDINATES_HEADER, MAP_HEADER, MapRenderer};
