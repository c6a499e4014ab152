//! Projection of world coordinates onto grid cells.
//!
//! World coordinates may be negative, so each axis is first shifted by an
//! offset and then divided down to cell size. With an offset equal to the
//! half-extent of the sampling region, the region maps onto the whole grid
//! and the world origin lands on the grid's center cell.

#![warn(missing_docs)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use scatter_sampling::Point;

use super::GridPoint;
use crate::error::MapError;

/// What to do with a point whose projected cell lies outside the grid.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutOfRange {
    /// Snap the index onto the nearest edge cell.
    #[default]
    Clamp,
    /// Leave the point off the map.
    Skip,
    /// Fail with [`MapError::OutOfBounds`].
    Error,
}

/// Offset-and-scale transform from world coordinates to cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    offset_x: i64,
    offset_z: i64,
    divisor_x: i64,
    divisor_z: i64,
    width: usize,
    height: usize,
}

impl Projection {
    /// Builds the projection for a `width` × `height` grid.
    ///
    /// Each axis is scaled by `(offset / cells) * 2` with integer division,
    /// using that axis's own cell count.
    ///
    /// # Errors
    /// * [`MapError::InvalidDimensions`] if either dimension is zero.
    /// * [`MapError::InvalidScale`] if a divisor comes out as zero or negative.
    pub fn new(offset_x: i64, offset_z: i64, width: usize, height: usize) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::InvalidDimensions {
                width,
                height,
                reason: "width and height must be non-zero",
            });
        }
        let divisor_x = axis_divisor("x", offset_x, width)?;
        let divisor_z = axis_divisor("z", offset_z, height)?;
        Ok(Self {
            offset_x,
            offset_z,
            divisor_x,
            divisor_z,
            width,
            height,
        })
    }

    /// Per-axis divisors `(x, z)`.
    pub fn divisors(&self) -> (i64, i64) {
        (self.divisor_x, self.divisor_z)
    }

    /// Raw cell indices `(row, column)` for `p`, before any bounds check.
    ///
    /// Uses floor division, so shifted coordinates below zero give negative
    /// indices rather than rounding toward zero.
    pub fn project(&self, p: Point) -> (i64, i64) {
        let x = p.x.saturating_add(self.offset_x).div_euclid(self.divisor_x);
        let z = p.z.saturating_add(self.offset_z).div_euclid(self.divisor_z);
        (x, z)
    }

    /// The cell `p` lands in under `policy`, or `None` if it is skipped.
    ///
    /// # Errors
    /// [`MapError::OutOfBounds`] when the cell is off the grid and `policy`
    /// is [`OutOfRange::Error`].
    pub fn cell_for(&self, p: Point, policy: OutOfRange) -> Result<Option<GridPoint>, MapError> {
        let (x, z) = self.project(p);
        let in_x = to_index(x, self.width);
        let in_z = to_index(z, self.height);
        if let (Some(x), Some(z)) = (in_x, in_z) {
            return Ok(Some(GridPoint::new(x, z)));
        }

        match policy {
            OutOfRange::Clamp => Ok(Some(GridPoint::new(
                clamp_index(x, self.width),
                clamp_index(z, self.height),
            ))),
            OutOfRange::Skip => Ok(None),
            OutOfRange::Error => Err(MapError::OutOfBounds {
                x,
                z,
                width: self.width,
                height: self.height,
            }),
        }
    }
}

fn axis_divisor(axis: &'static str, offset: i64, dimension: usize) -> Result<i64, MapError> {
    let cells = i64::try_from(dimension).unwrap_or(i64::MAX);
    let divisor = (offset / cells).saturating_mul(2);
    if divisor <= 0 {
        return Err(MapError::InvalidScale {
            axis,
            offset,
            dimension,
        });
    }
    Ok(divisor)
}

fn to_index(i: i64, len: usize) -> Option<usize> {
    usize::try_from(i).ok().filter(|&i| i < len)
}

fn clamp_index(i: i64, len: usize) -> usize {
    usize::try_from(i.max(0)).map_or(len - 1, |i| i.min(len - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Projection {
        Projection::new(10_000, 10_000, 25, 25).unwrap()
    }

    #[test]
    fn test_reference_divisors() {
        assert_eq!(reference().divisors(), (800, 800));
    }

    #[test]
    fn test_each_axis_uses_its_own_dimension() {
        let p = Projection::new(10_000, 10_000, 25, 50).unwrap();
        assert_eq!(p.divisors(), (800, 400));
        assert_eq!(p.project(Point::new(0, 0)), (12, 25));
    }

    #[test]
    fn test_projection_of_region_corners() {
        let p = reference();
        assert_eq!(p.project(Point::new(0, 0)), (12, 12));
        assert_eq!(p.project(Point::new(-10_000, -10_000)), (0, 0));
        assert_eq!(p.project(Point::new(9_999, 9_999)), (24, 24));
        assert_eq!(p.project(Point::new(10_000, -10_000)), (25, 0));
    }

    #[test]
    fn test_negative_shift_floors_down() {
        assert_eq!(reference().project(Point::new(-10_001, 0)), (-1, 12));
    }

    #[test]
    fn test_zero_divisor_is_rejected() {
        assert!(matches!(
            Projection::new(10, 10_000, 25, 25),
            Err(MapError::InvalidScale { axis: "x", .. })
        ));
        assert!(matches!(
            Projection::new(10_000, -10_000, 25, 25),
            Err(MapError::InvalidScale { axis: "z", .. })
        ));
        assert!(matches!(
            Projection::new(10_000, 10_000, 0, 25),
            Err(MapError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_out_of_range_policies() {
        let p = reference();
        let edge = Point::new(10_000, 10_000);

        assert_eq!(
            p.cell_for(edge, OutOfRange::Clamp).unwrap(),
            Some(GridPoint::new(24, 24))
        );
        assert_eq!(p.cell_for(edge, OutOfRange::Skip).unwrap(), None);
        assert!(matches!(
            p.cell_for(edge, OutOfRange::Error),
            Err(MapError::OutOfBounds { x: 25, z: 25, .. })
        ));

        let below = Point::new(-20_000, 0);
        assert_eq!(
            p.cell_for(below, OutOfRange::Clamp).unwrap(),
            Some(GridPoint::new(0, 12))
        );
    }

    #[test]
    fn test_in_range_ignores_policy() {
        let p = reference();
        for policy in [OutOfRange::Clamp, OutOfRange::Skip, OutOfRange::Error] {
            assert_eq!(
                p.cell_for(Point::new(400, -400), policy).unwrap(),
                Some(GridPoint::new(13, 12))
            );
        }
    }
}
