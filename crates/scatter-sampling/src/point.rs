//! Planar integer points, sampling regions and ordered point sets.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SamplingError;

/// A planar coordinate `(x, z)` in world units.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// World-frame x coordinate.
    pub x: i64,
    /// World-frame z coordinate.
    pub z: i64,
}

impl Point {
    /// Creates a new `Point`.
    #[must_use]
    pub const fn new(x: i64, z: i64) -> Self {
        Self { x, z }
    }

    /// Exact squared Euclidean distance to `other`.
    ///
    /// Computed on widened integers; saturates instead of overflowing for
    /// coordinates near the ends of the `i64` range.
    #[must_use]
    pub fn distance_squared(&self, other: &Point) -> u128 {
        let dx = (i128::from(other.x) - i128::from(self.x)).unsigned_abs();
        let dz = (i128::from(other.z) - i128::from(self.z)).unsigned_abs();
        dx.saturating_mul(dx).saturating_add(dz.saturating_mul(dz))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.z)
    }
}

/// Inclusive rectangular bounds points are drawn from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRegion"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    x_min: i64,
    x_max: i64,
    z_min: i64,
    z_max: i64,
}

impl Region {
    /// Creates a region spanning `[x_min, x_max] × [z_min, z_max]`.
    ///
    /// # Errors
    /// Returns [`SamplingError::InvalidRegion`] if either range is empty.
    pub fn new(x_min: i64, x_max: i64, z_min: i64, z_max: i64) -> Result<Self, SamplingError> {
        if x_min > x_max {
            return Err(SamplingError::InvalidRegion {
                axis: "x",
                min: x_min,
                max: x_max,
            });
        }
        if z_min > z_max {
            return Err(SamplingError::InvalidRegion {
                axis: "z",
                min: z_min,
                max: z_max,
            });
        }
        Ok(Self {
            x_min,
            x_max,
            z_min,
            z_max,
        })
    }

    /// A square region `[-half_extent, half_extent]²` centered on the origin.
    #[must_use]
    pub const fn square(half_extent: u32) -> Self {
        let h = half_extent as i64;
        Self {
            x_min: -h,
            x_max: h,
            z_min: -h,
            z_max: h,
        }
    }

    /// Inclusive x range.
    pub fn x_range(&self) -> (i64, i64) {
        (self.x_min, self.x_max)
    }

    /// Inclusive z range.
    pub fn z_range(&self) -> (i64, i64) {
        (self.z_min, self.z_max)
    }

    /// Whether `p` lies inside the region, bounds included.
    pub fn contains(&self, p: Point) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.z_min..=self.z_max).contains(&p.z)
    }
}

/// Unchecked bounds as they appear in serialized form.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRegion {
    x_min: i64,
    x_max: i64,
    z_min: i64,
    z_max: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRegion> for Region {
    type Error = SamplingError;

    fn try_from(raw: RawRegion) -> Result<Self, Self::Error> {
        Region::new(raw.x_min, raw.x_max, raw.z_min, raw.z_max)
    }
}

/// Points in the order they were accepted.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in generation order.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points in generation order.
    pub fn iter(&self) -> core::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Smallest squared distance between any two distinct points, or `None`
    /// with fewer than two points.
    pub fn min_pairwise_distance_squared(&self) -> Option<u128> {
        self.points
            .iter()
            .enumerate()
            .flat_map(|(i, a)| self.points[i + 1..].iter().map(move |b| a.distance_squared(b)))
            .min()
    }
}

impl From<Vec<Point>> for PointSet {
    /// Wraps already-placed points; separation is not checked.
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = core::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
