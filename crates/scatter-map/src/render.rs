//! Text report: the raw coordinates followed by the relative-position map.

use std::fmt::Write;
use std::io;

use scatter_sampling::PointSet;
use tracing::{debug, warn};

use crate::error::MapError;
use crate::map::{Grid, MapCell, OutOfRange, Projection};

/// Header printed before the coordinate list.
pub const COORDINATES_HEADER: &str = "X and Z Coordinates::::::";
/// Header printed before the grid.
pub const MAP_HEADER: &str = "Relative positions:::::::::";

/// Draws point sets onto a fixed-size map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapRenderer {
    width: usize,
    height: usize,
    projection: Projection,
    policy: OutOfRange,
}

impl MapRenderer {
    /// Creates a renderer for a `width` × `height` map whose axes are shifted
    /// by `offset_x` and `offset_z` before scaling.
    ///
    /// # Errors
    /// See [`Projection::new`].
    pub fn new(width: usize, height: usize, offset_x: i64, offset_z: i64) -> Result<Self, MapError> {
        let projection = Projection::new(offset_x, offset_z, width, height)?;
        Ok(Self {
            width,
            height,
            projection,
            policy: OutOfRange::default(),
        })
    }

    /// Sets how points projecting outside the map are handled.
    pub fn with_policy(mut self, policy: OutOfRange) -> Self {
        self.policy = policy;
        self
    }

    /// The projection in use.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Builds the map: origin marked `O`, then every point marked `X` in
    /// generation order. Later marks replace earlier ones, the origin included.
    pub fn build_grid(&self, points: &PointSet) -> Result<Grid, MapError> {
        let mut grid = Grid::new(self.width, self.height)?;
        grid.mark_origin();

        for p in points {
            match self.projection.cell_for(*p, self.policy)? {
                Some(cell) => grid.set(cell, MapCell::Marker)?,
                None => warn!(x = p.x, z = p.z, "Point projects outside the map, skipped"),
            }
        }

        debug!(
            markers = grid.count(MapCell::Marker),
            points = points.len(),
            "Built map"
        );
        Ok(grid)
    }

    /// Renders the coordinate list and the map into a `String`.
    pub fn report_string(&self, points: &PointSet) -> Result<String, MapError> {
        let grid = self.build_grid(points)?;

        let mut out = String::new();
        writeln!(out, "{}", COORDINATES_HEADER)?;
        for p in points {
            writeln!(out, "{}", p)?;
        }
        writeln!(out, "{}", MAP_HEADER)?;
        write!(out, "{}", grid)?;
        Ok(out)
    }

    /// Writes the report to `out`.
    pub fn write_report<W: io::Write>(&self, points: &PointSet, mut out: W) -> Result<(), MapError> {
        let report = self.report_string(points)?;
        out.write_all(report.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Prints the report to standard output.
    pub fn render(&self, points: &PointSet) -> Result<(), MapError> {
        let stdout = io::stdout();
        self.write_report(points, stdout.lock())
    }
}
