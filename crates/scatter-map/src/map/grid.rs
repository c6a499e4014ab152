#![warn(missing_docs)]

//! Cell storage for the rendered map.

use super::GridPoint;
use crate::error::MapError;

/// Contents of a single map cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MapCell {
    /// Nothing here
    #[default]
    Empty,
    /// Spawn point at the world origin
    Origin,
    /// A scattered point landed in this cell
    Marker,
}

impl MapCell {
    /// Converts the MapCell to the character it is drawn as
    pub fn as_char(&self) -> char {
        match self {
            MapCell::Empty => '.',
            MapCell::Origin => 'O',
            MapCell::Marker => 'X',
        }
    }
}

impl std::fmt::Display for MapCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A fixed-size character map. Rows follow the world x axis and columns
/// the world z axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows (x axis)
    width: usize,
    /// Number of columns (z axis)
    height: usize,
    /// Row-major cell storage
    data: Vec<MapCell>,
}

impl Grid {
    /// Creates a new Grid with every cell empty.
    ///
    /// # Arguments
    /// * `width` - Number of rows, indexed by the x axis
    /// * `height` - Number of columns, indexed by the z axis
    ///
    /// # Returns
    /// * `Result<Self, MapError>` - The created Grid or an error if the dimensions are invalid
    pub fn new(width: usize, height: usize) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::InvalidDimensions {
                width,
                height,
                reason: "width and height must be non-zero",
            });
        }

        let Some(len) = width.checked_mul(height) else {
            return Err(MapError::InvalidDimensions {
                width,
                height,
                reason: "map dimensions too large, would cause overflow",
            });
        };

        Ok(Grid {
            width,
            height,
            data: vec![MapCell::Empty; len],
        })
    }

    fn get_index(&self, p: GridPoint) -> usize {
        p.x * self.height + p.z
    }

    fn out_of_bounds(&self, p: GridPoint) -> MapError {
        MapError::OutOfBounds {
            x: i64::try_from(p.x).unwrap_or(i64::MAX),
            z: i64::try_from(p.z).unwrap_or(i64::MAX),
            width: self.width,
            height: self.height,
        }
    }

    /// Number of rows.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of columns.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell standing for the world origin, `(width / 2, height / 2)`.
    pub fn origin(&self) -> GridPoint {
        GridPoint::new(self.width / 2, self.height / 2)
    }

    /// Marks the origin cell with [`MapCell::Origin`].
    pub fn mark_origin(&mut self) {
        let idx = self.get_index(self.origin());
        self.data[idx] = MapCell::Origin;
    }

    /// Gets the cell at a grid position.
    ///
    /// # Returns
    /// * `Result<MapCell, MapError>` - The cell or an error if out of bounds
    pub fn get(&self, p: GridPoint) -> Result<MapCell, MapError> {
        if p.x < self.width && p.z < self.height {
            Ok(self.data[self.get_index(p)])
        } else {
            Err(self.out_of_bounds(p))
        }
    }

    /// Sets the cell at a grid position, replacing whatever was there.
    ///
    /// # Returns
    /// * `Result<(), MapError>` - Success or error if out of bounds
    pub fn set(&mut self, p: GridPoint, cell: MapCell) -> Result<(), MapError> {
        if p.x < self.width && p.z < self.height {
            let idx = self.get_index(p);
            self.data[idx] = cell;
            Ok(())
        } else {
            Err(self.out_of_bounds(p))
        }
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[MapCell] {
        &self.data
    }

    /// How many cells hold `cell`.
    pub fn count(&self, cell: MapCell) -> usize {
        self.data.iter().filter(|c| **c == cell).count()
    }

    /// Iterates over the rows, first row first.
    pub fn rows(&self) -> std::slice::Chunks<'_, MapCell> {
        self.data.chunks(self.height)
    }
}

impl std::fmt::Display for Grid {
    /// One line per row, every cell followed by a single space.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(25, 25).unwrap();
        assert_eq!(grid.width(), 25);
        assert_eq!(grid.height(), 25);
        assert_eq!(grid.count(MapCell::Empty), 625);
    }

    #[test]
    fn test_invalid_creation() {
        assert!(matches!(
            Grid::new(0, 10),
            Err(MapError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Grid::new(10, 0),
            Err(MapError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Grid::new(usize::MAX, 2),
            Err(MapError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_origin_uses_floor_midpoint() {
        assert_eq!(Grid::new(25, 25).unwrap().origin(), GridPoint::new(12, 12));
        assert_eq!(Grid::new(4, 7).unwrap().origin(), GridPoint::new(2, 3));
    }

    #[test]
    fn test_cell_operations() {
        let mut grid = Grid::new(5, 3).unwrap();
        let p = GridPoint::new(4, 2);

        grid.set(p, MapCell::Marker).unwrap();
        assert_eq!(grid.get(p).unwrap(), MapCell::Marker);
        assert_eq!(grid.count(MapCell::Marker), 1);

        assert!(matches!(
            grid.set(GridPoint::new(5, 0), MapCell::Marker),
            Err(MapError::OutOfBounds { x: 5, z: 0, .. })
        ));
        assert!(matches!(
            grid.get(GridPoint::new(0, 3)),
            Err(MapError::OutOfBounds { x: 0, z: 3, .. })
        ));
    }

    #[test]
    fn test_marker_overwrites_origin() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.mark_origin();
        assert_eq!(grid.get(GridPoint::new(1, 1)).unwrap(), MapCell::Origin);
        grid.set(GridPoint::new(1, 1), MapCell::Marker).unwrap();
        assert_eq!(grid.count(MapCell::Origin), 0);
        assert_eq!(grid.count(MapCell::Marker), 1);
    }

    #[test]
    fn test_display_rows_follow_x() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.mark_origin();
        grid.set(GridPoint::new(0, 2), MapCell::Marker).unwrap();
        assert_eq!(grid.to_string(), ". . X \n. O . \n");
    }
}
