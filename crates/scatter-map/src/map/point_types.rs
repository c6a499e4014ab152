/// Represents a point in grid coordinates (cell indices).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridPoint {
    /// The row index, following the world x axis.
    pub x: usize,
    /// The column index, following the world z axis.
    pub z: usize,
}

impl GridPoint {
    /// Creates a new `GridPoint`.
    #[must_use]
    pub const fn new(x: usize, z: usize) -> Self {
        Self { x, z }
    }
}
