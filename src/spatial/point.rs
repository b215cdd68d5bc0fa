//! Pixel coordinates with coordinate-only identity

use std::fmt;

/// Location of a pixel in a [`Grid`](crate::spatial::Grid)
///
/// Identity is the coordinate pair alone. Intensities live in the grid, so a
/// point stays the same set member while its pixel is being filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Row index (y)
    pub row: usize,
    /// Column index (x)
    pub col: usize,
}

impl Point {
    /// Create a point at the given row and column
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Coordinates as `[row, col]`, the form used in error reports
    pub const fn to_array(self) -> [usize; 2] {
        [self.row, self.col]
    }

    /// Apply a signed `[row, col]` offset, `None` if either coordinate goes negative
    pub const fn checked_offset(self, offset: [isize; 2]) -> Option<Self> {
        match (
            self.row.checked_add_signed(offset[0]),
            self.col.checked_add_signed(offset[1]),
        ) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }

    /// Row-major index into a grid with `cols` columns
    pub const fn linear_index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}

impl From<[usize; 2]> for Point {
    fn from(coordinates: [usize; 2]) -> Self {
        Self::new(coordinates[0], coordinates[1])
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
