//! Fixed-size intensity grid with a hole sentinel
//!
//! Every cell holds either a normalized intensity in `[0, 1]` or
//! [`HOLE_SENTINEL`]. Dimensions are fixed at construction; only cell values
//! change afterwards.

use ndarray::Array2;

use crate::io::configuration::{HOLE_SENTINEL, MAX_GRID_DIMENSION};
use crate::io::error::{HoleFillError, Result, invalid_cell};
use crate::spatial::point::Point;

/// Grayscale intensity grid indexed by `[row, col]`
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Array2<f32>,
}

impl Grid {
    /// Wrap an intensity array after validating it
    ///
    /// # Errors
    ///
    /// Returns [`HoleFillError::InvalidGridState`] if:
    /// - The array has zero rows or columns
    /// - A dimension exceeds the configured maximum
    /// - A cell is neither the sentinel nor a finite value in `[0, 1]`
    pub fn new(cells: Array2<f32>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 {
            return Err(HoleFillError::InvalidGridState {
                position: None,
                reason: format!("grid must not be empty (got {rows}x{cols})"),
            });
        }
        if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
            return Err(HoleFillError::InvalidGridState {
                position: None,
                reason: format!(
                    "grid {rows}x{cols} exceeds the maximum dimension {MAX_GRID_DIMENSION}"
                ),
            });
        }

        for ((row, col), &value) in cells.indexed_iter() {
            if !is_valid_intensity(value) {
                return Err(invalid_cell(
                    row,
                    col,
                    &format!("value {value} is neither the hole sentinel nor within [0, 1]"),
                ));
            }
        }

        Ok(Self { cells })
    }

    /// Build a grid from row vectors
    ///
    /// # Errors
    ///
    /// Returns [`HoleFillError::InvalidGridState`] if the rows differ in
    /// length, or for any of the conditions checked by [`Grid::new`]
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != width)
        {
            return Err(HoleFillError::InvalidGridState {
                position: None,
                reason: format!(
                    "row {row} has {} columns, expected {width} (grid is not rectangular)",
                    values.len()
                ),
            });
        }

        let flat: Vec<f32> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((height, width), flat).map_err(|e| {
            HoleFillError::InvalidGridState {
                position: None,
                reason: e.to_string(),
            }
        })?;

        Self::new(cells)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Check whether a point addresses a cell of this grid
    pub fn contains(&self, point: Point) -> bool {
        point.row < self.rows() && point.col < self.cols()
    }

    /// Intensity at a point, `None` outside the grid
    pub fn intensity(&self, point: Point) -> Option<f32> {
        self.cells.get([point.row, point.col]).copied()
    }

    /// Check whether a point currently holds the hole sentinel
    #[allow(clippy::float_cmp)]
    pub fn is_hole(&self, point: Point) -> bool {
        self.intensity(point) == Some(HOLE_SENTINEL)
    }

    /// Overwrite the intensity at a point
    ///
    /// # Errors
    ///
    /// Returns [`HoleFillError::InvalidGridState`] if the point is outside the
    /// grid or the value is neither the sentinel nor within `[0, 1]`
    pub fn set_intensity(&mut self, point: Point, value: f32) -> Result<()> {
        if !is_valid_intensity(value) {
            return Err(invalid_cell(
                point.row,
                point.col,
                &format!("refusing to store value {value}"),
            ));
        }

        let dimensions = self.dimensions();
        let cell = self.cells.get_mut([point.row, point.col]).ok_or_else(|| {
            invalid_cell(
                point.row,
                point.col,
                &format!("point lies outside the {}x{} grid", dimensions.0, dimensions.1),
            )
        })?;
        *cell = value;
        Ok(())
    }

    /// Neighbor of a point at a signed `[row, col]` offset, `None` outside the grid
    pub fn offset(&self, point: Point, offset: [isize; 2]) -> Option<Point> {
        point
            .checked_offset(offset)
            .filter(|&neighbor| self.contains(neighbor))
    }

    /// Number of cells currently holding the sentinel
    #[allow(clippy::float_cmp)]
    pub fn hole_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == HOLE_SENTINEL).count()
    }

    /// Borrow the underlying intensity array
    pub const fn as_array(&self) -> &Array2<f32> {
        &self.cells
    }

    /// Consume the grid and return the intensity array
    pub fn into_array(self) -> Array2<f32> {
        self.cells
    }
}

/// Check whether a value may be stored in a grid cell
#[allow(clippy::float_cmp)]
pub fn is_valid_intensity(value: f32) -> bool {
    value == HOLE_SENTINEL || (0.0..=1.0).contains(&value)
}
