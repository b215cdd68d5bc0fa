//! Hole and boundary extraction
//!
//! The hole `H` is every sentinel cell; the boundary `B` is every non-hole cell
//! adjacent to a hole cell under the chosen connectivity. Both are computed once
//! and frozen: filling the hole later never recomputes or shrinks either set.

use bitvec::vec::BitVec;

use crate::io::error::{HoleFillError, Result, invalid_parameter};
use crate::spatial::grid::Grid;
use crate::spatial::point::Point;

const ORTHOGONAL_OFFSETS: [[isize; 2]; 4] = [[-1, 0], [1, 0], [0, -1], [0, 1]];

const FULL_OFFSETS: [[isize; 2]; 8] = [
    [-1, 0],
    [1, 0],
    [0, -1],
    [0, 1],
    [-1, -1],
    [-1, 1],
    [1, -1],
    [1, 1],
];

/// Neighbor adjacency model for boundary detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Connectivity {
    /// Orthogonal neighbors only
    #[value(name = "4")]
    Four,
    /// Orthogonal and diagonal neighbors
    #[default]
    #[value(name = "8")]
    Eight,
}

impl Connectivity {
    /// Neighbor offsets as `[row, col]` deltas
    pub const fn offsets(self) -> &'static [[isize; 2]] {
        match self {
            Self::Four => &ORTHOGONAL_OFFSETS,
            Self::Eight => &FULL_OFFSETS,
        }
    }

    /// Number of neighbors examined per hole pixel
    pub const fn neighbor_count(self) -> usize {
        self.offsets().len()
    }
}

impl TryFrom<u8> for Connectivity {
    type Error = HoleFillError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            _ => Err(invalid_parameter(
                "connectivity",
                &value,
                &"connectivity must be 4 or 8",
            )),
        }
    }
}

/// Handling of neighbors that fall outside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EdgePolicy {
    /// Treat out-of-range neighbors as absent
    #[default]
    Skip,
    /// Report the first out-of-range neighbor as an error
    Error,
}

/// Frozen hole and boundary sets of a grid
///
/// The hole is stored in row-major scan order and the boundary in discovery
/// order, so iteration is deterministic for a given grid and connectivity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    hole: Vec<Point>,
    boundary: Vec<Point>,
    hole_mask: BitVec,
    boundary_mask: BitVec,
    cols: usize,
    connectivity: Connectivity,
}

impl Region {
    /// Detect the hole and its boundary
    ///
    /// # Errors
    ///
    /// Returns [`HoleFillError::BoundaryOutOfRange`] if a hole pixel touches the
    /// grid edge and `edge_policy` is [`EdgePolicy::Error`]
    pub fn detect(grid: &Grid, connectivity: Connectivity, edge_policy: EdgePolicy) -> Result<Self> {
        let (rows, cols) = grid.dimensions();
        let cell_count = rows * cols;

        let mut hole = Vec::new();
        let mut hole_mask: BitVec = BitVec::repeat(false, cell_count);
        for row in 0..rows {
            for col in 0..cols {
                let point = Point::new(row, col);
                if grid.is_hole(point) {
                    hole.push(point);
                    hole_mask.set(point.linear_index(cols), true);
                }
            }
        }

        let mut boundary = Vec::new();
        let mut boundary_mask: BitVec = BitVec::repeat(false, cell_count);
        for &point in &hole {
            for &offset in connectivity.offsets() {
                let Some(neighbor) = grid.offset(point, offset) else {
                    if edge_policy == EdgePolicy::Error {
                        return Err(HoleFillError::BoundaryOutOfRange {
                            position: point.to_array(),
                            offset,
                            grid_dimensions: (rows, cols),
                        });
                    }
                    continue;
                };

                let index = neighbor.linear_index(cols);
                let is_hole = hole_mask.get(index).is_some_and(|bit| *bit);
                let seen = boundary_mask.get(index).is_some_and(|bit| *bit);
                if !is_hole && !seen {
                    boundary_mask.set(index, true);
                    boundary.push(neighbor);
                }
            }
        }

        log::debug!(
            "Detected {} hole pixels and {} boundary pixels ({}-connectivity)",
            hole.len(),
            boundary.len(),
            connectivity.neighbor_count()
        );

        Ok(Self {
            hole,
            boundary,
            hole_mask,
            boundary_mask,
            cols,
            connectivity,
        })
    }

    /// Hole pixels in row-major order
    pub fn hole(&self) -> &[Point] {
        &self.hole
    }

    /// Boundary pixels in discovery order, each listed once
    pub fn boundary(&self) -> &[Point] {
        &self.boundary
    }

    /// Check hole membership in constant time
    pub fn contains_hole(&self, point: Point) -> bool {
        self.member(&self.hole_mask, point)
    }

    /// Check boundary membership in constant time
    pub fn contains_boundary(&self, point: Point) -> bool {
        self.member(&self.boundary_mask, point)
    }

    /// Connectivity the boundary was detected with
    pub const fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Check whether the grid had no hole at detection time
    pub fn is_empty(&self) -> bool {
        self.hole.is_empty()
    }

    fn member(&self, mask: &BitVec, point: Point) -> bool {
        if point.col >= self.cols {
            return false;
        }
        mask.get(point.linear_index(self.cols))
            .is_some_and(|bit| *bit)
    }
}
