//! Error types for grid validation, region detection, filling and file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all hole filling operations
#[derive(Debug)]
pub enum HoleFillError {
    /// Failed to decode an image or mask from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode the filled grid to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Image and mask do not share the same dimensions
    DimensionMismatch {
        /// Image dimensions (rows, cols)
        image: (usize, usize),
        /// Mask dimensions (rows, cols)
        mask: (usize, usize),
    },

    /// Grid is empty, ragged, or holds a value outside `{-1} ∪ [0, 1]`
    InvalidGridState {
        /// Offending cell as `[row, col]`, when a single cell is at fault
        position: Option<[usize; 2]>,
        /// Description of the violated invariant
        reason: String,
    },

    /// A hole pixel's neighbor lies outside the grid
    ///
    /// Only raised under [`EdgePolicy::Error`](crate::spatial::region::EdgePolicy::Error);
    /// the default policy treats such neighbors as absent.
    BoundaryOutOfRange {
        /// Hole pixel as `[row, col]`
        position: [usize; 2],
        /// Neighbor offset that left the grid
        offset: [isize; 2],
        /// Grid dimensions (rows, cols)
        grid_dimensions: (usize, usize),
    },

    /// A hole pixel has too few boundary contributors to compute a value
    ///
    /// Raised for an empty boundary, a zero total weight, or a strict sample
    /// that cannot be drawn from the available boundary.
    EmptyBoundary {
        /// Hole pixel as `[row, col]`
        position: [usize; 2],
        /// Number of usable contributors
        available: usize,
        /// Number of contributors the strategy requires
        required: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for HoleFillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::DimensionMismatch { image, mask } => {
                write!(
                    f,
                    "Mask size {}x{} does not match image size {}x{}",
                    mask.0, mask.1, image.0, image.1
                )
            }
            Self::InvalidGridState { position, reason } => match position {
                Some([row, col]) => {
                    write!(f, "Invalid grid state at ({row}, {col}): {reason}")
                }
                None => write!(f, "Invalid grid state: {reason}"),
            },
            Self::BoundaryOutOfRange {
                position,
                offset,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "Neighbor offset ({}, {}) of hole pixel ({}, {}) leaves the {}x{} grid",
                    offset[0],
                    offset[1],
                    position[0],
                    position[1],
                    grid_dimensions.0,
                    grid_dimensions.1
                )
            }
            Self::EmptyBoundary {
                position,
                available,
                required,
            } => {
                write!(
                    f,
                    "Hole pixel ({}, {}) has {available} boundary contributors, {required} required",
                    position[0], position[1]
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for HoleFillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for hole filling results
pub type Result<T> = std::result::Result<T, HoleFillError>;

impl From<image::ImageError> for HoleFillError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for HoleFillError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> HoleFillError {
    HoleFillError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> HoleFillError {
    HoleFillError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a grid state error for a single offending cell
pub fn invalid_cell(row: usize, col: usize, reason: &impl ToString) -> HoleFillError {
    HoleFillError::InvalidGridState {
        position: Some([row, col]),
        reason: reason.to_string(),
    }
}
