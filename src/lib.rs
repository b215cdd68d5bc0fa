//! Hole filling for grayscale images by distance-weighted boundary interpolation
//!
//! A masked region of a grid is reconstructed from the pixels bordering it:
//! each missing pixel becomes a weighted mean of boundary intensities, with
//! weights decaying with distance. The exact fill sums over the whole boundary;
//! the sampled fill draws a fixed-size random subset per pixel.

#![forbid(unsafe_code)]

/// Fill strategies, the shared accumulation loop and the detection/fill pipeline
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Weighting functions
pub mod math;
/// Pixel grid, coordinates and hole/boundary detection
pub mod spatial;

pub use io::error::{HoleFillError, Result};
