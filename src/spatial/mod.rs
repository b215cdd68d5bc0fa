//! Spatial data structures and region detection
//!
//! This module contains spatial-related functionality including:
//! - Pixel coordinates
//! - The fixed-size intensity grid
//! - Hole and boundary extraction

/// Intensity grid with a hole sentinel
pub mod grid;
/// Pixel coordinates
pub mod point;
/// Hole and boundary detection
pub mod region;

pub use grid::Grid;
pub use point::Point;
pub use region::{Connectivity, EdgePolicy, Region};
