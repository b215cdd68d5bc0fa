//! Distance-decaying weighting between a hole pixel and a boundary pixel

use crate::io::configuration::{DEFAULT_EPSILON, DEFAULT_EXPONENT};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::point::Point;

/// Influence of boundary pixel `v` on hole pixel `u`
///
/// Implementations must be pure functions of the two coordinates and return
/// finite, non-negative weights. The fill engine rejects anything else.
pub trait WeightingFunction {
    /// Weight of `v` when reconstructing `u`
    fn weight(&self, u: Point, v: Point) -> f64;
}

impl<F> WeightingFunction for F
where
    F: Fn(Point, Point) -> f64,
{
    fn weight(&self, u: Point, v: Point) -> f64 {
        self(u, v)
    }
}

/// Planar Euclidean distance between two pixel coordinates
pub fn euclidean_distance(u: Point, v: Point) -> f64 {
    let dr = u.row as f64 - v.row as f64;
    let dc = u.col as f64 - v.col as f64;
    dr.hypot(dc)
}

/// `1 / (distance^z + epsilon)`
///
/// Symmetric in its arguments and strictly decreasing with distance for any
/// positive exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultWeighting {
    exponent: i32,
    epsilon: f64,
}

impl Default for DefaultWeighting {
    fn default() -> Self {
        Self {
            exponent: DEFAULT_EXPONENT,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl DefaultWeighting {
    /// Create a weighting with a custom exponent and epsilon
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not a positive finite number or the
    /// exponent is not positive
    pub fn new(exponent: i32, epsilon: f64) -> Result<Self> {
        if exponent <= 0 {
            return Err(invalid_parameter(
                "exponent",
                &exponent,
                &"exponent must be positive for the weight to decay with distance",
            ));
        }
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(invalid_parameter(
                "epsilon",
                &epsilon,
                &"epsilon must be a positive finite number",
            ));
        }
        Ok(Self { exponent, epsilon })
    }

    /// Distance exponent `z`
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Additive term `epsilon`
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl WeightingFunction for DefaultWeighting {
    fn weight(&self, u: Point, v: Point) -> f64 {
        1.0 / (euclidean_distance(u, v).powi(self.exponent) + self.epsilon)
    }
}
