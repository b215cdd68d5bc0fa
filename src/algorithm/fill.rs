//! Weighted boundary interpolation shared by every fill strategy
//!
//! Each hole pixel `u` receives `Σ w(u,v)·I(v) / Σ w(u,v)` over the contributors
//! its strategy selects. Boundary pixels are only read, and the hole and
//! boundary sets come from a frozen [`Region`], so the order in which hole
//! pixels are written never changes any other pixel's value.

use crate::algorithm::strategy::FillStrategy;
use crate::io::error::{HoleFillError, Result, computation_error, invalid_cell};
use crate::math::weighting::WeightingFunction;
use crate::spatial::grid::Grid;
use crate::spatial::point::Point;
use crate::spatial::region::Region;

/// Handling of hole pixels that cannot be reconstructed
///
/// A pixel cannot be reconstructed when it has no contributors, when every
/// contributor carries zero weight, or when a strict sample cannot be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnfilledPolicy {
    /// Abort the pass with [`HoleFillError::EmptyBoundary`]
    #[default]
    Fail,
    /// Keep the sentinel and record the pixel in [`FillReport::unfilled`]
    LeaveHole,
}

/// Outcome of a fill pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillReport {
    /// Number of hole pixels that received a value
    pub filled: usize,
    /// Hole pixels left at the sentinel
    pub unfilled: Vec<Point>,
    /// Name of the strategy that produced the fill
    pub strategy: &'static str,
}

impl FillReport {
    /// Check whether every hole pixel was filled
    pub fn is_complete(&self) -> bool {
        self.unfilled.is_empty()
    }
}

/// Fill every hole pixel of `region` in place
///
/// # Errors
///
/// Returns an error if:
/// - A hole pixel cannot be reconstructed under [`UnfilledPolicy::Fail`]
/// - The weighting function returns a negative or non-finite weight
/// - A boundary pixel holds the sentinel or lies outside the grid
pub fn fill_region<W, S>(
    grid: &mut Grid,
    region: &Region,
    weighting: &W,
    strategy: &mut S,
    policy: UnfilledPolicy,
) -> Result<FillReport>
where
    W: WeightingFunction + ?Sized,
    S: FillStrategy + ?Sized,
{
    fill_region_with_observer(grid, region, weighting, strategy, policy, |_| {})
}

/// Fill every hole pixel, reporting the running count after each pixel
///
/// # Errors
///
/// Same conditions as [`fill_region`]
pub fn fill_region_with_observer<W, S, O>(
    grid: &mut Grid,
    region: &Region,
    weighting: &W,
    strategy: &mut S,
    policy: UnfilledPolicy,
    mut observer: O,
) -> Result<FillReport>
where
    W: WeightingFunction + ?Sized,
    S: FillStrategy + ?Sized,
    O: FnMut(usize),
{
    let boundary = region.boundary();
    let mut report = FillReport {
        filled: 0,
        unfilled: Vec::new(),
        strategy: strategy.name(),
    };

    for (processed, &hole_pixel) in region.hole().iter().enumerate() {
        let estimate = match strategy.contributors(hole_pixel, boundary) {
            Ok(contributors) => weighted_average(grid, hole_pixel, &contributors, weighting)?
                .ok_or(HoleFillError::EmptyBoundary {
                    position: hole_pixel.to_array(),
                    available: contributors.len(),
                    required: 1,
                }),
            Err(error) => Err(error),
        };

        match estimate {
            Ok(value) => {
                grid.set_intensity(hole_pixel, (value as f32).clamp(0.0, 1.0))?;
                report.filled += 1;
            }
            Err(HoleFillError::EmptyBoundary { .. }) if policy == UnfilledPolicy::LeaveHole => {
                log::trace!("Leaving hole pixel {hole_pixel} unfilled");
                report.unfilled.push(hole_pixel);
            }
            Err(error) => return Err(error),
        }

        observer(processed + 1);
    }

    if !report.is_complete() {
        log::warn!(
            "{} of {} hole pixels had no usable boundary contributors",
            report.unfilled.len(),
            region.hole().len()
        );
    }

    Ok(report)
}

/// Weighted mean of contributor intensities, `None` when the total weight is zero
///
/// Accumulates in `f64` regardless of the grid's storage precision.
///
/// # Errors
///
/// Returns an error if a weight is negative or non-finite, or a contributor
/// is not a valid boundary cell of `grid`
pub fn weighted_average<W>(
    grid: &Grid,
    hole_pixel: Point,
    contributors: &[Point],
    weighting: &W,
) -> Result<Option<f64>>
where
    W: WeightingFunction + ?Sized,
{
    let mut numerator = 0.0_f64;
    let mut denominator = 0.0_f64;

    for &boundary_pixel in contributors {
        let weight = weighting.weight(hole_pixel, boundary_pixel);
        if !weight.is_finite() || weight < 0.0 {
            return Err(computation_error(
                "weighting",
                &format!(
                    "weight {weight} between hole pixel {hole_pixel} and boundary pixel {boundary_pixel} is not a finite non-negative number"
                ),
            ));
        }

        let intensity = grid
            .intensity(boundary_pixel)
            .filter(|value| *value >= 0.0)
            .ok_or_else(|| {
                invalid_cell(
                    boundary_pixel.row,
                    boundary_pixel.col,
                    &"boundary pixel is outside the grid or holds the hole sentinel",
                )
            })?;

        numerator = weight.mul_add(f64::from(intensity), numerator);
        denominator += weight;
    }

    Ok((denominator > 0.0).then(|| numerator / denominator))
}
