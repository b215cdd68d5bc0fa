//! Boundary contributor selection for the fill engine
//!
//! A strategy decides which boundary pixels contribute to each hole pixel. The
//! weighted accumulation itself is shared and lives in
//! [`fill`](crate::algorithm::fill).

use std::borrow::Cow;

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::io::error::{HoleFillError, Result, invalid_parameter};
use crate::spatial::point::Point;

/// Selects the boundary pixels that contribute to one hole pixel
pub trait FillStrategy {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Boundary pixels contributing to `hole_pixel`
    ///
    /// # Errors
    ///
    /// Returns [`HoleFillError::EmptyBoundary`] if the strategy cannot select
    /// the contributors it requires
    fn contributors<'a>(
        &mut self,
        hole_pixel: Point,
        boundary: &'a [Point],
    ) -> Result<Cow<'a, [Point]>>;
}

/// Every boundary pixel contributes to every hole pixel
///
/// Costs `O(|H| x |B|)` and involves no randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactStrategy;

impl FillStrategy for ExactStrategy {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn contributors<'a>(
        &mut self,
        _hole_pixel: Point,
        boundary: &'a [Point],
    ) -> Result<Cow<'a, [Point]>> {
        Ok(Cow::Borrowed(boundary))
    }
}

/// Handling of a boundary smaller than the requested sample size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplePolicy {
    /// Sample `min(k, |B|)` pixels
    #[default]
    Clamp,
    /// Report the pixel as lacking contributors
    Strict,
}

/// A fresh uniform sample of `k` boundary pixels per hole pixel
///
/// Samples are drawn without replacement from a seeded generator, so a fixed
/// seed over the same region reproduces the same fill.
#[derive(Debug, Clone)]
pub struct SampledStrategy {
    sample_size: usize,
    policy: SamplePolicy,
    rng: StdRng,
}

impl SampledStrategy {
    /// Create a sampled strategy
    ///
    /// # Errors
    ///
    /// Returns an error if `sample_size` is zero
    pub fn new(sample_size: usize, seed: u64, policy: SamplePolicy) -> Result<Self> {
        if sample_size == 0 {
            return Err(invalid_parameter(
                "sample_size",
                &sample_size,
                &"at least one boundary pixel must be sampled",
            ));
        }

        Ok(Self {
            sample_size,
            policy,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Requested sample size `k`
    pub const fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Policy for boundaries smaller than `k`
    pub const fn policy(&self) -> SamplePolicy {
        self.policy
    }
}

impl FillStrategy for SampledStrategy {
    fn name(&self) -> &'static str {
        "sampled"
    }

    fn contributors<'a>(
        &mut self,
        hole_pixel: Point,
        boundary: &'a [Point],
    ) -> Result<Cow<'a, [Point]>> {
        if boundary.len() < self.sample_size && self.policy == SamplePolicy::Strict {
            return Err(HoleFillError::EmptyBoundary {
                position: hole_pixel.to_array(),
                available: boundary.len(),
                required: self.sample_size,
            });
        }

        let sample: Vec<Point> = boundary
            .choose_multiple(&mut self.rng, self.sample_size)
            .copied()
            .collect();
        Ok(Cow::Owned(sample))
    }
}
