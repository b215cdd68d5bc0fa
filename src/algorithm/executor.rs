//! Detection-then-fill pipeline over a single grid

use crate::{
    algorithm::fill::{FillReport, UnfilledPolicy, fill_region_with_observer},
    algorithm::strategy::{ExactStrategy, FillStrategy, SamplePolicy, SampledStrategy},
    io::configuration::{DEFAULT_SAMPLE_SIZE, DEFAULT_SEED},
    io::error::Result,
    math::weighting::{DefaultWeighting, WeightingFunction},
    spatial::grid::Grid,
    spatial::region::{Connectivity, EdgePolicy, Region},
};

/// Which fill strategy a pass uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMethod {
    /// Full boundary sum for every hole pixel
    #[default]
    Exact,
    /// Random boundary subset per hole pixel
    Sampled {
        /// Boundary pixels drawn per hole pixel
        sample_size: usize,
        /// Seed for the sampling generator
        seed: u64,
        /// Handling of boundaries smaller than `sample_size`
        policy: SamplePolicy,
    },
}

impl FillMethod {
    /// Sampled method with the default sample size and seed
    pub const fn sampled() -> Self {
        Self::Sampled {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
            policy: SamplePolicy::Clamp,
        }
    }

    /// Instantiate the strategy for this method
    ///
    /// # Errors
    ///
    /// Returns an error if the sampled parameters are invalid
    pub fn build(self) -> Result<Box<dyn FillStrategy>> {
        Ok(match self {
            Self::Exact => Box::new(ExactStrategy),
            Self::Sampled {
                sample_size,
                seed,
                policy,
            } => Box::new(SampledStrategy::new(sample_size, seed, policy)?),
        })
    }
}

/// Parameters of a hole filling pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillerConfig {
    /// Neighbor model used to find the boundary
    pub connectivity: Connectivity,
    /// Handling of hole pixels on the grid edge
    pub edge_policy: EdgePolicy,
    /// Handling of hole pixels without usable contributors
    pub unfilled_policy: UnfilledPolicy,
    /// Fill strategy
    pub method: FillMethod,
}

/// Runs region detection followed by a fill pass
pub struct HoleFiller<W: WeightingFunction> {
    config: FillerConfig,
    weighting: W,
}

impl HoleFiller<DefaultWeighting> {
    /// Create a filler using `1 / (d^3 + 0.01)` weighting
    pub fn with_default_weighting(config: FillerConfig) -> Self {
        Self::new(config, DefaultWeighting::default())
    }
}

impl<W: WeightingFunction> HoleFiller<W> {
    /// Create a filler with a caller-supplied weighting function
    pub const fn new(config: FillerConfig, weighting: W) -> Self {
        Self { config, weighting }
    }

    /// Configuration of this filler
    pub const fn config(&self) -> &FillerConfig {
        &self.config
    }

    /// Weighting function of this filler
    pub const fn weighting(&self) -> &W {
        &self.weighting
    }

    /// Detect the hole of `grid` and fill it in place
    ///
    /// # Errors
    ///
    /// Returns an error if detection fails under the configured edge policy,
    /// the method parameters are invalid, or the fill pass fails
    pub fn run(&self, grid: &mut Grid) -> Result<FillReport> {
        self.run_with_observer(grid, |_, _| {})
    }

    /// Detect and fill, reporting `(processed, total)` after each hole pixel
    ///
    /// # Errors
    ///
    /// Same conditions as [`HoleFiller::run`]
    pub fn run_with_observer<O>(&self, grid: &mut Grid, mut observer: O) -> Result<FillReport>
    where
        O: FnMut(usize, usize),
    {
        let region = Region::detect(grid, self.config.connectivity, self.config.edge_policy)?;
        let mut strategy = self.config.method.build()?;

        if region.is_empty() {
            log::warn!("Mask marks no hole pixels; grid left unchanged");
        }

        let total = region.hole().len();
        log::info!(
            "Filling {total} hole pixels from {} boundary pixels ({} strategy)",
            region.boundary().len(),
            strategy.name()
        );

        let report = fill_region_with_observer(
            grid,
            &region,
            &self.weighting,
            strategy.as_mut(),
            self.config.unfilled_policy,
            |processed| observer(processed, total),
        )?;

        log::debug!(
            "Fill finished: {} filled, {} unfilled",
            report.filled,
            report.unfilled.len()
        );

        Ok(report)
    }
}
