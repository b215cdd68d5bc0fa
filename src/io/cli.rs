//! Command-line interface for filling one image/mask pair

use crate::algorithm::executor::{FillMethod, FillerConfig, HoleFiller};
use crate::algorithm::fill::{FillReport, UnfilledPolicy};
use crate::algorithm::strategy::SamplePolicy;
use crate::io::configuration::{
    DEFAULT_EPSILON, DEFAULT_EXPONENT, DEFAULT_SAMPLE_SIZE, DEFAULT_SEED,
};
use crate::io::error::Result;
use crate::io::image::{export_grid_as_png, load_grid};
use crate::io::progress::FillProgress;
use crate::math::weighting::DefaultWeighting;
use crate::spatial::region::{Connectivity, EdgePolicy};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "holefill")]
#[command(
    author,
    version,
    about = "Fill masked holes in a grayscale image by weighted boundary interpolation"
)]
/// Command-line arguments for the hole filling tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Source image
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Hole mask (dark pixels mark the hole)
    #[arg(value_name = "MASK")]
    pub mask: PathBuf,

    /// Output PNG path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Neighbor connectivity used to find the hole boundary
    #[arg(short, long, value_enum, default_value = "8")]
    pub connectivity: Connectivity,

    /// Use the sampled approximation instead of the exact fill
    #[arg(long)]
    pub sampled: bool,

    /// Boundary pixels sampled per hole pixel
    #[arg(short = 'k', long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub samples: usize,

    /// Random seed for reproducible sampling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Distance exponent z of the weighting function
    #[arg(short = 'z', long, default_value_t = DEFAULT_EXPONENT)]
    pub exponent: i32,

    /// Epsilon term of the weighting function
    #[arg(short, long, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Handling of hole pixels on the image edge
    #[arg(long = "edge", value_enum, default_value_t = EdgePolicy::Skip)]
    pub edge_policy: EdgePolicy,

    /// Keep pixels without boundary contributors as holes instead of failing
    #[arg(long)]
    pub leave_unfilled: bool,

    /// Fail when the boundary is smaller than the sample size
    #[arg(long)]
    pub strict_samples: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Fill configuration described by the arguments
    pub const fn filler_config(&self) -> FillerConfig {
        let method = if self.sampled {
            FillMethod::Sampled {
                sample_size: self.samples,
                seed: self.seed,
                policy: if self.strict_samples {
                    SamplePolicy::Strict
                } else {
                    SamplePolicy::Clamp
                },
            }
        } else {
            FillMethod::Exact
        };

        FillerConfig {
            connectivity: self.connectivity,
            edge_policy: self.edge_policy,
            unfilled_policy: if self.leave_unfilled {
                UnfilledPolicy::LeaveHole
            } else {
                UnfilledPolicy::Fail
            },
            method,
        }
    }
}

/// Loads, fills and exports one image/mask pair
pub struct FileProcessor {
    cli: Cli,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the full load, fill and export sequence
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The weighting parameters are invalid
    /// - The image or mask cannot be loaded, or their sizes differ
    /// - Detection or filling fails under the configured policies
    /// - The output cannot be written
    pub fn process(&self) -> Result<FillReport> {
        let start_time = Instant::now();
        let weighting = DefaultWeighting::new(self.cli.exponent, self.cli.epsilon)?;
        let filler = HoleFiller::new(self.cli.filler_config(), weighting);

        let mut grid = load_grid(&self.cli.image, &self.cli.mask)?;
        log::info!(
            "Loaded '{}' ({}x{}, {} hole pixels)",
            self.cli.image.display(),
            grid.rows(),
            grid.cols(),
            grid.hole_count()
        );

        let progress = if self.cli.should_show_progress() {
            FillProgress::new(&self.cli.image)
        } else {
            FillProgress::hidden()
        };

        let report = filler.run_with_observer(&mut grid, |processed, total| {
            progress.update(processed, total);
        });
        progress.finish();
        let report = report?;

        export_grid_as_png(&grid, &self.cli.output)?;

        log::info!(
            "Processing complete in {:.2?}: {} pixels filled, {} left unfilled",
            start_time.elapsed(),
            report.filled,
            report.unfilled.len()
        );

        Ok(report)
    }
}
