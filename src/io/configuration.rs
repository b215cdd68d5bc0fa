//! Fill constants and runtime configuration defaults

/// Intensity marking a cell as part of the hole
pub const HOLE_SENTINEL: f32 = -1.0;

// Default weighting: 1 / (distance^z + epsilon)
/// Distance exponent of the default weighting function
pub const DEFAULT_EXPONENT: i32 = 3;
/// Additive term keeping the default weight finite at distance zero
pub const DEFAULT_EPSILON: f64 = 0.01;

/// Boundary pixels drawn per hole pixel by the sampled strategy
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

/// Default neighbor model for boundary detection
pub const DEFAULT_CONNECTIVITY: u8 = 8;

// Loader settings
/// Mask luma below this value marks a hole pixel
pub const MASK_THRESHOLD: f32 = 0.5;
/// Red contribution to luma
pub const LUMA_RED: f64 = 0.299;
/// Green contribution to luma
pub const LUMA_GREEN: f64 = 0.587;
/// Blue contribution to luma
pub const LUMA_BLUE: f64 = 0.114;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 20_000;

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Hole pixels between progress bar redraws
pub const PROGRESS_UPDATE_INTERVAL: usize = 256;
