/// Detection-then-fill pipeline
pub mod executor;
/// Weighted boundary interpolation shared by all strategies
pub mod fill;
/// Exact and sampled contributor selection
pub mod strategy;
