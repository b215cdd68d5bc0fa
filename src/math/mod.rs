//! Mathematical utilities for the fill engine

/// Distance-decaying weighting functions
pub mod weighting;
