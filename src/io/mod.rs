//! Input/output operations and supporting infrastructure

/// Command-line interface and file processing
pub mod cli;
/// Constants and configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image and mask decoding, grayscale export
pub mod image;
/// Progress display
pub mod progress;
