//! Tests for fill constants and defaults

#[cfg(test)]
mod tests {
    use holefill::io::configuration::{
        DEFAULT_CONNECTIVITY, DEFAULT_EPSILON, DEFAULT_EXPONENT, DEFAULT_SAMPLE_SIZE,
        DEFAULT_SEED, HOLE_SENTINEL, LUMA_BLUE, LUMA_GREEN, LUMA_RED, MASK_THRESHOLD,
    };
    use holefill::spatial::Connectivity;

    #[test]
    fn test_weighting_defaults() {
        assert_eq!(DEFAULT_EXPONENT, 3);
        assert!((DEFAULT_EPSILON - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sample_size_default() {
        assert_eq!(DEFAULT_SAMPLE_SIZE, 10);
    }

    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Sentinel must lie outside the normalized intensity range
    #[test]
    fn test_sentinel_outside_intensity_range() {
        assert!(!(0.0..=1.0).contains(&HOLE_SENTINEL));
    }

    #[test]
    fn test_default_connectivity_is_supported() {
        assert_eq!(
            Connectivity::try_from(DEFAULT_CONNECTIVITY).ok(),
            Some(Connectivity::default())
        );
    }

    #[test]
    fn test_luma_weights_sum_to_one() {
        assert!((LUMA_RED + LUMA_GREEN + LUMA_BLUE - 1.0).abs() < 1e-12);
        assert!((MASK_THRESHOLD - 0.5).abs() < f32::EPSILON);
    }
}
