//! Tests for image/mask loading and grayscale PNG export

#[cfg(test)]
mod tests {
    use holefill::HoleFillError;
    use holefill::io::image::{
        export_grid_as_png, grid_from_images, grid_to_image, load_grid, normalized_luma,
    };
    use holefill::spatial::{Grid, Point};
    use image::{Rgb, RgbImage};

    #[test]
    fn test_normalized_luma_levels() {
        assert!((normalized_luma(Rgb([255, 255, 255])) - 1.0).abs() < f32::EPSILON);
        assert!(normalized_luma(Rgb([0, 0, 0])).abs() < f32::EPSILON);
        // 0.299 * 255 truncates to 76
        assert!((normalized_luma(Rgb([255, 0, 0])) - 76.0 / 255.0).abs() < f32::EPSILON);
        assert!((normalized_luma(Rgb([100, 100, 100])) - 100.0 / 255.0).abs() < 1e-6);
    }

    // Dark mask pixels become holes, everything else takes the image luma
    #[test]
    fn test_grid_from_images_thresholds_mask() {
        let image = RgbImage::from_fn(3, 2, |x, y| {
            let level = (x * 40 + y * 100) as u8;
            Rgb([level, level, level])
        });
        let mut mask = RgbImage::from_pixel(3, 2, Rgb([255, 255, 255]));
        mask.put_pixel(1, 0, Rgb([0, 0, 0]));
        mask.put_pixel(2, 1, Rgb([100, 100, 100]));
        mask.put_pixel(0, 1, Rgb([200, 200, 200]));

        let Ok(grid) = grid_from_images(&image, &mask) else {
            unreachable!("matching image and mask rejected");
        };

        assert_eq!(grid.dimensions(), (2, 3));
        assert!(grid.is_hole(Point::new(0, 1)));
        assert!(grid.is_hole(Point::new(1, 2)));
        assert!(!grid.is_hole(Point::new(1, 0)));
        assert_eq!(grid.hole_count(), 2);
        let value = grid.intensity(Point::new(1, 1)).unwrap_or(-1.0);
        assert!((value - 140.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_mismatched_mask_rejected() {
        let image = RgbImage::new(4, 3);
        let mask = RgbImage::new(3, 4);

        match grid_from_images(&image, &mask) {
            Err(HoleFillError::DimensionMismatch { image, mask }) => {
                assert_eq!(image, (3, 4));
                assert_eq!(mask, (4, 3));
            }
            other => unreachable!("Expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_reports_path() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory unavailable");
        };
        let missing = dir.path().join("missing.png");

        match load_grid(&missing, &missing) {
            Err(HoleFillError::ImageLoad { path, .. }) => assert_eq!(path, missing),
            other => unreachable!("Expected ImageLoad, got {other:?}"),
        }
    }

    #[test]
    fn test_grid_to_image_scales_and_blanks_sentinel() {
        let Ok(grid) = Grid::from_rows(vec![vec![0.0, 1.0], vec![0.5, -1.0]]) else {
            unreachable!("valid grid rejected");
        };

        let img = grid_to_image(&grid);

        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0, [0]);
        assert_eq!(img.get_pixel(1, 0).0, [255]);
        assert_eq!(img.get_pixel(0, 1).0, [127]);
        assert_eq!(img.get_pixel(1, 1).0, [0]);
    }

    // Export then load through the same mask keeps every level
    #[test]
    fn test_export_then_load_preserves_levels() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory unavailable");
        };
        let output = dir.path().join("nested").join("filled.png");
        let mask_path = dir.path().join("mask.png");
        let Ok(grid) = Grid::from_rows(vec![
            vec![0.0, 64.0 / 255.0, 128.0 / 255.0],
            vec![1.0, 32.0 / 255.0, 200.0 / 255.0],
        ]) else {
            unreachable!("valid grid rejected");
        };

        assert!(export_grid_as_png(&grid, &output).is_ok());
        assert!(output.exists());
        assert!(
            RgbImage::from_pixel(3, 2, Rgb([255, 255, 255]))
                .save(&mask_path)
                .is_ok()
        );

        let Ok(loaded) = load_grid(&output, &mask_path) else {
            unreachable!("exported image failed to load");
        };

        assert_eq!(loaded.dimensions(), grid.dimensions());
        for ((row, col), &value) in grid.as_array().indexed_iter() {
            let reloaded = loaded.intensity(Point::new(row, col)).unwrap_or(-1.0);
            assert!((reloaded - value).abs() < 2.5 / 255.0, "({row}, {col})");
        }
    }
}
