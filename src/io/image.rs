//! Image and mask decoding into a grid, and grayscale PNG export

use std::path::Path;

use image::{GrayImage, Luma, Rgb, RgbImage};
use ndarray::Array2;

use crate::io::configuration::{HOLE_SENTINEL, LUMA_BLUE, LUMA_GREEN, LUMA_RED, MASK_THRESHOLD};
use crate::io::error::{HoleFillError, Result};
use crate::spatial::grid::Grid;

/// Normalized luma of an RGB pixel
///
/// The weighted sum is truncated to an 8-bit level before normalizing, so the
/// result is always one of the 256 values `n / 255`.
#[allow(clippy::suboptimal_flops)]
pub fn normalized_luma(pixel: Rgb<u8>) -> f32 {
    let [r, g, b] = pixel.0;
    // Plain sum keeps pure white at exactly 255 before truncation
    let level =
        (LUMA_RED * f64::from(r) + LUMA_GREEN * f64::from(g) + LUMA_BLUE * f64::from(b)) as u8;
    f32::from(level) / 255.0
}

fn open_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| HoleFillError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Combine a decoded image and mask into a grid
///
/// Mask pixels whose luma falls below [`MASK_THRESHOLD`] become hole cells;
/// all other cells take the image luma.
///
/// # Errors
///
/// Returns an error if:
/// - The image and mask dimensions differ
/// - The resulting grid fails validation
pub fn grid_from_images(image: &RgbImage, mask: &RgbImage) -> Result<Grid> {
    if image.dimensions() != mask.dimensions() {
        let (iw, ih) = image.dimensions();
        let (mw, mh) = mask.dimensions();
        return Err(HoleFillError::DimensionMismatch {
            image: (ih as usize, iw as usize),
            mask: (mh as usize, mw as usize),
        });
    }

    let (width, height) = image.dimensions();
    let mut cells = Array2::<f32>::zeros((height as usize, width as usize));

    for (x, y, pixel) in image.enumerate_pixels() {
        let in_hole = mask
            .get_pixel_checked(x, y)
            .is_some_and(|mask_pixel| normalized_luma(*mask_pixel) < MASK_THRESHOLD);
        let value = if in_hole {
            HOLE_SENTINEL
        } else {
            normalized_luma(*pixel)
        };

        if let Some(cell) = cells.get_mut([y as usize, x as usize]) {
            *cell = value;
        }
    }

    Grid::new(cells)
}

/// Load an image and its hole mask from disk into a grid
///
/// # Errors
///
/// Returns an error if:
/// - Either file cannot be opened or decoded
/// - The image and mask dimensions differ
/// - The resulting grid fails validation
pub fn load_grid(image_path: &Path, mask_path: &Path) -> Result<Grid> {
    let image = open_rgb(image_path)?;
    let mask = open_rgb(mask_path)?;
    log::debug!(
        "Loaded {}x{} image '{}' with mask '{}'",
        image.width(),
        image.height(),
        image_path.display(),
        mask_path.display()
    );
    grid_from_images(&image, &mask)
}

/// Render a grid as an 8-bit grayscale image
///
/// Cells still holding the sentinel render as black.
pub fn grid_to_image(grid: &Grid) -> GrayImage {
    let (rows, cols) = grid.dimensions();
    let mut img = GrayImage::new(cols as u32, rows as u32);

    for ((row, col), &value) in grid.as_array().indexed_iter() {
        let level = (value.max(0.0) * 255.0) as u8;
        img.put_pixel(col as u32, row as u32, Luma([level]));
    }

    img
}

/// Export a grid as a grayscale PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| HoleFillError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    grid_to_image(grid)
        .save(output_path)
        .map_err(|e| HoleFillError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::info!("Saved filled image to '{}'", output_path.display());
    Ok(())
}
