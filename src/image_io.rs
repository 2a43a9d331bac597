//! Bridges between [`PixelGrid`] and the `image` crate.
//!
//! Decoding always goes through RGB8, so any format the `image` crate reads
//! (PNG, JPEG, ...) becomes a 3-channel grid in R, G, B order. Cipher images
//! should be saved losslessly (PNG); a lossy encoder destroys the ciphertext.

use std::path::Path;

use image::RgbImage;
use thiserror::Error;

use crate::error::ChaosCryptError;
use crate::grid::PixelGrid;

/// Errors raised while loading or saving images.
#[derive(Debug, Error)]
pub enum ImageIoError {
    /// Decoding, encoding or file access failed.
    #[error("Image I/O failed: {0}")]
    Image(#[from] image::ImageError),
    /// The decoded image cannot form a valid grid.
    #[error(transparent)]
    Grid(#[from] ChaosCryptError),
    /// Grid dimensions exceed what the image crate can address.
    #[error("Grid dimensions {width}x{height} exceed the image size limit")]
    TooLarge { width: usize, height: usize },
}

impl TryFrom<&RgbImage> for PixelGrid {
    type Error = ChaosCryptError;

    fn try_from(image: &RgbImage) -> Result<Self, Self::Error> {
        PixelGrid::from_raw(
            image.width() as usize,
            image.height() as usize,
            image.as_raw(),
        )
    }
}

impl TryFrom<&PixelGrid> for RgbImage {
    type Error = ImageIoError;

    fn try_from(grid: &PixelGrid) -> Result<Self, Self::Error> {
        let too_large = || ImageIoError::TooLarge {
            width: grid.width(),
            height: grid.height(),
        };
        let width = u32::try_from(grid.width()).map_err(|_| too_large())?;
        let height = u32::try_from(grid.height()).map_err(|_| too_large())?;
        let pixels = grid.pixels();
        Ok(RgbImage::from_fn(width, height, |x, y| {
            image::Rgb(pixels[y as usize * grid.width() + x as usize])
        }))
    }
}

/// Loads an image file as an RGB pixel grid.
///
/// # Errors
/// Returns [`ImageIoError::Image`] if the file cannot be read or decoded,
/// and [`ImageIoError::Grid`] for an empty image.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<PixelGrid, ImageIoError> {
    let image = image::open(path)?.to_rgb8();
    Ok(PixelGrid::try_from(&image)?)
}

/// Saves a grid to `path`; the format follows the file extension.
///
/// # Errors
/// Returns [`ImageIoError::Image`] if encoding or writing fails.
pub fn save_rgb<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<(), ImageIoError> {
    let image = RgbImage::try_from(grid)?;
    image.save(path)?;
    Ok(())
}
