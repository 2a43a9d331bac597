//! PixelGrid: 3-channel 8-bit image in row-major order.
//!
//! Channels are split into [`ChannelPlane`]s for processing and merged back
//! afterwards. Splitting copies, so the caller's grid is never mutated.

use crate::error::ChaosCryptError;
use crate::plane::{checked_area, ChannelPlane};

/// Number of channels in a pixel.
pub const CHANNELS: usize = 3;

/// Channel index within an RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; CHANNELS] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Returns the position of this channel inside a pixel.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Row-major grid of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<[u8; CHANNELS]>,
}

impl PixelGrid {
    /// Creates a grid from row-major pixels.
    ///
    /// # Errors
    /// - [`ChaosCryptError::InvalidDimensions`] if either dimension is zero
    ///   or `width * height` overflows `usize`.
    /// - [`ChaosCryptError::InvalidBufferLength`] if `pixels.len() != width * height`.
    pub fn new(
        width: usize,
        height: usize,
        pixels: Vec<[u8; CHANNELS]>,
    ) -> Result<Self, ChaosCryptError> {
        let expected = checked_area(width, height)?;
        if pixels.len() != expected {
            return Err(ChaosCryptError::InvalidBufferLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(PixelGrid {
            width,
            height,
            pixels,
        })
    }

    /// Creates a grid from interleaved `RGBRGB...` bytes.
    ///
    /// # Errors
    /// Returns [`ChaosCryptError::InvalidBufferLength`] if
    /// `bytes.len() != width * height * 3`, or
    /// [`ChaosCryptError::InvalidDimensions`] for a zero dimension or an
    /// overflowing byte count.
    pub fn from_raw(width: usize, height: usize, bytes: &[u8]) -> Result<Self, ChaosCryptError> {
        let expected = checked_area(width, height)?
            .checked_mul(CHANNELS)
            .ok_or(ChaosCryptError::InvalidDimensions { width, height })?;
        if bytes.len() != expected {
            return Err(ChaosCryptError::InvalidBufferLength {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(CHANNELS)
            .map(|p| [p[0], p[1], p[2]])
            .collect();
        Self::new(width, height, pixels)
    }

    /// Creates a grid where every pixel equals `pixel`.
    ///
    /// # Errors
    /// Returns [`ChaosCryptError::InvalidDimensions`] for a zero or
    /// overflowing dimension.
    pub fn filled(
        width: usize,
        height: usize,
        pixel: [u8; CHANNELS],
    ) -> Result<Self, ChaosCryptError> {
        let area = checked_area(width, height)?;
        Self::new(width, height, vec![pixel; area])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixel at `(row, col)`, if inside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<[u8; CHANNELS]> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// Returns the pixels in row-major order.
    pub fn pixels(&self) -> &[[u8; CHANNELS]] {
        &self.pixels
    }

    /// Returns interleaved `RGBRGB...` bytes.
    pub fn to_raw(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Copies one channel out into its own plane.
    pub fn channel(&self, channel: Channel) -> ChannelPlane {
        let idx = channel.index();
        let data: Vec<u8> = self.pixels.iter().map(|p| p[idx]).collect();
        ChannelPlane::from_parts(self.width, self.height, data)
    }

    /// Merges three planes (R, G, B) into a grid.
    ///
    /// # Errors
    /// Returns [`ChaosCryptError::PlaneShapeMismatch`] if the planes differ in shape.
    pub fn from_planes(planes: [ChannelPlane; CHANNELS]) -> Result<Self, ChaosCryptError> {
        let expected = planes[0].shape();
        for plane in &planes[1..] {
            if plane.shape() != expected {
                return Err(ChaosCryptError::PlaneShapeMismatch {
                    expected,
                    actual: plane.shape(),
                });
            }
        }
        let (height, width) = expected;
        let [r, g, b] = planes;
        let pixels = r
            .as_slice()
            .iter()
            .zip(g.as_slice())
            .zip(b.as_slice())
            .map(|((&r, &g), &b)| [r, g, b])
            .collect();
        Self::new(width, height, pixels)
    }
}
