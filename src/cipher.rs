//! ChaosImageCipher: permutation plus diffusion over RGB pixel grids.
//!
//! Per channel, encryption runs
//!
//! ```text
//! plane ─▶ permute rows (bound = width)
//!       ─▶ permute columns (bound = height)
//!       ─▶ XOR row r with keystream[r]
//! ```
//!
//! and decryption runs the same three steps in reverse order. Both
//! permutations and the XOR are involutions, so each inverse step is the
//! forward step applied again.
//!
//! The permutation is fixed by the keystream length and pixel positions;
//! only the diffusion step depends on the seed values.

use tracing::{debug, trace};

use crate::error::ChaosCryptError;
use crate::grid::{Channel, PixelGrid};
use crate::keystream::{Keystream, KeystreamBuilder, MapParameters, SeedSet};
use crate::plane::ChannelPlane;

/// Symmetric image cipher keyed by a chaotic [`Keystream`].
///
/// # Examples
///
/// ```
/// use chaos_image_crypt::{ChaosImageCipher, PixelGrid, SeedSet};
///
/// let bytes = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120];
/// let plain = PixelGrid::from_raw(2, 2, &bytes).unwrap();
/// let cipher = ChaosImageCipher::from_seeds(SeedSet::default(), 2).unwrap();
///
/// let encrypted = cipher.encrypt(&plain).unwrap();
/// assert_ne!(encrypted, plain);
/// assert_eq!(cipher.decrypt(&encrypted).unwrap(), plain);
/// ```
#[derive(Debug, Clone)]
pub struct ChaosImageCipher {
    keystream: Keystream,
}

impl ChaosImageCipher {
    /// Creates a cipher around an existing keystream.
    pub fn new(keystream: Keystream) -> Self {
        ChaosImageCipher { keystream }
    }

    /// Builds a keystream of `length` bytes from `seeds` with default map
    /// parameters.
    ///
    /// # Errors
    /// Propagates seed validation errors from [`KeystreamBuilder::build`].
    pub fn from_seeds(seeds: SeedSet, length: usize) -> Result<Self, ChaosCryptError> {
        let keystream = KeystreamBuilder::new(seeds).build(length)?;
        Ok(Self::new(keystream))
    }

    /// Builds a keystream sized for `grid`, i.e. `max(height, width)` bytes.
    ///
    /// # Errors
    /// Propagates seed and parameter validation errors.
    pub fn for_grid(
        seeds: SeedSet,
        parameters: MapParameters,
        grid: &PixelGrid,
    ) -> Result<Self, ChaosCryptError> {
        let length = grid.width().max(grid.height());
        let keystream = KeystreamBuilder::new(seeds)
            .with_parameters(parameters)
            .build(length)?;
        Ok(Self::new(keystream))
    }

    /// Returns the keystream.
    pub fn keystream(&self) -> &Keystream {
        &self.keystream
    }

    /// Encrypts a grid. The input grid is left untouched.
    ///
    /// # Errors
    /// Returns [`ChaosCryptError::KeystreamTooShort`] before any pixel is
    /// processed if the keystream is shorter than `max(height, width)`.
    pub fn encrypt(&self, grid: &PixelGrid) -> Result<PixelGrid, ChaosCryptError> {
        self.keystream.ensure_covers(grid.width(), grid.height())?;
        debug!(
            width = grid.width(),
            height = grid.height(),
            "encrypting pixel grid"
        );

        let planes = Channel::ALL.map(|channel| {
            trace!(?channel, "encrypting channel");
            self.encrypt_channel(grid.channel(channel))
        });
        PixelGrid::from_planes(planes)
    }

    /// Decrypts a grid produced by [`encrypt`](Self::encrypt) with the same
    /// keystream.
    ///
    /// # Errors
    /// Returns [`ChaosCryptError::KeystreamTooShort`] before any pixel is
    /// processed if the keystream is shorter than `max(height, width)`.
    pub fn decrypt(&self, grid: &PixelGrid) -> Result<PixelGrid, ChaosCryptError> {
        self.keystream.ensure_covers(grid.width(), grid.height())?;
        debug!(
            width = grid.width(),
            height = grid.height(),
            "decrypting pixel grid"
        );

        let planes = Channel::ALL.map(|channel| {
            trace!(?channel, "decrypting channel");
            self.decrypt_channel(grid.channel(channel))
        });
        PixelGrid::from_planes(planes)
    }

    /// Encrypts a single channel plane.
    ///
    /// # Errors
    /// Returns [`ChaosCryptError::KeystreamTooShort`] if the keystream does
    /// not cover the plane.
    pub fn encrypt_plane(&self, plane: ChannelPlane) -> Result<ChannelPlane, ChaosCryptError> {
        self.keystream.ensure_covers(plane.width(), plane.height())?;
        Ok(self.encrypt_channel(plane))
    }

    /// Decrypts a single channel plane.
    ///
    /// # Errors
    /// Returns [`ChaosCryptError::KeystreamTooShort`] if the keystream does
    /// not cover the plane.
    pub fn decrypt_plane(&self, plane: ChannelPlane) -> Result<ChannelPlane, ChaosCryptError> {
        self.keystream.ensure_covers(plane.width(), plane.height())?;
        Ok(self.decrypt_channel(plane))
    }

    // Coverage has been checked by the caller.
    fn encrypt_channel(&self, plane: ChannelPlane) -> ChannelPlane {
        let (row_key, col_key) = self.key_lengths(&plane);
        let diffusion = &self.keystream.as_bytes()[..plane.height()];
        plane
            .permute_rows(row_key)
            .permute_columns(col_key)
            .diffuse_rows(diffusion)
    }

    fn decrypt_channel(&self, plane: ChannelPlane) -> ChannelPlane {
        let (row_key, col_key) = self.key_lengths(&plane);
        let diffusion = &self.keystream.as_bytes()[..plane.height()];
        plane
            .diffuse_rows(diffusion)
            .permute_columns(col_key)
            .permute_rows(row_key)
    }

    /// Length of the keystream prefix used as the row and column bound.
    fn key_lengths(&self, plane: &ChannelPlane) -> (usize, usize) {
        let len = self.keystream.len();
        (len.min(plane.width()), len.min(plane.height()))
    }
}
