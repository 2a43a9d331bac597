//! ChannelPlane: a single 8-bit channel of a pixel grid.
//!
//! Values live in one contiguous row-major `Vec<u8>` addressed by
//! `row * width + col`. The cipher stages take a plane by value and return
//! the transformed plane, so each stage owns its buffer exclusively.

use crate::crossover::crossover_in_place;
use crate::error::ChaosCryptError;

/// Row-major single-channel plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPlane {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

/// Number of cells in a `width` by `height` grid.
///
/// # Errors
/// Returns [`ChaosCryptError::InvalidDimensions`] for a zero dimension or
/// when the product does not fit in `usize`.
pub(crate) fn checked_area(width: usize, height: usize) -> Result<usize, ChaosCryptError> {
    if width == 0 || height == 0 {
        return Err(ChaosCryptError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(ChaosCryptError::InvalidDimensions { width, height })
}

impl ChannelPlane {
    /// Creates a plane from row-major data.
    ///
    /// # Errors
    /// - [`ChaosCryptError::InvalidDimensions`] if either dimension is zero
    ///   or `width * height` overflows `usize`.
    /// - [`ChaosCryptError::InvalidBufferLength`] if `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ChaosCryptError> {
        let expected = checked_area(width, height)?;
        if data.len() != expected {
            return Err(ChaosCryptError::InvalidBufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(ChannelPlane {
            width,
            height,
            data,
        })
    }

    /// Wraps data whose shape the caller has already validated.
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        ChannelPlane {
            width,
            height,
            data,
        }
    }

    /// Creates a plane from nested rows.
    ///
    /// # Errors
    /// Fails like [`new`](Self::new) when the rows are empty or ragged.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ChaosCryptError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(width.saturating_mul(height));
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(ChaosCryptError::InvalidBufferLength {
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::new(width, height, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(height, width)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Returns the value at `(row, col)`, if inside the plane.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height && col < self.width {
            Some(self.data[row * self.width + col])
        } else {
            None
        }
    }

    /// Returns row `row` as a slice.
    ///
    /// # Panics
    /// Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width)
    }

    /// Returns the row-major values.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the plane, returning its row-major values.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Applies the crossover to every row, bounded by `key_length`.
    pub fn permute_rows(mut self, key_length: usize) -> Self {
        for row in self.data.chunks_exact_mut(self.width) {
            crossover_in_place(row, key_length);
        }
        self
    }

    /// Applies the crossover to every column, bounded by `key_length`.
    pub fn permute_columns(mut self, key_length: usize) -> Self {
        // Swapping entries i and i+1 of every column swaps rows i and i+1.
        let width = self.width;
        let bound = key_length.min(self.height);
        let mut i = 0;
        while i + 1 < bound {
            let (upper, lower) = self.data.split_at_mut((i + 1) * width);
            upper[i * width..].swap_with_slice(&mut lower[..width]);
            i += 2;
        }
        self
    }

    /// XORs every value of row `r` with `key[r]`.
    ///
    /// XOR is its own inverse, so the same call undoes the diffusion.
    /// `key` must hold at least `height` bytes.
    pub fn diffuse_rows(mut self, key: &[u8]) -> Self {
        for (row, &k) in self.data.chunks_exact_mut(self.width).zip(key) {
            for value in row.iter_mut() {
                *value ^= k;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChannelPlane {
        ChannelPlane::from_rows(&[[1u8, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap()
    }

    #[test]
    fn test_new_validates() {
        assert_eq!(
            ChannelPlane::new(0, 2, vec![]),
            Err(ChaosCryptError::InvalidDimensions {
                width: 0,
                height: 2
            })
        );
        assert_eq!(
            ChannelPlane::new(2, 2, vec![0; 3]),
            Err(ChaosCryptError::InvalidBufferLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        assert_eq!(
            ChannelPlane::new(usize::MAX, usize::MAX, vec![]),
            Err(ChaosCryptError::InvalidDimensions {
                width: usize::MAX,
                height: usize::MAX
            })
        );
        assert_eq!(checked_area(3, 4), Ok(12));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows: Vec<Vec<u8>> = vec![vec![1, 2], vec![3]];
        assert!(ChannelPlane::from_rows(&rows).is_err());
    }

    #[test]
    fn test_accessors() {
        let plane = sample();
        assert_eq!(plane.shape(), (3, 3));
        assert_eq!(plane.get(1, 2), Some(6));
        assert_eq!(plane.get(3, 0), None);
        assert_eq!(plane.row(2), &[7, 8, 9]);
        assert_eq!(plane.rows().count(), 3);
    }

    #[test]
    fn test_permute_rows() {
        let plane = sample().permute_rows(3);
        assert_eq!(plane.as_slice(), &[2, 1, 3, 5, 4, 6, 8, 7, 9]);
    }

    #[test]
    fn test_permute_columns() {
        let plane = sample().permute_columns(3);
        assert_eq!(plane.as_slice(), &[4, 5, 6, 1, 2, 3, 7, 8, 9]);
    }

    #[test]
    fn test_permute_columns_matches_per_column_crossover() {
        let plane = ChannelPlane::new(3, 5, (0..15).collect()).unwrap();
        let permuted = plane.clone().permute_columns(5);
        for col in 0..3 {
            let column: Vec<u8> = (0..5).map(|r| plane.get(r, col).unwrap()).collect();
            let expected = crate::crossover::crossover(&column, 5);
            let actual: Vec<u8> = (0..5).map(|r| permuted.get(r, col).unwrap()).collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_diffuse_rows_self_inverse() {
        let key = [0x5A, 0xFF, 0x01];
        let once = sample().diffuse_rows(&key);
        assert_eq!(once.row(0), &[1 ^ 0x5A, 2 ^ 0x5A, 3 ^ 0x5A]);
        assert_eq!(once.diffuse_rows(&key), sample());
    }

    #[test]
    fn test_into_vec() {
        assert_eq!(sample().into_vec(), (1..=9).collect::<Vec<u8>>());
    }
}
