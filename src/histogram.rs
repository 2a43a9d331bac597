//! Per-channel intensity histograms.
//!
//! A good cipher image has a flat histogram regardless of the plaintext.
//! Only the counts are computed here; plotting is left to the caller.

use crate::grid::{Channel, PixelGrid, CHANNELS};
use crate::plane::ChannelPlane;

/// Number of bins, one per 8-bit intensity.
pub const BINS: usize = 256;

/// Counts of each intensity value in one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [u64; BINS],
}

impl Default for Histogram {
    fn default() -> Self {
        Histogram { bins: [0; BINS] }
    }
}

impl Histogram {
    /// Returns the number of samples equal to `value`.
    pub fn count(&self, value: u8) -> u64 {
        self.bins[value as usize]
    }

    /// Returns all 256 counts.
    pub fn bins(&self) -> &[u64; BINS] {
        &self.bins
    }

    /// Returns the total number of samples.
    pub fn total(&self) -> u64 {
        self.bins.iter().sum()
    }

    /// Returns the largest bin count.
    pub fn max_count(&self) -> u64 {
        self.bins.iter().copied().max().unwrap_or(0)
    }
}

/// Builds the histogram of a single plane.
pub fn channel_histogram(plane: &ChannelPlane) -> Histogram {
    let mut histogram = Histogram::default();
    for &value in plane.as_slice() {
        histogram.bins[value as usize] += 1;
    }
    histogram
}

/// Builds one histogram per channel, in R, G, B order.
pub fn rgb_histograms(grid: &PixelGrid) -> [Histogram; CHANNELS] {
    Channel::ALL.map(|channel| channel_histogram(&grid.channel(channel)))
}
