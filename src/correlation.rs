//! Adjacent-pixel correlation analysis.
//!
//! For each channel, pairs every pixel with its right-hand neighbour
//! (horizontal) and with the pixel below it (vertical), and computes the
//! Pearson coefficient of each pair set using population statistics. A plain
//! photograph scores close to 1; a well-diffused cipher image scores close
//! to 0.
//!
//! A constant channel has zero variance and its coefficient is NaN. NaN
//! propagates into the channel mean; it is never replaced by 0 or 1.

use crate::error::{ChaosCryptError, Direction};
use crate::grid::{Channel, PixelGrid, CHANNELS};
use crate::plane::ChannelPlane;

/// Horizontal and vertical Pearson coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationPair {
    pub horizontal: f64,
    pub vertical: f64,
}

impl CorrelationPair {
    /// Returns `true` if both coefficients are defined (not NaN).
    pub fn is_defined(&self) -> bool {
        !self.horizontal.is_nan() && !self.vertical.is_nan()
    }

    /// Returns the pair, or an error naming the first undefined direction.
    ///
    /// # Errors
    /// Returns [`ChaosCryptError::DegenerateCorrelation`] if either
    /// coefficient is NaN.
    pub fn checked(self) -> Result<Self, ChaosCryptError> {
        if self.horizontal.is_nan() {
            return Err(ChaosCryptError::DegenerateCorrelation {
                direction: Direction::Horizontal,
            });
        }
        if self.vertical.is_nan() {
            return Err(ChaosCryptError::DegenerateCorrelation {
                direction: Direction::Vertical,
            });
        }
        Ok(self)
    }
}

/// Pearson coefficient of paired samples, `cov(X,Y) / (σ_X·σ_Y)`.
///
/// Returns NaN for empty input or when either side has zero variance. The
/// result is clamped to [-1, 1] against rounding drift.
pub fn pearson(pairs: &[(f64, f64)]) -> f64 {
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for &(x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    let std_x = (var_x / n).sqrt();
    let std_y = (var_y / n).sqrt();

    // f64::clamp keeps NaN as NaN.
    ((cov / n) / (std_x * std_y)).clamp(-1.0, 1.0)
}

fn horizontal_pairs(plane: &ChannelPlane) -> Vec<(f64, f64)> {
    plane
        .rows()
        .flat_map(|row| row.windows(2).map(|w| (w[0] as f64, w[1] as f64)))
        .collect()
}

fn vertical_pairs(plane: &ChannelPlane) -> Vec<(f64, f64)> {
    let upper = plane.rows();
    let lower = plane.rows().skip(1);
    upper
        .zip(lower)
        .flat_map(|(a, b)| a.iter().zip(b).map(|(&x, &y)| (x as f64, y as f64)))
        .collect()
}

/// Computes the correlation pair of a single channel.
pub fn channel_correlation(plane: &ChannelPlane) -> CorrelationPair {
    CorrelationPair {
        horizontal: pearson(&horizontal_pairs(plane)),
        vertical: pearson(&vertical_pairs(plane)),
    }
}

/// Computes the correlation pair of each channel, in R, G, B order.
pub fn channel_correlations(grid: &PixelGrid) -> [CorrelationPair; CHANNELS] {
    Channel::ALL.map(|channel| channel_correlation(&grid.channel(channel)))
}

/// Computes the channel-averaged horizontal and vertical correlation.
///
/// # Examples
///
/// ```
/// use chaos_image_crypt::{correlate, PixelGrid};
///
/// let flat = PixelGrid::filled(4, 4, [9, 9, 9]).unwrap();
/// let pair = correlate(&flat);
/// assert!(pair.horizontal.is_nan() && pair.vertical.is_nan());
/// ```
pub fn correlate(grid: &PixelGrid) -> CorrelationPair {
    let per_channel = channel_correlations(grid);
    let n = per_channel.len() as f64;
    CorrelationPair {
        horizontal: per_channel.iter().map(|c| c.horizontal).sum::<f64>() / n,
        vertical: per_channel.iter().map(|c| c.vertical).sum::<f64>() / n,
    }
}
