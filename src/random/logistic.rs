//! Logistic map `x_{n+1} = r·x_n·(1 − x_n)`.

use super::chaotic_map::ChaoticMap;

/// Default growth rate. Kept just below 4.0, where the map collapses onto
/// fixed points for some seeds.
pub const DEFAULT_LOGISTIC_RATE: f64 = 3.9999;

/// Logistic map state.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticMap {
    x: f64,
    rate: f64,
}

impl LogisticMap {
    /// Creates a map starting at `x0` with growth rate `rate`.
    ///
    /// # Parameters
    /// - `x0`: Initial value, expected in (0, 1).
    /// - `rate`: Growth rate `r`, expected in (0, 4).
    pub fn new(x0: f64, rate: f64) -> Self {
        LogisticMap { x: x0, rate }
    }

    /// Creates a map with the default growth rate.
    pub fn with_seed(x0: f64) -> Self {
        Self::new(x0, DEFAULT_LOGISTIC_RATE)
    }

    /// Returns the current value `x_n`.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the growth rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl ChaoticMap for LogisticMap {
    fn next_sample(&mut self) -> f64 {
        self.x = self.rate * self.x * (1.0 - self.x);
        self.x
    }
}
