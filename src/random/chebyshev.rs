//! Chebyshev map `x_{n+1} = cos(l·arccos(x_n))` on [-1, 1].

use super::chaotic_map::ChaoticMap;

/// Default polynomial degree.
pub const DEFAULT_CHEBYSHEV_DEGREE: f64 = 4.0;

/// Chebyshev map state.
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevMap {
    x: f64,
    degree: f64,
}

impl ChebyshevMap {
    /// Creates a map starting at `x0` with degree `degree`.
    ///
    /// # Parameters
    /// - `x0`: Initial value, expected in [-1, 1]. Outside that range
    ///   `arccos` yields NaN and the trajectory is NaN from then on.
    /// - `degree`: Polynomial degree `l`.
    pub fn new(x0: f64, degree: f64) -> Self {
        ChebyshevMap { x: x0, degree }
    }

    /// Creates a map with the default degree of 4.
    pub fn with_seed(x0: f64) -> Self {
        Self::new(x0, DEFAULT_CHEBYSHEV_DEGREE)
    }

    /// Returns the current value.
    pub fn x(&self) -> f64 {
        self.x
    }
}

impl ChaoticMap for ChebyshevMap {
    fn next_sample(&mut self) -> f64 {
        self.x = (self.degree * self.x.acos()).cos();
        self.x
    }
}
