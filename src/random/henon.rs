//! Henon map.
//!
//! ```text
//! x_{n+1} = 1 − a·x_n² + y_n
//! y_{n+1} = b·x_n
//! ```
//!
//! Only the x-component is recorded.

use super::chaotic_map::ChaoticMap;

/// Default `a` coefficient (classical Henon attractor).
pub const DEFAULT_HENON_A: f64 = 1.4;

/// Default `b` coefficient (classical Henon attractor).
pub const DEFAULT_HENON_B: f64 = 0.3;

/// Henon map state.
#[derive(Debug, Clone, PartialEq)]
pub struct HenonMap {
    x: f64,
    y: f64,
    a: f64,
    b: f64,
}

impl HenonMap {
    /// Creates a map starting at `(x0, y0)` with coefficients `a` and `b`.
    pub fn new(x0: f64, y0: f64, a: f64, b: f64) -> Self {
        HenonMap { x: x0, y: y0, a, b }
    }

    /// Creates a map with the classical coefficients (1.4, 0.3).
    pub fn with_seed(x0: f64, y0: f64) -> Self {
        Self::new(x0, y0, DEFAULT_HENON_A, DEFAULT_HENON_B)
    }

    /// Returns the current x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the current y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl ChaoticMap for HenonMap {
    fn next_sample(&mut self) -> f64 {
        let xo = self.x;
        let yo = self.y;

        self.x = 1.0 - self.a * xo * xo + yo;
        self.y = self.b * xo;
        self.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::generate;

    #[test]
    fn test_first_iterates() {
        let mut map = HenonMap::with_seed(0.21, 0.21);
        let x1 = map.next_sample();
        assert!((x1 - 1.14826).abs() < 1e-12);
        assert!((map.y() - 0.063).abs() < 1e-12);

        let x2 = map.next_sample();
        assert!((x2 - (-0.7829014386400002)).abs() < 1e-12);
    }

    #[test]
    fn test_records_x_component() {
        let mut map = HenonMap::with_seed(0.1, 0.2);
        let sample = map.next_sample();
        assert_eq!(sample, map.x());
    }

    #[test]
    fn test_bounded_on_attractor() {
        let seq = generate(HenonMap::with_seed(0.21, 0.21), 5_000);
        assert!(seq.iter().all(|v| v.abs() < 1.5));
    }

    #[test]
    fn test_deterministic() {
        let a = generate(HenonMap::with_seed(0.21, 0.21), 300);
        let b = generate(HenonMap::with_seed(0.21, 0.21), 300);
        assert_eq!(a, b);
    }
}
