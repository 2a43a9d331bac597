//! Common interface for the one-dimensional sample streams of the chaotic maps.

/// Trait for deterministic chaotic recurrences used as keystream sources.
///
/// Implementations iterate in `f64`. The trajectories are sensitive to every
/// rounding step, so a lower precision produces a different keystream.
pub trait ChaoticMap {
    /// Advances the recurrence by one step and returns the recorded sample.
    ///
    /// The initial state is never returned; the first call yields `x_1`.
    fn next_sample(&mut self) -> f64;

    /// Collects the next `length` samples.
    fn samples(&mut self, length: usize) -> Vec<f64> {
        let mut sequence = Vec::with_capacity(length);
        for _ in 0..length {
            sequence.push(self.next_sample());
        }
        sequence
    }
}

/// Runs a freshly seeded map for `length` steps and returns its trajectory.
///
/// The map is consumed, so the same seed always yields the same sequence.
pub fn generate<M: ChaoticMap>(mut map: M, length: usize) -> Vec<f64> {
    map.samples(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(f64);

    impl ChaoticMap for Counter {
        fn next_sample(&mut self) -> f64 {
            self.0 += 1.0;
            self.0
        }
    }

    #[test]
    fn test_generate_skips_initial_state() {
        assert_eq!(generate(Counter(0.0), 3), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_generate_zero_length() {
        assert!(generate(Counter(0.0), 0).is_empty());
    }

    #[test]
    fn test_samples_continue_trajectory() {
        let mut map = Counter(0.0);
        let first = map.samples(2);
        let second = map.samples(2);
        assert_eq!(first, vec![1.0, 2.0]);
        assert_eq!(second, vec![3.0, 4.0]);
    }
}
