//! Block permuter ("crossover").
//!
//! Swaps adjacent pairs `(0,1)`, `(2,3)`, ... up to the shorter of the key
//! length and the sequence length. Only the keystream's length bounds the
//! swaps; its byte values play no part, so the permutation is a fixed
//! function of position. Applying it twice with the same bound restores the
//! input.

/// Returns a copy of `sequence` with adjacent pairs swapped.
///
/// # Parameters
/// - `sequence`: Values to permute; left untouched.
/// - `key_length`: Number of keystream samples bounding the swaps.
///
/// # Examples
///
/// ```
/// use chaos_image_crypt::crossover::crossover;
///
/// assert_eq!(crossover(&[1, 2, 3, 4, 5], 5), vec![2, 1, 4, 3, 5]);
/// assert_eq!(crossover(&[1, 2, 3, 4, 5], 3), vec![2, 1, 3, 4, 5]);
/// ```
pub fn crossover<T: Clone>(sequence: &[T], key_length: usize) -> Vec<T> {
    let mut scrambled = sequence.to_vec();
    crossover_in_place(&mut scrambled, key_length);
    scrambled
}

/// In-place form of [`crossover`].
pub fn crossover_in_place<T>(sequence: &mut [T], key_length: usize) {
    let bound = key_length.min(sequence.len());
    let mut i = 0;
    while i + 1 < bound {
        sequence.swap(i, i + 1);
        i += 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_length() {
        assert_eq!(crossover(&[10, 20, 30, 40], 4), vec![20, 10, 40, 30]);
    }

    #[test]
    fn test_odd_length_keeps_last() {
        assert_eq!(crossover(&[1, 2, 3], 3), vec![2, 1, 3]);
    }

    #[test]
    fn test_key_shorter_than_sequence() {
        assert_eq!(crossover(&[1, 2, 3, 4, 5, 6], 2), vec![2, 1, 3, 4, 5, 6]);
        assert_eq!(crossover(&[1, 2, 3, 4, 5, 6], 1), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_key_longer_than_sequence() {
        assert_eq!(crossover(&[1, 2, 3], 100), vec![2, 1, 3]);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(crossover::<u8>(&[], 4), Vec::<u8>::new());
        assert_eq!(crossover(&[7], 4), vec![7]);
    }

    #[test]
    fn test_involution() {
        let original: Vec<u8> = (0..=40).collect();
        for key_length in [0, 1, 2, 5, 17, 41, 90] {
            let once = crossover(&original, key_length);
            assert_eq!(crossover(&once, key_length), original);
        }
    }

    #[test]
    fn test_input_untouched() {
        let original = vec![1u8, 2, 3, 4];
        let _ = crossover(&original, 4);
        assert_eq!(original, vec![1, 2, 3, 4]);
    }
}
