//! Synthetic digit source generation.
//!
//! The real tool expects a multi-megabyte pi expansion the user has to
//! procure; generated sources make experiments runnable out of the box.
//!
//! # Design
//!
//! Generated data is mostly uniform random digits with occasional planted
//! runs of a single repeated digit. Repeated digits encode to repeating bit
//! patterns, so chains are actually discoverable in generated sources at
//! high thresholds. Generation is deterministic per seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;

/// Generate `digit_count` decimal digits with planted repetition runs.
///
/// Roughly one position in fifty starts a run of 20-120 copies of one
/// digit; everything else is uniform random.
pub fn generate_digit_data(seed: u64, digit_count: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut digits = String::with_capacity(digit_count);

    while digits.len() < digit_count {
        if rng.gen_ratio(1, 50) {
            let digit = (b'0' + rng.gen_range(0..10u8)) as char;
            let run = rng.gen_range(20..=120);
            for _ in 0..run {
                digits.push(digit);
            }
        } else {
            digits.push((b'0' + rng.gen_range(0..10u8)) as char);
        }
    }

    digits.truncate(digit_count);
    digits
}

/// Write generated digits to a file.
pub fn write_digit_file(
    path: &std::path::Path,
    seed: u64,
    digit_count: usize,
) -> std::io::Result<()> {
    let digits = generate_digit_data(seed, digit_count);
    let mut file = std::fs::File::create(path)?;
    file.write_all(digits.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_length() {
        for size in [0, 1, 100, 10_000] {
            let digits = generate_digit_data(7, size);
            assert_eq!(digits.len(), size);
        }
    }

    #[test]
    fn test_only_digits() {
        let digits = generate_digit_data(99, 5_000);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_determinism() {
        let a = generate_digit_data(12345, 5_000);
        let b = generate_digit_data(12345, 5_000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let a = generate_digit_data(1, 1_000);
        let b = generate_digit_data(2, 1_000);
        assert_ne!(a, b);
    }

    #[test]
    fn test_contains_repetition_runs() {
        // A long enough sample should contain at least one planted run
        let digits = generate_digit_data(42, 20_000);
        let bytes = digits.as_bytes();
        let has_run = bytes
            .windows(20)
            .any(|w| w.iter().all(|&b| b == w[0]));
        assert!(has_run);
    }
}
