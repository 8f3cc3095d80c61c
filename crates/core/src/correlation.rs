//! Shannon entropy and the QEAC similarity score.
//!
//! The "correlation" between two equal-length bit windows is
//! `1 - entropy(Wi XOR Wj) / len`. Identical windows XOR to all zeros,
//! giving zero entropy and a score of exactly 1.0. So do complementary
//! windows (XOR all ones) — an intentional property of the metric, kept
//! as-is. A maximally mixed XOR approaches one bit of entropy per symbol,
//! which for a 33-bit window still only lowers the score to `1 - 1/33`;
//! this is the observed scale of the metric, not a Pearson coefficient.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Shannon entropy in bits over the empirical distribution of the observed
/// symbol values.
///
/// Generic over symbol counts: binary input tops out at 1.0 bit per symbol,
/// a four-symbol uniform input at 2.0, and so on. Empty or constant input
/// yields exactly 0.0.
pub fn entropy(symbols: &[u8]) -> f64 {
    if symbols.is_empty() {
        return 0.0;
    }

    let mut counts: HashMap<u8, usize> = HashMap::new();
    for &s in symbols {
        *counts.entry(s).or_insert(0) += 1;
    }

    let total = symbols.len() as f64;
    counts
        .values()
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// QEAC correlation between two equal-length bit windows.
///
/// Symmetric, bounded in `[1 - 1/len, 1]` for binary inputs. Both identical
/// and bit-flipped window pairs score 1.0.
///
/// # Errors
/// Returns `Error::LengthMismatch` unless `wi.len() == wj.len()`.
pub fn correlation(wi: &[u8], wj: &[u8]) -> Result<f64> {
    if wi.len() != wj.len() {
        return Err(Error::LengthMismatch {
            left: wi.len(),
            right: wj.len(),
        });
    }

    if wi.is_empty() {
        return Ok(1.0);
    }

    let xor: Vec<u8> = wi.iter().zip(wj.iter()).map(|(a, b)| a ^ b).collect();
    Ok(1.0 - entropy(&xor) / wi.len() as f64)
}
