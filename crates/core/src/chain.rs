//! Greedy chain extension over encoded windows.
//!
//! A chain starts at a caller-chosen window and grows strictly left to
//! right: the next window joins only if its correlation against the chain's
//! *last accepted* link (not the first) meets the threshold. Growth stops at
//! the first rejection, at the end of the window list, or at the link cap.
//!
//! A returned chain always holds at least its starting link; callers treat
//! length 1 as "no chain found here".

use crate::correlation::correlation;
use crate::encode::WindowSet;
use crate::error::{Error, Result};

/// One accepted window in a chain, with its reporting label.
#[derive(Debug, Clone)]
pub struct Link {
    /// Window bits (0/1 values)
    pub bits: Vec<u8>,

    /// Approximate digits the window was derived from (annotation only)
    pub digits: String,
}

impl Link {
    /// The window rendered as an ASCII `0`/`1` string.
    pub fn bit_string(&self) -> String {
        self.bits.iter().map(|&b| (b'0' + b) as char).collect()
    }
}

/// An ordered run of windows linked by above-threshold correlation.
#[derive(Debug, Clone)]
pub struct Chain {
    /// Index of the first link within the window list
    pub start_index: usize,

    /// Accepted links, in extension order (never empty)
    pub links: Vec<Link>,
}

impl Chain {
    /// Number of links in the chain (always >= 1).
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always false; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Concatenated bit strings of every link, in order.
    pub fn bit_string(&self) -> String {
        self.links.iter().map(|l| l.bit_string()).collect()
    }

    /// Hex digest over the chain's concatenated bit string.
    ///
    /// Deterministic for identical content; any single-bit change produces a
    /// different digest. Used for report integrity and dedup, not security.
    pub fn integrity_hash(&self) -> String {
        blake3::hash(self.bit_string().as_bytes())
            .to_hex()
            .to_string()
    }
}

/// Build a chain starting at `start_index`.
///
/// Extends while the cursor stays in bounds, the chain is below `max_links`,
/// and the correlation between the last accepted window and the cursor
/// window is at least `threshold`.
///
/// # Errors
/// Returns `Error::StartOutOfBounds` if `start_index` is past the window
/// list. Correlation length mismatches cannot occur for windows from one
/// `WindowSet` but propagate if they somehow do.
pub fn build_chain(
    set: &WindowSet,
    start_index: usize,
    threshold: f64,
    max_links: usize,
) -> Result<Chain> {
    if start_index >= set.len() {
        return Err(Error::StartOutOfBounds {
            index: start_index,
            windows: set.len(),
        });
    }

    let mut links = vec![Link {
        bits: set.window(start_index).to_vec(),
        digits: set.label(start_index).to_string(),
    }];

    let mut cursor = start_index + 1;
    while cursor < set.len() && links.len() < max_links {
        let last = &links[links.len() - 1];
        let rho = correlation(&last.bits, set.window(cursor))?;
        if rho < threshold {
            break;
        }
        links.push(Link {
            bits: set.window(cursor).to_vec(),
            digits: set.label(cursor).to_string(),
        });
        cursor += 1;
    }

    Ok(Chain { start_index, links })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;

    #[test]
    fn test_identical_windows_chain_to_cap() {
        // All-zero digits encode to identical all-zero windows
        let set = encode(&"0".repeat(100), 33);
        assert!(set.len() >= 6);

        let chain = build_chain(&set, 0, 1.0, 5).unwrap();
        assert_eq!(chain.len(), 5);
        assert_eq!(chain.start_index, 0);
    }

    #[test]
    fn test_never_exceeds_max_links() {
        let set = encode(&"0".repeat(400), 33);
        for cap in [1, 2, 7, 10] {
            let chain = build_chain(&set, 0, 0.8, cap).unwrap();
            assert!(chain.len() <= cap);
        }
    }

    #[test]
    fn test_unsatisfiable_threshold_gives_single_link() {
        let set = encode("141592653589793238462643383279502884", 33);
        assert!(set.len() >= 2);

        // Scores never exceed 1.0, so nothing extends
        let chain = build_chain(&set, 0, 1.01, 10).unwrap();
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_adjacent_links_satisfy_threshold() {
        let set = encode(&"0".repeat(200), 33);
        let threshold = 0.99;
        let chain = build_chain(&set, 0, threshold, 4).unwrap();
        assert!(chain.len() > 1);

        for pair in chain.links.windows(2) {
            let rho = crate::correlation::correlation(&pair[0].bits, &pair[1].bits).unwrap();
            assert!(rho >= threshold);
        }
    }

    #[test]
    fn test_extension_uses_last_accepted_link() {
        // Zeros then a run of '5' (0101 pattern): the first mixed window
        // breaks the chain against the last all-zero link at threshold 1.0.
        let digits = format!("{}{}", "0".repeat(33), "5".repeat(40));
        let set = encode(&digits, 33);

        let chain = build_chain(&set, 0, 1.0, 10).unwrap();
        // 33 zero digits = 132 bits -> exactly 4 all-zero windows
        assert_eq!(chain.len(), 4);
    }

    #[test]
    fn test_start_out_of_bounds() {
        let set = encode(&"0".repeat(20), 33);
        let err = build_chain(&set, set.len(), 0.8, 10).unwrap_err();
        assert!(matches!(err, Error::StartOutOfBounds { .. }));
    }

    #[test]
    fn test_bit_string_concatenation() {
        let set = encode(&"0".repeat(50), 33);
        let chain = build_chain(&set, 0, 1.0, 3).unwrap();
        let bits = chain.bit_string();
        assert_eq!(bits.len(), chain.len() * 33);
        assert!(bits.chars().all(|c| c == '0'));
    }

    #[test]
    fn test_integrity_hash_deterministic() {
        let set = encode(&"0".repeat(100), 33);
        let a = build_chain(&set, 0, 1.0, 4).unwrap();
        let b = build_chain(&set, 0, 1.0, 4).unwrap();
        assert_eq!(a.integrity_hash(), b.integrity_hash());
    }

    #[test]
    fn test_integrity_hash_bit_sensitivity() {
        let set = encode(&"0".repeat(100), 33);
        let chain = build_chain(&set, 0, 1.0, 4).unwrap();

        let mut tampered = chain.clone();
        tampered.links[0].bits[0] ^= 1;

        assert_ne!(chain.integrity_hash(), tampered.integrity_hash());
    }
}
