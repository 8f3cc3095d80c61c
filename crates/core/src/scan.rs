//! Scan controller: the slice/retry loop driving the whole pipeline.
//!
//! One scan session loads a digit slice, encodes it, and probes a range of
//! starting indices for chains. A slice that produces nothing advances the
//! offset by `step_size` and tries again; the session gives up once
//! `offset + precision` would pass the source bound, so a fruitless scan
//! always terminates. The first productive slice (or hitting the chain cap)
//! ends the retry loop and the session proceeds to the summary.
//!
//! # Failure semantics
//!
//! Only a missing digit source aborts the run. Short slices, chainless
//! slices, and running out of source are all ordinary control flow that show
//! up in the summary counts, never as errors.

use crate::chain::build_chain;
use crate::encode::{encode, DEFAULT_WINDOW_SIZE};
use crate::error::Result;
use crate::report::Reporter;
use crate::source::load_digits;
use std::path::Path;

/// Default minimum correlation for extending a chain.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Parameters for one scan session.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Initial absolute digit offset
    pub start_offset: usize,

    /// Digits loaded per slice attempt
    pub precision: usize,

    /// Offset advance when a slice yields no chains
    pub step_size: usize,

    /// Stop recording once this many chains are found
    pub max_chains: usize,

    /// Per-chain extension cap
    pub max_links: usize,

    /// Number of starting indices probed per slice
    pub scan_range: usize,

    /// Bits per window
    pub window_size: usize,

    /// Minimum correlation to extend a chain
    pub threshold: f64,

    /// Hard upper bound on digits available in the source
    pub source_bound: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            start_offset: 100_000,
            precision: 200_000,
            step_size: 100_000,
            max_chains: 5,
            max_links: 10,
            scan_range: 500,
            window_size: DEFAULT_WINDOW_SIZE,
            threshold: DEFAULT_THRESHOLD,
            source_bound: 10_000_000,
        }
    }
}

/// Result statistics for a completed scan session.
#[derive(Debug, Clone)]
pub struct ScanSummary {
    /// Offset of the last slice attempted
    pub final_offset: usize,

    /// Digits per slice, echoed from the config
    pub precision: usize,

    /// Starting indices probed per slice, echoed from the config
    pub scan_range: usize,

    /// Chains recorded across the session
    pub chains_found: usize,

    /// Length of each recorded chain, in discovery order
    pub lengths: Vec<usize>,
}

impl ScanSummary {
    /// Mean recorded chain length, or `None` when nothing was found.
    pub fn average_length(&self) -> Option<f64> {
        if self.lengths.is_empty() {
            None
        } else {
            Some(self.lengths.iter().sum::<usize>() as f64 / self.lengths.len() as f64)
        }
    }

    /// Longest recorded chain, or `None` when nothing was found.
    pub fn longest(&self) -> Option<usize> {
        self.lengths.iter().copied().max()
    }
}

/// Run a full scan session against the digit source at `source`.
///
/// Emits slice-load announcements, one block per recorded chain, and a final
/// summary through the reporter, then returns the same statistics as a
/// `ScanSummary`.
///
/// # Errors
/// `Error::SourceUnavailable` if the source cannot be read; `Error::Io` if
/// the report sink fails. Everything else is absorbed into the summary.
pub fn run_scan(source: &Path, config: &ScanConfig, reporter: &mut Reporter) -> Result<ScanSummary> {
    let mut chain_count = 0usize;
    let mut lengths: Vec<usize> = Vec::new();
    let mut current_start = config.start_offset;
    let mut found_any = false;

    while !found_any {
        reporter.line("")?;
        reporter.line(&format!(
            "Loading digits from offset {} with length {}...",
            current_start, config.precision
        ))?;
        let slice = load_digits(source, config.precision, current_start)?;
        let set = encode(&slice.digits, config.window_size);

        reporter.line("Searching for QEAC chains...")?;
        let range = config.scan_range.min(set.len());
        for start_index in 0..range {
            if chain_count >= config.max_chains {
                break;
            }
            let chain = build_chain(&set, start_index, config.threshold, config.max_links)?;
            if chain.len() <= 1 {
                continue;
            }

            found_any = true;
            chain_count += 1;
            lengths.push(chain.len());

            let global_pos = current_start + start_index;
            reporter.line("")?;
            reporter.line(&format!(
                "QEAC Chain {} (start index {}):",
                chain_count, global_pos
            ))?;
            for (j, link) in chain.links.iter().enumerate() {
                reporter.line(&format!(
                    "  Link {}: {} (position {})",
                    j,
                    link.bit_string(),
                    global_pos + j
                ))?;
                reporter.line(&format!("       digits: {}", link.digits))?;
            }
            reporter.line(&format!(
                "  QEAC Length: {} | Integrity Hash: {}",
                chain.len(),
                chain.integrity_hash()
            ))?;
            reporter.line(&"-".repeat(50))?;
        }

        if !found_any {
            current_start += config.step_size;
            if current_start + config.precision > config.source_bound {
                reporter.line("Reached the end of the digit source without finding chains.")?;
                break;
            }
        }
    }

    let summary = ScanSummary {
        final_offset: current_start,
        precision: config.precision,
        scan_range: config.scan_range,
        chains_found: chain_count,
        lengths,
    };
    report_summary(&summary, reporter)?;
    Ok(summary)
}

/// Emit the final summary block.
fn report_summary(summary: &ScanSummary, reporter: &mut Reporter) -> Result<()> {
    reporter.line("")?;
    reporter.line("=== QEAC Summary Report ===")?;
    reporter.line(&format!("Final Start Offset: {}", summary.final_offset))?;
    reporter.line(&format!("Precision Loaded: {} digits", summary.precision))?;
    reporter.line(&format!("Scan Range: {} windows", summary.scan_range))?;
    reporter.line(&format!("Chains Found: {}", summary.chains_found))?;
    match (summary.average_length(), summary.longest()) {
        (Some(average), Some(longest)) => {
            reporter.line(&format!("Average Chain Length: {:.2}", average))?;
            reporter.line(&format!("Longest Chain Length: {}", longest))?;
        }
        _ => {
            reporter.line("Average Chain Length: N/A")?;
            reporter.line("Longest Chain Length: N/A")?;
        }
    }
    Ok(())
}
