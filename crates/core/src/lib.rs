//! qeac-finder-core: scan a decimal digit stream for QEAC chains.
//!
//! This library provides the core components for an exploratory analysis tool
//! that:
//! - Loads a slice of a long digit source (the digits of pi, typically)
//! - Encodes each digit as a 4-bit code and partitions the bitstream into
//!   fixed-width windows
//! - Scores adjacent windows with an entropy-based similarity ("correlation")
//! - Greedily links windows into chains wherever the score stays above a
//!   threshold
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `source`: digit source loading and cleanup
//! - `encode`: digit-to-bitstream encoding and windowing
//! - `correlation`: Shannon entropy and the QEAC similarity score
//! - `chain`: greedy chain extension and the chain integrity digest
//! - `scan`: the slice/retry control loop and summary statistics
//! - `report`: line-oriented output duplicated to console and file
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and recoverable
//! - **Bounded work**: the retry loop terminates once the source bound would
//!   be exceeded, even when nothing is ever found
//! - **Single-threaded**: every stage runs to completion in sequence

pub mod chain;
pub mod correlation;
pub mod encode;
pub mod error;
pub mod report;
pub mod scan;
pub mod source;

// Re-export commonly used types
pub use error::{Error, Result};
