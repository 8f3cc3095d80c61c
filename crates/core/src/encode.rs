//! Digit-to-bitstream encoding and fixed-width windowing.
//!
//! Each decimal digit maps to its zero-padded 4-bit binary code; the codes
//! concatenate into one bitstream, which is then partitioned into
//! non-overlapping windows of `window_size` bits. A trailing remainder
//! shorter than a full window is dropped.
//!
//! Every window carries a companion digit label: the approximate substring
//! of the original digits the window was derived from. With a 33-bit window
//! the label covers 9 digits (`33 / 4 + 1`), deliberately one more than the
//! exact ratio to cover partial bit overlaps. Labels may overlap between
//! adjacent windows and exist purely for reporting; the correlation score
//! never reads them.

/// Bits per encoded decimal digit.
pub const BITS_PER_DIGIT: usize = 4;

/// Default window width in bits.
pub const DEFAULT_WINDOW_SIZE: usize = 33;

/// Parallel lists of bit windows and their digit labels.
///
/// # Invariants
/// - `windows.len() == labels.len()`
/// - every window has exactly `window_size` bits, each 0 or 1
#[derive(Debug, Clone)]
pub struct WindowSet {
    windows: Vec<Vec<u8>>,
    labels: Vec<String>,
}

impl WindowSet {
    /// Number of windows (equal to the number of labels).
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// True if the input had fewer than `window_size` encodable bits.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// The bits of window `index`.
    pub fn window(&self, index: usize) -> &[u8] {
        &self.windows[index]
    }

    /// The digit label of window `index`.
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }
}

/// Encode a digit string into `window_size`-bit windows with digit labels.
///
/// Characters outside `0`-`9` are silently skipped (defensive filter; the
/// loader already produces clean digits). Windows step by `window_size`, so
/// they never overlap, and a final partial window is dropped.
///
/// Returns an empty set when fewer than `window_size` bits are available or
/// `window_size` is 0.
pub fn encode(digits: &str, window_size: usize) -> WindowSet {
    let clean: Vec<char> = digits.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut bitstream = Vec::with_capacity(clean.len() * BITS_PER_DIGIT);
    for &c in &clean {
        let value = c as u8 - b'0';
        for shift in (0..BITS_PER_DIGIT).rev() {
            bitstream.push((value >> shift) & 1);
        }
    }

    let mut windows = Vec::new();
    let mut labels = Vec::new();

    if window_size == 0 {
        return WindowSet { windows, labels };
    }

    let label_digits = window_size / BITS_PER_DIGIT + 1;

    let mut i = 0;
    while i + window_size <= bitstream.len() {
        windows.push(bitstream[i..i + window_size].to_vec());

        // Map back roughly: a 33-bit window covers ~9 digits
        let digit_start = i / BITS_PER_DIGIT;
        let digit_end = (digit_start + label_digits).min(clean.len());
        labels.push(clean[digit_start..digit_end].iter().collect());

        i += window_size;
    }

    WindowSet { windows, labels }
}
