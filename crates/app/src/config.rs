//! Configuration for the qeac-finder application.
//!
//! Handles parsing command-line arguments over sensible defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using the same constants the
//! original exploration ran with. All defaults are printable so runs are
//! reproducible.

use qeac_finder_core::scan::ScanConfig;
use std::path::PathBuf;

/// Complete configuration for a scan run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Files ===
    /// Digit source path
    pub source: PathBuf,

    /// Report output path
    pub report: PathBuf,

    // === Scan ===
    /// Core scan parameters
    pub scan: ScanConfig,

    // === Generation ===
    /// Generate a synthetic digit source of this many digits before scanning
    pub gen_digits: Option<usize>,

    /// Seed for synthetic generation
    pub seed: u64,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// Unset options fall back to the defaults of `ScanConfig::default()`;
    /// the seed defaults to the current time so generated sources differ
    /// between runs unless pinned with `--seed`.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut source: Option<PathBuf> = None;
        let mut report: Option<PathBuf> = None;
        let mut scan = ScanConfig::default();
        let mut gen_digits: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut print_config = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--source" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--source requires a path".to_string());
                    }
                    source = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    report = Some(PathBuf::from(&args[i]));
                }
                "--start" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--start requires a number".to_string());
                    }
                    scan.start_offset = args[i].parse().map_err(|_| "invalid start")?;
                }
                "--precision" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--precision requires a number".to_string());
                    }
                    scan.precision = args[i].parse().map_err(|_| "invalid precision")?;
                }
                "--step" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--step requires a number".to_string());
                    }
                    scan.step_size = args[i].parse().map_err(|_| "invalid step")?;
                }
                "--max-chains" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--max-chains requires a number".to_string());
                    }
                    scan.max_chains = args[i].parse().map_err(|_| "invalid max-chains")?;
                }
                "--max-links" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--max-links requires a number".to_string());
                    }
                    scan.max_links = args[i].parse().map_err(|_| "invalid max-links")?;
                }
                "--scan-range" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--scan-range requires a number".to_string());
                    }
                    scan.scan_range = args[i].parse().map_err(|_| "invalid scan-range")?;
                }
                "--window-size" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--window-size requires a number".to_string());
                    }
                    scan.window_size = args[i].parse().map_err(|_| "invalid window-size")?;
                }
                "--threshold" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--threshold requires a number".to_string());
                    }
                    scan.threshold = args[i].parse().map_err(|_| "invalid threshold")?;
                }
                "--bound" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--bound requires a number".to_string());
                    }
                    scan.source_bound = args[i].parse().map_err(|_| "invalid bound")?;
                }
                "--gen-digits" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--gen-digits requires a number".to_string());
                    }
                    gen_digits = Some(args[i].parse().map_err(|_| "invalid gen-digits")?);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        if scan.window_size == 0 {
            return Err("window-size must be at least 1".to_string());
        }
        if scan.step_size == 0 {
            return Err("step must be at least 1".to_string());
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            source: source.unwrap_or_else(|| PathBuf::from("pi-10million.txt")),
            report: report.unwrap_or_else(|| PathBuf::from("qeac_output.txt")),
            scan,
            gen_digits,
            seed,
            print_config,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Digit source: {}", self.source.display());
        println!("Report file:  {}", self.report.display());
        if let Some(n) = self.gen_digits {
            println!("Generate: {} synthetic digits (seed {})", n, self.seed);
        }
        println!();
        println!("=== Scan ===");
        println!("Start offset: {}", self.scan.start_offset);
        println!("Precision: {} digits per slice", self.scan.precision);
        println!("Step size: {}", self.scan.step_size);
        println!("Max chains: {}", self.scan.max_chains);
        println!("Max links per chain: {}", self.scan.max_links);
        println!("Scan range: {} windows", self.scan.scan_range);
        println!("Window size: {} bits", self.scan.window_size);
        println!("Threshold: {}", self.scan.threshold);
        println!("Source bound: {} digits", self.scan.source_bound);
        println!();
    }
}

fn print_help() {
    println!("qeac-finder: scan a digit stream for QEAC chains");
    println!();
    println!("USAGE:");
    println!("    qeac-finder [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --source <PATH>      Digit source file (default: pi-10million.txt)");
    println!("    --out <PATH>         Report file (default: qeac_output.txt)");
    println!();
    println!("    --start <N>          Initial digit offset (default: 100000)");
    println!("    --precision <N>      Digits loaded per slice (default: 200000)");
    println!("    --step <N>           Offset advance on an empty slice (default: 100000)");
    println!("    --max-chains <N>     Stop after this many chains (default: 5)");
    println!("    --max-links <N>      Per-chain link cap (default: 10)");
    println!("    --scan-range <N>     Starting indices tried per slice (default: 500)");
    println!("    --window-size <N>    Bits per window (default: 33)");
    println!("    --threshold <F>      Minimum correlation to extend (default: 0.8)");
    println!("    --bound <N>          Total digits available in the source (default: 10000000)");
    println!();
    println!("    --gen-digits <N>     Write N synthetic digits to --source before scanning");
    println!("    --seed <N>           Seed for synthetic generation");
    println!();
    println!("    --print-config       Print resolved configuration");
    println!("    --help, -h           Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    qeac-finder                                  # Scan pi-10million.txt with defaults");
    println!("    qeac-finder --source digits.txt --start 0    # Scan another source from the top");
    println!("    qeac-finder --gen-digits 50000 --seed 42 --source demo.txt --start 0 --precision 50000 --bound 50000");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_zero_args_uses_defaults() {
        let config = Config::from_args(&[]).unwrap();
        assert_eq!(config.source, PathBuf::from("pi-10million.txt"));
        assert_eq!(config.report, PathBuf::from("qeac_output.txt"));
        assert_eq!(config.scan.start_offset, 100_000);
        assert_eq!(config.scan.threshold, 0.8);
        assert!(config.gen_digits.is_none());
    }

    #[test]
    fn test_parses_scan_parameters() {
        let config = Config::from_args(&args(&[
            "--start", "0", "--precision", "5000", "--step", "1000", "--max-chains", "3",
            "--max-links", "4", "--scan-range", "50", "--window-size", "16", "--threshold",
            "0.95", "--bound", "20000",
        ]))
        .unwrap();
        assert_eq!(config.scan.start_offset, 0);
        assert_eq!(config.scan.precision, 5_000);
        assert_eq!(config.scan.step_size, 1_000);
        assert_eq!(config.scan.max_chains, 3);
        assert_eq!(config.scan.max_links, 4);
        assert_eq!(config.scan.scan_range, 50);
        assert_eq!(config.scan.window_size, 16);
        assert_eq!(config.scan.threshold, 0.95);
        assert_eq!(config.scan.source_bound, 20_000);
    }

    #[test]
    fn test_unknown_argument_rejected() {
        let err = Config::from_args(&args(&["--frobnicate"])).unwrap_err();
        assert!(err.contains("unknown argument"));
    }

    #[test]
    fn test_missing_value_rejected() {
        let err = Config::from_args(&args(&["--precision"])).unwrap_err();
        assert!(err.contains("--precision"));
    }

    #[test]
    fn test_zero_window_size_rejected() {
        let err = Config::from_args(&args(&["--window-size", "0"])).unwrap_err();
        assert!(err.contains("window-size"));
    }

    #[test]
    fn test_explicit_seed() {
        let config = Config::from_args(&args(&["--seed", "42"])).unwrap();
        assert_eq!(config.seed, 42);
    }
}
