//! qeac-finder: scan the digits of pi for locally self-similar bit-window
//! chains and write a line-oriented report.

mod config;
mod digit_gen;

use config::Config;
use qeac_finder_core::report::Reporter;
use qeac_finder_core::scan::run_scan;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {}", msg);
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Some(digit_count) = config.gen_digits {
        println!(
            "Generating {} synthetic digits into {} (seed {})...",
            digit_count,
            config.source.display(),
            config.seed
        );
        if let Err(err) = digit_gen::write_digit_file(&config.source, config.seed, digit_count) {
            eprintln!("error: failed to write digit source: {}", err);
            std::process::exit(1);
        }
    }

    let mut reporter = match Reporter::create(&config.report) {
        Ok(reporter) => reporter,
        Err(err) => {
            eprintln!("error: cannot open report file: {}", err);
            std::process::exit(1);
        }
    };

    match run_scan(&config.source, &config.scan, &mut reporter) {
        Ok(_summary) => {
            println!();
            println!("Results saved to {}", config.report.display());
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
