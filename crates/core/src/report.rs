//! Line-oriented report sink.
//!
//! Every line written through the reporter lands in the report file and,
//! unless silenced, on stdout as well. The scan controller owns the report
//! format; this module is only the plumbing.

use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Duplicates report lines to a file and (optionally) the console.
pub struct Reporter {
    file: File,
    echo: bool,
}

impl Reporter {
    /// Create or truncate the report file; lines also echo to stdout.
    pub fn create(path: &Path) -> Result<Self> {
        Ok(Self {
            file: File::create(path)?,
            echo: true,
        })
    }

    /// File-only reporter, used by tests and quiet runs.
    pub fn silent(path: &Path) -> Result<Self> {
        Ok(Self {
            file: File::create(path)?,
            echo: false,
        })
    }

    /// Write one line to the file and mirror it to the console.
    pub fn line(&mut self, msg: &str) -> Result<()> {
        if self.echo {
            println!("{}", msg);
        }
        writeln!(self.file, "{}", msg)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_persisted() {
        let path = std::env::temp_dir().join("qeac_report_test_lines.txt");
        {
            let mut reporter = Reporter::silent(&path).unwrap();
            reporter.line("first").unwrap();
            reporter.line("second").unwrap();
        }
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_create_truncates() {
        let path = std::env::temp_dir().join("qeac_report_test_truncate.txt");
        {
            let mut reporter = Reporter::silent(&path).unwrap();
            reporter.line("old run").unwrap();
        }
        {
            let mut reporter = Reporter::silent(&path).unwrap();
            reporter.line("new run").unwrap();
        }
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "new run\n");
    }
}
