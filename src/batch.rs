//! Batch conversion over line-oriented files
//!
//! One based number per line, converted from a source base to a target
//! base. A bad line never aborts the run; every outcome is recorded and
//! reported so a large file surfaces all of its problems at once.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::alphabet::check_base;
use crate::convert::convert_base;
use crate::error::Result;

/// Source and target bases for a batch run
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub source_base: u32,
    pub target_base: u32,
}

/// Outcome of converting one input line
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    /// 1-based line number in the input
    pub line_number: usize,
    /// The input as written (trimmed)
    pub input: String,
    /// Converted value, or the error message for this line
    pub outcome: std::result::Result<String, String>,
}

impl LineOutcome {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Aggregated result of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<LineOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Write one line per outcome: `input => output` or `input !! error`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for outcome in &self.outcomes {
            match &outcome.outcome {
                Ok(converted) => writeln!(writer, "{} => {}", outcome.input, converted)?,
                Err(message) => writeln!(
                    writer,
                    "{} !! line {}: {}",
                    outcome.input, outcome.line_number, message
                )?,
            }
        }
        Ok(())
    }

    /// Save the report to a file via a temp file and atomic rename
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let temp_path = path.with_extension("tmp");
        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            self.write_to(&mut writer)?;
            writer.flush()?;
        }
        std::fs::rename(&temp_path, path)?;
        Ok(())
    }
}

/// Convert every line read from `reader`.
///
/// Blank lines and `#` comment lines are skipped and do not count as
/// input lines in the report (their line numbers still advance).
pub fn process_reader<R: BufRead>(reader: R, options: BatchOptions) -> Result<BatchReport> {
    check_base(options.source_base)?;
    check_base(options.target_base)?;

    let mut report = BatchReport::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let outcome = convert_base(trimmed, options.source_base, options.target_base)
            .map_err(|e| e.to_string());
        report.outcomes.push(LineOutcome {
            line_number: index + 1,
            input: trimmed.to_string(),
            outcome,
        });
    }
    Ok(report)
}

/// Convert every line of a file
pub fn process_file<P: AsRef<Path>>(path: P, options: BatchOptions) -> Result<BatchReport> {
    let file = File::open(path.as_ref())?;
    process_reader(BufReader::new(file), options)
}
