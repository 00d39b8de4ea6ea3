//! Session history with explicit export
//!
//! Keeps a size-capped, in-memory record of evaluations (REPL lines or
//! GUI commands) and exports it on demand. Nothing is persisted in the
//! background; export is always an explicit call.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single recorded evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Line number in the session
    pub line_number: usize,
    /// The input expression
    pub input: String,
    /// The rendered result, or the error message
    pub output: String,
    /// Whether the evaluation succeeded
    pub success: bool,
    /// When the entry was recorded
    pub timestamp: SystemTime,
}

impl HistoryEntry {
    pub fn new(line_number: usize, input: impl Into<String>, output: impl Into<String>, success: bool) -> Self {
        Self {
            line_number,
            input: input.into(),
            output: output.into(),
            success,
            timestamp: SystemTime::now(),
        }
    }
}

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    PlainText,
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "text" | "txt" | "plain" => Ok(ExportFormat::PlainText),
            other => Err(Error::UnsupportedOperation {
                reason: format!("unknown export format '{}'", other),
            }),
        }
    }
}

impl ExportFormat {
    /// Pick a format from a file extension, defaulting to plain text
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => ExportFormat::Json,
            Some("csv") => ExportFormat::Csv,
            _ => ExportFormat::PlainText,
        }
    }
}

/// Size-capped session history, oldest entries evicted first
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record an entry, evicting the oldest once the cap is reached
    pub fn record(&mut self, entry: HistoryEntry) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Entries in insertion order, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Write the history to a writer in the given format
    pub fn export<W: Write>(&self, writer: &mut W, format: ExportFormat) -> Result<()> {
        match format {
            ExportFormat::Json => {
                let entries: Vec<&HistoryEntry> = self.entries.iter().collect();
                let json = serde_json::to_string_pretty(&entries)
                    .map_err(|e| Error::Io(e.to_string()))?;
                writeln!(writer, "{}", json)?;
            }
            ExportFormat::Csv => {
                writeln!(writer, "line_number,success,input,output")?;
                for entry in &self.entries {
                    writeln!(
                        writer,
                        "{},{},\"{}\",\"{}\"",
                        entry.line_number,
                        entry.success,
                        entry.input.replace('"', "\"\""),
                        entry.output.replace('"', "\"\"")
                    )?;
                }
            }
            ExportFormat::PlainText => {
                for entry in &self.entries {
                    writeln!(writer, "[{}] {} => {}", entry.line_number, entry.input, entry.output)?;
                }
            }
        }
        Ok(())
    }

    /// Export to a file, choosing the format from the extension
    pub fn export_to_file<P: AsRef<Path>>(&self, path: P) -> Result<ExportFormat> {
        let path = path.as_ref();
        let format = ExportFormat::from_path(path);
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.export(&mut writer, format)?;
        writer.flush()?;
        Ok(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(line: usize, input: &str, output: &str) -> HistoryEntry {
        HistoryEntry::new(line, input, output, true)
    }

    #[test]
    fn test_record_and_iterate() {
        let mut history = History::new(10);
        history.record(entry(1, "FF", "255"));
        history.record(entry(2, "1010", "10"));

        let inputs: Vec<&str> = history.entries().map(|e| e.input.as_str()).collect();
        assert_eq!(inputs, vec!["FF", "1010"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::new(3);
        for i in 1..=5 {
            history.record(entry(i, &format!("input{}", i), "out"));
        }
        assert_eq!(history.len(), 3);
        let lines: Vec<usize> = history.entries().map(|e| e.line_number).collect();
        assert_eq!(lines, vec![3, 4, 5]);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new(10);
        history.record(entry(1, "a", "b"));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("h.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("h.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("h.txt")), ExportFormat::PlainText);
        assert_eq!(ExportFormat::from_path(Path::new("history")), ExportFormat::PlainText);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert!("yaml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_plain_text() {
        let mut history = History::new(10);
        history.record(entry(1, "FF -> 10", "255"));

        let mut buffer = Vec::new();
        history.export(&mut buffer, ExportFormat::PlainText).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "[1] FF -> 10 => 255\n");
    }

    #[test]
    fn test_export_csv_escapes_quotes() {
        let mut history = History::new(10);
        history.record(entry(1, "say \"hi\"", "oops"));

        let mut buffer = Vec::new();
        history.export(&mut buffer, ExportFormat::Csv).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"say \"\"hi\"\"\""));
    }

    #[test]
    fn test_export_json_round_trips() {
        let mut history = History::new(10);
        history.record(entry(7, "2 + 2", "4"));

        let mut buffer = Vec::new();
        history.export(&mut buffer, ExportFormat::Json).unwrap();
        let parsed: Vec<HistoryEntry> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].line_number, 7);
        assert_eq!(parsed[0].input, "2 + 2");
    }

    #[test]
    fn test_export_to_file_picks_format() {
        let dir = TempDir::new().unwrap();
        let mut history = History::new(10);
        history.record(entry(1, "a", "b"));

        let json_path = dir.path().join("out.json");
        assert_eq!(history.export_to_file(&json_path).unwrap(), ExportFormat::Json);
        assert!(json_path.exists());
    }
}
