//! Interactive REPL
//!
//! Line-oriented loop over the conversion and arithmetic engine. Two
//! expression shapes are understood:
//!
//! - `<number>` — convert from the working input base (or the base a
//!   radix prefix announces) to the working output base,
//! - `<a> <op> <b>` — arithmetic in the working input base.
//!
//! Meta commands start with `:`; `:help` lists them.

use std::time::{Duration, Instant};

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::alphabet::{MAX_BASE, MIN_BASE};
use crate::arith::{arithmetic, ArithOp};
use crate::config::AppConfig;
use crate::convert::convert_base;
use crate::detect::detect_base;
use crate::error::{Error, Result};
use crate::history::{History, HistoryEntry};

/// Result of evaluating one line
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub output: String,
    pub execution_time: Duration,
}

/// REPL engine holding the session state
///
/// Separate from the terminal loop so the GUI and tests can drive it
/// without a TTY.
pub struct ReplEngine {
    input_base: u32,
    output_base: u32,
    history: History,
    line_number: usize,
    lowercase_digits: bool,
}

impl ReplEngine {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            input_base: config.default_base,
            output_base: config.default_base,
            history: History::new(config.history_size),
            line_number: 1,
            lowercase_digits: config.display.lowercase_digits,
        }
    }

    pub fn input_base(&self) -> u32 {
        self.input_base
    }

    pub fn output_base(&self) -> u32 {
        self.output_base
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Evaluate one line: a meta command, a conversion or an arithmetic
    /// expression. Failed expressions are recorded in history too.
    pub fn evaluate_line(&mut self, input: &str) -> Result<Evaluation> {
        let started = Instant::now();
        let trimmed = input.trim();

        let result = if let Some(meta) = trimmed.strip_prefix(':') {
            self.handle_meta_command(meta)
        } else {
            let evaluated = self.evaluate_expression(trimmed);
            match &evaluated {
                Ok(output) => {
                    self.history
                        .record(HistoryEntry::new(self.line_number, trimmed, output.clone(), true));
                }
                Err(error) => {
                    self.history.record(HistoryEntry::new(
                        self.line_number,
                        trimmed,
                        error.to_string(),
                        false,
                    ));
                }
            }
            evaluated
        };

        self.line_number += 1;
        result.map(|output| Evaluation {
            output,
            execution_time: started.elapsed(),
        })
    }

    fn evaluate_expression(&mut self, expression: &str) -> Result<String> {
        let tokens: Vec<&str> = expression.split_whitespace().collect();
        match tokens.as_slice() {
            [number] => {
                let source = self.base_for(number);
                let converted = convert_base(number, source, self.output_base)?;
                Ok(self.render(converted))
            }
            [lhs, op, rhs] => {
                let op: ArithOp = op.parse()?;
                let result = arithmetic(op, lhs, rhs, self.input_base)?;
                let rendered = if self.output_base == self.input_base {
                    result
                } else {
                    convert_base(&result, self.input_base, self.output_base)?
                };
                Ok(self.render(rendered))
            }
            _ => Err(Error::UnsupportedOperation {
                reason: "expected '<number>' or '<a> <op> <b>'".to_string(),
            }),
        }
    }

    /// A radix prefix overrides the working input base
    fn base_for(&self, number: &str) -> u32 {
        match detect_base(number) {
            10 => self.input_base,
            prefixed => prefixed,
        }
    }

    fn render(&self, value: String) -> String {
        if self.lowercase_digits {
            value.to_lowercase()
        } else {
            value
        }
    }

    fn handle_meta_command(&mut self, meta: &str) -> Result<String> {
        let mut parts = meta.split_whitespace();
        let command = parts.next().unwrap_or("");
        let argument = parts.next();

        match command {
            "base" => {
                let base = self.parse_base_argument(argument)?;
                self.input_base = base;
                self.output_base = base;
                Ok(format!("working base set to {}", base))
            }
            "in" => {
                let base = self.parse_base_argument(argument)?;
                self.input_base = base;
                Ok(format!("input base set to {}", base))
            }
            "out" => {
                let base = self.parse_base_argument(argument)?;
                self.output_base = base;
                Ok(format!("output base set to {}", base))
            }
            "detect" => {
                let number = argument.ok_or_else(|| Error::UnsupportedOperation {
                    reason: "usage: :detect <number>".to_string(),
                })?;
                Ok(format!("{} looks like base {}", number, detect_base(number)))
            }
            "history" => {
                if self.history.is_empty() {
                    return Ok("history is empty".to_string());
                }
                let lines: Vec<String> = self
                    .history
                    .entries()
                    .map(|e| format!("[{}] {} => {}", e.line_number, e.input, e.output))
                    .collect();
                Ok(lines.join("\n"))
            }
            "export" => {
                let path = argument.ok_or_else(|| Error::UnsupportedOperation {
                    reason: "usage: :export <path> (.json, .csv or .txt)".to_string(),
                })?;
                let format = self.history.export_to_file(path)?;
                Ok(format!(
                    "exported {} entries to {} ({:?})",
                    self.history.len(),
                    path,
                    format
                ))
            }
            "clear" => {
                self.history.clear();
                Ok("history cleared".to_string())
            }
            "help" => Ok(help_text()),
            other => Err(Error::UnsupportedOperation {
                reason: format!("unknown meta command ':{}' (try :help)", other),
            }),
        }
    }

    fn parse_base_argument(&self, argument: Option<&str>) -> Result<u32> {
        let raw = argument.ok_or_else(|| Error::UnsupportedOperation {
            reason: format!("usage: :base <{}-{}>", MIN_BASE, MAX_BASE),
        })?;
        let base: u32 = raw.parse().map_err(|_| Error::InvalidBase { base: 0 })?;
        crate::alphabet::check_base(base)?;
        Ok(base)
    }
}

fn help_text() -> String {
    [
        "expressions:",
        "  <number>          convert to the output base (radix prefix wins)",
        "  <a> <op> <b>      arithmetic in the input base (+ - * / % ^)",
        "meta commands:",
        "  :base N           set input and output base",
        "  :in N / :out N    set one side only",
        "  :detect <number>  guess a base from the radix prefix",
        "  :history          show this session's evaluations",
        "  :export <path>    write history to a file (.json, .csv, .txt)",
        "  :clear            clear history",
        "  :help             this text",
        "  exit / quit       leave",
    ]
    .join("\n")
}

/// Run the interactive terminal loop
pub fn run(config: AppConfig) -> Result<()> {
    println!("radix — base conversion and arithmetic (bases {}-{})", MIN_BASE, MAX_BASE);
    println!("Type expressions to evaluate, :help for commands, 'exit' to quit.");
    println!();

    let colors = config.display.colors;
    let mut engine = ReplEngine::new(&config);
    let mut rl = DefaultEditor::new().map_err(|e| Error::Io(e.to_string()))?;

    loop {
        let prompt = format!("radix[{}] b{}> ", engine.line_number(), engine.input_base());
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" || line == "quit" {
                    println!("Goodbye!");
                    break;
                }
                let _ = rl.add_history_entry(line);

                match engine.evaluate_line(line) {
                    Ok(evaluation) => println!("{}", evaluation.output),
                    Err(error) => print_repl_error(&error, colors),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error reading line: {}", err);
                break;
            }
        }
    }

    Ok(())
}

fn print_repl_error(error: &Error, colors: bool) {
    if colors {
        eprintln!("{} {}", "Error:".red().bold(), error);
    } else {
        eprintln!("Error: {}", error);
    }
    for suggestion in error.recovery_suggestions() {
        eprintln!("  • {}", suggestion);
    }
}
