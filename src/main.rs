use clap::{Parser, Subcommand};
use colored::Colorize;
use radix::arith::ArithOp;
use radix::batch::{self, BatchOptions};
use radix::config::AppConfig;
use radix::{convert_base, detect_base, repl, validate, Error, Result};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "radix")]
#[command(about = "Base conversion and integer arithmetic for bases 2-36")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a number between bases
    Convert {
        #[arg(allow_hyphen_values = true)]
        number: String,
        /// Source base; detected from the radix prefix when omitted
        #[arg(long)]
        from: Option<u32>,
        /// Target base
        #[arg(long)]
        to: u32,
    },
    /// Evaluate an arithmetic expression in one base
    Eval {
        #[arg(allow_hyphen_values = true)]
        operand_a: String,
        /// Operation: add, subtract, multiply, divide, modulo, power (or + - * / % ^)
        #[arg(allow_hyphen_values = true)]
        op: String,
        #[arg(allow_hyphen_values = true)]
        operand_b: String,
        #[arg(long, default_value_t = 10)]
        base: u32,
    },
    /// Guess the base of a number from its radix prefix
    Detect {
        #[arg(allow_hyphen_values = true)]
        number: String,
    },
    /// Check that a number is well-formed in a base
    Validate {
        #[arg(allow_hyphen_values = true)]
        number: String,
        #[arg(long)]
        base: u32,
    },
    /// Convert a file of numbers, one per line
    Batch {
        file: PathBuf,
        #[arg(long)]
        from: u32,
        #[arg(long)]
        to: u32,
        /// Write results here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Start the interactive REPL
    Repl,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::load_or_create_default().unwrap_or_else(|e| {
        eprintln!("Warning: falling back to default configuration: {}", e);
        AppConfig::default()
    });
    let colors = config.display.colors;

    let outcome = match cli.command {
        Commands::Convert { number, from, to } => run_convert(&number, from, to),
        Commands::Eval { operand_a, op, operand_b, base } => {
            run_eval(&operand_a, &op, &operand_b, base)
        }
        Commands::Detect { number } => run_detect(&number),
        Commands::Validate { number, base } => run_validate(&number, base),
        Commands::Batch { file, from, to, output } => run_batch(&file, from, to, output.as_deref()),
        Commands::Repl => repl::run(config).map(|_| ExitCode::SUCCESS),
    };

    match outcome {
        Ok(code) => code,
        Err(error) => {
            print_error(&error, colors);
            ExitCode::FAILURE
        }
    }
}

fn run_convert(number: &str, from: Option<u32>, to: u32) -> Result<ExitCode> {
    let source = from.unwrap_or_else(|| detect_base(number));
    println!("{}", convert_base(number, source, to)?);
    Ok(ExitCode::SUCCESS)
}

fn run_eval(operand_a: &str, op: &str, operand_b: &str, base: u32) -> Result<ExitCode> {
    let op: ArithOp = op.parse()?;
    println!("{}", radix::arithmetic(op, operand_a, operand_b, base)?);
    Ok(ExitCode::SUCCESS)
}

fn run_detect(number: &str) -> Result<ExitCode> {
    println!("{}", detect_base(number));
    Ok(ExitCode::SUCCESS)
}

fn run_validate(number: &str, base: u32) -> Result<ExitCode> {
    validate(number, base)?;
    println!("{} is valid in base {}", number, base);
    Ok(ExitCode::SUCCESS)
}

fn run_batch(
    file: &std::path::Path,
    from: u32,
    to: u32,
    output: Option<&std::path::Path>,
) -> Result<ExitCode> {
    let options = BatchOptions { source_base: from, target_base: to };
    let report = batch::process_file(file, options)?;

    match output {
        Some(path) => {
            report.save_to_file(path)?;
            eprintln!(
                "{} converted, {} failed, written to {}",
                report.succeeded(),
                report.failed(),
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            report.write_to(&mut handle)?;
        }
    }

    if report.failed() > 0 {
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}

fn print_error(error: &Error, colors: bool) {
    if colors {
        eprintln!("{} {}", "Error:".red().bold(), error);
    } else {
        eprintln!("Error: {}", error);
    }
    for suggestion in error.recovery_suggestions() {
        eprintln!("  • {}", suggestion);
    }
}
