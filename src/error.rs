use thiserror::Error;

use crate::alphabet::{MAX_BASE, MIN_BASE};

pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the radix engine
///
/// Every failure mode is an input-validation failure reported to the
/// caller; nothing is retried or recovered internally.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid base {base}: bases must be between 2 and 36")]
    InvalidBase { base: u32 },

    #[error("empty input: no digits to parse")]
    EmptyInput,

    #[error("invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    #[error("malformed sign: at most one leading '+' or '-' is allowed")]
    MalformedSign,

    #[error("division by zero")]
    DivisionByZero,

    #[error("unsupported operation: {reason}")]
    UnsupportedOperation { reason: String },

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl Error {
    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Error::InvalidBase { base } => vec![format!(
                "Pick a base between {} and {}; got {}",
                MIN_BASE, MAX_BASE, base
            )],
            Error::EmptyInput => vec![
                "Provide at least one digit, e.g. '0' or 'FF'".to_string(),
            ],
            Error::InvalidDigit { digit, base } => {
                let mut suggestions = vec![format!(
                    "Base {} accepts digits {}",
                    base,
                    crate::alphabet::digit_range_description(*base)
                )];
                if let Some(value) = crate::alphabet::digit_value(*digit) {
                    suggestions.push(format!(
                        "'{}' has value {} and needs base {} or higher",
                        digit,
                        value,
                        value + 1
                    ));
                }
                suggestions
            }
            Error::MalformedSign => vec![
                "Write the sign once, before the digits: '-1A', not '1-A' or '--1A'".to_string(),
            ],
            Error::DivisionByZero => vec![
                "Check that the divisor is not zero".to_string(),
            ],
            Error::UnsupportedOperation { .. } => vec![
                "Supported operations: add, subtract, multiply, divide, modulo, power".to_string(),
                "Power requires a non-negative exponent that fits in 32 bits".to_string(),
            ],
            Error::Io(_) => vec![],
        }
    }
}
