//! Input validation for based numbers
//!
//! Validation is a pure predicate over `(number, base)` and runs before
//! any conversion. It enforces the digit alphabet invariant: every
//! digit of a based number maps to a value strictly below its base.

use crate::alphabet::{check_base, digit_value};
use crate::error::{Error, Result};

/// Sign of a based number as written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

/// Split an optional leading sign off a trimmed input string.
///
/// A lone sign with nothing after it is `EmptyInput`; a sign anywhere
/// else is caught later as `MalformedSign` by the digit scan.
pub(crate) fn split_sign(number: &str) -> Result<(Sign, &str)> {
    let trimmed = number.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (Sign::Negative, rest),
        None => match trimmed.strip_prefix('+') {
            Some(rest) => (Sign::Positive, rest),
            None => (Sign::Positive, trimmed),
        },
    };
    if rest.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok((sign, rest))
}

/// Strip a radix prefix when it matches the requested base.
///
/// `0x`/`0X` is only a prefix in base 16, `0b`/`0B` in base 2 and
/// `0o`/`0O` in base 8. In any other base those characters are plain
/// digits ("0B1" is a valid base-12 number).
pub(crate) fn strip_base_prefix(digits: &str, base: u32) -> Result<&str> {
    let stripped = match base {
        16 => digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")),
        8 => digits.strip_prefix("0o").or_else(|| digits.strip_prefix("0O")),
        2 => digits.strip_prefix("0b").or_else(|| digits.strip_prefix("0B")),
        _ => None,
    };
    match stripped {
        Some(rest) if rest.is_empty() => Err(Error::EmptyInput),
        Some(rest) => Ok(rest),
        None => Ok(digits),
    }
}

/// Check every digit of `digits` against `base`.
///
/// Distinguishes a stray sign character (`MalformedSign`) from an
/// ordinary unmapped or out-of-range digit (`InvalidDigit`).
pub(crate) fn check_digits(digits: &str, base: u32) -> Result<()> {
    for ch in digits.chars() {
        if ch == '+' || ch == '-' {
            return Err(Error::MalformedSign);
        }
        match digit_value(ch) {
            Some(value) if value < base => {}
            _ => return Err(Error::InvalidDigit { digit: ch, base }),
        }
    }
    Ok(())
}

/// Validate a based number against a base.
///
/// Succeeds iff `number` is an optional sign followed by one or more
/// digits of the base's alphabet (with a matching radix prefix allowed).
/// Fails with `InvalidBase`, `EmptyInput`, `MalformedSign` or
/// `InvalidDigit`.
pub fn validate(number: &str, base: u32) -> Result<()> {
    check_base(base)?;
    let (_, unsigned) = split_sign(number)?;
    let digits = strip_base_prefix(unsigned, base)?;
    check_digits(digits, base)
}
