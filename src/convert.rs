//! Base conversion over arbitrary-precision integers
//!
//! The canonical intermediate representation for every conversion is a
//! signed [`BigInt`]; based numbers of any length round-trip without
//! overflow.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::alphabet::{check_base, digit_char, digit_value};
use crate::error::{Error, Result};
use crate::validate::{check_digits, split_sign, strip_base_prefix, Sign};

/// Parse a based number into its decimal value.
///
/// Strips an optional leading sign and a radix prefix matching `base`,
/// maps each remaining character through the digit alphabet and folds
/// `value = value * base + digit` left to right, then applies the sign.
pub fn base_to_decimal(number: &str, base: u32) -> Result<BigInt> {
    check_base(base)?;
    let (sign, unsigned) = split_sign(number)?;
    let digits = strip_base_prefix(unsigned, base)?;
    check_digits(digits, base)?;

    let base_big = BigInt::from(base);
    let mut value = BigInt::zero();
    for ch in digits.chars() {
        // check_digits already proved every digit maps below base
        let digit = digit_value(ch).unwrap_or(0);
        value = value * &base_big + BigInt::from(digit);
    }
    if sign == Sign::Negative {
        value = -value;
    }
    Ok(value)
}

/// Render a decimal value as a based number.
///
/// Zero is the single digit `"0"`; otherwise the absolute value is
/// repeatedly divided by `base`, remainders collect least-significant
/// first and are reversed, and a `-` is re-attached for negative input.
/// Output digits are uppercase.
pub fn decimal_to_base(value: &BigInt, base: u32) -> Result<String> {
    check_base(base)?;
    if value.is_zero() {
        return Ok("0".to_string());
    }

    let base_big = BigInt::from(base);
    let mut magnitude = value.abs();
    let mut digits = Vec::new();
    while !magnitude.is_zero() {
        let (quotient, remainder) = magnitude.div_rem(&base_big);
        // the remainder is always below base, so the lookup cannot miss
        let ch = remainder
            .to_u32()
            .and_then(digit_char)
            .ok_or(Error::InvalidBase { base })?;
        digits.push(ch);
        magnitude = quotient;
    }
    if value.is_negative() {
        digits.push('-');
    }
    digits.reverse();
    Ok(digits.into_iter().collect())
}

/// Convert a based number from one base to another.
///
/// Composes [`base_to_decimal`] and [`decimal_to_base`]; converting to
/// and from the same base canonicalizes the representation (uppercase
/// digits, no prefix, no leading `+`).
pub fn convert_base(number: &str, source_base: u32, target_base: u32) -> Result<String> {
    check_base(target_base)?;
    let value = base_to_decimal(number, source_base)?;
    decimal_to_base(&value, target_base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_base_to_decimal_fixtures() {
        assert_eq!(base_to_decimal("FF", 16), Ok(big(255)));
        assert_eq!(base_to_decimal("1010", 2), Ok(big(10)));
        assert_eq!(base_to_decimal("777", 8), Ok(big(511)));
        assert_eq!(base_to_decimal("0", 10), Ok(big(0)));
        assert_eq!(base_to_decimal("Z", 36), Ok(big(35)));
    }

    #[test]
    fn test_base_to_decimal_signs_and_case() {
        assert_eq!(base_to_decimal("-1A", 16), Ok(big(-26)));
        assert_eq!(base_to_decimal("+1a", 16), Ok(big(26)));
        assert_eq!(base_to_decimal("-0", 10), Ok(big(0)));
    }

    #[test]
    fn test_base_to_decimal_prefixes() {
        assert_eq!(base_to_decimal("0xFF", 16), Ok(big(255)));
        assert_eq!(base_to_decimal("-0b1010", 2), Ok(big(-10)));
        assert_eq!(base_to_decimal("0o777", 8), Ok(big(511)));
    }

    #[test]
    fn test_base_to_decimal_rejects_bad_digits() {
        assert_eq!(
            base_to_decimal("G", 16),
            Err(Error::InvalidDigit { digit: 'G', base: 16 })
        );
        assert_eq!(
            base_to_decimal("19", 8),
            Err(Error::InvalidDigit { digit: '9', base: 8 })
        );
    }

    #[test]
    fn test_decimal_to_base_zero_everywhere() {
        for base in 2..=36 {
            assert_eq!(decimal_to_base(&big(0), base), Ok("0".to_string()));
        }
    }

    #[test]
    fn test_decimal_to_base_fixtures() {
        assert_eq!(decimal_to_base(&big(255), 16), Ok("FF".to_string()));
        assert_eq!(decimal_to_base(&big(10), 2), Ok("1010".to_string()));
        assert_eq!(decimal_to_base(&big(511), 8), Ok("777".to_string()));
        assert_eq!(decimal_to_base(&big(-26), 16), Ok("-1A".to_string()));
        assert_eq!(decimal_to_base(&big(35), 36), Ok("Z".to_string()));
    }

    #[test]
    fn test_decimal_to_base_rejects_bad_base() {
        assert_eq!(
            decimal_to_base(&big(10), 1),
            Err(Error::InvalidBase { base: 1 })
        );
        assert_eq!(
            decimal_to_base(&big(10), 40),
            Err(Error::InvalidBase { base: 40 })
        );
    }

    #[test]
    fn test_convert_base_fixture() {
        assert_eq!(convert_base("-1A", 16, 10), Ok("-26".to_string()));
        assert_eq!(convert_base("255", 10, 16), Ok("FF".to_string()));
        assert_eq!(convert_base("1010", 2, 16), Ok("A".to_string()));
    }

    #[test]
    fn test_convert_base_canonicalizes() {
        assert_eq!(convert_base("0xff", 16, 16), Ok("FF".to_string()));
        assert_eq!(convert_base("+42", 10, 10), Ok("42".to_string()));
    }

    #[test]
    fn test_convert_base_checks_target_before_parsing() {
        // a bad target base is reported even when the input is also bad
        assert_eq!(
            convert_base("G", 16, 99),
            Err(Error::InvalidBase { base: 99 })
        );
    }

    #[test]
    fn test_round_trip_large_value() {
        let value: BigInt = big(999_983) * big(999_979) * big(999_961);
        for base in 2..=36 {
            let rendered = decimal_to_base(&value, base).unwrap();
            assert_eq!(base_to_decimal(&rendered, base), Ok(value.clone()));
        }
    }
}
