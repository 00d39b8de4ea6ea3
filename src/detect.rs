//! Prefix-based base detection
//!
//! A heuristic, not a guarantee: only the conventional `0x`/`0o`/`0b`
//! prefixes are recognized, and an unprefixed string defaults to base
//! 10 regardless of its digit content ("CAFE" is reported as decimal).

/// Guess the base of a number from its radix prefix.
///
/// `0x`/`0X` means 16, `0o`/`0O` means 8, `0b`/`0B` means 2; anything
/// else is 10. A leading sign before the prefix is allowed.
pub fn detect_base(number: &str) -> u32 {
    let trimmed = number.trim();
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    let mut chars = unsigned.chars();
    if chars.next() != Some('0') {
        return 10;
    }
    match chars.next() {
        Some('x') | Some('X') => 16,
        Some('o') | Some('O') => 8,
        Some('b') | Some('B') => 2,
        _ => 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_prefixes() {
        assert_eq!(detect_base("0xFF"), 16);
        assert_eq!(detect_base("0X1A"), 16);
        assert_eq!(detect_base("0b1010"), 2);
        assert_eq!(detect_base("0B1"), 2);
        assert_eq!(detect_base("0o777"), 8);
        assert_eq!(detect_base("0O7"), 8);
    }

    #[test]
    fn test_defaults_to_decimal() {
        assert_eq!(detect_base("1234"), 10);
        assert_eq!(detect_base("0"), 10);
        assert_eq!(detect_base("01"), 10);
        assert_eq!(detect_base(""), 10);
    }

    #[test]
    fn test_sign_before_prefix() {
        assert_eq!(detect_base("-0xFF"), 16);
        assert_eq!(detect_base("+0b11"), 2);
        assert_eq!(detect_base("-42"), 10);
    }

    #[test]
    fn test_no_content_inference() {
        // hex-looking digits without a prefix stay decimal
        assert_eq!(detect_base("CAFE"), 10);
        assert_eq!(detect_base("1A"), 10);
    }
}
