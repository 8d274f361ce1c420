//! Exact conversion between base token units and decimal-scaled amounts.
//!
//! A token with `decimals = d` represents the human amount `1` as `10^d`
//! base units. All arithmetic here is integer division, remainder and
//! multiplication on [`U256`]; no floating point is involved at any step,
//! so amounts spanning the full 256-bit word convert without loss.

use alloy_primitives::U256;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// Input is negative or not a plain decimal number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Input carries more fractional digits than the token supports
    #[error("Precision loss: {digits} fractional digits exceed {decimals} decimals")]
    PrecisionLoss { digits: usize, decimals: u8 },

    /// Result does not fit in 256 bits
    #[error("Amount overflows uint256")]
    Overflow,
}

/// `10^exp`, or `None` when it does not fit in 256 bits (`exp > 77`).
fn pow10(exp: usize) -> Option<U256> {
    U256::from(10u8).checked_pow(U256::from(exp))
}

/// `value * 10^exp` with overflow detection.
fn shift(value: U256, exp: usize) -> Result<U256, ScaleError> {
    if value.is_zero() {
        return Ok(U256::ZERO);
    }
    pow10(exp)
        .and_then(|scale| value.checked_mul(scale))
        .ok_or(ScaleError::Overflow)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits(s: &str) -> Result<U256, ScaleError> {
    U256::from_str_radix(s, 10).map_err(|_| ScaleError::Overflow)
}

/// Render `base / 10^decimals` as an exact decimal string with exactly
/// `decimals` fractional digits. With `decimals = 0` there is no point.
pub fn to_scaled(base: U256, decimals: u8) -> String {
    let width = usize::from(decimals);
    let (whole, frac) = match pow10(width) {
        Some(scale) => (base / scale, base % scale),
        // every uint256 is below 10^78
        None => (U256::ZERO, base),
    };

    if width == 0 {
        return whole.to_string();
    }
    format!("{}.{:0>width$}", whole, frac.to_string(), width = width)
}

/// Parse a decimal-scaled amount into base units.
///
/// Accepts `digits` or `digits.digits`. Trailing fractional zeros are
/// ignored; any remaining fractional digits beyond `decimals` fail with
/// [`ScaleError::PrecisionLoss`] instead of being truncated.
pub fn from_scaled(amount: &str, decimals: u8) -> Result<U256, ScaleError> {
    if amount.starts_with('-') {
        return Err(ScaleError::InvalidAmount(format!(
            "negative amount '{}'",
            amount
        )));
    }

    let (whole, frac) = match amount.split_once('.') {
        Some((whole, frac)) if is_digits(whole) && is_digits(frac) => (whole, frac),
        None if is_digits(amount) => (amount, ""),
        _ => {
            return Err(ScaleError::InvalidAmount(format!(
                "'{}' is not a non-negative decimal number",
                amount
            )))
        }
    };

    let frac = frac.trim_end_matches('0');
    let width = usize::from(decimals);
    if frac.len() > width {
        return Err(ScaleError::PrecisionLoss {
            digits: frac.len(),
            decimals,
        });
    }

    let whole = shift(parse_digits(whole)?, width)?;
    let frac = if frac.is_empty() {
        U256::ZERO
    } else {
        shift(parse_digits(frac)?, width - frac.len())?
    };

    whole.checked_add(frac).ok_or(ScaleError::Overflow)
}

/// Parse a raw base-unit amount (plain decimal digits, no point).
pub fn parse_base_units(amount: &str) -> Result<U256, ScaleError> {
    if !is_digits(amount) {
        return Err(ScaleError::InvalidAmount(format!(
            "'{}' is not a base-unit integer",
            amount
        )));
    }
    parse_digits(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_decimals() {
        let base = U256::from(1_500_000u64);
        assert_eq!(to_scaled(base, 6), "1.500000");
        assert_eq!(from_scaled("1.500000", 6).unwrap(), base);
        assert_eq!(from_scaled("1.5", 6).unwrap(), base);
    }

    #[test]
    fn test_eighteen_decimals() {
        let one = U256::from(10u64).pow(U256::from(18));
        assert_eq!(one.to_string(), "1000000000000000000");
        assert_eq!(to_scaled(one, 18), "1.000000000000000000");
        assert_eq!(to_scaled(U256::from(1), 18), "0.000000000000000001");
    }

    #[test]
    fn test_zero_decimals() {
        assert_eq!(to_scaled(U256::from(1_500_000u64), 0), "1500000");
        assert_eq!(
            from_scaled("1.5", 0).unwrap_err(),
            ScaleError::PrecisionLoss {
                digits: 1,
                decimals: 0
            }
        );
        assert_eq!(from_scaled("15.0", 0).unwrap(), U256::from(15));
    }

    #[test]
    fn test_precision_loss() {
        assert_eq!(
            from_scaled("0.0000001", 6).unwrap_err(),
            ScaleError::PrecisionLoss {
                digits: 7,
                decimals: 6
            }
        );
        // trailing zeros carry no value
        assert_eq!(from_scaled("0.1000000", 6).unwrap(), U256::from(100_000));
    }

    #[test]
    fn test_invalid_amounts() {
        for input in ["", "-1", "-0.5", "abc", "1.", ".5", "1.2.3", "1e5", "+1", "1,000", "0x10"] {
            assert!(
                matches!(from_scaled(input, 18), Err(ScaleError::InvalidAmount(_))),
                "{input:?} should be rejected"
            );
        }
        assert!(matches!(
            parse_base_units("1.0"),
            Err(ScaleError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_whitespace_is_rejected() {
        for input in [" 1.5", "1.5 ", " 1.5 ", "1 .5", "\t15\n"] {
            assert!(
                matches!(from_scaled(input, 1), Err(ScaleError::InvalidAmount(_))),
                "{input:?} should be rejected"
            );
            assert!(
                matches!(parse_base_units(input), Err(ScaleError::InvalidAmount(_))),
                "{input:?} should be rejected"
            );
        }
        assert_eq!(from_scaled("1.5", 1).unwrap(), U256::from(15));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(from_scaled("1", 78).unwrap_err(), ScaleError::Overflow);
        assert_eq!(from_scaled("0", 200).unwrap(), U256::ZERO);

        let too_big = format!("{}0", U256::MAX);
        assert_eq!(parse_base_units(&too_big).unwrap_err(), ScaleError::Overflow);
        assert_eq!(from_scaled(&too_big, 0).unwrap_err(), ScaleError::Overflow);

        let max = U256::MAX.to_string();
        assert_eq!(from_scaled(&max, 1).unwrap_err(), ScaleError::Overflow);
        assert_eq!(parse_base_units(&max).unwrap(), U256::MAX);
    }

    #[test]
    fn test_decimals_beyond_word() {
        let scaled = to_scaled(U256::from(5), 80);
        assert_eq!(scaled.len(), "0.".len() + 80);
        assert!(scaled.ends_with("05"));
        assert_eq!(from_scaled(&scaled, 80).unwrap(), U256::from(5));

        let scaled = to_scaled(U256::MAX, 255);
        assert_eq!(from_scaled(&scaled, 255).unwrap(), U256::MAX);
    }

    #[test]
    fn test_round_trip() {
        let mut values = vec![
            U256::ZERO,
            U256::from(1),
            U256::from(9),
            U256::from(10),
            U256::from(1_500_000u64),
            U256::from(u64::MAX),
            U256::from(u128::MAX),
            U256::MAX,
            U256::MAX / U256::from(3),
        ];
        for exp in [18usize, 36, 77] {
            let p = U256::from(10u8).pow(U256::from(exp));
            values.extend([p - U256::from(1), p, p + U256::from(1)]);
        }

        for decimals in 0..=36u8 {
            for &value in &values {
                let scaled = to_scaled(value, decimals);
                assert_eq!(
                    from_scaled(&scaled, decimals).unwrap(),
                    value,
                    "round trip of {value} at {decimals} decimals via {scaled}"
                );
            }
        }
    }
}
