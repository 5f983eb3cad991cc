use ethers_core::types::U256;
use ethers_core::utils::{format_units, parse_units, ParseUnits};
use thiserror::Error;

/// The GEM stablecoin uses the standard 18 decimals.
pub const TOKEN_DECIMALS: u32 = 18;
pub const TOKEN_SYMBOL: &str = "GEM";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("enter an amount")]
    Empty,
    #[error("amount is not a valid number")]
    Invalid,
    #[error("amount must be greater than zero")]
    Zero,
}

/// Parse a user-typed amount into token base units.
///
/// Rejects empty input, non-numeric text, negative values and anything
/// with more than 18 fractional digits.
pub fn parse_amount(input: &str) -> Result<U256, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    match parse_units(trimmed, TOKEN_DECIMALS) {
        Ok(ParseUnits::U256(value)) => {
            if value.is_zero() {
                Err(AmountError::Zero)
            } else {
                Ok(value)
            }
        }
        // Negative input parses into the signed variant.
        Ok(ParseUnits::I256(_)) => Err(AmountError::Invalid),
        Err(_) => Err(AmountError::Invalid),
    }
}

/// Render base units back into a human amount, trimming trailing zeros.
pub fn format_amount(value: U256) -> String {
    let raw = match format_units(value, TOKEN_DECIMALS) {
        Ok(s) => s,
        Err(_) => return value.to_string(),
    };

    match raw.split_once('.') {
        Some((whole, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                whole.to_string()
            } else {
                format!("{}.{}", whole, frac)
            }
        }
        None => raw,
    }
}

/// One base unit shorthand for tests and fixed amounts.
pub fn whole_tokens(n: u64) -> U256 {
    U256::from(n) * U256::exp10(TOKEN_DECIMALS as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!(parse_amount("100").unwrap(), whole_tokens(100));
        assert_eq!(
            parse_amount("1.5").unwrap(),
            whole_tokens(3) / U256::from(2)
        );
        assert_eq!(parse_amount(" 42 ").unwrap(), whole_tokens(42));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert_eq!(parse_amount("   "), Err(AmountError::Empty));
    }

    #[test]
    fn rejects_non_numeric_and_negative() {
        assert_eq!(parse_amount("abc"), Err(AmountError::Invalid));
        assert_eq!(parse_amount("1.2.3"), Err(AmountError::Invalid));
        assert_eq!(parse_amount("-5"), Err(AmountError::Invalid));
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(parse_amount("0"), Err(AmountError::Zero));
        assert_eq!(parse_amount("0.0"), Err(AmountError::Zero));
    }

    #[test]
    fn rejects_excess_precision() {
        // 19 fractional digits cannot be represented in base units.
        assert_eq!(
            parse_amount("1.0000000000000000001"),
            Err(AmountError::Invalid)
        );
    }

    #[test]
    fn formats_without_trailing_zeros() {
        assert_eq!(format_amount(whole_tokens(1000)), "1000");
        assert_eq!(
            format_amount(whole_tokens(3) / U256::from(2)),
            "1.5"
        );
        assert_eq!(format_amount(U256::zero()), "0");
    }

    #[test]
    fn round_trips_user_input() {
        let value = parse_amount("123.45").unwrap();
        assert_eq!(format_amount(value), "123.45");
    }
}
