use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Currency symbol used when none is configured.
pub const DEFAULT_CURRENCY: &str = "₱";

/// Most fractional digits a `Decimal` can hold.
const MAX_SCALE: usize = 28;

/// Format an amount to two decimal places.
/// Amounts are kept at full precision and only rounded here.
/// Example: 1000 -> "1000.00", 0.25 -> "0.25", -12.345 -> "-12.34"
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    rounded.to_string()
}

/// Format an amount prefixed with a currency symbol.
/// Example: ("₱", 1000) -> "₱1000.00", ("$", -0.5) -> "$-0.50"
pub fn format_money(currency: &str, amount: Decimal) -> String {
    format!("{}{}", currency, format_amount(amount))
}

/// Parse a decimal string into an exact amount.
///
/// Accepts an optional sign, an integer part, an optional fractional part
/// and an optional exponent ("12", "12.5", ".5", "5.", "-3.25", "+7",
/// "1e3", "2.5E-2"). Surrounding whitespace is ignored. `inf`, `nan` and
/// thousands separators are rejected.
pub fn parse_money(input: &str) -> Result<Decimal, ParseMoneyError> {
    let input = input.trim();
    let (mantissa, exponent) = match input.find(['e', 'E']) {
        Some(pos) => (&input[..pos], Some(&input[pos + 1..])),
        None => (input, None),
    };

    let (negative, unsigned) = split_sign(mantissa);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(ParseMoneyError::InvalidFormat);
    }
    if !is_digits(int_part) || !is_digits(frac_part) {
        return Err(ParseMoneyError::InvalidFormat);
    }
    let exponent = match exponent {
        Some(text) => parse_exponent(text)?,
        None => 0,
    };

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = &frac_part[..frac_part.len().min(MAX_SCALE)];
    let plain = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, frac_part)
    };

    let value = Decimal::from_str(&plain).map_err(|_| ParseMoneyError::Overflow)?;
    let value = shift_decimal_point(value, exponent)?;
    Ok(if negative && !value.is_zero() { -value } else { value })
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_exponent(text: &str) -> Result<i64, ParseMoneyError> {
    let (negative, digits) = split_sign(text);
    if digits.is_empty() || !is_digits(digits) {
        return Err(ParseMoneyError::InvalidFormat);
    }
    // Anything this large overflows or underflows a Decimal regardless
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Ok(if negative { -magnitude } else { magnitude })
}

/// Multiply by `10^exponent`. Negative exponents past the representable
/// scale round to zero; positive ones overflow.
fn shift_decimal_point(value: Decimal, exponent: i64) -> Result<Decimal, ParseMoneyError> {
    if value.is_zero() {
        return Ok(value);
    }
    if exponent >= 0 {
        (0..exponent).try_fold(value, |acc, _| {
            acc.checked_mul(Decimal::TEN)
                .ok_or(ParseMoneyError::Overflow)
        })
    } else {
        let steps = exponent.unsigned_abs().min(2 * MAX_SCALE as u64 + 2);
        Ok((0..steps).fold(value, |acc, _| {
            acc.checked_div(Decimal::TEN).unwrap_or(Decimal::ZERO)
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMoneyError {
    InvalidFormat,
    Overflow,
}

impl fmt::Display for ParseMoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMoneyError::InvalidFormat => write!(f, "invalid money format"),
            ParseMoneyError::Overflow => write!(f, "amount out of range"),
        }
    }
}

impl std::error::Error for ParseMoneyError {}
