//! Parsing of raw text arriving from a form or a console prompt.
//!
//! Every failure surfaces as RateError::InvalidInput naming the field.

use crate::error::{RateError, RateResult};

/// Parse a finite real number. Surrounding whitespace is ignored.
pub fn parse_number(field: &str, raw: &str) -> RateResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RateError::invalid(field, "value is empty"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| RateError::invalid(field, format!("'{trimmed}' is not a number")))?;
    if !value.is_finite() {
        return Err(RateError::invalid(field, format!("'{trimmed}' is not finite")));
    }
    Ok(value)
}

/// USD amount to convert: a finite, non-negative number.
pub fn parse_usd_amount(raw: &str) -> RateResult<f64> {
    let amount = parse_number("usd_amount", raw)?;
    check_usd_amount(amount)
}

pub fn check_usd_amount(amount: f64) -> RateResult<f64> {
    if !amount.is_finite() {
        return Err(RateError::invalid("usd_amount", "amount must be finite"));
    }
    if amount < 0.0 {
        return Err(RateError::invalid("usd_amount", format!("{amount} is negative")));
    }
    Ok(amount)
}

/// A 1-based month selection. Range is checked against the series
/// at conversion time.
pub fn parse_selection(raw: &str) -> RateResult<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| RateError::invalid("month_selection", format!("'{trimmed}' is not a whole number")))
}
