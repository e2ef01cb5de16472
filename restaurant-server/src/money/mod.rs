//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are stored as `f64` but every rounding and summation goes through
//! `Decimal`, so `0.1 + 0.2` bills as `0.30`. Conversions and sums never
//! panic: an amount `Decimal` cannot hold is a [`MoneyError`].

use rust_decimal::prelude::*;
use std::str::FromStr;
use thiserror::Error;

/// Rounding strategy for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum MoneyError {
    #[error("amount {0} is not a finite number")]
    NonFinite(f64),

    #[error("amount {0} is out of range")]
    OutOfRange(f64),

    #[error("total amount overflowed")]
    Overflow,
}

/// Convert f64 to Decimal for calculation
///
/// Goes through the shortest round-trip text form of the float, so `19.995`
/// becomes exactly `19.995` rather than its binary approximation.
pub fn to_decimal(value: f64) -> Result<Decimal, MoneyError> {
    if !value.is_finite() {
        return Err(MoneyError::NonFinite(value));
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .ok_or(MoneyError::OutOfRange(value))
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a price to cents: `round_money(19.995) == Ok(20.00)`
#[inline]
pub fn round_money(value: f64) -> Result<f64, MoneyError> {
    to_decimal(value).map(to_f64)
}

/// Sum prices exactly, then round the total to cents
pub fn sum_money<I>(values: I) -> Result<f64, MoneyError>
where
    I: IntoIterator<Item = f64>,
{
    let total = values.into_iter().try_fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(to_decimal(value)?).ok_or(MoneyError::Overflow)
    })?;
    Ok(to_f64(total))
}
