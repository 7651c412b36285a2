//! Overflow-checked `Decimal` arithmetic.
//!
//! Plain `*` and `+` on `Decimal` panic when the result leaves the 96-bit
//! range. Calculators combine caller-supplied amounts, so every product, sum
//! and quotient of input data goes through these and surfaces as
//! [`LeiFacilError::Overflow`] instead.

use rust_decimal::Decimal;

use crate::error::LeiFacilError;
use crate::LeiFacilResult;

fn overflow(context: &str) -> LeiFacilError {
    LeiFacilError::Overflow {
        context: context.into(),
    }
}

pub(crate) fn mul(a: Decimal, b: Decimal, context: &str) -> LeiFacilResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| overflow(context))
}

pub(crate) fn add(a: Decimal, b: Decimal, context: &str) -> LeiFacilResult<Decimal> {
    a.checked_add(b).ok_or_else(|| overflow(context))
}

pub(crate) fn sub(a: Decimal, b: Decimal, context: &str) -> LeiFacilResult<Decimal> {
    a.checked_sub(b).ok_or_else(|| overflow(context))
}

/// `a / b`. The divisor must already be known to be non-zero.
pub(crate) fn div(a: Decimal, b: Decimal, context: &str) -> LeiFacilResult<Decimal> {
    a.checked_div(b).ok_or_else(|| overflow(context))
}

pub(crate) fn sum<I>(values: I, context: &str) -> LeiFacilResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
        .ok_or_else(|| overflow(context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_mul_overflow_is_error() {
        let err = mul(Decimal::MAX, dec!(2), "double").unwrap_err();
        assert!(matches!(err, LeiFacilError::Overflow { .. }));
        assert!(err.to_string().contains("double"));
    }

    #[test]
    fn test_sum_overflow_is_error() {
        assert!(sum([Decimal::MAX, Decimal::ONE], "total").is_err());
        assert_eq!(sum([dec!(1.5), dec!(2.5)], "total").unwrap(), dec!(4));
        assert_eq!(sum(Vec::new(), "total").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_div_by_tiny_divisor_overflows() {
        assert!(div(Decimal::MAX, dec!(0.5), "quotient").is_err());
        assert_eq!(div(dec!(10), dec!(4), "quotient").unwrap(), dec!(2.5));
    }
}
