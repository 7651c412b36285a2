//! Input checks shared by the calculators. Each returns the first violation
//! as [`LeiFacilError::InvalidParameter`] so nothing is computed from bad input.

use rust_decimal::Decimal;

use crate::error::LeiFacilError;
use crate::types::{Money, Rate};
use crate::LeiFacilResult;

pub(crate) fn non_negative(field: &str, value: Decimal) -> LeiFacilResult<()> {
    if value < Decimal::ZERO {
        return Err(LeiFacilError::invalid(field, "Cannot be negative"));
    }
    Ok(())
}

pub(crate) fn positive(field: &str, value: Decimal) -> LeiFacilResult<()> {
    if value <= Decimal::ZERO {
        return Err(LeiFacilError::invalid(field, "Must be positive"));
    }
    Ok(())
}

/// Rates may be negative (deflation) but never reach -100%.
pub(crate) fn rate(field: &str, value: Rate) -> LeiFacilResult<()> {
    if value <= Decimal::NEGATIVE_ONE {
        return Err(LeiFacilError::invalid(field, "Rate must be greater than -100%"));
    }
    Ok(())
}

pub(crate) fn amounts(field: &str, values: &[Money]) -> LeiFacilResult<()> {
    if let Some(idx) = values.iter().position(|v| *v < Decimal::ZERO) {
        return Err(LeiFacilError::invalid(
            field,
            format!("Entry {idx} is negative"),
        ));
    }
    Ok(())
}

/// Longest horizon any month- or installment-driven calculation accepts
/// (a century). Schedules materialise one row per period.
pub(crate) const MAX_PERIODS: u32 = 1200;

pub(crate) fn periods(field: &str, value: u32) -> LeiFacilResult<()> {
    at_most(field, value, MAX_PERIODS)
}

pub(crate) fn at_most(field: &str, value: u32, max: u32) -> LeiFacilResult<()> {
    if value > max {
        return Err(LeiFacilError::invalid(
            field,
            format!("Must be at most {max} (got {value})"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_allows_deflation() {
        assert!(rate("rate", dec!(-0.005)).is_ok());
        assert!(rate("rate", dec!(-1)).is_err());
    }

    #[test]
    fn test_amounts_reports_offending_entry() {
        let err = amounts("salaries", &[dec!(1), dec!(-2)]).unwrap_err();
        assert!(err.to_string().contains("Entry 1"));
    }

    #[test]
    fn test_periods_capped_at_a_century() {
        assert!(periods("months", MAX_PERIODS).is_ok());
        let err = periods("months", MAX_PERIODS + 1).unwrap_err();
        assert!(matches!(err, LeiFacilError::InvalidParameter { .. }));
    }
}
