//! Banking litigation: contract review, anatocism, amortization system
//! comparison and abusive-rate checks.
//!
//! Annual rates are applied over `months / 12` years through
//! [`crate::correction::fractional_growth_factor`].

pub mod abusive_interest;
pub mod anatocism;
pub mod contract_review;
pub mod price_sac;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::correction::fractional_growth_factor;
use crate::error::LeiFacilError;
use crate::types::{Money, Months, Rate};
use crate::LeiFacilResult;

/// A rate is abusive when it exceeds the reference by more than 50%.
pub const ABUSIVE_THRESHOLD: Decimal = dec!(1.5);

pub(crate) fn is_abusive(rate: Rate, reference: Rate) -> bool {
    reference
        .checked_mul(ABUSIVE_THRESHOLD)
        .is_some_and(|limit| rate > limit)
}

/// `principal × (1 + annual_rate)^(months / 12)`
pub(crate) fn amount_at_annual_rate(
    principal: Money,
    annual_rate: Rate,
    months: Months,
) -> LeiFacilResult<Money> {
    let years = Decimal::from(months) / dec!(12);
    let factor = fractional_growth_factor(annual_rate, years)?;
    principal
        .checked_mul(factor)
        .ok_or_else(|| LeiFacilError::Overflow {
            context: "amount at annual rate".into(),
        })
}
