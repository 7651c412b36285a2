use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{price_schedule, sac_schedule, Schedule};
use crate::checked;
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::LeiFacilResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSacInput {
    pub principal: Money,
    /// Monthly rate.
    pub rate: Rate,
    pub periods: Months,
    /// Attach both full schedules to the output.
    #[serde(default)]
    pub include_schedules: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSacOutput {
    pub price_installment: Money,
    pub total_price: Money,
    pub sac_amortization: Money,
    pub sac_first_installment: Money,
    pub sac_last_installment: Money,
    pub total_sac: Money,
    /// total_price - total_sac
    pub difference: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_schedule: Option<Schedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sac_schedule: Option<Schedule>,
}

/// Compare the Price and SAC amortization systems for the same loan.
pub fn compare_price_sac(input: &PriceSacInput) -> LeiFacilResult<ComputationOutput<PriceSacOutput>> {
    let start = Instant::now();

    let price = price_schedule(input.principal, input.rate, input.periods)?;
    let sac = sac_schedule(input.principal, input.rate, input.periods)?;

    let first = |s: &Schedule| s.installments.first().map(|i| i.installment);
    let last = |s: &Schedule| s.installments.last().map(|i| i.installment);

    let price_installment = first(&price).unwrap_or(Decimal::ZERO);
    let total_price = checked::mul(
        price_installment,
        Decimal::from(input.periods),
        "Price total",
    )?;
    let difference = checked::sub(total_price, sac.total_paid, "Price vs SAC difference")?;

    let output = PriceSacOutput {
        price_installment,
        total_price,
        sac_amortization: input.principal / Decimal::from(input.periods),
        sac_first_installment: first(&sac).unwrap_or(Decimal::ZERO),
        sac_last_installment: last(&sac).unwrap_or(Decimal::ZERO),
        total_sac: sac.total_paid,
        difference,
        price_schedule: input.include_schedules.then_some(price),
        sac_schedule: input.include_schedules.then_some(sac),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Price (constant installment) vs SAC (constant amortization)",
        &serde_json::json!({
            "rate": input.rate.to_string(),
            "periods": input.periods,
        }),
        Vec::new(),
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn loan(include_schedules: bool) -> PriceSacInput {
        PriceSacInput {
            principal: dec!(120000),
            rate: dec!(0.01),
            periods: 12,
            include_schedules,
        }
    }

    #[test]
    fn test_sac_figures() {
        let result = compare_price_sac(&loan(false)).unwrap();
        let r = &result.result;
        assert_eq!(r.sac_amortization, dec!(10000));
        assert_eq!(r.sac_first_installment, dec!(11200));
        assert_eq!(r.sac_last_installment, dec!(10100));
        assert_eq!(r.total_sac, dec!(127800));
        assert!(r.price_schedule.is_none());
    }

    #[test]
    fn test_price_costs_more_with_interest() {
        let result = compare_price_sac(&loan(true)).unwrap();
        let r = &result.result;
        assert!(r.total_price > r.total_sac);
        assert!(r.difference > Decimal::ZERO);
        assert_eq!(r.price_schedule.as_ref().map(|s| s.installments.len()), Some(12));
    }

    #[test]
    fn test_zero_periods_rejected() {
        let mut input = loan(false);
        input.periods = 0;
        assert!(compare_price_sac(&input).is_err());
    }

    #[test]
    fn test_extreme_inputs_fail_cleanly() {
        let mut input = loan(false);
        input.rate = dec!(2);
        input.periods = 60;
        let result = compare_price_sac(&input).unwrap();
        assert_eq!(result.result.price_installment.round_dp(2), dec!(240000));

        input.principal = Decimal::MAX;
        assert!(matches!(
            compare_price_sac(&input),
            Err(crate::LeiFacilError::Overflow { .. })
        ));

        input.principal = dec!(1000);
        input.rate = dec!(0);
        input.periods = u32::MAX;
        assert!(matches!(
            compare_price_sac(&input),
            Err(crate::LeiFacilError::InvalidParameter { .. })
        ));
    }
}
