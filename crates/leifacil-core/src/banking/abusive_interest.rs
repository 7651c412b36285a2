use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::{amount_at_annual_rate, is_abusive, ABUSIVE_THRESHOLD};
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::validate;
use crate::LeiFacilResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbusiveInterestInput {
    /// Annual rate in the contract.
    pub contracted_rate: Rate,
    /// Average annual market rate for the same kind of operation.
    pub reference_rate: Rate,
    pub amount_paid: Money,
    pub amount_financed: Money,
    pub months: Months,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbusiveInterestOutput {
    pub abusive: bool,
    pub owed_at_reference_rate: Money,
    pub owed_at_contracted_rate: Money,
    pub difference: Money,
    /// Overpayment against the reference-rate value.
    pub to_refund: Money,
    /// Shortfall against the reference-rate value.
    pub still_to_pay: Money,
}

/// Compare a contracted annual rate against the market average and settle
/// what was paid against the market-rate value.
pub fn calculate_abusive_interest(
    input: &AbusiveInterestInput,
) -> LeiFacilResult<ComputationOutput<AbusiveInterestOutput>> {
    let start = Instant::now();

    validate::rate("contracted_rate", input.contracted_rate)?;
    validate::rate("reference_rate", input.reference_rate)?;
    validate::non_negative("amount_paid", input.amount_paid)?;
    validate::non_negative("amount_financed", input.amount_financed)?;

    let owed_at_reference_rate =
        amount_at_annual_rate(input.amount_financed, input.reference_rate, input.months)?;
    let owed_at_contracted_rate =
        amount_at_annual_rate(input.amount_financed, input.contracted_rate, input.months)?;

    let output = AbusiveInterestOutput {
        abusive: is_abusive(input.contracted_rate, input.reference_rate),
        owed_at_reference_rate,
        owed_at_contracted_rate,
        difference: owed_at_contracted_rate - owed_at_reference_rate,
        to_refund: (input.amount_paid - owed_at_reference_rate).max(Decimal::ZERO),
        still_to_pay: (owed_at_reference_rate - input.amount_paid).max(Decimal::ZERO),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Abusive interest: contracted > reference x 1.5; balances settled at the reference rate",
        &serde_json::json!({
            "contracted_rate": input.contracted_rate.to_string(),
            "reference_rate": input.reference_rate.to_string(),
            "abusive_threshold": ABUSIVE_THRESHOLD.to_string(),
            "months": input.months,
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

    #[test]
    fn test_overpayment_refunded() {
        let result = calculate_abusive_interest(&AbusiveInterestInput {
            contracted_rate: dec!(0.30),
            reference_rate: dec!(0.10),
            amount_paid: dec!(12000),
            amount_financed: dec!(10000),
            months: 12,
        })
        .unwrap();
        let r = &result.result;
        assert!(r.abusive);
        assert_eq!(r.owed_at_reference_rate, dec!(11000));
        assert_eq!(r.owed_at_contracted_rate, dec!(13000));
        assert_eq!(r.difference, dec!(2000));
        assert_eq!(r.to_refund, dec!(1000));
        assert_eq!(r.still_to_pay, dec!(0));
    }

    #[test]
    fn test_shortfall_still_owed() {
        let result = calculate_abusive_interest(&AbusiveInterestInput {
            contracted_rate: dec!(0.12),
            reference_rate: dec!(0.10),
            amount_paid: dec!(10500),
            amount_financed: dec!(10000),
            months: 12,
        })
        .unwrap();
        let r = &result.result;
        assert!(!r.abusive);
        assert_eq!(r.to_refund, dec!(0));
        assert_eq!(r.still_to_pay, dec!(500));
    }
}
