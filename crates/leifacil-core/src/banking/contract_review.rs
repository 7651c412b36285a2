use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::{amount_at_annual_rate, is_abusive, ABUSIVE_THRESHOLD};
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::validate;
use crate::LeiFacilResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractReviewInput {
    pub contract_value: Money,
    /// Annual rate stated in the contract.
    pub agreed_rate: Rate,
    /// Annual rate actually charged.
    pub effective_rate: Rate,
    pub months: Months,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractReviewOutput {
    pub amount_at_agreed_rate: Money,
    pub amount_at_effective_rate: Money,
    pub difference: Money,
    pub abusive: bool,
}

pub fn review_contract(
    input: &ContractReviewInput,
) -> LeiFacilResult<ComputationOutput<ContractReviewOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::non_negative("contract_value", input.contract_value)?;
    validate::rate("agreed_rate", input.agreed_rate)?;
    validate::rate("effective_rate", input.effective_rate)?;

    let amount_at_agreed_rate =
        amount_at_annual_rate(input.contract_value, input.agreed_rate, input.months)?;
    let amount_at_effective_rate =
        amount_at_annual_rate(input.contract_value, input.effective_rate, input.months)?;

    let abusive = is_abusive(input.effective_rate, input.agreed_rate);
    if abusive {
        warnings.push(format!(
            "Effective rate {} exceeds the agreed rate {} by more than 50%",
            input.effective_rate, input.agreed_rate
        ));
    }

    let output = ContractReviewOutput {
        amount_at_agreed_rate,
        amount_at_effective_rate,
        difference: amount_at_effective_rate - amount_at_agreed_rate,
        abusive,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Contract review: value x (1 + annual rate)^(months/12) at agreed and effective rates",
        &serde_json::json!({
            "months": input.months,
            "abusive_threshold": ABUSIVE_THRESHOLD.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_one_year_review() {
        let result = review_contract(&ContractReviewInput {
            contract_value: dec!(10000),
            agreed_rate: dec!(0.12),
            effective_rate: dec!(0.15),
            months: 12,
        })
        .unwrap();
        let r = &result.result;
        assert_eq!(r.amount_at_agreed_rate, dec!(11200));
        assert_eq!(r.amount_at_effective_rate, dec!(11500));
        assert_eq!(r.difference, dec!(300));
        assert!(!r.abusive);
    }

    #[test]
    fn test_abusive_rate_flagged() {
        let result = review_contract(&ContractReviewInput {
            contract_value: dec!(10000),
            agreed_rate: dec!(0.10),
            effective_rate: dec!(0.20),
            months: 0,
        })
        .unwrap();
        assert!(result.result.abusive);
        assert_eq!(result.result.difference, dec!(0));
        assert_eq!(result.warnings.len(), 1);
    }
}
