use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::correction::{compound_fixed, simple_interest};
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::validate;
use crate::LeiFacilResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractualPenaltyInput {
    pub principal: Money,
    /// Penalty clause as a fraction of the principal (0.1 = 10%).
    pub penalty_rate: Rate,
    /// Monthly correction index.
    pub correction_index: Rate,
    pub months: Months,
    /// Monthly default interest rate.
    pub interest_rate: Rate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractualPenaltyOutput {
    pub principal: Money,
    pub penalty: Money,
    pub corrected_penalty: Money,
    pub interest: Money,
    pub final_value: Money,
}

pub fn calculate_contractual_penalty(
    input: &ContractualPenaltyInput,
) -> LeiFacilResult<ComputationOutput<ContractualPenaltyOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::non_negative("principal", input.principal)?;
    validate::non_negative("penalty_rate", input.penalty_rate)?;
    validate::rate("correction_index", input.correction_index)?;
    validate::rate("interest_rate", input.interest_rate)?;

    if input.penalty_rate > Decimal::ONE {
        warnings.push(
            "Penalty exceeds the principal; the civil code caps it at the main obligation".into(),
        );
    }

    let penalty = checked::mul(input.principal, input.penalty_rate, "contractual penalty")?;
    let corrected_penalty = compound_fixed(penalty, input.correction_index, input.months)?;
    let interest = simple_interest(corrected_penalty, input.interest_rate, input.months)?;
    let final_value = checked::add(corrected_penalty, interest, "penalty final value")?;

    let output = ContractualPenaltyOutput {
        principal: input.principal,
        penalty,
        corrected_penalty,
        interest,
        final_value,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Contractual penalty corrected by a fixed index plus simple interest",
        &serde_json::json!({
            "penalty_rate": input.penalty_rate.to_string(),
            "correction_index": input.correction_index.to_string(),
            "interest_rate": input.interest_rate.to_string(),
            "months": input.months,
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
    fn test_penalty_correction_and_interest() {
        let result = calculate_contractual_penalty(&ContractualPenaltyInput {
            principal: dec!(50000),
            penalty_rate: dec!(0.1),
            correction_index: dec!(0.01),
            months: 2,
            interest_rate: dec!(0.01),
        })
        .unwrap();
        let r = &result.result;
        assert_eq!(r.penalty, dec!(5000));
        assert_eq!(r.corrected_penalty, dec!(5100.5));
        assert_eq!(r.interest, dec!(102.01));
        assert_eq!(r.final_value, dec!(5202.51));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_penalty_above_principal_warns() {
        let result = calculate_contractual_penalty(&ContractualPenaltyInput {
            principal: dec!(1000),
            penalty_rate: dec!(1.5),
            correction_index: dec!(0),
            months: 0,
            interest_rate: dec!(0),
        })
        .unwrap();
        assert_eq!(result.result.final_value, dec!(1500));
        assert_eq!(result.warnings.len(), 1);
    }
}
