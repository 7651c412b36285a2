use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::correction::{compound_fixed, growth_factor, simple_interest};
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::validate;
use crate::LeiFacilResult;

/// A labor-court moral (or existential) damages award brought to present
/// value: IPCA correction, then SELIC as simple interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaborMoralDamagesInput {
    pub awarded_amount: Money,
    pub monthly_ipca: Rate,
    pub months: Months,
    pub monthly_selic: Rate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaborMoralDamagesOutput {
    pub awarded_amount: Money,
    pub correction_factor: Decimal,
    pub corrected_amount: Money,
    pub interest: Money,
    pub final_amount: Money,
}

pub fn calculate_labor_moral_damages(
    input: &LaborMoralDamagesInput,
) -> LeiFacilResult<ComputationOutput<LaborMoralDamagesOutput>> {
    let start = Instant::now();

    validate::non_negative("awarded_amount", input.awarded_amount)?;
    validate::rate("monthly_ipca", input.monthly_ipca)?;
    validate::rate("monthly_selic", input.monthly_selic)?;

    let correction_factor = growth_factor(input.monthly_ipca, input.months)?;
    let corrected_amount = compound_fixed(input.awarded_amount, input.monthly_ipca, input.months)?;
    let interest = simple_interest(corrected_amount, input.monthly_selic, input.months)?;
    let final_amount = checked::add(corrected_amount, interest, "labor moral damages")?;

    let output = LaborMoralDamagesOutput {
        awarded_amount: input.awarded_amount,
        correction_factor,
        corrected_amount,
        interest,
        final_amount,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Labor moral damages: compound IPCA correction plus simple SELIC interest",
        &serde_json::json!({
            "monthly_ipca": input.monthly_ipca.to_string(),
            "monthly_selic": input.monthly_selic.to_string(),
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
    fn test_correction_then_interest() {
        let result = calculate_labor_moral_damages(&LaborMoralDamagesInput {
            awarded_amount: dec!(20000),
            monthly_ipca: dec!(0.005),
            months: 2,
            monthly_selic: dec!(0.01),
        })
        .unwrap();
        let r = &result.result;
        assert_eq!(r.corrected_amount, dec!(20200.5));
        assert_eq!(r.interest, dec!(404.01));
        assert_eq!(r.final_amount, dec!(20604.51));
    }
}
