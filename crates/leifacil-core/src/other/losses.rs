use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::correction::compound_fixed;
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::validate;
use crate::LeiFacilResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LossesInput {
    pub expenses: Vec<Money>,
    /// Monthly IPCA rate.
    pub ipca: Rate,
    pub months: Months,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LossesOutput {
    pub loss: Money,
    pub corrected: Money,
    pub correction: Money,
}

/// Material losses (perdas e danos): documented expenses corrected by IPCA.
pub fn calculate_losses(input: &LossesInput) -> LeiFacilResult<ComputationOutput<LossesOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::amounts("expenses", &input.expenses)?;
    if input.expenses.is_empty() {
        warnings.push("No expenses supplied".into());
    }

    let loss = checked::sum(input.expenses.iter().copied(), "total expenses")?;
    let corrected = compound_fixed(loss, input.ipca, input.months)?;

    let output = LossesOutput {
        loss,
        corrected,
        correction: corrected - loss,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Losses and damages: sum of expenses x (1 + IPCA)^months",
        &serde_json::json!({
            "ipca": input.ipca.to_string(),
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
    fn test_losses_corrected() {
        let result = calculate_losses(&LossesInput {
            expenses: vec![dec!(600), dec!(400)],
            ipca: dec!(0.01),
            months: 2,
        })
        .unwrap();
        let r = &result.result;
        assert_eq!(r.loss, dec!(1000));
        assert_eq!(r.corrected, dec!(1020.1));
        assert_eq!(r.correction, dec!(20.1));
    }

    #[test]
    fn test_negative_expense_rejected() {
        assert!(calculate_losses(&LossesInput {
            expenses: vec![dec!(100), dec!(-1)],
            ipca: dec!(0),
            months: 0,
        })
        .is_err());
    }
}
