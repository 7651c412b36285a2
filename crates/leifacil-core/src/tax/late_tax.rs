use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::correction::growth_factor;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::validate;
use crate::LeiFacilResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LateTaxInput {
    pub tax_amount: Money,
    pub days_late: u32,
    /// Daily SELIC rate.
    pub daily_selic: Rate,
    /// Late-payment fine as a fraction of the tax (0.2 = 20%).
    pub fine_rate: Rate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LateTaxOutput {
    pub tax_amount: Money,
    pub interest: Money,
    pub fine: Money,
    pub total: Money,
}

/// Overdue tax: SELIC compounded daily plus a flat fine.
pub fn calculate_late_tax(input: &LateTaxInput) -> LeiFacilResult<ComputationOutput<LateTaxOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::non_negative("tax_amount", input.tax_amount)?;
    validate::rate("daily_selic", input.daily_selic)?;
    validate::non_negative("fine_rate", input.fine_rate)?;

    if input.fine_rate > Decimal::ONE {
        warnings.push(format!(
            "Fine rate {} exceeds 100% of the tax; check that it is a fraction",
            input.fine_rate
        ));
    }

    let factor = growth_factor(input.daily_selic, input.days_late)?;
    let interest = checked::mul(input.tax_amount, factor - Decimal::ONE, "late tax interest")?;
    let fine = checked::mul(input.tax_amount, input.fine_rate, "late tax fine")?;
    let total = checked::sum([input.tax_amount, interest, fine], "late tax total")?;

    let output = LateTaxOutput {
        tax_amount: input.tax_amount,
        interest,
        fine,
        total,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Late tax: value x ((1 + daily SELIC)^days - 1) plus fine",
        &serde_json::json!({
            "days_late": input.days_late,
            "daily_selic": input.daily_selic.to_string(),
            "fine_rate": input.fine_rate.to_string(),
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
    fn test_interest_and_fine() {
        let result = calculate_late_tax(&LateTaxInput {
            tax_amount: dec!(10000),
            days_late: 2,
            daily_selic: dec!(0.001),
            fine_rate: dec!(0.2),
        })
        .unwrap();
        let r = &result.result;
        assert_eq!(r.interest, dec!(20.01));
        assert_eq!(r.fine, dec!(2000));
        assert_eq!(r.total, dec!(12020.01));
    }

    #[test]
    fn test_runaway_selic_is_overflow_error() {
        let err = calculate_late_tax(&LateTaxInput {
            tax_amount: dec!(1000),
            days_late: 95,
            daily_selic: dec!(1),
            fine_rate: dec!(0.2),
        })
        .unwrap_err();
        assert!(matches!(err, crate::LeiFacilError::Overflow { .. }));
    }

    #[test]
    fn test_paid_on_time() {
        let result = calculate_late_tax(&LateTaxInput {
            tax_amount: dec!(500),
            days_late: 0,
            daily_selic: dec!(0.0005),
            fine_rate: dec!(0),
        })
        .unwrap();
        assert_eq!(result.result.interest, Decimal::ZERO);
        assert_eq!(result.result.total, dec!(500));
    }
}
