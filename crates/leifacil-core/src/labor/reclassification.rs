use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::error::LeiFacilError;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::validate;
use crate::LeiFacilResult;

/// Salary owed under the correct job classification versus salary paid,
/// month by month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReclassificationInput {
    pub owed_salaries: Vec<Money>,
    pub paid_salaries: Vec<Money>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReclassificationOutput {
    pub monthly_differences: Vec<Money>,
    pub total_owed: Money,
    pub total_paid: Money,
    pub total_difference: Money,
}

pub fn calculate_reclassification(
    input: &ReclassificationInput,
) -> LeiFacilResult<ComputationOutput<ReclassificationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.owed_salaries.len() != input.paid_salaries.len() {
        return Err(LeiFacilError::invalid(
            "paid_salaries",
            format!(
                "Expected {} months to match owed_salaries, got {}",
                input.owed_salaries.len(),
                input.paid_salaries.len()
            ),
        ));
    }
    validate::amounts("owed_salaries", &input.owed_salaries)?;
    validate::amounts("paid_salaries", &input.paid_salaries)?;

    let monthly_differences: Vec<Money> = input
        .owed_salaries
        .iter()
        .zip(&input.paid_salaries)
        .map(|(owed, paid)| owed - paid)
        .collect();

    let overpaid = monthly_differences.iter().filter(|d| **d < Decimal::ZERO).count();
    if overpaid > 0 {
        warnings.push(format!("{overpaid} month(s) paid above the owed salary"));
    }

    let output = ReclassificationOutput {
        total_owed: checked::sum(input.owed_salaries.iter().copied(), "total owed")?,
        total_paid: checked::sum(input.paid_salaries.iter().copied(), "total paid")?,
        total_difference: checked::sum(monthly_differences.iter().copied(), "total difference")?,
        monthly_differences,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Salary reclassification: owed minus paid, month by month",
        &serde_json::json!({ "months": input.owed_salaries.len() }),
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
    fn test_differences_per_month() {
        let result = calculate_reclassification(&ReclassificationInput {
            owed_salaries: vec![dec!(3000), dec!(3000), dec!(3200)],
            paid_salaries: vec![dec!(2500), dec!(2500), dec!(2500)],
        })
        .unwrap();
        let r = &result.result;
        assert_eq!(r.monthly_differences, vec![dec!(500), dec!(500), dec!(700)]);
        assert_eq!(r.total_difference, dec!(1700));
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let err = calculate_reclassification(&ReclassificationInput {
            owed_salaries: vec![dec!(3000), dec!(3000)],
            paid_salaries: vec![dec!(2500)],
        })
        .unwrap_err();
        assert!(matches!(err, LeiFacilError::InvalidParameter { .. }));
    }
}
