use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::error::LeiFacilError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::validate;
use crate::LeiFacilResult;

const BASE_COEFFICIENT: Rate = dec!(0.6);
const COEFFICIENT_PER_EXTRA_YEAR: Rate = dec!(0.02);
const MAX_COEFFICIENT: Rate = dec!(1.0);

/// Initial monthly benefit (Renda Mensal Inicial).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RmiInput {
    /// Monthly contribution salaries since July 1994.
    pub contributions: Vec<Money>,
    /// Contribution years beyond the minimum required.
    pub extra_years: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RmiOutput {
    pub contribution_count: usize,
    /// Average of all contributions.
    pub benefit_salary: Money,
    pub coefficient: Rate,
    pub rmi: Money,
}

/// Benefit coefficient: 60% plus 2% per extra year, capped at 100%.
pub fn benefit_coefficient(extra_years: u32) -> Rate {
    (BASE_COEFFICIENT + COEFFICIENT_PER_EXTRA_YEAR * Decimal::from(extra_years)).min(MAX_COEFFICIENT)
}

pub fn calculate_rmi(input: &RmiInput) -> LeiFacilResult<ComputationOutput<RmiOutput>> {
    let start = Instant::now();

    if input.contributions.is_empty() {
        return Err(LeiFacilError::invalid(
            "contributions",
            "At least one contribution is required",
        ));
    }
    validate::amounts("contributions", &input.contributions)?;

    let total = checked::sum(input.contributions.iter().copied(), "total contributions")?;
    let benefit_salary = total / Decimal::from(input.contributions.len());
    let coefficient = benefit_coefficient(input.extra_years);

    let output = RmiOutput {
        contribution_count: input.contributions.len(),
        benefit_salary,
        coefficient,
        rmi: benefit_salary * coefficient,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "RMI: average contribution x min(60% + 2% per extra year, 100%)",
        &serde_json::json!({ "extra_years": input.extra_years }),
        Vec::new(),
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficient_caps_at_full_benefit() {
        assert_eq!(benefit_coefficient(0), dec!(0.6));
        assert_eq!(benefit_coefficient(10), dec!(0.8));
        assert_eq!(benefit_coefficient(20), dec!(1));
        assert_eq!(benefit_coefficient(35), dec!(1));
    }

    #[test]
    fn test_rmi_from_average() {
        let result = calculate_rmi(&RmiInput {
            contributions: vec![dec!(2000), dec!(3000), dec!(4000)],
            extra_years: 5,
        })
        .unwrap();
        let r = &result.result;
        assert_eq!(r.benefit_salary, dec!(3000));
        assert_eq!(r.coefficient, dec!(0.7));
        assert_eq!(r.rmi, dec!(2100));
    }

    #[test]
    fn test_empty_contributions_rejected() {
        assert!(calculate_rmi(&RmiInput {
            contributions: vec![],
            extra_years: 0,
        })
        .is_err());
    }
}
