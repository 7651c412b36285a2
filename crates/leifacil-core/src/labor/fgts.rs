use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::calendar::{IndexTable, MonthKey};
use crate::checked;
use crate::correction::{compound_fixed, compound_indexed};
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::validate;
use crate::LeiFacilResult;

/// Monthly employer deposit as a fraction of salary.
pub const FGTS_DEPOSIT_RATE: Decimal = dec!(0.08);
/// Penalty on the balance when the employee is dismissed without cause.
pub const FGTS_DISMISSAL_PENALTY: Decimal = dec!(0.4);

/// Optional correction of the accumulated balance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum FgtsCorrection {
    #[default]
    None,
    /// Flat monthly rate over a number of months.
    Fixed { rate: Rate, months: Months },
    /// Month-by-month index series; missing months use `fallback` (0 if absent).
    Indexed {
        start: MonthKey,
        months: Months,
        table: IndexTable,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fallback: Option<Rate>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FgtsInput {
    pub monthly_salaries: Vec<Money>,
    pub dismissed_without_cause: bool,
    #[serde(default)]
    pub correction: FgtsCorrection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FgtsOutput {
    pub months_deposited: usize,
    pub accumulated: Money,
    pub corrected: Money,
    /// corrected - accumulated
    pub correction_difference: Money,
    pub dismissal_penalty: Money,
    pub total: Money,
}

/// FGTS balance from a salary history, optionally corrected, plus the 40%
/// penalty on dismissal without cause.
pub fn calculate_fgts(input: &FgtsInput) -> LeiFacilResult<ComputationOutput<FgtsOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::amounts("monthly_salaries", &input.monthly_salaries)?;
    if input.monthly_salaries.is_empty() {
        warnings.push("No salaries supplied; FGTS balance is zero".into());
    }

    let accumulated = checked::sum(
        input
            .monthly_salaries
            .iter()
            .map(|salary| FGTS_DEPOSIT_RATE * salary),
        "FGTS deposits",
    )?;

    let (corrected, correction_label) = match &input.correction {
        FgtsCorrection::None => (accumulated, "none".to_string()),
        FgtsCorrection::Fixed { rate, months } => (
            compound_fixed(accumulated, *rate, *months)?,
            format!("fixed {rate} over {months} months"),
        ),
        FgtsCorrection::Indexed {
            start: first,
            months,
            table,
            fallback,
        } => {
            let growth = compound_indexed(accumulated, *first, *months, table, *fallback)?;
            warnings.extend(growth.fallback_warning("FGTS index", *fallback));
            (growth.amount, format!("indexed from {first} over {months} months"))
        }
    };

    let dismissal_penalty = if input.dismissed_without_cause {
        FGTS_DISMISSAL_PENALTY * corrected
    } else {
        Decimal::ZERO
    };

    let output = FgtsOutput {
        months_deposited: input.monthly_salaries.len(),
        accumulated,
        corrected,
        correction_difference: corrected - accumulated,
        dismissal_penalty,
        total: checked::add(corrected, dismissal_penalty, "FGTS total")?,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "FGTS: 8% of each salary, optional correction, 40% penalty on dismissal without cause",
        &serde_json::json!({
            "deposit_rate": FGTS_DEPOSIT_RATE.to_string(),
            "dismissal_penalty": FGTS_DISMISSAL_PENALTY.to_string(),
            "correction": correction_label,
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(dismissed_without_cause: bool) -> FgtsInput {
        FgtsInput {
            monthly_salaries: vec![dec!(1000), dec!(1000)],
            dismissed_without_cause,
            correction: FgtsCorrection::None,
        }
    }

    #[test]
    fn test_deposit_sum_overflow_is_error() {
        let mut i = input(false);
        // 8% of 13 maximal salaries exceeds the Decimal range.
        i.monthly_salaries = vec![Decimal::MAX; 13];
        let err = calculate_fgts(&i).unwrap_err();
        assert!(matches!(err, crate::LeiFacilError::Overflow { .. }));
    }

    #[test]
    fn test_no_penalty_with_cause() {
        let result = calculate_fgts(&input(false)).unwrap();
        assert_eq!(result.result.accumulated, dec!(160));
        assert_eq!(result.result.dismissal_penalty, Decimal::ZERO);
        assert_eq!(result.result.total, dec!(160));
    }

    #[test]
    fn test_penalty_without_cause() {
        let result = calculate_fgts(&input(true)).unwrap();
        let r = &result.result;
        assert_eq!(r.dismissal_penalty, dec!(0.4) * r.corrected);
        assert_eq!(r.total, dec!(224));
    }

    #[test]
    fn test_fixed_correction_feeds_penalty() {
        let mut i = input(true);
        i.correction = FgtsCorrection::Fixed {
            rate: dec!(0.01),
            months: 2,
        };
        let result = calculate_fgts(&i).unwrap();
        let r = &result.result;
        assert_eq!(r.corrected, dec!(163.216));
        assert_eq!(r.correction_difference, dec!(3.216));
        assert_eq!(r.dismissal_penalty, dec!(0.4) * dec!(163.216));
    }

    #[test]
    fn test_indexed_correction_reports_missing_months() {
        let mut i = input(false);
        i.correction = FgtsCorrection::Indexed {
            start: MonthKey::new(2024, 1).unwrap(),
            months: 3,
            table: IndexTable::new(),
            fallback: None,
        };
        let result = calculate_fgts(&i).unwrap();
        assert_eq!(result.result.corrected, dec!(160));
        assert_eq!(result.warnings.len(), 1);
    }
}
