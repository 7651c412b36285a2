//! Child support (pensão alimentícia).
//!
//! The usual court bracket is 15% of net income for one child plus 5
//! percentage points per additional child, never above 50%. An explicit
//! rate set by the court replaces the bracket.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LeiFacilError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::validate;
use crate::LeiFacilResult;

const FIRST_CHILD_POINTS: u32 = 15;
const POINTS_PER_EXTRA_CHILD: u32 = 5;
const MAX_POINTS: u32 = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlimonyInput {
    pub net_income: Money,
    pub children: u32,
    /// Court-set fraction of net income; overrides the bracket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Rate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlimonyOutput {
    pub percentage: Decimal,
    pub rate: Rate,
    pub pension: Money,
    pub per_child: Money,
}

/// Bracket percentage points for a number of children (at least one).
pub fn alimony_percentage(children: u32) -> u32 {
    let extra = children.saturating_sub(1);
    FIRST_CHILD_POINTS
        .saturating_add(POINTS_PER_EXTRA_CHILD.saturating_mul(extra))
        .min(MAX_POINTS)
}

pub fn calculate_alimony(input: &AlimonyInput) -> LeiFacilResult<ComputationOutput<AlimonyOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::non_negative("net_income", input.net_income)?;
    if input.children == 0 {
        return Err(LeiFacilError::invalid("children", "At least one child is required"));
    }

    let (percentage, rate) = match input.rate {
        Some(rate) => {
            validate::non_negative("rate", rate)?;
            if rate > Decimal::ONE {
                return Err(LeiFacilError::invalid("rate", "Cannot exceed 100% of net income"));
            }
            let percentage = rate * dec!(100);
            if percentage > Decimal::from(MAX_POINTS) {
                warnings.push(format!(
                    "Rate {percentage}% is above the usual {MAX_POINTS}% ceiling"
                ));
            }
            (percentage, rate)
        }
        None => {
            let points = Decimal::from(alimony_percentage(input.children));
            (points, points / dec!(100))
        }
    };

    let pension = input.net_income * rate;
    let output = AlimonyOutput {
        percentage,
        rate,
        pension,
        per_child: pension / Decimal::from(input.children),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let rate_source = if input.rate.is_some() { "court" } else { "bracket" };
    Ok(with_metadata(
        "Child support: min(15 + 5 x (children - 1), 50)% of net income",
        &serde_json::json!({
            "children": input.children,
            "rate_source": rate_source,
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(children: u32) -> AlimonyInput {
        AlimonyInput {
            net_income: dec!(10000),
            children,
            rate: None,
        }
    }

    #[test]
    fn test_bracket() {
        assert_eq!(alimony_percentage(1), 15);
        assert_eq!(alimony_percentage(2), 20);
        assert_eq!(alimony_percentage(7), 45);
        assert_eq!(alimony_percentage(8), 50);
        assert_eq!(alimony_percentage(u32::MAX), 50);
    }

    #[test]
    fn test_two_children() {
        let result = calculate_alimony(&input(2)).unwrap();
        let r = &result.result;
        assert_eq!(r.percentage, dec!(20));
        assert_eq!(r.pension, dec!(2000));
        assert_eq!(r.per_child, dec!(1000));
    }

    #[test]
    fn test_many_children_capped() {
        let result = calculate_alimony(&input(100)).unwrap();
        assert_eq!(result.result.percentage, dec!(50));
        assert_eq!(result.result.pension, dec!(5000));
    }

    #[test]
    fn test_court_rate_overrides_bracket() {
        let mut i = input(1);
        i.rate = Some(dec!(0.3));
        let result = calculate_alimony(&i).unwrap();
        assert_eq!(result.result.percentage, dec!(30));
        assert_eq!(result.result.pension, dec!(3000));
    }

    #[test]
    fn test_no_children_rejected() {
        assert!(calculate_alimony(&input(0)).is_err());
    }
}
