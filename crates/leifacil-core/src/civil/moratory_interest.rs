use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::calendar::{IndexTable, MonthKey};
use crate::checked;
use crate::correction::{compound_fixed, compound_indexed, growth_factor, simple_interest};
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::validate;
use crate::LeiFacilResult;

/// How the default interest accrues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InterestMode {
    /// `value × rate × months`
    Simple,
    /// `value × (1 + rate)^months`
    Compound,
    /// Compounded month by month on the SELIC series; months missing from
    /// the table accrue at the flat `rate`.
    CompoundSelic { start: MonthKey, selic: IndexTable },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoratoryInterestInput {
    pub corrected_value: Money,
    /// Monthly rate (0.01 = 1% a.m.).
    pub rate: Rate,
    pub months: Months,
    pub mode: InterestMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoratoryInterestOutput {
    pub corrected_value: Money,
    pub rate: Rate,
    pub months: Months,
    /// final_value / corrected_value
    pub factor: Decimal,
    pub interest: Money,
    pub final_value: Money,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fallback_months: Vec<MonthKey>,
}

/// Moratory interest on an already corrected amount.
pub fn calculate_moratory_interest(
    input: &MoratoryInterestInput,
) -> LeiFacilResult<ComputationOutput<MoratoryInterestOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::non_negative("corrected_value", input.corrected_value)?;
    validate::rate("rate", input.rate)?;

    let (factor, final_value, fallback_months, methodology) = match &input.mode {
        InterestMode::Simple => {
            let interest = simple_interest(input.corrected_value, input.rate, input.months)?;
            let accrued = simple_interest(Decimal::ONE, input.rate, input.months)?;
            let factor = checked::add(Decimal::ONE, accrued, "simple interest factor")?;
            let final_value = checked::add(input.corrected_value, interest, "moratory interest")?;
            (factor, final_value, Vec::new(), "Simple moratory interest")
        }
        InterestMode::Compound => {
            let final_value = compound_fixed(input.corrected_value, input.rate, input.months)?;
            let factor = growth_factor(input.rate, input.months)?;
            (factor, final_value, Vec::new(), "Compound moratory interest at a fixed rate")
        }
        InterestMode::CompoundSelic { start: first, selic } => {
            let growth = compound_indexed(
                input.corrected_value,
                *first,
                input.months,
                selic,
                Some(input.rate),
            )?;
            warnings.extend(growth.fallback_warning("SELIC", Some(input.rate)));
            (
                growth.factor,
                growth.amount,
                growth.fallback_months,
                "Compound moratory interest on the SELIC series",
            )
        }
    };

    if input.rate > dec!(0.01) && matches!(input.mode, InterestMode::Simple) {
        warnings.push(format!(
            "Rate {} exceeds the civil-code default of 1% a month",
            input.rate
        ));
    }

    let output = MoratoryInterestOutput {
        corrected_value: input.corrected_value,
        rate: input.rate,
        months: input.months,
        factor,
        interest: final_value - input.corrected_value,
        final_value,
        fallback_months,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        methodology,
        &serde_json::json!({
            "rate": input.rate.to_string(),
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

    fn input(mode: InterestMode) -> MoratoryInterestInput {
        MoratoryInterestInput {
            corrected_value: dec!(10000),
            rate: dec!(0.01),
            months: 12,
            mode,
        }
    }

    #[test]
    fn test_simple_interest_scenario() {
        let result = calculate_moratory_interest(&input(InterestMode::Simple)).unwrap();
        assert_eq!(result.result.interest, dec!(1200));
        assert_eq!(result.result.final_value, dec!(11200));
        assert_eq!(result.result.factor, dec!(1.12));
    }

    #[test]
    fn test_compound_exceeds_simple() {
        let simple = calculate_moratory_interest(&input(InterestMode::Simple)).unwrap();
        let compound = calculate_moratory_interest(&input(InterestMode::Compound)).unwrap();
        assert!(compound.result.interest > simple.result.interest);
        assert_eq!(compound.result.final_value.round_dp(2), dec!(11268.25));
    }

    #[test]
    fn test_selic_falls_back_to_flat_rate() {
        let start = MonthKey::new(2024, 1).unwrap();
        let mut selic = IndexTable::new();
        selic.insert(start, dec!(0.02));
        let result = calculate_moratory_interest(&MoratoryInterestInput {
            corrected_value: dec!(1000),
            rate: dec!(0.01),
            months: 2,
            mode: InterestMode::CompoundSelic { start, selic },
        })
        .unwrap();
        assert_eq!(result.result.final_value, dec!(1030.2));
        assert_eq!(result.result.fallback_months.len(), 1);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_huge_rate_overflows_in_every_mode() {
        for mode in [InterestMode::Simple, InterestMode::Compound] {
            let err = calculate_moratory_interest(&MoratoryInterestInput {
                corrected_value: dec!(1000),
                rate: Decimal::MAX,
                months: 2,
                mode,
            })
            .unwrap_err();
            assert!(matches!(err, crate::LeiFacilError::Overflow { .. }));
        }
    }

    #[test]
    fn test_selic_horizon_is_bounded() {
        let err = calculate_moratory_interest(&MoratoryInterestInput {
            corrected_value: dec!(1000),
            rate: dec!(0.01),
            months: u32::MAX,
            mode: InterestMode::CompoundSelic {
                start: MonthKey::new(2024, 1).unwrap(),
                selic: IndexTable::new(),
            },
        })
        .unwrap_err();
        assert!(matches!(err, crate::LeiFacilError::InvalidParameter { .. }));
    }

    #[test]
    fn test_zero_months_leaves_value_unchanged() {
        let mut i = input(InterestMode::Compound);
        i.months = 0;
        let result = calculate_moratory_interest(&i).unwrap();
        assert_eq!(result.result.final_value, dec!(10000));
        assert_eq!(result.result.interest, Decimal::ZERO);
    }
}
