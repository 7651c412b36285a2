//! Retirement eligibility under the 2019 pension reform: four transition
//! rules and the permanent rule, any of which suffices.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::types::{with_metadata, ComputationOutput};
use crate::validate;
use crate::LeiFacilResult;

/// Last year before the progressive minimum age starts rising; the first
/// increment applies in 2020.
const PROGRESSIVE_BASE_YEAR: i32 = 2019;
/// Years added to the progressive minimum age per calendar year, capped at
/// `PROGRESSIVE_MAX_STEPS` increments.
const PROGRESSIVE_STEP: Decimal = dec!(0.5);
const PROGRESSIVE_MAX_STEPS: i32 = 4;
const TOLL_50: Decimal = dec!(0.5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// Statutory thresholds for one sex. Months unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementThresholds {
    /// Years.
    pub minimum_age: Decimal,
    pub minimum_contribution_months: u32,
    pub minimum_points: Decimal,
    /// Years, before the progressive increments.
    pub progressive_base_age: Decimal,
    pub full_contribution_months: u32,
    /// Years, for the 100% toll rule.
    pub toll_100_minimum_age: Decimal,
}

impl RetirementThresholds {
    pub fn for_sex(sex: Sex) -> Self {
        match sex {
            Sex::Male => RetirementThresholds {
                minimum_age: dec!(65),
                minimum_contribution_months: 20 * 12,
                minimum_points: dec!(98),
                progressive_base_age: dec!(61),
                full_contribution_months: 35 * 12,
                toll_100_minimum_age: dec!(60),
            },
            Sex::Female => RetirementThresholds {
                minimum_age: dec!(62),
                minimum_contribution_months: 15 * 12,
                minimum_points: dec!(88),
                progressive_base_age: dec!(56),
                full_contribution_months: 30 * 12,
                toll_100_minimum_age: dec!(57),
            },
        }
    }

    /// Minimum age under the progressive-age rule for a given year.
    pub fn progressive_minimum_age(&self, year: i32) -> Decimal {
        if year <= PROGRESSIVE_BASE_YEAR {
            return self.progressive_base_age;
        }
        let steps = (year - PROGRESSIVE_BASE_YEAR).min(PROGRESSIVE_MAX_STEPS);
        self.progressive_base_age + PROGRESSIVE_STEP * Decimal::from(steps)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementInput {
    /// Age in years; fractional years allowed.
    pub age: Decimal,
    pub contribution_months: u32,
    /// Age plus contribution years. Derived from the other two when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Decimal>,
    pub sex: Sex,
    pub retirement_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementOutput {
    pub age: Decimal,
    pub contribution_months: u32,
    pub points: Decimal,
    pub sex: Sex,
    pub retirement_year: i32,
    pub thresholds: RetirementThresholds,
    pub progressive_minimum_age: Decimal,
    /// Months short of full contribution time; negative when exceeded.
    pub missing_months: i64,
    pub toll_months: Decimal,
    pub meets_points_rule: bool,
    pub meets_progressive_age_rule: bool,
    pub meets_toll_50_rule: bool,
    pub meets_toll_100_rule: bool,
    pub meets_permanent_rule: bool,
    pub eligible: bool,
}

/// Evaluate every rule for one person at one retirement date.
pub fn simulate_retirement(
    input: &RetirementInput,
) -> LeiFacilResult<ComputationOutput<RetirementOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::non_negative("age", input.age)?;
    if let Some(points) = input.points {
        validate::non_negative("points", points)?;
    }

    let t = RetirementThresholds::for_sex(input.sex);
    let year = input.retirement_date.year();
    if year < PROGRESSIVE_BASE_YEAR {
        warnings.push(format!(
            "Retirement year {year} precedes the 2019 reform; transition rules may not apply"
        ));
    }

    let contribution = input.contribution_months;
    let points = match input.points {
        Some(points) => points,
        None => checked::add(input.age, Decimal::from(contribution) / dec!(12), "points")?,
    };
    let has_minimum_contribution = contribution >= t.minimum_contribution_months;

    // Rule 1: points
    let meets_points_rule = points >= t.minimum_points && has_minimum_contribution;

    // Rule 2: progressive minimum age
    let progressive_minimum_age = t.progressive_minimum_age(year);
    let meets_progressive_age_rule =
        input.age >= progressive_minimum_age && has_minimum_contribution;

    // Rule 3: 50% toll on the time missing for full contribution
    let missing_months = i64::from(t.full_contribution_months) - i64::from(contribution);
    let toll_months = Decimal::from(missing_months) * TOLL_50;
    let meets_toll_50_rule = missing_months <= 0
        || Decimal::from(contribution) + toll_months >= Decimal::from(t.full_contribution_months);

    // Rule 4: 100% toll with a minimum age
    let meets_toll_100_rule = input.age >= t.toll_100_minimum_age && missing_months <= 0;

    // Permanent rule
    let meets_permanent_rule = input.age >= t.minimum_age && has_minimum_contribution;

    let eligible = meets_points_rule
        || meets_progressive_age_rule
        || meets_toll_50_rule
        || meets_toll_100_rule
        || meets_permanent_rule;

    let output = RetirementOutput {
        age: input.age,
        contribution_months: contribution,
        points,
        sex: input.sex,
        retirement_year: year,
        thresholds: t,
        progressive_minimum_age,
        missing_months,
        toll_months,
        meets_points_rule,
        meets_progressive_age_rule,
        meets_toll_50_rule,
        meets_toll_100_rule,
        meets_permanent_rule,
        eligible,
    };

    let points_source = if input.points.is_some() {
        "input"
    } else {
        "age + contribution years"
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Retirement simulation: points, progressive age, 50% toll, 100% toll, permanent rule",
        &serde_json::json!({
            "points_source": points_source,
            "retirement_date": input.retirement_date.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(sex: Sex, age: Decimal, contribution_months: u32, year: i32) -> RetirementInput {
        RetirementInput {
            age,
            contribution_months,
            points: None,
            sex,
            retirement_date: NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
        }
    }

    #[test]
    fn test_progressive_age_schedule() {
        let m = RetirementThresholds::for_sex(Sex::Male);
        assert_eq!(m.progressive_minimum_age(2019), dec!(61));
        assert_eq!(m.progressive_minimum_age(2020), dec!(61.5));
        assert_eq!(m.progressive_minimum_age(2023), dec!(63));
        assert_eq!(m.progressive_minimum_age(2030), dec!(63));
        let f = RetirementThresholds::for_sex(Sex::Female);
        assert_eq!(f.progressive_minimum_age(2021), dec!(57));
    }

    #[test]
    fn test_permanent_rule_male() {
        let result = simulate_retirement(&input(Sex::Male, dec!(65), 240, 2025)).unwrap();
        assert!(result.result.meets_permanent_rule);
        assert!(result.result.eligible);
    }

    #[test]
    fn test_young_short_career_not_eligible() {
        let result = simulate_retirement(&input(Sex::Female, dec!(40), 120, 2025)).unwrap();
        let r = &result.result;
        assert!(!r.eligible);
        assert_eq!(r.missing_months, 240);
        assert_eq!(r.toll_months, dec!(120));
        assert_eq!(r.points, dec!(50));
    }

    #[test]
    fn test_points_rule_uses_supplied_points() {
        let mut i = input(Sex::Female, dec!(55), 200, 2025);
        i.points = Some(dec!(88));
        let result = simulate_retirement(&i).unwrap();
        assert!(result.result.meets_points_rule);
        assert!(!result.result.meets_permanent_rule);
        assert!(result.result.eligible);
    }

    #[test]
    fn test_full_contribution_meets_toll_rules() {
        let result = simulate_retirement(&input(Sex::Male, dec!(60), 420, 2025)).unwrap();
        let r = &result.result;
        assert!(r.meets_toll_50_rule);
        assert!(r.meets_toll_100_rule);
    }

    #[test]
    fn test_eligibility_monotonic_in_age_and_time() {
        for sex in [Sex::Male, Sex::Female] {
            for months in (0..=480).step_by(30) {
                let mut was_eligible = false;
                for age in 30..=75 {
                    let mut i = input(sex, Decimal::from(age), months, 2024);
                    i.points = Some(dec!(90));
                    let eligible = simulate_retirement(&i).unwrap().result.eligible;
                    assert!(!(was_eligible && !eligible), "age {age}, months {months}");
                    was_eligible = eligible;
                }
            }
            for age in (30..=75).step_by(5) {
                let mut was_eligible = false;
                for months in 0..=480 {
                    let mut i = input(sex, Decimal::from(age), months, 2024);
                    i.points = Some(dec!(90));
                    let eligible = simulate_retirement(&i).unwrap().result.eligible;
                    assert!(!(was_eligible && !eligible), "age {age}, months {months}");
                    was_eligible = eligible;
                }
            }
        }
    }
}
