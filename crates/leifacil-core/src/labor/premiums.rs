//! Pay premiums: overtime, night shift, hazard and unhealthiness.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::error::LeiFacilError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::validate;
use crate::LeiFacilResult;

/// Night hours are paid 20% above the equivalent day hour.
const NIGHT_SHIFT_PREMIUM: Decimal = dec!(0.2);
/// Hazard premium over the base salary.
const HAZARD_PREMIUM: Decimal = dec!(0.3);

// ---------------------------------------------------------------------------
// Overtime
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeInput {
    pub base_salary: Money,
    /// Contractual hours per month (220 for a 44h week).
    pub monthly_hours: Decimal,
    /// Overtime premium (0.5 = 50%, 1.0 = 100%).
    pub premium: Rate,
    pub overtime_hours: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeOutput {
    pub hourly_wage: Money,
    pub overtime_hourly_wage: Money,
    pub overtime_hours: Decimal,
    pub total_overtime: Money,
}

pub fn calculate_overtime(input: &OvertimeInput) -> LeiFacilResult<ComputationOutput<OvertimeOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::non_negative("base_salary", input.base_salary)?;
    validate::positive("monthly_hours", input.monthly_hours)?;
    validate::non_negative("premium", input.premium)?;
    validate::non_negative("overtime_hours", input.overtime_hours)?;

    if input.premium < dec!(0.5) {
        warnings.push(format!(
            "Premium {} is below the constitutional minimum of 50%",
            input.premium
        ));
    }

    let hourly_wage = checked::div(input.base_salary, input.monthly_hours, "hourly wage")?;
    let multiplier = checked::add(Decimal::ONE, input.premium, "overtime premium")?;
    let overtime_hourly_wage = checked::mul(hourly_wage, multiplier, "overtime hourly wage")?;
    let total_overtime = checked::mul(overtime_hourly_wage, input.overtime_hours, "overtime total")?;

    let output = OvertimeOutput {
        hourly_wage,
        overtime_hourly_wage,
        overtime_hours: input.overtime_hours,
        total_overtime,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Overtime: base / monthly hours x (1 + premium) x overtime hours",
        &serde_json::json!({
            "monthly_hours": input.monthly_hours.to_string(),
            "premium": input.premium.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Night shift
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NightShiftInput {
    pub day_hourly_wage: Money,
    pub night_hours: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NightShiftOutput {
    pub day_hourly_wage: Money,
    pub night_hourly_wage: Money,
    pub night_hours: Decimal,
    pub total_night_pay: Money,
}

pub fn calculate_night_shift(
    input: &NightShiftInput,
) -> LeiFacilResult<ComputationOutput<NightShiftOutput>> {
    let start = Instant::now();
    validate::non_negative("day_hourly_wage", input.day_hourly_wage)?;
    validate::non_negative("night_hours", input.night_hours)?;

    let night_hourly_wage = checked::mul(
        input.day_hourly_wage,
        Decimal::ONE + NIGHT_SHIFT_PREMIUM,
        "night hourly wage",
    )?;
    let total_night_pay = checked::mul(night_hourly_wage, input.night_hours, "night shift total")?;
    let output = NightShiftOutput {
        day_hourly_wage: input.day_hourly_wage,
        night_hourly_wage,
        night_hours: input.night_hours,
        total_night_pay,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Night shift: day hour x 1.2 x night hours",
        &serde_json::json!({ "night_premium": NIGHT_SHIFT_PREMIUM.to_string() }),
        Vec::new(),
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Hazard and unhealthiness
// ---------------------------------------------------------------------------

/// Unhealthiness grade as assessed by the workplace expert report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnhealthinessGrade {
    Minimum,
    Medium,
    Maximum,
}

impl UnhealthinessGrade {
    /// Fraction of the minimum wage paid for this grade.
    pub fn rate(self) -> Rate {
        match self {
            UnhealthinessGrade::Minimum => dec!(0.1),
            UnhealthinessGrade::Medium => dec!(0.2),
            UnhealthinessGrade::Maximum => dec!(0.4),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardPremiumsInput {
    pub base_salary: Money,
    pub minimum_wage: Money,
    pub hazardous: bool,
    /// `None` when the activity is not unhealthy.
    #[serde(default)]
    pub unhealthiness: Option<UnhealthinessGrade>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardPremiumsOutput {
    pub hazard_premium: Money,
    pub unhealthiness_rate: Rate,
    pub unhealthiness_premium: Money,
    pub total_premiums: Money,
}

pub fn calculate_hazard_premiums(
    input: &HazardPremiumsInput,
) -> LeiFacilResult<ComputationOutput<HazardPremiumsOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::non_negative("base_salary", input.base_salary)?;
    validate::non_negative("minimum_wage", input.minimum_wage)?;
    if input.unhealthiness.is_some() && input.minimum_wage.is_zero() {
        return Err(LeiFacilError::invalid(
            "minimum_wage",
            "Required for the unhealthiness premium",
        ));
    }

    let hazard_premium = if input.hazardous {
        input.base_salary * HAZARD_PREMIUM
    } else {
        Decimal::ZERO
    };
    let unhealthiness_rate = input
        .unhealthiness
        .map(UnhealthinessGrade::rate)
        .unwrap_or(Decimal::ZERO);
    let unhealthiness_premium = input.minimum_wage * unhealthiness_rate;

    if input.hazardous && input.unhealthiness.is_some() {
        warnings.push(
            "Hazard and unhealthiness premiums are not usually cumulative; the employee must choose one"
                .into(),
        );
    }

    let output = HazardPremiumsOutput {
        hazard_premium,
        unhealthiness_rate,
        unhealthiness_premium,
        total_premiums: checked::add(hazard_premium, unhealthiness_premium, "total premiums")?,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Hazard premium 30% of base salary; unhealthiness 10/20/40% of the minimum wage",
        &serde_json::json!({
            "hazard_rate": HAZARD_PREMIUM.to_string(),
            "unhealthiness_grade": input.unhealthiness,
        }),
        warnings,
        elapsed,
        output,
    ))
}
