//! Contribution time, including special (hazardous-activity) time converted
//! to common time by a multiplier.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::types::{with_metadata, ComputationOutput};
use crate::validate;
use crate::LeiFacilResult;

fn check_factor(factor: Decimal, warnings: &mut Vec<String>) -> LeiFacilResult<()> {
    validate::positive("conversion_factor", factor)?;
    if factor != dec!(1.2) && factor != dec!(1.4) {
        warnings.push(format!(
            "Conversion factor {factor} is not one of the statutory 1.2 (women) or 1.4 (men)"
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionTimeInput {
    pub common_months: u32,
    pub special_months: u32,
    pub conversion_factor: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionTimeOutput {
    pub common_months: u32,
    pub special_months: u32,
    pub converted_special_months: Decimal,
    pub total_months: Decimal,
    pub total_years: Decimal,
}

pub fn calculate_contribution_time(
    input: &ContributionTimeInput,
) -> LeiFacilResult<ComputationOutput<ContributionTimeOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    check_factor(input.conversion_factor, &mut warnings)?;

    let converted = checked::mul(
        Decimal::from(input.special_months),
        input.conversion_factor,
        "converted special months",
    )?;
    let total_months = checked::add(Decimal::from(input.common_months), converted, "total months")?;

    let output = ContributionTimeOutput {
        common_months: input.common_months,
        special_months: input.special_months,
        converted_special_months: converted,
        total_months,
        total_years: total_months / dec!(12),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Contribution time: common months plus special months x conversion factor",
        &serde_json::json!({ "conversion_factor": input.conversion_factor.to_string() }),
        warnings,
        elapsed,
        output,
    ))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialTimeConversionInput {
    pub special_months: u32,
    pub conversion_factor: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialTimeConversionOutput {
    pub special_months: u32,
    pub conversion_factor: Decimal,
    pub converted_months: Decimal,
    /// converted - original
    pub months_gained: Decimal,
}

pub fn convert_special_time(
    input: &SpecialTimeConversionInput,
) -> LeiFacilResult<ComputationOutput<SpecialTimeConversionOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    check_factor(input.conversion_factor, &mut warnings)?;

    let special = Decimal::from(input.special_months);
    let converted = checked::mul(special, input.conversion_factor, "converted months")?;

    let output = SpecialTimeConversionOutput {
        special_months: input.special_months,
        conversion_factor: input.conversion_factor,
        converted_months: converted,
        months_gained: converted - special,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Special time conversion: months x factor",
        &serde_json::json!({ "conversion_factor": input.conversion_factor.to_string() }),
        warnings,
        elapsed,
        output,
    ))
}
