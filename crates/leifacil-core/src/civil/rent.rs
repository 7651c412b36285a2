use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::correction::{compound_fixed, simple_interest};
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::validate;
use crate::LeiFacilResult;

/// Unpaid rent claimed in an eviction action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentInput {
    pub original_rent: Money,
    /// Contractual adjustment index per month (0.005 = 0.5%).
    pub contractual_index: Rate,
    /// Number of unpaid months.
    pub months: Months,
    /// Monthly default interest rate.
    pub interest_rate: Rate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentMonth {
    pub month: u32,
    pub corrected_rent: Money,
    pub interest: Money,
    pub total: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentOutput {
    pub original_rent: Money,
    pub monthly: Vec<RentMonth>,
    pub total_corrected_rent: Money,
    pub total_interest: Money,
    pub grand_total: Money,
}

/// Month m (1-based) is corrected for m months and carries m months of
/// simple interest.
pub fn calculate_rent_arrears(input: &RentInput) -> LeiFacilResult<ComputationOutput<RentOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::non_negative("original_rent", input.original_rent)?;
    validate::rate("contractual_index", input.contractual_index)?;
    validate::rate("interest_rate", input.interest_rate)?;
    validate::periods("months", input.months)?;

    if input.months == 0 {
        warnings.push("No unpaid months; nothing is owed".into());
    }

    let monthly = (1..=input.months)
        .map(|m| -> LeiFacilResult<RentMonth> {
            let corrected_rent = compound_fixed(input.original_rent, input.contractual_index, m)?;
            let interest = simple_interest(corrected_rent, input.interest_rate, m)?;
            Ok(RentMonth {
                month: m,
                corrected_rent,
                interest,
                total: checked::add(corrected_rent, interest, "rent month total")?,
            })
        })
        .collect::<LeiFacilResult<Vec<_>>>()?;

    let total_corrected_rent =
        checked::sum(monthly.iter().map(|m| m.corrected_rent), "total corrected rent")?;
    let total_interest = checked::sum(monthly.iter().map(|m| m.interest), "total rent interest")?;
    let grand_total = checked::add(total_corrected_rent, total_interest, "rent grand total")?;

    let output = RentOutput {
        original_rent: input.original_rent,
        total_corrected_rent,
        total_interest,
        grand_total,
        monthly,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Rent arrears: compound contractual correction plus simple default interest per month",
        &serde_json::json!({
            "contractual_index": input.contractual_index.to_string(),
            "interest_rate": input.interest_rate.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
