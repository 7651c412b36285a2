use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::correction::{compound_fixed, simple_interest};
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::validate;
use crate::LeiFacilResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UndueTaxInput {
    pub amount_paid: Money,
    pub months: Months,
    /// Monthly IPCA rate.
    pub ipca: Rate,
    /// Monthly SELIC rate.
    pub selic: Rate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UndueTaxOutput {
    pub amount_paid: Money,
    pub corrected: Money,
    pub interest: Money,
    pub refund: Money,
}

/// Refund of tax paid unduly: IPCA correction plus simple SELIC interest.
pub fn calculate_undue_tax_refund(
    input: &UndueTaxInput,
) -> LeiFacilResult<ComputationOutput<UndueTaxOutput>> {
    let start = Instant::now();

    validate::non_negative("amount_paid", input.amount_paid)?;
    validate::rate("selic", input.selic)?;

    let corrected = compound_fixed(input.amount_paid, input.ipca, input.months)?;
    let interest = simple_interest(corrected, input.selic, input.months)?;

    let output = UndueTaxOutput {
        amount_paid: input.amount_paid,
        corrected,
        interest,
        refund: checked::add(corrected, interest, "undue tax refund")?,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Undue tax refund: paid x (1 + IPCA)^months plus SELIC x months",
        &serde_json::json!({
            "months": input.months,
            "ipca": input.ipca.to_string(),
            "selic": input.selic.to_string(),
        }),
        Vec::new(),
        elapsed,
        output,
    ))
}
