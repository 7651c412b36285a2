use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::calendar::{months_between, IndexTable, MonthKey};
use crate::correction::{compound_indexed, MonthlyFactor};
use crate::error::LeiFacilError;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::validate;
use crate::LeiFacilResult;

// ---------------------------------------------------------------------------
// Input / output
// ---------------------------------------------------------------------------

/// A court debt corrected by IPCA until citation and by SELIC afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtUpdateInput {
    pub original_amount: Money,
    /// Date the debt became due.
    pub initial_date: NaiveDate,
    /// Date the debtor was served; SELIC replaces IPCA from here on.
    pub citation_date: NaiveDate,
    pub final_date: NaiveDate,
    pub ipca: IndexTable,
    pub selic: IndexTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtUpdateOutput {
    pub original_amount: Money,
    pub months_before_citation: u32,
    pub months_after_citation: u32,
    pub ipca_factor: Decimal,
    pub corrected_before_citation: Money,
    pub selic_factor: Decimal,
    pub final_amount: Money,
    pub ipca_breakdown: Vec<MonthlyFactor>,
    pub selic_breakdown: Vec<MonthlyFactor>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Update a judicial debt: IPCA from the due date to citation, then SELIC to
/// the final date. Months missing from either table are not corrected.
pub fn update_debt(input: &DebtUpdateInput) -> LeiFacilResult<ComputationOutput<DebtUpdateOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::non_negative("original_amount", input.original_amount)?;
    if input.citation_date < input.initial_date {
        return Err(LeiFacilError::invalid(
            "citation_date",
            "Citation cannot precede the initial date",
        ));
    }
    if input.final_date < input.citation_date {
        return Err(LeiFacilError::invalid(
            "final_date",
            "Final date cannot precede the citation date",
        ));
    }

    let months_before = months_between(input.initial_date, input.citation_date)?;
    let months_after = months_between(input.citation_date, input.final_date)?;

    let ipca = compound_indexed(
        input.original_amount,
        MonthKey::from_date(input.initial_date),
        months_before,
        &input.ipca,
        None,
    )?;
    let selic = compound_indexed(
        ipca.amount,
        MonthKey::from_date(input.citation_date),
        months_after,
        &input.selic,
        None,
    )?;

    warnings.extend(ipca.fallback_warning("IPCA", None));
    warnings.extend(selic.fallback_warning("SELIC", None));

    let output = DebtUpdateOutput {
        original_amount: input.original_amount,
        months_before_citation: months_before,
        months_after_citation: months_after,
        ipca_factor: ipca.factor,
        corrected_before_citation: ipca.amount,
        selic_factor: selic.factor,
        final_amount: selic.amount,
        ipca_breakdown: ipca.months,
        selic_breakdown: selic.months,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Judicial debt update (IPCA until citation, SELIC after citation)",
        &serde_json::json!({
            "initial_date": input.initial_date.to_string(),
            "citation_date": input.citation_date.to_string(),
            "final_date": input.final_date.to_string(),
            "missing_index_policy": "month not corrected",
        }),
        warnings,
        elapsed,
        output,
    ))
}
