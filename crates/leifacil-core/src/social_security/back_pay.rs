use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::calendar::{IndexTable, MonthKey};
use crate::checked;
use crate::correction::compound_indexed;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::validate;
use crate::LeiFacilResult;

/// Unpaid benefit installments, oldest first, one per month from `first_month`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackPayInput {
    pub installments: Vec<Money>,
    pub first_month: MonthKey,
    pub inpc: IndexTable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectedInstallment {
    /// 1-indexed.
    pub number: u32,
    pub amount: Money,
    pub month: MonthKey,
    pub months_late: u32,
    pub correction_factor: Decimal,
    pub corrected_amount: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackPayOutput {
    pub installments: Vec<CorrectedInstallment>,
    pub total_original: Money,
    pub total_corrected: Money,
}

/// Correct each installment from its own month up to the latest one.
///
/// Installment k (0-indexed) is corrected over `len - k - 1` months of INPC
/// starting at its own month; months missing from the table are not
/// corrected.
pub fn correct_back_pay(input: &BackPayInput) -> LeiFacilResult<ComputationOutput<BackPayOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::amounts("installments", &input.installments)?;

    let count = input.installments.len() as u32;
    let mut missing: Vec<MonthKey> = Vec::new();

    let installments = input
        .installments
        .iter()
        .enumerate()
        .map(|(k, amount)| -> LeiFacilResult<CorrectedInstallment> {
            let k = k as u32;
            let month = input.first_month.offset(k)?;
            let months_late = count - k - 1;
            let growth = compound_indexed(*amount, month, months_late, &input.inpc, None)?;
            missing.extend(growth.fallback_months.iter().copied());
            Ok(CorrectedInstallment {
                number: k + 1,
                amount: *amount,
                month,
                months_late,
                correction_factor: growth.factor,
                corrected_amount: growth.amount,
            })
        })
        .collect::<LeiFacilResult<Vec<_>>>()?;

    missing.sort();
    missing.dedup();
    if let Some(first) = missing.first() {
        warnings.push(format!(
            "INPC: {} month(s) missing from the index table (first {first}); not corrected",
            missing.len()
        ));
    }

    let output = BackPayOutput {
        total_original: checked::sum(input.installments.iter().copied(), "total original")?,
        total_corrected: checked::sum(
            installments.iter().map(|i| i.corrected_amount),
            "total corrected",
        )?,
        installments,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Benefit back pay: each installment corrected by INPC up to the latest installment",
        &serde_json::json!({
            "first_month": input.first_month.to_string(),
            "installments": count,
        }),
        warnings,
        elapsed,
        output,
    ))
}
