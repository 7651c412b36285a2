use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::price_installment;
use crate::checked;
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::validate;
use crate::LeiFacilResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxInstallmentInput {
    pub debt: Money,
    pub installments: Months,
    /// Monthly interest rate of the plan.
    pub monthly_rate: Rate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxInstallmentOutput {
    pub installment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
}

/// Tax debt installment plan with constant (Price) payments.
pub fn calculate_tax_installments(
    input: &TaxInstallmentInput,
) -> LeiFacilResult<ComputationOutput<TaxInstallmentOutput>> {
    let start = Instant::now();

    validate::non_negative("debt", input.debt)?;
    let installment = price_installment(input.debt, input.monthly_rate, input.installments)?;
    let total_paid = checked::mul(
        installment,
        Decimal::from(input.installments),
        "installment plan total",
    )?;

    let output = TaxInstallmentOutput {
        installment,
        total_paid,
        total_interest: total_paid - input.debt,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Tax installment plan: Price installment P*r(1+r)^n / ((1+r)^n - 1)",
        &serde_json::json!({
            "installments": input.installments,
            "monthly_rate": input.monthly_rate.to_string(),
        }),
        Vec::new(),
        elapsed,
        output,
    ))
}
