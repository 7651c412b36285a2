use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::validate;
use crate::LeiFacilResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountingExpertiseInput {
    pub assets: Vec<Money>,
    pub liabilities: Vec<Money>,
    /// Single-period discount rate for a present value of the net equity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<Rate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountingExpertiseOutput {
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub net_equity: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_value: Option<Money>,
}

/// Net equity for a forensic accounting report, optionally discounted.
pub fn calculate_accounting_expertise(
    input: &AccountingExpertiseInput,
) -> LeiFacilResult<ComputationOutput<AccountingExpertiseOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::amounts("assets", &input.assets)?;
    validate::amounts("liabilities", &input.liabilities)?;
    if let Some(rate) = input.discount_rate {
        validate::rate("discount_rate", rate)?;
    }

    let total_assets = checked::sum(input.assets.iter().copied(), "total assets")?;
    let total_liabilities = checked::sum(input.liabilities.iter().copied(), "total liabilities")?;
    let net_equity = total_assets - total_liabilities;
    if net_equity < Decimal::ZERO {
        warnings.push("Negative net equity (unsecured liabilities)".into());
    }

    let present_value = input
        .discount_rate
        .map(|rate| {
            let divisor = checked::add(Decimal::ONE, rate, "discount factor")?;
            checked::div(net_equity, divisor, "present value")
        })
        .transpose()?;

    let output = AccountingExpertiseOutput {
        total_assets,
        total_liabilities,
        net_equity,
        present_value,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Accounting expertise: assets - liabilities, optionally / (1 + discount rate)",
        &serde_json::json!({
            "discount_rate": input.discount_rate.map(|r| r.to_string()),
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_net_equity_discounted() {
        let result = calculate_accounting_expertise(&AccountingExpertiseInput {
            assets: vec![dec!(80000), dec!(30000)],
            liabilities: vec![dec!(5000)],
            discount_rate: Some(dec!(0.05)),
        })
        .unwrap();
        let r = &result.result;
        assert_eq!(r.net_equity, dec!(105000));
        assert_eq!(r.present_value, Some(dec!(100000)));
    }

    #[test]
    fn test_discount_near_total_loss_overflows_cleanly() {
        let err = calculate_accounting_expertise(&AccountingExpertiseInput {
            assets: vec![Decimal::MAX],
            liabilities: vec![],
            discount_rate: Some(dec!(-0.9)),
        })
        .unwrap_err();
        assert!(matches!(err, crate::LeiFacilError::Overflow { .. }));
    }

    #[test]
    fn test_no_discount_rate() {
        let result = calculate_accounting_expertise(&AccountingExpertiseInput {
            assets: vec![dec!(100)],
            liabilities: vec![dec!(300)],
            discount_rate: None,
        })
        .unwrap();
        assert_eq!(result.result.net_equity, dec!(-200));
        assert!(result.result.present_value.is_none());
        assert_eq!(result.warnings.len(), 1);
    }
}
