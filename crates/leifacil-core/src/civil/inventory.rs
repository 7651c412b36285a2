use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::validate;
use crate::LeiFacilResult;

/// Probate inventory: the surviving spouse's half comes off the top and
/// ITCMD (state inheritance tax) applies to the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryInput {
    pub assets: Vec<Money>,
    pub liabilities: Vec<Money>,
    /// ITCMD rate (0.04 = 4%).
    pub itcmd_rate: Rate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryOutput {
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub net_estate: Money,
    pub spouse_half: Money,
    pub inheritance: Money,
    pub itcmd: Money,
}

pub fn calculate_inventory(input: &InventoryInput) -> LeiFacilResult<ComputationOutput<InventoryOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::amounts("assets", &input.assets)?;
    validate::amounts("liabilities", &input.liabilities)?;
    validate::non_negative("itcmd_rate", input.itcmd_rate)?;

    let total_assets = checked::sum(input.assets.iter().copied(), "total assets")?;
    let total_liabilities = checked::sum(input.liabilities.iter().copied(), "total liabilities")?;
    let net_estate = total_assets - total_liabilities;
    let spouse_half = dec!(0.5) * net_estate;
    let inheritance = net_estate - spouse_half;

    if net_estate < Decimal::ZERO {
        warnings.push("Estate is insolvent; no ITCMD is due".into());
    }
    let itcmd = if inheritance > Decimal::ZERO {
        checked::mul(input.itcmd_rate, inheritance, "ITCMD")?
    } else {
        Decimal::ZERO
    };

    let output = InventoryOutput {
        total_assets,
        total_liabilities,
        net_estate,
        spouse_half,
        inheritance,
        itcmd,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Probate inventory: net estate, spouse half, ITCMD on the inherited half",
        &serde_json::json!({ "itcmd_rate": input.itcmd_rate.to_string() }),
        warnings,
        elapsed,
        output,
    ))
}
