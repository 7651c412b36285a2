use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::validate;
use crate::LeiFacilResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDivisionInput {
    pub assets: Vec<Money>,
    pub liabilities: Vec<Money>,
    pub has_spouse: bool,
    pub heirs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDivisionOutput {
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub net_estate: Money,
    /// Spouse's half (meação); zero without a spouse.
    pub spouse_share: Money,
    pub remainder: Money,
    pub heirs: u32,
    pub quota_per_heir: Money,
}

/// Split a net estate between the spouse's half and equal heir quotas.
pub fn divide_assets(
    input: &AssetDivisionInput,
) -> LeiFacilResult<ComputationOutput<AssetDivisionOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::amounts("assets", &input.assets)?;
    validate::amounts("liabilities", &input.liabilities)?;

    let total_assets = checked::sum(input.assets.iter().copied(), "total assets")?;
    let total_liabilities = checked::sum(input.liabilities.iter().copied(), "total liabilities")?;
    let net_estate = total_assets - total_liabilities;
    if net_estate < Decimal::ZERO {
        warnings.push("Liabilities exceed assets; the estate is insolvent".into());
    }

    let spouse_share = if input.has_spouse {
        dec!(0.5) * net_estate
    } else {
        Decimal::ZERO
    };
    let remainder = net_estate - spouse_share;

    let quota_per_heir = if input.heirs == 0 {
        warnings.push("No heirs; the remainder is left undivided".into());
        Decimal::ZERO
    } else {
        remainder / Decimal::from(input.heirs)
    };

    let output = AssetDivisionOutput {
        total_assets,
        total_liabilities,
        net_estate,
        spouse_share,
        remainder,
        heirs: input.heirs,
        quota_per_heir,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Asset division: net estate, spouse half, equal heir quotas",
        &serde_json::json!({
            "has_spouse": input.has_spouse,
            "heirs": input.heirs,
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spouse_and_heirs() {
        let result = divide_assets(&AssetDivisionInput {
            assets: vec![dec!(500000), dec!(100000)],
            liabilities: vec![dec!(200000)],
            has_spouse: true,
            heirs: 2,
        })
        .unwrap();
        let r = &result.result;
        assert_eq!(r.net_estate, dec!(400000));
        assert_eq!(r.spouse_share, dec!(200000));
        assert_eq!(r.quota_per_heir, dec!(100000));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_no_heirs_warns() {
        let result = divide_assets(&AssetDivisionInput {
            assets: vec![dec!(1000)],
            liabilities: vec![],
            has_spouse: false,
            heirs: 0,
        })
        .unwrap();
        assert_eq!(result.result.remainder, dec!(1000));
        assert_eq!(result.result.quota_per_heir, dec!(0));
        assert_eq!(result.warnings.len(), 1);
    }
}
