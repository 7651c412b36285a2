use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::validate;
use crate::LeiFacilResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditOffsetInput {
    pub gross_debt: Money,
    pub credits: Vec<Money>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditOffsetOutput {
    pub gross_debt: Money,
    pub total_credits: Money,
    pub net_debt: Money,
    pub remaining_credits: Money,
}

/// Offset tax credits against a debt. Neither side goes below zero.
pub fn calculate_credit_offset(
    input: &CreditOffsetInput,
) -> LeiFacilResult<ComputationOutput<CreditOffsetOutput>> {
    let start = Instant::now();

    validate::non_negative("gross_debt", input.gross_debt)?;
    validate::amounts("credits", &input.credits)?;

    let total_credits = checked::sum(input.credits.iter().copied(), "total credits")?;
    let output = CreditOffsetOutput {
        gross_debt: input.gross_debt,
        total_credits,
        net_debt: (input.gross_debt - total_credits).max(Decimal::ZERO),
        remaining_credits: (total_credits - input.gross_debt).max(Decimal::ZERO),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Tax credit offset: net debt = max(debt - credits, 0)",
        &serde_json::json!({ "credit_count": input.credits.len() }),
        Vec::new(),
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_partial_offset() {
        let result = calculate_credit_offset(&CreditOffsetInput {
            gross_debt: dec!(10000),
            credits: vec![dec!(3000), dec!(2000)],
        })
        .unwrap();
        assert_eq!(result.result.net_debt, dec!(5000));
        assert_eq!(result.result.remaining_credits, dec!(0));
    }

    #[test]
    fn test_credits_exceed_debt() {
        let result = calculate_credit_offset(&CreditOffsetInput {
            gross_debt: dec!(1000),
            credits: vec![dec!(1500)],
        })
        .unwrap();
        assert_eq!(result.result.net_debt, dec!(0));
        assert_eq!(result.result.remaining_credits, dec!(500));
    }
}
