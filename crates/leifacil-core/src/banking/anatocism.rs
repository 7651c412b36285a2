use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::correction::{compound_fixed, simple_interest};
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::validate;
use crate::LeiFacilResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnatocismInput {
    pub balance: Money,
    /// Monthly rate.
    pub rate: Rate,
    pub months: Months,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnatocismOutput {
    pub simple_interest: Money,
    pub amount_simple: Money,
    pub amount_compound: Money,
    /// Interest on interest: compound minus simple.
    pub difference: Money,
}

/// Interest capitalization check: what compounding adds over simple interest.
pub fn calculate_anatocism(
    input: &AnatocismInput,
) -> LeiFacilResult<ComputationOutput<AnatocismOutput>> {
    let start = Instant::now();

    validate::non_negative("balance", input.balance)?;
    validate::rate("rate", input.rate)?;

    let interest = simple_interest(input.balance, input.rate, input.months)?;
    let amount_simple = checked::add(input.balance, interest, "simple balance")?;
    let amount_compound = compound_fixed(input.balance, input.rate, input.months)?;

    let output = AnatocismOutput {
        simple_interest: interest,
        amount_simple,
        amount_compound,
        difference: amount_compound - amount_simple,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Anatocism: compound (1 + r)^n against simple 1 + r*n",
        &serde_json::json!({
            "rate": input.rate.to_string(),
            "months": input.months,
        }),
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
    fn test_interest_on_interest() {
        let result = calculate_anatocism(&AnatocismInput {
            balance: dec!(10000),
            rate: dec!(0.01),
            months: 2,
        })
        .unwrap();
        let r = &result.result;
        assert_eq!(r.simple_interest, dec!(200));
        assert_eq!(r.amount_simple, dec!(10200));
        assert_eq!(r.amount_compound, dec!(10201));
        assert_eq!(r.difference, dec!(1));
    }

    #[test]
    fn test_single_month_has_no_difference() {
        let result = calculate_anatocism(&AnatocismInput {
            balance: dec!(5000),
            rate: dec!(0.03),
            months: 1,
        })
        .unwrap();
        assert_eq!(result.result.difference, dec!(0));
    }
}
