//! Monetary correction and interest primitives.
//!
//! Every calculator that grows a value over time goes through these: a flat
//! per-period rate compounded ([`compound_fixed`]), a month-by-month index
//! series ([`compound_indexed`]), or plain simple interest
//! ([`simple_interest`]).

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use serde::{Deserialize, Serialize};

use crate::calendar::{IndexTable, MonthKey};
use crate::error::LeiFacilError;
use crate::types::{Money, Months, Rate};
use crate::validate;
use crate::LeiFacilResult;

/// `(1 + rate)^periods`
pub fn growth_factor(rate: Rate, periods: Months) -> LeiFacilResult<Decimal> {
    validate::rate("rate", rate)?;
    Decimal::ONE
        .checked_add(rate)
        .and_then(|base| base.checked_powu(u64::from(periods)))
        .ok_or_else(|| LeiFacilError::Overflow {
            context: format!("growth factor (1 + {rate})^{periods}"),
        })
}

/// `(1 + rate)^years` for a fractional number of years, used when a yearly
/// rate is applied over `months / 12`.
pub fn fractional_growth_factor(rate: Rate, years: Decimal) -> LeiFacilResult<Decimal> {
    validate::rate("rate", rate)?;
    if years.is_zero() {
        return Ok(Decimal::ONE);
    }
    Decimal::ONE
        .checked_add(rate)
        .and_then(|base| base.checked_powd(years))
        .ok_or_else(|| LeiFacilError::Overflow {
            context: format!("growth factor (1 + {rate})^{years}"),
        })
}

/// `principal × (1 + rate)^periods`
pub fn compound_fixed(principal: Money, rate: Rate, periods: Months) -> LeiFacilResult<Money> {
    let factor = growth_factor(rate, periods)?;
    principal
        .checked_mul(factor)
        .ok_or_else(|| LeiFacilError::Overflow {
            context: "compound_fixed".into(),
        })
}

/// `principal × rate × periods`
pub fn simple_interest(principal: Money, rate: Rate, periods: Months) -> LeiFacilResult<Money> {
    principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(Decimal::from(periods)))
        .ok_or_else(|| LeiFacilError::Overflow {
            context: "simple_interest".into(),
        })
}

/// One month of an indexed correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFactor {
    pub month: MonthKey,
    pub rate: Rate,
    /// False when the month was missing from the table and the fallback applied.
    pub from_table: bool,
    pub cumulative_factor: Decimal,
}

/// Result of compounding a value through an index series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedGrowth {
    pub principal: Money,
    pub factor: Decimal,
    pub amount: Money,
    pub months: Vec<MonthlyFactor>,
    /// Months absent from the table, corrected at the fallback rate instead.
    pub fallback_months: Vec<MonthKey>,
}

impl IndexedGrowth {
    /// Warning text for the envelope when any month fell back.
    pub fn fallback_warning(&self, index_name: &str, fallback: Option<Rate>) -> Option<String> {
        let first = self.fallback_months.first()?;
        let rate = fallback.unwrap_or(Decimal::ZERO);
        Some(format!(
            "{index_name}: {} month(s) missing from the index table (first {first}); applied flat rate {rate}",
            self.fallback_months.len()
        ))
    }
}

/// Compound `principal` through `periods` months starting at `start`.
///
/// Each month multiplies the factor by `1 + table[month]`; a month missing
/// from the table uses `fallback` (0 when `None`). Missing data never fails.
pub fn compound_indexed(
    principal: Money,
    start: MonthKey,
    periods: Months,
    table: &IndexTable,
    fallback: Option<Rate>,
) -> LeiFacilResult<IndexedGrowth> {
    validate::periods("periods", periods)?;
    let fallback_rate = fallback.unwrap_or(Decimal::ZERO);
    validate::rate("fallback_rate", fallback_rate)?;

    let mut months = Vec::with_capacity(periods as usize);
    let mut fallback_months = Vec::new();

    let factor = start
        .range(periods)?
        .into_iter()
        .try_fold(Decimal::ONE, |acc, month| {
            let (rate, from_table) = match table.get(&month) {
                Some(rate) => (*rate, true),
                None => (fallback_rate, false),
            };
            validate::rate("index_table", rate)?;
            let next = Decimal::ONE
                .checked_add(rate)
                .and_then(|step| acc.checked_mul(step))
                .ok_or_else(|| LeiFacilError::Overflow {
                    context: format!("indexed correction at {month}"),
                })?;
            if !from_table {
                fallback_months.push(month);
            }
            months.push(MonthlyFactor {
                month,
                rate,
                from_table,
                cumulative_factor: next,
            });
            Ok::<_, LeiFacilError>(next)
        })?;

    let amount = principal
        .checked_mul(factor)
        .ok_or_else(|| LeiFacilError::Overflow {
            context: "compound_indexed".into(),
        })?;

    Ok(IndexedGrowth {
        principal,
        factor,
        amount,
        months,
        fallback_months,
    })
}
