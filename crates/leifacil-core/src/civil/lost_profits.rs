use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::calendar::{months_between, IndexTable, MonthKey};
use crate::checked;
use crate::correction::compound_indexed;
use crate::error::LeiFacilError;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::validate;
use crate::LeiFacilResult;

/// Profits a business lost while it was stopped, from its historical
/// revenue and expenses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LostProfitsInput {
    pub total_revenue: Money,
    pub total_expenses: Money,
    /// Days of operation the revenue and expense totals cover.
    pub operating_days: u32,
    pub stopped_days: u32,
    pub initial_date: NaiveDate,
    pub final_date: NaiveDate,
    pub ipca: IndexTable,
    pub selic: IndexTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LostProfitsOutput {
    pub daily_revenue: Money,
    pub daily_expenses: Money,
    pub daily_profit: Money,
    pub gross_lost_profit: Money,
    pub ipca_factor: Decimal,
    pub corrected_lost_profit: Money,
    pub selic_factor: Decimal,
    pub final_lost_profit: Money,
    pub months: u32,
}

pub fn calculate_lost_profits(
    input: &LostProfitsInput,
) -> LeiFacilResult<ComputationOutput<LostProfitsOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate::non_negative("total_revenue", input.total_revenue)?;
    validate::non_negative("total_expenses", input.total_expenses)?;
    if input.operating_days == 0 {
        return Err(LeiFacilError::invalid("operating_days", "Must be at least 1 day"));
    }
    if input.final_date < input.initial_date {
        return Err(LeiFacilError::invalid(
            "final_date",
            "Final date cannot precede the initial date",
        ));
    }

    let days = Decimal::from(input.operating_days);
    let daily_revenue = input.total_revenue / days;
    let daily_expenses = input.total_expenses / days;
    let daily_profit = daily_revenue - daily_expenses;
    let gross = checked::mul(daily_profit, Decimal::from(input.stopped_days), "gross lost profit")?;

    if daily_profit < Decimal::ZERO {
        warnings.push("Business was operating at a loss; lost profit is negative".into());
    }

    let months = months_between(input.initial_date, input.final_date)?;
    let first = MonthKey::from_date(input.initial_date);

    // Both indices run over the same window, from the initial date.
    let ipca = compound_indexed(gross, first, months, &input.ipca, None)?;
    let selic = compound_indexed(ipca.amount, first, months, &input.selic, None)?;
    warnings.extend(ipca.fallback_warning("IPCA", None));
    warnings.extend(selic.fallback_warning("SELIC", None));

    let output = LostProfitsOutput {
        daily_revenue,
        daily_expenses,
        daily_profit,
        gross_lost_profit: gross,
        ipca_factor: ipca.factor,
        corrected_lost_profit: ipca.amount,
        selic_factor: selic.factor,
        final_lost_profit: selic.amount,
        months,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Lost profits: average daily profit x stopped days, corrected by IPCA then SELIC",
        &serde_json::json!({
            "operating_days": input.operating_days,
            "stopped_days": input.stopped_days,
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

    fn basic_input() -> LostProfitsInput {
        LostProfitsInput {
            total_revenue: dec!(300000),
            total_expenses: dec!(180000),
            operating_days: 300,
            stopped_days: 20,
            initial_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            final_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            ipca: [("2024-01".parse().unwrap(), dec!(0.005))].into_iter().collect(),
            selic: IndexTable::new(),
        }
    }

    #[test]
    fn test_daily_profit_and_gross() {
        let result = calculate_lost_profits(&basic_input()).unwrap();
        let r = &result.result;
        assert_eq!(r.daily_revenue, dec!(1000));
        assert_eq!(r.daily_expenses, dec!(600));
        assert_eq!(r.daily_profit, dec!(400));
        assert_eq!(r.gross_lost_profit, dec!(8000));
        assert_eq!(r.months, 2);
        assert_eq!(r.corrected_lost_profit, dec!(8040));
        assert_eq!(r.final_lost_profit, dec!(8040));
    }

    #[test]
    fn test_zero_operating_days_rejected() {
        let mut input = basic_input();
        input.operating_days = 0;
        assert!(calculate_lost_profits(&input).is_err());
    }
}
