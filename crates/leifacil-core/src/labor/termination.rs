//! Termination pay items: salary balance, notice period, vacation and the
//! proportional 13th salary. Each scales the monthly base salary by a
//! day or month fraction.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::checked;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::validate;
use crate::LeiFacilResult;

/// Commercial month used by labor courts for daily pay.
const DAYS_PER_MONTH: Decimal = dec!(30);
const MONTHS_PER_YEAR: Decimal = dec!(12);

const BASE_NOTICE_DAYS: u32 = 30;
const NOTICE_DAYS_PER_YEAR: u32 = 3;
const MAX_NOTICE_DAYS: u32 = 90;

/// Vacation pay multiplier: salary plus the constitutional one-third bonus.
fn with_vacation_bonus() -> Decimal {
    Decimal::ONE + Decimal::ONE / dec!(3)
}

// ---------------------------------------------------------------------------
// Salary balance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryBalanceInput {
    pub base_salary: Money,
    pub days_worked: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryBalanceOutput {
    pub base_salary: Money,
    pub days_worked: u32,
    pub daily_salary: Money,
    pub balance: Money,
}

/// Pay for the days worked in the month of termination.
pub fn calculate_salary_balance(
    input: &SalaryBalanceInput,
) -> LeiFacilResult<ComputationOutput<SalaryBalanceOutput>> {
    let start = Instant::now();
    validate::non_negative("base_salary", input.base_salary)?;
    validate::at_most("days_worked", input.days_worked, 31)?;

    let daily_salary = input.base_salary / DAYS_PER_MONTH;
    let balance = checked::mul(daily_salary, Decimal::from(input.days_worked), "salary balance")?;
    let output = SalaryBalanceOutput {
        base_salary: input.base_salary,
        days_worked: input.days_worked,
        daily_salary,
        balance,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Salary balance: base / 30 x days worked",
        &serde_json::json!({ "days_per_month": 30 }),
        Vec::new(),
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Notice period
// ---------------------------------------------------------------------------

/// Notice days: 30 plus 3 per full year of service, capped at 90.
pub fn notice_days(years_of_service: u32) -> u32 {
    BASE_NOTICE_DAYS
        .saturating_add(NOTICE_DAYS_PER_YEAR.saturating_mul(years_of_service))
        .min(MAX_NOTICE_DAYS)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticePeriodInput {
    pub base_salary: Money,
    pub years_of_service: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticePeriodOutput {
    pub base_salary: Money,
    pub years_of_service: u32,
    pub notice_days: u32,
    pub notice_pay: Money,
}

/// Indemnified notice period.
pub fn calculate_notice_period(
    input: &NoticePeriodInput,
) -> LeiFacilResult<ComputationOutput<NoticePeriodOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    validate::non_negative("base_salary", input.base_salary)?;

    let days = notice_days(input.years_of_service);
    if days == MAX_NOTICE_DAYS && input.years_of_service > 20 {
        warnings.push(format!(
            "{} years of service exceed the 20 that reach the {MAX_NOTICE_DAYS}-day cap",
            input.years_of_service
        ));
    }

    let output = NoticePeriodOutput {
        base_salary: input.base_salary,
        years_of_service: input.years_of_service,
        notice_days: days,
        notice_pay: checked::mul(
            input.base_salary / DAYS_PER_MONTH,
            Decimal::from(days),
            "notice pay",
        )?,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Notice period: min(30 + 3 x years, 90) days of pay",
        &serde_json::json!({
            "base_days": BASE_NOTICE_DAYS,
            "days_per_year": NOTICE_DAYS_PER_YEAR,
            "max_days": MAX_NOTICE_DAYS,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Vacation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationInput {
    pub base_salary: Money,
    /// Months of the current accrual period (0..=12).
    pub accrual_months: u32,
    /// A full vacation period is already overdue.
    pub has_overdue_period: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationOutput {
    pub base_salary: Money,
    pub accrual_months: u32,
    pub overdue_vacation: Money,
    pub proportional_vacation: Money,
    pub total_vacation: Money,
}

/// Overdue and proportional vacation, each with the one-third bonus.
pub fn calculate_vacation(input: &VacationInput) -> LeiFacilResult<ComputationOutput<VacationOutput>> {
    let start = Instant::now();
    validate::non_negative("base_salary", input.base_salary)?;
    validate::at_most("accrual_months", input.accrual_months, 12)?;

    let with_bonus = with_vacation_bonus();
    let overdue_vacation = if input.has_overdue_period {
        checked::mul(input.base_salary, with_bonus, "overdue vacation")?
    } else {
        Decimal::ZERO
    };
    let accrued = checked::mul(
        input.base_salary / MONTHS_PER_YEAR,
        Decimal::from(input.accrual_months),
        "proportional vacation",
    )?;
    let proportional_vacation = checked::mul(accrued, with_bonus, "proportional vacation")?;
    let total_vacation = checked::add(overdue_vacation, proportional_vacation, "total vacation")?;

    let output = VacationOutput {
        base_salary: input.base_salary,
        accrual_months: input.accrual_months,
        overdue_vacation,
        proportional_vacation,
        total_vacation,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Vacation: overdue period plus base / 12 per accrued month, both with the 1/3 bonus",
        &serde_json::json!({ "vacation_bonus": "1/3" }),
        Vec::new(),
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// 13th salary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThirteenthSalaryInput {
    pub base_salary: Money,
    pub months_worked_in_year: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThirteenthSalaryOutput {
    pub base_salary: Money,
    pub months_worked_in_year: u32,
    pub thirteenth_salary: Money,
}

pub fn calculate_thirteenth_salary(
    input: &ThirteenthSalaryInput,
) -> LeiFacilResult<ComputationOutput<ThirteenthSalaryOutput>> {
    let start = Instant::now();
    validate::non_negative("base_salary", input.base_salary)?;
    validate::at_most("months_worked_in_year", input.months_worked_in_year, 12)?;

    let output = ThirteenthSalaryOutput {
        base_salary: input.base_salary,
        months_worked_in_year: input.months_worked_in_year,
        thirteenth_salary: checked::mul(
            input.base_salary / MONTHS_PER_YEAR,
            Decimal::from(input.months_worked_in_year),
            "13th salary",
        )?,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Proportional 13th salary: base / 12 x months worked",
        &serde_json::json!({}),
        Vec::new(),
        elapsed,
        output,
    ))
}
