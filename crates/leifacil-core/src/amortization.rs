//! Loan amortization schedules: Price (French system, constant installment)
//! and SAC (Sistema de Amortização Constante, constant principal).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::checked;
use crate::correction::growth_factor;
use crate::error::LeiFacilError;
use crate::types::{Money, Months, Rate};
use crate::validate;
use crate::LeiFacilResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmortizationSystem {
    Price,
    Sac,
}

/// A single period of a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    /// 1-indexed.
    pub period: u32,
    pub opening_balance: Money,
    pub amortization: Money,
    pub interest: Money,
    pub installment: Money,
    pub ending_balance: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub system: AmortizationSystem,
    pub principal: Money,
    pub rate: Rate,
    pub periods: Months,
    pub installments: Vec<Installment>,
    pub total_paid: Money,
    pub total_interest: Money,
}

fn validate_loan(principal: Money, rate: Rate, periods: Months) -> LeiFacilResult<()> {
    validate::non_negative("principal", principal)?;
    validate::rate("rate", rate)?;
    if periods == 0 {
        return Err(LeiFacilError::invalid("periods", "Number of periods must be > 0"));
    }
    validate::periods("periods", periods)
}

/// Price installment: `P × r(1+r)^n / ((1+r)^n − 1)`, or `P / n` at zero rate.
pub fn price_installment(principal: Money, rate: Rate, periods: Months) -> LeiFacilResult<Money> {
    validate_loan(principal, rate, periods)?;

    if rate.is_zero() {
        return Ok(principal / Decimal::from(periods));
    }

    let factor = growth_factor(rate, periods)?;
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        // (1+r)^n rounded to exactly 1: the rate is too small to matter.
        return Ok(principal / Decimal::from(periods));
    }

    let per_unit = if factor > Decimal::ONE {
        // r / (1 − (1+r)^-n) stays bounded by r even when (1+r)^n alone is
        // near the top of the Decimal range.
        let discounted = checked::div(denominator, factor, "Price installment")?;
        checked::div(rate, discounted, "Price installment")?
    } else {
        let numerator = checked::mul(rate, factor, "Price installment")?;
        checked::div(numerator, denominator, "Price installment")?
    };
    checked::mul(principal, per_unit, "Price installment")
}

/// Full Price schedule. The installment is constant; the final period
/// amortizes the remaining balance so the schedule closes at exactly zero.
pub fn price_schedule(principal: Money, rate: Rate, periods: Months) -> LeiFacilResult<Schedule> {
    let installment = price_installment(principal, rate, periods)?;

    let mut balance = principal;
    let mut rows = Vec::with_capacity(periods as usize);

    for period in 1..=periods {
        let opening = balance;
        let interest = checked::mul(opening, rate, "Price schedule interest")?;
        let amortization = if period == periods {
            opening
        } else {
            checked::sub(installment, interest, "Price schedule amortization")?
        };
        balance = checked::sub(opening, amortization, "Price schedule balance")?;
        rows.push(Installment {
            period,
            opening_balance: opening,
            amortization,
            interest,
            installment,
            ending_balance: balance,
        });
    }

    finish(AmortizationSystem::Price, principal, rate, periods, rows)
}

/// Full SAC schedule: amortization `P / n` every period, interest on the
/// opening balance, installments falling by `amortization × r` each period.
pub fn sac_schedule(principal: Money, rate: Rate, periods: Months) -> LeiFacilResult<Schedule> {
    validate_loan(principal, rate, periods)?;

    let fixed_amortization = principal / Decimal::from(periods);
    let mut balance = principal;
    let mut rows = Vec::with_capacity(periods as usize);

    for period in 1..=periods {
        let opening = balance;
        let interest = checked::mul(opening, rate, "SAC schedule interest")?;
        // Absorb the division residue so the last balance is exactly zero.
        let amortization = if period == periods {
            opening
        } else {
            fixed_amortization
        };
        balance = opening - amortization;
        rows.push(Installment {
            period,
            opening_balance: opening,
            amortization,
            interest,
            installment: checked::add(amortization, interest, "SAC installment")?,
            ending_balance: balance,
        });
    }

    finish(AmortizationSystem::Sac, principal, rate, periods, rows)
}

fn finish(
    system: AmortizationSystem,
    principal: Money,
    rate: Rate,
    periods: Months,
    installments: Vec<Installment>,
) -> LeiFacilResult<Schedule> {
    let total_paid = checked::sum(installments.iter().map(|i| i.installment), "total paid")?;
    let total_interest = checked::sum(installments.iter().map(|i| i.interest), "total interest")?;
    Ok(Schedule {
        system,
        principal,
        rate,
        periods,
        installments,
        total_paid,
        total_interest,
    })
}
