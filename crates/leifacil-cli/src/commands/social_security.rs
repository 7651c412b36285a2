use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use leifacil_core::social_security::retirement::{simulate_retirement, RetirementInput, Sex};

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SexArg {
    M,
    F,
}

/// Arguments for the retirement simulation
#[derive(Args)]
pub struct RetirementArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Age in years
    #[arg(long)]
    pub age: Option<Decimal>,

    /// Months of contribution
    #[arg(long)]
    pub months: Option<u32>,

    /// Points (age + contribution years); derived when omitted
    #[arg(long)]
    pub points: Option<Decimal>,

    /// Sex, which selects the thresholds
    #[arg(long, value_enum)]
    pub sex: Option<SexArg>,

    /// Intended retirement date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

pub fn run_retirement(args: RetirementArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let retirement_input: RetirementInput = match input::load(args.input.as_deref())? {
        Some(loaded) => loaded,
        None => RetirementInput {
            age: args.age.ok_or("--age is required (or provide --input)")?,
            contribution_months: args.months.ok_or("--months is required (or provide --input)")?,
            points: args.points,
            sex: match args.sex.ok_or("--sex is required (or provide --input)")? {
                SexArg::M => Sex::Male,
                SexArg::F => Sex::Female,
            },
            retirement_date: args.date.unwrap_or_else(|| Local::now().date_naive()),
        },
    };
    let result = simulate_retirement(&retirement_input)?;
    Ok(serde_json::to_value(result)?)
}
