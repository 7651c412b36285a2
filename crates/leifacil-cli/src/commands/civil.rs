use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use leifacil_core::civil::moratory_interest::{
    calculate_moratory_interest, InterestMode, MoratoryInterestInput,
};

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Simple,
    Compound,
}

/// Arguments for moratory interest. SELIC-indexed interest needs an index
/// table, so it is only available through --input.
#[derive(Args)]
pub struct MoratoryInterestArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Corrected value the interest accrues on
    #[arg(long)]
    pub value: Option<Decimal>,

    /// Monthly rate as a decimal (0.01 = 1%)
    #[arg(long, default_value = "0.01")]
    pub rate: Decimal,

    /// Months in arrears
    #[arg(long)]
    pub months: Option<u32>,

    /// Simple or compound interest
    #[arg(long, value_enum, default_value = "simple")]
    pub mode: ModeArg,
}

pub fn run_moratory_interest(args: MoratoryInterestArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let interest_input: MoratoryInterestInput = match input::load(args.input.as_deref())? {
        Some(loaded) => loaded,
        None => MoratoryInterestInput {
            corrected_value: args.value.ok_or("--value is required (or provide --input)")?,
            rate: args.rate,
            months: args.months.ok_or("--months is required (or provide --input)")?,
            mode: match args.mode {
                ModeArg::Simple => InterestMode::Simple,
                ModeArg::Compound => InterestMode::Compound,
            },
        },
    };
    let result = calculate_moratory_interest(&interest_input)?;
    Ok(serde_json::to_value(result)?)
}
