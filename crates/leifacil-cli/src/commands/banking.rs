use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use leifacil_core::banking::price_sac::{compare_price_sac, PriceSacInput};

use crate::input;

/// Arguments for the Price vs SAC comparison
#[derive(Args)]
pub struct PriceSacArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Financed amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Monthly rate as a decimal
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Number of monthly installments
    #[arg(long)]
    pub periods: Option<u32>,

    /// Include both full schedules
    #[arg(long)]
    pub schedules: bool,
}

pub fn run_price_sac(args: PriceSacArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan: PriceSacInput = match input::load(args.input.as_deref())? {
        Some(loaded) => loaded,
        None => PriceSacInput {
            principal: args.principal.ok_or("--principal is required (or provide --input)")?,
            rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            periods: args.periods.ok_or("--periods is required (or provide --input)")?,
            include_schedules: args.schedules,
        },
    };
    let result = compare_price_sac(&loan)?;
    Ok(serde_json::to_value(result)?)
}
