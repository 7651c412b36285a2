use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use leifacil_core::family::alimony::{calculate_alimony, AlimonyInput};

use crate::input;

/// Arguments for child support
#[derive(Args)]
pub struct AlimonyArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Payer's net monthly income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Number of children
    #[arg(long, default_value_t = 1)]
    pub children: u32,

    /// Court-set rate of net income; replaces the usual bracket
    #[arg(long)]
    pub rate: Option<Decimal>,
}

pub fn run_alimony(args: AlimonyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let alimony_input: AlimonyInput = match input::load(args.input.as_deref())? {
        Some(loaded) => loaded,
        None => AlimonyInput {
            net_income: args.income.ok_or("--income is required (or provide --input)")?,
            children: args.children,
            rate: args.rate,
        },
    };
    let result = calculate_alimony(&alimony_input)?;
    Ok(serde_json::to_value(result)?)
}
