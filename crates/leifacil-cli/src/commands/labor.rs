use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use leifacil_core::labor::fgts::{calculate_fgts, FgtsCorrection, FgtsInput};
use leifacil_core::labor::termination::{calculate_notice_period, NoticePeriodInput};

use crate::input;

/// Arguments for the notice period
#[derive(Args)]
pub struct NoticeArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly base salary
    #[arg(long)]
    pub salary: Option<Decimal>,

    /// Full years of service
    #[arg(long, default_value_t = 0)]
    pub years: u32,
}

/// Arguments for FGTS. Indexed correction is only available through --input.
#[derive(Args)]
pub struct FgtsArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly salaries, comma separated
    #[arg(long, value_delimiter = ',')]
    pub salaries: Vec<Decimal>,

    /// Dismissed without cause (adds the 40% penalty)
    #[arg(long)]
    pub without_cause: bool,

    /// Flat monthly correction rate
    #[arg(long, requires = "correction_months")]
    pub correction_rate: Option<Decimal>,

    /// Months of flat correction
    #[arg(long)]
    pub correction_months: Option<u32>,
}

pub fn run_notice_period(args: NoticeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let notice_input: NoticePeriodInput = match input::load(args.input.as_deref())? {
        Some(loaded) => loaded,
        None => NoticePeriodInput {
            base_salary: args.salary.ok_or("--salary is required (or provide --input)")?,
            years_of_service: args.years,
        },
    };
    let result = calculate_notice_period(&notice_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_fgts(args: FgtsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fgts_input: FgtsInput = match input::load(args.input.as_deref())? {
        Some(loaded) => loaded,
        None => {
            if args.salaries.is_empty() {
                return Err("--salaries is required (or provide --input)".into());
            }
            let correction = match (args.correction_rate, args.correction_months) {
                (Some(rate), Some(months)) => FgtsCorrection::Fixed { rate, months },
                _ => FgtsCorrection::None,
            };
            FgtsInput {
                monthly_salaries: args.salaries,
                dismissed_without_cause: args.without_cause,
                correction,
            }
        }
    };
    let result = calculate_fgts(&fgts_input)?;
    Ok(serde_json::to_value(result)?)
}
