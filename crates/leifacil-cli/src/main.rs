mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde_json::Value;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::banking::PriceSacArgs;
use commands::catalog::{BatchArgs, CalcArgs, ListArgs};
use commands::civil::MoratoryInterestArgs;
use commands::family::AlimonyArgs;
use commands::labor::{FgtsArgs, NoticeArgs};
use commands::other::MoralDamagesArgs;
use commands::social_security::RetirementArgs;

/// Brazilian legal and financial calculations
#[derive(Parser)]
#[command(
    name = "leifacil",
    version,
    about = "Brazilian legal and financial calculations",
    long_about = "Decimal-precise calculators for civil, labor, social security, tax, \
                  banking and family law: debt updates, severance, FGTS, retirement \
                  rules, Price/SAC schedules, child support and more."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log dispatch details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every calculator with its id and area
    List(ListArgs),
    /// Run any calculator by id with a JSON input (file or stdin)
    Calc(CalcArgs),
    /// Run a JSON array of {calculator, input} requests in parallel
    Batch(BatchArgs),
    /// Moratory interest on a corrected amount
    JurosMora(MoratoryInterestArgs),
    /// Compare the Price and SAC amortization systems
    PriceSac(PriceSacArgs),
    /// Child support from net income and number of children
    Pensao(AlimonyArgs),
    /// Indemnified notice period
    AvisoPrevio(NoticeArgs),
    /// FGTS balance and the 40% dismissal penalty
    Fgts(FgtsArgs),
    /// Moral damages by category and severity
    DanosMorais(MoralDamagesArgs),
    /// Retirement eligibility under the 2019 reform rules
    Aposentadoria(RetirementArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("leifacil=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("leifacil=warn"))
    };

    // stdout carries the result; logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Surface envelope warnings in the log as well as in the output.
fn log_warnings(value: &Value) {
    if let Some(Value::Array(warnings)) = value.get("warnings") {
        for w in warnings.iter().filter_map(Value::as_str) {
            tracing::warn!("{}", w);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::List(args) => commands::catalog::run_list(args),
        Commands::Calc(args) => commands::catalog::run_calc(args),
        Commands::Batch(args) => commands::catalog::run_batch(args),
        Commands::JurosMora(args) => commands::civil::run_moratory_interest(args),
        Commands::PriceSac(args) => commands::banking::run_price_sac(args),
        Commands::Pensao(args) => commands::family::run_alimony(args),
        Commands::AvisoPrevio(args) => commands::labor::run_notice_period(args),
        Commands::Fgts(args) => commands::labor::run_fgts(args),
        Commands::DanosMorais(args) => commands::other::run_moral_damages(args),
        Commands::Aposentadoria(args) => commands::social_security::run_retirement(args),
        Commands::Version => {
            println!("leifacil {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            log_warnings(&value);
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "calculation failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
