use clap::{Args, ValueEnum};
use serde_json::Value;

use leifacil_core::other::moral_damages::{
    calculate_moral_damages, DamageType, MoralDamagesInput, Severity,
};

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DamageArg {
    Offense,
    Accident,
    MedicalError,
    WrongfulCreditListing,
}

impl From<DamageArg> for DamageType {
    fn from(arg: DamageArg) -> Self {
        match arg {
            DamageArg::Offense => DamageType::Offense,
            DamageArg::Accident => DamageType::Accident,
            DamageArg::MedicalError => DamageType::MedicalError,
            DamageArg::WrongfulCreditListing => DamageType::WrongfulCreditListing,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SeverityArg {
    Mild,
    Medium,
    Severe,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Mild => Severity::Mild,
            SeverityArg::Medium => Severity::Medium,
            SeverityArg::Severe => Severity::Severe,
        }
    }
}

/// Arguments for moral damages
#[derive(Args)]
pub struct MoralDamagesArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Damage category
    #[arg(long, value_enum)]
    pub damage: Option<DamageArg>,

    /// Severity of the harm
    #[arg(long, value_enum, default_value = "mild")]
    pub severity: SeverityArg,
}

pub fn run_moral_damages(args: MoralDamagesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let damages_input: MoralDamagesInput = match input::load(args.input.as_deref())? {
        Some(loaded) => loaded,
        None => MoralDamagesInput {
            damage_type: args
                .damage
                .ok_or("--damage is required (or provide --input)")?
                .into(),
            severity: args.severity.into(),
        },
    };
    let result = calculate_moral_damages(&damages_input)?;
    Ok(serde_json::to_value(result)?)
}
