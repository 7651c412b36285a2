//! Moral damages estimate from a damage category and its severity.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Money};
use crate::LeiFacilResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageType {
    Offense,
    Accident,
    MedicalError,
    WrongfulCreditListing,
}

impl DamageType {
    /// Reference award for the category.
    pub fn base_amount(self) -> Money {
        match self {
            DamageType::Offense => dec!(5000),
            DamageType::Accident => dec!(10000),
            DamageType::MedicalError => dec!(15000),
            DamageType::WrongfulCreditListing => dec!(8000),
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DamageType::Offense => "offense",
            DamageType::Accident => "accident",
            DamageType::MedicalError => "medical_error",
            DamageType::WrongfulCreditListing => "wrongful_credit_listing",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Medium,
    Severe,
}

impl Severity {
    pub fn multiplier(self) -> Decimal {
        match self {
            Severity::Mild => dec!(1),
            Severity::Medium => dec!(2),
            Severity::Severe => dec!(3),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Mild => "mild",
            Severity::Medium => "medium",
            Severity::Severe => "severe",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoralDamagesInput {
    pub damage_type: DamageType,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoralDamagesOutput {
    pub base_amount: Money,
    pub multiplier: Decimal,
    pub award: Money,
}

pub fn calculate_moral_damages(
    input: &MoralDamagesInput,
) -> LeiFacilResult<ComputationOutput<MoralDamagesOutput>> {
    let start = Instant::now();

    let base_amount = input.damage_type.base_amount();
    let multiplier = input.severity.multiplier();

    let output = MoralDamagesOutput {
        base_amount,
        multiplier,
        award: base_amount * multiplier,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Moral damages: category base amount x severity multiplier",
        &serde_json::json!({
            "damage_type": input.damage_type.to_string(),
            "severity": input.severity.to_string(),
        }),
        Vec::new(),
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medical_error_severe() {
        let result = calculate_moral_damages(&MoralDamagesInput {
            damage_type: DamageType::MedicalError,
            severity: Severity::Severe,
        })
        .unwrap();
        assert_eq!(result.result.award, dec!(45000));
    }

    #[test]
    fn test_offense_mild_is_base() {
        let result = calculate_moral_damages(&MoralDamagesInput {
            damage_type: DamageType::Offense,
            severity: Severity::Mild,
        })
        .unwrap();
        assert_eq!(result.result.award, dec!(5000));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let parsed: Result<MoralDamagesInput, _> = serde_json::from_value(serde_json::json!({
            "damage_type": "Defamation",
            "severity": "Mild",
        }));
        assert!(parsed.is_err());
    }
}
