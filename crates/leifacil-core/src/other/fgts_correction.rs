use serde::{Deserialize, Serialize};

use crate::labor::fgts::{calculate_fgts, FgtsCorrection, FgtsInput, FgtsOutput};
use crate::types::{ComputationOutput, Money};
use crate::LeiFacilResult;

/// FGTS balance revision, outside a termination: no dismissal penalty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FgtsCorrectionInput {
    pub monthly_salaries: Vec<Money>,
    #[serde(default)]
    pub correction: FgtsCorrection,
}

pub fn correct_fgts(
    input: &FgtsCorrectionInput,
) -> LeiFacilResult<ComputationOutput<FgtsOutput>> {
    let mut output = calculate_fgts(&FgtsInput {
        monthly_salaries: input.monthly_salaries.clone(),
        dismissed_without_cause: false,
        correction: input.correction.clone(),
    })?;
    output.methodology = "FGTS correction: 8% of each salary with optional correction".into();
    Ok(output)
}
