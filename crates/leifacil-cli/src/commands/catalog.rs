use clap::Args;
use serde_json::{json, Value};

use leifacil_core::registry::{self, BatchRequest};

use crate::input;

/// Arguments for listing the calculator catalogue
#[derive(Args)]
pub struct ListArgs {
    /// Only calculators of this area (civel, trabalhista, previdenciaria,
    /// tributaria, bancaria, familia, outros)
    #[arg(long)]
    pub area: Option<String>,
}

/// Arguments for running a calculator by id
#[derive(Args)]
pub struct CalcArgs {
    /// Calculator id, as printed by `leifacil list`
    pub id: String,

    /// Path to JSON input file (otherwise read from stdin)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for a batch of calculator requests
#[derive(Args)]
pub struct BatchArgs {
    /// Path to a JSON array of {"calculator": id, "input": {...}}
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_list(args: ListArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let entries: Vec<Value> = registry::catalog()
        .into_iter()
        .filter(|e| args.area.as_deref().map_or(true, |area| e.area.id() == area))
        .map(|e| {
            json!({
                "id": e.id.id(),
                "area": e.area.id(),
                "name": e.name,
            })
        })
        .collect();

    if entries.is_empty() {
        return Err(format!(
            "No calculators for area '{}'",
            args.area.unwrap_or_default()
        )
        .into());
    }

    Ok(json!({ "result": entries }))
}

pub fn run_calc(args: CalcArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let data: Value = input::load(args.input.as_deref())?
        .ok_or("--input is required (or pipe JSON on stdin)")?;

    tracing::debug!(calculator = %args.id, "dispatching");
    Ok(registry::calculate(&args.id, data)?)
}

pub fn run_batch(args: BatchArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let requests: Vec<BatchRequest> = input::load(args.input.as_deref())?
        .ok_or("--input is required (or pipe JSON on stdin)")?;

    let ids: Vec<String> = requests.iter().map(|r| r.calculator.clone()).collect();
    tracing::debug!(requests = ids.len(), "dispatching batch");

    let rows: Vec<Value> = ids
        .into_iter()
        .zip(registry::calculate_batch(requests))
        .map(|(calculator, outcome)| match outcome {
            Ok(output) => json!({
                "calculator": calculator,
                "ok": true,
                "output": output,
            }),
            Err(e) => {
                tracing::warn!(%calculator, error = %e, "batch request failed");
                json!({
                    "calculator": calculator,
                    "ok": false,
                    "error": e.to_string(),
                })
            }
        })
        .collect();

    Ok(json!({ "result": rows }))
}
