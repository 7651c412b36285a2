pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// A calculator result laid out for tabular output.
///
/// Scalar fields become `field, value` rows. Every array of objects (a
/// schedule, a monthly breakdown) becomes its own section. Nested objects
/// such as the optional Price and SAC schedules are flattened with dotted
/// names, so `price_schedule.installments` is a section and
/// `price_schedule.total_paid` a field.
pub(crate) struct Sections<'a> {
    pub fields: Vec<(String, &'a Value)>,
    pub tables: Vec<(String, &'a [Value])>,
}

pub(crate) fn split_sections(result: &Map<String, Value>) -> Sections<'_> {
    let mut sections = Sections {
        fields: Vec::new(),
        tables: Vec::new(),
    };
    collect(result, "", &mut sections);
    sections
}

fn collect<'a>(map: &'a Map<String, Value>, prefix: &str, out: &mut Sections<'a>) {
    for (key, val) in map {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Array(rows) if rows.first().is_some_and(Value::is_object) => {
                out.tables.push((name, rows));
            }
            Value::Object(inner) => collect(inner, &name, out),
            _ => out.fields.push((name, val)),
        }
    }
}

/// Column headers for a section: keys of the first row.
pub(crate) fn headers(rows: &[Value]) -> Vec<String> {
    match rows.first() {
        Some(Value::Object(first)) => first.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

/// Plain-text cell. Scalar arrays (fallback months, monthly differences)
/// are joined with commas.
pub(crate) fn cell(value: &Value, null: &str) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => null.to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(|v| cell(v, null))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schedules_split_into_sections() {
        let result = json!({
            "price_installment": "888.49",
            "fallback_months": ["2024-02", "2024-03"],
            "price_schedule": {
                "total_paid": "10661.85",
                "installments": [{ "period": 1, "interest": "100" }],
            },
            "monthly": [{ "month": 1, "total": "1020.1" }],
        });
        let Value::Object(map) = &result else { unreachable!() };
        let sections = split_sections(map);

        let mut fields: Vec<&str> = sections.fields.iter().map(|(k, _)| k.as_str()).collect();
        fields.sort_unstable();
        assert_eq!(fields, vec!["fallback_months", "price_installment", "price_schedule.total_paid"]);
        let mut tables: Vec<&str> = sections.tables.iter().map(|(k, _)| k.as_str()).collect();
        tables.sort_unstable();
        assert_eq!(tables, vec!["monthly", "price_schedule.installments"]);

        let (_, monthly) = sections.tables.iter().find(|(k, _)| k == "monthly").unwrap();
        let mut columns = headers(monthly);
        columns.sort_unstable();
        assert_eq!(columns, vec!["month", "total"]);
    }

    #[test]
    fn test_scalar_arrays_join_into_one_cell() {
        assert_eq!(cell(&json!(["2024-02", "2024-03"]), ""), "2024-02, 2024-03");
        assert_eq!(cell(&Value::Null, "null"), "null");
    }
}
