use serde_json::Value;

/// Key answer field of each calculator, checked in order.
const PRIORITY_KEYS: &[&str] = &[
    "final_amount",
    "final_value",
    "total",
    "refund",
    "award",
    "pension",
    "rmi",
    "eligible",
    "notice_pay",
    "installment",
    "difference",
    "total_corrected",
    "net_debt",
    "net_equity",
    "quota_per_heir",
    "total_months",
    "converted_months",
];

/// Print just the key answer value from the output.
///
/// Looks for well-known result fields in order of priority, then falls back
/// to the first field in the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    if let Value::Array(items) = result_obj {
        for item in items {
            println!("{}", format_minimal(item));
        }
        return;
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
