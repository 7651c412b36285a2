use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{cell, headers, split_sections};

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(result) => print_envelope(result, map),
            None => print_fields(map.iter().map(|(k, v)| (k.clone(), v))),
        },
        Value::Array(rows) => print_rows(rows),
        _ => println!("{}", value),
    }
}

fn print_envelope(result: &Value, envelope: &Map<String, Value>) {
    match result {
        Value::Object(res_map) => {
            let sections = split_sections(res_map);
            print_fields(sections.fields.into_iter());
            for (name, rows) in sections.tables {
                println!("\n{}:", name);
                print_rows(rows);
            }
        }
        Value::Array(rows) => print_rows(rows),
        other => println!("{}", cell(other, "null")),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_fields<'a>(fields: impl Iterator<Item = (String, &'a Value)>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (name, val) in fields {
        builder.push_record([name, cell(val, "null")]);
    }
    println!("{}", Table::from(builder));
}

fn print_rows(rows: &[Value]) {
    if rows.is_empty() {
        println!("(empty)");
        return;
    }

    let columns = headers(rows);
    if columns.is_empty() {
        for item in rows {
            println!("{}", cell(item, "null"));
        }
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(&columns);
    for map in rows.iter().filter_map(Value::as_object) {
        builder.push_record(
            columns
                .iter()
                .map(|h| map.get(h).map(|v| cell(v, "null")).unwrap_or_default()),
        );
    }
    println!("{}", Table::from(builder));
}
