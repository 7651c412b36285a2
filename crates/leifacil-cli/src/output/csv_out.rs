use serde_json::Value;
use std::io::{self, Write};

use super::{cell, headers, split_sections};

/// Write output as CSV to stdout.
///
/// The summary comes first as `field,value` records. Each schedule or
/// breakdown follows after a blank line, introduced by a one-cell record
/// naming it, then its own header row. Records differ in width, so the
/// writer is flexible.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(stdout.lock());

    let result = match value {
        Value::Object(map) => map.get("result").unwrap_or(value),
        _ => value,
    };

    let _ = match result {
        Value::Object(map) => write_sections(&mut wtr, map),
        Value::Array(rows) => write_rows(&mut wtr, rows),
        other => wtr.write_record([cell(other, "")]),
    };

    let _ = wtr.flush();
}

fn write_sections<W: Write>(
    wtr: &mut csv::Writer<W>,
    map: &serde_json::Map<String, Value>,
) -> csv::Result<()> {
    let sections = split_sections(map);
    wtr.write_record(["field", "value"])?;
    for (name, val) in sections.fields {
        wtr.write_record([name, cell(val, "")])?;
    }
    for (name, rows) in sections.tables {
        wtr.write_record([""])?;
        wtr.write_record([name])?;
        write_rows(wtr, rows)?;
    }
    Ok(())
}

fn write_rows<W: Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> csv::Result<()> {
    let columns = headers(rows);
    if columns.is_empty() {
        for item in rows {
            wtr.write_record([cell(item, "")])?;
        }
        return Ok(());
    }

    wtr.write_record(&columns)?;
    for map in rows.iter().filter_map(Value::as_object) {
        wtr.write_record(
            columns
                .iter()
                .map(|h| map.get(h).map(|v| cell(v, "")).unwrap_or_default()),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(result: &Value) -> String {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(Vec::new());
        match result {
            Value::Object(map) => write_sections(&mut wtr, map).unwrap(),
            Value::Array(rows) => write_rows(&mut wtr, rows).unwrap(),
            _ => unreachable!(),
        }
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_schedule_becomes_its_own_block() {
        let out = render(&json!({
            "grand_total": "3061.0",
            "monthly": [
                { "month": 1, "total": "1020.1" },
                { "month": 2, "total": "2040.9" },
            ],
        }));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[..2], ["field,value", "grand_total,3061.0"]);
        assert_eq!(lines[3..], ["monthly", "month,total", "1,1020.1", "2,2040.9"]);
        assert!(!out.contains('{'));
    }

    #[test]
    fn test_array_result_is_one_table() {
        let out = render(&json!([{ "id": "fgts" }, { "id": "rmi" }]));
        assert_eq!(out, "id\nfgts\nrmi\n");
    }
}
