// src/exports/csv.rs
//
// Flat delimited-text builder for the export endpoints. The whole document
// is assembled in memory; rows are serde_json values and columns are
// addressed by dotted paths.

use serde_json::Value;

/// Resolve a dotted path ("a.b.c") against a JSON value.
/// A missing step resolves to None.
pub fn resolve_path<'a>(row: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = row;
    for key in path.split('.') {
        current = current.get(key)?;
    }
    Some(current)
}

/// Render one cell. Missing values and explicit nulls become the empty
/// string; strings containing the delimiter or a quote are wrapped in
/// quotes with internal quotes doubled; other scalars render bare.
fn format_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => {
            if s.contains(',') || s.contains('"') {
                format!("\"{}\"", s.replace('"', "\"\""))
            } else {
                s.clone()
            }
        }
        Some(other) => other.to_string(),
    }
}

/// Build a CSV document: one header line, then one line per row with the
/// cells resolved by dotted-path lookup.
pub fn build_csv(rows: &[Value], headers: &[&str]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|header| format_cell(resolve_path(row, header)))
            .collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}
