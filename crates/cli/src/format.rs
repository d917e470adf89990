//! Output formatting for `tensornote inspect`.
//!
//! Entries whose payloads are not valid `i64` dims and `f32` values are
//! still listed, with the decode error in place of the shape.

use serde_json::{json, Value};
use tensornote::{TensorEntry, TensorInput};

/// How results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Aligned table for terminals
    Human,
    /// One JSON document
    Json,
}

/// Render parsed entries in the requested mode.
pub fn format_entries(entries: &[TensorEntry], mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format_table(entries),
        OutputMode::Json => format_json(entries).to_string(),
    }
}

fn format_table(entries: &[TensorEntry]) -> String {
    if entries.is_empty() {
        return "(no inputs)".to_string();
    }

    let rows: Vec<(String, String, String)> = entries
        .iter()
        .map(|entry| match TensorInput::from_entry(entry) {
            Ok(input) => (
                entry.name.clone(),
                format!("{:?}", input.shape.as_slice()),
                input.numel().to_string(),
            ),
            Err(e) => (entry.name.clone(), "?".to_string(), format!("({})", e)),
        })
        .collect();

    let name_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).max(4);
    let shape_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0).max(5);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!(
        "{:<nw$}  {:<sw$}  {}",
        "NAME",
        "SHAPE",
        "VALUES",
        nw = name_width,
        sw = shape_width
    ));
    for (name, shape, count) in &rows {
        lines.push(format!(
            "{:<nw$}  {:<sw$}  {}",
            name,
            shape,
            count,
            nw = name_width,
            sw = shape_width
        ));
    }
    lines.join("\n")
}

fn format_json(entries: &[TensorEntry]) -> Value {
    let inputs: Vec<Value> = entries
        .iter()
        .map(|entry| match TensorInput::from_entry(entry) {
            Ok(input) => json!({
                "name": input.name,
                "shape": input.shape.as_slice(),
                "values": input.values,
            }),
            Err(e) => json!({
                "name": entry.name,
                "dimension_bytes": entry.dimensions.len(),
                "value_bytes": entry.values.len(),
                "error": e.to_string(),
            }),
        })
        .collect();

    json!({ "count": entries.len(), "inputs": inputs })
}
