//! `tensornote inspect` command implementation

use anyhow::{Context, Result};
use std::fs::File;
use tensornote::{Document, TensorNote};
use tracing::debug;

use crate::format::{format_entries, OutputMode};

/// Read notation from `path` (stdin for `None` or `-`) and print its inputs.
pub fn run(path: Option<&str>, strict: bool, mode: OutputMode) -> Result<()> {
    let reader = TensorNote::builder().reject_trailing_content(strict).build();
    let doc = read_document(&reader, path)?;
    debug!(source = path.unwrap_or("-"), tensors = doc.len(), "inspected notation");

    println!("{}", format_entries(doc.entries(), mode));
    Ok(())
}

fn read_document(reader: &TensorNote, path: Option<&str>) -> Result<Document> {
    let doc = match path {
        None | Some("-") => reader.parse_reader(std::io::stdin().lock())?,
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to read {}", path))?;
            reader.parse_reader(file)?
        }
    };
    Ok(doc)
}
