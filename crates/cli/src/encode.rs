//! `tensornote encode` command implementation

use anyhow::Result;
use tensornote::{encode_tensor_notation, TensorEntry};
use tracing::debug;

use crate::input::parse_input_arg;

/// Parse each `NAME:DIMS:VALUES` arg and print the canonical notation.
pub fn run(args: &[&str]) -> Result<()> {
    let entries = args
        .iter()
        .map(|arg| parse_input_arg(arg).map(|input| input.to_entry()))
        .collect::<Result<Vec<TensorEntry>>>()?;
    debug!(inputs = entries.len(), "encoding tensor notation");

    println!("{}", encode_tensor_notation(&entries));
    Ok(())
}
