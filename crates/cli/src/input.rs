//! `NAME:DIMS:VALUES` argument parsing for `tensornote encode`.

use anyhow::{bail, Context, Result};
use tensornote::TensorInput;

/// Parse one `--input` argument into a typed tensor.
///
/// Dims and values are comma lists; either may be empty. The name is
/// everything before the last two colons, so it may contain ':' itself.
pub fn parse_input_arg(arg: &str) -> Result<TensorInput> {
    let mut parts = arg.rsplitn(3, ':');
    let values = parts.next().unwrap_or_default();
    let (dims, name) = match (parts.next(), parts.next()) {
        (Some(dims), Some(name)) => (dims, name),
        _ => bail!("expected NAME:DIMS:VALUES, got '{}'", arg),
    };

    let shape: Vec<i64> = parse_list(dims).with_context(|| format!("bad dims in '{}'", arg))?;
    let values: Vec<f32> =
        parse_list(values).with_context(|| format!("bad values in '{}'", arg))?;

    Ok(TensorInput::new(name, &shape, values)?)
}

fn parse_list<T>(list: &str) -> Result<Vec<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }
    list.split(',')
        .map(|item| {
            let item = item.trim();
            item.parse::<T>()
                .with_context(|| format!("cannot parse '{}'", item))
        })
        .collect()
}
