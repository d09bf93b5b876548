use crate::cli::OutputMode;
use serde::Serialize;

pub fn render_out<T: Serialize>(
    mode: OutputMode,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<String> {
    if mode.is_json() {
        return Ok(serde_json::to_string_pretty(data)?);
    }
    Ok(data.iter().map(row).collect::<Vec<_>>().join("\n"))
}

pub fn render_one<T: Serialize>(
    mode: OutputMode,
    data: &T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<String> {
    if mode.is_json() {
        return Ok(serde_json::to_string_pretty(data)?);
    }
    Ok(row(data))
}

pub fn print_out<T: Serialize>(
    mode: OutputMode,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    let text = render_out(mode, data, row)?;
    if !text.is_empty() {
        println!("{}", text);
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    mode: OutputMode,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    println!("{}", render_one(mode, &data, row)?);
    Ok(())
}
