// crates/ltable-cli/src/io/json.rs

use std::io::Write;

use anyhow::Context;
use ltable_core::show::render::{write_json, RenderMode};
use ltable_core::Show;

pub fn write_show_stdout(show: &Show, mode: RenderMode, pretty: bool) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_json(&mut lock, show, mode, pretty).context("write show json to stdout")?;
    lock.flush()?;
    Ok(())
}

pub fn write_value_stdout(v: &serde_json::Value) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    serde_json::to_writer_pretty(&mut lock, v).context("write json to stdout")?;
    writeln!(lock)?;
    Ok(())
}
