// crates/ltable-cli/src/io/config_file.rs

use anyhow::{Context, Result};
use ltable_core::ShowConfig;

/// Load a JSON show config; omitted keys keep their defaults.
pub fn load_config(path: &str) -> Result<ShowConfig> {
    let cfg = ShowConfig::from_path(path).with_context(|| format!("load show config {path}"))?;
    Ok(cfg)
}
