// crates/ltable-cli/src/io/mod.rs

pub mod config_file;
pub mod json;
pub mod value;
