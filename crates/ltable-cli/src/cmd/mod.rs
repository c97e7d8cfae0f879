// crates/ltable-cli/src/cmd/mod.rs

pub mod args;
pub mod encode;
pub mod gen;
pub mod inspect;
pub mod palette;
