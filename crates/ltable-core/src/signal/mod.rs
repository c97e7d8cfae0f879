// crates/ltable-core/src/signal/mod.rs

pub mod color;
pub mod timing;
