// crates/ltable-core/src/show/mod.rs

pub mod generate;
pub mod model;
pub mod render;
