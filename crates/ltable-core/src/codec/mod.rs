// crates/ltable-core/src/codec/mod.rs

pub mod bitpack;
pub mod variant;

pub use bitpack::{decode, encode, encode_strict, full_bright, DecodedRecord, LightCommand};
pub use variant::FormatVariant;
