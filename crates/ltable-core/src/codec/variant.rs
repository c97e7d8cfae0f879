// crates/ltable-core/src/codec/variant.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LtError;

/// Firmware record layouts. Each revision packs one lighting command into a u32.
///
/// - `A`: `R<<24 | G<<16 | B<<8 | A`, brightness is the full alpha byte, no flags.
/// - `B`: 24-bit color in bits[31:8], 6-bit brightness in bits[7:2],
///   transition in bit1, direction in bit0.
/// - `C`: 24-bit color in bits[31:8], 4-bit brightness in bits[7:4],
///   bits[3:1] reserved (zero), transition in bit0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum FormatVariant {
    #[default]
    A,
    B,
    C,
}

impl FormatVariant {
    pub const ALL: [FormatVariant; 3] = [FormatVariant::A, FormatVariant::B, FormatVariant::C];

    #[inline]
    pub const fn brightness_bits(self) -> u32 {
        match self {
            FormatVariant::A => 8,
            FormatVariant::B => 6,
            FormatVariant::C => 4,
        }
    }

    #[inline]
    pub const fn brightness_mask(self) -> u32 {
        (1u32 << self.brightness_bits()) - 1
    }

    #[inline]
    pub const fn max_brightness(self) -> u8 {
        self.brightness_mask() as u8
    }

    #[inline]
    pub const fn has_transition(self) -> bool {
        !matches!(self, FormatVariant::A)
    }

    #[inline]
    pub const fn has_direction(self) -> bool {
        matches!(self, FormatVariant::B)
    }

    /// Stable one-byte tag (used by the show fingerprint).
    #[inline]
    pub const fn tag(self) -> u8 {
        match self {
            FormatVariant::A => b'A',
            FormatVariant::B => b'B',
            FormatVariant::C => b'C',
        }
    }
}

impl fmt::Display for FormatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag() as char)
    }
}

impl FromStr for FormatVariant {
    type Err = LtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(FormatVariant::A),
            "b" => Ok(FormatVariant::B),
            "c" => Ok(FormatVariant::C),
            other => Err(LtError::InvalidInput(format!(
                "unknown format variant {other:?} (expected a, b or c)"
            ))),
        }
    }
}

impl TryFrom<String> for FormatVariant {
    type Error = LtError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
