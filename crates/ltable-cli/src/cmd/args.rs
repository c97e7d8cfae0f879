// crates/ltable-cli/src/cmd/args.rs
//
// CLI-side value enums; each maps 1:1 onto a core type.

use clap::ValueEnum;
use ltable_core::config::{SparseFill, Strategy};
use ltable_core::{FormatVariant, RenderMode};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum VariantArg {
    /// Plain RGBA: R<<24 | G<<16 | B<<8 | alpha
    A,
    /// 24-bit color, 6-bit brightness, transition bit1, direction bit0
    B,
    /// 24-bit color, 4-bit brightness, reserved bits[3:1], transition bit0
    C,
}

impl From<VariantArg> for FormatVariant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::A => FormatVariant::A,
            VariantArg::B => FormatVariant::B,
            VariantArg::C => FormatVariant::C,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum RenderArg {
    /// Plain decimal integers
    Decimal,
    /// "0xXXXXXXXX" strings
    Hex,
}

impl From<RenderArg> for RenderMode {
    fn from(r: RenderArg) -> Self {
        match r {
            RenderArg::Decimal => RenderMode::Decimal,
            RenderArg::Hex => RenderMode::Hex,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum StrategyArg {
    /// Few frames at random distinct times
    Sparse,
    /// Evenly spaced frames fading start -> end color per part
    Gradient,
    /// Evenly spaced frames walking the firmware palette
    Pattern,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Sparse => Strategy::Sparse,
            StrategyArg::Gradient => Strategy::Gradient,
            StrategyArg::Pattern => Strategy::Pattern,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum FillArg {
    /// White, full brightness on every part
    White,
    /// One random color per part, held across the player's frames
    Random,
}

impl From<FillArg> for SparseFill {
    fn from(f: FillArg) -> Self {
        match f {
            FillArg::White => SparseFill::FullWhite,
            FillArg::Random => SparseFill::RandomPerPart,
        }
    }
}
