// crates/ltable-cli/src/cmd/encode.rs

use clap::Args;
use ltable_core::codec::{self, FormatVariant, LightCommand};
use ltable_core::show::render::{format_hex, RenderMode};

use crate::cmd::args::{RenderArg, VariantArg};

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[arg(long, value_enum, ignore_case = true, default_value_t = VariantArg::B)]
    pub variant: VariantArg,

    #[arg(long, value_enum, default_value_t = RenderArg::Hex)]
    pub render: RenderArg,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub r: i32,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub g: i32,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub b: i32,

    /// Defaults to the variant's maximum
    #[arg(long, allow_negative_numbers = true)]
    pub brightness: Option<i32>,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub transition: i32,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub direction: i32,

    /// Fail on out-of-range fields instead of masking them like the firmware does
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let variant: FormatVariant = args.variant.into();
    let cmd = LightCommand {
        r: args.r,
        g: args.g,
        b: args.b,
        brightness: args.brightness.unwrap_or(variant.max_brightness() as i32),
        transition: args.transition,
        direction: args.direction,
    };

    let packed = if args.strict {
        codec::encode_strict(variant, &cmd)?
    } else {
        codec::encode(variant, &cmd)
    };
    tracing::debug!(?cmd, %variant, packed, "encoded");

    match RenderMode::from(args.render) {
        RenderMode::Decimal => println!("{packed}"),
        RenderMode::Hex => println!("{}", format_hex(packed)),
    }
    Ok(())
}
