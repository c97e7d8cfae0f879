// crates/ltable-cli/src/cmd/inspect.rs

use clap::Args;
use ltable_core::codec::{self, FormatVariant};
use ltable_core::show::render::format_hex;

use crate::cmd::args::VariantArg;
use crate::io::value;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Packed record, decimal or 0x-prefixed hex
    pub value: String,

    #[arg(long, value_enum, ignore_case = true, default_value_t = VariantArg::B)]
    pub variant: VariantArg,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let variant: FormatVariant = args.variant.into();
    let packed = value::parse_packed(&args.value)?;
    let d = codec::decode(variant, packed);

    println!("variant     = {}", variant);
    println!("packed      = {} ({})", format_hex(packed), packed);
    println!("r           = {}", d.r);
    println!("g           = {}", d.g);
    println!("b           = {}", d.b);
    println!("brightness  = {}/{}", d.brightness, variant.max_brightness());
    if variant.has_transition() {
        println!("transition  = {}", d.transition);
    }
    if variant.has_direction() {
        println!("direction   = {}", d.direction);
    }

    if variant == FormatVariant::C && packed & 0b1110 != 0 {
        println!("WARN: reserved bits[3:1] are set (0b{:03b}); firmware ignores them", (packed >> 1) & 0b111);
    }

    Ok(())
}
