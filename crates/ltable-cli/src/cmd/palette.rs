// crates/ltable-cli/src/cmd/palette.rs

use clap::Args;
use ltable_core::show::generate::palette_records;
use ltable_core::show::render::{record_value, RenderMode};
use ltable_core::FormatVariant;
use serde_json::json;

use crate::cmd::args::{RenderArg, VariantArg};
use crate::io::json as json_out;

#[derive(Args, Debug)]
pub struct PaletteArgs {
    #[arg(long, value_enum, ignore_case = true, default_value_t = VariantArg::A)]
    pub variant: VariantArg,

    #[arg(long, value_enum, default_value_t = RenderArg::Hex)]
    pub render: RenderArg,
}

pub fn run(args: PaletteArgs) -> anyhow::Result<()> {
    let variant: FormatVariant = args.variant.into();
    let mode: RenderMode = args.render.into();

    let colors: Vec<serde_json::Value> = palette_records(variant)
        .into_iter()
        .map(|(name, v)| json!({ "name": name, "value": record_value(v, mode) }))
        .collect();

    json_out::write_value_stdout(&json!({ "variant": variant, "palette": colors }))
}
