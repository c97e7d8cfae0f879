// crates/ltable-cli/src/cmd/gen.rs

use clap::Args;
use ltable_core::show::model::show_id_hex;
use ltable_core::{Generator, ShowConfig};

use crate::cmd::args::{FillArg, RenderArg, StrategyArg, VariantArg};
use crate::io::{config_file, json};

#[derive(Args, Debug)]
pub struct GenArgs {
    /// Show config (.json). If omitted, uses built-in defaults.
    #[arg(long)]
    pub config: Option<String>,

    /// Firmware record layout
    #[arg(long, value_enum, ignore_case = true)]
    pub variant: Option<VariantArg>,

    /// Record rendering
    #[arg(long, value_enum)]
    pub render: Option<RenderArg>,

    /// Frame generation strategy
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Sparse strategy fill
    #[arg(long, value_enum)]
    pub fill: Option<FillArg>,

    /// Number of players
    #[arg(long)]
    pub players: Option<usize>,

    /// Frames per player (default: 2 sparse, 20 gradient/pattern)
    #[arg(long)]
    pub frames: Option<usize>,

    /// Exclusive upper bound for sparse timestamps (ticks)
    #[arg(long)]
    pub time_range: Option<u32>,

    /// Spacing between gradient/pattern frames (ticks)
    #[arg(long)]
    pub step_ticks: Option<u32>,

    /// RNG seed; omit for a fresh one (logged at info level)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reject out-of-range record fields instead of masking
    #[arg(long)]
    pub strict: bool,

    /// Emit only this page of frames per player
    #[arg(long)]
    pub chunk: Option<usize>,

    /// Frames per page (with --chunk)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Print seed and show id on stderr
    #[arg(long)]
    pub fingerprint: bool,
}

/// Precedence:
/// 1) explicit flags
/// 2) values from --config
/// 3) built-in defaults
pub fn effective_config(args: &GenArgs) -> anyhow::Result<ShowConfig> {
    let mut cfg = match args.config.as_deref() {
        Some(p) => config_file::load_config(p)?,
        None => ShowConfig::default(),
    };

    if let Some(v) = args.variant {
        cfg.variant = v.into();
    }
    if let Some(r) = args.render {
        cfg.render_mode = r.into();
    }
    if let Some(s) = args.strategy {
        cfg.strategy = s.into();
    }
    if let Some(f) = args.fill {
        cfg.sparse_fill = f.into();
    }
    if let Some(n) = args.players {
        cfg.player_count = n;
    }
    if args.frames.is_some() {
        cfg.frame_count = args.frames;
    }
    if let Some(t) = args.time_range {
        cfg.time_range = t;
    }
    if let Some(t) = args.step_ticks {
        cfg.step_ticks = t;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if args.strict {
        cfg.strict = true;
    }
    if args.chunk.is_some() {
        cfg.chunk = args.chunk;
    }
    if let Some(n) = args.chunk_size {
        cfg.chunk_size = n;
    }
    if args.compact {
        cfg.pretty = false;
    }

    Ok(cfg)
}

pub fn run(args: GenArgs) -> anyhow::Result<()> {
    let cfg = effective_config(&args)?;
    tracing::debug!(?cfg, "effective config");

    let mut generator = Generator::new(cfg.seed);
    if cfg.seed.is_none() {
        tracing::info!(seed = generator.seed(), "no seed given, drew one");
    }

    let show = generator.generate(&cfg)?;
    json::write_show_stdout(&show, cfg.render_mode, cfg.pretty)?;

    let sid = show_id_hex(&show);
    tracing::info!(
        players = show.players.len(),
        frames = show.frame_count(),
        variant = %cfg.variant,
        seed = generator.seed(),
        show_id = %sid,
        "gen ok"
    );
    if args.fingerprint {
        eprintln!("seed={} show_id={}", generator.seed(), sid);
    }

    Ok(())
}
