// crates/ltable-core/src/show/generate.rs

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::codec::{self, FormatVariant, LightCommand};
use crate::config::{ShowConfig, SparseFill, Strategy};
use crate::error::Result;
use crate::show::model::{Frame, PlayerSequence, Show};
use crate::signal::color::{self, Rgb, FIRMWARE_PALETTE};
use crate::signal::timing;
use crate::validate::validate_config;

/// Builds shows from an explicitly owned RNG. Same seed + same config => same show.
pub struct Generator {
    rng: StdRng,
    seed: u64,
}

impl Generator {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), seed }
    }

    /// `None` draws a fresh seed; read it back with [`Generator::seed`] to replay the run.
    pub fn new(seed: Option<u64>) -> Self {
        Self::from_seed(seed.unwrap_or_else(rand::random))
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[tracing::instrument(skip_all, fields(strategy = ?cfg.strategy, variant = %cfg.variant))]
    pub fn generate(&mut self, cfg: &ShowConfig) -> Result<Show> {
        validate_config(cfg)?;
        tracing::debug!(seed = self.seed, players = cfg.player_count, frames = cfg.frames(), "generating");

        let mut players = Vec::with_capacity(cfg.player_count);
        for p in 0..cfg.player_count {
            let seq = match cfg.strategy {
                Strategy::Sparse => self.sparse_player(cfg)?,
                Strategy::Gradient => self.gradient_player(cfg)?,
                Strategy::Pattern => pattern_player(cfg)?,
            };
            tracing::trace!(player = p, frames = seq.frames().len(), "player built");
            players.push(seq);
        }

        let mut show = Show::new(cfg.variant, cfg.parts.clone(), players)?;
        if let Some(chunk) = cfg.chunk {
            show = show.page(chunk, cfg.chunk_size);
            tracing::debug!(chunk, chunk_size = cfg.chunk_size, "paged show");
        }

        tracing::info!(players = show.players.len(), frames = show.frame_count(), "show generated");
        Ok(show)
    }

    /// Distinct random times, every part holding one constant record.
    pub fn sparse_player(&mut self, cfg: &ShowConfig) -> Result<PlayerSequence> {
        let parts = cfg.parts.len();
        let times = timing::draw_unique_times(&mut self.rng, cfg.frames(), cfg.time_range)?;

        let records = match cfg.sparse_fill {
            SparseFill::FullWhite => {
                let rec = pack(cfg, &LightCommand::new(Rgb::WHITE, cfg.variant.max_brightness()))?;
                vec![rec; parts]
            }
            SparseFill::RandomPerPart => (0..parts)
                .map(|_| {
                    let c = color::random_rgb(&mut self.rng);
                    pack(cfg, &LightCommand::new(c, cfg.variant.max_brightness()))
                })
                .collect::<Result<Vec<u32>>>()?,
        };

        let frames = times.into_iter().map(|t| Frame::new(t, records.clone())).collect();
        PlayerSequence::new(frames)
    }

    /// Evenly spaced frames fading each part from a random start to a random end color.
    pub fn gradient_player(&mut self, cfg: &ShowConfig) -> Result<PlayerSequence> {
        let ends: Vec<(Rgb, Rgb)> = (0..cfg.parts.len())
            .map(|_| {
                let start = color::random_rgb(&mut self.rng);
                let end = color::random_rgb(&mut self.rng);
                (start, end)
            })
            .collect();
        gradient_sequence(cfg, &ends)
    }
}

/// Gradient frames for fixed per-part `(start, end)` colors.
///
/// Brightness is the variant maximum; the transition flag is set wherever the
/// layout carries it so the firmware fades between consecutive frames.
pub fn gradient_sequence(cfg: &ShowConfig, ends: &[(Rgb, Rgb)]) -> Result<PlayerSequence> {
    let frame_count = cfg.frames();
    let times = timing::stride_times(frame_count, cfg.step_ticks)?;
    let bright = cfg.variant.max_brightness();
    let animate = cfg.variant.has_transition();

    let mut frames = Vec::with_capacity(times.len());
    for (i, t) in times.into_iter().enumerate() {
        let f = color::fraction(i, frame_count);
        let records = ends
            .iter()
            .map(|&(start, end)| {
                let c = color::lerp_rgb(start, end, f);
                pack(cfg, &LightCommand::new(c, bright).with_transition(animate))
            })
            .collect::<Result<Vec<u32>>>()?;
        frames.push(Frame::new(t, records));
    }
    PlayerSequence::new(frames)
}

/// Palette index of part `part` at frame `i`: two bits of the frame index,
/// a different bit pair per part.
#[inline]
pub fn pattern_index(i: usize, part: usize) -> usize {
    (i >> (2 * (part % 8))) & 0b11
}

/// Deterministic palette walk over evenly spaced frames, at full brightness.
pub fn pattern_player(cfg: &ShowConfig) -> Result<PlayerSequence> {
    let times = timing::stride_times(cfg.frames(), cfg.step_ticks)?;
    let bright = cfg.variant.max_brightness();

    let mut frames = Vec::with_capacity(times.len());
    for (i, t) in times.into_iter().enumerate() {
        let records = (0..cfg.parts.len())
            .map(|j| {
                let (_, c) = FIRMWARE_PALETTE[pattern_index(i, j)];
                pack(cfg, &LightCommand::new(c, bright))
            })
            .collect::<Result<Vec<u32>>>()?;
        frames.push(Frame::new(t, records));
    }
    PlayerSequence::new(frames)
}

/// Firmware-compatible masking by default; strict configs reject instead.
fn pack(cfg: &ShowConfig, cmd: &LightCommand) -> Result<u32> {
    if cfg.strict {
        codec::encode_strict(cfg.variant, cmd)
    } else {
        Ok(codec::encode(cfg.variant, cmd))
    }
}

/// Firmware palette packed for `variant` at full brightness.
pub fn palette_records(variant: FormatVariant) -> Vec<(&'static str, u32)> {
    FIRMWARE_PALETTE
        .iter()
        .map(|&(name, c)| (name, codec::full_bright(variant, c)))
        .collect()
}
