// crates/ltable-core/src/config.rs

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::body::PartList;
use crate::codec::variant::FormatVariant;
use crate::error::{LtError, Result};
use crate::show::render::RenderMode;

pub const DEFAULT_PLAYER_COUNT: usize = 7;
pub const DEFAULT_SPARSE_FRAMES: usize = 2;
pub const DEFAULT_GRADIENT_FRAMES: usize = 20;
pub const DEFAULT_TIME_RANGE: u32 = 1500;
pub const DEFAULT_STEP_TICKS: u32 = 10;
pub const DEFAULT_CHUNK_SIZE: usize = 100;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Few frames at random distinct times, constant records.
    #[default]
    Sparse,
    /// Evenly spaced frames fading from a random start to a random end color per part.
    Gradient,
    /// Evenly spaced frames cycling the firmware palette by frame-index bits.
    Pattern,
}

/// What a sparse frame carries on every part.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SparseFill {
    /// White at maximum brightness.
    #[default]
    FullWhite,
    /// One random color per (player, part), held for all of that player's frames.
    RandomPerPart,
}

/// Everything a show run depends on.
///
/// JSON keys are camelCase; omitted keys take the defaults below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ShowConfig {
    pub variant: FormatVariant,
    pub render_mode: RenderMode,
    pub strategy: Strategy,
    pub sparse_fill: SparseFill,
    pub player_count: usize,
    /// Frames per player. `None` picks the strategy default, see [`ShowConfig::frames`].
    pub frame_count: Option<usize>,
    /// Exclusive upper bound for sparse timestamps (ticks).
    pub time_range: u32,
    /// Spacing of gradient/pattern frames (ticks).
    pub step_ticks: u32,
    /// Fixed RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
    pub parts: PartList,
    /// Reject out-of-range record fields instead of masking them.
    pub strict: bool,
    /// Emit only this page of frames per player.
    pub chunk: Option<usize>,
    pub chunk_size: usize,
    pub pretty: bool,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            variant: FormatVariant::default(),
            render_mode: RenderMode::default(),
            strategy: Strategy::Sparse,
            sparse_fill: SparseFill::FullWhite,
            player_count: DEFAULT_PLAYER_COUNT,
            frame_count: None,
            time_range: DEFAULT_TIME_RANGE,
            step_ticks: DEFAULT_STEP_TICKS,
            seed: None,
            parts: PartList::default(),
            strict: false,
            chunk: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            pretty: true,
        }
    }
}

impl ShowConfig {
    /// Fade preset: 20 frames, 10 ticks apart, in the 6-bit brightness
    /// layout so the transition flag reaches the firmware.
    pub fn gradient() -> Self {
        Self {
            variant: FormatVariant::B,
            strategy: Strategy::Gradient,
            ..Self::default()
        }
    }

    /// Effective frame count: the explicit value, else 2 for sparse shows
    /// and 20 for gradient/pattern shows.
    pub fn frames(&self) -> usize {
        self.frame_count.unwrap_or(match self.strategy {
            Strategy::Sparse => DEFAULT_SPARSE_FRAMES,
            Strategy::Gradient | Strategy::Pattern => DEFAULT_GRADIENT_FRAMES,
        })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
            .map_err(|e| LtError::Config(format!("{}: {e}", path.display())))
    }
}
