// crates/ltable-core/src/show/model.rs

use crate::body::PartList;
use crate::codec::variant::FormatVariant;
use crate::error::{LtError, Result};

/// One timestamped snapshot: a packed record per part, in part-list order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub time: u32,
    pub records: Vec<u32>,
}

impl Frame {
    pub fn new(time: u32, records: Vec<u32>) -> Self {
        Self { time, records }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerSequence {
    frames: Vec<Frame>,
}

impl PlayerSequence {
    pub fn new(frames: Vec<Frame>) -> Result<Self> {
        // invariant: strictly increasing times
        for w in frames.windows(2) {
            if w[1].time <= w[0].time {
                return Err(LtError::InvalidInput(format!(
                    "player frames not strictly ascending: {} then {}",
                    w[0].time, w[1].time
                )));
            }
        }
        Ok(Self { frames })
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn times(&self) -> impl Iterator<Item = u32> + '_ {
        self.frames.iter().map(|f| f.time)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Show {
    pub variant: FormatVariant,
    pub parts: PartList,
    pub players: Vec<PlayerSequence>,
}

impl Show {
    pub fn new(variant: FormatVariant, parts: PartList, players: Vec<PlayerSequence>) -> Result<Self> {
        for (p, player) in players.iter().enumerate() {
            if let Some(f) = player.frames().iter().find(|f| f.records.len() != parts.len()) {
                return Err(LtError::InvalidInput(format!(
                    "player {p} frame at t={} has {} records for {} parts",
                    f.time,
                    f.records.len(),
                    parts.len()
                )));
            }
        }
        Ok(Self { variant, parts, players })
    }

    pub fn frame_count(&self) -> usize {
        self.players.iter().map(|p| p.frames().len()).sum()
    }

    /// Keep frames `[chunk * size, (chunk + 1) * size)` of every player.
    /// Pages past the end come back empty.
    pub fn page(mut self, chunk: usize, size: usize) -> Self {
        let start = chunk.saturating_mul(size);
        let end = start.saturating_add(size);
        for player in &mut self.players {
            let n = player.frames.len();
            let lo = start.min(n);
            let hi = end.min(n);
            player.frames.truncate(hi);
            player.frames.drain(..lo);
        }
        self
    }
}

/// 16-byte blake3 id over variant, part names, times and records.
pub fn show_id_16(show: &Show) -> [u8; 16] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&[show.variant.tag()]);
    for name in show.parts.iter() {
        hasher.update(&(name.len() as u32).to_le_bytes());
        hasher.update(name.as_bytes());
    }
    for player in &show.players {
        hasher.update(&(player.frames().len() as u32).to_le_bytes());
        for f in player.frames() {
            hasher.update(&f.time.to_le_bytes());
            for r in &f.records {
                hasher.update(&r.to_le_bytes());
            }
        }
    }
    let mut out = [0u8; 16];
    out.copy_from_slice(&hasher.finalize().as_bytes()[..16]);
    out
}

pub fn show_id_hex(show: &Show) -> String {
    show_id_16(show).iter().map(|b| format!("{b:02x}")).collect()
}
