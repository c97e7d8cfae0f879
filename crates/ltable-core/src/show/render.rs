// crates/ltable-core/src/show/render.rs
//
// JSON text for a Show:
// {"players":[[{"time":t,"<part>":v,...},...],...]}
// Frame keys follow part-list order, so frames are written through a
// hand-rolled Serialize instead of a (sorted) serde_json::Map.

use std::io::Write;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};

use crate::body::{PartList, TIME_KEY};
use crate::error::Result;
use crate::show::model::{Frame, PlayerSequence, Show};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Plain JSON integer.
    #[default]
    Decimal,
    /// String "0x" + 8 uppercase hex digits.
    Hex,
}

#[inline]
pub fn format_hex(v: u32) -> String {
    format!("0x{v:08X}")
}

/// One packed record as a JSON value in the given mode.
pub fn record_value(v: u32, mode: RenderMode) -> serde_json::Value {
    match mode {
        RenderMode::Decimal => serde_json::Value::from(v),
        RenderMode::Hex => serde_json::Value::from(format_hex(v)),
    }
}

struct ShowDoc<'a> {
    show: &'a Show,
    mode: RenderMode,
}

struct PlayerDoc<'a> {
    seq: &'a PlayerSequence,
    parts: &'a PartList,
    mode: RenderMode,
}

struct FrameDoc<'a> {
    frame: &'a Frame,
    parts: &'a PartList,
    mode: RenderMode,
}

impl Serialize for ShowDoc<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let players: Vec<PlayerDoc<'_>> = self
            .show
            .players
            .iter()
            .map(|seq| PlayerDoc { seq, parts: &self.show.parts, mode: self.mode })
            .collect();

        let mut st = serializer.serialize_struct("Show", 1)?;
        st.serialize_field("players", &players)?;
        st.end()
    }
}

impl Serialize for PlayerDoc<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.seq.frames().iter().map(|frame| FrameDoc {
            frame,
            parts: self.parts,
            mode: self.mode,
        }))
    }
}

impl Serialize for FrameDoc<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.parts.len() + 1))?;
        map.serialize_entry(TIME_KEY, &self.frame.time)?;
        for (name, &rec) in self.parts.iter().zip(self.frame.records.iter()) {
            match self.mode {
                RenderMode::Decimal => map.serialize_entry(name, &rec)?,
                RenderMode::Hex => map.serialize_entry(name, &format_hex(rec))?,
            }
        }
        map.end()
    }
}

pub fn render_json(show: &Show, mode: RenderMode, pretty: bool) -> Result<String> {
    let doc = ShowDoc { show, mode };
    let s = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    Ok(s)
}

pub fn write_json<W: Write>(mut w: W, show: &Show, mode: RenderMode, pretty: bool) -> Result<()> {
    let doc = ShowDoc { show, mode };
    if pretty {
        serde_json::to_writer_pretty(&mut w, &doc)?;
    } else {
        serde_json::to_writer(&mut w, &doc)?;
    }
    writeln!(w)?;
    Ok(())
}
