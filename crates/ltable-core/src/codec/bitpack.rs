// crates/ltable-core/src/codec/bitpack.rs

use crate::codec::variant::FormatVariant;
use crate::error::{LtError, Result};
use crate::signal::color::Rgb;

const CHANNEL_MASK: u32 = 0xFF;
const FLAG_MASK: u32 = 0x01;

/// Logical lighting command before packing.
///
/// Fields are plain signed integers: the firmware tolerates overflow, so
/// `encode` keeps only the low bits of each field instead of rejecting.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LightCommand {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub brightness: i32,
    pub transition: i32,
    pub direction: i32,
}

impl LightCommand {
    pub fn new(color: Rgb, brightness: u8) -> Self {
        Self {
            r: color.r as i32,
            g: color.g as i32,
            b: color.b as i32,
            brightness: brightness as i32,
            transition: 0,
            direction: 0,
        }
    }

    pub fn with_transition(mut self, on: bool) -> Self {
        self.transition = on as i32;
        self
    }
}

/// Field view of a packed record. Fields a variant does not carry read as 0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedRecord {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub brightness: u8,
    pub transition: u8,
    pub direction: u8,
}

impl DecodedRecord {
    #[inline]
    pub fn color(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

#[inline]
fn masked(v: i32, mask: u32) -> u32 {
    (v as u32) & mask
}

#[inline]
fn color24(cmd: &LightCommand) -> u32 {
    (masked(cmd.r, CHANNEL_MASK) << 16) | (masked(cmd.g, CHANNEL_MASK) << 8) | masked(cmd.b, CHANNEL_MASK)
}

/// Pack a command into the variant's 32-bit layout.
///
/// Total over all inputs: every field is masked to its declared width.
/// Flags the variant does not carry are dropped.
pub fn encode(variant: FormatVariant, cmd: &LightCommand) -> u32 {
    let bright = masked(cmd.brightness, variant.brightness_mask());
    let t = masked(cmd.transition, FLAG_MASK);
    let d = masked(cmd.direction, FLAG_MASK);

    match variant {
        FormatVariant::A => (color24(cmd) << 8) | bright,
        FormatVariant::B => (color24(cmd) << 8) | (bright << 2) | (t << 1) | d,
        FormatVariant::C => (color24(cmd) << 8) | (bright << 4) | t,
    }
}

/// Like [`encode`], but rejects any field that does not fit its width
/// instead of masking it. Flags the variant cannot carry must be 0.
pub fn encode_strict(variant: FormatVariant, cmd: &LightCommand) -> Result<u32> {
    check_width("r", cmd.r, CHANNEL_MASK)?;
    check_width("g", cmd.g, CHANNEL_MASK)?;
    check_width("b", cmd.b, CHANNEL_MASK)?;
    check_width("brightness", cmd.brightness, variant.brightness_mask())?;

    let t_mask = if variant.has_transition() { FLAG_MASK } else { 0 };
    let d_mask = if variant.has_direction() { FLAG_MASK } else { 0 };
    check_width("transition", cmd.transition, t_mask).map_err(|e| unsupported(variant, e))?;
    check_width("direction", cmd.direction, d_mask).map_err(|e| unsupported(variant, e))?;

    Ok(encode(variant, cmd))
}

/// Inverse of [`encode`] for in-range inputs.
pub fn decode(variant: FormatVariant, packed: u32) -> DecodedRecord {
    let r = ((packed >> 24) & CHANNEL_MASK) as u8;
    let g = ((packed >> 16) & CHANNEL_MASK) as u8;
    let b = ((packed >> 8) & CHANNEL_MASK) as u8;
    let low = packed & 0xFF;

    let (brightness, transition, direction) = match variant {
        FormatVariant::A => (low, 0, 0),
        FormatVariant::B => ((low >> 2) & 0x3F, (low >> 1) & FLAG_MASK, low & FLAG_MASK),
        FormatVariant::C => ((low >> 4) & 0x0F, low & FLAG_MASK, 0),
    };

    DecodedRecord {
        r,
        g,
        b,
        brightness: brightness as u8,
        transition: transition as u8,
        direction: direction as u8,
    }
}

/// Color at the variant's maximum brightness with both flags clear.
#[inline]
pub fn full_bright(variant: FormatVariant, color: Rgb) -> u32 {
    encode(variant, &LightCommand::new(color, variant.max_brightness()))
}

fn check_width(field: &str, v: i32, mask: u32) -> Result<()> {
    if v < 0 || (v as u32) & !mask != 0 {
        return Err(LtError::InvalidInput(format!(
            "{field} out of range: value={v} max={mask}"
        )));
    }
    Ok(())
}

fn unsupported(variant: FormatVariant, e: LtError) -> LtError {
    match e {
        LtError::InvalidInput(msg) => {
            LtError::InvalidInput(format!("{msg} (variant {variant})"))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(r: i32, g: i32, b: i32, brightness: i32, transition: i32, direction: i32) -> LightCommand {
        LightCommand { r, g, b, brightness, transition, direction }
    }

    #[test]
    fn variant_a_is_plain_rgba() {
        let v = encode(FormatVariant::A, &cmd(0x12, 0x34, 0x56, 0x78, 1, 1));
        assert_eq!(v, 0x1234_5678);
        assert_eq!(full_bright(FormatVariant::A, Rgb::WHITE), 0xFFFF_FFFF);
    }

    #[test]
    fn variant_b_reference_value() {
        assert_eq!(encode(FormatVariant::B, &cmd(255, 0, 0, 63, 1, 1)), 0xFF00_00FF);
    }

    #[test]
    fn variant_c_reserved_bits_stay_zero() {
        let v = encode(FormatVariant::C, &cmd(1, 2, 3, 15, 1, 1));
        assert_eq!(v & 0b1110, 0);
        assert_eq!(v, 0x0102_03F1);
    }

    #[test]
    fn out_of_range_inputs_are_masked() {
        let v = encode(FormatVariant::B, &cmd(0x1FF, -1, 256, 64, 2, 3));
        let d = decode(FormatVariant::B, v);
        assert_eq!((d.r, d.g, d.b), (0xFF, 0xFF, 0x00));
        assert_eq!(d.brightness, 0);
        assert_eq!(d.transition, 0);
        assert_eq!(d.direction, 1);
    }

    #[test]
    fn strict_rejects_what_encode_masks() {
        assert!(encode_strict(FormatVariant::B, &cmd(256, 0, 0, 0, 0, 0)).is_err());
        assert!(encode_strict(FormatVariant::B, &cmd(0, 0, 0, 64, 0, 0)).is_err());
        assert!(encode_strict(FormatVariant::C, &cmd(0, 0, 0, 15, 0, 1)).is_err());
        assert!(encode_strict(FormatVariant::A, &cmd(0, 0, 0, 255, 1, 0)).is_err());
        assert_eq!(
            encode_strict(FormatVariant::B, &cmd(255, 0, 0, 63, 1, 1)).unwrap(),
            0xFF00_00FF
        );
    }
}
