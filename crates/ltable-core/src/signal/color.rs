// crates/ltable-core/src/signal/color.rs

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The eight colors the firmware team validates strips against.
/// Order is fixed: pattern shows index into it by bit fields of the frame index.
pub const FIRMWARE_PALETTE: [(&str, Rgb); 8] = [
    ("black", Rgb::new(0, 0, 0)),
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("purple", Rgb::new(255, 0, 255)),
    ("white", Rgb::new(255, 255, 255)),
];

/// Each channel uniform in [0, 255].
pub fn random_rgb<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(rng.gen(), rng.gen(), rng.gen())
}

/// Interpolation position of frame `i` out of `count`: `i / (count - 1)`.
///
/// A single-frame sequence has nowhere to move, so `count <= 1` yields 0.0
/// (the frame takes the start color).
#[inline]
pub fn fraction(i: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    i as f64 / (count - 1) as f64
}

/// `start + (end - start) * fraction`, truncated toward zero.
///
/// Truncation (not rounding) is what the firmware reference data uses:
/// `lerp_channel(0, 255, 0.5) == 127`.
#[inline]
pub fn lerp_channel(start: u8, end: u8, fraction: f64) -> u8 {
    let s = start as f64;
    let v = s + (end as f64 - s) * fraction;
    // `as` saturates to [0, 255] and truncates toward zero.
    v as u8
}

#[inline]
pub fn lerp_rgb(start: Rgb, end: Rgb, fraction: f64) -> Rgb {
    Rgb::new(
        lerp_channel(start.r, end.r, fraction),
        lerp_channel(start.g, end.g, fraction),
        lerp_channel(start.b, end.b, fraction),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_truncates_instead_of_rounding() {
        assert_eq!(lerp_channel(0, 255, 0.5), 127);
        assert_eq!(lerp_channel(255, 0, 0.5), 127);
        assert_eq!(lerp_channel(10, 11, 0.99), 10);
    }

    #[test]
    fn lerp_hits_both_endpoints() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 50);
        assert_eq!(lerp_rgb(a, b, fraction(0, 20)), a);
        assert_eq!(lerp_rgb(a, b, fraction(19, 20)), b);
    }

    #[test]
    fn single_frame_fraction_is_zero() {
        assert_eq!(fraction(0, 1), 0.0);
        assert_eq!(fraction(0, 0), 0.0);
    }

    #[test]
    fn palette_is_the_firmware_test_set() {
        assert_eq!(FIRMWARE_PALETTE.len(), 8);
        assert_eq!(FIRMWARE_PALETTE[0].1, Rgb::BLACK);
        assert_eq!(FIRMWARE_PALETTE[7].1, Rgb::WHITE);
    }
}
