//! Color-space reduction between the three palette encodings.
//!
//! # Palette layout
//!
//! The 256-color palette is made of three regions:
//!
//! | Indices   | Region                                   |
//! |-----------|------------------------------------------|
//! | `0–15`    | the 16 ANSI colors                       |
//! | `16–231`  | a 6×6×6 color cube (`16 + 36r + 6g + b`) |
//! | `232–255` | a 24-step grayscale ramp                 |
//!
//! # Reductions
//!
//! - [`rgb_to_ansi256`]: grays go to the ramp (or the cube corners for
//!   near-black and near-white), everything else is quantized per channel
//!   onto the cube.
//! - [`ansi256_to_ansi16`]: each channel is rounded to one bit, and only
//!   fully saturated colors get the bright variant.
//! - [`rgb_to_ansi16`]: the composition of the two.
//!
//! All rounding is round-half-up. Every function is total: inputs outside
//! 0–255 are clamped.
//!
//! # Example
//!
//! ```rust
//! use tinct::colorspace::{ansi256_to_ansi16, rgb_to_ansi256};
//!
//! assert_eq!(rgb_to_ansi256(255, 0, 0), 196);
//! assert_eq!(rgb_to_ansi256(20, 40, 60), 23);
//! assert_eq!(ansi256_to_ansi16(196), 91);
//! ```

use crate::color::{Color, ColorTier, NamedColor, Rgb};

/// Tolerance for the saturation comparisons in [`ansi256_to_ansi16`].
const EPSILON: f64 = 1e-9;

/// Maximum per-channel difference still treated as gray.
const GRAY_TOLERANCE: i32 = 1;

fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

// ─── RGB → 256 ──────────────────────────────────────────────────────────────

/// Converts an RGB triplet to the nearest 256-color palette index.
///
/// Components are clamped into 0–255 first.
///
/// # Example
///
/// ```rust
/// use tinct::colorspace::rgb_to_ansi256;
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256(0, 255, 0), 46);
///
/// // Mid gray lands on the grayscale ramp
/// assert_eq!(rgb_to_ansi256(127, 127, 127), 244);
/// ```
pub fn rgb_to_ansi256(r: i32, g: i32, b: i32) -> u8 {
    let r = r.clamp(0, 255);
    let g = g.clamp(0, 255);
    let b = b.clamp(0, 255);

    let is_gray = (r == g && g == b)
        || ((r - g).abs() <= GRAY_TOLERANCE && (r - b).abs() <= GRAY_TOLERANCE);

    if is_gray {
        // The ramp stops short of black and white; the cube corners cover those.
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        let step = round_half_up(f64::from(r - 8) / 247.0 * 24.0);
        return (232 + step) as u8;
    }

    let level = |c: i32| round_half_up(f64::from(c) / 255.0 * 5.0).clamp(0, 5);
    (16 + 36 * level(r) + 6 * level(g) + level(b)) as u8
}

// ─── 256 → 16 ───────────────────────────────────────────────────────────────

/// Converts a 256-color palette index to a 16-color foreground SGR code.
///
/// Returns a code in `30–37` or `90–97`. Add 10 for the background plane.
pub fn ansi256_to_ansi16(index: u8) -> u8 {
    if index < 8 {
        return 30 + index;
    }
    if index < 16 {
        return 90 + (index - 8);
    }

    let (r, g, b) = if index >= 232 {
        let v = (f64::from(index - 232) * 10.0 + 8.0) / 255.0;
        (v, v, v)
    } else {
        let t = index - 16;
        let r6 = t / 36;
        let rem = t % 36;
        let g6 = rem / 6;
        let b6 = rem % 6;
        (
            f64::from(r6) / 5.0,
            f64::from(g6) / 5.0,
            f64::from(b6) / 5.0,
        )
    };

    let value = r.max(g).max(b) * 2.0;
    if value < EPSILON {
        return 30;
    }

    let bit = |c: f64| round_half_up(c) as u8;
    let bits = (bit(b) << 2) | (bit(g) << 1) | bit(r);
    let code = 30 + bits;

    if (value - 2.0).abs() < EPSILON {
        code + 60
    } else {
        code
    }
}

/// Converts an RGB triplet straight to a 16-color foreground SGR code.
pub fn rgb_to_ansi16(r: i32, g: i32, b: i32) -> u8 {
    ansi256_to_ansi16(rgb_to_ansi256(r, g, b))
}

// ─── Tier downsampling ──────────────────────────────────────────────────────

impl Rgb {
    /// Nearest 256-color palette index.
    pub fn to_ansi256(self) -> u8 {
        rgb_to_ansi256(i32::from(self.0), i32::from(self.1), i32::from(self.2))
    }
}

impl Color {
    /// Reduces this color until it fits `tier`.
    ///
    /// True color falls to the 256-color cube, and 256-color indices fall to
    /// the nearest named color. Colors already at or below the tier are
    /// returned unchanged, and so is everything at [`ColorTier::NoColor`]
    /// (nothing is emitted there anyway).
    pub fn downsample(self, tier: ColorTier) -> Color {
        match (self, tier) {
            (_, ColorTier::NoColor) | (_, ColorTier::TrueColor) => self,
            (Color::Rgb(rgb), ColorTier::Extended256) => Color::Indexed(rgb.to_ansi256()),
            (Color::Rgb(rgb), ColorTier::Ansi16) => {
                Color::Indexed(rgb.to_ansi256()).downsample(ColorTier::Ansi16)
            }
            (Color::Indexed(index), ColorTier::Ansi16) => {
                let code = ansi256_to_ansi16(index);
                match NamedColor::from_fg_code(u32::from(code)) {
                    Some(named) => Color::Named(named),
                    None => self,
                }
            }
            (Color::Indexed(_), ColorTier::Extended256) | (Color::Named(_), _) => self,
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // RGB → 256
    // =========================================================================

    #[test]
    fn test_primaries_map_to_cube_corners() {
        assert_eq!(rgb_to_ansi256(0, 0, 0), 16);
        assert_eq!(rgb_to_ansi256(255, 0, 0), 196);
        assert_eq!(rgb_to_ansi256(0, 255, 0), 46);
        assert_eq!(rgb_to_ansi256(0, 0, 255), 21);
        assert_eq!(rgb_to_ansi256(255, 255, 0), 226);
        assert_eq!(rgb_to_ansi256(255, 0, 255), 201);
        assert_eq!(rgb_to_ansi256(0, 255, 255), 51);
        assert_eq!(rgb_to_ansi256(255, 255, 255), 231);
    }

    #[test]
    fn test_grays_use_ramp_between_cube_corners() {
        assert_eq!(rgb_to_ansi256(7, 7, 7), 16);
        assert_eq!(rgb_to_ansi256(8, 8, 8), 232);
        assert_eq!(rgb_to_ansi256(127, 127, 127), 244);
        assert_eq!(rgb_to_ansi256(191, 191, 191), 250);
        assert_eq!(rgb_to_ansi256(248, 248, 248), 255);
        assert_eq!(rgb_to_ansi256(249, 249, 249), 231);
    }

    #[test]
    fn test_near_grays_within_one_are_gray() {
        assert_eq!(rgb_to_ansi256(127, 128, 126), rgb_to_ansi256(127, 127, 127));
        // Two apart is chromatic
        assert!(rgb_to_ansi256(127, 129, 127) < 232);
    }

    #[test]
    fn test_chromatic_samples() {
        assert_eq!(rgb_to_ansi256(69, 173, 92), 72);
        assert_eq!(rgb_to_ansi256(201, 101, 240), 177);
        assert_eq!(rgb_to_ansi256(20, 40, 60), 23);
    }

    #[test]
    fn test_out_of_range_components_are_clamped() {
        assert_eq!(rgb_to_ansi256(-5, 300, 999), rgb_to_ansi256(0, 255, 255));
        assert_eq!(rgb_to_ansi256(-100, -100, -100), 16);
        assert_eq!(rgb_to_ansi256(1000, 1000, 1000), 231);
    }

    // =========================================================================
    // 256 → 16
    // =========================================================================

    #[test]
    fn test_base16_passes_through() {
        for i in 0..8u8 {
            assert_eq!(ansi256_to_ansi16(i), 30 + i);
            assert_eq!(ansi256_to_ansi16(i + 8), 90 + i);
        }
    }

    #[test]
    fn test_saturated_cube_colors_are_bright() {
        assert_eq!(ansi256_to_ansi16(196), 91);
        assert_eq!(ansi256_to_ansi16(46), 92);
        assert_eq!(ansi256_to_ansi16(21), 94);
        assert_eq!(ansi256_to_ansi16(231), 97);
    }

    #[test]
    fn test_dark_cube_colors_are_black() {
        assert_eq!(ansi256_to_ansi16(16), 30);
        assert_eq!(ansi256_to_ansi16(23), 30);
    }

    #[test]
    fn test_grayscale_ramp_splits_at_midpoint() {
        assert_eq!(ansi256_to_ansi16(232), 30);
        assert_eq!(ansi256_to_ansi16(243), 30);
        assert_eq!(ansi256_to_ansi16(244), 37);
        assert_eq!(ansi256_to_ansi16(255), 37);
    }

    #[test]
    fn test_rgb_to_ansi16_composes() {
        assert_eq!(rgb_to_ansi16(20, 40, 60), 30);
        assert_eq!(rgb_to_ansi16(169, 169, 169), 37);
        assert_eq!(rgb_to_ansi16(255, 0, 0), 91);
    }

    // =========================================================================
    // Downsampling
    // =========================================================================

    #[test]
    fn test_downsample_rgb() {
        let c = Color::rgb(20, 40, 60);
        assert_eq!(c.downsample(ColorTier::TrueColor), c);
        assert_eq!(c.downsample(ColorTier::Extended256), Color::Indexed(23));
        assert_eq!(
            c.downsample(ColorTier::Ansi16),
            Color::Named(NamedColor::Black)
        );
    }

    #[test]
    fn test_downsample_indexed() {
        let c = Color::Indexed(196);
        assert_eq!(c.downsample(ColorTier::Extended256), c);
        assert_eq!(
            c.downsample(ColorTier::Ansi16),
            Color::Named(NamedColor::BrightRed)
        );
    }

    #[test]
    fn test_named_never_changes() {
        let c = Color::Named(NamedColor::Cyan);
        for tier in ColorTier::ALL {
            assert_eq!(c.downsample(tier), c);
        }
    }

    proptest! {
        #[test]
        fn rgb_to_ansi256_never_hits_base16(r in -50i32..300, g in -50i32..300, b in -50i32..300) {
            prop_assert!(rgb_to_ansi256(r, g, b) >= 16);
        }

        #[test]
        fn exact_grays_stay_on_gray_indices(v in 0i32..=255) {
            let index = rgb_to_ansi256(v, v, v);
            prop_assert!(index == 16 || index == 231 || index >= 232);
        }

        #[test]
        fn ansi16_codes_in_range(index in 0u8..=255) {
            let code = ansi256_to_ansi16(index);
            prop_assert!((30..=37).contains(&code) || (90..=97).contains(&code));
        }

        #[test]
        fn downsample_fits_tier(r in 0i32..=255, g in 0i32..=255, b in 0i32..=255) {
            let c = Color::rgb(r, g, b);
            for tier in [ColorTier::Ansi16, ColorTier::Extended256, ColorTier::TrueColor] {
                prop_assert!(c.downsample(tier).native_tier() <= tier);
            }
        }
    }
}
