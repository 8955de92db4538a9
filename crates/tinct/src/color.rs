//! Color model: attributes, colors, planes and capability tiers.
//!
//! Supports the four encodings an SGR sequence can carry:
//!
//! - Text attributes: bold, dim, italic, underline, ... (fixed on/off codes)
//! - Named colors: the 16 ANSI colors (`30`–`37`, `90`–`97`)
//! - 256-color palette: `38;5;n` / `48;5;n`
//! - True color: `38;2;r;g;b` / `48;2;r;g;b`
//!
//! Numeric constructors clamp out-of-range values instead of rejecting them.
//! Only string parsing ([`Rgb::from_hex`]) can fail.
//!
//! # Example
//!
//! ```rust
//! use tinct::{Color, NamedColor, Rgb};
//!
//! let red = Color::Named(NamedColor::Red);
//! let orange = Color::rgb(255, 136, 0);
//! let clamped = Color::rgb(-5, 300, 999);
//! assert_eq!(clamped, Color::Rgb(Rgb(0, 255, 255)));
//!
//! let hex: Rgb = "#f80".parse().unwrap();
//! assert_eq!(Color::Rgb(hex), orange);
//! # let _ = red;
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Foreground color reset, shared by every foreground color.
pub const FG_RESET: u8 = 39;
/// Background color reset, shared by every background color.
pub const BG_RESET: u8 = 49;

// ─── Attribute ──────────────────────────────────────────────────────────────

/// A text decoration with a fixed SGR on/off code pair.
///
/// Variants are declared in ascending on-code order, so the derived `Ord`
/// is the canonical serialization order.
///
/// Terminal support varies: bold, underline and inverse are nearly universal;
/// italic, strike and the blink variants are common; double underline,
/// framed, encircled and overline are rare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Attribute {
    Bold,
    Dim,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Inverse,
    Hidden,
    Strike,
    DoubleUnderline,
    Framed,
    Encircled,
    Overline,
}

impl Attribute {
    /// Every attribute, in canonical order.
    pub const ALL: [Attribute; 13] = [
        Attribute::Bold,
        Attribute::Dim,
        Attribute::Italic,
        Attribute::Underline,
        Attribute::SlowBlink,
        Attribute::RapidBlink,
        Attribute::Inverse,
        Attribute::Hidden,
        Attribute::Strike,
        Attribute::DoubleUnderline,
        Attribute::Framed,
        Attribute::Encircled,
        Attribute::Overline,
    ];

    /// SGR code that turns the attribute on.
    pub const fn on_code(self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Dim => 2,
            Attribute::Italic => 3,
            Attribute::Underline => 4,
            Attribute::SlowBlink => 5,
            Attribute::RapidBlink => 6,
            Attribute::Inverse => 7,
            Attribute::Hidden => 8,
            Attribute::Strike => 9,
            Attribute::DoubleUnderline => 21,
            Attribute::Framed => 51,
            Attribute::Encircled => 52,
            Attribute::Overline => 53,
        }
    }

    /// SGR code that turns the attribute off.
    ///
    /// Several attributes share an off code (bold/dim → 22, both blinks → 25,
    /// framed/encircled → 54).
    pub const fn off_code(self) -> u8 {
        match self {
            Attribute::Bold | Attribute::Dim => 22,
            Attribute::Italic => 23,
            Attribute::Underline | Attribute::DoubleUnderline => 24,
            Attribute::SlowBlink | Attribute::RapidBlink => 25,
            Attribute::Inverse => 27,
            Attribute::Hidden => 28,
            Attribute::Strike => 29,
            Attribute::Framed | Attribute::Encircled => 54,
            Attribute::Overline => 55,
        }
    }

    /// Looks up the attribute whose on-code is `code`.
    pub fn from_on_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|a| u32::from(a.on_code()) == code)
    }
}

// ─── NamedColor ─────────────────────────────────────────────────────────────

/// One of the 16 standard ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    /// All 16 colors, ordered by palette index.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::BrightBlack,
        NamedColor::BrightRed,
        NamedColor::BrightGreen,
        NamedColor::BrightYellow,
        NamedColor::BrightBlue,
        NamedColor::BrightMagenta,
        NamedColor::BrightCyan,
        NamedColor::BrightWhite,
    ];

    /// Palette index (0–15).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Color at palette index 0–15.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Foreground on-code: `30`–`37` for normal, `90`–`97` for bright.
    pub fn fg_code(self) -> u8 {
        let index = self.index();
        if index < 8 {
            30 + index
        } else {
            90 + (index - 8)
        }
    }

    /// Background on-code: the foreground code plus 10.
    pub fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }

    /// On-code for the given plane.
    pub fn code(self, plane: Plane) -> u8 {
        match plane {
            Plane::Foreground => self.fg_code(),
            Plane::Background => self.bg_code(),
        }
    }

    /// Color for a foreground code (`30`–`37`, `90`–`97`).
    pub fn from_fg_code(code: u32) -> Option<Self> {
        match code {
            30..=37 => Self::from_index((code - 30) as u8),
            90..=97 => Self::from_index((code - 90 + 8) as u8),
            _ => None,
        }
    }

    /// Color for a background code (`40`–`47`, `100`–`107`).
    pub fn from_bg_code(code: u32) -> Option<Self> {
        match code {
            40..=47 | 100..=107 => Self::from_fg_code(code - 10),
            _ => None,
        }
    }
}

// ─── Rgb ────────────────────────────────────────────────────────────────────

/// A 24-bit RGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Clamps an arbitrary integer into a color channel.
pub(crate) fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

impl Rgb {
    /// Creates a color from integer components, clamping each into 0–255.
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Rgb(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Parses a 3- or 6-digit hex literal.
    ///
    /// Accepts an optional `#` or `0x` prefix: `"#fc0"`, `"14283c"`,
    /// `"0x123456"`. Three-digit forms expand each digit (`f` → `ff`).
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let hex = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        // from_str_radix tolerates a leading '+', so check digits up front
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_format(input));
        }

        let digit = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::invalid_format(input))
        };

        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(Rgb(digit(0..1)? * 17, digit(1..2)? * 17, digit(2..3)? * 17)),
            6 => Ok(Rgb(digit(0..2)?, digit(2..4)?, digit(4..6)?)),
            _ => Err(ColorError::invalid_format(input)),
        }
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

// ─── Color ──────────────────────────────────────────────────────────────────

/// A color in one of the three palette encodings.
///
/// A color has no plane of its own; the plane is chosen when it is applied
/// (see [`Plane`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Color {
    /// One of the 16 ANSI colors.
    Named(NamedColor),
    /// 256-color palette index.
    Indexed(u8),
    /// True color RGB.
    Rgb(Rgb),
}

impl Color {
    /// True color from integer components, clamped into 0–255.
    pub fn rgb(r: i32, g: i32, b: i32) -> Self {
        Color::Rgb(Rgb::clamped(r, g, b))
    }

    /// Palette color from an integer index, clamped into 0–255.
    pub fn indexed(index: i32) -> Self {
        Color::Indexed(clamp_channel(index))
    }

    /// Lowest tier able to show this color without downsampling.
    pub fn native_tier(&self) -> ColorTier {
        match self {
            Color::Named(_) => ColorTier::Ansi16,
            Color::Indexed(_) => ColorTier::Extended256,
            Color::Rgb(_) => ColorTier::TrueColor,
        }
    }
}

impl From<NamedColor> for Color {
    fn from(color: NamedColor) -> Self {
        Color::Named(color)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

// ─── Plane ──────────────────────────────────────────────────────────────────

/// Where a color is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Plane {
    Foreground,
    Background,
}

impl Plane {
    /// Code that resets this plane to the terminal default.
    pub const fn off_code(self) -> u8 {
        match self {
            Plane::Foreground => FG_RESET,
            Plane::Background => BG_RESET,
        }
    }

    /// Prefix of the extended (`;5;` / `;2;`) color forms.
    pub const fn extended_prefix(self) -> u8 {
        match self {
            Plane::Foreground => 38,
            Plane::Background => 48,
        }
    }
}

// ─── ColorTier ──────────────────────────────────────────────────────────────

/// Rendering capability of the output terminal.
///
/// Ordered by fidelity: a color whose native encoding is above the active
/// tier is downsampled before it is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorTier {
    /// No escape sequences at all.
    NoColor,
    /// The 16 ANSI colors.
    Ansi16,
    /// The 256-color palette.
    Extended256,
    /// 24-bit color.
    TrueColor,
}

impl ColorTier {
    /// Every tier, lowest first.
    pub const ALL: [ColorTier; 4] = [
        ColorTier::NoColor,
        ColorTier::Ansi16,
        ColorTier::Extended256,
        ColorTier::TrueColor,
    ];

    /// Canonical lowercase name, accepted back by `FromStr`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorTier::NoColor => "none",
            ColorTier::Ansi16 => "ansi16",
            ColorTier::Extended256 => "ansi256",
            ColorTier::TrueColor => "truecolor",
        }
    }
}

impl fmt::Display for ColorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "no-color" | "nocolor" | "0" => Ok(ColorTier::NoColor),
            "ansi16" | "16" | "1" => Ok(ColorTier::Ansi16),
            "ansi256" | "256" | "extended256" | "2" => Ok(ColorTier::Extended256),
            "truecolor" | "24bit" | "3" => Ok(ColorTier::TrueColor),
            other => Err(format!(
                "Unknown color tier: {} (expected none, ansi16, ansi256 or truecolor)",
                other
            )),
        }
    }
}
