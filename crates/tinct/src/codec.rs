//! SGR escape sequence encoding and decoding.
//!
//! [`encode`] turns one style component (an attribute, or a color on a
//! plane) into a [`CodePair`] for a given [`ColorTier`], downsampling colors
//! the tier cannot show. [`decode`] reads styling back off the front of a
//! string produced by [`Style::paint`](crate::Style::paint).
//!
//! Decoding is permissive. Unknown codes are skipped, truncated extended
//! colors end the walk, and anything that is not an SGR sequence at all
//! yields an empty style with the input returned untouched.
//!
//! # Example
//!
//! ```rust
//! use tinct::codec::{decode, encode, Component};
//! use tinct::{Attribute, Color, ColorTier, NamedColor, Plane, Style};
//!
//! let pair = encode(
//!     Component::Color(Color::Named(NamedColor::Red), Plane::Foreground),
//!     ColorTier::Ansi16,
//! );
//! assert_eq!(pair.start, "\x1b[31m");
//! assert_eq!(pair.end, "\x1b[39m");
//!
//! let (style, text) = decode("\x1b[1m\x1b[31mhi\x1b[39m\x1b[22m");
//! assert_eq!(text, "hi");
//! assert_eq!(style, Style::new().attribute(Attribute::Bold).fg(NamedColor::Red));
//! ```

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::color::{clamp_channel, Attribute, Color, ColorTier, NamedColor, Plane, Rgb};
use crate::style::Style;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Full reset of every attribute and color.
pub const RESET: &str = "\x1b[0m";

/// Matches CSI sequences and 7-bit C1 two-byte escapes.
static ANSI_ESCAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1B(?:[@-Z\x5C-_]|\[[0-?]*[ -/]*[@-~])").expect("valid escape pattern")
});

/// Codes that only ever switch something off.
const OFF_CODES: [u32; 13] = [0, 22, 23, 24, 25, 26, 27, 28, 29, 39, 49, 54, 55];

// ─── Encoding ───────────────────────────────────────────────────────────────

/// Opening and closing escape fragments for one style component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodePair {
    pub start: String,
    pub end: String,
}

impl CodePair {
    fn new(on: impl std::fmt::Display, off: impl std::fmt::Display) -> Self {
        Self {
            start: sgr(on),
            end: sgr(off),
        }
    }

    /// True when neither fragment emits anything.
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }
}

/// A single piece of a style that maps to one [`CodePair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Attribute(Attribute),
    Color(Color, Plane),
}

impl From<Attribute> for Component {
    fn from(attribute: Attribute) -> Self {
        Component::Attribute(attribute)
    }
}

fn sgr(params: impl std::fmt::Display) -> String {
    format!("{}{}m", CSI, params)
}

/// Encodes one component for the given tier.
///
/// Attributes are tier independent. Colors above the tier are downsampled
/// first: true color becomes `38;5;n` below [`ColorTier::TrueColor`], and
/// palette colors become plain 16-color codes at [`ColorTier::Ansi16`].
/// At [`ColorTier::NoColor`] the pair is empty.
pub fn encode(component: Component, tier: ColorTier) -> CodePair {
    if tier == ColorTier::NoColor {
        return CodePair::default();
    }

    match component {
        Component::Attribute(attribute) => {
            CodePair::new(attribute.on_code(), attribute.off_code())
        }
        Component::Color(color, plane) => {
            let prefix = plane.extended_prefix();
            let on = match color.downsample(tier) {
                Color::Named(named) => named.code(plane).to_string(),
                Color::Indexed(index) => format!("{};5;{}", prefix, index),
                Color::Rgb(Rgb(r, g, b)) => format!("{};2;{};{};{}", prefix, r, g, b),
            };
            CodePair::new(on, plane.off_code())
        }
    }
}

// ─── Decoding ───────────────────────────────────────────────────────────────

/// Splits an SGR parameter list into numbers.
///
/// Empty tokens are dropped and numbers too large for a `u32` saturate.
/// Returns `None` if any token is not a number.
fn parse_params(params: &str) -> Option<Vec<u32>> {
    params
        .split(';')
        .filter(|token| !token.is_empty())
        .map(|token| {
            if token.bytes().all(|b| b.is_ascii_digit()) {
                Some(token.parse::<u32>().unwrap_or(u32::MAX))
            } else {
                None
            }
        })
        .collect()
}

fn is_off_only(codes: &[u32]) -> bool {
    codes.iter().all(|code| OFF_CODES.contains(code))
}

/// Styling collected while walking one or more parameter lists.
#[derive(Default)]
struct Collected {
    fg: Option<Color>,
    bg: Option<Color>,
    attributes: BTreeSet<Attribute>,
}

impl Collected {
    fn set(&mut self, plane: Plane, color: Color) {
        match plane {
            Plane::Foreground => self.fg = Some(color),
            Plane::Background => self.bg = Some(color),
        }
    }

    /// Walks one parameter list left to right. Later colors overwrite
    /// earlier ones on the same plane.
    fn apply(&mut self, codes: &[u32]) {
        let mut i = 0;
        while i < codes.len() {
            let code = codes[i];

            if code == 38 || code == 48 {
                let plane = if code == 38 {
                    Plane::Foreground
                } else {
                    Plane::Background
                };
                match codes.get(i + 1) {
                    Some(5) => {
                        let Some(&index) = codes.get(i + 2) else {
                            tracing::trace!(code, "truncated 256-color sequence");
                            return;
                        };
                        self.set(plane, Color::Indexed(clamp_u32(index)));
                        i += 3;
                    }
                    Some(2) => {
                        let [r, g, b] = match codes.get(i + 2..i + 5) {
                            Some(&[r, g, b]) => [r, g, b],
                            _ => {
                                tracing::trace!(code, "truncated true color sequence");
                                return;
                            }
                        };
                        let rgb = Rgb(clamp_u32(r), clamp_u32(g), clamp_u32(b));
                        self.set(plane, Color::Rgb(rgb));
                        i += 5;
                    }
                    Some(mode) => {
                        tracing::trace!(code, mode, "skipping unknown extended color mode");
                        i += 2;
                    }
                    None => return,
                }
                continue;
            }

            if let Some(attribute) = Attribute::from_on_code(code) {
                self.attributes.insert(attribute);
            } else if let Some(named) = NamedColor::from_fg_code(code) {
                self.fg = Some(Color::Named(named));
            } else if let Some(named) = NamedColor::from_bg_code(code) {
                self.bg = Some(Color::Named(named));
            } else {
                tracing::trace!(code, "skipping unknown SGR code");
            }
            i += 1;
        }
    }

    /// True when every code is a full reset or closes something collected.
    fn closes(&self, codes: &[u32]) -> bool {
        codes.iter().all(|&code| {
            code == 0
                || (code == u32::from(Plane::Foreground.off_code()) && self.fg.is_some())
                || (code == u32::from(Plane::Background.off_code()) && self.bg.is_some())
                || self
                    .attributes
                    .iter()
                    .any(|attribute| u32::from(attribute.off_code()) == code)
        })
    }

    fn into_style(self) -> Style {
        let mut style = Style::new();
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        self.attributes
            .into_iter()
            .fold(style, |style, attribute| style.attribute(attribute))
    }
}

fn clamp_u32(value: u32) -> u8 {
    clamp_channel(i32::try_from(value).unwrap_or(i32::MAX))
}

/// Splits a leading SGR sequence off `text`: `(parameters, remainder)`.
fn split_leading_sgr(text: &str) -> Option<(&str, &str)> {
    let after = text.strip_prefix(CSI)?;
    let end = after.find('m')?;
    Some((&after[..end], &after[end + 1..]))
}

/// Removes trailing SGR sequences that close the collected style.
///
/// Off codes for anything the leading sequences did not open stay in the
/// text, since they belong to styling nested inside it.
fn strip_trailing_closes<'a>(mut text: &'a str, collected: &Collected) -> &'a str {
    while text.ends_with('m') {
        let Some(start) = text.rfind(CSI) else {
            break;
        };
        let params = &text[start + CSI.len()..text.len() - 1];
        match parse_params(params) {
            Some(codes) if collected.closes(&codes) => text = &text[..start],
            _ => break,
        }
    }
    text
}

/// Reads the style off the front of `text`.
///
/// Consecutive leading SGR sequences are folded into one [`Style`].
/// Trailing sequences are stripped while they hold only full resets or off
/// codes for components of that style. Returns `(Style::new(), text)` unchanged when `text` does not
/// start with a well-formed SGR sequence.
///
/// Recognized codes: attribute on-codes (`1`–`9`, `21`, `51`–`53`), named
/// colors (`30`–`37`, `90`–`97`, `40`–`47`, `100`–`107`) and the extended
/// forms `38;5;n`, `48;5;n`, `38;2;r;g;b`, `48;2;r;g;b`. Everything else is
/// skipped.
pub fn decode(text: &str) -> (Style, String) {
    let unstyled = || (Style::new(), text.to_string());

    let Some((params, mut rest)) = split_leading_sgr(text) else {
        if text.starts_with(CSI) {
            tracing::trace!("leading escape is not a terminated SGR sequence");
        }
        return unstyled();
    };
    let Some(codes) = parse_params(params) else {
        tracing::trace!(params, "leading SGR sequence has non-numeric parameters");
        return unstyled();
    };

    let mut collected = Collected::default();
    collected.apply(&codes);

    while let Some((params, remainder)) = split_leading_sgr(rest) {
        match parse_params(params) {
            Some(codes) if !is_off_only(&codes) => {
                collected.apply(&codes);
                rest = remainder;
            }
            _ => break,
        }
    }

    let text = strip_trailing_closes(rest, &collected).to_string();
    (collected.into_style(), text)
}

/// Removes every ANSI escape from `text`.
///
/// Covers CSI sequences of any kind (SGR, cursor movement, erase) and 7-bit
/// C1 two-byte escapes. Incomplete sequences are left alone.
///
/// ```rust
/// use tinct::strip_ansi;
///
/// assert_eq!(strip_ansi("\x1b[31mred\x1b[0m"), "red");
/// assert_eq!(strip_ansi("hello\x1b["), "hello\x1b[");
/// ```
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}
