//! Immutable fluent builder for styled output.
//!
//! Every method returns a new [`StyleBuilder`], so partially built styles can
//! be stored and reused as bases:
//!
//! ```rust
//! use tinct::{ColorTier, StyleBuilder};
//!
//! let style = StyleBuilder::new().tier(ColorTier::Ansi16);
//! let warn = style.clone().yellow().bold();
//!
//! assert_eq!(warn.paint("careful"), "\x1b[33m\x1b[1mcareful\x1b[22m\x1b[39m");
//! assert_eq!(style.on().red().paint("x"), "\x1b[41mx\x1b[49m");
//! ```
//!
//! # Colors and planes
//!
//! Color methods set the foreground, unless [`StyleBuilder::on`] was called
//! just before, in which case that one color goes to the background.
//!
//! # Rendering
//!
//! [`StyleBuilder::paint`] renders at the builder's fixed tier if one was set
//! with [`StyleBuilder::tier`], and at [`detect_tier`] otherwise. Empty input
//! always renders as `""`. A [`visible`](StyleBuilder::visible) builder renders
//! `""` when colors are off.
//!
//! # Extensions
//!
//! [`StyleBuilder::extend`] registers named styles that
//! [`StyleBuilder::named`] looks up before falling back to CSS names and hex:
//!
//! ```rust
//! use tinct::{ColorTier, StyleBuilder};
//!
//! let base = StyleBuilder::new().tier(ColorTier::Ansi16);
//! let theme = base
//!     .clone()
//!     .extend("primary", "blue")
//!     .extend("secondary", (169, 169, 169))
//!     .extend("success", base.green());
//!
//! assert_eq!(theme.clone().named("primary")?.paint("ok"), "\x1b[94mok\x1b[39m");
//! assert_eq!(theme.clone().named("secondary")?.paint("ok"), "\x1b[37mok\x1b[39m");
//! assert_eq!(theme.named("success")?.paint("ok"), "\x1b[32mok\x1b[39m");
//! # Ok::<(), tinct::ColorError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::color::{Attribute, Color, ColorTier, NamedColor, Rgb};
use crate::detect::detect_tier;
use crate::error::ColorError;
use crate::names::resolve_color;
use crate::style::Style;
use crate::stylize::stylize;

/// A named style registered with [`StyleBuilder::extend`].
#[derive(Debug, Clone, PartialEq)]
pub enum Extension {
    /// A CSS color name or hex literal, resolved when used.
    Color(String),
    /// A fixed RGB color.
    Rgb(Rgb),
    /// A complete style.
    Builder(StyleBuilder),
}

impl From<&str> for Extension {
    fn from(value: &str) -> Self {
        Extension::Color(value.to_string())
    }
}

impl From<String> for Extension {
    fn from(value: String) -> Self {
        Extension::Color(value)
    }
}

impl From<Rgb> for Extension {
    fn from(rgb: Rgb) -> Self {
        Extension::Rgb(rgb)
    }
}

impl From<(u8, u8, u8)> for Extension {
    fn from(rgb: (u8, u8, u8)) -> Self {
        Extension::Rgb(rgb.into())
    }
}

impl From<StyleBuilder> for Extension {
    fn from(builder: StyleBuilder) -> Self {
        Extension::Builder(builder)
    }
}

/// Immutable fluent style builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleBuilder {
    fg: Option<Color>,
    bg: Option<Color>,
    attributes: Vec<Attribute>,
    on: bool,
    tier: Option<ColorTier>,
    visible: bool,
    extensions: BTreeMap<String, Extension>,
}

macro_rules! named_colors {
    ($($method:ident => $color:ident),* $(,)?) => {
        $(
            #[doc = concat!("Applies [`NamedColor::", stringify!($color), "`].")]
            pub fn $method(self) -> Self {
                self.color(NamedColor::$color)
            }
        )*
    };
}

macro_rules! attributes {
    ($($method:ident => $attribute:ident),* $(,)?) => {
        $(
            #[doc = concat!("Adds [`Attribute::", stringify!($attribute), "`].")]
            pub fn $method(self) -> Self {
                self.attribute(Attribute::$attribute)
            }
        )*
    };
}

impl StyleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Colors ─────────────────────────────────────────────────────────────

    /// Routes the next color to the background.
    pub fn on(mut self) -> Self {
        self.on = true;
        self
    }

    /// Applies any color to the current plane.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        let color = color.into();
        if self.on {
            self.bg = Some(color);
            self.on = false;
        } else {
            self.fg = Some(color);
        }
        self
    }

    named_colors! {
        black => Black,
        red => Red,
        green => Green,
        yellow => Yellow,
        blue => Blue,
        magenta => Magenta,
        cyan => Cyan,
        white => White,
        bright_black => BrightBlack,
        bright_red => BrightRed,
        bright_green => BrightGreen,
        bright_yellow => BrightYellow,
        bright_blue => BrightBlue,
        bright_magenta => BrightMagenta,
        bright_cyan => BrightCyan,
        bright_white => BrightWhite,
        gray => BrightBlack,
        grey => BrightBlack,
    }

    /// 256-color palette index, clamped into 0–255.
    pub fn color256(self, index: i32) -> Self {
        self.color(Color::indexed(index))
    }

    /// True color, each component clamped into 0–255.
    pub fn rgb(self, r: i32, g: i32, b: i32) -> Self {
        self.color(Color::rgb(r, g, b))
    }

    /// True color from a `#rgb` / `#rrggbb` literal.
    pub fn hex(self, literal: &str) -> Result<Self, ColorError> {
        let rgb = Rgb::from_hex(literal)?;
        Ok(self.color(rgb))
    }

    /// Applies a registered extension, a CSS color name or a hex literal.
    ///
    /// A builder extension replaces this builder's colors and attributes but
    /// keeps its tier and extensions.
    pub fn named(self, name: &str) -> Result<Self, ColorError> {
        match self.extensions.get(name).cloned() {
            Some(Extension::Color(literal)) => {
                let rgb = resolve_color(&literal)?;
                Ok(self.color(rgb))
            }
            Some(Extension::Rgb(rgb)) => Ok(self.color(rgb)),
            Some(Extension::Builder(other)) => Ok(Self {
                fg: other.fg,
                bg: other.bg,
                attributes: other.attributes,
                on: other.on,
                visible: other.visible,
                tier: self.tier,
                extensions: self.extensions,
            }),
            None => {
                let rgb = resolve_color(name)?;
                Ok(self.color(rgb))
            }
        }
    }

    // ─── Attributes ─────────────────────────────────────────────────────────

    /// Adds an attribute, keeping first-insertion order.
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        if !self.attributes.contains(&attribute) {
            self.attributes.push(attribute);
        }
        self
    }

    attributes! {
        bold => Bold,
        dim => Dim,
        faint => Dim,
        dark => Dim,
        italic => Italic,
        underline => Underline,
        blink => SlowBlink,
        slow_blink => SlowBlink,
        rapid_blink => RapidBlink,
        inverse => Inverse,
        reverse => Inverse,
        hidden => Hidden,
        concealed => Hidden,
        strike => Strike,
        strikethrough => Strike,
        double_underline => DoubleUnderline,
        framed => Framed,
        encircle => Encircled,
        circle => Encircled,
        overline => Overline,
    }

    // ─── Configuration ──────────────────────────────────────────────────────

    /// Renders nothing at all when colors are off.
    pub fn visible(mut self) -> Self {
        self.visible = true;
        self
    }

    /// Fixes the tier instead of detecting it on each render.
    pub fn tier(mut self, tier: ColorTier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn fixed_tier(&self) -> Option<ColorTier> {
        self.tier
    }

    /// Registers a named style for [`StyleBuilder::named`].
    pub fn extend(mut self, name: impl Into<String>, extension: impl Into<Extension>) -> Self {
        self.extensions.insert(name.into(), extension.into());
        self
    }

    /// The accumulated colors and attributes as a [`Style`].
    pub fn style(&self) -> Style {
        let mut style = Style::new();
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        self.attributes
            .iter()
            .fold(style, |style, attribute| style.attribute(*attribute))
    }

    // ─── Rendering ──────────────────────────────────────────────────────────

    /// Renders `value` at the fixed or detected tier.
    pub fn paint(&self, value: impl Display) -> String {
        let tier = self.tier.unwrap_or_else(detect_tier);
        self.paint_with(value, tier)
    }

    /// Renders `value` at an explicit tier.
    pub fn paint_with(&self, value: impl Display, tier: ColorTier) -> String {
        if self.visible && tier == ColorTier::NoColor {
            return String::new();
        }
        let text = value.to_string();
        if text.is_empty() {
            return text;
        }
        stylize(&text, tier, self.fg, self.bg, &self.attributes)
    }

    /// Joins `items` with `separator` and renders the result.
    pub fn paint_joined<I>(&self, items: I, separator: &str) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let joined = items
            .into_iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(separator);
        self.paint(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ansi16() -> StyleBuilder {
        StyleBuilder::new().tier(ColorTier::Ansi16)
    }

    // =========================================================================
    // Rendering rules
    // =========================================================================

    #[test]
    fn test_empty_text() {
        assert_eq!(ansi16().red().paint(""), "");
    }

    #[test]
    fn test_visible() {
        assert_eq!(ansi16().visible().paint("foo"), "foo");
        assert_eq!(ansi16().red().visible().paint("foo"), "\x1b[31mfoo\x1b[39m");

        let off = StyleBuilder::new().tier(ColorTier::NoColor);
        assert_eq!(off.clone().visible().paint("foo"), "");
        assert_eq!(off.red().visible().paint("foo"), "");
    }

    #[test]
    fn test_disabled() {
        let off = StyleBuilder::new().tier(ColorTier::NoColor);
        assert_eq!(off.black().paint("foo"), "foo");
    }

    #[test]
    fn test_paint_with_overrides_fixed_tier() {
        let style = StyleBuilder::new().tier(ColorTier::NoColor).red();
        assert_eq!(
            style.paint_with("foo", ColorTier::Ansi16),
            "\x1b[31mfoo\x1b[39m"
        );
    }

    #[test]
    fn test_display_values() {
        assert_eq!(ansi16().black().paint(42), "\x1b[30m42\x1b[39m");
        assert_eq!(ansi16().black().paint(1.5), "\x1b[30m1.5\x1b[39m");
        assert_eq!(ansi16().black().paint(true), "\x1b[30mtrue\x1b[39m");
    }

    #[test]
    fn test_paint_joined() {
        let black = ansi16().black();
        assert_eq!(black.paint_joined(["a", "b", "c"], " "), "\x1b[30ma b c\x1b[39m");
        assert_eq!(black.paint_joined(["a", "b", "c"], ""), "\x1b[30mabc\x1b[39m");
        assert_eq!(black.paint_joined([1, 2, 3], ", "), "\x1b[30m1, 2, 3\x1b[39m");
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    #[test]
    fn test_attributes() {
        let cases = [
            (ansi16().bold(), "\x1b[1mfoo\x1b[22m"),
            (ansi16().dim(), "\x1b[2mfoo\x1b[22m"),
            (ansi16().faint(), "\x1b[2mfoo\x1b[22m"),
            (ansi16().dark(), "\x1b[2mfoo\x1b[22m"),
            (ansi16().italic(), "\x1b[3mfoo\x1b[23m"),
            (ansi16().underline(), "\x1b[4mfoo\x1b[24m"),
            (ansi16().blink(), "\x1b[5mfoo\x1b[25m"),
            (ansi16().rapid_blink(), "\x1b[6mfoo\x1b[25m"),
            (ansi16().reverse(), "\x1b[7mfoo\x1b[27m"),
            (ansi16().hidden(), "\x1b[8mfoo\x1b[28m"),
            (ansi16().strikethrough(), "\x1b[9mfoo\x1b[29m"),
            (ansi16().double_underline(), "\x1b[21mfoo\x1b[24m"),
            (ansi16().framed(), "\x1b[51mfoo\x1b[54m"),
            (ansi16().circle(), "\x1b[52mfoo\x1b[54m"),
            (ansi16().overline(), "\x1b[53mfoo\x1b[55m"),
        ];
        for (builder, expected) in cases {
            assert_eq!(builder.paint("foo"), expected);
        }
    }

    #[test]
    fn test_attributes_deduplicated_in_insertion_order() {
        let style = ansi16().underline().bold().underline();
        assert_eq!(style.paint("x"), "\x1b[4m\x1b[1mx\x1b[22m\x1b[24m");
    }

    // =========================================================================
    // Colors
    // =========================================================================

    #[test]
    fn test_foreground_names() {
        let cases = [
            (ansi16().black(), 30),
            (ansi16().red(), 31),
            (ansi16().green(), 32),
            (ansi16().yellow(), 33),
            (ansi16().blue(), 34),
            (ansi16().magenta(), 35),
            (ansi16().cyan(), 36),
            (ansi16().white(), 37),
            (ansi16().bright_black(), 90),
            (ansi16().bright_red(), 91),
            (ansi16().bright_green(), 92),
            (ansi16().bright_yellow(), 93),
            (ansi16().bright_blue(), 94),
            (ansi16().bright_magenta(), 95),
            (ansi16().bright_cyan(), 96),
            (ansi16().bright_white(), 97),
            (ansi16().gray(), 90),
            (ansi16().grey(), 90),
        ];
        for (builder, code) in cases {
            assert_eq!(builder.paint("foo"), format!("\x1b[{}mfoo\x1b[39m", code));
        }
    }

    #[test]
    fn test_background_names() {
        let cases = [
            (ansi16().on().black(), 40),
            (ansi16().on().white(), 47),
            (ansi16().on().bright_black(), 100),
            (ansi16().on().bright_white(), 107),
            (ansi16().on().gray(), 100),
            (ansi16().on().grey(), 100),
        ];
        for (builder, code) in cases {
            assert_eq!(builder.paint("foo"), format!("\x1b[{}mfoo\x1b[49m", code));
        }
    }

    #[test]
    fn test_on_applies_to_next_color_only() {
        let style = ansi16().on().blue().yellow();
        assert_eq!(style.paint("x"), "\x1b[33m\x1b[44mx\x1b[49m\x1b[39m");
    }

    #[test]
    fn test_rgb_and_hex_per_tier() -> Result<(), ColorError> {
        let cases = [
            (ColorTier::TrueColor, "\x1b[38;2;20;40;60mfoo\x1b[39m", "\x1b[48;2;20;40;60mfoo\x1b[49m"),
            (ColorTier::Extended256, "\x1b[38;5;23mfoo\x1b[39m", "\x1b[48;5;23mfoo\x1b[49m"),
            (ColorTier::Ansi16, "\x1b[30mfoo\x1b[39m", "\x1b[40mfoo\x1b[49m"),
            (ColorTier::NoColor, "foo", "foo"),
        ];
        for (tier, fg, bg) in cases {
            let style = StyleBuilder::new().tier(tier);
            assert_eq!(style.clone().rgb(20, 40, 60).paint("foo"), fg);
            assert_eq!(style.clone().hex("14283c")?.paint("foo"), fg);
            assert_eq!(style.clone().on().rgb(20, 40, 60).paint("foo"), bg);
            assert_eq!(style.on().hex("14283c")?.paint("foo"), bg);
        }
        Ok(())
    }

    #[test]
    fn test_color256() {
        let style = StyleBuilder::new().tier(ColorTier::Extended256);
        assert_eq!(style.clone().color256(208).paint("x"), "\x1b[38;5;208mx\x1b[39m");
        assert_eq!(style.color256(999).paint("x"), "\x1b[38;5;255mx\x1b[39m");
    }

    #[test]
    fn test_hex_invalid() {
        assert!(matches!(
            ansi16().hex("#12"),
            Err(ColorError::InvalidFormat { .. })
        ));
    }

    // =========================================================================
    // Extensions and names
    // =========================================================================

    #[test]
    fn test_extend() -> Result<(), ColorError> {
        let base = ansi16();
        let theme = base
            .clone()
            .extend("primary", "blue")
            .extend("secondary", (169, 169, 169))
            .extend("success", base.green());

        assert_eq!(theme.clone().named("primary")?.paint("foo"), "\x1b[94mfoo\x1b[39m");
        assert_eq!(theme.clone().named("secondary")?.paint("foo"), "\x1b[37mfoo\x1b[39m");
        assert_eq!(theme.named("success")?.paint("foo"), "\x1b[32mfoo\x1b[39m");
        Ok(())
    }

    #[test]
    fn test_builder_extension_keeps_tier() -> Result<(), ColorError> {
        let shout = StyleBuilder::new().tier(ColorTier::TrueColor).red().bold();
        let style = ansi16().blue().extend("shout", shout);
        let out = style.named("shout")?.paint("hey");
        assert_eq!(out, "\x1b[31m\x1b[1mhey\x1b[22m\x1b[39m");
        Ok(())
    }

    #[test]
    fn test_named_css_and_hex() -> Result<(), ColorError> {
        let style = StyleBuilder::new().tier(ColorTier::TrueColor);
        assert_eq!(
            style.clone().named("rebeccapurple")?.paint("x"),
            "\x1b[38;2;102;51;153mx\x1b[39m"
        );
        assert_eq!(
            style.clone().on().named("#fc0")?.paint("x"),
            "\x1b[48;2;255;204;0mx\x1b[49m"
        );
        assert!(style.named("nope").is_err());
        Ok(())
    }

    #[test]
    fn test_invalid_extension_literal() {
        let style = ansi16().extend("broken", "not a color");
        assert!(style.named("broken").is_err());
    }

    #[test]
    fn test_style_snapshot() {
        let style = ansi16().on().cyan().red().italic().bold().style();
        assert_eq!(
            style,
            Style::new()
                .fg(NamedColor::Red)
                .bg(NamedColor::Cyan)
                .attribute(Attribute::Bold)
                .attribute(Attribute::Italic)
        );
    }

    #[test]
    fn test_builders_are_immutable() {
        let base = ansi16().red();
        let _bold = base.clone().bold();
        assert_eq!(base.paint("x"), "\x1b[31mx\x1b[39m");
    }
}
