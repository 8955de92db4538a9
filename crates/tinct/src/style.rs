//! The style descriptor: an immutable set of colors and attributes.
//!
//! A [`Style`] holds at most one foreground color, at most one background
//! color and a set of [`Attribute`]s. Every method takes `self` and returns a
//! new value, so styles can be shared freely and composed with [`Style::merge`].
//!
//! # Serialization order
//!
//! [`Style::to_escape_sequence`] always emits components in the same order:
//! attributes by ascending on-code, then the foreground, then the background.
//! The closing sequence lists the matching off-codes in reverse, so the last
//! component opened is the first one closed.
//!
//! ```rust
//! use tinct::{Attribute, ColorTier, NamedColor, Style};
//!
//! let style = Style::new()
//!     .fg(NamedColor::Red)
//!     .attribute(Attribute::Underline)
//!     .attribute(Attribute::Bold);
//!
//! let (open, close) = style.to_escape_sequence(ColorTier::Ansi16);
//! assert_eq!(open, "\x1b[1m\x1b[4m\x1b[31m");
//! assert_eq!(close, "\x1b[39m\x1b[24m\x1b[22m");
//! ```

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codec::{encode, Component};
use crate::color::{Attribute, Color, ColorTier, Plane};

/// Foreground, background and attributes applied to a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    fg: Option<Color>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    bg: Option<Color>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "BTreeSet::is_empty"))]
    attributes: BTreeSet<Attribute>,
}

impl Style {
    /// An empty style. Painting with it leaves text untouched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color, replacing any previous one.
    pub fn fg(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Sets the background color, replacing any previous one.
    pub fn bg(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Sets a color on the given plane.
    pub fn color(self, color: impl Into<Color>, plane: Plane) -> Self {
        match plane {
            Plane::Foreground => self.fg(color),
            Plane::Background => self.bg(color),
        }
    }

    /// Adds an attribute. Adding one that is already present is a no-op.
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.insert(attribute);
        self
    }

    pub fn foreground(&self) -> Option<Color> {
        self.fg
    }

    pub fn background(&self) -> Option<Color> {
        self.bg
    }

    /// Attributes in canonical (ascending on-code) order.
    pub fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.attributes.iter().copied()
    }

    pub fn has_attribute(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }

    /// True when the style sets no color and no attribute.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Layers `overlay` on top of this style.
    ///
    /// Attributes are united. Each color plane takes the overlay's color when
    /// it has one and keeps this style's color otherwise.
    ///
    /// ```rust
    /// use tinct::{NamedColor, Style};
    ///
    /// let base = Style::new().fg(NamedColor::Red).bg(NamedColor::White);
    /// let merged = base.merge(&Style::new().fg(NamedColor::Blue));
    /// assert_eq!(merged, Style::new().fg(NamedColor::Blue).bg(NamedColor::White));
    /// ```
    pub fn merge(&self, overlay: &Style) -> Style {
        Style {
            fg: overlay.fg.or(self.fg),
            bg: overlay.bg.or(self.bg),
            attributes: self.attributes.union(&overlay.attributes).copied().collect(),
        }
    }

    /// Components in canonical serialization order.
    pub fn components(&self) -> Vec<Component> {
        let mut components: Vec<Component> =
            self.attributes().map(Component::Attribute).collect();
        if let Some(fg) = self.fg {
            components.push(Component::Color(fg, Plane::Foreground));
        }
        if let Some(bg) = self.bg {
            components.push(Component::Color(bg, Plane::Background));
        }
        components
    }

    /// Opening and closing escapes for this style at `tier`.
    ///
    /// Both are empty at [`ColorTier::NoColor`] or when the style is empty.
    pub fn to_escape_sequence(&self, tier: ColorTier) -> (String, String) {
        if tier == ColorTier::NoColor || self.is_empty() {
            return (String::new(), String::new());
        }

        let pairs: Vec<_> = self
            .components()
            .into_iter()
            .map(|component| encode(component, tier))
            .collect();

        let open: String = pairs.iter().map(|pair| pair.start.as_str()).collect();
        let close: String = pairs.iter().rev().map(|pair| pair.end.as_str()).collect();
        (open, close)
    }

    /// Wraps `text` in this style's escapes.
    ///
    /// This is a plain wrap: embedded escapes and line breaks are not
    /// rewritten. Use [`stylize`](crate::stylize()) for text that may contain
    /// either. [`decode`](crate::decode) reads the result back.
    pub fn paint(&self, text: &str, tier: ColorTier) -> String {
        let (open, close) = self.to_escape_sequence(tier);
        if open.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", open, text, close)
    }
}
