//! Incremental styling of already-styled strings.
//!
//! [`restyle`] reads the style off a string produced by this crate, layers a
//! new style on top and paints the plain text again. Repeated calls
//! accumulate attributes, and the latest color on each plane wins:
//!
//! ```rust
//! use tinct::{Attribute, ColorTier, NamedColor, Restyle};
//!
//! let tier = ColorTier::Ansi16;
//! let text = "hi"
//!     .with_fg(NamedColor::Red, tier)
//!     .with_attribute(Attribute::Bold, tier)
//!     .with_fg(NamedColor::Blue, tier);
//!
//! assert_eq!(text, "\x1b[1m\x1b[34mhi\x1b[39m\x1b[22m");
//! ```

use crate::codec::decode;
use crate::color::{Attribute, Color, ColorTier};
use crate::style::Style;

/// Merges `overlay` over the style already on `text` and repaints it.
///
/// Text without a leading style is treated as plain.
pub fn restyle(text: &str, overlay: &Style, tier: ColorTier) -> String {
    let (current, plain) = decode(text);
    current.merge(overlay).paint(&plain, tier)
}

/// Styling methods on string slices, built on [`restyle`].
pub trait Restyle {
    /// Layers `overlay` over this string's current style.
    fn restyled(&self, overlay: &Style, tier: ColorTier) -> String;

    /// Sets the foreground color.
    fn with_fg(&self, color: impl Into<Color>, tier: ColorTier) -> String {
        self.restyled(&Style::new().fg(color), tier)
    }

    /// Sets the background color.
    fn with_bg(&self, color: impl Into<Color>, tier: ColorTier) -> String {
        self.restyled(&Style::new().bg(color), tier)
    }

    /// Adds an attribute.
    fn with_attribute(&self, attribute: Attribute, tier: ColorTier) -> String {
        self.restyled(&Style::new().attribute(attribute), tier)
    }
}

impl Restyle for str {
    fn restyled(&self, overlay: &Style, tier: ColorTier) -> String {
        restyle(self, overlay, tier)
    }
}
