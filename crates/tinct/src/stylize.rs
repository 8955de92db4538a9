//! The stylize engine: wraps arbitrary text in styling that survives nesting.
//!
//! A naive `open + text + close` wrap breaks as soon as `text` already
//! carries escapes: an inner color's `39` would switch the outer color off
//! for the rest of the string, and an inner full reset would drop everything.
//! [`stylize`] rewrites the text first so that the outer style is reasserted
//! after every such close, and is closed and reopened around line breaks.
//!
//! The rewriting runs as four passes, each over the output of the previous:
//!
//! 1. after every occurrence of a component's close code, reopen the style
//! 2. after every full reset, reopen the style
//! 3. close the style before a reset-delimited segment and reopen it after
//! 4. close the style before each `\n` / `\r\n` and reopen it after
//!
//! ```rust
//! use tinct::{stylize, ColorTier, Color, NamedColor};
//!
//! let red = Some(Color::Named(NamedColor::Red));
//! let yellow = Some(Color::Named(NamedColor::Yellow));
//!
//! let inner = stylize("b", ColorTier::Ansi16, yellow, None, &[]);
//! let outer = stylize(&format!("a{}a", inner), ColorTier::Ansi16, red, None, &[]);
//! assert_eq!(
//!     outer,
//!     "\x1b[31ma\x1b[33mb\x1b[39m\x1b[31ma\x1b[39m"
//! );
//! ```

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::codec::{encode, CodePair, Component, RESET};
use crate::color::{Attribute, Color, ColorTier, Plane};

/// A segment that opens and closes with a full reset.
static NESTED_RESET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\x1b\[0m.*?\x1b\[0m").expect("valid reset pattern"));

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n").expect("valid line break pattern"));

/// Styles `text` for `tier`.
///
/// Components are opened foreground first, then background, then
/// `attributes` in the order given, and closed in reverse. At
/// [`ColorTier::NoColor`], or with nothing to apply, `text` comes back
/// unchanged.
pub fn stylize(
    text: &str,
    tier: ColorTier,
    fg: Option<Color>,
    bg: Option<Color>,
    attributes: &[Attribute],
) -> String {
    if tier == ColorTier::NoColor {
        return text.to_string();
    }

    let components = fg
        .map(|color| Component::Color(color, Plane::Foreground))
        .into_iter()
        .chain(bg.map(|color| Component::Color(color, Plane::Background)))
        .chain(attributes.iter().copied().map(Component::Attribute));

    let pairs: Vec<CodePair> = components
        .map(|component| encode(component, tier))
        .collect();
    if pairs.is_empty() {
        return text.to_string();
    }

    let start: String = pairs.iter().map(|pair| pair.start.as_str()).collect();
    let end: String = pairs.iter().rev().map(|pair| pair.end.as_str()).collect();

    let mut body = text.to_string();

    if body.contains('\x1b') {
        for pair in &pairs {
            body = body.replace(&pair.end, &format!("{}{}", pair.end, pair.start));
        }
    }

    if body.contains(RESET) {
        body = body.replace(RESET, &format!("{}{}", RESET, start));
    }

    let wrap = |caps: &Captures| format!("{}{}{}", end, &caps[0], start);
    let body = NESTED_RESET.replace_all(&body, wrap);
    let body = LINE_BREAK.replace_all(&body, wrap);

    format!("{}{}{}", start, body, end)
}
