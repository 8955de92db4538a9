//! # Tinct - ANSI Text Styling
//!
//! `tinct` wraps text in ANSI SGR escape sequences, picking the richest
//! encoding the terminal can show and reading styling back out of strings it
//! produced.
//!
//! ## Core Concepts
//!
//! - [`ColorTier`]: what the terminal can render (none, 16, 256, true color)
//! - [`Color`]: a named, 256-palette or RGB color, downsampled to fit the tier
//! - [`Style`]: an immutable set of foreground, background and [`Attribute`]s
//! - [`stylize`]: styles text that may already contain escapes or line breaks
//! - [`decode`]: reads a [`Style`] and the plain text back from styled output
//! - [`StyleBuilder`]: fluent, immutable front end over all of the above
//!
//! ## Quick Start
//!
//! ```rust
//! use tinct::{ColorTier, StyleBuilder};
//!
//! let style = StyleBuilder::new().tier(ColorTier::Ansi16);
//!
//! assert_eq!(style.clone().red().paint("error"), "\x1b[31merror\x1b[39m");
//! assert_eq!(
//!     style.green().bold().paint("ok"),
//!     "\x1b[32m\x1b[1mok\x1b[22m\x1b[39m"
//! );
//! ```
//!
//! ## Color Tiers
//!
//! Colors above the active tier are reduced before they are written: true
//! color becomes the nearest 256-palette entry, which becomes the nearest of
//! the 16 ANSI colors.
//!
//! ```rust
//! use tinct::{stylize, Color, ColorTier};
//!
//! let teal = Some(Color::rgb(20, 40, 60));
//! assert_eq!(stylize("x", ColorTier::TrueColor, teal, None, &[]), "\x1b[38;2;20;40;60mx\x1b[39m");
//! assert_eq!(stylize("x", ColorTier::Extended256, teal, None, &[]), "\x1b[38;5;23mx\x1b[39m");
//! assert_eq!(stylize("x", ColorTier::Ansi16, teal, None, &[]), "\x1b[30mx\x1b[39m");
//! assert_eq!(stylize("x", ColorTier::NoColor, teal, None, &[]), "x");
//! ```
//!
//! When no tier is given, [`detect_tier`] inspects the environment
//! (`NO_COLOR`, `FORCE_COLOR`, `COLORTERM`, `TERM`, ...). Override it
//! process-wide with [`set_tier_detector`].
//!
//! ## Round Trips
//!
//! ```rust
//! use tinct::{decode, Attribute, ColorTier, NamedColor, Style};
//!
//! let style = Style::new().fg(NamedColor::Cyan).attribute(Attribute::Italic);
//! let painted = style.paint("hello", ColorTier::Ansi16);
//! assert_eq!(decode(&painted), (style, "hello".to_string()));
//! ```

pub mod builder;
pub mod codec;
pub mod color;
pub mod colorspace;
pub mod detect;
mod error;
pub mod names;
pub mod restyle;
pub mod style;
pub mod stylize;

// Error type
pub use error::ColorError;

// Color model
pub use color::{Attribute, Color, ColorTier, NamedColor, Plane, Rgb, BG_RESET, FG_RESET};

// Reduction
pub use colorspace::{ansi256_to_ansi16, rgb_to_ansi16, rgb_to_ansi256};

// Styles and the two public seams
pub use codec::{decode, encode, strip_ansi, CodePair, Component, CSI, RESET};
pub use style::Style;
pub use stylize::stylize;

// Front ends
pub use builder::{Extension, StyleBuilder};
pub use restyle::{restyle, Restyle};

// Tier provider
pub use detect::{
    detect_tier, detect_tier_from_env, reset_tier_detector, set_tier_detector, EnvReader,
    MockEnv, RealEnv,
};

// Named colors
pub use names::{css_color, css_colors, resolve_color};
