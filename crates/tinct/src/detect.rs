//! Color tier detection from the process environment.
//!
//! The styling core never looks at the environment; it is always handed a
//! [`ColorTier`]. This module is the provider used when the caller does not
//! pick one: [`detect_tier`] runs the process-wide detector, which by
//! default probes environment variables and whether stdout is a terminal.
//!
//! # Overriding
//!
//! ```rust
//! use tinct::{detect_tier, set_tier_detector, ColorTier};
//!
//! // Force true color, e.g. in tests or for a `--color=always` flag
//! set_tier_detector(|| ColorTier::TrueColor);
//! assert_eq!(detect_tier(), ColorTier::TrueColor);
//! # tinct::reset_tier_detector();
//! ```
//!
//! # Environment rules
//!
//! Checked in order; the first rule that decides wins.
//!
//! | Variable                         | Effect                                              |
//! |----------------------------------|-----------------------------------------------------|
//! | `FORCE_COLOR`                    | `""`/`true` → 16, `false`/`0` → none, `2` → 256, `3+` → true color |
//! | `NO_COLOR` (non-empty)           | none                                                |
//! | `CLICOLOR_FORCE`                 | same grammar as `FORCE_COLOR`                       |
//! | `CLICOLOR` (non-empty)           | 16 on a terminal, none otherwise                    |
//! | `TERM=dumb`                      | none                                                |
//! | `CI`                             | 16 on known providers, none otherwise               |
//! | `TEAMCITY_VERSION`               | 16 from 9.1 on, none before                         |
//! | not a terminal                   | none                                                |
//! | `COLORTERM`                      | `truecolor`/`24bit`, `ansi256`, `ansi`              |
//! | `TERM_PROGRAM`                   | iTerm 3+ → true color, Apple Terminal → 256         |
//! | `TERM`                           | `*-256color` → 256, xterm-likes → 16                |
//! | `COLORTERM` (any value)          | 16                                                  |
//!
//! Anything else gets no color.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::color::ColorTier;

/// CI providers known to render basic colors in their logs.
const KNOWN_CI_VARS: [&str; 7] = [
    "TRAVIS",
    "CIRCLECI",
    "APPVEYOR",
    "GITLAB_CI",
    "GITHUB_ACTIONS",
    "BUILDKITE",
    "DRONE",
];

static TEAMCITY_WITH_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(9\.(0*[1-9]\d*)\.|\d{2,}\.)").expect("valid teamcity pattern")
});

static TERM_256: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-256(color)?$").expect("valid term pattern"));

static TERM_ANSI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(screen|xterm|vt100|vt220|rxvt)|color|ansi|cygwin|linux")
        .expect("valid term pattern")
});

// ─── Environment access ─────────────────────────────────────────────────────

/// Abstraction over environment variables.
pub trait EnvReader: Send + Sync {
    /// Get an environment variable value.
    fn var(&self, name: &str) -> Option<String>;
}

/// Real environment variable reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Mock environment variable reader for testing.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    /// Create an empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an environment variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

// ─── Probe ──────────────────────────────────────────────────────────────────

fn decided(rule: &'static str, tier: ColorTier) -> ColorTier {
    tracing::debug!(rule, %tier, "resolved color tier");
    tier
}

/// Reads a `FORCE_COLOR`-style variable.
///
/// `None` when the variable is unset or holds something unrecognized.
fn forced_tier(env: &dyn EnvReader, name: &str) -> Option<ColorTier> {
    let raw = env.var(name)?;
    let value = raw.trim().to_ascii_lowercase();

    match value.as_str() {
        "" | "true" => return Some(ColorTier::Ansi16),
        "false" => return Some(ColorTier::NoColor),
        _ => {}
    }

    let level = match value.parse::<i64>() {
        Ok(level) => level,
        Err(_) => saturated_level(&value)?,
    };
    Some(match level {
        i64::MIN..=0 => ColorTier::NoColor,
        1 => ColorTier::Ansi16,
        2 => ColorTier::Extended256,
        _ => ColorTier::TrueColor,
    })
}

/// Integers too large for `i64` still count as very high or very low levels.
fn saturated_level(value: &str) -> Option<i64> {
    let (digits, level) = match value.strip_prefix('-') {
        Some(rest) => (rest, i64::MIN),
        None => (value.strip_prefix('+').unwrap_or(value), i64::MAX),
    };
    let all_digits = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
    all_digits.then_some(level)
}

fn non_empty(env: &dyn EnvReader, name: &str) -> bool {
    env.var(name).is_some_and(|value| !value.is_empty())
}

fn is_set(env: &dyn EnvReader, name: &str) -> bool {
    env.var(name).is_some()
}

/// Picks a tier from environment variables.
///
/// `is_terminal` tells whether the output stream is attached to a terminal.
/// Each decision is logged at debug level with the rule that made it.
pub fn detect_tier_from_env(env: &dyn EnvReader, is_terminal: bool) -> ColorTier {
    if let Some(tier) = forced_tier(env, "FORCE_COLOR") {
        return decided("FORCE_COLOR", tier);
    }

    if non_empty(env, "NO_COLOR") {
        return decided("NO_COLOR", ColorTier::NoColor);
    }

    if let Some(tier) = forced_tier(env, "CLICOLOR_FORCE") {
        return decided("CLICOLOR_FORCE", tier);
    }

    if non_empty(env, "CLICOLOR") {
        let tier = if is_terminal {
            ColorTier::Ansi16
        } else {
            ColorTier::NoColor
        };
        return decided("CLICOLOR", tier);
    }

    let term = env.var("TERM").unwrap_or_default();
    if term.eq_ignore_ascii_case("dumb") {
        return decided("TERM=dumb", ColorTier::NoColor);
    }

    if is_set(env, "CI") {
        let known = KNOWN_CI_VARS.iter().any(|name| is_set(env, name))
            || env.var("CI_NAME").as_deref() == Some("codeship");
        let tier = if known {
            ColorTier::Ansi16
        } else {
            ColorTier::NoColor
        };
        return decided("CI", tier);
    }

    if let Some(version) = env.var("TEAMCITY_VERSION") {
        let tier = if TEAMCITY_WITH_COLOR.is_match(&version) {
            ColorTier::Ansi16
        } else {
            ColorTier::NoColor
        };
        return decided("TEAMCITY_VERSION", tier);
    }

    if !is_terminal {
        return decided("not a terminal", ColorTier::NoColor);
    }

    let colorterm = env.var("COLORTERM");
    match colorterm.as_deref().map(str::to_ascii_lowercase).as_deref() {
        Some("truecolor") | Some("24bit") => {
            return decided("COLORTERM", ColorTier::TrueColor);
        }
        Some("ansi256") => return decided("COLORTERM", ColorTier::Extended256),
        Some("ansi") => return decided("COLORTERM", ColorTier::Ansi16),
        _ => {}
    }

    if let Some(program) = env.var("TERM_PROGRAM") {
        return decided("TERM_PROGRAM", term_program_tier(env, &program));
    }

    if !term.is_empty() {
        if TERM_256.is_match(&term) {
            return decided("TERM", ColorTier::Extended256);
        }
        if TERM_ANSI.is_match(&term) {
            return decided("TERM", ColorTier::Ansi16);
        }
    }

    if colorterm.is_some() {
        return decided("COLORTERM", ColorTier::Ansi16);
    }

    decided("fallback", ColorTier::NoColor)
}

fn term_program_tier(env: &dyn EnvReader, program: &str) -> ColorTier {
    let version = match env.var("TERM_PROGRAM_VERSION").filter(|v| !v.is_empty()) {
        Some(raw) => {
            let major = raw.split('.').next().unwrap_or_default().trim();
            match major.parse::<i64>() {
                Ok(major) => Some(major),
                Err(_) => return ColorTier::Ansi16,
            }
        }
        None => None,
    };

    match (program, version) {
        ("iTerm.app", Some(major)) if major >= 3 => ColorTier::TrueColor,
        ("iTerm.app", Some(_)) => ColorTier::Extended256,
        ("Apple_Terminal", _) => ColorTier::Extended256,
        _ => ColorTier::Ansi16,
    }
}

// ─── Process-wide detector ──────────────────────────────────────────────────

type TierDetector = fn() -> ColorTier;

static TIER_DETECTOR: Lazy<Mutex<TierDetector>> =
    Lazy::new(|| Mutex::new(default_tier_detector));

fn default_tier_detector() -> ColorTier {
    detect_tier_from_env(&RealEnv, console::Term::stdout().is_term())
}

/// Overrides the detector used by [`detect_tier`].
pub fn set_tier_detector(detector: TierDetector) {
    let mut guard = TIER_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores the default environment-probing detector.
pub fn reset_tier_detector() {
    set_tier_detector(default_tier_detector);
}

/// Detects the tier for stdout.
///
/// Uses the configured detector (default: [`detect_tier_from_env`] over the
/// real environment). The detector runs on every call; cache the result if
/// that matters.
pub fn detect_tier() -> ColorTier {
    let detector = *TIER_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    detector()
}
