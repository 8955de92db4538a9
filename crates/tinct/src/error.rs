//! Error types for color parsing.
//!
//! Styling itself never fails: numeric color components are clamped and
//! malformed escape sequences decode to an empty style. The only recoverable
//! error is a color literal that cannot be read, surfaced as [`ColorError`].

/// Errors produced while turning user-supplied strings into colors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Not a 3- or 6-digit hex literal (optionally `#` or `0x` prefixed)
    /// and not a known color name.
    #[error("invalid color format: '{input}' (expected #rgb, #rrggbb or a CSS color name)")]
    InvalidFormat { input: String },
}

impl ColorError {
    /// Create an invalid format error for the given input.
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_display() {
        let err = ColorError::invalid_format("zzz");
        let msg = err.to_string();
        assert!(msg.contains("invalid color format"));
        assert!(msg.contains("zzz"));
    }

    #[test]
    fn test_invalid_format_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ColorError::invalid_format("#12"));
        assert!(err.to_string().contains("#12"));
    }
}
