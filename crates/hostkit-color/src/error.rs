//! Error types for color parsing and palette loading.
//!
//! [`ColorResolver::resolve`](crate::ColorResolver::resolve) never returns
//! these; they surface only from the strict parser and from palette loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Nothing left after trimming.
    #[error("empty color string")]
    Empty,

    /// Hex color that is neither 3 nor 6 digits long.
    #[error("hex color must have 3 or 6 digits, got {0}")]
    InvalidHexLength(usize),

    /// Hex color containing a non-hex character.
    #[error("invalid hex digits in '{0}'")]
    InvalidHexDigit(String),

    /// The string does not name the `rgba` function at all.
    #[error("not an rgba() color")]
    NotFunctional,

    /// `rgba` is present but the call around it is malformed.
    #[error("malformed rgba() call: {0}")]
    MalformedFunction(&'static str),

    /// Wrong number of comma-separated components.
    #[error("rgba() takes 3 or 4 components, got {0}")]
    ComponentCount(usize),

    /// A component that is not a finite number.
    #[error("invalid rgba() component '{0}'")]
    InvalidComponent(String),
}

impl ColorParseError {
    /// Returns `true` when the hex stage produced this error.
    pub fn is_hex(&self) -> bool {
        matches!(
            self,
            ColorParseError::InvalidHexLength(_) | ColorParseError::InvalidHexDigit(_)
        )
    }
}

/// Error returned when a palette cannot be loaded.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The palette file could not be read.
    #[error("failed to read palette {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not a YAML mapping.
    #[error("failed to parse palette: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// An entry holds something other than a string or number.
    #[error("palette entry '{name}' must be a color string")]
    InvalidValue { name: String },

    /// An entry holds a string that does not parse as a color.
    #[error("invalid color '{value}' for palette entry '{name}': {source}")]
    InvalidColor {
        name: String,
        value: String,
        #[source]
        source: ColorParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_errors_are_flagged() {
        assert!(ColorParseError::InvalidHexLength(2).is_hex());
        assert!(ColorParseError::InvalidHexDigit("zzz".into()).is_hex());
        assert!(!ColorParseError::NotFunctional.is_hex());
        assert!(!ColorParseError::ComponentCount(2).is_hex());
    }

    #[test]
    fn invalid_color_display_names_entry() {
        let err = PaletteError::InvalidColor {
            name: "brand".to_string(),
            value: "#12".to_string(),
            source: ColorParseError::InvalidHexLength(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("brand"));
        assert!(msg.contains("#12"));
        assert!(msg.contains("3 or 6 digits"));
    }
}
