//! Color string parsing.
//!
//! Supports the formats a web-style color attribute can carry:
//!
//! - Named colors: `red`, `navy`, `transparent`, etc. (see [`crate::seed`])
//! - RGB hex: `"#ff6b35"` or `"#fff"` (3 or 6 digit, `#` optional)
//! - Functional: `rgba(255, 107, 53)` or `rgba(255, 107, 53, 0.5)`
//!
//! Every input goes through [`normalize`] first: surrounding whitespace is
//! trimmed, the string is lowercased and one leading `#` is dropped. The
//! normalized string is also the key under which the resolver caches the
//! result.
//!
//! # Example
//!
//! ```rust
//! use hostkit_color::{parse_color, Color};
//!
//! assert_eq!(parse_color("#FFF").unwrap(), Color::WHITE);
//! assert_eq!(parse_color("rgba(255, 0, 0)").unwrap(), Color::new(1.0, 0.0, 0.0, 1.0));
//! assert!(parse_color("#12").is_err());
//! ```

use std::str::FromStr;

use crate::color::Color;
use crate::error::ColorParseError;
use crate::seed::seed_color;

/// Normalizes a color string into its lookup key.
pub fn normalize(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    match lowered.strip_prefix('#') {
        Some(rest) => rest.to_string(),
        None => lowered,
    }
}

/// Parses a color string without consulting or filling any cache.
///
/// Named colors come from the built-in seed table only; palette names are
/// known to a [`ColorResolver`](crate::ColorResolver), not to this function.
pub fn parse_color(input: &str) -> Result<Color, ColorParseError> {
    let key = normalize(input);
    if key.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(color) = seed_color(&key) {
        return Ok(color);
    }

    parse_normalized(&key)
}

/// Runs the hex stage, then the `rgba()` stage, on an already-normalized key.
///
/// When both stages fail the hex error is reported, unless the key named the
/// `rgba` function, in which case the functional error is more useful.
pub(crate) fn parse_normalized(key: &str) -> Result<Color, ColorParseError> {
    parse_hex(key).or_else(|hex_err| match parse_rgba_function(key) {
        Err(ColorParseError::NotFunctional) => Err(hex_err),
        other => other,
    })
}

/// Parses a hex color code (without the `#` prefix).
///
/// Accepts exactly 3 or 6 hex digits; `rgb` expands to `rrggbb`.
pub(crate) fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    let expanded = match hex.len() {
        // 3-digit hex: rgb -> rrggbb
        3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => hex.to_string(),
        n => return Err(ColorParseError::InvalidHexLength(n)),
    };

    // from_str_radix alone would let a leading '+' through
    if !expanded.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHexDigit(hex.to_string()));
    }

    let channel = |at: usize| {
        u8::from_str_radix(&expanded[at..at + 2], 16)
            .map_err(|_| ColorParseError::InvalidHexDigit(hex.to_string()))
    };

    Ok(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
}

/// Parses an `rgba(r, g, b[, a])` color.
///
/// The structure is checked piece by piece: the string must split into
/// exactly two parts on `rgba`, the remainder into exactly two on `(`, and
/// that remainder into exactly two on `)`. Red, green and blue are divided
/// by 255; alpha is taken as-is and defaults to 1.
pub(crate) fn parse_rgba_function(s: &str) -> Result<Color, ColorParseError> {
    let (_, call) = split_pair(s, "rgba").ok_or(ColorParseError::NotFunctional)?;
    let (_, args) =
        split_pair(call, "(").ok_or(ColorParseError::MalformedFunction("expected one '('"))?;
    let (inner, _) =
        split_pair(args, ")").ok_or(ColorParseError::MalformedFunction("expected one ')'"))?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ColorParseError::ComponentCount(parts.len()));
    }

    let mut values = [0.0f64, 0.0, 0.0, 1.0];
    for (i, part) in parts.iter().enumerate() {
        values[i] = part
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ColorParseError::InvalidComponent(part.to_string()))?;
    }

    let [r, g, b, a] = values;
    Ok(Color::clamped(r / 255.0, g / 255.0, b / 255.0, a))
}

/// Splits `s` on `sep`, requiring exactly two pieces.
fn split_pair<'a>(s: &'a str, sep: &str) -> Option<(&'a str, &'a str)> {
    let mut parts = s.split(sep);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(head), Some(tail), None) => Some((head, tail)),
        _ => None,
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}
