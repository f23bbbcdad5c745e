//! Named color palettes loaded from YAML.
//!
//! A palette adds application-specific names on top of the built-in table:
//!
//! ```yaml
//! brand: "#ff6b35"
//! shadow: "rgba(0, 0, 0, 0.5)"
//! accent: navy
//! ```
//!
//! Hex values must be quoted, since YAML treats `#` as a comment. Values may
//! reference built-in names but not other palette entries.
//!
//! ```rust
//! use hostkit_color::{Color, ColorResolver, Palette};
//!
//! let palette = Palette::from_yaml("brand: '#ff6b35'\naccent: navy").unwrap();
//! let colors = ColorResolver::with_palette(&palette);
//! assert_eq!(colors.resolve("brand"), Color::from_rgb8(255, 107, 53));
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::color::Color;
use crate::error::PaletteError;
use crate::parse::{normalize, parse_color};

/// A set of named colors, keyed by normalized name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    entries: BTreeMap<String, Color>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named color, replacing any previous entry with the same name.
    pub fn add(mut self, name: &str, color: Color) -> Self {
        self.entries.insert(normalize(name), color);
        self
    }

    /// Parses a palette from a YAML mapping of names to color strings.
    ///
    /// Fails on the first entry (in name order) whose value does not parse.
    pub fn from_yaml(yaml: &str) -> Result<Self, PaletteError> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }

        let raw: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(yaml)?;
        let mut palette = Self::new();
        for (name, value) in raw {
            let text = match value {
                serde_yaml::Value::String(s) => s,
                // Unquoted digits such as `808000` arrive as numbers
                serde_yaml::Value::Number(n) => n.to_string(),
                _ => return Err(PaletteError::InvalidValue { name }),
            };
            let color = parse_color(&text).map_err(|source| PaletteError::InvalidColor {
                name: name.clone(),
                value: text.clone(),
                source,
            })?;
            palette.entries.insert(normalize(&name), color);
        }

        Ok(palette)
    }

    /// Reads and parses a palette file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let palette = Self::from_yaml(&content)?;
        debug!(
            "loaded {} palette entries from {}",
            palette.len(),
            path.display()
        );
        Ok(palette)
    }

    /// Looks up a color by name. The name is normalized first.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.entries.get(&normalize(name)).copied()
    }

    /// Iterates over `(name, color)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.entries.iter().map(|(name, color)| (name.as_str(), *color))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorParseError;

    #[test]
    fn parses_every_supported_value_kind() {
        let yaml = r##"
brand: "#ff6b35"
shadow: "rgba(0, 0, 0, 0.5)"
accent: navy
moss: 808000
"##;
        let palette = Palette::from_yaml(yaml).unwrap();
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.get("brand"), Some(Color::from_rgb8(255, 107, 53)));
        assert_eq!(palette.get("shadow"), Some(Color::new(0.0, 0.0, 0.0, 0.5)));
        assert_eq!(palette.get("accent"), Some(Color::from_rgb8(0, 0, 0x80)));
        assert_eq!(palette.get("moss"), Some(Color::from_rgb8(0x80, 0x80, 0)));
    }

    #[test]
    fn names_are_normalized() {
        let palette = Palette::from_yaml("Brand: '#fff'").unwrap();
        assert_eq!(palette.get("brand"), Some(Color::WHITE));
        assert_eq!(palette.get("  BRAND "), Some(Color::WHITE));
    }

    #[test]
    fn empty_document_is_empty_palette() {
        assert!(Palette::from_yaml("").unwrap().is_empty());
        assert!(Palette::from_yaml("  \n").unwrap().is_empty());
    }

    #[test]
    fn invalid_color_names_the_entry() {
        let err = Palette::from_yaml("good: red\nbad: '#12'").unwrap_err();
        match err {
            PaletteError::InvalidColor {
                name,
                value,
                source,
            } => {
                assert_eq!(name, "bad");
                assert_eq!(value, "#12");
                assert_eq!(source, ColorParseError::InvalidHexLength(2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_scalar_value_is_rejected() {
        let err = Palette::from_yaml("bad: [1, 2, 3]").unwrap_err();
        assert!(matches!(err, PaletteError::InvalidValue { name } if name == "bad"));
    }

    #[test]
    fn non_mapping_document_is_a_parse_error() {
        let err = Palette::from_yaml("- red\n- blue").unwrap_err();
        assert!(matches!(err, PaletteError::Parse(_)));
    }

    #[test]
    fn iter_is_name_ordered() {
        let palette = Palette::new()
            .add("zeta", Color::BLACK)
            .add("alpha", Color::WHITE);
        let names: Vec<&str> = palette.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
