//! Memoizing color resolution.
//!
//! [`ColorResolver`] owns the lookup table every color string is resolved
//! against. The table starts with the built-in seed colors (plus any
//! [`Palette`] passed at construction) and grows by one entry each time a
//! previously unseen hex or `rgba()` string parses successfully.
//!
//! Resolution never fails. Anything that cannot be parsed resolves to
//! [`Color::TRANSPARENT`], and failures are not cached.
//!
//! # Sharing
//!
//! The resolver is `Send + Sync`. Build one at startup and hand it out by
//! reference or inside an `Arc`:
//!
//! ```rust
//! use std::sync::Arc;
//! use hostkit_color::{Color, ColorResolver};
//!
//! let colors = Arc::new(ColorResolver::new());
//! let worker = {
//!     let colors = Arc::clone(&colors);
//!     std::thread::spawn(move || colors.resolve("#abc"))
//! };
//! assert_eq!(worker.join().unwrap(), colors.resolve("ABC"));
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};

use crate::color::Color;
use crate::palette::Palette;
use crate::parse::{normalize, parse_normalized};
use crate::seed::seed_entries;

/// Resolves color strings to [`Color`] values, caching every success.
#[derive(Debug)]
pub struct ColorResolver {
    table: RwLock<HashMap<String, Color>>,
}

impl ColorResolver {
    /// Creates a resolver seeded with the built-in named colors.
    pub fn new() -> Self {
        let table = seed_entries()
            .map(|(name, color)| (name.to_string(), color))
            .collect();

        Self {
            table: RwLock::new(table),
        }
    }

    /// Creates a resolver seeded with the built-in colors and `palette`.
    ///
    /// Palette entries replace built-in entries of the same name.
    pub fn with_palette(palette: &Palette) -> Self {
        let resolver = Self::new();
        {
            let mut table = resolver.write_table();
            for (name, color) in palette.iter() {
                table.insert(name.to_string(), color);
            }
        }
        debug!("seeded color resolver with {} palette entries", palette.len());
        resolver
    }

    /// Resolves a color string.
    ///
    /// Accepts named colors, 3 or 6 digit hex (with or without `#`) and
    /// `rgba(r, g, b[, a])`. Returns [`Color::TRANSPARENT`] for anything else.
    pub fn resolve(&self, input: &str) -> Color {
        if input.trim().is_empty() {
            return Color::TRANSPARENT;
        }

        let key = normalize(input);
        let cached = self.read_table().get(&key).copied();
        if let Some(color) = cached {
            return color;
        }

        match parse_normalized(&key) {
            Ok(color) => {
                let mut table = self.write_table();
                // Another thread may have stored the key since the read above.
                let stored = *table.entry(key).or_insert(color);
                debug!("cached color {:?} ({} entries)", input.trim(), table.len());
                stored
            }
            Err(err) => {
                if err.is_hex() {
                    warn!("hex color passed looks invalid: {:?}: {}", key, err);
                }
                Color::TRANSPARENT
            }
        }
    }

    /// Resolves an optional color string; `None` is transparent.
    pub fn resolve_opt(&self, input: Option<&str>) -> Color {
        input.map_or(Color::TRANSPARENT, |s| self.resolve(s))
    }

    /// Number of entries in the table, seed entries included.
    pub fn cache_len(&self) -> usize {
        self.read_table().len()
    }

    /// Returns `true` if `key` is in the table. The key is matched as given,
    /// without normalization.
    pub fn is_cached(&self, key: &str) -> bool {
        self.read_table().contains_key(key)
    }

    fn read_table(&self) -> RwLockReadGuard<'_, HashMap<String, Color>> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_table(&self) -> RwLockWriteGuard<'_, HashMap<String, Color>> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ColorResolver {
    fn default() -> Self {
        Self::new()
    }
}
