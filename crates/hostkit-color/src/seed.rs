//! Built-in named colors.
//!
//! Every [`ColorResolver`](crate::ColorResolver) starts from this table. The
//! system grays and the orange/purple/brown triplet follow the values UIKit
//! uses for its class colors; the CSS extras are defined by their hex codes.
//! Literal white and black hex aliases are seeded in 3, 4, 6 and 8 digit
//! forms, so `#ffff` resolves even though the hex parser only takes 3 or 6
//! digits.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::color::Color;

static SEED_COLORS: Lazy<HashMap<&'static str, Color>> = Lazy::new(|| {
    let white = Color::WHITE;
    let black = Color::BLACK;

    HashMap::from([
        ("black", black),
        ("gray", Color::gray(0.5)),
        ("darkgray", Color::gray(1.0 / 3.0)),
        ("lightgray", Color::gray(2.0 / 3.0)),
        ("white", white),
        ("red", Color::new(1.0, 0.0, 0.0, 1.0)),
        ("green", Color::new(0.0, 1.0, 0.0, 1.0)),
        ("blue", Color::new(0.0, 0.0, 1.0, 1.0)),
        ("cyan", Color::new(0.0, 1.0, 1.0, 1.0)),
        ("yellow", Color::new(1.0, 1.0, 0.0, 1.0)),
        ("magenta", Color::new(1.0, 0.0, 1.0, 1.0)),
        ("orange", Color::new(1.0, 0.5, 0.0, 1.0)),
        ("purple", Color::new(0.5, 0.0, 0.5, 1.0)),
        ("brown", Color::new(0.6, 0.4, 0.2, 1.0)),
        ("transparent", Color::TRANSPARENT),
        // grouped table background
        ("stripped", Color::from_rgb8(239, 239, 244)),
        ("aqua", Color::from_rgb8(0x00, 0xff, 0xff)),
        ("fuchsia", Color::from_rgb8(0xff, 0x00, 0xff)),
        ("lime", Color::from_rgb8(0x00, 0xff, 0x00)),
        ("maroon", Color::from_rgb8(0x88, 0x00, 0x00)),
        ("pink", Color::from_rgb8(0xff, 0xc0, 0xcb)),
        ("navy", Color::from_rgb8(0x00, 0x00, 0x80)),
        ("silver", Color::from_rgb8(0xc0, 0xc0, 0xc0)),
        ("olive", Color::from_rgb8(0x80, 0x80, 0x00)),
        ("teal", Color::from_rgb8(0x00, 0x80, 0x80)),
        ("fff", white),
        ("ffff", white),
        ("ffffff", white),
        ("ffffffff", white),
        ("000", black),
        ("0000", black),
        ("000000", black),
        ("00000000", black),
    ])
});

/// Looks up a normalized key in the built-in table.
pub fn seed_color(key: &str) -> Option<Color> {
    SEED_COLORS.get(key).copied()
}

/// Iterates over every built-in entry, in no particular order.
pub fn seed_entries() -> impl Iterator<Item = (&'static str, Color)> {
    SEED_COLORS.iter().map(|(name, color)| (*name, *color))
}

/// Number of built-in entries.
pub fn seed_len() -> usize {
    SEED_COLORS.len()
}
