//! # hostkit-color - Web Color Resolution
//!
//! `hostkit-color` turns the color strings found in view attributes and
//! style files into normalized four-channel [`Color`] values.
//!
//! ## Core Concepts
//!
//! - [`Color`]: red, green, blue and alpha as `f64` in `[0, 1]`
//! - [`ColorResolver`]: resolves strings against a lookup table and caches
//!   every new success. Never fails; bad input yields [`Color::TRANSPARENT`]
//! - [`parse_color`]: the same parsing without a cache, reporting a
//!   [`ColorParseError`] instead of falling back
//! - [`Palette`]: extra named colors loaded from YAML
//! - [`is_dark`]: luma-based darkness check
//!
//! ## Supported Formats
//!
//! | Format | Example |
//! |--------|---------|
//! | Named | `white`, `navy`, `transparent` |
//! | 3-digit hex | `#fff`, `fff` |
//! | 6-digit hex | `#ff6b35` |
//! | Functional | `rgba(255, 107, 53)`, `rgba(255, 107, 53, 0.5)` |
//!
//! Input is trimmed and lowercased, and one leading `#` is dropped, before
//! any lookup.
//!
//! ## Quick Start
//!
//! ```rust
//! use hostkit_color::{Color, ColorResolver};
//!
//! let colors = ColorResolver::new();
//!
//! assert_eq!(colors.resolve("#FFF"), Color::WHITE);
//! assert_eq!(colors.resolve("rgba(0, 255, 0)"), Color::new(0.0, 1.0, 0.0, 1.0));
//! assert_eq!(colors.resolve("not-a-color"), Color::TRANSPARENT);
//!
//! assert!(colors.resolve("navy").is_dark());
//! ```

mod color;
mod error;
mod palette;
mod parse;
mod resolver;
pub mod seed;

pub use color::{is_dark, Color};
pub use error::{ColorParseError, PaletteError};
pub use palette::Palette;
pub use parse::{normalize, parse_color};
pub use resolver::ColorResolver;
