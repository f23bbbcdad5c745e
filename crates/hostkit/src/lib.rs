//! # hostkit - Platform Utility Helpers
//!
//! Small, independent helpers for a mobile application layer:
//!
//! - **Colors**: [`ColorResolver`] and friends, re-exported from
//!   `hostkit-color`, plus the [`color_value`] shorthand
//! - **Dates**: [`utc_date_for_date`], [`date_for_utc_date`] and
//!   [`utc_date`] for `yyyy-MM-dd'T'HH:mm:ss.SSS+0000` strings
//! - **OS versions**: [`compare_versions`] and the `is_os*_or_greater`
//!   checks against a [`DeviceInfo`]
//! - **Device capabilities**: [`is_force_touch_supported`]
//! - **Text**: [`slugify`]
//! - **Units**: [`degrees_to_radians`]
//!
//! ## Quick Start
//!
//! ```rust
//! use hostkit::{
//!     color_value, is_force_touch_supported, is_os9_or_greater, slugify, Color,
//!     ColorResolver, ForceTouchCapability, StaticDevice,
//! };
//!
//! let colors = ColorResolver::new();
//! assert_eq!(color_value(&colors, "#fff"), Color::WHITE);
//!
//! let device = StaticDevice::new("9.3", ForceTouchCapability::Available);
//! assert!(is_os9_or_greater(&device));
//! assert!(is_force_touch_supported(&device));
//!
//! assert_eq!(slugify("Über Café"), "uber-cafe");
//! ```
//!
//! None of the helpers keep state of their own. The color table lives in the
//! [`ColorResolver`] the caller owns, and device facts come from the
//! [`DeviceInfo`] the caller passes in.

mod angle;
mod date;
mod device;
mod error;
mod slug;
mod version;

pub use angle::degrees_to_radians;
pub use date::{
    date_for_utc_date, utc_date, utc_date_for_date, DateFormatter, Locale, DEFAULT_LOCALE,
};
pub use device::{is_force_touch_supported, DeviceInfo, ForceTouchCapability, StaticDevice};
pub use error::{DateError, DeviceError};
pub use slug::slugify;
pub use version::{
    compare_versions, is_os10_or_greater, is_os7_or_greater, is_os8_or_greater,
    is_os9_or_greater, is_os_at_least,
};

// Re-export the color crate
pub use hostkit_color::{
    is_dark, normalize, parse_color, Color, ColorParseError, ColorResolver, Palette, PaletteError,
};

/// Converts a web color string (`#fff`, `white`, `rgba(255, 255, 255, 1.0)`)
/// into a [`Color`] through `resolver`.
pub fn color_value(resolver: &ColorResolver, value: &str) -> Color {
    resolver.resolve(value)
}
