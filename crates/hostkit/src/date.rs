//! UTC date strings.
//!
//! Dates travel between the app and its backend as
//! `yyyy-MM-dd'T'HH:mm:ss.SSS+0000`, always expressed in UTC:
//!
//! ```rust
//! use hostkit::{date_for_utc_date, utc_date_for_date};
//! use time::macros::datetime;
//!
//! let date = datetime!(2016-03-01 09:30:15.250 +01:00);
//! let text = utc_date_for_date(date, None).unwrap();
//! assert_eq!(text, "2016-03-01T08:30:15.250+0000");
//!
//! assert_eq!(date_for_utc_date(&text, Some("de_DE")).unwrap(), date);
//! ```
//!
//! A locale may be passed to every call. It is validated and carried by the
//! [`DateFormatter`], but the pattern is purely numeric, so it does not
//! change the output.

use std::fmt;

use log::error;
use once_cell::sync::Lazy;
use regex::Regex;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::error::DateError;

/// Locale used when none is given.
pub const DEFAULT_LOCALE: &str = "en_US";

const UTC_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]+0000"
);

static LOCALE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(?:[_-](?:[A-Za-z]{2}|[0-9]{3}))?$").expect("valid locale regex")
});

/// A validated locale identifier such as `en_US`, `pt-BR` or `es_419`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Validates a `language[_REGION]` identifier.
    pub fn parse(identifier: &str) -> Result<Self, DateError> {
        let identifier = identifier.trim();
        if LOCALE_PATTERN.is_match(identifier) {
            Ok(Self(identifier.to_string()))
        } else {
            Err(DateError::InvalidLocale(identifier.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formats and parses UTC date strings for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFormatter {
    locale: Locale,
}

impl DateFormatter {
    /// Creates a formatter; `None` selects [`DEFAULT_LOCALE`].
    pub fn new(locale: Option<&str>) -> Result<Self, DateError> {
        let locale = match locale {
            Some(identifier) => Locale::parse(identifier)?,
            None => Locale::default(),
        };
        Ok(Self { locale })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Converts `date` to UTC and formats it, truncating to milliseconds.
    pub fn format(&self, date: OffsetDateTime) -> Result<String, DateError> {
        Ok(date.to_offset(UtcOffset::UTC).format(UTC_FORMAT)?)
    }

    /// Parses a UTC date string.
    pub fn parse(&self, text: &str) -> Result<OffsetDateTime, DateError> {
        if text.is_empty() {
            error!("the date argument needs to be a non-empty string");
            return Err(DateError::Empty);
        }
        Ok(PrimitiveDateTime::parse(text, UTC_FORMAT)?.assume_utc())
    }
}

/// Formats `date` as a UTC date string.
pub fn utc_date_for_date(date: OffsetDateTime, locale: Option<&str>) -> Result<String, DateError> {
    DateFormatter::new(locale)?.format(date)
}

/// Parses a UTC date string.
pub fn date_for_utc_date(text: &str, locale: Option<&str>) -> Result<OffsetDateTime, DateError> {
    DateFormatter::new(locale)?.parse(text)
}

/// The current time as a UTC date string.
pub fn utc_date() -> Result<String, DateError> {
    DateFormatter::default().format(OffsetDateTime::now_utc())
}
