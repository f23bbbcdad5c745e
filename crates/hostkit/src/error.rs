//! Error types for the utility helpers.

/// Errors from the UTC date helpers.
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    /// The date string was empty.
    #[error("date string is empty")]
    Empty,

    /// The locale identifier is not of the form `language[_REGION]`.
    #[error("invalid locale identifier '{0}'")]
    InvalidLocale(String),

    /// The date string does not match `yyyy-MM-dd'T'HH:mm:ss.SSS+0000`.
    #[error("failed to parse UTC date: {0}")]
    Parse(#[from] time::error::Parse),

    /// The date cannot be represented in the UTC format.
    #[error("failed to format UTC date: {0}")]
    Format(#[from] time::error::Format),
}

/// Errors from loading a device description.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// The YAML document is not a valid device description.
    #[error("failed to parse device description: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The system version is empty or contains no digits.
    #[error("invalid system version '{0}'")]
    InvalidVersion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_locale_display() {
        let err = DateError::InvalidLocale("xx-yy-zz".to_string());
        assert_eq!(err.to_string(), "invalid locale identifier 'xx-yy-zz'");
    }

    #[test]
    fn invalid_version_display() {
        let err = DeviceError::InvalidVersion("beta".to_string());
        assert!(err.to_string().contains("beta"));
    }
}
