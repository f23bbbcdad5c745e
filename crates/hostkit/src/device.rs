//! Device capability checks.
//!
//! The helpers here never talk to a platform directly. The host passes in a
//! [`DeviceInfo`] implementation that reports the system version and the
//! touch capabilities; tests and configuration use [`StaticDevice`].

use serde::{Deserialize, Serialize};

use crate::error::DeviceError;
use crate::version::is_os9_or_greater;

/// Whether the device's display reports pressure (3D Touch / force touch).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForceTouchCapability {
    /// The host could not tell.
    #[default]
    Unknown,
    Unavailable,
    Available,
}

/// Abstraction over the running device.
///
/// This trait lets the capability checks run without a real device.
pub trait DeviceInfo: Send + Sync {
    /// The OS version string, e.g. `"9.3.1"`.
    fn system_version(&self) -> String;

    /// The force touch capability of the main window's trait collection.
    fn force_touch_capability(&self) -> ForceTouchCapability;
}

impl<T: DeviceInfo + ?Sized> DeviceInfo for &T {
    fn system_version(&self) -> String {
        (**self).system_version()
    }

    fn force_touch_capability(&self) -> ForceTouchCapability {
        (**self).force_touch_capability()
    }
}

impl<T: DeviceInfo + ?Sized> DeviceInfo for Box<T> {
    fn system_version(&self) -> String {
        (**self).system_version()
    }

    fn force_touch_capability(&self) -> ForceTouchCapability {
        (**self).force_touch_capability()
    }
}

/// A fixed device description.
///
/// Can be built in code or loaded from YAML:
///
/// ```yaml
/// system_version: "9.3"
/// force_touch: available
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticDevice {
    system_version: String,
    #[serde(default)]
    force_touch: ForceTouchCapability,
}

impl StaticDevice {
    pub fn new(system_version: impl Into<String>, force_touch: ForceTouchCapability) -> Self {
        Self {
            system_version: system_version.into(),
            force_touch,
        }
    }

    /// Parses a device description, rejecting versions without any digit.
    pub fn from_yaml(yaml: &str) -> Result<Self, DeviceError> {
        let device: Self = serde_yaml::from_str(yaml)?;
        if !device.system_version.chars().any(|c| c.is_ascii_digit()) {
            return Err(DeviceError::InvalidVersion(device.system_version));
        }
        Ok(device)
    }
}

impl DeviceInfo for StaticDevice {
    fn system_version(&self) -> String {
        self.system_version.clone()
    }

    fn force_touch_capability(&self) -> ForceTouchCapability {
        self.force_touch
    }
}

/// Returns `true` if the device supports force touch.
///
/// Always `false` before OS 9.0, where the capability does not exist.
pub fn is_force_touch_supported<D: DeviceInfo + ?Sized>(device: &D) -> bool {
    if !is_os9_or_greater(device) {
        return false;
    }

    device.force_touch_capability() == ForceTouchCapability::Available
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_touch_requires_os9() {
        let old = StaticDevice::new("8.4", ForceTouchCapability::Available);
        assert!(!is_force_touch_supported(&old));
    }

    #[test]
    fn force_touch_requires_available_capability() {
        let yes = StaticDevice::new("9.0", ForceTouchCapability::Available);
        let no = StaticDevice::new("9.0", ForceTouchCapability::Unavailable);
        let unknown = StaticDevice::new("10.2", ForceTouchCapability::Unknown);
        assert!(is_force_touch_supported(&yes));
        assert!(!is_force_touch_supported(&no));
        assert!(!is_force_touch_supported(&unknown));
    }

    #[test]
    fn works_through_trait_objects() {
        let device: Box<dyn DeviceInfo> =
            Box::new(StaticDevice::new("9.1", ForceTouchCapability::Available));
        assert!(is_force_touch_supported(&device));
        assert!(is_force_touch_supported(device.as_ref()));
    }

    #[test]
    fn loads_from_yaml() {
        let device = StaticDevice::from_yaml("system_version: '9.3'\nforce_touch: available").unwrap();
        assert_eq!(device.system_version(), "9.3");
        assert_eq!(
            device.force_touch_capability(),
            ForceTouchCapability::Available
        );
    }

    #[test]
    fn force_touch_defaults_to_unknown() {
        let device = StaticDevice::from_yaml("system_version: '10.0'").unwrap();
        assert_eq!(device.force_touch_capability(), ForceTouchCapability::Unknown);
    }

    #[test]
    fn rejects_bad_descriptions() {
        assert!(matches!(
            StaticDevice::from_yaml("system_version: beta"),
            Err(DeviceError::InvalidVersion(_))
        ));
        assert!(matches!(
            StaticDevice::from_yaml("force_touch: available"),
            Err(DeviceError::Parse(_))
        ));
        assert!(matches!(
            StaticDevice::from_yaml("system_version: '9.0'\nforce_touch: maybe"),
            Err(DeviceError::Parse(_))
        ));
    }
}
