use crate::EffectiveCategory;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use tailor_core::error::OpaqueError;
use tailor_utils::macros::match_ignore_ascii_case_str;

/// The classification of the client device a request originates from.
///
/// Exactly one classification applies to a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceType {
    /// Personal computers and any device not classified otherwise.
    #[default]
    Normal,
    /// Phones and other small-screen mobile devices.
    Mobile,
    /// Tablets.
    Tablet,
}

impl DeviceType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
        }
    }

    /// The [`EffectiveCategory`] this classification maps to
    /// when no site preference overrides it.
    #[must_use]
    pub fn category(self) -> EffectiveCategory {
        match self {
            Self::Normal => EffectiveCategory::Normal,
            Self::Mobile => EffectiveCategory::Mobile,
            Self::Tablet => EffectiveCategory::Tablet,
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "normal" => Ok(Self::Normal),
                "mobile" => Ok(Self::Mobile),
                "tablet" => Ok(Self::Tablet),
                _ => Err(OpaqueError::from_display(format!("invalid device type: {s}"))),
            }
        }
    }
}

impl Serialize for DeviceType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeviceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// Platform the client device runs on.
///
/// Informational only, it plays no part in the
/// resolution of the [`EffectiveCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DevicePlatform {
    /// Apple iOS (iPhone, iPad, iPod).
    IOS,
    /// Google Android.
    Android,
    /// Any other or undetected platform.
    #[default]
    Unknown,
}

impl DevicePlatform {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IOS => "iOS",
            Self::Android => "Android",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DevicePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DevicePlatform {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "ios" => Ok(Self::IOS),
                "android" => Ok(Self::Android),
                "unknown" => Ok(Self::Unknown),
                _ => Err(OpaqueError::from_display(format!("invalid device platform: {s}"))),
            }
        }
    }
}

impl Serialize for DevicePlatform {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DevicePlatform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// The device a request originates from.
///
/// Created once per request by a [`DeviceResolver`] and read-only afterwards.
/// The [`Default`] device is a [`DeviceType::Normal`] device
/// on an [`DevicePlatform::Unknown`] platform.
///
/// [`DeviceResolver`]: crate::DeviceResolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename = "type")]
    device_type: DeviceType,
    #[serde(default)]
    platform: DevicePlatform,
}

impl Device {
    /// A [`DeviceType::Normal`] device on an unknown platform.
    pub const NORMAL: Self = Self::from_type(DeviceType::Normal);
    /// A [`DeviceType::Mobile`] device on an unknown platform.
    pub const MOBILE: Self = Self::from_type(DeviceType::Mobile);
    /// A [`DeviceType::Tablet`] device on an unknown platform.
    pub const TABLET: Self = Self::from_type(DeviceType::Tablet);

    /// Create a new [`Device`].
    #[must_use]
    pub const fn new(device_type: DeviceType, platform: DevicePlatform) -> Self {
        Self {
            device_type,
            platform,
        }
    }

    /// Create a new [`Device`] of the given type on an unknown platform.
    #[must_use]
    pub const fn from_type(device_type: DeviceType) -> Self {
        Self::new(device_type, DevicePlatform::Unknown)
    }

    #[must_use]
    pub const fn device_type(&self) -> DeviceType {
        self.device_type
    }

    #[must_use]
    pub const fn platform(&self) -> DevicePlatform {
        self.platform
    }

    /// Returns true if this is a [`DeviceType::Normal`] device.
    #[must_use]
    pub fn is_normal(&self) -> bool {
        self.device_type == DeviceType::Normal
    }

    /// Returns true if this is a [`DeviceType::Mobile`] device.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.device_type == DeviceType::Mobile
    }

    /// Returns true if this is a [`DeviceType::Tablet`] device.
    #[must_use]
    pub fn is_tablet(&self) -> bool {
        self.device_type == DeviceType::Tablet
    }
}

impl From<DeviceType> for Device {
    fn from(device_type: DeviceType) -> Self {
        Self::from_type(device_type)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Device type={} platform={}]",
            self.device_type, self.platform
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_predicates_exclusive() {
        for device in [Device::NORMAL, Device::MOBILE, Device::TABLET] {
            let count = [device.is_normal(), device.is_mobile(), device.is_tablet()]
                .into_iter()
                .filter(|b| *b)
                .count();
            assert_eq!(count, 1, "device: {device}");
        }
    }

    #[test]
    fn test_device_default() {
        let device = Device::default();
        assert!(device.is_normal());
        assert_eq!(device.platform(), DevicePlatform::Unknown);
        assert_eq!(device, Device::NORMAL);
    }

    #[test]
    fn test_device_display() {
        let device = Device::new(DeviceType::Mobile, DevicePlatform::IOS);
        assert_eq!(device.to_string(), "[Device type=mobile platform=iOS]");
    }

    #[test]
    fn test_device_type_parse() {
        assert_eq!("normal".parse::<DeviceType>().unwrap(), DeviceType::Normal);
        assert_eq!(" MOBILE ".parse::<DeviceType>().unwrap(), DeviceType::Mobile);
        assert_eq!("Tablet".parse::<DeviceType>().unwrap(), DeviceType::Tablet);
        let err = "phablet".parse::<DeviceType>().unwrap_err();
        assert_eq!(err.to_string(), "invalid device type: phablet");
    }

    #[test]
    fn test_device_platform_parse() {
        assert_eq!("iOS".parse::<DevicePlatform>().unwrap(), DevicePlatform::IOS);
        assert_eq!(
            "android".parse::<DevicePlatform>().unwrap(),
            DevicePlatform::Android
        );
        assert_eq!(
            "UNKNOWN".parse::<DevicePlatform>().unwrap(),
            DevicePlatform::Unknown
        );
        assert!("windows".parse::<DevicePlatform>().is_err());
    }

    #[test]
    fn test_device_deserialize() {
        let device: Device = serde_json::from_str(r#"{"type":"tablet","platform":"android"}"#).unwrap();
        assert_eq!(device, Device::new(DeviceType::Tablet, DevicePlatform::Android));

        let device: Device = serde_json::from_str(r#"{"type":"Mobile"}"#).unwrap();
        assert_eq!(device, Device::MOBILE);

        assert!(serde_json::from_str::<Device>(r#"{"type":"watch"}"#).is_err());
    }

    #[test]
    fn test_device_serialize() {
        let device = Device::new(DeviceType::Mobile, DevicePlatform::IOS);
        assert_eq!(
            serde_json::to_string(&device).unwrap(),
            r#"{"type":"mobile","platform":"iOS"}"#
        );
    }
}
