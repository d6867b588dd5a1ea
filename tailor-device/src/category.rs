use crate::{Device, SitePreference};
use std::fmt;

/// The category a request is served as,
/// derived from its [`Device`] and [`SitePreference`].
///
/// Exactly one category applies, see [`resolve_category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EffectiveCategory {
    /// Serve the normal variant.
    #[default]
    Normal,
    /// Serve the mobile variant.
    Mobile,
    /// Serve the tablet variant.
    Tablet,
}

impl EffectiveCategory {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
        }
    }
}

impl fmt::Display for EffectiveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve the [`EffectiveCategory`] for an optional [`Device`]
/// and an optional [`SitePreference`].
///
/// A present site preference always wins. Without one the device
/// classification is used, and without a device the category is
/// [`EffectiveCategory::Normal`].
#[must_use]
pub fn resolve_category(
    device: Option<&Device>,
    site_preference: Option<SitePreference>,
) -> EffectiveCategory {
    match (site_preference, device) {
        (Some(site_preference), _) => site_preference.category(),
        (None, Some(device)) => device.device_type().category(),
        (None, None) => EffectiveCategory::Normal,
    }
}

/// Returns true if the normal variant should be served.
#[must_use]
pub fn is_normal(device: Option<&Device>, site_preference: Option<SitePreference>) -> bool {
    resolve_category(device, site_preference) == EffectiveCategory::Normal
}

/// Returns true if the mobile variant should be served.
#[must_use]
pub fn is_mobile(device: Option<&Device>, site_preference: Option<SitePreference>) -> bool {
    resolve_category(device, site_preference) == EffectiveCategory::Mobile
}

/// Returns true if the tablet variant should be served.
#[must_use]
pub fn is_tablet(device: Option<&Device>, site_preference: Option<SitePreference>) -> bool {
    resolve_category(device, site_preference) == EffectiveCategory::Tablet
}
