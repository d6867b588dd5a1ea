//! Access to the device and site preference of the current request.
//!
//! Both values are stored in the [`Extensions`] of the input,
//! keyed by their type, by the [`DeviceResolverLayer`] and [`SitePreferenceLayer`].
//!
//! [`Extensions`]: tailor_core::extensions::Extensions
//! [`DeviceResolverLayer`]: crate::DeviceResolverLayer
//! [`SitePreferenceLayer`]: crate::SitePreferenceLayer

use crate::{Device, EffectiveCategory, SitePreference, resolve_category};
use std::fmt;
use tailor_core::extensions::ExtensionsRef;

/// Well-known name of the current [`Device`] of a request.
pub const CURRENT_DEVICE_ATTRIBUTE: &str = "currentDevice";

/// Well-known name of the current [`SitePreference`] of a request.
pub const CURRENT_SITE_PREFERENCE_ATTRIBUTE: &str = "currentSitePreference";

/// Get the [`Device`] resolved for the current request, if any.
pub fn current_device<T>(input: &T) -> Option<&Device>
where
    T: ExtensionsRef + ?Sized,
{
    input.extensions().get()
}

/// Get the [`Device`] resolved for the current request,
/// failing if no device was stored for it.
///
/// # Errors
///
/// Returns a [`MissingDeviceError`] if no [`DeviceResolverLayer`]
/// ran for this request, or it did not resolve a device.
///
/// [`DeviceResolverLayer`]: crate::DeviceResolverLayer
pub fn required_current_device<T>(input: &T) -> Result<&Device, MissingDeviceError>
where
    T: ExtensionsRef + ?Sized,
{
    current_device(input).ok_or(MissingDeviceError)
}

/// Get the [`SitePreference`] of the current request, if any.
pub fn current_site_preference<T>(input: &T) -> Option<SitePreference>
where
    T: ExtensionsRef + ?Sized,
{
    input.extensions().get().copied()
}

/// Resolve the [`EffectiveCategory`] of the current request
/// from its (optional) [`Device`] and [`SitePreference`].
pub fn current_category<T>(input: &T) -> EffectiveCategory
where
    T: ExtensionsRef + ?Sized,
{
    resolve_category(current_device(input), current_site_preference(input))
}

/// Error returned by [`required_current_device`] when no
/// [`Device`] is set for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MissingDeviceError;

impl fmt::Display for MissingDeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no current device ({CURRENT_DEVICE_ATTRIBUTE}) is set in this request and one is required: have you configured a DeviceResolverLayer?"
        )
    }
}

impl std::error::Error for MissingDeviceError {}
