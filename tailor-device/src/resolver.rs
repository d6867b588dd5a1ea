use crate::{Device, SitePreference};

/// Resolves the [`Device`] an input (e.g. a request) originates from.
///
/// How a device is classified (e.g. by sniffing the `User-Agent` header)
/// is up to the implementation. Returning `None` means no device
/// could be resolved, which consumers treat as a normal device.
///
/// Implemented for:
///
/// - any `Fn(&Input) -> Option<Device>`;
/// - a [`Device`], which is resolved for every input.
pub trait DeviceResolver<Input>: Send + Sync + 'static {
    /// Resolve the [`Device`] for the given input.
    fn resolve_device(&self, input: &Input) -> Option<Device>;
}

impl<Input, F> DeviceResolver<Input> for F
where
    F: Fn(&Input) -> Option<Device> + Send + Sync + 'static,
{
    #[inline]
    fn resolve_device(&self, input: &Input) -> Option<Device> {
        (self)(input)
    }
}

impl<Input> DeviceResolver<Input> for Device {
    #[inline]
    fn resolve_device(&self, _input: &Input) -> Option<Device> {
        Some(*self)
    }
}

/// Determines the [`SitePreference`] of the user sending an input (e.g. a request).
///
/// A handler typically reads an explicit preference from the input itself
/// (e.g. a query parameter) and falls back to a previously stored one.
/// Storing the preference across requests is up to the implementation.
///
/// Implemented for:
///
/// - any `Fn(&Input) -> Option<SitePreference>`;
/// - a [`SitePreference`], which is returned for every input.
pub trait SitePreferenceHandler<Input>: Send + Sync + 'static {
    /// Determine the [`SitePreference`] for the given input, if any.
    fn handle_site_preference(&self, input: &Input) -> Option<SitePreference>;
}

impl<Input, F> SitePreferenceHandler<Input> for F
where
    F: Fn(&Input) -> Option<SitePreference> + Send + Sync + 'static,
{
    #[inline]
    fn handle_site_preference(&self, input: &Input) -> Option<SitePreference> {
        (self)(input)
    }
}

impl<Input> SitePreferenceHandler<Input> for SitePreference {
    #[inline]
    fn handle_site_preference(&self, _input: &Input) -> Option<SitePreference> {
        Some(*self)
    }
}
