//! Middleware that resolves the device and site preference of incoming inputs.
//!
//! # Example
//!
//! ```
//! use tailor_core::{Layer, Service, ServiceInput, service::service_fn};
//! use tailor_device::{
//!     current_category, Device, DevicePlatform, DeviceResolverLayer, DeviceType,
//!     EffectiveCategory, SitePreference, SitePreferenceLayer,
//! };
//! use std::convert::Infallible;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let service = (
//!     DeviceResolverLayer::new(|req: &ServiceInput<&'static str>| {
//!         req.contains("iPad").then_some(Device::new(DeviceType::Tablet, DevicePlatform::IOS))
//!     }),
//!     SitePreferenceLayer::new(|req: &ServiceInput<&'static str>| {
//!         req.contains("site_preference=normal").then_some(SitePreference::Normal)
//!     }),
//! )
//!     .into_layer(service_fn(async |req: ServiceInput<&'static str>| {
//!         Ok::<_, Infallible>(current_category(&req))
//!     }));
//!
//! let category = service.serve(ServiceInput::new("iPad")).await.unwrap();
//! assert_eq!(category, EffectiveCategory::Tablet);
//!
//! let category = service
//!     .serve(ServiceInput::new("iPad ?site_preference=normal"))
//!     .await
//!     .unwrap();
//! assert_eq!(category, EffectiveCategory::Normal);
//! # }
//! ```

use crate::{
    CURRENT_DEVICE_ATTRIBUTE, CURRENT_SITE_PREFERENCE_ATTRIBUTE, DeviceResolver,
    SitePreferenceHandler,
};
use std::fmt;
use tailor_core::{Layer, Service, extensions::ExtensionsMut};
use tailor_utils::macros::define_inner_service_accessors;

/// A [`Service`] that resolves the [`Device`] of incoming inputs
/// using a [`DeviceResolver`], before passing them to the inner service.
///
/// The [`Device`] is stored in the [`Extensions`] of the input.
/// Nothing is stored if the resolver could not resolve a device.
///
/// [`Device`]: crate::Device
/// [`Extensions`]: tailor_core::extensions::Extensions
pub struct DeviceResolverService<S, R> {
    inner: S,
    resolver: R,
}

impl<S, R> DeviceResolverService<S, R> {
    /// Create a new [`DeviceResolverService`].
    pub const fn new(inner: S, resolver: R) -> Self {
        Self { inner, resolver }
    }

    /// Gets a reference to the [`DeviceResolver`] used.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    define_inner_service_accessors!();
}

impl<S: fmt::Debug, R: fmt::Debug> fmt::Debug for DeviceResolverService<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceResolverService")
            .field("inner", &self.inner)
            .field("resolver", &self.resolver)
            .finish()
    }
}

impl<S: Clone, R: Clone> Clone for DeviceResolverService<S, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            resolver: self.resolver.clone(),
        }
    }
}

impl<Input, S, R> Service<Input> for DeviceResolverService<S, R>
where
    Input: ExtensionsMut + Send + 'static,
    S: Service<Input>,
    R: DeviceResolver<Input>,
{
    type Response = S::Response;
    type Error = S::Error;

    fn serve(
        &self,
        mut input: Input,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send + '_ {
        match self.resolver.resolve_device(&input) {
            Some(device) => {
                tracing::trace!(
                    attribute = CURRENT_DEVICE_ATTRIBUTE,
                    device_type = %device.device_type(),
                    platform = %device.platform(),
                    "device resolved for input",
                );
                input.extensions_mut().insert(device);
            }
            None => {
                tracing::trace!(
                    attribute = CURRENT_DEVICE_ATTRIBUTE,
                    "no device resolved for input"
                );
            }
        }
        self.inner.serve(input)
    }
}

/// A [`Layer`] that wraps a [`Service`] with a [`DeviceResolverService`].
///
/// This is the pre-handler stage which makes the [`Device`] available
/// to all later stages, see [`current_device`] and [`required_current_device`].
///
/// [`Device`]: crate::Device
/// [`current_device`]: crate::current_device
/// [`required_current_device`]: crate::required_current_device
#[derive(Debug, Clone)]
pub struct DeviceResolverLayer<R> {
    resolver: R,
}

impl<R> DeviceResolverLayer<R> {
    /// Create a new [`DeviceResolverLayer`] using the given [`DeviceResolver`].
    pub const fn new(resolver: R) -> Self {
        Self { resolver }
    }
}

impl<S, R: Clone> Layer<S> for DeviceResolverLayer<R> {
    type Service = DeviceResolverService<S, R>;

    fn layer(&self, inner: S) -> Self::Service {
        DeviceResolverService::new(inner, self.resolver.clone())
    }

    fn into_layer(self, inner: S) -> Self::Service {
        DeviceResolverService::new(inner, self.resolver)
    }
}

/// A [`Service`] that determines the [`SitePreference`] of incoming inputs
/// using a [`SitePreferenceHandler`], before passing them to the inner service.
///
/// The [`SitePreference`] is stored in the [`Extensions`] of the input.
/// Nothing is stored if the handler returned no preference.
///
/// [`SitePreference`]: crate::SitePreference
/// [`Extensions`]: tailor_core::extensions::Extensions
pub struct SitePreferenceService<S, H> {
    inner: S,
    handler: H,
}

impl<S, H> SitePreferenceService<S, H> {
    /// Create a new [`SitePreferenceService`].
    pub const fn new(inner: S, handler: H) -> Self {
        Self { inner, handler }
    }

    /// Gets a reference to the [`SitePreferenceHandler`] used.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    define_inner_service_accessors!();
}

impl<S: fmt::Debug, H: fmt::Debug> fmt::Debug for SitePreferenceService<S, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SitePreferenceService")
            .field("inner", &self.inner)
            .field("handler", &self.handler)
            .finish()
    }
}

impl<S: Clone, H: Clone> Clone for SitePreferenceService<S, H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl<Input, S, H> Service<Input> for SitePreferenceService<S, H>
where
    Input: ExtensionsMut + Send + 'static,
    S: Service<Input>,
    H: SitePreferenceHandler<Input>,
{
    type Response = S::Response;
    type Error = S::Error;

    fn serve(
        &self,
        mut input: Input,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send + '_ {
        if let Some(site_preference) = self.handler.handle_site_preference(&input) {
            tracing::trace!(
                attribute = CURRENT_SITE_PREFERENCE_ATTRIBUTE,
                %site_preference,
                "site preference determined for input",
            );
            input.extensions_mut().insert(site_preference);
        }
        self.inner.serve(input)
    }
}

/// A [`Layer`] that wraps a [`Service`] with a [`SitePreferenceService`].
///
/// See [`current_site_preference`] to read the stored preference.
///
/// [`current_site_preference`]: crate::current_site_preference
#[derive(Debug, Clone)]
pub struct SitePreferenceLayer<H> {
    handler: H,
}

impl<H> SitePreferenceLayer<H> {
    /// Create a new [`SitePreferenceLayer`] using the given [`SitePreferenceHandler`].
    pub const fn new(handler: H) -> Self {
        Self { handler }
    }
}

impl<S, H: Clone> Layer<S> for SitePreferenceLayer<H> {
    type Service = SitePreferenceService<S, H>;

    fn layer(&self, inner: S) -> Self::Service {
        SitePreferenceService::new(inner, self.handler.clone())
    }

    fn into_layer(self, inner: S) -> Self::Service {
        SitePreferenceService::new(inner, self.handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Device, DevicePlatform, DeviceType, MissingDeviceError, SitePreference, current_device,
        current_site_preference, required_current_device,
    };
    use std::convert::Infallible;
    use tailor_core::{ServiceInput, service::service_fn};

    type Req = ServiceInput<&'static str>;

    fn sniff(req: &Req) -> Option<Device> {
        if req.contains("iPad") {
            Some(Device::new(DeviceType::Tablet, DevicePlatform::IOS))
        } else if req.contains("Android") {
            Some(Device::new(DeviceType::Mobile, DevicePlatform::Android))
        } else {
            None
        }
    }

    #[tokio::test]
    async fn test_device_resolver_layer_stores_device() {
        let svc = DeviceResolverLayer::new(sniff).into_layer(service_fn(async |req: Req| {
            Ok::<_, Infallible>(current_device(&req).copied())
        }));

        assert_eq!(
            svc.serve(ServiceInput::new("Mozilla/5.0 (Linux; Android 14)"))
                .await
                .unwrap(),
            Some(Device::new(DeviceType::Mobile, DevicePlatform::Android))
        );
        assert_eq!(svc.serve(ServiceInput::new("curl/8.7.1")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_required_device_fails_without_layer() {
        let svc = service_fn(async |req: Req| {
            Ok::<_, Infallible>(required_current_device(&req).copied())
        });
        assert_eq!(
            svc.serve(ServiceInput::new("iPad")).await.unwrap(),
            Err(MissingDeviceError)
        );
    }

    #[tokio::test]
    async fn test_fixed_device_layer() {
        let layer = DeviceResolverLayer::new(Device::MOBILE);
        let svc = layer.layer(service_fn(async |req: Req| {
            Ok::<_, Infallible>(required_current_device(&req).copied())
        }));
        assert_eq!(
            svc.serve(ServiceInput::new("")).await.unwrap(),
            Ok(Device::MOBILE)
        );
    }

    #[tokio::test]
    async fn test_site_preference_layer() {
        let svc = SitePreferenceLayer::new(|req: &Req| {
            req.split_once("site_preference=")
                .and_then(|(_, value)| value.parse::<SitePreference>().ok())
        })
        .into_layer(service_fn(async |req: Req| {
            Ok::<_, Infallible>(current_site_preference(&req))
        }));

        assert_eq!(
            svc.serve(ServiceInput::new("/home?site_preference=tablet"))
                .await
                .unwrap(),
            Some(SitePreference::Tablet)
        );
        assert_eq!(svc.serve(ServiceInput::new("/home")).await.unwrap(), None);
        assert_eq!(
            svc.serve(ServiceInput::new("/home?site_preference=watch"))
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_layers_keep_existing_extensions() {
        let svc = (
            DeviceResolverLayer::new(sniff),
            SitePreferenceLayer::new(SitePreference::Normal),
        )
            .into_layer(service_fn(async |req: Req| {
                Ok::<_, Infallible>((
                    current_device(&req).copied(),
                    current_site_preference(&req),
                    req.extensions.get::<u8>().copied(),
                ))
            }));

        let mut req = ServiceInput::new("iPad");
        req.extensions.insert(7u8);

        assert_eq!(
            svc.serve(req).await.unwrap(),
            (
                Some(Device::new(DeviceType::Tablet, DevicePlatform::IOS)),
                Some(SitePreference::Normal),
                Some(7u8),
            )
        );
    }
}
