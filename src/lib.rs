//! Device-aware view resolution.
//!
//! Tailor classifies requests by the [`Device`] they originate from and
//! the explicit [`SitePreference`] of the user, and uses that to rewrite
//! logical view names into a device specific variant (e.g. `home` into
//! `mobile/home`), falling back to the original view when configured.
//!
//! | concern | where |
//! |---|---|
//! | device and site preference model | [`device`] |
//! | category resolution | [`device::resolve_category`] |
//! | request-scoped propagation | [`device::DeviceResolverLayer`], [`device::current_device`] |
//! | view name rewriting | [`view::compute_view_name`] |
//! | view resolution with fallback | [`view::DeviceDelegatingViewResolver`] |
//!
//! # Example
//!
//! ```
//! use tailor::{
//!     Layer, Service, ServiceInput,
//!     device::{Device, DeviceResolverLayer, SitePreference, SitePreferenceLayer},
//!     service::service_fn,
//!     view::{DeviceDelegatingViewResolver, StaticViewResolver, ViewNameConfig},
//! };
//! use std::{convert::Infallible, sync::Arc};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let resolver = Arc::new(
//!     DeviceDelegatingViewResolver::new(
//!         StaticViewResolver::new()
//!             .with_view("mobile/home", "mobile home")
//!             .with_view("home", "home"),
//!     )
//!     .with_view_names(ViewNameConfig::default().with_mobile_prefix("mobile/")),
//! );
//!
//! let service = (
//!     DeviceResolverLayer::new(|req: &ServiceInput<&'static str>| {
//!         req.contains("Mobile").then_some(Device::MOBILE)
//!     }),
//!     SitePreferenceLayer::new(|req: &ServiceInput<&'static str>| {
//!         req.contains("site_preference=normal").then_some(SitePreference::Normal)
//!     }),
//! )
//!     .into_layer(service_fn(move |req: ServiceInput<&'static str>| {
//!         let resolver = resolver.clone();
//!         async move { Ok::<_, Infallible>(resolver.resolve_view_for("home", &req).unwrap()) }
//!     }));
//!
//! assert_eq!(service.serve(ServiceInput::new("Mobile Safari")).await.unwrap(), Some("mobile home"));
//! assert_eq!(
//!     service.serve(ServiceInput::new("Mobile Safari site_preference=normal")).await.unwrap(),
//!     Some("home"),
//! );
//! # }
//! ```
//!
//! [`Device`]: device::Device
//! [`SitePreference`]: device::SitePreference

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(inline)]
pub use ::tailor_core::{Layer, Service, ServiceInput, error, extensions, layer, service};

pub mod telemetry {
    //! Telemetry modules for tailor.

    pub mod tracing {
        //! Re-export of the `tracing` crate,
        //! with its subscriber support behind the `telemetry` feature.

        #[doc(inline)]
        pub use ::tailor_core::telemetry::tracing::*;

        #[cfg(feature = "telemetry")]
        #[cfg_attr(docsrs, doc(cfg(feature = "telemetry")))]
        #[doc(inline)]
        pub use ::tracing_subscriber as subscriber;
    }
}

pub mod device {
    //! Device and site preference support.

    #[doc(inline)]
    pub use ::tailor_device::*;
}

pub mod view {
    //! Device-aware view resolution.

    #[doc(inline)]
    pub use ::tailor_view::*;
}

pub mod utils {
    //! Utilities for tailor.

    #[doc(inline)]
    pub use ::tailor_utils::info;
}
