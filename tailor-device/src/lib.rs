//! Device classification and site preference support.
//!
//! This crate provides the data model used to tailor responses
//! to the device a request originates from:
//!
//! - [`Device`]: the classification ([`DeviceType`]) and [`DevicePlatform`]
//!   of the client, as produced by a [`DeviceResolver`];
//! - [`SitePreference`]: an explicit user override of that classification,
//!   as produced by a [`SitePreferenceHandler`];
//! - [`EffectiveCategory`]: the single category actually used,
//!   computed by [`resolve_category`].
//!
//! The [`DeviceResolverLayer`] and [`SitePreferenceLayer`] store the resolved
//! values in the [`Extensions`] of the input, from where they can be read
//! by later stages using [`current_device`], [`required_current_device`],
//! [`current_site_preference`] and [`current_category`].
//!
//! Classifying a device from a `User-Agent` header is not part of this crate,
//! any [`DeviceResolver`] can be plugged in. Likewise the persistence of a
//! site preference is left to the [`SitePreferenceHandler`].
//!
//! [`Extensions`]: tailor_core::extensions::Extensions
//!
//! # Example
//!
//! ```
//! use tailor_device::{resolve_category, Device, EffectiveCategory, SitePreference};
//!
//! assert_eq!(resolve_category(Some(&Device::MOBILE), None), EffectiveCategory::Mobile);
//! assert_eq!(
//!     resolve_category(Some(&Device::MOBILE), Some(SitePreference::Normal)),
//!     EffectiveCategory::Normal,
//! );
//! assert_eq!(resolve_category(None, None), EffectiveCategory::Normal);
//! ```
//!
//! # Tailor
//!
//! Crate used by the end-user `tailor` crate and `tailor` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod device;
pub use device::{Device, DevicePlatform, DeviceType};

mod site;
pub use site::SitePreference;

mod category;
pub use category::{EffectiveCategory, is_mobile, is_normal, is_tablet, resolve_category};

mod resolver;
pub use resolver::{DeviceResolver, SitePreferenceHandler};

mod current;
pub use current::{
    CURRENT_DEVICE_ATTRIBUTE, CURRENT_SITE_PREFERENCE_ATTRIBUTE, MissingDeviceError,
    current_category, current_device, current_site_preference, required_current_device,
};

pub mod layer;
#[doc(inline)]
pub use layer::{
    DeviceResolverLayer, DeviceResolverService, SitePreferenceLayer, SitePreferenceService,
};
