//! Device-aware view resolution for tailor.
//!
//! Rewrites logical view names into a device specific variant
//! (e.g. `home` into `mobile/home`) based on the [`EffectiveCategory`]
//! of a request, and resolves them through a delegate [`ViewResolver`],
//! optionally falling back to the original view name.
//!
//! - [`compute_view_name`]: the pure view name transformation;
//! - [`resolve_view`]: resolution through a delegate with fallback;
//! - [`DeviceDelegatingViewResolver`]: the configured resolver, reading
//!   the category from the request extensions;
//! - [`ViewResolverChain`]: ordered chain of resolvers.
//!
//! [`EffectiveCategory`]: tailor_device::EffectiveCategory
//!
//! # Tailor
//!
//! Crate used by the end-user `tailor` crate and `tailor` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod name;
pub use name::{
    FORWARD_URL_PREFIX, REDIRECT_URL_PREFIX, ViewAffix, ViewNameConfig, compute_view_name,
    is_passthrough_view_name,
};

mod resolver;
pub use resolver::{
    StaticViewResolver, ViewResolver, ViewResolverFn, resolve_view, view_resolver_fn,
};

mod delegating;
pub use delegating::{CategoryViewResolver, DeviceDelegatingViewResolver, LOWEST_PRECEDENCE};

mod chain;
pub use chain::ViewResolverChain;

mod config;
pub use config::DeviceViewConfig;
