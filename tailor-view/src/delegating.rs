//! The device delegating view resolver.
//!
//! Wraps the [`ViewResolver`] of a template engine so that views are
//! resolved under a device specific name first.
//!
//! # Example
//!
//! ```
//! use tailor_core::extensions::Extensions;
//! use tailor_device::{Device, EffectiveCategory, SitePreference};
//! use tailor_view::{DeviceDelegatingViewResolver, StaticViewResolver, ViewNameConfig};
//!
//! let templates = StaticViewResolver::new()
//!     .with_view("mobile/home", "mobile home page")
//!     .with_view("home", "home page")
//!     .with_view("about", "about page");
//!
//! let resolver = DeviceDelegatingViewResolver::new(templates)
//!     .with_view_names(ViewNameConfig::default().with_mobile_prefix("mobile/"))
//!     .with_enable_fallback(true);
//!
//! let mut ext = Extensions::new();
//! ext.insert(Device::MOBILE);
//! assert_eq!(resolver.resolve_view_for("home", &ext).unwrap(), Some("mobile home page"));
//! assert_eq!(resolver.resolve_view_for("about", &ext).unwrap(), Some("about page"));
//!
//! ext.insert(SitePreference::Normal);
//! assert_eq!(resolver.resolve_view_for("home", &ext).unwrap(), Some("home page"));
//! ```

use crate::{DeviceViewConfig, ViewNameConfig, ViewResolver, compute_view_name, resolve_view};
use std::fmt;
use tailor_core::extensions::ExtensionsRef;
use tailor_device::{EffectiveCategory, current_category};

/// The lowest precedence order, used by default.
pub const LOWEST_PRECEDENCE: i32 = i32::MAX;

/// A view resolver that adjusts view names to the
/// [`EffectiveCategory`] of a request before delegating
/// to the actual [`ViewResolver`].
///
/// See [`resolve_view`] for the exact resolution rules.
pub struct DeviceDelegatingViewResolver<R> {
    delegate: R,
    view_names: ViewNameConfig,
    enable_fallback: bool,
    order: i32,
}

impl<R> DeviceDelegatingViewResolver<R> {
    /// Create a new [`DeviceDelegatingViewResolver`] with an empty
    /// [`ViewNameConfig`], fallback disabled and the lowest precedence.
    pub const fn new(delegate: R) -> Self {
        Self {
            delegate,
            view_names: ViewNameConfig::new(),
            enable_fallback: false,
            order: LOWEST_PRECEDENCE,
        }
    }

    /// Create a new [`DeviceDelegatingViewResolver`] from a [`DeviceViewConfig`].
    pub fn from_config(delegate: R, config: DeviceViewConfig) -> Self {
        Self {
            delegate,
            view_names: config.view_names,
            enable_fallback: config.enable_fallback,
            order: config.order,
        }
    }

    /// Set the [`ViewNameConfig`] used to adjust view names.
    #[must_use]
    pub fn with_view_names(mut self, view_names: ViewNameConfig) -> Self {
        self.view_names = view_names;
        self
    }

    /// Set the [`ViewNameConfig`] used to adjust view names.
    pub fn set_view_names(&mut self, view_names: ViewNameConfig) -> &mut Self {
        self.view_names = view_names;
        self
    }

    /// Enable or disable fallback to the original view name,
    /// for when the adjusted view name cannot be resolved.
    #[must_use]
    pub fn with_enable_fallback(mut self, enable_fallback: bool) -> Self {
        self.enable_fallback = enable_fallback;
        self
    }

    /// Enable or disable fallback to the original view name,
    /// for when the adjusted view name cannot be resolved.
    pub fn set_enable_fallback(&mut self, enable_fallback: bool) -> &mut Self {
        self.enable_fallback = enable_fallback;
        self
    }

    /// Set the order of this resolver within a [`ViewResolverChain`].
    ///
    /// [`ViewResolverChain`]: crate::ViewResolverChain
    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Set the order of this resolver within a [`ViewResolverChain`].
    ///
    /// [`ViewResolverChain`]: crate::ViewResolverChain
    pub fn set_order(&mut self, order: i32) -> &mut Self {
        self.order = order;
        self
    }

    pub fn view_names(&self) -> &ViewNameConfig {
        &self.view_names
    }

    pub fn enable_fallback(&self) -> bool {
        self.enable_fallback
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    /// Gets a reference to the delegate [`ViewResolver`].
    pub fn delegate(&self) -> &R {
        &self.delegate
    }

    /// Consumes `self`, returning the delegate [`ViewResolver`].
    pub fn into_delegate(self) -> R {
        self.delegate
    }

    /// The view name adjusted for the given category.
    #[must_use]
    pub fn device_view_name(&self, view_name: &str, category: EffectiveCategory) -> String {
        compute_view_name(view_name, category, &self.view_names)
    }

    /// Bind this resolver to a fixed [`EffectiveCategory`],
    /// turning it into a [`ViewResolver`] itself.
    pub fn for_category(self, category: EffectiveCategory) -> CategoryViewResolver<R> {
        CategoryViewResolver {
            inner: self,
            category,
        }
    }
}

impl<R: ViewResolver> DeviceDelegatingViewResolver<R> {
    /// Resolve the view for the given category.
    ///
    /// # Errors
    ///
    /// Errors of the delegate are returned unchanged.
    pub fn resolve_view(
        &self,
        view_name: &str,
        category: EffectiveCategory,
    ) -> Result<Option<R::View>, R::Error> {
        let view = resolve_view(
            view_name,
            category,
            &self.view_names,
            &self.delegate,
            self.enable_fallback,
        )?;
        if view.is_some() {
            tracing::debug!(view_name, %category, "resolved view");
        }
        Ok(view)
    }

    /// Resolve the view for the [`EffectiveCategory`] of a request,
    /// derived from the device and site preference stored in it.
    ///
    /// A request without device or site preference is served as
    /// [`EffectiveCategory::Normal`].
    ///
    /// # Errors
    ///
    /// Errors of the delegate are returned unchanged.
    pub fn resolve_view_for<T>(
        &self,
        view_name: &str,
        request: &T,
    ) -> Result<Option<R::View>, R::Error>
    where
        T: ExtensionsRef + ?Sized,
    {
        self.resolve_view(view_name, current_category(request))
    }
}

impl<R: fmt::Debug> fmt::Debug for DeviceDelegatingViewResolver<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceDelegatingViewResolver")
            .field("delegate", &self.delegate)
            .field("view_names", &self.view_names)
            .field("enable_fallback", &self.enable_fallback)
            .field("order", &self.order)
            .finish()
    }
}

impl<R: Clone> Clone for DeviceDelegatingViewResolver<R> {
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
            view_names: self.view_names.clone(),
            enable_fallback: self.enable_fallback,
            order: self.order,
        }
    }
}

/// A [`DeviceDelegatingViewResolver`] bound to a fixed [`EffectiveCategory`],
/// created using [`DeviceDelegatingViewResolver::for_category`].
#[derive(Debug, Clone)]
pub struct CategoryViewResolver<R> {
    inner: DeviceDelegatingViewResolver<R>,
    category: EffectiveCategory,
}

impl<R> CategoryViewResolver<R> {
    pub fn category(&self) -> EffectiveCategory {
        self.category
    }

    pub fn order(&self) -> i32 {
        self.inner.order
    }

    /// Consumes `self`, returning the unbound [`DeviceDelegatingViewResolver`].
    pub fn into_inner(self) -> DeviceDelegatingViewResolver<R> {
        self.inner
    }
}

impl<R: ViewResolver> ViewResolver for CategoryViewResolver<R> {
    type View = R::View;
    type Error = R::Error;

    fn resolve_view_name(&self, view_name: &str) -> Result<Option<Self::View>, Self::Error> {
        self.inner.resolve_view(view_name, self.category)
    }
}
