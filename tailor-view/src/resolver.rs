use crate::{ViewNameConfig, compute_view_name};
use std::{fmt, sync::Arc};
use tailor_device::EffectiveCategory;

/// Resolves a view name into a renderable view.
///
/// This is the seam to the template engine being delegated to.
/// A resolver returns `Ok(None)` when it has no view for the given name,
/// which is what makes fallback resolution possible. Errors are reserved
/// for actual failures (e.g. I/O or a broken template).
///
/// Use [`view_resolver_fn`] to turn a function into a [`ViewResolver`].
pub trait ViewResolver: Send + Sync + 'static {
    /// The view produced by this resolver.
    type View;
    /// The error returned when resolving failed.
    type Error;

    /// Resolve the view with the given name, if it exists.
    fn resolve_view_name(&self, view_name: &str) -> Result<Option<Self::View>, Self::Error>;
}

/// Create a [`ViewResolverFn`] from a function.
pub fn view_resolver_fn<F, V, E>(f: F) -> ViewResolverFn<F>
where
    F: Fn(&str) -> Result<Option<V>, E> + Send + Sync + 'static,
{
    ViewResolverFn(f)
}

/// A [`ViewResolver`] implemented using a function,
/// created using [`view_resolver_fn`].
#[derive(Clone)]
pub struct ViewResolverFn<F>(F);

impl<F> fmt::Debug for ViewResolverFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ViewResolverFn").finish()
    }
}

impl<F, V, E> ViewResolver for ViewResolverFn<F>
where
    F: Fn(&str) -> Result<Option<V>, E> + Send + Sync + 'static,
{
    type View = V;
    type Error = E;

    #[inline]
    fn resolve_view_name(&self, view_name: &str) -> Result<Option<V>, E> {
        (self.0)(view_name)
    }
}

impl<R: ?Sized + ViewResolver> ViewResolver for Arc<R> {
    type View = R::View;
    type Error = R::Error;

    #[inline]
    fn resolve_view_name(&self, view_name: &str) -> Result<Option<Self::View>, Self::Error> {
        (**self).resolve_view_name(view_name)
    }
}

impl<R: ?Sized + ViewResolver> ViewResolver for Box<R> {
    type View = R::View;
    type Error = R::Error;

    #[inline]
    fn resolve_view_name(&self, view_name: &str) -> Result<Option<Self::View>, Self::Error> {
        (**self).resolve_view_name(view_name)
    }
}

/// Resolve a view for the given category using the given delegate.
///
/// The adjusted view name (see [`compute_view_name`]) is resolved first.
/// If the delegate has no view for it and `enable_fallback` is set,
/// the unadjusted `base_name` is resolved instead.
///
/// # Errors
///
/// Any error of the delegate is returned as-is. Fallback resolution
/// is only attempted when the delegate found no view, never on error.
pub fn resolve_view<R>(
    base_name: &str,
    category: EffectiveCategory,
    config: &ViewNameConfig,
    delegate: &R,
    enable_fallback: bool,
) -> Result<Option<R::View>, R::Error>
where
    R: ViewResolver + ?Sized,
{
    let device_view_name = compute_view_name(base_name, category, config);
    tracing::trace!(
        %category,
        view_name = base_name,
        device_view_name = %device_view_name,
        "resolve device view name",
    );
    if let Some(view) = delegate.resolve_view_name(&device_view_name)? {
        return Ok(Some(view));
    }
    if enable_fallback {
        tracing::trace!(
            view_name = base_name,
            device_view_name = %device_view_name,
            "no view found for device view name: fallback to original view name",
        );
        return delegate.resolve_view_name(base_name);
    }
    Ok(None)
}

/// A [`ViewResolver`] backed by a fixed set of view names,
/// mostly useful for tests and static sites.
#[derive(Clone, Default)]
pub struct StaticViewResolver<V> {
    views: Vec<(String, V)>,
}

impl<V> StaticViewResolver<V> {
    /// Create a new empty [`StaticViewResolver`].
    #[must_use]
    pub const fn new() -> Self {
        Self { views: Vec::new() }
    }

    /// Add a view under the given name, replacing any previous one.
    #[must_use]
    pub fn with_view(mut self, name: impl Into<String>, view: V) -> Self {
        self.set_view(name, view);
        self
    }

    /// Add a view under the given name, replacing any previous one.
    pub fn set_view(&mut self, name: impl Into<String>, view: V) -> &mut Self {
        let name = name.into();
        match self.views.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = view,
            None => self.views.push((name, view)),
        }
        self
    }
}

impl<V: fmt::Debug> fmt::Debug for StaticViewResolver<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.views.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<V> ViewResolver for StaticViewResolver<V>
where
    V: Clone + Send + Sync + 'static,
{
    type View = V;
    type Error = std::convert::Infallible;

    fn resolve_view_name(&self, view_name: &str) -> Result<Option<V>, Self::Error> {
        Ok(self
            .views
            .iter()
            .find_map(|(name, view)| (name == view_name).then(|| view.clone())))
    }
}
