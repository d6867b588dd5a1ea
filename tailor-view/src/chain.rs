use crate::ViewResolver;
use std::fmt;

type DynViewResolver<V, E> = Box<dyn ViewResolver<View = V, Error = E>>;

/// An ordered chain of [`ViewResolver`]s.
///
/// Resolvers are consulted in ascending order; resolvers with an
/// equal order are consulted in the order they were added.
/// The first resolver that finds a view wins.
///
/// Errors are not skipped over: the first error is returned
/// and later resolvers are not consulted.
pub struct ViewResolverChain<V, E> {
    resolvers: Vec<(i32, DynViewResolver<V, E>)>,
}

impl<V, E> ViewResolverChain<V, E> {
    /// Create a new empty [`ViewResolverChain`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// Add a resolver to the chain with the given order.
    #[must_use]
    pub fn with_resolver<R>(mut self, order: i32, resolver: R) -> Self
    where
        R: ViewResolver<View = V, Error = E>,
    {
        self.push_resolver(order, resolver);
        self
    }

    /// Add a resolver to the chain with the given order.
    pub fn push_resolver<R>(&mut self, order: i32, resolver: R) -> &mut Self
    where
        R: ViewResolver<View = V, Error = E>,
    {
        let index = self.resolvers.partition_point(|(o, _)| *o <= order);
        self.resolvers.insert(index, (order, Box::new(resolver)));
        self
    }

    /// The number of resolvers in this chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl<V, E> Default for ViewResolverChain<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> fmt::Debug for ViewResolverChain<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewResolverChain")
            .field(
                "orders",
                &self.resolvers.iter().map(|(o, _)| *o).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<V, E> ViewResolver for ViewResolverChain<V, E>
where
    V: 'static,
    E: 'static,
{
    type View = V;
    type Error = E;

    fn resolve_view_name(&self, view_name: &str) -> Result<Option<V>, E> {
        for (order, resolver) in &self.resolvers {
            if let Some(view) = resolver.resolve_view_name(view_name)? {
                tracing::trace!(view_name, order, "view resolved by chain");
                return Ok(Some(view));
            }
        }
        Ok(None)
    }
}
