//! Layer type and utilities.
//!
//! Layers are the abstraction of middleware in Tailor.
//!
//! Direct copy of [tower-layer](https://docs.rs/tower-layer/0.3.0/tower_layer/trait.Layer.html),
//! with the addition of [`Layer::into_layer`].

/// A layer that produces a Layered service (middleware(inner service)).
pub trait Layer<S> {
    /// The service produced by the layer.
    type Service;

    /// Wrap the given service with the middleware, returning a new service.
    fn layer(&self, inner: S) -> Self::Service;

    /// Same as `layer` but consuming self after the service was created.
    ///
    /// This is useful in case you are (re)creating a layer only
    /// to wrap a single service, in which case there is no
    /// need to clone the layer's state.
    fn into_layer(self, inner: S) -> Self::Service
    where
        Self: Sized,
    {
        self.layer(inner)
    }
}

impl<T, S> Layer<S> for &T
where
    T: ?Sized + Layer<S>,
{
    type Service = T::Service;

    fn layer(&self, inner: S) -> Self::Service {
        (**self).layer(inner)
    }
}

impl<S> Layer<S> for () {
    type Service = S;

    fn layer(&self, service: S) -> Self::Service {
        service
    }
}

impl<S, L1> Layer<S> for (L1,)
where
    L1: Layer<S>,
{
    type Service = L1::Service;

    fn layer(&self, service: S) -> Self::Service {
        let (l1,) = self;
        l1.layer(service)
    }

    fn into_layer(self, service: S) -> Self::Service {
        let (l1,) = self;
        l1.into_layer(service)
    }
}

impl<S, L1, L2> Layer<S> for (L1, L2)
where
    L1: Layer<L2::Service>,
    L2: Layer<S>,
{
    type Service = L1::Service;

    fn layer(&self, service: S) -> Self::Service {
        let (l1, l2) = self;
        l1.layer(l2.layer(service))
    }

    fn into_layer(self, service: S) -> Self::Service {
        let (l1, l2) = self;
        l1.into_layer(l2.into_layer(service))
    }
}

impl<S, L1, L2, L3> Layer<S> for (L1, L2, L3)
where
    L1: Layer<L2::Service>,
    L2: Layer<L3::Service>,
    L3: Layer<S>,
{
    type Service = L1::Service;

    fn layer(&self, service: S) -> Self::Service {
        let (l1, l2, l3) = self;
        l1.layer((l2, l3).layer(service))
    }

    fn into_layer(self, service: S) -> Self::Service {
        let (l1, l2, l3) = self;
        l1.into_layer((l2, l3).into_layer(service))
    }
}

impl<S, L1, L2, L3, L4> Layer<S> for (L1, L2, L3, L4)
where
    L1: Layer<L2::Service>,
    L2: Layer<L3::Service>,
    L3: Layer<L4::Service>,
    L4: Layer<S>,
{
    type Service = L1::Service;

    fn layer(&self, service: S) -> Self::Service {
        let (l1, l2, l3, l4) = self;
        l1.layer((l2, l3, l4).layer(service))
    }

    fn into_layer(self, service: S) -> Self::Service {
        let (l1, l2, l3, l4) = self;
        l1.into_layer((l2, l3, l4).into_layer(service))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Wrapped<S>(&'static str, S);

    struct Named(&'static str);

    impl<S> Layer<S> for Named {
        type Service = Wrapped<S>;

        fn layer(&self, inner: S) -> Self::Service {
            Wrapped(self.0, inner)
        }
    }

    #[test]
    fn tuple_layers_wrap_outer_first() {
        let svc = (Named("a"), Named("b"), Named("c")).into_layer(());
        assert_eq!(svc, Wrapped("a", Wrapped("b", Wrapped("c", ()))));
    }

    #[test]
    fn unit_layer_is_identity() {
        assert_eq!(().layer(42), 42);
    }
}
