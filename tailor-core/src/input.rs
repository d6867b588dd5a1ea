use crate::extensions::{Extensions, ExtensionsMut, ExtensionsRef};
use std::ops::{Deref, DerefMut};

/// A generic input for a [`Service`], pairing a value with its
/// request-scoped [`Extensions`].
///
/// Useful for pipelines whose request type does not carry
/// its own [`Extensions`], and in tests.
///
/// [`Service`]: crate::Service
#[derive(Debug, Clone, Default)]
pub struct ServiceInput<T> {
    /// The wrapped input value.
    pub input: T,
    /// The [`Extensions`] of this input.
    pub extensions: Extensions,
}

impl<T> ServiceInput<T> {
    /// Create a new [`ServiceInput`] with empty [`Extensions`].
    pub const fn new(input: T) -> Self {
        Self {
            input,
            extensions: Extensions::new(),
        }
    }

    /// Create a new [`ServiceInput`] with the given [`Extensions`].
    pub const fn with_extensions(input: T, extensions: Extensions) -> Self {
        Self { input, extensions }
    }

    /// Consume the [`ServiceInput`], returning the wrapped value and its [`Extensions`].
    pub fn into_parts(self) -> (T, Extensions) {
        (self.input, self.extensions)
    }
}

impl<T> ExtensionsRef for ServiceInput<T> {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

impl<T> ExtensionsMut for ServiceInput<T> {
    fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }
}

impl<T> Deref for ServiceInput<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.input
    }
}

impl<T> DerefMut for ServiceInput<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.input
    }
}
