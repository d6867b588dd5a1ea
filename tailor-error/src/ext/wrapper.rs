use crate::BoxError;
use std::fmt::{self, Debug, Display};

#[repr(transparent)]
/// A type-erased error type that can be used as a trait object.
///
/// It is what [`ErrorContext`] and [`ErrorExt`] produce,
/// and can be used directly to turn a message into an error.
///
/// [`ErrorContext`]: crate::ErrorContext
/// [`ErrorExt`]: crate::ErrorExt
pub struct OpaqueError(BoxError);

impl OpaqueError {
    /// create an [`OpaqueError`] from an std error
    pub fn from_std(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(error))
    }

    /// create an [`OpaqueError`] from a display object
    pub fn from_display(msg: impl Display + Debug + Send + Sync + 'static) -> Self {
        Self::from_std(MessageError(msg))
    }

    /// create an [`OpaqueError`] from a boxed error
    #[must_use]
    pub fn from_boxed(inner: BoxError) -> Self {
        Self(inner)
    }

    /// Consume the [`OpaqueError`] and return the inner [`BoxError`].
    #[must_use]
    pub fn into_boxed(self) -> BoxError {
        self.0
    }
}

impl Debug for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl std::error::Error for OpaqueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

#[repr(transparent)]
/// An error type that wraps a message.
pub(crate) struct MessageError<M>(pub(crate) M);

impl<M> Debug for MessageError<M>
where
    M: Display + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<M> Display for MessageError<M>
where
    M: Display + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<M> std::error::Error for MessageError<M> where M: Display + Debug + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_error_from_display() {
        let error = OpaqueError::from_display("invalid device: phablet");
        assert_eq!(error.to_string(), "invalid device: phablet");
        assert!(std::error::Error::source(&error).is_none());
    }

    #[test]
    fn opaque_error_boxed_round_trip_keeps_type() {
        let error = OpaqueError::from_std(std::fmt::Error);
        let boxed = error.into_boxed();
        assert!(boxed.downcast_ref::<std::fmt::Error>().is_some());
    }
}
