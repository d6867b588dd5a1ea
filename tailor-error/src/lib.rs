//! Error types for tailor.
//!
//! The [`BoxError`] type is a type-erased error type that can be used to represent any error that
//! implements the `std::error::Error` trait and is used for cases where it is usually not
//! that important what specific error type is returned, but rather that an error occurred.
//!
//! That said, one can use downcasting or [`ErrorExt`] to try to get the cause of the error.
//!
//! Errors that callers are expected to act upon (e.g. a missing device
//! in the request) are modelled as their own types within the crate that
//! produces them, and can be recovered from a [`BoxError`] via downcasting.
//!
//! # Tailor
//!
//! Crate used by the end-user `tailor` crate and `tailor` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

mod ext;
pub use ext::{ErrorContext, ErrorExt, OpaqueError};
