//! `async fn serve(&self, Input) -> Result<Output, Error>`
//!
//! # tailor service
//!
//! Heavily inspired by [tower-service](https://docs.rs/tower-service/0.3.0/tower_service/trait.Service.html),
//! reduced to what a request pipeline needs to carry request-scoped values
//! (such as the resolved device) from one stage to the next.
//!
//! A request pipeline is built out of a leaf [`Service`] wrapped by
//! [`Layer`]s (middleware). Request-scoped values travel in the
//! [`Extensions`] of the input, accessible through
//! [`ExtensionsRef`] and [`ExtensionsMut`].
//!
//! [`Extensions`]: extensions::Extensions
//! [`ExtensionsRef`]: extensions::ExtensionsRef
//! [`ExtensionsMut`]: extensions::ExtensionsMut
//!
//! # Tailor
//!
//! Crate used by the end-user `tailor` crate and `tailor` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

pub mod error {
    //! Re-export of the `tailor-error` crate.

    #[doc(inline)]
    pub use tailor_error::*;
}

pub mod extensions;

mod input;
pub use input::ServiceInput;

pub mod service;
pub use service::Service;

pub mod layer;
pub use layer::Layer;

pub mod telemetry {
    //! Telemetry modules for tailor.

    #[doc(inline)]
    pub use ::tracing;
}
