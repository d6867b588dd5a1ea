//! utilities crate for tailor
//!
//! `tailor-utils` contains utilities used by `tailor`,
//! not really being part of one of the other crates, or used
//! by plenty of other crates.
//!
//! # Tailor
//!
//! Crate used by the end-user `tailor` crate and `tailor` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(hidden)]
#[macro_use]
pub mod macros;

pub mod info;
