//! utilities shared by the tailor cli commands

pub mod args;
pub mod fs;
