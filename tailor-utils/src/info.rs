//! Build information about the tailor crates.

/// Name of the tailor project.
pub const NAME: &str = "tailor";

/// Version of the tailor crates, as found in the workspace manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
