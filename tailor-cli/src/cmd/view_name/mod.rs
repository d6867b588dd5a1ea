//! Print the device specific view name for a view name.

use tailor::{
    device::resolve_category,
    error::{BoxError, ErrorContext},
    telemetry::tracing,
    view::compute_view_name,
};

use clap::Args;
use std::io::Write as _;

use crate::utils::args::{DeviceArgs, ViewArgs};

#[derive(Debug, Args)]
/// tailor view-name command (print the adjusted view name)
pub struct CliCommandViewName {
    /// the logical view name to adjust
    name: String,

    #[command(flatten)]
    device: DeviceArgs,

    #[command(flatten)]
    view: ViewArgs,
}

/// Compute the adjusted view name for the given command.
pub fn device_view_name(cfg: CliCommandViewName) -> Result<String, BoxError> {
    let device = cfg.device.device();
    let category = resolve_category(device.as_ref(), cfg.device.site_preference);
    let config = cfg.view.into_config()?;

    let view_name = compute_view_name(&cfg.name, category, &config.view_names);
    tracing::debug!(
        name = %cfg.name,
        %category,
        view_name = %view_name,
        "computed device view name",
    );
    Ok(view_name)
}

/// run the tailor view-name command
pub async fn run(cfg: CliCommandViewName) -> Result<(), BoxError> {
    let view_name = device_view_name(cfg)?;
    writeln!(std::io::stdout().lock(), "{view_name}").context("write view name to stdout")?;
    Ok(())
}
