//! cli arguments shared by the tailor commands

use tailor::{
    device::{Device, DevicePlatform, DeviceType, SitePreference},
    error::OpaqueError,
    view::DeviceViewConfig,
};

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
/// the (already classified) device and site preference of the request
pub struct DeviceArgs {
    #[arg(long)]
    /// the device type of the request: normal, mobile or tablet
    ///
    /// (no device is resolved when omitted)
    pub device: Option<DeviceType>,

    #[arg(long, default_value_t = DevicePlatform::Unknown)]
    /// the platform of the device: ios, android or unknown
    pub platform: DevicePlatform,

    #[arg(long)]
    /// the site preference of the user: normal, mobile or tablet
    pub site_preference: Option<SitePreference>,
}

impl DeviceArgs {
    /// The [`Device`] described by these arguments, if any.
    pub fn device(&self) -> Option<Device> {
        self.device
            .map(|device_type| Device::new(device_type, self.platform))
    }
}

#[derive(Debug, Clone, Default, Args)]
/// how view names are adjusted per device category
pub struct ViewArgs {
    #[arg(long)]
    /// json config file with the view name prefixes, suffixes and fallback
    ///
    /// flags passed explicitly override the values of this file
    pub config: Option<PathBuf>,

    #[arg(long)]
    /// prefix prepended to view names for normal devices
    pub normal_prefix: Option<String>,

    #[arg(long)]
    /// suffix appended to view names for normal devices
    pub normal_suffix: Option<String>,

    #[arg(long)]
    /// prefix prepended to view names for mobile devices
    pub mobile_prefix: Option<String>,

    #[arg(long)]
    /// suffix appended to view names for mobile devices
    pub mobile_suffix: Option<String>,

    #[arg(long)]
    /// prefix prepended to view names for tablet devices
    pub tablet_prefix: Option<String>,

    #[arg(long)]
    /// suffix appended to view names for tablet devices
    pub tablet_suffix: Option<String>,

    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    /// resolve the original view name if the adjusted one has no view
    ///
    /// `--fallback` enables it, `--fallback=false` disables it,
    /// when omitted the value of the config file is used (default: false)
    pub fallback: Option<bool>,
}

impl ViewArgs {
    /// Load the [`DeviceViewConfig`], overwritten by the explicit flags.
    pub fn into_config(self) -> Result<DeviceViewConfig, OpaqueError> {
        let mut config = match self.config.as_deref() {
            Some(path) => DeviceViewConfig::from_json_file(path)?,
            None => DeviceViewConfig::default(),
        };

        let names = &mut config.view_names;
        if let Some(prefix) = self.normal_prefix {
            names.set_normal_prefix(prefix);
        }
        if let Some(suffix) = self.normal_suffix {
            names.set_normal_suffix(suffix);
        }
        if let Some(prefix) = self.mobile_prefix {
            names.set_mobile_prefix(prefix);
        }
        if let Some(suffix) = self.mobile_suffix {
            names.set_mobile_suffix(suffix);
        }
        if let Some(prefix) = self.tablet_prefix {
            names.set_tablet_prefix(prefix);
        }
        if let Some(suffix) = self.tablet_suffix {
            names.set_tablet_suffix(suffix);
        }
        if let Some(enable_fallback) = self.fallback {
            config.enable_fallback = enable_fallback;
        }

        Ok(config)
    }
}
