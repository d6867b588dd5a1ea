use crate::{LOWEST_PRECEDENCE, ViewNameConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tailor_core::error::{ErrorContext, OpaqueError};

/// Configuration of a [`DeviceDelegatingViewResolver`],
/// loadable from a JSON document.
///
/// ```
/// use tailor_view::DeviceViewConfig;
///
/// let config = DeviceViewConfig::from_json(r#"{
///     "view_names": {
///         "mobile": { "prefix": "mobile/" },
///         "tablet": { "prefix": "tablet/", "suffix": ".html" }
///     },
///     "enable_fallback": true
/// }"#).unwrap();
///
/// assert_eq!(config.view_names.mobile.prefix, "mobile/");
/// assert_eq!(config.view_names.normal.prefix, "");
/// assert!(config.enable_fallback);
/// ```
///
/// Unknown fields are rejected, so a misspelled key
/// is an error instead of a config that silently does nothing.
///
/// [`DeviceDelegatingViewResolver`]: crate::DeviceDelegatingViewResolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceViewConfig {
    /// Prefix and suffix per category.
    pub view_names: ViewNameConfig,
    /// Resolve the original view name if the adjusted one has no view.
    pub enable_fallback: bool,
    /// Order within a [`ViewResolverChain`], lower goes first.
    ///
    /// [`ViewResolverChain`]: crate::ViewResolverChain
    pub order: i32,
}

impl Default for DeviceViewConfig {
    fn default() -> Self {
        Self {
            view_names: ViewNameConfig::default(),
            enable_fallback: false,
            order: LOWEST_PRECEDENCE,
        }
    }
}

impl DeviceViewConfig {
    /// Parse a [`DeviceViewConfig`] from a JSON document.
    ///
    /// Missing fields take their default value.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid config.
    pub fn from_json(json: &str) -> Result<Self, OpaqueError> {
        serde_json::from_str(json).context("parse device view config")
    }

    /// Read and parse a [`DeviceViewConfig`] from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid config.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, OpaqueError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read device view config file {}", path.display()))?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "device view config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document() {
        let config = DeviceViewConfig::from_json("{}").unwrap();
        assert_eq!(config, DeviceViewConfig::default());
        assert_eq!(config.order, LOWEST_PRECEDENCE);
    }

    #[test]
    fn test_full_document() {
        let config = DeviceViewConfig::from_json(
            r#"{
                "view_names": {
                    "normal": { "prefix": "n/", "suffix": ".n" },
                    "mobile": { "prefix": "m/", "suffix": ".m" },
                    "tablet": { "suffix": ".t" }
                },
                "enable_fallback": true,
                "order": 5
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.view_names,
            ViewNameConfig::default()
                .with_normal_prefix("n/")
                .with_normal_suffix(".n")
                .with_mobile_prefix("m/")
                .with_mobile_suffix(".m")
                .with_tablet_suffix(".t")
        );
        assert!(config.enable_fallback);
        assert_eq!(config.order, 5);
    }

    #[test]
    fn test_invalid_document() {
        let err = DeviceViewConfig::from_json(r#"{ "enable_fallback": "yes" }"#).unwrap_err();
        assert!(
            err.to_string().starts_with("parse device view config: "),
            "err: {err}"
        );
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        for json in [
            r#"{ "mobilePrefix": "m/" }"#,
            r#"{ "mobilePrefix": "m/", "enableFallback": true }"#,
            r#"{ "mobile": { "prefix": "m/" } }"#,
            r#"{ "view_names": { "mobil": { "prefix": "m/" } } }"#,
            r#"{ "view_names": { "mobile": { "prefx": "m/" } } }"#,
        ] {
            let err = DeviceViewConfig::from_json(json).unwrap_err();
            assert!(
                err.to_string().contains("unknown field"),
                "json: {json}, err: {err}"
            );
        }
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "view_names": { "mobile": { "prefix": "mobile/" } } }"#)
            .unwrap();
        let config = DeviceViewConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.view_names.mobile.prefix, "mobile/");
        assert!(!config.enable_fallback);
    }

    #[test]
    fn test_from_missing_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DeviceViewConfig::from_json_file(dir.path().join("missing.json")).unwrap_err();
        assert!(
            err.to_string().starts_with("read device view config file "),
            "err: {err}"
        );
    }
}
