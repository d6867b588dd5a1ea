use serde::{Deserialize, Serialize};
use tailor_device::EffectiveCategory;

/// View names starting with this marker redirect to another target
/// and are never adjusted.
pub const REDIRECT_URL_PREFIX: &str = "redirect:";

/// View names starting with this marker forward to another target
/// and are never adjusted.
pub const FORWARD_URL_PREFIX: &str = "forward:";

/// The prefix and suffix wrapped around a view name for one [`EffectiveCategory`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewAffix {
    /// Prepended to the view name.
    pub prefix: String,
    /// Appended to the view name.
    pub suffix: String,
}

impl ViewAffix {
    /// An affix that leaves view names untouched.
    pub const EMPTY: Self = Self {
        prefix: String::new(),
        suffix: String::new(),
    };

    /// Create a new [`ViewAffix`].
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Returns true if neither a prefix nor a suffix is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }

    fn apply(&self, view_name: &str) -> String {
        let mut name =
            String::with_capacity(self.prefix.len() + view_name.len() + self.suffix.len());
        name.push_str(&self.prefix);
        name.push_str(view_name);
        name.push_str(&self.suffix);
        name
    }
}

/// Per [`EffectiveCategory`] configuration of how view names are adjusted.
///
/// All prefixes and suffixes default to the empty string,
/// in which case view names are left untouched.
///
/// ```
/// use tailor_device::EffectiveCategory;
/// use tailor_view::{ViewNameConfig, compute_view_name};
///
/// let config = ViewNameConfig::default()
///     .with_mobile_prefix("mobile/")
///     .with_tablet_suffix(".tablet");
///
/// assert_eq!(compute_view_name("home", EffectiveCategory::Mobile, &config), "mobile/home");
/// assert_eq!(compute_view_name("home", EffectiveCategory::Tablet, &config), "home.tablet");
/// assert_eq!(compute_view_name("home", EffectiveCategory::Normal, &config), "home");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewNameConfig {
    pub normal: ViewAffix,
    pub mobile: ViewAffix,
    pub tablet: ViewAffix,
}

macro_rules! affix_setters {
    ($($field:ident: $with_prefix:ident, $set_prefix:ident, $with_suffix:ident, $set_suffix:ident;)+) => {
        $(
            #[doc = concat!("Set the prefix prepended to view names of the ", stringify!($field), " category.")]
            #[must_use]
            pub fn $with_prefix(mut self, prefix: impl Into<String>) -> Self {
                self.$field.prefix = prefix.into();
                self
            }

            #[doc = concat!("Set the prefix prepended to view names of the ", stringify!($field), " category.")]
            pub fn $set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
                self.$field.prefix = prefix.into();
                self
            }

            #[doc = concat!("Set the suffix appended to view names of the ", stringify!($field), " category.")]
            #[must_use]
            pub fn $with_suffix(mut self, suffix: impl Into<String>) -> Self {
                self.$field.suffix = suffix.into();
                self
            }

            #[doc = concat!("Set the suffix appended to view names of the ", stringify!($field), " category.")]
            pub fn $set_suffix(&mut self, suffix: impl Into<String>) -> &mut Self {
                self.$field.suffix = suffix.into();
                self
            }
        )+
    };
}

impl ViewNameConfig {
    /// Create a [`ViewNameConfig`] which leaves all view names untouched.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            normal: ViewAffix::EMPTY,
            mobile: ViewAffix::EMPTY,
            tablet: ViewAffix::EMPTY,
        }
    }

    affix_setters! {
        normal: with_normal_prefix, set_normal_prefix, with_normal_suffix, set_normal_suffix;
        mobile: with_mobile_prefix, set_mobile_prefix, with_mobile_suffix, set_mobile_suffix;
        tablet: with_tablet_prefix, set_tablet_prefix, with_tablet_suffix, set_tablet_suffix;
    }

    /// The [`ViewAffix`] configured for the given category.
    #[must_use]
    pub fn affix(&self, category: EffectiveCategory) -> &ViewAffix {
        match category {
            EffectiveCategory::Normal => &self.normal,
            EffectiveCategory::Mobile => &self.mobile,
            EffectiveCategory::Tablet => &self.tablet,
        }
    }

    /// Adjust a view name for the given category, see [`compute_view_name`].
    #[must_use]
    pub fn view_name(&self, view_name: &str, category: EffectiveCategory) -> String {
        compute_view_name(view_name, category, self)
    }
}

/// Returns true if the view name redirects or forwards to another target.
#[must_use]
pub fn is_passthrough_view_name(view_name: &str) -> bool {
    view_name.starts_with(REDIRECT_URL_PREFIX) || view_name.starts_with(FORWARD_URL_PREFIX)
}

/// Compute the device specific view name for a base view name.
///
/// Names starting with [`REDIRECT_URL_PREFIX`] or [`FORWARD_URL_PREFIX`]
/// are returned as-is. Any other name is wrapped in the prefix and suffix
/// configured for the category, after which a single trailing `/` is
/// removed if the result ends with `//`.
#[must_use]
pub fn compute_view_name(
    base_name: &str,
    category: EffectiveCategory,
    config: &ViewNameConfig,
) -> String {
    if is_passthrough_view_name(base_name) {
        return base_name.to_owned();
    }
    let mut name = config.affix(category).apply(base_name);
    // only ever strip one slash: "a///" becomes "a//"
    if name.ends_with("//") {
        name.pop();
    }
    name
}
