use crate::EffectiveCategory;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use tailor_core::error::OpaqueError;
use tailor_utils::macros::match_ignore_ascii_case_str;

/// An explicit, user-expressed preference for a site variant.
///
/// A site preference overrides the classification of the [`Device`]
/// whenever it is present. The absence of a preference is represented
/// as `Option::None` by its consumers, it is not a variant of this type.
///
/// [`Device`]: crate::Device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SitePreference {
    /// The user prefers the normal site.
    Normal,
    /// The user prefers the mobile site.
    Mobile,
    /// The user prefers the tablet site.
    Tablet,
}

impl SitePreference {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
        }
    }

    /// The [`EffectiveCategory`] selected by this preference.
    #[must_use]
    pub fn category(self) -> EffectiveCategory {
        match self {
            Self::Normal => EffectiveCategory::Normal,
            Self::Mobile => EffectiveCategory::Mobile,
            Self::Tablet => EffectiveCategory::Tablet,
        }
    }

    /// Returns true if the normal site is preferred.
    #[must_use]
    pub fn is_normal(self) -> bool {
        self.category() == EffectiveCategory::Normal
    }

    /// Returns true if the mobile site is preferred.
    #[must_use]
    pub fn is_mobile(self) -> bool {
        self.category() == EffectiveCategory::Mobile
    }

    /// Returns true if the tablet site is preferred.
    #[must_use]
    pub fn is_tablet(self) -> bool {
        self.category() == EffectiveCategory::Tablet
    }
}

impl fmt::Display for SitePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SitePreference {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "normal" => Ok(Self::Normal),
                "mobile" => Ok(Self::Mobile),
                "tablet" => Ok(Self::Tablet),
                _ => Err(OpaqueError::from_display(format!("invalid site preference: {s}"))),
            }
        }
    }
}

impl Serialize for SitePreference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SitePreference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_preference_predicates_exclusive() {
        for pref in [
            SitePreference::Normal,
            SitePreference::Mobile,
            SitePreference::Tablet,
        ] {
            let flags = [pref.is_normal(), pref.is_mobile(), pref.is_tablet()];
            assert_eq!(flags.iter().filter(|b| **b).count(), 1, "pref: {pref}");
        }
        assert!(SitePreference::Normal.is_normal());
        assert!(SitePreference::Mobile.is_mobile());
        assert!(SitePreference::Tablet.is_tablet());
    }

    #[test]
    fn test_site_preference_parse() {
        assert_eq!(
            "NORMAL".parse::<SitePreference>().unwrap(),
            SitePreference::Normal
        );
        assert_eq!(
            "mobile".parse::<SitePreference>().unwrap(),
            SitePreference::Mobile
        );
        assert_eq!(
            " tablet".parse::<SitePreference>().unwrap(),
            SitePreference::Tablet
        );
        assert_eq!(
            "".parse::<SitePreference>().unwrap_err().to_string(),
            "invalid site preference: "
        );
    }

    #[test]
    fn test_site_preference_serde() {
        let pref: SitePreference = serde_json::from_str(r#""Tablet""#).unwrap();
        assert_eq!(pref, SitePreference::Tablet);
        assert_eq!(
            serde_json::to_string(&SitePreference::Mobile).unwrap(),
            r#""mobile""#
        );
    }
}
