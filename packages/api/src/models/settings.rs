//! Branding settings read from the `settings` key/value table.

use serde::{Deserialize, Serialize};

use super::section::non_blank;

/// Site-wide branding. Values are kept as the strings the table stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub site_logo: Option<String>,
    pub site_name: Option<String>,
    /// `"true"` or `"false"`.
    pub show_site_name: Option<String>,
}

impl SiteSettings {
    /// Build from `(key, value)` rows. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut settings = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "site_logo" => settings.site_logo = Some(value.into()),
                "site_name" => settings.site_name = Some(value.into()),
                "show_site_name" => settings.show_site_name = Some(value.into()),
                _ => {}
            }
        }
        settings
    }

    /// Custom logo URL, only when one is configured.
    pub fn logo_url(&self) -> Option<&str> {
        non_blank(self.site_logo.as_deref())
    }

    pub fn site_name(&self) -> Option<&str> {
        non_blank(self.site_name.as_deref())
    }

    pub fn site_name_visible(&self) -> bool {
        self.show_site_name
            .as_deref()
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let settings = SiteSettings::from_pairs([
            ("site_logo", "/uploads/logo.png"),
            ("site_name", "Rustacean Academy"),
            ("show_site_name", "true"),
            ("footer_text", "ignored"),
        ]);

        assert_eq!(settings.logo_url(), Some("/uploads/logo.png"));
        assert_eq!(settings.site_name(), Some("Rustacean Academy"));
        assert!(settings.site_name_visible());
    }

    #[test]
    fn test_string_boolean() {
        for (raw, expected) in [
            ("true", true),
            ("TRUE", true),
            (" true ", true),
            ("false", false),
            ("1", false),
            ("", false),
        ] {
            let settings = SiteSettings {
                show_site_name: Some(raw.to_string()),
                ..Default::default()
            };
            assert_eq!(settings.site_name_visible(), expected, "value {raw:?}");
        }
        assert!(!SiteSettings::default().site_name_visible());
    }

    #[test]
    fn test_blank_logo_is_unset() {
        let settings = SiteSettings {
            site_logo: Some("  ".into()),
            ..Default::default()
        };
        assert!(settings.logo_url().is_none());
    }
}
