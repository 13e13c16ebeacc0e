//! Branding settings: immutable defaults and the persisted settings shape

use brand_color::HexColor;
use serde::Deserialize;

/// Built-in default primary brand color.
pub const DEFAULT_PRIMARY_COLOR: &str = "#4A3DFF";
/// Built-in default sidebar background color.
pub const DEFAULT_SIDEBAR_BACKGROUND_COLOR: &str = "#FFFFFF";
/// Built-in default sidebar text color.
pub const DEFAULT_SIDEBAR_TEXT_COLOR: &str = "#111827";

/// Immutable default colors for the three brand settings.
///
/// Provided once at process start (built-in constants, optionally overridden
/// from TOML configuration) and passed by reference into every derivation.
/// There is no mutable global default state.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrandingDefaults {
    pub primary: HexColor,
    pub sidebar_background: HexColor,
    pub sidebar_text: HexColor,
}

impl Default for BrandingDefaults {
    fn default() -> Self {
        let canon = |s: &str| HexColor::parse(s).expect("built-in default colors are canonical");
        Self {
            primary: canon(DEFAULT_PRIMARY_COLOR),
            sidebar_background: canon(DEFAULT_SIDEBAR_BACKGROUND_COLOR),
            sidebar_text: canon(DEFAULT_SIDEBAR_TEXT_COLOR),
        }
    }
}

impl BrandingDefaults {
    /// Load defaults from TOML configuration.
    ///
    /// Missing keys fall back per-field to the built-in constants; invalid
    /// color values fail the load (configuration errors surface at startup,
    /// unlike runtime branding input).
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

/// Persisted branding settings, as stored by the surrounding application.
///
/// This is the typed form of the plain settings mapping described by the
/// persistence contract: each key is absent, null, or a string. Values stay
/// raw here; normalization against [`BrandingDefaults`] happens at
/// derivation time so that invalid persisted values still degrade silently.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    #[serde(rename = "brand_primary_color")]
    pub primary: Option<String>,
    #[serde(rename = "brand_sidebar_background_color")]
    pub sidebar_background: Option<String>,
    #[serde(rename = "brand_sidebar_text_color")]
    pub sidebar_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults() {
        let defaults = BrandingDefaults::default();
        assert_eq!(defaults.primary.as_str(), "#4A3DFF");
        assert_eq!(defaults.sidebar_background.as_str(), "#FFFFFF");
        assert_eq!(defaults.sidebar_text.as_str(), "#111827");
    }

    #[test]
    fn test_toml_missing_keys_use_builtins() {
        let defaults = BrandingDefaults::from_toml_str("primary = \"#ff0000\"").unwrap();
        assert_eq!(defaults.primary.as_str(), "#FF0000");
        assert_eq!(defaults.sidebar_background.as_str(), "#FFFFFF");
        assert_eq!(defaults.sidebar_text.as_str(), "#111827");
    }

    #[test]
    fn test_toml_invalid_color_fails_loudly() {
        assert!(BrandingDefaults::from_toml_str("primary = \"cherry\"").is_err());
    }

    #[test]
    fn test_settings_deserialize_from_persisted_mapping() {
        let settings: ThemeSettings = serde_json::from_str(
            r##"{
                "brand_primary_color": "#FF0000",
                "brand_sidebar_background_color": null,
                "unrelated_setting": 42
            }"##,
        )
        .unwrap();
        assert_eq!(settings.primary.as_deref(), Some("#FF0000"));
        assert_eq!(settings.sidebar_background, None);
        assert_eq!(settings.sidebar_text, None);
    }
}
