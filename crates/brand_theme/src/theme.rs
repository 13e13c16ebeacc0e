//! Theme derivation: settings in, flat variable map out

use brand_color::{HexColor, Rgb};
use rustc_hash::FxHashMap;

use crate::palette::PrimaryPalette;
use crate::settings::{BrandingDefaults, ThemeSettings};

/// Weight for the sidebar hover background (sidebar text mixed into the
/// background).
const HOVER_MIX: f64 = 12.0;
/// Weight for the sidebar active background (primary mixed into the
/// background).
const ACTIVE_MIX: f64 = 18.0;
/// Border weight against a light sidebar background (black mixed in).
const BORDER_DARKEN_MIX: f64 = 24.0;
/// Border weight against a dark sidebar background (white mixed in).
const BORDER_LIGHTEN_MIX: f64 = 18.0;

/// Flat mapping of CSS-variable-style keys to color value strings.
///
/// Keys carry no `--` prefix; values are either `"R, G, B"` decimal
/// components or a canonical hex string (`brand-primary-color-hex` only).
/// Recomputed on every derivation; no persisted identity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeVars {
    vars: FxHashMap<String, String>,
}

impl ThemeVars {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    fn insert(&mut self, name: impl Into<String>, value: String) {
        self.vars.insert(name.into(), value);
    }
}

/// Derive the full theme variable map from persisted settings.
///
/// All three inputs are normalized against their independent defaults, so
/// this never fails; missing or invalid settings produce the default theme.
/// Chained mixes (hover/active/border) operate on unrounded RGB components
/// and each emitted value rounds independently.
pub fn derive_theme(settings: &ThemeSettings, defaults: &BrandingDefaults) -> ThemeVars {
    let palette = PrimaryPalette::generate(settings.primary.as_deref(), defaults);
    let sidebar_bg =
        HexColor::normalize(settings.sidebar_background.as_deref(), &defaults.sidebar_background);
    let sidebar_text =
        HexColor::normalize(settings.sidebar_text.as_deref(), &defaults.sidebar_text);

    let bg = sidebar_bg.rgb();
    let text = sidebar_text.rgb();
    let primary = palette.base_hex().rgb();

    let mut vars = ThemeVars::default();

    for (stop, color) in palette.iter() {
        vars.insert(format!("color-primary-{}", stop.label()), color.css_components());
    }
    vars.insert("brand-primary-color-hex", palette.base_hex().to_string());

    vars.insert("brand-sidebar-background-color", bg.css_components());
    vars.insert("brand-sidebar-text-color", text.css_components());
    vars.insert(
        "brand-sidebar-hover-background-color",
        bg.mix(text, HOVER_MIX).css_components(),
    );
    vars.insert(
        "brand-sidebar-active-background-color",
        bg.mix(primary, ACTIVE_MIX).css_components(),
    );

    // Luminance picks the border direction so it stays visible against both
    // light and dark sidebars.
    let border = if bg.is_light() {
        bg.mix(Rgb::BLACK, BORDER_DARKEN_MIX)
    } else {
        bg.mix(Rgb::WHITE, BORDER_LIGHTEN_MIX)
    };
    vars.insert("brand-sidebar-border-color", border.css_components());

    vars
}
