//! Sanitization boundary between untrusted branding payloads and persistence

use brand_color::HexColor;
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::settings::BrandingDefaults;

/// Recognized payload keys mapped to their persisted setting names.
const KEY_MAP: [(&str, &str); 3] = [
    ("primary_color", "brand_primary_color"),
    ("sidebar_background_color", "brand_sidebar_background_color"),
    ("sidebar_text_color", "brand_sidebar_text_color"),
];

fn default_for<'a>(defaults: &'a BrandingDefaults, setting_key: &str) -> &'a HexColor {
    match setting_key {
        "brand_primary_color" => &defaults.primary,
        "brand_sidebar_background_color" => &defaults.sidebar_background,
        _ => &defaults.sidebar_text,
    }
}

/// Sanitize an arbitrary untrusted branding payload.
///
/// Non-object payloads produce an empty map. A recognized key is included
/// only if its value is a syntactically valid hex color (canonicalized);
/// invalid or absent values are dropped, never defaulted. Unrecognized keys
/// are dropped silently. This is the boundary that keeps malformed or
/// hostile input out of persistence.
pub fn sanitize(payload: &Value) -> FxHashMap<&'static str, HexColor> {
    let mut out = FxHashMap::default();
    let Some(obj) = payload.as_object() else {
        return out;
    };

    for (input_key, _) in KEY_MAP {
        if let Some(color) = obj.get(input_key).and_then(Value::as_str).and_then(HexColor::parse) {
            out.insert(input_key, color);
        }
    }
    out
}

/// The three canonical default colors keyed by persisted setting name.
pub fn defaults_map(defaults: &BrandingDefaults) -> FxHashMap<&'static str, HexColor> {
    let mut out = FxHashMap::default();
    for (_, setting_key) in KEY_MAP {
        out.insert(setting_key, default_for(defaults, setting_key).clone());
    }
    out
}

/// Prepare branding input for persistence.
///
/// The stricter counterpart to [`sanitize`]: for each recognized key that is
/// present in the input (even as null), the value is normalized against that
/// setting's own default — substituting the default on invalid input, never
/// dropping the key. Absent keys are omitted. Output is keyed by persisted
/// setting name, canonical hex form, suitable for storage as opaque strings.
pub fn prepare_for_persistence(
    input: &Value,
    defaults: &BrandingDefaults,
) -> FxHashMap<&'static str, HexColor> {
    let mut out = FxHashMap::default();
    let Some(obj) = input.as_object() else {
        return out;
    };

    for (input_key, setting_key) in KEY_MAP {
        if let Some(value) = obj.get(input_key) {
            let fallback = default_for(defaults, setting_key);
            out.insert(setting_key, HexColor::normalize(value.as_str(), fallback));
        }
    }
    out
}
