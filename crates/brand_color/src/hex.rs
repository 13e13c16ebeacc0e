//! Hex color strings: validation, canonicalization, fallback normalization

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::color::Rgb;

/// Error produced at the typed parsing boundary.
///
/// The branding pipeline itself never surfaces this; it uses
/// [`HexColor::normalize`] and degrades to a fallback instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexColorError {
    #[error("empty color string")]
    Empty,
    #[error("malformed hex color: {0:?}")]
    Malformed(String),
}

/// A hex color held in canonical `#RRGGBB` uppercase form.
///
/// Construction goes through [`HexColor::parse`], which accepts `#RGB` and
/// `#RRGGBB` (case-insensitive, surrounding whitespace ignored) and expands
/// the 3-digit form by digit duplication (`#abc` becomes `#AABBCC`). Every
/// value held by this type is canonical.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Parse and canonicalize a hex color string.
    ///
    /// Returns `None` for anything that does not match
    /// `#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})` after trimming.
    pub fn parse(value: &str) -> Option<HexColor> {
        let digits = value.trim().strip_prefix('#')?;
        let bytes = digits.as_bytes();
        if !bytes.iter().all(u8::is_ascii_hexdigit) {
            return None;
        }

        let mut canon = String::with_capacity(7);
        canon.push('#');
        match bytes.len() {
            3 => {
                for &b in bytes {
                    let digit = b.to_ascii_uppercase() as char;
                    canon.push(digit);
                    canon.push(digit);
                }
            }
            6 => canon.extend(bytes.iter().map(|b| b.to_ascii_uppercase() as char)),
            _ => return None,
        }
        Some(HexColor(canon))
    }

    /// Normalize untrusted input, degrading silently to `fallback`.
    ///
    /// Absent, empty, or malformed input never errors; a clone of the
    /// fallback is returned instead so branding can never break rendering.
    pub fn normalize(value: Option<&str>, fallback: &HexColor) -> HexColor {
        match value {
            Some(raw) => match Self::parse(raw) {
                Some(color) => color,
                None => {
                    tracing::debug!(value = raw, fallback = %fallback, "invalid hex color, using fallback");
                    fallback.clone()
                }
            },
            None => fallback.clone(),
        }
    }

    /// The canonical `#RRGGBB` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the canonical form into an RGB triple.
    pub fn rgb(&self) -> Rgb {
        // Canonical form guarantees uppercase hex digits at bytes 1..7.
        const fn nibble(c: u8) -> u8 {
            match c {
                b'0'..=b'9' => c - b'0',
                _ => c - b'A' + 10,
            }
        }
        let b = self.0.as_bytes();
        let byte = |hi: u8, lo: u8| ((nibble(hi) << 4) | nibble(lo)) as f64;
        Rgb::new(byte(b[1], b[2]), byte(b[3], b[4]), byte(b[5], b[6]))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(HexColorError::Empty);
        }
        Self::parse(trimmed).ok_or_else(|| HexColorError::Malformed(trimmed.to_string()))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Whether `value` is a syntactically valid hex color, independent of
/// normalization.
pub fn is_valid_hex(value: &str) -> bool {
    HexColor::parse(value).is_some()
}

/// Mix two hex color strings by a weight percentage, with independent
/// fallbacks for each input.
pub fn mix_hex(
    a: Option<&str>,
    b: Option<&str>,
    weight_percent: f64,
    fallback_a: &HexColor,
    fallback_b: &HexColor,
) -> Rgb {
    let a = HexColor::normalize(a, fallback_a).rgb();
    let b = HexColor::normalize(b, fallback_b).rgb();
    a.mix(b, weight_percent)
}

/// Normalize a hex color string and emit it as `"R, G, B"` components.
pub fn hex_to_rgb_string(value: Option<&str>, fallback: &HexColor) -> String {
    HexColor::normalize(value, fallback).rgb().css_components()
}

/// Normalize a hex color string and classify it as perceptually light.
pub fn is_light_hex(value: Option<&str>, fallback: &HexColor) -> bool {
    HexColor::normalize(value, fallback).rgb().is_light()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    #[test]
    fn test_parse_canonicalizes_six_digit() {
        assert_eq!(hex("#4a3dff").as_str(), "#4A3DFF");
        assert_eq!(hex("  #4A3DFF  ").as_str(), "#4A3DFF");
    }

    #[test]
    fn test_parse_expands_three_digit() {
        assert_eq!(hex("#abc").as_str(), "#AABBCC");
        assert_eq!(hex("#F0f").as_str(), "#FF00FF");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "   ", "4A3DFF", "#4A3DF", "#4A3DFFF", "#GGGGGG", "#12", "not-a-color"] {
            assert_eq!(HexColor::parse(bad), None, "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_normalize_falls_back() {
        let fallback = hex("#123456");
        assert_eq!(HexColor::normalize(Some("not-a-color"), &fallback), fallback);
        assert_eq!(HexColor::normalize(Some(""), &fallback), fallback);
        assert_eq!(HexColor::normalize(None, &fallback), fallback);
        assert_eq!(HexColor::normalize(Some("#ff0000"), &fallback).as_str(), "#FF0000");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let fallback = hex("#123456");
        for input in ["#abc", "#4a3dff", "junk"] {
            let once = HexColor::normalize(Some(input), &fallback);
            let twice = HexColor::normalize(Some(once.as_str()), &fallback);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_rgb_splits_bytes() {
        let rgb = hex("#4A3DFF").rgb();
        assert_eq!(rgb, Rgb::new(74.0, 61.0, 255.0));
        assert_eq!(hex("#abc").rgb(), Rgb::new(170.0, 187.0, 204.0));
    }

    #[test]
    fn test_from_str_errors() {
        assert_eq!("".parse::<HexColor>(), Err(HexColorError::Empty));
        assert_eq!(
            "bogus".parse::<HexColor>(),
            Err(HexColorError::Malformed("bogus".to_string()))
        );
        assert_eq!("#abc".parse::<HexColor>().unwrap().as_str(), "#AABBCC");
    }

    #[test]
    fn test_is_valid_hex() {
        assert!(is_valid_hex("#abc"));
        assert!(is_valid_hex(" #AABBCC "));
        assert!(!is_valid_hex("#abcd"));
        assert!(!is_valid_hex("blue"));
    }

    #[test]
    fn test_mix_hex_uses_independent_fallbacks() {
        let white = hex("#FFFFFF");
        let black = hex("#000000");
        let mixed = mix_hex(Some("junk"), None, 50.0, &white, &black);
        assert_eq!(mixed, Rgb::new(127.5, 127.5, 127.5));
    }

    #[test]
    fn test_hex_to_rgb_string() {
        let fallback = hex("#4A3DFF");
        assert_eq!(hex_to_rgb_string(Some("#FFFFFF"), &fallback), "255, 255, 255");
        assert_eq!(hex_to_rgb_string(Some("nope"), &fallback), "74, 61, 255");
    }

    #[test]
    fn test_is_light_hex_classifies_after_normalization() {
        let white = hex("#FFFFFF");
        let dark = hex("#111827");
        assert!(is_light_hex(Some("#fff"), &dark));
        assert!(!is_light_hex(Some("#111827"), &white));
        // Invalid input classifies the fallback instead.
        assert!(is_light_hex(Some("junk"), &white));
        assert!(!is_light_hex(None, &dark));
    }

    #[test]
    fn test_serde_round_trip() {
        let color = hex("#4A3DFF");
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#4A3DFF\"");
        let back: HexColor = serde_json::from_str("\"#4a3dff\"").unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<HexColor>("\"oops\"").is_err());
    }
}
