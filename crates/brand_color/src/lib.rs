//! Brandkit color primitives
//!
//! Value types for the branding/theming pipeline:
//!
//! - [`HexColor`]: a hex color string held in canonical `#RRGGBB` uppercase
//!   form, with lenient normalization (`#RGB` expansion, fallback
//!   substitution) for untrusted input
//! - [`Rgb`]: an RGB triple with unrounded components, supporting weighted
//!   mixing and luminance classification
//!
//! Branding is cosmetic configuration, so the normalization entry points
//! never fail: invalid input silently degrades to a caller-supplied
//! fallback. The typed boundary ([`FromStr`](core::str::FromStr) and serde)
//! reports [`HexColorError`] instead.
//!
//! # Quick Start
//!
//! ```
//! use brand_color::{HexColor, Rgb};
//!
//! let fallback: HexColor = "#4A3DFF".parse().unwrap();
//! let color = HexColor::normalize(Some("#abc"), &fallback);
//! assert_eq!(color.as_str(), "#AABBCC");
//!
//! let tinted = Rgb::WHITE.mix(color.rgb(), 8.0);
//! assert!(tinted.is_light());
//! ```

mod color;
mod hex;

pub use color::Rgb;
pub use hex::{hex_to_rgb_string, is_light_hex, is_valid_hex, mix_hex, HexColor, HexColorError};
