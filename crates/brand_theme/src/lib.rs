//! Brandkit theme system
//!
//! Derives a complete UI theme from three user-supplied brand colors:
//! primary, sidebar background, and sidebar text.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Palette generation**: a fixed ramp of shades (50..950) derived from
//!   the primary brand color ([`PrimaryPalette`])
//! - **Theme derivation**: a flat map of CSS-variable-style keys to color
//!   strings for a rendering layer to apply ([`derive_theme`])
//! - **Settings sanitization**: the boundary that keeps malformed or
//!   hostile branding payloads out of persistence ([`codec`])
//! - **Live theme state**: a global, thread-safe cache of the current
//!   settings and derived variables ([`ThemeState`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use brand_theme::{BrandingDefaults, ThemeSettings, ThemeState};
//!
//! // Initialize theme state at app startup
//! ThemeState::init_default();
//!
//! // Persisted settings arrive as a plain mapping
//! let settings: ThemeSettings = serde_json::from_value(stored_settings)?;
//! ThemeState::get().set_settings(settings);
//!
//! // Push the derived variables into the rendering layer
//! ThemeState::get().apply_to(&mut style_sink);
//! ```
//!
//! # Data flow
//!
//! Untrusted payload → [`codec::sanitize`] → persisted settings →
//! [`derive_theme`] → rendering layer.
//!
//! Every step degrades silently: invalid colors are replaced by the
//! configured [`BrandingDefaults`], never surfaced as errors. Branding is
//! cosmetic and must not break page rendering.

pub mod codec;
pub mod palette;
pub mod settings;
pub mod state;
pub mod theme;

// Re-export commonly used types
pub use palette::{PaletteStop, PrimaryPalette};
pub use settings::{BrandingDefaults, ThemeSettings};
pub use state::{set_restyle_callback, StyleSink, ThemeState};
pub use theme::{derive_theme, ThemeVars};
