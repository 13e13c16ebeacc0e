//! RGB color math: weighted mixing and luminance classification

/// RGB color with components on the `0.0..=255.0` scale.
///
/// Components stay unrounded so chained mixes keep full floating precision;
/// rounding happens once per emitted value in [`Rgb::css_components`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255.0, 255.0, 255.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64, g as f64, b as f64)
    }

    /// Blend `other` into `self` by a weight percentage.
    ///
    /// The weight is clamped to `0..=100`; 0 returns `self` and 100 returns
    /// `other`.
    pub fn mix(self, other: Rgb, weight_percent: f64) -> Rgb {
        let ratio = weight_percent.clamp(0.0, 100.0) / 100.0;
        Rgb::new(
            self.r * (1.0 - ratio) + other.r * ratio,
            self.g * (1.0 - ratio) + other.g * ratio,
            self.b * (1.0 - ratio) + other.b * ratio,
        )
    }

    /// Weighted luminance on the 0..255 scale.
    pub fn luminance(self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Whether the color reads as perceptually light.
    ///
    /// The threshold is fixed at a luminance of 180; stored CSS output
    /// depends on this exact cutoff.
    pub fn is_light(self) -> bool {
        self.luminance() >= 180.0
    }

    /// Emit as a `"R, G, B"` decimal component string.
    ///
    /// This is the single rounding boundary for the whole pipeline.
    pub fn css_components(self) -> String {
        format!(
            "{}, {}, {}",
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8
        )
    }
}
