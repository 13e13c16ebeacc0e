//! Primary palette generation: a fixed ramp of shades from one brand color

use brand_color::{HexColor, Rgb};

use crate::settings::BrandingDefaults;

/// Named shade level in the generated primary ramp, lightest (50) to
/// darkest (950).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteStop {
    Stop50,
    Stop100,
    Stop200,
    Stop300,
    Stop400,
    Stop500,
    Stop600,
    Stop700,
    Stop800,
    Stop900,
    Stop950,
}

impl PaletteStop {
    const ALL: [PaletteStop; 11] = [
        PaletteStop::Stop50,
        PaletteStop::Stop100,
        PaletteStop::Stop200,
        PaletteStop::Stop300,
        PaletteStop::Stop400,
        PaletteStop::Stop500,
        PaletteStop::Stop600,
        PaletteStop::Stop700,
        PaletteStop::Stop800,
        PaletteStop::Stop900,
        PaletteStop::Stop950,
    ];

    /// Every stop, lightest to darkest.
    pub fn all() -> &'static [PaletteStop] {
        &Self::ALL
    }

    /// Decimal label used in emitted variable names (`"50"` .. `"950"`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Stop50 => "50",
            Self::Stop100 => "100",
            Self::Stop200 => "200",
            Self::Stop300 => "300",
            Self::Stop400 => "400",
            Self::Stop500 => "500",
            Self::Stop600 => "600",
            Self::Stop700 => "700",
            Self::Stop800 => "800",
            Self::Stop900 => "900",
            Self::Stop950 => "950",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Mix weights for stops lighter than the base: white blended toward the
/// base color. These pairs are a fixed contract with stored CSS output.
const LIGHT_MIXES: [(PaletteStop, f64); 5] = [
    (PaletteStop::Stop50, 8.0),
    (PaletteStop::Stop100, 16.0),
    (PaletteStop::Stop200, 24.0),
    (PaletteStop::Stop300, 36.0),
    (PaletteStop::Stop400, 48.0),
];

/// Mix weights for stops darker than the base: base blended toward black.
const DARK_MIXES: [(PaletteStop, f64); 5] = [
    (PaletteStop::Stop600, 10.0),
    (PaletteStop::Stop700, 20.0),
    (PaletteStop::Stop800, 30.0),
    (PaletteStop::Stop900, 40.0),
    (PaletteStop::Stop950, 52.0),
];

/// Full shade ramp derived from one base brand color.
///
/// Stop 500 is always the base color unmodified; every other stop is a
/// single white/black mix of it.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimaryPalette {
    base: HexColor,
    stops: [Rgb; 11],
}

impl PrimaryPalette {
    /// Generate the ramp from an untrusted base color value.
    ///
    /// The base is normalized against the configured default primary first,
    /// so an invalid value yields the default ramp rather than an error.
    pub fn generate(value: Option<&str>, defaults: &BrandingDefaults) -> Self {
        let base = HexColor::normalize(value, &defaults.primary);
        let base_rgb = base.rgb();

        let mut stops = [Rgb::BLACK; 11];
        for (stop, weight) in LIGHT_MIXES {
            stops[stop.index()] = Rgb::WHITE.mix(base_rgb, weight);
        }
        stops[PaletteStop::Stop500.index()] = base_rgb;
        for (stop, weight) in DARK_MIXES {
            stops[stop.index()] = base_rgb.mix(Rgb::BLACK, weight);
        }

        Self { base, stops }
    }

    /// The normalized base color the ramp was generated from.
    pub fn base_hex(&self) -> &HexColor {
        &self.base
    }

    pub fn get(&self, stop: PaletteStop) -> Rgb {
        self.stops[stop.index()]
    }

    /// Iterate all stops, lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteStop, Rgb)> + '_ {
        PaletteStop::all().iter().map(|&stop| (stop, self.get(stop)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_stops_present_in_order() {
        let labels: Vec<&str> = PaletteStop::all().iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950"]
        );
    }

    #[test]
    fn test_stop_500_is_unmodified_base() {
        let defaults = BrandingDefaults::default();
        let palette = PrimaryPalette::generate(Some("#4A3DFF"), &defaults);
        assert_eq!(palette.get(PaletteStop::Stop500), Rgb::new(74.0, 61.0, 255.0));
        assert_eq!(palette.base_hex().as_str(), "#4A3DFF");
    }

    #[test]
    fn test_light_stops_mix_white_into_base() {
        let defaults = BrandingDefaults::default();
        let palette = PrimaryPalette::generate(Some("#4A3DFF"), &defaults);
        // 50 is an 8% pull from white toward the base.
        assert_eq!(palette.get(PaletteStop::Stop50).css_components(), "241, 239, 255");
        // 400 is nearly half way to the base.
        assert_eq!(
            palette.get(PaletteStop::Stop400),
            Rgb::WHITE.mix(Rgb::new(74.0, 61.0, 255.0), 48.0)
        );
    }

    #[test]
    fn test_dark_stops_mix_black_into_base() {
        let defaults = BrandingDefaults::default();
        let palette = PrimaryPalette::generate(Some("#4A3DFF"), &defaults);
        assert_eq!(palette.get(PaletteStop::Stop600).css_components(), "67, 55, 230");
        assert_eq!(palette.get(PaletteStop::Stop950).css_components(), "36, 29, 122");
    }

    #[test]
    fn test_invalid_base_yields_default_ramp() {
        let defaults = BrandingDefaults::default();
        let from_junk = PrimaryPalette::generate(Some("not-a-color"), &defaults);
        let from_absent = PrimaryPalette::generate(None, &defaults);
        assert_eq!(from_junk, from_absent);
        assert_eq!(from_junk.base_hex().as_str(), "#4A3DFF");
    }

    #[test]
    fn test_white_base_ramp_still_darkens() {
        let defaults = BrandingDefaults::default();
        let palette = PrimaryPalette::generate(Some("#fff"), &defaults);
        assert_eq!(palette.get(PaletteStop::Stop50).css_components(), "255, 255, 255");
        assert_eq!(palette.get(PaletteStop::Stop500), Rgb::WHITE);
        assert_eq!(palette.get(PaletteStop::Stop600).css_components(), "230, 230, 230");
    }
}
