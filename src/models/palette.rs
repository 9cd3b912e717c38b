/// Fuel types with a dedicated colour in the dashboard theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelType {
    Solar,
    Wind,
    Hydro,
    Nuclear,
    Biomass,
    Gas,
    Coal,
}

impl FuelType {
    pub const ALL: [FuelType; 7] = [
        FuelType::Solar,
        FuelType::Wind,
        FuelType::Hydro,
        FuelType::Nuclear,
        FuelType::Biomass,
        FuelType::Gas,
        FuelType::Coal,
    ];

    /// Matches the identifier used by the backend. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "solar" => Some(FuelType::Solar),
            "wind" => Some(FuelType::Wind),
            "hydro" => Some(FuelType::Hydro),
            "nuclear" => Some(FuelType::Nuclear),
            "biomass" => Some(FuelType::Biomass),
            "gas" => Some(FuelType::Gas),
            "coal" => Some(FuelType::Coal),
            _ => None,
        }
    }

    /// CSS custom property holding this fuel's colour
    pub fn style_token(&self) -> &'static str {
        match self {
            FuelType::Solar => "--fuel-solar",
            FuelType::Wind => "--fuel-wind",
            FuelType::Hydro => "--fuel-hydro",
            FuelType::Nuclear => "--fuel-nuclear",
            FuelType::Biomass => "--fuel-biomass",
            FuelType::Gas => "--fuel-gas",
            FuelType::Coal => "--fuel-coal",
        }
    }

    pub fn default_color(&self) -> &'static str {
        match self {
            FuelType::Solar => "#ffd700",   // gold
            FuelType::Wind => "#e0ffff",    // light cyan
            FuelType::Hydro => "#00bfff",   // deep sky blue
            FuelType::Nuclear => "#39ff14", // neon green
            FuelType::Biomass => "#228b22", // forest green
            FuelType::Gas => "#ff8c00",     // dark orange
            FuelType::Coal => "#696969",    // dim grey
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Token and colour used for any fuel outside [`FuelType::ALL`]
pub const FALLBACK_STYLE_TOKEN: &str = "--fuel-other";
pub const FALLBACK_COLOR: &str = "#d000ff";

/// Colour theme for fuel types, injected once at start-up.
///
/// Lookups never fail: unknown fuel names resolve to the fallback colour.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelPalette {
    colors: [String; 7],
    fallback: String,
}

impl FuelPalette {
    /// Builds a palette from named style tokens.
    ///
    /// `lookup` receives a token such as `--fuel-solar`; missing or blank values keep the
    /// built-in default for that token.
    pub fn from_tokens<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |token: &str, default: &str| {
            lookup(token)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            colors: FuelType::ALL.map(|fuel| resolve(fuel.style_token(), fuel.default_color())),
            fallback: resolve(FALLBACK_STYLE_TOKEN, FALLBACK_COLOR),
        }
    }

    /// Colour for a fuel name as reported by the backend.
    pub fn resolve(&self, fuel: &str) -> &str {
        match FuelType::from_name(fuel) {
            Some(fuel_type) => &self.colors[fuel_type.index()],
            None => &self.fallback,
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for FuelPalette {
    fn default() -> Self {
        Self {
            colors: FuelType::ALL.map(|fuel| fuel.default_color().to_string()),
            fallback: FALLBACK_COLOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_known_fuels() {
        let palette = FuelPalette::default();
        assert_eq!(palette.resolve("solar"), "#ffd700");
        assert_eq!(palette.resolve("coal"), "#696969");
    }

    #[test]
    fn test_unknown_fuel_uses_fallback() {
        let palette = FuelPalette::default();
        assert_eq!(palette.resolve("imports"), FALLBACK_COLOR);
        assert_eq!(palette.resolve("Solar"), FALLBACK_COLOR);
        assert_eq!(palette.resolve(""), palette.fallback());
    }

    #[test]
    fn test_tokens_override_defaults() {
        let palette = FuelPalette::from_tokens(|token| match token {
            "--fuel-wind" => Some(" #123456 ".to_string()),
            "--fuel-other" => Some("rebeccapurple".to_string()),
            "--fuel-gas" => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(palette.resolve("wind"), "#123456");
        assert_eq!(palette.resolve("gas"), "#ff8c00");
        assert_eq!(palette.resolve("solar"), "#ffd700");
        assert_eq!(palette.resolve("tidal"), "rebeccapurple");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let palette = FuelPalette::default();
        for fuel in [
            "solar", "wind", "hydro", "nuclear", "biomass", "gas", "coal", "oil",
        ] {
            assert_eq!(palette.resolve(fuel), palette.resolve(fuel));
        }
    }

    #[test]
    fn test_every_fuel_type_round_trips_its_name() {
        for fuel in FuelType::ALL {
            let name = fuel.style_token().trim_start_matches("--fuel-");
            assert_eq!(FuelType::from_name(name), Some(fuel));
        }
    }
}
