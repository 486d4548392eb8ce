use crate::error::PricingError;

/// Settings for the spot/volatility sensitivity mesh.
///
/// Axis ranges are multiplicative factors applied to the base spot and base
/// volatility, so `spot_range = (0.5, 1.5)` spans half to one-and-a-half times
/// the current underlying price.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Number of points on each axis
    pub resolution: usize,
    /// (lower, upper) multipliers of the base spot
    pub spot_range: (f64, f64),
    /// (lower, upper) multipliers of the base volatility
    pub sigma_range: (f64, f64),
    /// Evaluate rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            spot_range: default_spot_range(),
            sigma_range: default_sigma_range(),
            parallel: false,
        }
    }
}

impl GridConfig {
    /// Default ranges with the given resolution.
    pub fn with_resolution(resolution: usize) -> Self {
        Self {
            resolution,
            ..Self::default()
        }
    }

    /// Coarse 5x5 mesh for quick previews
    pub fn coarse() -> Self {
        Self::with_resolution(5)
    }

    /// The 10x10 mesh of the interactive calculator
    pub fn standard() -> Self {
        Self::default()
    }

    /// Dense 40x40 mesh, evaluated in parallel
    pub fn fine() -> Self {
        Self {
            resolution: 40,
            parallel: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        if self.resolution == 0 {
            return Err(PricingError::invalid_input(
                "resolution",
                0.0,
                "must be at least 1",
            ));
        }
        let (spot_lo, spot_hi) = self.spot_range;
        if !spot_lo.is_finite() || spot_lo <= 0.0 {
            return Err(PricingError::invalid_input(
                "spot_range",
                spot_lo,
                "lower factor must be finite and > 0",
            ));
        }
        if !spot_hi.is_finite() || spot_hi < spot_lo {
            return Err(PricingError::invalid_input(
                "spot_range",
                spot_hi,
                "upper factor must be finite and >= lower factor",
            ));
        }
        let (sigma_lo, sigma_hi) = self.sigma_range;
        if !sigma_lo.is_finite() || sigma_lo < 0.0 {
            return Err(PricingError::invalid_input(
                "sigma_range",
                sigma_lo,
                "lower factor must be finite and >= 0",
            ));
        }
        if !sigma_hi.is_finite() || sigma_hi < sigma_lo {
            return Err(PricingError::invalid_input(
                "sigma_range",
                sigma_hi,
                "upper factor must be finite and >= lower factor",
            ));
        }
        Ok(())
    }
}

fn default_resolution() -> usize {
    10
}

fn default_spot_range() -> (f64, f64) {
    (0.5, 1.5)
}

fn default_sigma_range() -> (f64, f64) {
    (0.3, 1.7)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for config in [GridConfig::coarse(), GridConfig::standard(), GridConfig::fine()] {
            assert!(config.validate().is_ok(), "{:?}", config);
        }
        assert_eq!(GridConfig::standard().resolution, 10);
        assert_eq!(GridConfig::fine().resolution, 40);
    }

    #[test]
    fn test_rejects_bad_ranges() {
        let zero_res = GridConfig::with_resolution(0);
        assert!(zero_res.validate().is_err());

        let zero_spot = GridConfig {
            spot_range: (0.0, 1.5),
            ..GridConfig::default()
        };
        assert_eq!(zero_spot.validate().unwrap_err().field(), "spot_range");

        let inverted = GridConfig {
            sigma_range: (1.7, 0.3),
            ..GridConfig::default()
        };
        assert_eq!(inverted.validate().unwrap_err().field(), "sigma_range");
    }
}
