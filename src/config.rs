//! Top-level configuration: user inputs, grid settings and heatmap style.
//!
//! Every section falls back to its defaults, so a TOML file only needs the
//! values it wants to change:
//!
//! ```toml
//! [inputs]
//! spot = 42.0
//! rate_pct = 2.5
//!
//! [grid]
//! resolution = 25
//!
//! [style]
//! colormap = "greys"
//! ```

#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use anyhow::Context;
use anyhow::Result;

use crate::grid::GridConfig;
use crate::inputs::RawInputs;
use crate::models::PricingInputs;
use crate::plot::HeatmapStyle;

/// Everything needed to go from user inputs to a rendered heatmap.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AppConfig {
    pub inputs: RawInputs,
    pub grid: GridConfig,
    pub style: HeatmapStyle,
}

impl AppConfig {
    /// 10x10 grid, matching the interactive calculator
    pub fn standard() -> Self {
        Self::default()
    }

    /// 40x40 grid evaluated in parallel, larger canvas
    pub fn fine() -> Self {
        Self {
            grid: GridConfig::fine(),
            style: HeatmapStyle {
                width: 1280,
                height: 960,
                ..HeatmapStyle::default()
            },
            ..Self::default()
        }
    }

    /// 5x5 grid for quick previews and tests
    pub fn coarse() -> Self {
        Self {
            grid: GridConfig::coarse(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.inputs.to_pricing_inputs()?;
        self.grid.validate()?;
        self.style.validate()
    }

    /// Decimal pricing inputs derived from the user section.
    pub fn pricing_inputs(&self) -> Result<PricingInputs> {
        Ok(self.inputs.to_pricing_inputs()?)
    }

    /// Parse and validate a TOML document.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("failed to parse heatmap configuration")?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid configuration in {}", path.display()))
    }

    #[cfg(feature = "serde")]
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialise heatmap configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        for config in [AppConfig::standard(), AppConfig::fine(), AppConfig::coarse()] {
            assert!(config.validate().is_ok());
        }
        assert_eq!(AppConfig::coarse().grid.resolution, 5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [inputs]
            spot = 42.0
            rate_pct = 2.5

            [grid]
            resolution = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.inputs.spot, 42.0);
        assert_eq!(config.inputs.strike, 100.0);
        assert_eq!(config.grid.resolution, 25);
        assert_eq!(config.grid.spot_range, (0.5, 1.5));
        assert_eq!(config.style, HeatmapStyle::default());
        assert!((config.pricing_inputs().unwrap().rate - 0.025).abs() < 1e-15);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_invalid_toml_values_rejected() {
        assert!(AppConfig::from_toml_str("[grid]\nresolution = 0\n").is_err());
        assert!(AppConfig::from_toml_str("[inputs]\nsigma = -1.0\n").is_err());
        assert!(AppConfig::from_toml_str("[grid]\nresolution = \"ten\"\n").is_err());
    }
}
