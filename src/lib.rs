//! # bsm-heatmap: European Option Pricing and Sensitivity Heatmaps
//!
//! `bsm-heatmap` prices European call and put options with the closed-form
//! Black-Scholes-Merton model and shows how the call price reacts to the
//! underlying price and volatility through a colour-mapped grid.
//!
//! ## Core Features
//!
//! - **Pricer**: call and put prices from spot, strike, rate, maturity and volatility,
//!   with explicit handling of expiry (`t = 0`) and zero volatility
//! - **Sensitivity Grid**: call prices over an evenly spaced spot x volatility mesh,
//!   optionally evaluated in parallel
//! - **Heatmaps**: SVG rendering with a colour bar
//! - **Export**: long or matrix CSV layouts
//! - **Configuration**: TOML files and presets
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bsm_heatmap::{build_grid, price, render_heatmap_svg, HeatmapStyle, PricingInputs};
//!
//! let inputs = PricingInputs::new(100.0, 100.0, 0.05, 1.0, 0.2);
//!
//! let quote = price(&inputs)?;
//! println!("call = {:.2}, put = {:.2}", quote.call, quote.put);
//!
//! let grid = build_grid(&inputs, 10)?;
//! render_heatmap_svg(&grid, &HeatmapStyle::default(), "call_heatmap.svg")?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Configuration Presets
//!
//! - `standard()`: 10x10 grid, the interactive calculator's layout
//! - `fine()`: 40x40 grid, parallel evaluation, larger canvas
//! - `coarse()`: 5x5 grid for previews

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod inputs;
pub mod models;
pub mod plot;

// ================================================================================================
// IMPORTS
// ================================================================================================

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Pricing
pub use error::PricingError;
pub use models::{bsm_price, norm_cdf, price, PricingInputs, PricingResult};

// Sensitivity grid
pub use grid::{build_grid, build_grid_with_config, linspace, GridConfig, SensitivityGrid};

// Front-end inputs and configuration
pub use config::AppConfig;
pub use inputs::{RatePolicy, RawInputs};

// Rendering and export
pub use export::{write_grid_csv, write_grid_csv_to_path, write_grid_matrix_csv};
pub use plot::{
    render_heatmap_svg, render_heatmap_to_string, ColorScale, Colormap, HeatmapStyle,
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-built [`AppConfig`] presets.
///
/// # Available Configurations
///
/// - [`standard()`]: 10x10 grid
/// - [`fine()`]: 40x40 grid, parallel rows
/// - [`coarse()`]: 5x5 grid
pub mod default_configs {
    use crate::config::AppConfig;

    /// The layout of the interactive calculator.
    ///
    /// **Characteristics:**
    /// - Grid resolution: 10
    /// - Spot range: 50% to 150% of the current price
    /// - Volatility range: 30% to 170% of the current volatility
    /// - 800x600 canvas, viridis, data-driven colour scale
    ///
    /// # Example
    ///
    /// ```rust
    /// use bsm_heatmap::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.grid.resolution, 10);
    /// ```
    pub fn standard() -> AppConfig {
        AppConfig::standard()
    }

    /// Dense grid for publication-quality charts.
    ///
    /// **Characteristics:**
    /// - Grid resolution: 40 (1,600 cells)
    /// - Rows evaluated on the rayon pool
    /// - 1280x960 canvas
    pub fn fine() -> AppConfig {
        AppConfig::fine()
    }

    /// Quick 5x5 preview.
    pub fn coarse() -> AppConfig {
        AppConfig::coarse()
    }
}

/// Price once and render the call-price heatmap described by `config`.
///
/// This is the whole request cycle of the interactive calculator: convert the
/// user inputs, quote the option at the current parameters, build the
/// sensitivity grid and write it to `path` as SVG.
///
/// # Arguments
///
/// * `config` - User inputs (rate in percent), grid settings and heatmap style.
///   Use [`default_configs`] for common presets.
/// * `path` - Destination of the SVG document.
///
/// # Returns
///
/// The point quote and the grid that was rendered, so callers can display the
/// prices or export the grid without recomputing it.
///
/// # Errors
///
/// * [`PricingError::InvalidInput`] (wrapped) for out-of-domain inputs or grid settings
/// * rendering and I/O failures from the SVG backend
///
/// # Example
///
/// ```rust,no_run
/// use bsm_heatmap::{default_configs, price_and_render};
///
/// let mut config = default_configs::standard();
/// config.inputs.spot = 120.0;
/// config.inputs.rate_pct = 3.0;
///
/// let (quote, grid) = price_and_render(&config, "heatmap.svg")?;
/// println!("call {:.2} put {:.2}", quote.call, quote.put);
/// println!("grid {:?}, max call {:.2}", grid.shape(), grid.max_value());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn price_and_render<P: AsRef<Path>>(
    config: &AppConfig,
    path: P,
) -> Result<(PricingResult, SensitivityGrid)> {
    let inputs = config.pricing_inputs()?;
    let quote = price(&inputs).context("failed to price option")?;
    let grid = build_grid_with_config(&inputs, &config.grid)
        .context("failed to build sensitivity grid")?;
    render_heatmap_svg(&grid, &config.style, path.as_ref())?;

    info!(
        call = quote.call,
        put = quote.put,
        resolution = config.grid.resolution,
        "priced option and rendered heatmap"
    );
    Ok((quote, grid))
}
