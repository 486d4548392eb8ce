// src/grid/builder.rs

//! Sensitivity grid over (underlying price, volatility).
//!
//! Strike, rate and maturity are held at their base values while spot and
//! volatility sweep evenly spaced axes. Each cell is an independent call to
//! the pricer, which makes row evaluation trivially parallel.

use rayon::prelude::*;
use tracing::{debug, warn};

use super::config::GridConfig;
use crate::error::PricingError;
use crate::models::{price, PricingInputs};

/// Call prices on a spot x volatility mesh.
///
/// `values()[i][j]` is the call price at `sigma_axis()[i]` and `spot_axis()[j]`,
/// so rows follow volatility and columns follow spot. A grid is never modified
/// after construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SensitivityGrid {
    spot_axis: Vec<f64>,
    sigma_axis: Vec<f64>,
    values: Vec<Vec<f64>>,
    strike: f64,
    rate: f64,
    time: f64,
    degenerate: bool,
}

impl SensitivityGrid {
    /// Ascending underlying prices (columns).
    pub fn spot_axis(&self) -> &[f64] {
        &self.spot_axis
    }

    /// Ascending volatilities (rows).
    pub fn sigma_axis(&self) -> &[f64] {
        &self.sigma_axis
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// `(rows, columns)`, i.e. `(sigma_axis.len(), spot_axis.len())`.
    pub fn shape(&self) -> (usize, usize) {
        (self.sigma_axis.len(), self.spot_axis.len())
    }

    pub fn value_at(&self, sigma_idx: usize, spot_idx: usize) -> Option<f64> {
        self.values.get(sigma_idx)?.get(spot_idx).copied()
    }

    pub fn min_value(&self) -> f64 {
        self.cells().fold(f64::INFINITY, f64::min)
    }

    pub fn max_value(&self) -> f64 {
        self.cells().fold(f64::NEG_INFINITY, f64::max)
    }

    /// True when either axis has zero width (e.g. base volatility of 0), in which
    /// case the heatmap carries no information along that direction.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Iterates `(sigma, spot, call)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.sigma_axis
            .iter()
            .zip(self.values.iter())
            .flat_map(move |(&sigma, row)| {
                self.spot_axis
                    .iter()
                    .zip(row.iter())
                    .map(move |(&spot, &call)| (sigma, spot, call))
            })
    }

    fn cells(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().flat_map(|row| row.iter().copied())
    }
}

/// `n` evenly spaced points from `start` to `end` inclusive.
///
/// A single point yields `[start]`. The last point is pinned to `end` so the
/// upper bound is hit exactly regardless of accumulated rounding.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Axis bounds `value * factor`, rejecting an upper bound that overflows.
fn scaled_bounds(
    field: &'static str,
    value: f64,
    (lo, hi): (f64, f64),
) -> Result<(f64, f64), PricingError> {
    let bounds = (value * lo, value * hi);
    if !bounds.1.is_finite() {
        return Err(PricingError::invalid_input(
            field,
            value,
            "upper grid bound overflows",
        ));
    }
    Ok(bounds)
}

/// Build an `resolution x resolution` call-price grid with the default ranges
/// (spot in `[0.5 S, 1.5 S]`, volatility in `[0.3 sigma, 1.7 sigma]`).
pub fn build_grid(
    base: &PricingInputs,
    resolution: usize,
) -> Result<SensitivityGrid, PricingError> {
    build_grid_with_config(base, &GridConfig::with_resolution(resolution))
}

/// Build a call-price grid using explicit axis ranges and evaluation mode.
///
/// # Errors
///
/// [`PricingError::InvalidInput`] if `base` fails validation or `config` has a
/// zero resolution or malformed ranges. Also returned on `spot` when the
/// lower spot bound underflows to zero (subnormal spots such as `5e-324`), and
/// on `spot` or `sigma` when an upper bound overflows. No partial grid is ever
/// returned.
pub fn build_grid_with_config(
    base: &PricingInputs,
    config: &GridConfig,
) -> Result<SensitivityGrid, PricingError> {
    base.validate()?;
    config.validate()?;

    let n = config.resolution;
    let (spot_lo, spot_hi) = scaled_bounds("spot", base.spot, config.spot_range)?;
    if spot_lo <= 0.0 {
        return Err(PricingError::invalid_input(
            "spot",
            base.spot,
            "lower grid bound underflows to zero",
        ));
    }
    let (sigma_lo, sigma_hi) = scaled_bounds("sigma", base.sigma, config.sigma_range)?;
    let spot_axis = linspace(spot_lo, spot_hi, n);
    let sigma_axis = linspace(sigma_lo, sigma_hi, n);

    let degenerate = spot_hi <= spot_lo || sigma_hi <= sigma_lo;
    if degenerate {
        warn!(
            spot = base.spot,
            sigma = base.sigma,
            "sensitivity grid has a zero-width axis; heatmap will be constant along it"
        );
    }

    let row = |sigma: f64| -> Result<Vec<f64>, PricingError> {
        spot_axis
            .iter()
            .map(|&spot| price(&base.with_spot(spot).with_sigma(sigma)).map(|r| r.call))
            .collect()
    };

    let values: Vec<Vec<f64>> = if config.parallel {
        sigma_axis.par_iter().map(|&sigma| row(sigma)).collect::<Result<_, _>>()?
    } else {
        sigma_axis.iter().map(|&sigma| row(sigma)).collect::<Result<_, _>>()?
    };

    debug!(
        rows = sigma_axis.len(),
        cols = spot_axis.len(),
        parallel = config.parallel,
        "built sensitivity grid"
    );

    Ok(SensitivityGrid {
        spot_axis,
        sigma_axis,
        values,
        strike: base.strike,
        rate: base.rate,
        time: base.time,
        degenerate,
    })
}
