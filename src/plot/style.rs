use anyhow::{ensure, Result};
use plotters::style::RGBColor;

use crate::grid::SensitivityGrid;

/// Colour maps available for the heatmap cells and colour bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Colormap {
    /// Perceptually uniform dark blue to yellow
    #[default]
    Viridis,
    /// White (low) to black (high)
    Greys,
}

// Samples of matplotlib's viridis at 1/8 steps.
const VIRIDIS_STOPS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (72, 40, 120),
    (62, 73, 137),
    (49, 104, 142),
    (38, 130, 142),
    (31, 158, 137),
    (53, 183, 121),
    (110, 206, 88),
    (253, 231, 37),
];

impl Colormap {
    /// Colour at position `t` in `[0, 1]`; values outside are clamped and NaN maps to 0.
    pub fn color_at(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Colormap::Viridis => {
                let scaled = t * (VIRIDIS_STOPS.len() - 1) as f64;
                let idx = (scaled.floor() as usize).min(VIRIDIS_STOPS.len() - 2);
                let frac = scaled - idx as f64;
                let (r0, g0, b0) = VIRIDIS_STOPS[idx];
                let (r1, g1, b1) = VIRIDIS_STOPS[idx + 1];
                RGBColor(lerp(r0, r1, frac), lerp(g0, g1, frac), lerp(b0, b1, frac))
            }
            Colormap::Greys => {
                let v = lerp(255, 0, t);
                RGBColor(v, v, v)
            }
        }
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

/// How call prices map onto the colour range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorScale {
    /// Stretch between the smallest and largest price in the grid
    #[default]
    Data,
    /// Fixed bounds, useful to compare several heatmaps side by side
    Fixed { min: f64, max: f64 },
}

impl ColorScale {
    pub fn bounds(&self, grid: &SensitivityGrid) -> (f64, f64) {
        match *self {
            ColorScale::Data => (grid.min_value(), grid.max_value()),
            ColorScale::Fixed { min, max } => (min, max),
        }
    }
}

/// Position of `value` within `[lo, hi]`, clamped to `[0, 1]`.
///
/// A collapsed range (constant grid) maps everything to the middle of the map.
pub fn normalize(value: f64, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.5
    }
}

/// Presentation settings for [`render_heatmap_svg`](super::render_heatmap_svg).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeatmapStyle {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub caption_font_size: f64,
    /// Horizontal space reserved for the colour bar
    pub colorbar_width: u32,
    pub colormap: Colormap,
    pub color_scale: ColorScale,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Call Option Price Heatmap".to_string(),
            x_label: "Underlying Price (S)".to_string(),
            y_label: "Volatility (sigma)".to_string(),
            caption_font_size: 28.0,
            colorbar_width: 110,
            colormap: Colormap::Viridis,
            color_scale: ColorScale::Data,
        }
    }
}

impl HeatmapStyle {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > self.colorbar_width,
            "heatmap width ({}) must exceed colour bar width ({})",
            self.width,
            self.colorbar_width
        );
        ensure!(self.height > 0, "heatmap height must be > 0");
        ensure!(
            self.caption_font_size.is_finite() && self.caption_font_size > 0.0,
            "caption font size must be > 0, got {}",
            self.caption_font_size
        );
        if let ColorScale::Fixed { min, max } = self.color_scale {
            ensure!(
                min.is_finite() && max.is_finite() && max > min,
                "fixed colour scale needs finite min < max, got [{}, {}]",
                min,
                max
            );
        }
        Ok(())
    }
}
