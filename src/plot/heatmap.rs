// src/plot/heatmap.rs

//! SVG heatmap of a [`SensitivityGrid`].
//!
//! Cells are drawn centred on their axis values with edges halfway between
//! neighbouring points, extending half a step beyond the first and last point.
//! A colour bar on the right shows the price range.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use super::style::{normalize, HeatmapStyle};
use crate::grid::{linspace, SensitivityGrid};

const COLORBAR_STEPS: usize = 100;

/// Render `grid` to an SVG file at `path`.
///
/// # Errors
///
/// Fails if `style` is invalid, the grid is empty, or the file cannot be written.
pub fn render_heatmap_svg<P: AsRef<Path>>(
    grid: &SensitivityGrid,
    style: &HeatmapStyle,
    path: P,
) -> Result<()> {
    style.validate()?;
    let path = path.as_ref();
    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    draw_heatmap(&root, grid, style)?;
    root.present()
        .with_context(|| format!("failed to write heatmap to {}", path.display()))?;
    debug!(path = %path.display(), "heatmap written");
    Ok(())
}

/// Render `grid` to an in-memory SVG document.
pub fn render_heatmap_to_string(grid: &SensitivityGrid, style: &HeatmapStyle) -> Result<String> {
    style.validate()?;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height)).into_drawing_area();
        draw_heatmap(&root, grid, style)?;
        root.present().context("failed to finalise SVG document")?;
    }
    Ok(svg)
}

fn draw_heatmap(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    grid: &SensitivityGrid,
    style: &HeatmapStyle,
) -> Result<()> {
    let (rows, cols) = grid.shape();
    ensure!(rows > 0 && cols > 0, "cannot render an empty grid");

    root.fill(&WHITE)?;
    let split = (style.width - style.colorbar_width) as i32;
    let (main_area, bar_area) = root.split_horizontally(split);

    let x_edges = cell_edges(grid.spot_axis());
    let y_edges = cell_edges(grid.sigma_axis());
    let (lo, hi) = style.color_scale.bounds(grid);
    let cmap = style.colormap;

    let mut chart = ChartBuilder::on(&main_area)
        .margin(20)
        .caption(&style.title, ("sans-serif", style.caption_font_size))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_edges[0]..x_edges[cols], y_edges[0]..y_edges[rows])?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(style.x_label.as_str())
        .y_desc(style.y_label.as_str())
        .x_label_formatter(&|v| format!("{:.1}", v))
        .y_label_formatter(&|v| format!("{:.3}", v))
        .draw()?;

    let (xe, ye) = (&x_edges, &y_edges);
    chart.draw_series(grid.values().iter().enumerate().flat_map(|(i, row)| {
        row.iter().enumerate().map(move |(j, &call)| {
            Rectangle::new(
                [(xe[j], ye[i]), (xe[j + 1], ye[i + 1])],
                cmap.color_at(normalize(call, lo, hi)).filled(),
            )
        })
    }))?;

    let (bar_lo, bar_hi) = widen(lo, hi);
    let mut bar = ChartBuilder::on(&bar_area)
        .margin_top(60)
        .margin_bottom(60)
        .margin_right(10)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, bar_lo..bar_hi)?;

    bar.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_labels(6)
        .y_label_formatter(&|v| format!("{:.2}", v))
        .draw()?;

    let step = (bar_hi - bar_lo) / COLORBAR_STEPS as f64;
    bar.draw_series((0..COLORBAR_STEPS).map(|k| {
        let y0 = bar_lo + step * k as f64;
        Rectangle::new(
            [(0.0, y0), (1.0, y0 + step)],
            cmap.color_at((k as f64 + 0.5) / COLORBAR_STEPS as f64).filled(),
        )
    }))?;

    Ok(())
}

/// Cell boundaries for an ascending axis: `axis.len() + 1` values.
///
/// Zero-width axes (a single point, or a constant axis from a zero base value)
/// are padded so every cell still has a positive extent.
pub(crate) fn cell_edges(axis: &[f64]) -> Vec<f64> {
    let n = axis.len();
    if n == 0 {
        return vec![0.0, 1.0];
    }
    let (first, last) = (axis[0], axis[n - 1]);
    if n == 1 || last <= first {
        let pad = (first.abs() * 0.05).max(1e-6);
        return linspace(first - pad, first + pad, n + 1);
    }

    let mut edges = Vec::with_capacity(n + 1);
    edges.push(first - (axis[1] - axis[0]) / 2.0);
    edges.extend(axis.windows(2).map(|w| (w[0] + w[1]) / 2.0));
    edges.push(last + (axis[n - 1] - axis[n - 2]) / 2.0);
    edges
}

fn widen(lo: f64, hi: f64) -> (f64, f64) {
    if hi > lo {
        (lo, hi)
    } else {
        let pad = (lo.abs() * 0.05).max(1e-6);
        (lo - pad, lo + pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_edges_are_midpoints() {
        let edges = cell_edges(&[1.0, 2.0, 4.0]);
        assert_eq!(edges, vec![0.5, 1.5, 3.0, 5.0]);
    }

    #[test]
    fn test_cell_edges_pad_constant_axis() {
        let edges = cell_edges(&[0.0, 0.0, 0.0]);
        assert_eq!(edges.len(), 4);
        assert!(edges.windows(2).all(|w| w[1] > w[0]));

        let single = cell_edges(&[50.0]);
        assert_eq!(single.len(), 2);
        assert!(single[0] < 50.0 && single[1] > 50.0);
    }

    #[test]
    fn test_widen_collapsed_range() {
        let (lo, hi) = widen(2.0, 2.0);
        assert!(lo < 2.0 && hi > 2.0);
        assert_eq!(widen(1.0, 3.0), (1.0, 3.0));
    }
}
