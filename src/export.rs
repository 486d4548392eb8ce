//! CSV export of sensitivity grids.
//!
//! Two layouts are offered: a long format with one `(sigma, spot, call)` row
//! per cell, and a wide matrix with volatilities down the side and spot prices
//! across the top.

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use crate::grid::SensitivityGrid;

/// Write one record per cell with header `sigma,spot,call`, row-major by sigma.
pub fn write_grid_csv<W: io::Write>(grid: &SensitivityGrid, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["sigma", "spot", "call"])?;
    for (sigma, spot, call) in grid.iter() {
        wtr.write_record(&[sigma.to_string(), spot.to_string(), call.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the grid as a matrix: first row is `sigma\spot` followed by the spot
/// axis, then one row per volatility.
pub fn write_grid_matrix_csv<W: io::Write>(grid: &SensitivityGrid, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(grid.spot_axis().len() + 1);
    header.push("sigma\\spot".to_string());
    header.extend(grid.spot_axis().iter().map(|s| s.to_string()));
    wtr.write_record(&header)?;

    for (sigma, row) in grid.sigma_axis().iter().zip(grid.values()) {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(sigma.to_string());
        record.extend(row.iter().map(|v| v.to_string()));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// [`write_grid_csv`] into a newly created file.
pub fn write_grid_csv_to_path<P: AsRef<Path>>(grid: &SensitivityGrid, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_grid_csv(grid, file)
}
