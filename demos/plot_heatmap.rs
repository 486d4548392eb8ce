// Example: plot_heatmap.rs
// Prices an option and writes the call-price sensitivity heatmap as SVG, plus
// the grid as CSV.
//
// Usage:
//     cargo run --example plot_heatmap -- [config.toml] [output_stem]
//
// Without a config file the standard preset is used. Outputs are written to
// <output_stem>.svg and <output_stem>.csv (default stem: call_heatmap).

use std::env;

use anyhow::Result;
use bsm_heatmap::{default_configs, price_and_render, write_grid_csv_to_path, AppConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => AppConfig::from_file(path)?,
        None => default_configs::standard(),
    };
    let stem = args.get(2).map(String::as_str).unwrap_or("call_heatmap");

    let svg_path = format!("{}.svg", stem);
    let csv_path = format!("{}.csv", stem);

    let (quote, grid) = price_and_render(&config, &svg_path)?;
    write_grid_csv_to_path(&grid, &csv_path)?;

    println!("Call Price: {:.2}", quote.call);
    println!("Put Price:  {:.2}", quote.put);
    println!(
        "Grid {}x{} | S in [{:.2}, {:.2}] | sigma in [{:.3}, {:.3}]",
        grid.shape().0,
        grid.shape().1,
        grid.spot_axis()[0],
        grid.spot_axis()[grid.spot_axis().len() - 1],
        grid.sigma_axis()[0],
        grid.sigma_axis()[grid.sigma_axis().len() - 1],
    );
    if grid.is_degenerate() {
        println!("Note: one axis has zero width, the heatmap is constant along it");
    }
    println!("Chart saved to {}", svg_path);
    println!("Grid saved to {}", csv_path);
    Ok(())
}
