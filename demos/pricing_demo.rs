// demos/pricing_demo.rs

//! Demonstration of single-point pricing and the sensitivity grid
//!
//! This example shows how to:
//! 1. Convert user inputs (rate in percent) into pricing inputs
//! 2. Price a European call and put
//! 3. Build the spot x volatility grid and print it as a table
//! 4. Check put-call parity on the quote

use anyhow::Result;
use bsm_heatmap::{build_grid, price, RawInputs};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Black-Scholes-Merton Option Pricing Demo");
    println!("========================================");

    let raw = RawInputs {
        spot: 100.0,
        strike: 100.0,
        rate_pct: 5.0,
        time: 1.0,
        sigma: 0.2,
        ..RawInputs::default()
    };
    let inputs = raw.to_pricing_inputs()?;

    println!("\nInput Parameters:");
    println!("  Current Stock Price:  {:.2}", inputs.spot);
    println!("  Strike Price:         {:.2}", inputs.strike);
    println!("  Risk-Free Rate:       {:.2}%", raw.rate_pct);
    println!("  Time to Maturity:     {:.2} years", inputs.time);
    println!("  Volatility:           {:.2}", inputs.sigma);

    let quote = price(&inputs)?;
    println!("\nOption Prices:");
    println!("  Call Price: {:.2}", quote.call);
    println!("  Put Price:  {:.2}", quote.put);

    let parity_gap = quote.call - quote.put - (inputs.spot - inputs.strike * inputs.discount_factor());
    println!("  Put-call parity residual: {:.2e}", parity_gap);

    let grid = build_grid(&inputs, 10)?;
    println!("\nCall Price Sensitivity (rows: sigma, columns: S):");
    print!("{:>8}", "sigma");
    for spot in grid.spot_axis() {
        print!("{:>8.1}", spot);
    }
    println!();
    println!("{}", "-".repeat(8 * (grid.spot_axis().len() + 1)));
    for (sigma, row) in grid.sigma_axis().iter().zip(grid.values()) {
        print!("{:>8.3}", sigma);
        for call in row {
            print!("{:>8.2}", call);
        }
        println!();
    }

    println!(
        "\nGrid range: {:.2} to {:.2}",
        grid.min_value(),
        grid.max_value()
    );
    Ok(())
}
