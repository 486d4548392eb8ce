use bsm_heatmap::{build_grid_with_config, default_configs};

fn main() -> anyhow::Result<()> {
    println!("bsm-heatmap Default Configuration Examples\n");

    let presets = [
        ("Standard", default_configs::standard(), "Interactive calculator layout"),
        ("Fine", default_configs::fine(), "Publication charts, dense grid"),
        ("Coarse", default_configs::coarse(), "Quick previews and tests"),
    ];

    for (i, (name, config, use_case)) in presets.iter().enumerate() {
        println!("{}. {} Configuration:", i + 1, name);
        println!(
            "   Resolution: {}x{}",
            config.grid.resolution, config.grid.resolution
        );
        println!(
            "   Spot range: {:.0}% - {:.0}% of S",
            config.grid.spot_range.0 * 100.0,
            config.grid.spot_range.1 * 100.0
        );
        println!(
            "   Volatility range: {:.0}% - {:.0}% of sigma",
            config.grid.sigma_range.0 * 100.0,
            config.grid.sigma_range.1 * 100.0
        );
        println!("   Parallel rows: {}", config.grid.parallel);
        println!(
            "   Canvas: {}x{}, colormap {:?}",
            config.style.width, config.style.height, config.style.colormap
        );

        let grid = build_grid_with_config(&config.pricing_inputs()?, &config.grid)?;
        println!(
            "   Call prices span {:.2} to {:.2}",
            grid.min_value(),
            grid.max_value()
        );
        println!("   Use case: {}\n", use_case);
    }

    Ok(())
}
