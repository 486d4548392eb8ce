pub mod builder;
pub mod config;

pub use builder::{build_grid, build_grid_with_config, linspace, SensitivityGrid};
pub use config::GridConfig;
