pub mod heatmap;
pub mod style;

pub use heatmap::{render_heatmap_svg, render_heatmap_to_string};
pub use style::{normalize, ColorScale, Colormap, HeatmapStyle};
