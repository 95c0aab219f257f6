mod axis;
mod scatter_config;
mod scatter_plot;
mod snapshot;

pub use axis::{AxisOrientation, AxisPlacement};
pub use scatter_config::ScatterPlotConfig;
pub use scatter_plot::ScatterPlot;
pub use snapshot::ScatterSnapshot;
