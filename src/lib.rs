//! chart-scales: scale inference and point placement for charts.
//!
//! Given stacked data, accessor functions and a drawing-area size, the
//! [`core::ScaleEngine`] picks a mapping family per axis (linear, time or
//! ordinal), derives each mapping's domain and range, and computes the pixel
//! where each axis' zero/baseline falls. [`api::ScatterPlot`] owns the derived
//! scales and places one mark per datum through them.
//!
//! ```
//! use chart_scales::core::{
//!     Accessors, Datum, InnerSize, ScaleOptions, ScaleRequest, Series, derive_scales,
//! };
//!
//! let data = vec![Series::new(
//!     "a",
//!     vec![Datum::new(1.0, 2.0), Datum::new(3.0, 4.0), Datum::new(5.0, 0.0)],
//! )];
//! let accessors = Accessors::standard();
//! let options = ScaleOptions::default().with_grouped_bars(true);
//! let inner = InnerSize::new(100.0, 50.0)?;
//!
//! let scales = derive_scales(&ScaleRequest::new(&data, &accessors, &options, inner))?;
//! assert_eq!(scales.x_intercept(), 0.0);
//! assert_eq!(scales.y_intercept(), 50.0);
//! # Ok::<(), chart_scales::ChartError>(())
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ScatterPlot, ScatterPlotConfig};
pub use error::{ChartError, ChartResult};
