use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{
    Accessors, ChartData, DerivedScales, InnerSize, MarkPosition, MarkSymbol, PlacedMark,
    ScaleEngine, ScaleRequest, place_points, position_of,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{CategoricalColorScale, Color, RenderFrame, Renderer};

use super::{AxisPlacement, ScatterPlotConfig, ScatterSnapshot};

const AXIS_STROKE_WIDTH: f64 = 1.0;
const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);

type SizeFn<P> = Arc<dyn Fn(&P) -> f64 + Send + Sync>;

/// Scatter plot: owns the data and the scales derived from it.
///
/// Scales are derived on construction and again on every data or config
/// change. A change only takes effect if derivation succeeds for both axes;
/// otherwise the previous data, config and scales stay in place.
pub struct ScatterPlot<S, P, R: Renderer> {
    renderer: R,
    config: ScatterPlotConfig,
    accessors: Accessors<S, P>,
    data: Vec<S>,
    inner: InnerSize,
    scales: DerivedScales,
    engine: ScaleEngine,
    colors: CategoricalColorScale,
    size_of: Option<SizeFn<P>>,
}

impl<S, P, R: Renderer> ScatterPlot<S, P, R> {
    pub fn new(
        renderer: R,
        config: ScatterPlotConfig,
        accessors: Accessors<S, P>,
        data: impl Into<ChartData<S>>,
    ) -> ChartResult<Self> {
        config.validate()?;
        let engine = ScaleEngine::new();
        let inner = config.inner_size()?;
        let data = data.into().into_stacks();
        let scales = engine.derive(&ScaleRequest::new(
            &data,
            &accessors,
            &config.scales,
            inner,
        ))?;
        debug!(stacks = data.len(), "scatter plot initialized");

        Ok(Self {
            renderer,
            config,
            accessors,
            data,
            inner,
            scales,
            engine,
            colors: CategoricalColorScale::default(),
            size_of: None,
        })
    }

    /// Replaces the stack color assignment.
    #[must_use]
    pub fn with_color_scale(mut self, colors: CategoricalColorScale) -> Self {
        self.colors = colors;
        self
    }

    /// Sizes each mark from its datum instead of the configured symbol size.
    #[must_use]
    pub fn with_size_accessor<F>(mut self, size_of: F) -> Self
    where
        F: Fn(&P) -> f64 + Send + Sync + 'static,
    {
        self.size_of = Some(Arc::new(size_of));
        self
    }

    /// Replaces the data and re-derives both scales.
    pub fn set_data(&mut self, data: impl Into<ChartData<S>>) -> ChartResult<()> {
        let data = data.into().into_stacks();
        let scales = self
            .engine
            .derive(&ScaleRequest::new(
                &data,
                &self.accessors,
                &self.config.scales,
                self.inner,
            ))
            .inspect_err(|err| warn!(error = %err, "keeping previous scales after set_data"))?;

        debug!(stacks = data.len(), "set scatter data");
        self.data = data;
        self.scales = scales;
        Ok(())
    }

    /// Replaces the config and re-derives both scales.
    pub fn set_config(&mut self, config: ScatterPlotConfig) -> ChartResult<()> {
        config.validate()?;
        let inner = config.inner_size()?;
        let scales = self
            .engine
            .derive(&ScaleRequest::new(
                &self.data,
                &self.accessors,
                &config.scales,
                inner,
            ))
            .inspect_err(|err| warn!(error = %err, "keeping previous scales after set_config"))?;

        self.config = config;
        self.inner = inner;
        self.scales = scales;
        Ok(())
    }

    /// Replaces the accessors and re-derives both scales.
    pub fn set_accessors(&mut self, accessors: Accessors<S, P>) -> ChartResult<()> {
        let scales = self
            .engine
            .derive(&ScaleRequest::new(
                &self.data,
                &accessors,
                &self.config.scales,
                self.inner,
            ))
            .inspect_err(|err| warn!(error = %err, "keeping previous scales after set_accessors"))?;

        self.accessors = accessors;
        self.scales = scales;
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &ScatterPlotConfig {
        &self.config
    }

    #[must_use]
    pub fn data(&self) -> &[S] {
        &self.data
    }

    #[must_use]
    pub fn scales(&self) -> &DerivedScales {
        &self.scales
    }

    #[must_use]
    pub fn inner_size(&self) -> InnerSize {
        self.inner
    }

    #[must_use]
    pub fn x_axis(&self) -> AxisPlacement {
        AxisPlacement::x_axis(&self.scales, self.inner)
    }

    #[must_use]
    pub fn y_axis(&self) -> AxisPlacement {
        AxisPlacement::y_axis(&self.scales, self.inner)
    }

    #[must_use]
    pub fn color_scale(&self) -> &CategoricalColorScale {
        &self.colors
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Places every datum through the current scales.
    pub fn place_points(&mut self) -> ChartResult<Vec<PlacedMark>> {
        let accessors = self.accessors.resolve()?;
        let colors = &mut self.colors;
        let base = self.config.mark_symbol();
        let size_of = self.size_of.as_deref();

        Ok(place_points(
            &self.data,
            &accessors,
            &self.scales.x.mapping,
            &self.scales.y.mapping,
            |label| colors.color_of(label),
            |point| match size_of {
                Some(size_of) => MarkSymbol::new(base.shape, size_of(point)),
                None => base,
            },
        ))
    }

    /// Pixel position a tooltip for `point` should point at.
    pub fn tooltip_anchor(&self, point: &P) -> ChartResult<Option<MarkPosition>> {
        let accessors = self.accessors.resolve()?;
        Ok(position_of(
            point,
            &accessors,
            &self.scales.x.mapping,
            &self.scales.y.mapping,
        ))
    }

    /// Builds the frame for the current state: both axis lines, then marks.
    pub fn build_frame(&mut self) -> ChartResult<RenderFrame> {
        let marks = self.place_points()?;
        Ok(RenderFrame::new(self.inner)
            .with_line(self.x_axis().line(AXIS_STROKE_WIDTH, AXIS_COLOR))
            .with_line(self.y_axis().line(AXIS_STROKE_WIDTH, AXIS_COLOR))
            .with_marks(marks))
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    /// Builds a deterministic snapshot useful for regression tests.
    pub fn snapshot(&mut self) -> ChartResult<ScatterSnapshot> {
        Ok(ScatterSnapshot {
            viewport: self.config.viewport,
            inner: self.inner,
            scales: self.scales.clone(),
            x_axis: self.x_axis(),
            y_axis: self.y_axis(),
            marks: self.place_points()?,
        })
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&mut self) -> ChartResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<S, P, R: Renderer + fmt::Debug> fmt::Debug for ScatterPlot<S, P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScatterPlot")
            .field("renderer", &self.renderer)
            .field("config", &self.config)
            .field("accessors", &self.accessors)
            .field("stacks", &self.data.len())
            .field("scales", &self.scales)
            .finish_non_exhaustive()
    }
}
