use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    Accessors, Axis, AxisScale, BandScale, DerivedScales, DomainValue, FamilyProbe, InnerSize,
    LinearScale, MappingFamily, ResolvedAccessors, TimeScale, ValueTypeProbe,
};
use crate::error::{ChartError, ChartResult};

/// Scale-affecting options.
///
/// `x_family` / `y_family` pin the mapping family of an axis instead of
/// probing the data. `x_scale` / `y_scale` bypass derivation for that axis
/// entirely and are returned as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleOptions {
    #[serde(default = "default_bar_padding")]
    pub bar_padding: f64,
    #[serde(default)]
    pub grouped_bars: bool,
    #[serde(default)]
    pub x_family: Option<MappingFamily>,
    #[serde(default)]
    pub y_family: Option<MappingFamily>,
    #[serde(default)]
    pub x_scale: Option<AxisScale>,
    #[serde(default)]
    pub y_scale: Option<AxisScale>,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            bar_padding: default_bar_padding(),
            grouped_bars: false,
            x_family: None,
            y_family: None,
            x_scale: None,
            y_scale: None,
        }
    }
}

impl ScaleOptions {
    #[must_use]
    pub fn with_bar_padding(mut self, bar_padding: f64) -> Self {
        self.bar_padding = bar_padding;
        self
    }

    #[must_use]
    pub fn with_grouped_bars(mut self, grouped_bars: bool) -> Self {
        self.grouped_bars = grouped_bars;
        self
    }

    #[must_use]
    pub fn with_x_family(mut self, family: MappingFamily) -> Self {
        self.x_family = Some(family);
        self
    }

    #[must_use]
    pub fn with_y_family(mut self, family: MappingFamily) -> Self {
        self.y_family = Some(family);
        self
    }

    #[must_use]
    pub fn with_x_scale(mut self, scale: AxisScale) -> Self {
        self.x_scale = Some(scale);
        self
    }

    #[must_use]
    pub fn with_y_scale(mut self, scale: AxisScale) -> Self {
        self.y_scale = Some(scale);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.bar_padding.is_finite() || !(0.0..=1.0).contains(&self.bar_padding) {
            return Err(ChartError::InvalidData(
                "bar padding must be finite and in [0, 1]".to_owned(),
            ));
        }
        if self.y_family == Some(MappingFamily::Time) {
            return Err(ChartError::UnsupportedConfiguration(
                "y axis has no time mapping family".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_bar_padding() -> f64 {
    0.5
}

/// Everything one derivation pass reads.
#[derive(Debug)]
pub struct ScaleRequest<'a, S, P> {
    pub data: &'a [S],
    pub accessors: &'a Accessors<S, P>,
    pub options: &'a ScaleOptions,
    pub inner: InnerSize,
}

impl<'a, S, P> ScaleRequest<'a, S, P> {
    #[must_use]
    pub fn new(
        data: &'a [S],
        accessors: &'a Accessors<S, P>,
        options: &'a ScaleOptions,
        inner: InnerSize,
    ) -> Self {
        Self {
            data,
            accessors,
            options,
            inner,
        }
    }
}

/// Derives X and Y mappings plus intercepts from data.
///
/// Derivation is pure: the same request always yields the same scales, and a
/// failure on either axis fails the whole pass.
#[derive(Debug, Clone, Default)]
pub struct ScaleEngine<Pr = ValueTypeProbe> {
    probe: Pr,
}

impl ScaleEngine<ValueTypeProbe> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Pr: FamilyProbe> ScaleEngine<Pr> {
    #[must_use]
    pub fn with_probe(probe: Pr) -> Self {
        Self { probe }
    }

    pub fn derive<S, P>(&self, request: &ScaleRequest<'_, S, P>) -> ChartResult<DerivedScales> {
        let accessors = request.accessors.resolve()?;
        let options = request.options;
        options.validate()?;

        let x = match &options.x_scale {
            Some(scale) => {
                trace!("x scale supplied by caller");
                scale.clone()
            }
            None => self.derive_x(request.data, &accessors, options, request.inner)?,
        };
        let y = match &options.y_scale {
            Some(scale) => {
                trace!("y scale supplied by caller");
                scale.clone()
            }
            None => self.derive_y(request.data, &accessors, options, request.inner)?,
        };

        debug!(
            x_family = %x.mapping.family(),
            x_intercept = x.intercept,
            y_family = %y.mapping.family(),
            y_intercept = y.intercept,
            stacks = request.data.len(),
            "derived scales"
        );
        Ok(DerivedScales { x, y })
    }

    fn derive_x<S, P>(
        &self,
        data: &[S],
        accessors: &ResolvedAccessors<'_, S, P>,
        options: &ScaleOptions,
        inner: InnerSize,
    ) -> ChartResult<AxisScale> {
        let first = first_stack_values(data, accessors)?;
        let family = match options.x_family {
            Some(family) => family,
            None => self.probe.probe(Axis::X, &accessors.x(&first[0])),
        };

        match family {
            MappingFamily::Linear => linear_x(data, accessors, inner),
            MappingFamily::Time => time_x(first, accessors, inner),
            MappingFamily::Ordinal => ordinal_x(first, accessors, options.bar_padding, inner),
        }
    }

    fn derive_y<S, P>(
        &self,
        data: &[S],
        accessors: &ResolvedAccessors<'_, S, P>,
        options: &ScaleOptions,
        inner: InnerSize,
    ) -> ChartResult<AxisScale> {
        let first = first_stack_values(data, accessors)?;
        let family = match options.y_family {
            Some(family) => family,
            None => self.probe.probe(Axis::Y, &accessors.y(&first[0])),
        };

        match family {
            MappingFamily::Linear => linear_y(data, accessors, options.grouped_bars, inner),
            MappingFamily::Time => Err(ChartError::UnsupportedConfiguration(
                "y axis has no time mapping family".to_owned(),
            )),
            MappingFamily::Ordinal => Err(ChartError::UnsupportedConfiguration(
                "ordinal y mapping needs a caller-supplied domain; pass `y_scale`".to_owned(),
            )),
        }
    }
}

/// Derives scales with the default value-type probe.
pub fn derive_scales<S, P>(request: &ScaleRequest<'_, S, P>) -> ChartResult<DerivedScales> {
    ScaleEngine::new().derive(request)
}

fn first_stack_values<'d, S, P>(
    data: &'d [S],
    accessors: &ResolvedAccessors<'_, S, P>,
) -> ChartResult<&'d [P]> {
    let first = data.first().ok_or(ChartError::EmptyDataset)?;
    let values = accessors.values(first);
    if values.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    Ok(values)
}

fn linear_x<S, P>(
    data: &[S],
    accessors: &ResolvedAccessors<'_, S, P>,
    inner: InnerSize,
) -> ChartResult<AxisScale> {
    let mut extent = Extent::new(Axis::X);
    for stack in data {
        for point in accessors.values(stack) {
            extent.push(expect_number(Axis::X, &accessors.x(point))?);
        }
    }
    let domain = extent.finish()?;
    linear_axis(Axis::X, domain, (0.0, inner.width))
}

fn linear_y<S, P>(
    data: &[S],
    accessors: &ResolvedAccessors<'_, S, P>,
    grouped_bars: bool,
    inner: InnerSize,
) -> ChartResult<AxisScale> {
    let mut extent = Extent::new(Axis::Y);
    for stack in data {
        for point in accessors.values(stack) {
            let y = expect_number(Axis::Y, &accessors.y(point))?;
            extent.push(if grouped_bars {
                y
            } else {
                accessors.y0(point) + y
            });
        }
    }
    let (min, max) = extent.finish()?;
    linear_axis(Axis::Y, (min.min(0.0), max), (inner.height, 0.0))
}

/// Builds a linear mapping whose intercept sits at zero, or at the domain
/// floor when the whole domain is positive.
fn linear_axis(axis: Axis, domain: (f64, f64), range: (f64, f64)) -> ChartResult<AxisScale> {
    let scale = LinearScale::new(domain, range)?;
    if scale.is_degenerate() {
        warn!(
            axis = %axis,
            value = domain.0,
            "collapsed linear domain, mapping every value to the range midpoint"
        );
    }
    let zero = domain.0.max(0.0);
    let intercept = scale.map(zero);
    debug!(
        axis = %axis,
        domain_min = domain.0,
        domain_max = domain.1,
        intercept,
        "linear scale"
    );
    Ok(AxisScale::new(scale, intercept))
}

fn time_x<S, P>(
    first: &[P],
    accessors: &ResolvedAccessors<'_, S, P>,
    inner: InnerSize,
) -> ChartResult<AxisScale> {
    let mut min: Option<DateTime<Utc>> = None;
    let mut max: Option<DateTime<Utc>> = None;
    for point in first {
        let value = accessors.x(point);
        let time = value.as_time().ok_or_else(|| {
            ChartError::InvalidData(format!(
                "x value `{value}` is not a date but the axis uses a time mapping"
            ))
        })?;
        min = Some(min.map_or(time, |m| m.min(time)));
        max = Some(max.map_or(time, |m| m.max(time)));
    }
    let (Some(min), Some(max)) = (min, max) else {
        return Err(ChartError::EmptyDataset);
    };

    let scale = TimeScale::new((min, max), (0.0, inner.width))?;
    if scale.is_degenerate() {
        warn!(
            axis = %Axis::X,
            value = %min,
            "collapsed time domain, mapping every value to the range midpoint"
        );
    }
    debug!(start = %min, end = %max, "time scale");
    Ok(AxisScale::new(scale, 0.0))
}

fn ordinal_x<S, P>(
    first: &[P],
    accessors: &ResolvedAccessors<'_, S, P>,
    bar_padding: f64,
    inner: InnerSize,
) -> ChartResult<AxisScale> {
    let scale = BandScale::new(
        first.iter().map(|point| accessors.x(point)),
        (0.0, inner.width),
        bar_padding,
    )?;
    debug!(
        bands = scale.len(),
        band_width = scale.band_width(),
        "ordinal scale"
    );
    Ok(AxisScale::new(scale, 0.0))
}

fn expect_number(axis: Axis, value: &DomainValue) -> ChartResult<f64> {
    value.as_number().ok_or_else(|| {
        ChartError::InvalidData(format!(
            "{axis} value `{value}` is not numeric but the axis uses a linear mapping"
        ))
    })
}

/// Running `[min, max]` over finite values.
///
/// Infinities are skipped along with NaN, unlike `d3.extent` which only drops
/// NaN and missing values.
struct Extent {
    axis: Axis,
    min: f64,
    max: f64,
    skipped: usize,
}

impl Extent {
    fn new(axis: Axis) -> Self {
        Self {
            axis,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            skipped: 0,
        }
    }

    fn push(&mut self, value: f64) {
        if !value.is_finite() {
            self.skipped += 1;
            return;
        }
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    fn finish(self) -> ChartResult<(f64, f64)> {
        if self.skipped > 0 {
            warn!(
                axis = %self.axis,
                skipped = self.skipped,
                "ignoring non-finite values in extent"
            );
        }
        if self.min > self.max {
            return Err(ChartError::InvalidData(format!(
                "{} extent has no finite values",
                self.axis
            )));
        }
        Ok((self.min, self.max))
    }
}
