use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::DomainValue;
use crate::error::{ChartError, ChartResult};

pub type ValuesFn<S, P> = Arc<dyn for<'s> Fn(&'s S) -> &'s [P] + Send + Sync>;
pub type LabelFn<S> = Arc<dyn Fn(&S) -> String + Send + Sync>;
pub type ValueFn<P> = Arc<dyn Fn(&P) -> DomainValue + Send + Sync>;
pub type BaselineFn<P> = Arc<dyn Fn(&P) -> f64 + Send + Sync>;

/// Caller-supplied functions that read stacks (`S`) and points (`P`).
///
/// `values`, `label`, `x` and `y` are required; `y0` defaults to `0`.
pub struct Accessors<S, P> {
    values: Option<ValuesFn<S, P>>,
    label: Option<LabelFn<S>>,
    x: Option<ValueFn<P>>,
    y: Option<ValueFn<P>>,
    y0: Option<BaselineFn<P>>,
}

impl<S, P> Accessors<S, P> {
    /// Creates an accessor set with nothing configured.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: None,
            label: None,
            x: None,
            y: None,
            y0: None,
        }
    }

    #[must_use]
    pub fn with_values<F>(mut self, values: F) -> Self
    where
        F: for<'s> Fn(&'s S) -> &'s [P] + Send + Sync + 'static,
    {
        self.values = Some(Arc::new(values));
        self
    }

    #[must_use]
    pub fn with_label<F>(mut self, label: F) -> Self
    where
        F: Fn(&S) -> String + Send + Sync + 'static,
    {
        self.label = Some(Arc::new(label));
        self
    }

    #[must_use]
    pub fn with_x<F>(mut self, x: F) -> Self
    where
        F: Fn(&P) -> DomainValue + Send + Sync + 'static,
    {
        self.x = Some(Arc::new(x));
        self
    }

    #[must_use]
    pub fn with_y<F>(mut self, y: F) -> Self
    where
        F: Fn(&P) -> DomainValue + Send + Sync + 'static,
    {
        self.y = Some(Arc::new(y));
        self
    }

    #[must_use]
    pub fn with_y0<F>(mut self, y0: F) -> Self
    where
        F: Fn(&P) -> f64 + Send + Sync + 'static,
    {
        self.y0 = Some(Arc::new(y0));
        self
    }

    /// Checks that every required accessor is present.
    ///
    /// Missing accessors are reported in `x`, `y`, `values`, `label` order.
    pub fn resolve(&self) -> ChartResult<ResolvedAccessors<'_, S, P>> {
        let x = self
            .x
            .as_deref()
            .ok_or(ChartError::MissingAccessor { name: "x" })?;
        let y = self
            .y
            .as_deref()
            .ok_or(ChartError::MissingAccessor { name: "y" })?;
        let values = self
            .values
            .as_deref()
            .ok_or(ChartError::MissingAccessor { name: "values" })?;
        let label = self
            .label
            .as_deref()
            .ok_or(ChartError::MissingAccessor { name: "label" })?;

        Ok(ResolvedAccessors {
            values,
            label,
            x,
            y,
            y0: self.y0.as_deref(),
        })
    }
}

impl<S, P> Default for Accessors<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, P> Clone for Accessors<S, P> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            label: self.label.clone(),
            x: self.x.clone(),
            y: self.y.clone(),
            y0: self.y0.clone(),
        }
    }
}

impl<S, P> fmt::Debug for Accessors<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessors")
            .field("values", &self.values.is_some())
            .field("label", &self.label.is_some())
            .field("x", &self.x.is_some())
            .field("y", &self.y.is_some())
            .field("y0", &self.y0.is_some())
            .finish()
    }
}

/// Borrowed view over an `Accessors` set whose required entries are present.
pub struct ResolvedAccessors<'a, S, P> {
    values: &'a (dyn for<'s> Fn(&'s S) -> &'s [P] + Send + Sync),
    label: &'a (dyn Fn(&S) -> String + Send + Sync),
    x: &'a (dyn Fn(&P) -> DomainValue + Send + Sync),
    y: &'a (dyn Fn(&P) -> DomainValue + Send + Sync),
    y0: Option<&'a (dyn Fn(&P) -> f64 + Send + Sync)>,
}

impl<S, P> ResolvedAccessors<'_, S, P> {
    pub fn values<'s>(&self, stack: &'s S) -> &'s [P] {
        (self.values)(stack)
    }

    pub fn label(&self, stack: &S) -> String {
        (self.label)(stack)
    }

    pub fn x(&self, point: &P) -> DomainValue {
        (self.x)(point)
    }

    pub fn y(&self, point: &P) -> DomainValue {
        (self.y)(point)
    }

    pub fn y0(&self, point: &P) -> f64 {
        self.y0.map_or(0.0, |y0| y0(point))
    }
}

/// One data point in the ready-made `Series` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    pub x: DomainValue,
    pub y: DomainValue,
    #[serde(default)]
    pub y0: f64,
}

impl Datum {
    #[must_use]
    pub fn new(x: impl Into<DomainValue>, y: impl Into<DomainValue>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            y0: 0.0,
        }
    }

    #[must_use]
    pub fn with_y0(mut self, y0: f64) -> Self {
        self.y0 = y0;
        self
    }
}

/// A labelled data series in the ready-made shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<Datum>,
}

impl Series {
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<Datum>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

impl Accessors<Series, Datum> {
    /// Accessors reading `Series::label`, `Series::values` and the `Datum` fields.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_values(|stack: &Series| stack.values.as_slice())
            .with_label(|stack: &Series| stack.label.clone())
            .with_x(|point: &Datum| point.x.clone())
            .with_y(|point: &Datum| point.y.clone())
            .with_y0(|point: &Datum| point.y0)
    }
}

/// Chart input before normalization: one stack or many.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData<S> {
    Single(S),
    Stacks(Vec<S>),
}

impl<S> ChartData<S> {
    /// Normalizes into an ordered list of stacks.
    #[must_use]
    pub fn into_stacks(self) -> Vec<S> {
        match self {
            Self::Single(stack) => vec![stack],
            Self::Stacks(stacks) => stacks,
        }
    }
}

impl<S> From<Vec<S>> for ChartData<S> {
    fn from(value: Vec<S>) -> Self {
        Self::Stacks(value)
    }
}
