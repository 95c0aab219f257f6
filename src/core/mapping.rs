use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{BandScale, DomainValue, LinearScale, TimeScale};

/// Which kind of mapping an axis uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingFamily {
    Linear,
    Time,
    Ordinal,
}

impl fmt::Display for MappingFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Linear => "linear",
            Self::Time => "time",
            Self::Ordinal => "ordinal",
        };
        f.write_str(name)
    }
}

/// A domain-to-pixel mapping of one of the three families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum Mapping {
    Linear(LinearScale),
    Time(TimeScale),
    Ordinal(BandScale),
}

impl Mapping {
    #[must_use]
    pub fn family(&self) -> MappingFamily {
        match self {
            Self::Linear(_) => MappingFamily::Linear,
            Self::Time(_) => MappingFamily::Time,
            Self::Ordinal(_) => MappingFamily::Ordinal,
        }
    }

    /// Maps a value to a pixel coordinate.
    ///
    /// Returns `None` when the value kind does not match the family (e.g. a
    /// category fed to a linear mapping) or when an ordinal key is unknown.
    #[must_use]
    pub fn map(&self, value: &DomainValue) -> Option<f64> {
        match self {
            Self::Linear(scale) => value.as_number().map(|v| scale.map(v)),
            Self::Time(scale) => value.as_time().map(|t| scale.map(t)),
            Self::Ordinal(scale) => scale.map(value),
        }
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Linear(scale) => scale.range(),
            Self::Time(scale) => scale.range(),
            Self::Ordinal(scale) => scale.range(),
        }
    }

    #[must_use]
    pub fn as_linear(&self) -> Option<LinearScale> {
        match self {
            Self::Linear(scale) => Some(*scale),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_time(&self) -> Option<TimeScale> {
        match self {
            Self::Time(scale) => Some(*scale),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_ordinal(&self) -> Option<&BandScale> {
        match self {
            Self::Ordinal(scale) => Some(scale),
            _ => None,
        }
    }
}

impl From<LinearScale> for Mapping {
    fn from(value: LinearScale) -> Self {
        Self::Linear(value)
    }
}

impl From<TimeScale> for Mapping {
    fn from(value: TimeScale) -> Self {
        Self::Time(value)
    }
}

impl From<BandScale> for Mapping {
    fn from(value: BandScale) -> Self {
        Self::Ordinal(value)
    }
}

/// A mapping paired with the pixel where its zero/baseline value falls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub mapping: Mapping,
    pub intercept: f64,
}

impl AxisScale {
    #[must_use]
    pub fn new(mapping: impl Into<Mapping>, intercept: f64) -> Self {
        Self {
            mapping: mapping.into(),
            intercept,
        }
    }
}

/// Result of one derivation pass: both axes, always produced together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedScales {
    pub x: AxisScale,
    pub y: AxisScale,
}

impl DerivedScales {
    #[must_use]
    pub fn x_mapping(&self) -> &Mapping {
        &self.x.mapping
    }

    #[must_use]
    pub fn x_intercept(&self) -> f64 {
        self.x.intercept
    }

    #[must_use]
    pub fn y_mapping(&self) -> &Mapping {
        &self.y.mapping
    }

    #[must_use]
    pub fn y_intercept(&self) -> f64 {
        self.y.intercept
    }

    /// Splits into `(x_mapping, x_intercept, y_mapping, y_intercept)`.
    #[must_use]
    pub fn into_parts(self) -> (Mapping, f64, Mapping, f64) {
        (self.x.mapping, self.x.intercept, self.y.mapping, self.y.intercept)
    }
}
