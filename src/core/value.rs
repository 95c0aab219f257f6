use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{date_to_datetime, decimal_to_f64};
use crate::error::ChartError;

/// A value extracted from a datum by an `x` or `y` accessor.
///
/// Numbers are compared by total order so values can key ordinal domains.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DomainValue {
    Number(OrderedFloat<f64>),
    Time(DateTime<Utc>),
    Category(String),
}

impl DomainValue {
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }

    #[must_use]
    pub fn time(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }

    #[must_use]
    pub fn category(value: impl Into<String>) -> Self {
        Self::Category(value.into())
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value.into_inner()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Time(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_category(&self) -> Option<&str> {
        match self {
            Self::Category(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Month (1..=12) for values with calendar structure, `None` otherwise.
    #[must_use]
    pub fn month(&self) -> Option<u32> {
        self.as_time().map(|time| time.month())
    }
}

impl fmt::Display for DomainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value.into_inner()),
            Self::Time(value) => write!(f, "{}", value.to_rfc3339()),
            Self::Category(value) => f.write_str(value),
        }
    }
}

impl From<f64> for DomainValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<i32> for DomainValue {
    fn from(value: i32) -> Self {
        Self::number(f64::from(value))
    }
}

impl From<u32> for DomainValue {
    fn from(value: u32) -> Self {
        Self::number(f64::from(value))
    }
}

impl From<&str> for DomainValue {
    fn from(value: &str) -> Self {
        Self::category(value)
    }
}

impl From<String> for DomainValue {
    fn from(value: String) -> Self {
        Self::Category(value)
    }
}

impl From<DateTime<Utc>> for DomainValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

impl From<NaiveDate> for DomainValue {
    fn from(value: NaiveDate) -> Self {
        Self::Time(date_to_datetime(value))
    }
}

impl TryFrom<Decimal> for DomainValue {
    type Error = ChartError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        decimal_to_f64(value, "domain value").map(Self::number)
    }
}
