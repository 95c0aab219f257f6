use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::DomainValue;
use crate::error::{ChartError, ChartResult};

/// Discrete mapping from category keys onto equal-width pixel bands.
///
/// The range is split into `n` steps of `span / n`. Each band is
/// `step * (1 - padding)` wide and centered in its step, so neighbouring
/// bands are separated by `step * padding`. Keys keep their first-seen order;
/// duplicates collapse onto the first occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    domain: IndexSet<DomainValue>,
    range_start: f64,
    range_end: f64,
    padding: f64,
}

impl BandScale {
    pub fn new<I>(keys: I, range: (f64, f64), padding: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = DomainValue>,
    {
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "band range must be finite".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..=1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1]".to_owned(),
            ));
        }

        Ok(Self {
            domain: keys.into_iter().collect(),
            range_start: range.0,
            range_end: range.1,
            padding,
        })
    }

    #[must_use]
    pub fn domain(&self) -> &IndexSet<DomainValue> {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Distance between the starts of two neighbouring bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        if self.domain.is_empty() {
            return 0.0;
        }
        (self.range_end - self.range_start).abs() / self.domain.len() as f64
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Start pixel of the band for `key`, `None` for keys outside the domain.
    #[must_use]
    pub fn map(&self, key: &DomainValue) -> Option<f64> {
        self.domain
            .get_index_of(key)
            .map(|index| self.band_start(index))
    }

    fn band_start(&self, index: usize) -> f64 {
        let step = self.step();
        let reversed = self.range_end < self.range_start;
        let (low, slot) = if reversed {
            (self.range_end, self.domain.len() - 1 - index)
        } else {
            (self.range_start, index)
        };
        low + step * slot as f64 + step * self.padding * 0.5
    }
}
