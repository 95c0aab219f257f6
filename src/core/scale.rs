use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Continuous linear mapping from a numeric domain onto a pixel range.
///
/// A collapsed domain (`start == end`) is accepted: every value maps to the
/// midpoint of the range and `invert` returns the domain value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return (self.range_start + self.range_end) * 0.5;
        }
        let normalized = normalize(value, self.domain_start, self.domain_end);
        lerp(self.range_start, self.range_end, normalized)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        if self.is_degenerate() || self.range_start == self.range_end {
            return self.domain_start;
        }
        let normalized = normalize(pixel, self.range_start, self.range_end);
        lerp(self.domain_start, self.domain_end, normalized)
    }
}

/// Position of `value` in `[start, end]` as a fraction, for `start != end`.
///
/// Finite bounds far enough apart overflow `end - start`; those are halved
/// before subtracting.
fn normalize(value: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span.is_finite() {
        (value - start) / span
    } else {
        (value * 0.5 - start * 0.5) / (end * 0.5 - start * 0.5)
    }
}

fn lerp(start: f64, end: f64, t: f64) -> f64 {
    let span = end - start;
    if span.is_finite() {
        start + t * span
    } else {
        start * (1.0 - t) + end * t
    }
}
