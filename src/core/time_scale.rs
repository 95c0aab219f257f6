use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::primitives::datetime_to_unix_millis;
use crate::error::ChartResult;

/// Continuous mapping from a `[min_date, max_date]` domain onto a pixel range.
///
/// Internally a linear mapping over millisecond timestamps, so it shares the
/// collapsed-domain policy of `LinearScale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> ChartResult<Self> {
        let linear = LinearScale::new(
            (
                datetime_to_unix_millis(domain.0),
                datetime_to_unix_millis(domain.1),
            ),
            range,
        )?;
        Ok(Self {
            start: domain.0,
            end: domain.1,
            linear,
        })
    }

    #[must_use]
    pub fn domain(self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.linear.is_degenerate()
    }

    #[must_use]
    pub fn map(self, time: DateTime<Utc>) -> f64 {
        self.linear.map(datetime_to_unix_millis(time))
    }

    /// Maps a pixel back to the nearest millisecond in the domain.
    #[must_use]
    pub fn invert(self, pixel: f64) -> Option<DateTime<Utc>> {
        let millis = self.linear.invert(pixel).round();
        if !millis.is_finite() || millis < i64::MIN as f64 || millis > i64::MAX as f64 {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64)
    }
}
