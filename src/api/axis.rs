use serde::{Deserialize, Serialize};

use crate::core::{DerivedScales, InnerSize};
use crate::render::{Color, LinePrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// Where an axis line sits inside the drawing area.
///
/// The X axis runs along the Y intercept and the Y axis along the X
/// intercept, so both cross at the data origin when zero is in view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisPlacement {
    pub orientation: AxisOrientation,
    pub zero: f64,
    pub inner: InnerSize,
}

impl AxisPlacement {
    #[must_use]
    pub fn x_axis(scales: &DerivedScales, inner: InnerSize) -> Self {
        Self {
            orientation: AxisOrientation::Bottom,
            zero: scales.y_intercept(),
            inner,
        }
    }

    #[must_use]
    pub fn y_axis(scales: &DerivedScales, inner: InnerSize) -> Self {
        Self {
            orientation: AxisOrientation::Left,
            zero: scales.x_intercept(),
            inner,
        }
    }

    #[must_use]
    pub fn line(self, stroke_width: f64, color: Color) -> LinePrimitive {
        match self.orientation {
            AxisOrientation::Bottom => LinePrimitive::new(
                0.0,
                self.zero,
                self.inner.width,
                self.zero,
                stroke_width,
                color,
            ),
            AxisOrientation::Left => LinePrimitive::new(
                self.zero,
                0.0,
                self.zero,
                self.inner.height,
                stroke_width,
                color,
            ),
        }
    }
}
