use serde::{Deserialize, Serialize};

use crate::core::PlacedMark;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque color from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_hex_rgb(hex: u32) -> Self {
        let red = ((hex >> 16) & 0xff) as f64 / 255.0;
        let green = ((hex >> 8) & 0xff) as f64 / 255.0;
        let blue = (hex & 0xff) as f64 / 255.0;
        Self::rgb(red, green, blue)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in drawing-area pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Checks a placed mark before drawing.
///
/// Unplaced marks pass: keeping every datum inside the mapped domains is the
/// caller's job, and backends simply skip them.
pub fn validate_mark(mark: &PlacedMark) -> ChartResult<()> {
    if let Some(position) = mark.position {
        if !position.x.is_finite() || !position.y.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "mark `{}` coordinates must be finite",
                mark.key
            )));
        }
    }
    if !mark.symbol.size.is_finite() || mark.symbol.size <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "mark `{}` symbol size must be finite and > 0",
            mark.key
        )));
    }
    mark.fill.validate()
}
