use crate::core::{InnerSize, PlacedMark};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, validate_mark};

/// Backend-agnostic scene for one chart draw pass.
///
/// Coordinates are relative to the drawing area; backends offset them by the
/// chart margins.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub inner: InnerSize,
    pub lines: Vec<LinePrimitive>,
    pub marks: Vec<PlacedMark>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(inner: InnerSize) -> Self {
        Self {
            inner,
            lines: Vec::new(),
            marks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_marks(mut self, marks: impl IntoIterator<Item = PlacedMark>) -> Self {
        self.marks.extend(marks);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.inner.width.is_finite()
            || !self.inner.height.is_finite()
            || self.inner.width <= 0.0
            || self.inner.height <= 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: self.inner.width,
                height: self.inner.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for mark in &self.marks {
            validate_mark(mark)?;
        }

        Ok(())
    }

    /// Number of marks that have a position.
    #[must_use]
    pub fn placed_mark_count(&self) -> usize {
        self.marks
            .iter()
            .filter(|mark| mark.position.is_some())
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.marks.is_empty()
    }
}
