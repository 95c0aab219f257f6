use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Mapping, ResolvedAccessors};
use crate::render::Color;

/// Symbol drawn for each scatter point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolShape {
    #[default]
    Circle,
    Cross,
    Diamond,
    Square,
    TriangleUp,
}

/// Shape and area (square pixels) of one mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkSymbol {
    pub shape: SymbolShape,
    pub size: f64,
}

impl MarkSymbol {
    pub const DEFAULT_SIZE: f64 = 64.0;

    #[must_use]
    pub const fn new(shape: SymbolShape, size: f64) -> Self {
        Self { shape, size }
    }
}

impl Default for MarkSymbol {
    fn default() -> Self {
        Self::new(SymbolShape::Circle, Self::DEFAULT_SIZE)
    }
}

/// Stable identity of a mark: owning stack label plus index within the stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkKey {
    pub label: String,
    pub index: usize,
}

impl fmt::Display for MarkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.label, self.index)
    }
}

/// Pixel position inside the drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkPosition {
    pub x: f64,
    pub y: f64,
}

/// One scatter mark ready to draw.
///
/// `position` is `None` when either mapping could not place the value, e.g.
/// an ordinal key missing from the domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedMark {
    pub key: MarkKey,
    pub position: Option<MarkPosition>,
    pub fill: Color,
    pub symbol: MarkSymbol,
}

/// Places one mark per point, stacks in order, points in order within a stack.
///
/// The output order only depends on input order, so keys stay stable across
/// passes over the same data.
pub fn place_points<S, P, C, M>(
    data: &[S],
    accessors: &ResolvedAccessors<'_, S, P>,
    x_mapping: &Mapping,
    y_mapping: &Mapping,
    mut color_of: C,
    mut symbol_of: M,
) -> Vec<PlacedMark>
where
    C: FnMut(&str) -> Color,
    M: FnMut(&P) -> MarkSymbol,
{
    let mut marks = Vec::new();
    for stack in data {
        let label = accessors.label(stack);
        let fill = color_of(&label);
        for (index, point) in accessors.values(stack).iter().enumerate() {
            marks.push(PlacedMark {
                key: MarkKey {
                    label: label.clone(),
                    index,
                },
                position: position_of(point, accessors, x_mapping, y_mapping),
                fill,
                symbol: symbol_of(point),
            });
        }
    }

    trace!(count = marks.len(), "placed scatter marks");
    marks
}

/// Pixel position of a single point, `None` if either axis cannot place it.
pub fn position_of<S, P>(
    point: &P,
    accessors: &ResolvedAccessors<'_, S, P>,
    x_mapping: &Mapping,
    y_mapping: &Mapping,
) -> Option<MarkPosition> {
    let x = x_mapping.map(&accessors.x(point))?;
    let y = y_mapping.map(&accessors.y(point))?;
    (x.is_finite() && y.is_finite()).then_some(MarkPosition { x, y })
}
