use serde::{Deserialize, Serialize};

use crate::core::{DerivedScales, InnerSize, PlacedMark, Viewport};

use super::AxisPlacement;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSnapshot {
    pub viewport: Viewport,
    pub inner: InnerSize,
    pub scales: DerivedScales,
    pub x_axis: AxisPlacement,
    pub y_axis: AxisPlacement,
    pub marks: Vec<PlacedMark>,
}
