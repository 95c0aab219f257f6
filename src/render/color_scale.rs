use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::Color;

/// The 20-color categorical palette used for stack fills by default.
pub const CATEGORY20: [Color; 20] = [
    Color::from_hex_rgb(0x1f77b4),
    Color::from_hex_rgb(0xaec7e8),
    Color::from_hex_rgb(0xff7f0e),
    Color::from_hex_rgb(0xffbb78),
    Color::from_hex_rgb(0x2ca02c),
    Color::from_hex_rgb(0x98df8a),
    Color::from_hex_rgb(0xd62728),
    Color::from_hex_rgb(0xff9896),
    Color::from_hex_rgb(0x9467bd),
    Color::from_hex_rgb(0xc5b0d5),
    Color::from_hex_rgb(0x8c564b),
    Color::from_hex_rgb(0xc49c94),
    Color::from_hex_rgb(0xe377c2),
    Color::from_hex_rgb(0xf7b6d2),
    Color::from_hex_rgb(0x7f7f7f),
    Color::from_hex_rgb(0xc7c7c7),
    Color::from_hex_rgb(0xbcbd22),
    Color::from_hex_rgb(0xdbdb8d),
    Color::from_hex_rgb(0x17becf),
    Color::from_hex_rgb(0x9edae5),
];

/// Assigns palette colors to stack labels in first-seen order.
///
/// Assignments persist, so a label keeps its color when stacks are added or
/// reordered. The palette wraps after its last entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ColorScaleParts")]
pub struct CategoricalColorScale {
    palette: Vec<Color>,
    assigned: IndexMap<String, usize>,
}

/// Serialized form; deserialization goes through `CategoricalColorScale::new`.
#[derive(Deserialize)]
struct ColorScaleParts {
    #[serde(default)]
    palette: Vec<Color>,
    #[serde(default)]
    assigned: IndexMap<String, usize>,
}

impl From<ColorScaleParts> for CategoricalColorScale {
    fn from(parts: ColorScaleParts) -> Self {
        Self {
            assigned: parts.assigned,
            ..Self::new(parts.palette)
        }
    }
}

impl CategoricalColorScale {
    /// Creates a scale over `palette`; an empty palette falls back to `CATEGORY20`.
    #[must_use]
    pub fn new(palette: Vec<Color>) -> Self {
        let palette = if palette.is_empty() {
            CATEGORY20.to_vec()
        } else {
            palette
        };
        Self {
            palette,
            assigned: IndexMap::new(),
        }
    }

    pub fn color_of(&mut self, label: &str) -> Color {
        let next = self.assigned.len();
        let slot = *self.assigned.entry(label.to_owned()).or_insert(next);
        self.palette[slot % self.palette.len()]
    }

    /// Color already assigned to `label`, without assigning a new one.
    #[must_use]
    pub fn assigned(&self, label: &str) -> Option<Color> {
        self.assigned
            .get(label)
            .map(|slot| self.palette[slot % self.palette.len()])
    }

    /// Labels in assignment order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.assigned.keys().map(String::as_str)
    }
}

impl Default for CategoricalColorScale {
    fn default() -> Self {
        Self::new(CATEGORY20.to_vec())
    }
}
