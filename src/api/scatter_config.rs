use serde::{Deserialize, Serialize};

use crate::core::{InnerSize, Margins, MarkSymbol, ScaleOptions, SymbolShape, Viewport};
use crate::error::{ChartError, ChartResult};

/// Public scatter-plot configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Accessors are configured
/// separately because they are code, not data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPlotConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub scales: ScaleOptions,
    #[serde(default)]
    pub symbol: SymbolShape,
    #[serde(default = "default_symbol_size")]
    pub symbol_size: f64,
}

impl ScatterPlotConfig {
    /// Creates a config with no margins and default scale options.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            scales: ScaleOptions::default(),
            symbol: SymbolShape::default(),
            symbol_size: default_symbol_size(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_scale_options(mut self, scales: ScaleOptions) -> Self {
        self.scales = scales;
        self
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: SymbolShape) -> Self {
        self.symbol = symbol;
        self
    }

    #[must_use]
    pub fn with_symbol_size(mut self, symbol_size: f64) -> Self {
        self.symbol_size = symbol_size;
        self
    }

    pub fn inner_size(&self) -> ChartResult<InnerSize> {
        InnerSize::from_viewport(self.viewport, self.margins)
    }

    #[must_use]
    pub fn mark_symbol(&self) -> MarkSymbol {
        MarkSymbol::new(self.symbol, self.symbol_size)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: f64::from(self.viewport.width),
                height: f64::from(self.viewport.height),
            });
        }
        if !self.symbol_size.is_finite() || self.symbol_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "symbol size must be finite and > 0".to_owned(),
            ));
        }
        self.inner_size()?;
        self.scales.validate()
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_symbol_size() -> f64 {
    MarkSymbol::DEFAULT_SIZE
}
