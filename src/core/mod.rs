pub mod band_scale;
pub mod data;
pub mod family;
pub mod mapping;
pub mod primitives;
pub mod scale;
pub mod scale_engine;
pub mod scatter_series;
pub mod time_scale;
pub mod types;
pub mod value;

pub use band_scale::BandScale;
pub use data::{Accessors, ChartData, Datum, ResolvedAccessors, Series};
pub use family::{Axis, FamilyProbe, ValueTypeProbe};
pub use mapping::{AxisScale, DerivedScales, Mapping, MappingFamily};
pub use scale::LinearScale;
pub use scale_engine::{ScaleEngine, ScaleOptions, ScaleRequest, derive_scales};
pub use scatter_series::{
    MarkKey, MarkPosition, MarkSymbol, PlacedMark, SymbolShape, place_points, position_of,
};
pub use time_scale::TimeScale;
pub use types::{InnerSize, Margins, Viewport};
pub use value::DomainValue;
