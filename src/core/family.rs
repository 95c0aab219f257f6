use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{DomainValue, MappingFamily};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// Chooses a mapping family from the first value extracted for an axis.
///
/// The scale engine calls this once per inferred axis, with the value taken
/// from the first point of the first stack. Later values are never inspected.
pub trait FamilyProbe {
    fn probe(&self, axis: Axis, first_value: &DomainValue) -> MappingFamily;
}

/// Default probe keyed on the runtime kind of the value.
///
/// - numbers select `Linear` on either axis;
/// - on X, values with month structure select `Time`;
/// - everything else selects `Ordinal`.
///
/// Y never selects `Time`: a date on Y falls through to `Ordinal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueTypeProbe;

impl FamilyProbe for ValueTypeProbe {
    fn probe(&self, axis: Axis, first_value: &DomainValue) -> MappingFamily {
        if first_value.is_number() {
            return MappingFamily::Linear;
        }
        match axis {
            Axis::X if first_value.month().is_some() => MappingFamily::Time,
            _ => MappingFamily::Ordinal,
        }
    }
}

impl<T: FamilyProbe + ?Sized> FamilyProbe for &T {
    fn probe(&self, axis: Axis, first_value: &DomainValue) -> MappingFamily {
        (**self).probe(axis, first_value)
    }
}
