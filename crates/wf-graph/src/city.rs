//! City records.

use std::fmt;

use serde::Deserialize;

use wf_core::GeoPoint;

/// What a city is marked as on the map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[serde(rename_all = "kebab-case")]
pub enum CityKind {
    Capital,
    EconomicCenter,
}

impl fmt::Display for CityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            CityKind::Capital        => "capital",
            CityKind::EconomicCenter => "economic-center",
        })
    }
}

/// A graph node.  Immutable once added to a [`GraphBuilder`][crate::GraphBuilder].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Unique external identifier.
    pub name: String,
    pub kind: CityKind,
    pub pos:  GeoPoint,
}

impl City {
    pub fn new(name: impl Into<String>, kind: CityKind, pos: GeoPoint) -> Self {
        Self { name: name.into(), kind, pos }
    }
}
