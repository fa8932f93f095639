//! Graph load and construction errors.

use thiserror::Error;

use wf_core::{CityId, GeoPoint};

/// Errors produced while building or loading a [`Graph`][crate::Graph].
///
/// All of them are fatal to initialization: a loader that returns one never
/// hands out a partially built graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("graph parse error: {0}")]
    Parse(String),

    #[error("duplicate city {0:?}")]
    DuplicateCity(String),

    #[error("city {name:?} has invalid coordinates {pos}")]
    InvalidCoordinate { name: String, pos: GeoPoint },

    #[error("road {from:?} – {to:?} references unknown city {missing:?}")]
    DanglingRoad {
        from:    String,
        to:      String,
        missing: String,
    },

    #[error("city {0} not found in graph")]
    UnknownCity(CityId),

    #[error("road {from:?} – {to:?} has invalid distance {distance}")]
    InvalidDistance {
        from:     String,
        to:       String,
        distance: f64,
    },

    #[error("second road between {from:?} and {to:?}")]
    DuplicateRoad { from: String, to: String },

    #[error("road from {0:?} to itself")]
    SelfLoop(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
