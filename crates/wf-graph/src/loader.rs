//! Graph loaders.
//!
//! # JSON document
//!
//! ```json
//! {
//!   "nodes": [
//!     { "id": "Berlin",  "category": "capital",         "latitude": 52.52, "longitude": 13.405 },
//!     { "id": "Hamburg", "category": "economic-center", "latitude": 53.55, "longitude": 9.994 }
//!   ],
//!   "links": [
//!     { "source": "Berlin", "target": "Hamburg", "distance": 289 }
//!   ]
//! }
//! ```
//!
//! # CSV pair
//!
//! The same records split across two files:
//!
//! ```csv
//! id,category,latitude,longitude
//! Berlin,capital,52.52,13.405
//! ```
//!
//! ```csv
//! source,target,distance
//! Berlin,Hamburg,289
//! ```
//!
//! Either form is validated record by record; the first bad record aborts the
//! load and no graph is returned.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use wf_core::GeoPoint;

use crate::{City, CityKind, Graph, GraphBuilder, GraphError, GraphResult};

// ── Records ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct GraphDocument {
    nodes: Vec<NodeRecord>,
    links: Vec<LinkRecord>,
}

#[derive(Deserialize)]
struct NodeRecord {
    id:        String,
    category:  CityKind,
    latitude:  f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct LinkRecord {
    source:   String,
    target:   String,
    distance: f64,
}

// ── JSON ──────────────────────────────────────────────────────────────────────

/// Load a graph from a JSON document held in memory.
pub fn load_json_str(json: &str) -> GraphResult<Graph> {
    let doc: GraphDocument =
        serde_json::from_str(json).map_err(|e| GraphError::Parse(e.to_string()))?;
    from_records(doc.nodes, doc.links)
}

/// Like [`load_json_str`] but accepts any `Read` source.
pub fn load_json_reader<R: Read>(reader: R) -> GraphResult<Graph> {
    let doc: GraphDocument =
        serde_json::from_reader(reader).map_err(|e| GraphError::Parse(e.to_string()))?;
    from_records(doc.nodes, doc.links)
}

pub fn load_json_file(path: &Path) -> GraphResult<Graph> {
    let file = File::open(path)?;
    debug!(path = %path.display(), "loading graph document");
    load_json_reader(std::io::BufReader::new(file))
}

// ── CSV ───────────────────────────────────────────────────────────────────────

/// Load a graph from a cities CSV and a roads CSV.
///
/// Useful for testing (pass `std::io::Cursor`s) or for data exported from a
/// spreadsheet.
pub fn load_csv_readers<C: Read, R: Read>(cities: C, roads: R) -> GraphResult<Graph> {
    let nodes = csv::Reader::from_reader(cities)
        .deserialize::<NodeRecord>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| GraphError::Parse(format!("cities: {e}")))?;
    let links = csv::Reader::from_reader(roads)
        .deserialize::<LinkRecord>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| GraphError::Parse(format!("roads: {e}")))?;
    from_records(nodes, links)
}

pub fn load_csv_files(cities: &Path, roads: &Path) -> GraphResult<Graph> {
    load_csv_readers(File::open(cities)?, File::open(roads)?)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn from_records(nodes: Vec<NodeRecord>, links: Vec<LinkRecord>) -> GraphResult<Graph> {
    let mut b = GraphBuilder::with_capacity(nodes.len(), links.len());
    for n in nodes {
        b.add_city(City::new(n.id, n.category, GeoPoint::new(n.latitude, n.longitude)))?;
    }
    for l in links {
        b.add_road_named(&l.source, &l.target, l.distance)?;
    }
    Ok(b.build())
}
