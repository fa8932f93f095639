//! `wf-graph` — the city/road graph searched by `wf-search`.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`city`]   | `City`, `CityKind`                                          |
//! | [`graph`]  | `Graph` (CSR adjacency), `GraphBuilder`, path cost, heuristic |
//! | [`loader`] | JSON document and CSV pair loaders                          |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `City` and core types.  |

pub mod city;
pub mod error;
pub mod graph;
pub mod loader;


pub use city::{City, CityKind};
pub use error::{GraphError, GraphResult};
pub use graph::{Graph, GraphBuilder};
pub use loader::{
    load_csv_files, load_csv_readers, load_json_file, load_json_reader, load_json_str,
};
