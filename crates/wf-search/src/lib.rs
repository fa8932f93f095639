//! `wf-search` — graph-search strategies for the wayfind visualizer.
//!
//! # Run model
//!
//! ```text
//! SearchRequest ──validate──▶ ValidatedRequest ──SearchEngine::run──▶ SearchOutcome
//!                                                   │
//!   per expanded city:                              │
//!     ① cancelled?            → CANCELLED outcome   │
//!     ② pop from frontier                           │
//!     ③ on_explore_start  · yield (delay, pause)    │
//!     ④ goal?                 → highlight path, SUCCESS
//!     ⑤ generate successors                         │
//!     ⑥ on_explore_end    · yield                   │
//!   frontier empty            → EXHAUSTED outcome   ▼
//! ```
//!
//! Configuration errors (unknown city, start is a goal, multi-goal
//! bidirectional, zero depth bounds) are `SearchError`s returned before any
//! search state exists.  "No path" is an outcome, not an error.
//!
//! # Cargo features
//!
//! | Feature | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | `Serialize` on `SearchOutcome`, `SearchStats`, `Strategy`, `TraceEvent`. |

pub mod control;
pub mod engine;
pub mod error;
pub mod goal;
pub mod observer;
pub mod outcome;
pub mod request;
pub mod strategy;
pub mod trace;

mod run;
mod tree;


pub use control::{RunControl, RunGuard};
pub use engine::SearchEngine;
pub use error::{SearchError, SearchResult};
pub use goal::GoalSet;
pub use observer::{NoopObserver, SearchObserver};
pub use outcome::{SearchOutcome, SearchStats, Termination};
pub use request::{SearchOptions, SearchRequest, ValidatedRequest};
pub use strategy::Strategy;
pub use trace::{TraceEvent, TraceRecorder};
