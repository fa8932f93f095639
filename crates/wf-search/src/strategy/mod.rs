//! The eight search strategies.
//!
//! | Strategy        | Frontier            | Visited check          | Optimal for         |
//! |-----------------|---------------------|------------------------|---------------------|
//! | `Bfs`           | FIFO                | global, on enqueue     | hop count           |
//! | `Dfs`           | LIFO                | global, on enqueue     | —                   |
//! | `Ucs`           | min cost            | on pop                 | road distance       |
//! | `Dls`           | LIFO, depth-bounded | current path only      | —                   |
//! | `Iddfs`         | repeated `Dls`      | current path only      | hop count (bounded) |
//! | `Bidirectional` | two FIFOs           | per direction          | —                   |
//! | `Greedy`        | min heuristic       | on pop                 | —                   |
//! | `AStar`         | min cost + heuristic| on pop                 | road distance       |

mod best_first;
mod bfs;
mod bidirectional;
mod depth_limited;
mod dfs;

use std::fmt;
use std::str::FromStr;

use wf_core::CityId;

use crate::run::Run;
use crate::{SearchError, SearchOutcome};

use best_first::Priority;

/// A search algorithm, selected by an exhaustive match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    Bfs,
    Dfs,
    Ucs,
    Dls,
    Iddfs,
    Bidirectional,
    Greedy,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 8] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Ucs,
        Strategy::Dls,
        Strategy::Iddfs,
        Strategy::Bidirectional,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    /// Canonical lowercase name, accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs           => "bfs",
            Strategy::Dfs           => "dfs",
            Strategy::Ucs           => "ucs",
            Strategy::Dls           => "dls",
            Strategy::Iddfs         => "iddfs",
            Strategy::Bidirectional => "bidirectional",
            Strategy::Greedy        => "greedy",
            Strategy::AStar         => "astar",
        }
    }

    /// Uses the straight-line heuristic.
    pub fn is_informed(self) -> bool {
        matches!(self, Strategy::Greedy | Strategy::AStar)
    }

    /// Accepts a goal set with more than one member.
    pub fn supports_multi_goal(self) -> bool {
        self != Strategy::Bidirectional
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first"                => Ok(Strategy::Bfs),
            "dfs" | "depth-first"                  => Ok(Strategy::Dfs),
            "ucs" | "uniform-cost" | "dijkstra"    => Ok(Strategy::Ucs),
            "dls" | "depth-limited"                => Ok(Strategy::Dls),
            "iddfs" | "ids" | "iterative-deepening" => Ok(Strategy::Iddfs),
            "bidirectional" | "bidi"               => Ok(Strategy::Bidirectional),
            "greedy" | "best-first"                => Ok(Strategy::Greedy),
            "astar" | "a*" | "a-star"              => Ok(Strategy::AStar),
            _ => Err(SearchError::UnknownStrategy(s.to_owned())),
        }
    }
}

/// Bounds for the depth-limited strategies, already validated.
#[derive(Copy, Clone, Debug)]
pub(crate) struct DepthBounds {
    pub limit:     u32,
    pub max_depth: u32,
}

/// Run `strategy` to completion on a fresh [`Run`].
pub(crate) fn execute(strategy: Strategy, run: Run<'_>, start: CityId, bounds: DepthBounds) -> SearchOutcome {
    match strategy {
        Strategy::Bfs    => bfs::bfs(run, start),
        Strategy::Dfs    => dfs::dfs(run, start),
        Strategy::Ucs    => best_first::best_first(run, start, Priority::Cost),
        Strategy::Greedy => best_first::best_first(run, start, Priority::Heuristic),
        Strategy::AStar  => best_first::best_first(run, start, Priority::CostPlusHeuristic),
        Strategy::Dls    => depth_limited::dls(run, start, bounds.limit),
        Strategy::Iddfs  => depth_limited::iddfs(run, start, bounds.max_depth),
        Strategy::Bidirectional => {
            let goal = run
                .goals
                .as_single()
                .expect("bidirectional goal count is checked during validation");
            bidirectional::bidirectional(run, start, goal)
        }
    }
}
