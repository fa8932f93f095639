//! The record every strategy returns.

use std::fmt;

use wf_core::CityId;
use wf_graph::Graph;

use crate::Strategy;

/// How a search invocation ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Termination {
    /// A goal was reached and the path reconstructed.
    Success,
    /// The frontier emptied (or the depth bound was hit) without a goal.
    Exhausted,
    /// The caller cancelled the run between two expansion steps.
    Cancelled,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Termination::Success   => "success",
            Termination::Exhausted => "exhausted",
            Termination::Cancelled => "cancelled",
        })
    }
}

/// Counters reported identically by every strategy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchStats {
    /// Cities popped and processed.  Stale duplicates skipped on pop are
    /// not counted.
    pub nodes_explored: u64,
    /// Distinct cities ever placed on a frontier.  The start counts.
    pub nodes_discovered: u64,
    /// Neighbour roads examined during expansion, including roads back to
    /// cities already visited.
    pub edges_processed: u64,
}

/// Result of one search invocation.  Never mutated after it is returned.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchOutcome {
    pub strategy:          Strategy,
    pub termination:       Termination,
    /// Start → reached goal.  `Some` exactly when `termination` is `Success`.
    pub path:              Option<Vec<CityId>>,
    /// Road distance along `path` in km.
    pub cost:              Option<f64>,
    pub reached_goal:      Option<CityId>,
    /// Human-readable explanation for a non-success outcome.
    pub failure_reason:    Option<String>,
    pub stats:             SearchStats,
    /// Wall-clock duration including pacing delays.
    pub execution_time_ms: u64,
}

impl SearchOutcome {
    #[inline]
    pub fn success(&self) -> bool {
        self.termination == Termination::Success
    }

    /// Path length in cities (0 when there is no path).
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    /// Path as city names, for display.
    pub fn path_names<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.path
            .iter()
            .flatten()
            .map(|&c| graph.name(c))
            .collect()
    }
}
