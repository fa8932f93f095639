//! JSON summary of one outcome, with city ids resolved to names.

use serde::Serialize;

use wf_graph::Graph;
use wf_search::{SearchOutcome, SearchStats, Strategy, Termination};

#[derive(Serialize)]
pub struct Report<'a> {
    strategy:          Strategy,
    termination:       Termination,
    path:              Vec<&'a str>,
    cost_km:           Option<f64>,
    reached_goal:      Option<&'a str>,
    failure_reason:    Option<&'a str>,
    stats:             SearchStats,
    execution_time_ms: u64,
}

impl<'a> Report<'a> {
    pub fn new(graph: &'a Graph, outcome: &'a SearchOutcome) -> Self {
        Self {
            strategy:          outcome.strategy,
            termination:       outcome.termination,
            path:              outcome.path_names(graph),
            cost_km:           outcome.cost,
            reached_goal:      outcome.reached_goal.map(|c| graph.name(c)),
            failure_reason:    outcome.failure_reason.as_deref(),
            stats:             outcome.stats,
            execution_time_ms: outcome.execution_time_ms,
        }
    }
}
