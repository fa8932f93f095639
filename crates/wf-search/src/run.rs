//! Per-invocation state shared by every strategy.
//!
//! A [`Run`] owns the counters, the discovered set, the observer notifier and
//! the clock for exactly one search.  Strategies drive it through the same
//! small vocabulary (`discover`, `explore_start`, `edge`, `explore_end`) so
//! the counters mean the same thing everywhere, and finish it with one of
//! `succeed`, `exhaust` or `cancel`.

use std::time::{Duration, Instant};

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use wf_core::CityId;
use wf_graph::Graph;

use crate::observer::Notifier;
use crate::{GoalSet, RunControl, SearchOutcome, SearchStats, Strategy, Termination};

pub(crate) const NO_PATH: &str = "no path found";
pub(crate) const CANCELLED: &str = "search cancelled";

pub(crate) struct Run<'a> {
    pub graph: &'a Graph,
    pub goals: &'a GoalSet,
    strategy:  Strategy,
    notifier:  Notifier<'a>,
    control:   &'a RunControl,
    delay:     Duration,
    stats:     SearchStats,
    seen:      FxHashSet<CityId>,
    started:   Instant,
}

impl<'a> Run<'a> {
    pub fn new(
        strategy: Strategy,
        graph:    &'a Graph,
        goals:    &'a GoalSet,
        notifier: Notifier<'a>,
        control:  &'a RunControl,
        delay:    Duration,
    ) -> Self {
        Self {
            graph,
            goals,
            strategy,
            notifier,
            control,
            delay,
            stats: SearchStats::default(),
            seen: FxHashSet::default(),
            started: Instant::now(),
        }
    }

    // ── Step vocabulary ───────────────────────────────────────────────────

    #[inline]
    pub fn cancelled(&self) -> bool {
        self.control.is_cancelled()
    }

    #[inline]
    pub fn is_goal(&self, city: CityId) -> bool {
        self.goals.contains(city)
    }

    /// Record `city` as placed on a frontier.  Returns `true` the first time.
    pub fn discover(&mut self, city: CityId) -> bool {
        let fresh = self.seen.insert(city);
        if fresh {
            self.stats.nodes_discovered += 1;
        }
        fresh
    }

    #[inline]
    pub fn edge(&mut self) {
        self.stats.edges_processed += 1;
    }

    /// First yield point of an expansion.
    pub fn explore_start(&mut self, city: CityId) {
        self.stats.nodes_explored += 1;
        trace!(strategy = %self.strategy, city = self.graph.name(city), "explore");
        self.notifier.explore_start(city);
        self.control.yield_step(self.delay);
    }

    /// Second yield point of an expansion.
    pub fn explore_end(&mut self, city: CityId) {
        self.notifier.explore_end(city);
        self.control.yield_step(self.delay);
    }

    pub fn iteration_boundary(&mut self, depth: u32) {
        debug!(depth, "iterative deepening iteration");
        self.notifier.iteration_boundary(depth);
    }

    // ── Terminal states ───────────────────────────────────────────────────

    /// Highlight `path` step by step and report success.
    pub fn succeed(mut self, path: Vec<CityId>) -> SearchOutcome {
        for (index, &city) in path.iter().enumerate() {
            self.notifier.path_step(city, index);
            self.control.yield_step(self.delay);
        }
        let cost = self.graph.path_cost(&path);
        let reached = path.last().copied();
        self.finish(Termination::Success, Some(path), Some(cost), reached, None)
    }

    pub fn exhaust(self, reason: impl Into<String>) -> SearchOutcome {
        self.finish(Termination::Exhausted, None, None, None, Some(reason.into()))
    }

    pub fn cancel(self) -> SearchOutcome {
        self.finish(Termination::Cancelled, None, None, None, Some(CANCELLED.to_owned()))
    }

    fn finish(
        mut self,
        termination:    Termination,
        path:           Option<Vec<CityId>>,
        cost:           Option<f64>,
        reached_goal:   Option<CityId>,
        failure_reason: Option<String>,
    ) -> SearchOutcome {
        let outcome = SearchOutcome {
            strategy: self.strategy,
            termination,
            path,
            cost,
            reached_goal,
            failure_reason,
            stats: self.stats,
            execution_time_ms: self.started.elapsed().as_millis() as u64,
        };
        debug!(
            strategy = %self.strategy,
            %termination,
            explored = outcome.stats.nodes_explored,
            discovered = outcome.stats.nodes_discovered,
            edges = outcome.stats.edges_processed,
            cost = ?outcome.cost,
            "search finished"
        );
        self.notifier.search_end(&outcome);
        outcome
    }
}
