//! The search boundary: one graph, one configuration, one control handle.

use tracing::debug;

use wf_core::EngineConfig;
use wf_graph::Graph;

use crate::observer::Notifier;
use crate::run::Run;
use crate::strategy::execute;
use crate::{
    RunControl, SearchObserver, SearchOptions, SearchOutcome, SearchRequest, SearchResult,
    Strategy, ValidatedRequest,
};

/// Runs searches over a read-only [`Graph`].
///
/// # Example
///
/// ```rust,ignore
/// let engine = SearchEngine::new(&graph, EngineConfig::headless())?;
/// let outcome = engine.run_search("astar", "A", &["C"], &SearchOptions::default(), &mut NoopObserver)?;
/// assert_eq!(outcome.path_names(&graph), ["A", "B", "C"]);
/// ```
pub struct SearchEngine<'g> {
    graph:   &'g Graph,
    config:  EngineConfig,
    control: RunControl,
}

impl<'g> SearchEngine<'g> {
    /// Fails if `config` carries zero depth bounds.
    pub fn new(graph: &'g Graph, config: EngineConfig) -> SearchResult<Self> {
        config.validate()?;
        Ok(Self { graph, config, control: RunControl::new() })
    }

    /// Use an existing control handle, e.g. one already wired to a UI.
    pub fn with_control(mut self, control: RunControl) -> Self {
        self.control = control;
        self
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Handle for pausing, resuming or cancelling the run in flight.
    pub fn control(&self) -> &RunControl {
        &self.control
    }

    /// Validate `request` against this engine's graph and configuration.
    pub fn prepare(&self, request: &SearchRequest) -> SearchResult<ValidatedRequest> {
        request.validate(self.graph, &self.config)
    }

    /// Run a validated request to a terminal state.
    ///
    /// The only error is [`SearchError::AlreadyRunning`][crate::SearchError::AlreadyRunning];
    /// exhausted and cancelled searches are outcomes.
    pub fn run(
        &self,
        request:  &ValidatedRequest,
        observer: &mut dyn SearchObserver,
    ) -> SearchResult<SearchOutcome> {
        let _guard = self.control.begin()?;
        debug!(
            strategy = %request.strategy,
            start = self.graph.name(request.start),
            goals = request.goals.len(),
            "search started"
        );
        let run = Run::new(
            request.strategy,
            self.graph,
            &request.goals,
            Notifier::new(observer),
            &self.control,
            self.config.step_delay(),
        );
        Ok(execute(request.strategy, run, request.start, request.bounds))
    }

    /// Name-based entry point: parse the strategy, validate, run.
    pub fn run_search(
        &self,
        strategy: &str,
        start:    &str,
        goals:    &[&str],
        options:  &SearchOptions,
        observer: &mut dyn SearchObserver,
    ) -> SearchResult<SearchOutcome> {
        let strategy: Strategy = strategy.parse()?;
        let request = SearchRequest::new(strategy, start, goals.iter().copied())
            .options(options.clone());
        let validated = self.prepare(&request)?;
        self.run(&validated, observer)
    }
}
