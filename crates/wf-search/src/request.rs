//! Search requests and their validation.
//!
//! Requests name cities as strings, the way a caller or UI supplies them.
//! [`SearchRequest::validate`] resolves the names against a graph and rejects
//! every configuration error up front, producing a [`ValidatedRequest`] that
//! can run without any further failure mode.

use wf_core::{CityId, EngineConfig};
use wf_graph::Graph;

use crate::strategy::DepthBounds;
use crate::{GoalSet, SearchError, SearchResult, Strategy};

/// Optional per-request bounds.  Unset fields fall back to [`EngineConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Bound for depth-limited search.
    pub depth_limit: Option<u32>,
    /// Deepest iteration for iterative deepening.
    pub max_iterative_depth: Option<u32>,
}

/// A search as requested by name.
#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub strategy: Strategy,
    pub start:    String,
    pub goals:    Vec<String>,
    pub options:  SearchOptions,
}

impl SearchRequest {
    pub fn new<S: Into<String>>(
        strategy: Strategy,
        start:    impl Into<String>,
        goals:    impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            strategy,
            start:   start.into(),
            goals:   goals.into_iter().map(Into::into).collect(),
            options: SearchOptions::default(),
        }
    }

    pub fn options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn depth_limit(mut self, limit: u32) -> Self {
        self.options.depth_limit = Some(limit);
        self
    }

    pub fn max_iterative_depth(mut self, depth: u32) -> Self {
        self.options.max_iterative_depth = Some(depth);
        self
    }

    /// Resolve city names and check every precondition.
    ///
    /// Depth bounds are only checked for the strategy that reads them: the
    /// limit for DLS, the maximum depth for IDDFS.
    pub fn validate(&self, graph: &Graph, config: &EngineConfig) -> SearchResult<ValidatedRequest> {
        let resolve = |name: &str| {
            graph
                .city_id(name)
                .ok_or_else(|| SearchError::UnknownCity(name.to_owned()))
        };

        let start = resolve(&self.start)?;
        let goal_ids = self
            .goals
            .iter()
            .map(|g| resolve(g))
            .collect::<SearchResult<Vec<CityId>>>()?;
        let goals = GoalSet::new(goal_ids).ok_or(SearchError::NoGoals)?;

        if goals.contains(start) {
            return Err(SearchError::StartIsGoal(self.start.clone()));
        }
        if !self.strategy.supports_multi_goal() && goals.len() > 1 {
            return Err(SearchError::MultiGoalBidirectional(goals.len()));
        }

        let limit = self.options.depth_limit.unwrap_or(config.default_depth_limit);
        if self.strategy == Strategy::Dls && limit == 0 {
            return Err(SearchError::InvalidDepthLimit);
        }
        let max_depth = self
            .options
            .max_iterative_depth
            .unwrap_or(config.max_iterative_depth);
        if self.strategy == Strategy::Iddfs && max_depth == 0 {
            return Err(SearchError::InvalidMaxDepth);
        }

        Ok(ValidatedRequest {
            strategy: self.strategy,
            start,
            goals,
            bounds: DepthBounds { limit, max_depth },
        })
    }
}

/// A request whose cities exist and whose bounds are sane.
#[derive(Clone, Debug)]
pub struct ValidatedRequest {
    pub(crate) strategy: Strategy,
    pub(crate) start:    CityId,
    pub(crate) goals:    GoalSet,
    pub(crate) bounds:   DepthBounds,
}

impl ValidatedRequest {
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn start(&self) -> CityId {
        self.start
    }

    pub fn goals(&self) -> &GoalSet {
        &self.goals
    }

    pub fn depth_limit(&self) -> u32 {
        self.bounds.limit
    }

    pub fn max_iterative_depth(&self) -> u32 {
        self.bounds.max_depth
    }
}
