use thiserror::Error;

use wf_core::CoreError;

/// Configuration errors, reported before any search state exists.
///
/// A search that runs and finds nothing is not an error; it comes back as a
/// [`SearchOutcome`][crate::SearchOutcome] with a failure reason.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("unknown search strategy {0:?}")]
    UnknownStrategy(String),

    #[error("city {0:?} not found in graph")]
    UnknownCity(String),

    #[error("at least one goal city is required")]
    NoGoals,

    #[error("start city {0:?} is also a goal")]
    StartIsGoal(String),

    #[error("bidirectional search needs exactly one goal, got {0}")]
    MultiGoalBidirectional(usize),

    #[error("depth limit must be at least 1")]
    InvalidDepthLimit,

    #[error("maximum iterative depth must be at least 1")]
    InvalidMaxDepth,

    #[error("a search is already running on this control handle")]
    AlreadyRunning,

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type SearchResult<T> = Result<T, SearchError>;
