//! Progress observer trait: the seam between the engine and a renderer.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::warn;

use wf_core::CityId;

use crate::SearchOutcome;

/// Callbacks invoked by the strategies at each yield point.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  The engine never reads anything back from
/// an observer, so no observer can change which path is found.
///
/// # Example
///
/// ```rust,ignore
/// struct Console<'g>(&'g Graph);
///
/// impl SearchObserver for Console<'_> {
///     fn on_explore_start(&mut self, city: CityId) {
///         println!("exploring {}", self.0.name(city));
///     }
/// }
/// ```
pub trait SearchObserver {
    /// A city was popped and is about to be processed.
    fn on_explore_start(&mut self, _city: CityId) {}

    /// A city's successors have been generated.
    fn on_explore_end(&mut self, _city: CityId) {}

    /// Path highlight after success; `index` 0 is the start.
    fn on_path_step(&mut self, _city: CityId, _index: usize) {}

    /// Iterative deepening is starting the iteration bounded by `depth`.
    fn on_iteration_boundary(&mut self, _depth: u32) {}

    /// Called once with the final outcome.
    fn on_search_end(&mut self, _outcome: &SearchOutcome) {}
}

/// A [`SearchObserver`] that does nothing.  Use for headless runs.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

// ── Notifier ──────────────────────────────────────────────────────────────────

/// Forwards events to an observer, isolating the search from observer panics.
///
/// The first panic detaches the observer for the rest of the run; frontier and
/// visited state live on the strategy's stack and are untouched by it.
pub(crate) struct Notifier<'a> {
    observer: Option<&'a mut dyn SearchObserver>,
}

impl<'a> Notifier<'a> {
    pub fn new(observer: &'a mut dyn SearchObserver) -> Self {
        Self { observer: Some(observer) }
    }

    fn call(&mut self, event: &'static str, f: impl FnOnce(&mut dyn SearchObserver)) {
        let Some(observer) = self.observer.as_mut() else {
            return;
        };
        let result = catch_unwind(AssertUnwindSafe(|| f(&mut **observer)));
        if result.is_err() {
            warn!(event, "observer panicked; detached for the rest of the run");
            self.observer = None;
        }
    }

    pub fn explore_start(&mut self, city: CityId) {
        self.call("explore_start", |o| o.on_explore_start(city));
    }

    pub fn explore_end(&mut self, city: CityId) {
        self.call("explore_end", |o| o.on_explore_end(city));
    }

    pub fn path_step(&mut self, city: CityId, index: usize) {
        self.call("path_step", |o| o.on_path_step(city, index));
    }

    pub fn iteration_boundary(&mut self, depth: u32) {
        self.call("iteration_boundary", |o| o.on_iteration_boundary(depth));
    }

    pub fn search_end(&mut self, outcome: &SearchOutcome) {
        self.call("search_end", |o| o.on_search_end(outcome));
    }
}
