//! Terminal renderer: prints each engine event as it happens.
//!
//! With a step delay this is the animation; with `--delay-ms 0` it is a
//! plain trace.  Every event is also kept in a [`TraceRecorder`] so the run
//! can be written out as CSV afterwards.

use wf_core::CityId;
use wf_graph::Graph;
use wf_search::{SearchObserver, SearchOutcome, TraceRecorder};

pub struct ConsoleObserver<'g> {
    graph:    &'g Graph,
    recorder: TraceRecorder,
    quiet:    bool,
}

impl<'g> ConsoleObserver<'g> {
    pub fn new(graph: &'g Graph, quiet: bool) -> Self {
        Self { graph, recorder: TraceRecorder::new(), quiet }
    }

    pub fn recorder(&self) -> &TraceRecorder {
        &self.recorder
    }
}

impl SearchObserver for ConsoleObserver<'_> {
    fn on_explore_start(&mut self, city: CityId) {
        self.recorder.on_explore_start(city);
        if !self.quiet {
            println!("  explore  {}", self.graph.name(city));
        }
    }

    fn on_explore_end(&mut self, city: CityId) {
        self.recorder.on_explore_end(city);
        if !self.quiet {
            println!("  done     {}", self.graph.name(city));
        }
    }

    fn on_path_step(&mut self, city: CityId, index: usize) {
        self.recorder.on_path_step(city, index);
        if !self.quiet {
            println!("  path[{index:>2}] {}", self.graph.name(city));
        }
    }

    fn on_iteration_boundary(&mut self, depth: u32) {
        self.recorder.on_iteration_boundary(depth);
        if !self.quiet {
            println!("  ── depth {depth} ──");
        }
    }

    fn on_search_end(&mut self, outcome: &SearchOutcome) {
        self.recorder.on_search_end(outcome);
        if !self.quiet {
            println!("  {}", outcome.termination);
        }
    }
}
