//! `TraceRecorder` — an observer that keeps every event for later replay.
//!
//! A renderer that cannot animate live (or a test) records a run once and
//! replays the events at its own pace.  The trace can also be written as CSV:
//!
//! ```csv
//! step,event,city,value
//! 0,explore_start,Berlin,
//! 1,explore_end,Berlin,
//! 2,path_step,Berlin,0
//! ```

use std::io::Write;

use csv::Writer;

use wf_core::CityId;
use wf_graph::Graph;

use crate::{SearchObserver, SearchOutcome, Termination};

/// One observer callback, in the order it happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TraceEvent {
    ExploreStart(CityId),
    ExploreEnd(CityId),
    PathStep { city: CityId, index: usize },
    IterationBoundary(u32),
    Finished(Termination),
}

impl TraceEvent {
    fn label(&self) -> &'static str {
        match self {
            TraceEvent::ExploreStart(_)      => "explore_start",
            TraceEvent::ExploreEnd(_)        => "explore_end",
            TraceEvent::PathStep { .. }      => "path_step",
            TraceEvent::IterationBoundary(_) => "iteration",
            TraceEvent::Finished(_)          => "finished",
        }
    }
}

#[derive(Debug, Default)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Cities in the order they were explored (repeats included).
    pub fn exploration_order(&self) -> Vec<CityId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::ExploreStart(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// Depths announced by iterative deepening.
    pub fn iterations(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::IterationBoundary(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    /// Write the trace as CSV with a header row, naming cities via `graph`.
    pub fn write_csv<W: Write>(&self, graph: &Graph, out: W) -> csv::Result<()> {
        let mut w = Writer::from_writer(out);
        w.write_record(["step", "event", "city", "value"])?;
        for (step, event) in self.events.iter().enumerate() {
            let (city, value) = match *event {
                TraceEvent::ExploreStart(c) | TraceEvent::ExploreEnd(c) => {
                    (graph.name(c).to_owned(), String::new())
                }
                TraceEvent::PathStep { city, index } => {
                    (graph.name(city).to_owned(), index.to_string())
                }
                TraceEvent::IterationBoundary(d) => (String::new(), d.to_string()),
                TraceEvent::Finished(t) => (String::new(), t.to_string()),
            };
            w.write_record([step.to_string(), event.label().to_owned(), city, value])?;
        }
        w.flush()?;
        Ok(())
    }
}

impl SearchObserver for TraceRecorder {
    fn on_explore_start(&mut self, city: CityId) {
        self.events.push(TraceEvent::ExploreStart(city));
    }

    fn on_explore_end(&mut self, city: CityId) {
        self.events.push(TraceEvent::ExploreEnd(city));
    }

    fn on_path_step(&mut self, city: CityId, index: usize) {
        self.events.push(TraceEvent::PathStep { city, index });
    }

    fn on_iteration_boundary(&mut self, depth: u32) {
        self.events.push(TraceEvent::IterationBoundary(depth));
    }

    fn on_search_end(&mut self, outcome: &SearchOutcome) {
        self.events.push(TraceEvent::Finished(outcome.termination));
    }
}
