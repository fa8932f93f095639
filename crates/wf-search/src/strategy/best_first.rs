//! Priority-queue search shared by UCS, greedy best-first and A*.
//!
//! The three differ only in the key a frontier entry is ranked by.  Entries
//! are never updated in place: a cheaper route to a city simply pushes another
//! entry, and whichever copy pops first closes the city.  Later copies are
//! stale and are skipped without counting as explored.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use wf_core::CityId;

use crate::run::{Run, NO_PATH};
use crate::tree::SearchTree;
use crate::SearchOutcome;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Priority {
    /// Accumulated road distance (UCS).
    Cost,
    /// Straight-line distance to the nearest goal (greedy).
    Heuristic,
    /// Accumulated distance plus heuristic (A*).
    CostPlusHeuristic,
}

/// Frontier entry.  Ordered so that `BinaryHeap` pops the lowest key first
/// and, among equal keys, the earliest pushed.
#[derive(Debug)]
struct Entry {
    key:    f64,
    seq:    u64,
    city:   CityId,
    parent: Option<CityId>,
    cost:   f64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

pub(crate) fn best_first(mut run: Run<'_>, start: CityId, priority: Priority) -> SearchOutcome {
    let graph = run.graph;
    let goals = run.goals;
    let key = |city: CityId, cost: f64| match priority {
        Priority::Cost              => cost,
        Priority::Heuristic         => goals.heuristic(graph, city),
        Priority::CostPlusHeuristic => cost + goals.heuristic(graph, city),
    };

    let mut open: BinaryHeap<Entry> = BinaryHeap::new();
    let mut closed: FxHashSet<CityId> = FxHashSet::default();
    let mut tree = SearchTree::new(start);
    let mut seq = 0u64;

    run.discover(start);
    open.push(Entry { key: key(start, 0.0), seq, city: start, parent: None, cost: 0.0 });

    loop {
        if run.cancelled() {
            return run.cancel();
        }
        let Some(Entry { city, parent, cost, .. }) = open.pop() else { break };

        if !closed.insert(city) {
            continue;
        }
        if let Some(parent) = parent {
            tree.attach(city, parent);
        }

        run.explore_start(city);
        if run.is_goal(city) {
            return run.succeed(tree.path_to(city));
        }

        for (next, km) in graph.neighbors(city) {
            run.edge();
            if closed.contains(&next) {
                continue;
            }
            run.discover(next);
            seq += 1;
            let next_cost = cost + km;
            open.push(Entry {
                key: key(next, next_cost),
                seq,
                city: next,
                parent: Some(city),
                cost: next_cost,
            });
        }
        run.explore_end(city);
    }

    run.exhaust(NO_PATH)
}
